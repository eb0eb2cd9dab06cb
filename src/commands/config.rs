use crate::core::DetectorConfig;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => show(),
        Some(("path", _)) => path(),
        Some(("set-cpuinfo", sub_matches)) => set_cpuinfo(sub_matches),
        Some(("reset", _)) => reset(),
        _ => {
            println!("Use 'sbc-platform config --help' for more information.");
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let config = DetectorConfig::load().context("Failed to load config")?;
    let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
    println!("{}", json);
    Ok(())
}

fn path() -> Result<()> {
    let path = DetectorConfig::get_config_path()?;
    println!("{}", path.display());
    Ok(())
}

fn set_cpuinfo(matches: &clap::ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .context("Path argument is required")?;
    let path = PathBuf::from(path);

    if !path.is_file() {
        println!(
            "{} {}",
            "Warning:".yellow().bold(),
            format!("{} is not a readable file", path.display()).yellow()
        );
    }

    let config_path = DetectorConfig::get_config_path()?;
    let mut config = DetectorConfig::load_from(&config_path)?;
    config.set_hardware_info_path(path.clone());
    config.save_to(&config_path).context("Failed to save config")?;

    println!(
        "{} {}",
        "Hardware info source set to:".green(),
        path.display().to_string().white().bold()
    );
    Ok(())
}

fn reset() -> Result<()> {
    DetectorConfig::default()
        .save()
        .context("Failed to save config")?;
    println!("{}", "Configuration reset to defaults".green());
    Ok(())
}
