use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};

use sbc_platform::commands;
use sbc_platform::core::DetectorConfig;
use sbc_platform::init_logging;

fn main() -> Result<()> {
    let matches = Command::new("sbc-platform")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Detect which single-board computer this program runs on")
        .disable_version_flag(true)
        .arg(
            Arg::new("cpuinfo")
                .long("cpuinfo")
                .value_name("PATH")
                .global(true)
                .help("Read hardware info from PATH instead of /proc/cpuinfo"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .help("Log detection decisions")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("detect")
                .about("Print the detected platform")
                .arg(
                    Arg::new("code")
                        .long("code")
                        .help("Print only the numeric platform code")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("pi-version").about("Print the Raspberry Pi version (1, 2 or -)"))
        .subcommand(Command::new("pi-revision").about("Print the Raspberry Pi revision class (1 or 2)"))
        .subcommand(
            Command::new("cubie-version").about("Print the Cubieboard version (4, 5 or -)"),
        )
        .subcommand(
            Command::new("info")
                .about("Show every detection result")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the report as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Manage the detector configuration")
                .subcommand(Command::new("show").about("Print the effective configuration"))
                .subcommand(Command::new("path").about("Print the configuration file path"))
                .subcommand(
                    Command::new("set-cpuinfo")
                        .about("Persist a hardware info source path")
                        .arg(
                            Arg::new("path")
                                .help("Path of the hardware info file")
                                .required(true)
                                .index(1),
                        ),
                )
                .subcommand(Command::new("reset").about("Restore the default configuration")),
        )
        .subcommand(Command::new("version").about("Show version information"))
        .get_matches();

    let level = if matches.get_flag("verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    init_logging(level);

    match matches.subcommand() {
        Some(("config", sub_matches)) => return commands::config::execute(sub_matches),
        Some(("version", _)) => return commands::version(),
        _ => {}
    }

    let mut config = DetectorConfig::load().context("Failed to load config")?;
    if let Some(path) = matches.get_one::<String>("cpuinfo") {
        config.set_hardware_info_path(path.into());
    }
    let detector = config.build_detector();
    log::debug!("Using {:?}", detector);

    match matches.subcommand() {
        Some(("detect", sub_matches)) => commands::detect(&detector, sub_matches),
        Some(("pi-version", _)) => commands::detect::pi_version(&detector),
        Some(("pi-revision", _)) => commands::detect::pi_revision(&detector),
        Some(("cubie-version", _)) => commands::detect::cubie_version(&detector),
        Some(("info", sub_matches)) => commands::info(&detector, sub_matches),
        _ => {
            let platform = detector.detect_platform();
            println!("{}", sbc_platform::ui::format_platform(platform));
            Ok(())
        }
    }
}
