use crate::core::PlatformDetector;
use crate::ui::{format_platform, format_version};
use anyhow::{Context, Result};
use clap::ArgMatches;

pub fn execute(detector: &PlatformDetector, matches: &ArgMatches) -> Result<()> {
    let platform = detector.detect_platform();

    if matches.get_flag("code") {
        println!("{}", platform.code());
    } else {
        println!("{}", format_platform(platform));
    }
    Ok(())
}

pub fn pi_version(detector: &PlatformDetector) -> Result<()> {
    let version = detector
        .detect_pi_version()
        .context("Failed to detect Raspberry Pi version")?;
    println!("{}", format_version(version));
    Ok(())
}

pub fn pi_revision(detector: &PlatformDetector) -> Result<()> {
    let revision = detector
        .detect_pi_revision()
        .context("Failed to detect Raspberry Pi revision")?;
    println!("{}", revision);
    Ok(())
}

pub fn cubie_version(detector: &PlatformDetector) -> Result<()> {
    println!("{}", format_version(detector.detect_cubie_version()));
    Ok(())
}
