use crate::core::{collect_report, PlatformDetector};
use crate::ui::format_report;
use anyhow::{Context, Result};
use clap::ArgMatches;

pub fn execute(detector: &PlatformDetector, matches: &ArgMatches) -> Result<()> {
    let report = collect_report(detector);

    if matches.get_flag("json") {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        format_report(&report);
    }

    Ok(())
}
