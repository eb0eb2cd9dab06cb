use crate::core::{DetectionReport, PlatformKind};
use colored::*;

/// Format an optional version number, `-` when absent
pub fn format_version(version: Option<u8>) -> String {
    match version {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Platform name followed by its numeric code
pub fn format_platform(kind: PlatformKind) -> String {
    format!("{} ({})", kind.name(), kind.code())
}

fn colored_platform(kind: PlatformKind) -> ColoredString {
    match kind {
        PlatformKind::Unknown => format_platform(kind).yellow(),
        _ => format_platform(kind).green().bold(),
    }
}

fn print_row(label: &str, value: &str) {
    println!("  {:<22} {}", format!("{}:", label).white(), value);
}

pub fn format_report(report: &DetectionReport) {
    println!("\n{}", "PLATFORM DETECTION".bold().bright_cyan());
    println!("{}", "=".repeat(60));

    println!("  {:<22} {}", "Platform:".white(), colored_platform(report.platform));
    print_row("Platform identity", &report.platform_identity);
    print_row(
        "Hardware info source",
        &report.hardware_info_path.display().to_string(),
    );
    print_row("Hardware", report.hardware.as_deref().unwrap_or("-"));
    if let Some(model) = &report.model {
        print_row("Model", model);
    }

    println!("\n{}", "Board revisions".bold().cyan());
    print_row("Raspberry Pi version", &format_version(report.pi_version));
    print_row("Raspberry Pi revision", &format_version(report.pi_revision));
    print_row("Cubieboard version", &format_version(report.cubie_version));

    if !report.errors.is_empty() {
        println!("\n{}", "Warnings".bold().yellow());
        for error in &report.errors {
            println!("  {} {}", "!".yellow(), error.dimmed());
        }
    }

    println!();
}
