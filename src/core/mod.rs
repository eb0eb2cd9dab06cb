// Core detection logic

pub mod config;
pub mod detector;
pub mod hardware_info;
pub mod platform_kind;
pub mod report;

// Re-export commonly used items
pub use config::DetectorConfig;
pub use detector::PlatformDetector;
pub use hardware_info::HardwareInfo;
pub use platform_kind::PlatformKind;
pub use report::{collect_report, DetectionReport};
