//! Runtime detection of single-board-computer platforms.
//!
//! ```no_run
//! use sbc_platform::{detect_platform, detect_pi_revision, PlatformKind};
//!
//! if detect_platform() == PlatformKind::RaspberryPi {
//!     let bus = if detect_pi_revision()? == 1 { 0 } else { 1 };
//!     println!("default I2C bus: {}", bus);
//! }
//! # Ok::<(), sbc_platform::PlatformError>(())
//! ```

// Re-export error types
pub mod error;
pub use error::{PlatformError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::platform_kind::{BEAGLEBONE_BLACK, MINNOWBOARD, RASPBERRY_PI, SUNXI, UNKNOWN};
pub use crate::core::{DetectorConfig, HardwareInfo, PlatformDetector, PlatformKind};

/// Classify the board this process runs on. Never fails.
pub fn detect_platform() -> PlatformKind {
    PlatformDetector::new().detect_platform()
}

/// Raspberry Pi version (1 or 2), or `None` on other boards.
pub fn detect_pi_version() -> Result<Option<u8>> {
    PlatformDetector::new().detect_pi_version()
}

/// Raspberry Pi revision class (1 or 2).
pub fn detect_pi_revision() -> Result<u8> {
    PlatformDetector::new().detect_pi_revision()
}

/// Cubieboard version (4 or 5), or `None` on other boards.
pub fn detect_cubie_version() -> Option<u8> {
    PlatformDetector::new().detect_cubie_version()
}

// Initialize logging
pub fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
