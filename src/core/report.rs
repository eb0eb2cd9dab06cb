use crate::core::detector::PlatformDetector;
use crate::core::platform_kind::PlatformKind;
use serde::Serialize;
use std::path::PathBuf;

/// Every detection result for one machine, gathered in a single pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionReport {
    pub platform: PlatformKind,
    pub platform_code: u8,
    pub platform_identity: String,
    pub hardware_info_path: PathBuf,
    /// `Hardware` field of the source, if present
    pub hardware: Option<String>,
    /// `Model` field of the source, if present
    pub model: Option<String>,
    pub pi_version: Option<u8>,
    pub pi_revision: Option<u8>,
    pub cubie_version: Option<u8>,
    /// Errors from probes that are allowed to fail
    pub errors: Vec<String>,
}

/// Run every probe of `detector`. Probe failures are recorded, not returned.
pub fn collect_report(detector: &PlatformDetector) -> DetectionReport {
    let mut errors = Vec::new();

    let platform = detector.detect_platform();

    let (hardware, model) = match detector.hardware_info() {
        Ok(info) => (
            info.hardware().map(str::to_string),
            info.field("Model").map(str::to_string),
        ),
        Err(e) => {
            errors.push(e.to_string());
            (None, None)
        }
    };

    let pi_version = detector.detect_pi_version().unwrap_or(None);

    // Revision only means something on a Pi
    let pi_revision = if pi_version.is_some() {
        match detector.detect_pi_revision() {
            Ok(revision) => Some(revision),
            Err(e) => {
                errors.push(e.to_string());
                None
            }
        }
    } else {
        None
    };

    DetectionReport {
        platform,
        platform_code: platform.code(),
        platform_identity: detector.platform_identity(),
        hardware_info_path: detector.hardware_info_path().to_path_buf(),
        hardware,
        model,
        pi_version,
        pi_revision,
        cubie_version: detector.detect_cubie_version(),
        errors,
    }
}
