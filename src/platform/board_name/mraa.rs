use super::{BoardNameProvider, MRAA};
use crate::error::{PlatformError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Command-line tool shipped with libmraa
pub const MRAA_GPIO_BINARY: &str = "mraa-gpio";

/// Board name as reported by libmraa, queried through `mraa-gpio version`.
#[derive(Debug, Clone)]
pub struct MraaBoardNameProvider {
    binary: PathBuf,
}

impl MraaBoardNameProvider {
    /// Find `mraa-gpio` on the `PATH`.
    pub fn locate() -> Result<Self> {
        let binary = which::which(MRAA_GPIO_BINARY).map_err(|e| {
            PlatformError::capability_missing(format!("{} not found: {}", MRAA_GPIO_BINARY, e))
        })?;
        Ok(Self { binary })
    }

    /// Use the `mraa-gpio` binary at `binary`.
    pub fn at<P: Into<PathBuf>>(binary: P) -> Result<Self> {
        let binary = binary.into();
        if !binary.is_file() {
            return Err(PlatformError::capability_missing(format!(
                "{} does not exist",
                binary.display()
            )));
        }
        Ok(Self { binary })
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl BoardNameProvider for MraaBoardNameProvider {
    fn name(&self) -> &str {
        MRAA
    }

    fn platform_name(&self) -> Option<String> {
        let output = match Command::new(&self.binary).arg("version").output() {
            Ok(output) => output,
            Err(e) => {
                log::debug!("Failed to run {}: {}", self.binary.display(), e);
                return None;
            }
        };

        if !output.status.success() {
            log::debug!("{} exited with {}", self.binary.display(), output.status);
            return None;
        }

        parse_version_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Extract the platform name from `Version v1.9.0 on MinnowBoard MAX`.
pub(crate) fn parse_version_output(stdout: &str) -> Option<String> {
    let line = stdout.lines().find(|l| l.trim_start().starts_with("Version"))?;
    let (_, platform) = line.split_once(" on ")?;
    let platform = platform.trim();

    if platform.is_empty() {
        None
    } else {
        Some(platform.to_string())
    }
}
