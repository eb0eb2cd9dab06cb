//! Hardware-descriptor parsing.
//!
//! The descriptor source is a `Key : Value` listing such as `/proc/cpuinfo`.
//! Everything here works on text or a `BufRead`, so captured dumps from
//! other machines parse the same way as the live file.

use crate::error::{PlatformError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Default location of the hardware-descriptor source on Linux
pub const DEFAULT_HARDWARE_INFO_PATH: &str = "/proc/cpuinfo";

static HARDWARE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?miR)^Hardware\s+:\s+(\w+)$").expect("hardware pattern is valid")
});

static REVISION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^Revision\s+:\s+.*(\w{4})$").expect("revision pattern is valid")
});

// Revision codes of the original Model B boards; everything else is class 2.
const REVISION_ONE_CODES: [&str; 3] = ["0000", "0002", "0003"];

/// Full text of a hardware-descriptor source, read once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardwareInfo {
    path: Option<PathBuf>,
    text: String,
}

impl HardwareInfo {
    /// Read the whole source at `path`.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| PlatformError::source_unavailable(path, e))?;

        Ok(Self {
            path: Some(path.to_path_buf()),
            text,
        })
    }

    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Self {
            path: None,
            text: text.into(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Value of the first `Hardware : <word>` line
    pub fn hardware(&self) -> Option<&str> {
        hardware_field(&self.text)
    }

    /// Value of the first `key : value` line, matching the key without case.
    ///
    /// Unlike [`HardwareInfo::hardware`] this accepts any value text, which
    /// makes it usable for fields like `Model` or `Serial`.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.text.lines().find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.trim().eq_ignore_ascii_case(key) {
                Some(value.trim())
            } else {
                None
            }
        })
    }

    pub fn pi_version(&self) -> Option<u8> {
        pi_version_for(&self.text)
    }

    pub fn cubie_version(&self) -> Option<u8> {
        cubie_version_for(&self.text)
    }

    /// Revision class of the first `Revision` line, if there is one
    pub fn revision_class(&self) -> Option<u8> {
        self.text.lines().find_map(revision_class_of_line)
    }
}

/// Captured value of the first `Hardware : <word>` line in `text`
pub fn hardware_field(text: &str) -> Option<&str> {
    HARDWARE_LINE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Raspberry Pi version for a descriptor text: `BCM2708` is 1, `BCM2709` is 2.
pub fn pi_version_for(text: &str) -> Option<u8> {
    match hardware_field(text)? {
        "BCM2708" => Some(1),
        "BCM2709" => Some(2),
        _ => None,
    }
}

/// Cubieboard version for a descriptor text: `sun9i` is 4, `sun8i` is 5.
pub fn cubie_version_for(text: &str) -> Option<u8> {
    match hardware_field(text)? {
        "sun9i" => Some(4),
        "sun8i" => Some(5),
        _ => None,
    }
}

/// Revision class of a single line, or `None` if it is not a `Revision` line.
///
/// Only the last four word characters count, so over-volting prefixes such
/// as `1000` in `Revision : 10000002` are ignored.
pub fn revision_class_of_line(line: &str) -> Option<u8> {
    let caps = REVISION_LINE.captures(line)?;
    let code = caps.get(1)?.as_str();

    if REVISION_ONE_CODES.contains(&code) {
        Some(1)
    } else {
        Some(2)
    }
}

/// Scan `reader` line by line and classify the first `Revision` line.
///
/// Scanning stops at the first match. `origin` only names the source in
/// the returned errors.
pub fn revision_class<R: BufRead>(reader: R, origin: &Path) -> Result<u8> {
    for line in reader.lines() {
        let line = line.map_err(|e| PlatformError::source_unavailable(origin, e))?;
        if let Some(class) = revision_class_of_line(&line) {
            log::debug!("Revision line {:?} gives class {}", line, class);
            return Ok(class);
        }
    }

    Err(PlatformError::revision_undetermined(origin))
}

/// Open `path` and classify its first `Revision` line.
pub fn read_revision_class<P: AsRef<Path>>(path: P) -> Result<u8> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PlatformError::source_unavailable(path, e))?;
    revision_class(BufReader::new(file), path)
}
