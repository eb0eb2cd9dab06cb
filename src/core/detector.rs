use crate::core::hardware_info::{self, HardwareInfo, DEFAULT_HARDWARE_INFO_PATH};
use crate::core::platform_kind::PlatformKind;
use crate::error::Result;
use crate::platform::board_name::{BoardNameRegistry, MRAA};
use crate::platform::identity::{HostIdentity, PlatformIdentity};
use std::path::{Path, PathBuf};

/// Platform-identification substrings of the Beaglebone Black images
const BEAGLEBONE_MARKERS: [&str; 3] = [
    "armv7l-with-debian",
    "armv7l-with-ubuntu",
    "armv7l-with-glibc2.4",
];

/// Board name libmraa reports on a Minnowboard
pub const MINNOWBOARD_MAX: &str = "MinnowBoard MAX";

/// Classifies the board the process is running on.
///
/// The detector holds no state between calls: the hardware-info source is
/// opened, read and closed by every operation.
pub struct PlatformDetector {
    hardware_info_path: PathBuf,
    identity: Box<dyn PlatformIdentity>,
    board_names: BoardNameRegistry,
}

impl PlatformDetector {
    /// Detector for the host: `/proc/cpuinfo`, the host identity and the
    /// built-in board-name providers.
    pub fn new() -> Self {
        Self {
            hardware_info_path: PathBuf::from(DEFAULT_HARDWARE_INFO_PATH),
            identity: Box::new(HostIdentity),
            board_names: BoardNameRegistry::default(),
        }
    }

    pub fn with_hardware_info_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.hardware_info_path = path.into();
        self
    }

    pub fn with_identity<I: PlatformIdentity + 'static>(mut self, identity: I) -> Self {
        self.identity = Box::new(identity);
        self
    }

    pub fn with_board_names(mut self, registry: BoardNameRegistry) -> Self {
        self.board_names = registry;
        self
    }

    pub fn hardware_info_path(&self) -> &Path {
        &self.hardware_info_path
    }

    pub fn board_names(&self) -> &BoardNameRegistry {
        &self.board_names
    }

    /// Platform-identification string the Beaglebone check runs against
    pub fn platform_identity(&self) -> String {
        self.identity.describe()
    }

    /// Read the hardware-info source.
    pub fn hardware_info(&self) -> Result<HardwareInfo> {
        HardwareInfo::read(&self.hardware_info_path)
    }

    /// Classify the current board. First match wins:
    ///
    /// 1. Raspberry Pi, by the `Hardware` field
    /// 2. Beaglebone Black, by the platform-identification string
    /// 3. Minnowboard, by the MRAA board name
    ///
    /// Never fails; anything unrecognised or unreadable is `Unknown`.
    pub fn detect_platform(&self) -> PlatformKind {
        match self.detect_pi_version() {
            Ok(Some(version)) => {
                log::debug!("Raspberry Pi {} detected", version);
                return PlatformKind::RaspberryPi;
            }
            Ok(None) => {}
            Err(e) => log::debug!("Skipping Raspberry Pi check: {}", e),
        }

        // TODO: match the Beaglebone Black on its cpuinfo Hardware value instead
        let identity = self.identity.describe().to_lowercase();
        if BEAGLEBONE_MARKERS.iter().any(|m| identity.contains(m)) {
            log::debug!("Beaglebone Black detected from '{}'", identity);
            return PlatformKind::BeagleboneBlack;
        }

        let provider = self.board_names.resolve(MRAA);
        if provider.platform_name().as_deref() == Some(MINNOWBOARD_MAX) {
            log::debug!("Minnowboard detected through {}", provider.name());
            return PlatformKind::Minnowboard;
        }

        PlatformKind::Unknown
    }

    /// Raspberry Pi version: 1 for `BCM2708`, 2 for `BCM2709`, `None` for
    /// any other board.
    ///
    /// Fails with `SourceUnavailable` when the hardware-info source cannot
    /// be read.
    pub fn detect_pi_version(&self) -> Result<Option<u8>> {
        Ok(self.hardware_info()?.pi_version())
    }

    /// Raspberry Pi revision class, 1 or 2, from the first `Revision` line.
    ///
    /// Fails with `RevisionUndetermined` when no `Revision` line exists.
    pub fn detect_pi_revision(&self) -> Result<u8> {
        hardware_info::read_revision_class(&self.hardware_info_path)
    }

    /// Cubieboard version: 4 for `sun9i`, 5 for `sun8i`, otherwise `None`.
    /// An unreadable source also gives `None`.
    pub fn detect_cubie_version(&self) -> Option<u8> {
        match self.hardware_info() {
            Ok(info) => info.cubie_version(),
            Err(e) => {
                log::debug!("Skipping Cubieboard check: {}", e);
                None
            }
        }
    }
}

impl Default for PlatformDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PlatformDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformDetector")
            .field("hardware_info_path", &self.hardware_info_path)
            .field("board_names", &self.board_names)
            .finish_non_exhaustive()
    }
}
