use crate::error::PlatformError;
use serde::{Deserialize, Serialize};
use std::fmt;

// Numeric platform identifiers. Driver code compares against these by value.
pub const UNKNOWN: u8 = 0;
pub const RASPBERRY_PI: u8 = 1;
pub const BEAGLEBONE_BLACK: u8 = 2;
pub const MINNOWBOARD: u8 = 3;
pub const SUNXI: u8 = 4;

/// Classification of the board the process is running on.
///
/// `Sunxi` is reserved: no detection rule currently produces it, but the
/// value is kept so code comparing against code `4` keeps working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PlatformKind {
    #[default]
    Unknown = UNKNOWN,
    RaspberryPi = RASPBERRY_PI,
    BeagleboneBlack = BEAGLEBONE_BLACK,
    Minnowboard = MINNOWBOARD,
    Sunxi = SUNXI,
}

impl PlatformKind {
    pub const ALL: [PlatformKind; 5] = [
        PlatformKind::Unknown,
        PlatformKind::RaspberryPi,
        PlatformKind::BeagleboneBlack,
        PlatformKind::Minnowboard,
        PlatformKind::Sunxi,
    ];

    /// Numeric code of this platform
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Human readable board family name
    pub fn name(self) -> &'static str {
        match self {
            PlatformKind::Unknown => "Unknown",
            PlatformKind::RaspberryPi => "Raspberry Pi",
            PlatformKind::BeagleboneBlack => "Beaglebone Black",
            PlatformKind::Minnowboard => "Minnowboard",
            PlatformKind::Sunxi => "Allwinner sunxi",
        }
    }
}

impl TryFrom<u8> for PlatformKind {
    type Error = PlatformError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        PlatformKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or(PlatformError::UnknownPlatformCode(code))
    }
}

impl From<PlatformKind> for u8 {
    fn from(kind: PlatformKind) -> Self {
        kind.code()
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
