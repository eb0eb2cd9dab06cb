// Host and vendor capability probes

pub mod board_name;
pub mod identity;

// Re-exports for cleaner imports
pub use board_name::{
    BoardNameProvider, BoardNameRegistry, MraaBoardNameProvider, NullBoardNameProvider,
    StaticBoardNameProvider, MRAA,
};
pub use identity::{HostIdentity, PlatformIdentity, StaticIdentity};
