// Command handlers module
pub mod config;
pub mod detect;
pub mod info;
pub mod version;

// Re-exports for cleaner imports
pub use detect::execute as detect;
pub use info::execute as info;
pub use version::execute as version;
