//! Configuration loading and raw TOML structures

pub mod file_config;
mod loader;

pub use file_config::FileConfig;
pub use loader::ConfigLoader;
