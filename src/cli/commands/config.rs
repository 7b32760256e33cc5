//! Config Command
//!
//! Manage studygen configuration.
//!
//! Usage:
//!   studygen config show [-f json]
//!   studygen config path
//!   studygen config init [-g] [--force]

use crate::config::ConfigLoader;
use crate::types::Result;

/// Show merged effective configuration
pub fn show(format: &str) -> Result<()> {
    ConfigLoader::show_config(format == "json")
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Initialize configuration
pub fn init(global: bool, force: bool) -> Result<()> {
    let config_path = if global {
        ConfigLoader::init_global(force)?
    } else {
        ConfigLoader::init_project(force)?
    };

    println!("✓ Initialized configuration");
    println!("  Config: {}", config_path.display());
    println!();
    println!("Set GEMINI_API_KEY before generating study aids.");
    Ok(())
}
