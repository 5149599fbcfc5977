//! `SimConfig` from an optional TOML file.
//!
//! ```toml
//! echo_inputs = false
//! wrap_around = true
//! ```
//!
//! Missing keys keep their defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lb_core::SimConfig;

/// Read `path`, or return the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let raw = fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    parse_config(&raw).with_context(|| format!("parse config {}", path.display()))
}

pub fn parse_config(raw: &str) -> Result<SimConfig> {
    Ok(toml::from_str(raw)?)
}
