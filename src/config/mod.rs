// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration: base option overrides,
//! custom presets and class names, loaded from and saved to a
//! `toasts.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use toaster::config::{self, Config};
//! use toaster::notifications::PartialOptions;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Register a preset
//! config.presets.insert(
//!     "saved".to_string(),
//!     PartialOptions::new().with_toast_class("toast--saved"),
//! );
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```
//!
//! A configuration file looks like:
//!
//! ```toml
//! diagnostics_capacity = 500
//!
//! [defaults]
//! position = "bottom"
//! duration = 4000
//!
//! [presets.warning]
//! toast_class = "toast--warning"
//! timeout_on_remove = 300
//!
//! [classes]
//! toast = "snackbar"
//! ```

pub mod defaults;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::diagnostics::BufferCapacity;
use crate::error::Result;
use crate::notifications::{ClassNames, PartialOptions};

const CONFIG_FILE: &str = "toasts.toml";
const APP_NAME: &str = "Toaster";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Diagnostics ring buffer size, clamped to the supported range. Read by
    /// [`DiagnosticsCollector::from_config`](crate::diagnostics::DiagnosticsCollector::from_config).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics_capacity: Option<usize>,
    /// Overrides applied to the built-in base options.
    pub defaults: PartialOptions,
    /// Additional presets; an entry named like a built-in replaces it.
    pub presets: BTreeMap<String, PartialOptions>,
    pub classes: ClassNames,
}

impl Config {
    /// Capacity for a [`DiagnosticsCollector`](crate::diagnostics::DiagnosticsCollector).
    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        BufferCapacity::from(self.diagnostics_capacity)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a configuration file. Unparsable content yields the default
/// configuration; only I/O failures are errors.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
