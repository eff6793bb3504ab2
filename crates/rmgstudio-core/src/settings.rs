//! Persistent editor settings.
//!
//! Stored as JSON under the platform config directory
//! (`<config_dir>/rmgstudio/settings.json`). A missing file yields defaults;
//! a malformed one is logged and replaced by defaults on the next save.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StudioResult;
use crate::graph::GraphStyle;

/// Number of entries kept in the recent files list
pub const MAX_RECENT_FILES: usize = 10;

/// File name of the settings document inside the config directory
pub const SETTINGS_FILE: &str = "settings.json";

/// PNG export options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    pub width: u32,
    pub height: u32,
    pub show_arrows: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 1200,
            show_arrows: true,
        }
    }
}

impl ExportOptions {
    /// Graph style for export, derived from the on-screen style
    pub fn style(&self, base: &GraphStyle) -> GraphStyle {
        GraphStyle {
            show_arrows: self.show_arrows,
            ..base.with_size(self.width as f32, self.height as f32)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Most recently opened documents, newest first
    pub recent_files: Vec<PathBuf>,
    pub graph: GraphStyle,
    pub export: ExportOptions,
}

impl Settings {
    /// Settings file location inside a config directory
    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(SETTINGS_FILE)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(Some(settings)) => settings,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring unreadable settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings; `Ok(None)` when the file does not exist
    pub fn load(path: &Path) -> StudioResult<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: &Path) -> StudioResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Move `path` to the front of the recent files list
    pub fn push_recent(&mut self, path: &Path) {
        self.recent_files.retain(|p| p != path);
        self.recent_files.insert(0, path.to_path_buf());
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}
