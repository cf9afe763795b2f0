//! Flat JSON configuration persisted between sessions.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Last-used path and per-operation option values.
///
/// Read at startup and written at shutdown by the host; a missing or
/// malformed file loads as the defaults, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub last_path: Option<PathBuf>,

    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default)]
    pub last_phrase: String,

    #[serde(default)]
    pub last_shortcut_names: String,

    #[serde(default)]
    pub case_sensitive_phrase: bool,

    #[serde(default)]
    pub case_sensitive_shortcuts: bool,

    #[serde(default)]
    pub use_regex: bool,

    /// Operations default to simulating; a real run is opt-in.
    #[serde(default = "default_true")]
    pub dry_run: bool,

    #[serde(default)]
    pub folder_prefix: String,

    #[serde(default)]
    pub folder_suffix: String,

    #[serde(default)]
    pub folder_numbering: bool,

    #[serde(default = "default_start")]
    pub folder_start: u32,

    #[serde(default = "default_padding")]
    pub folder_padding: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            last_path: None,
            theme: default_theme(),
            last_phrase: String::new(),
            last_shortcut_names: String::new(),
            case_sensitive_phrase: false,
            case_sensitive_shortcuts: false,
            use_regex: false,
            dry_run: true,
            folder_prefix: String::new(),
            folder_suffix: String::new(),
            folder_numbering: false,
            folder_start: default_start(),
            folder_padding: default_padding(),
        }
    }
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_true() -> bool {
    true
}

fn default_start() -> u32 {
    1
}

fn default_padding() -> usize {
    2
}

impl AppConfig {
    /// Load from `path`; a missing or unparseable file yields the defaults.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }
}
