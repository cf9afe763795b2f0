//! The user-maintained size label to article code lookup table.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Size label -> numeric article code, persisted as a flat JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeTable {
    entries: BTreeMap<String, u64>,
}

impl Default for SizeTable {
    fn default() -> Self {
        let entries = [
            ("41 р", 1_211_561),
            ("41.5 р", 1_211_562),
            ("42 р", 1_211_563),
            ("42.5 р", 1_211_564),
            ("43 р", 1_211_565),
            ("43.5 р", 1_211_566),
            ("44 р", 1_211_567),
            ("44.5 р", 1_211_568),
        ]
        .into_iter()
        .map(|(size, code)| (size.to_string(), code))
        .collect();
        Self { entries }
    }
}

impl SizeTable {
    /// Load from `path`; a missing or malformed file is replaced with the
    /// built-in default table, which is immediately written back.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if let Ok(content) = fs::read_to_string(path) {
            if let Ok(table) = serde_json::from_str(&content) {
                return Ok(table);
            }
        }
        let table = Self::default();
        table.save_to_path(path)?;
        Ok(table)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write size table to {}", path.display()))?;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn article_for(&self, size: &str) -> Option<u64> {
        self.entries.get(size).copied()
    }

    /// Size label for an article code rendered as a string.
    pub fn size_for_article(&self, article: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, code)| code.to_string() == article)
            .map(|(size, _)| size.as_str())
    }

    pub fn set(&mut self, size: impl Into<String>, article: u64) {
        self.entries.insert(size.into(), article);
    }

    pub fn remove(&mut self, size: &str) -> bool {
        self.entries.remove(size).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(size, code)| (size.as_str(), *code))
    }
}
