//! Deletion of URL shortcut files by name match.

use super::{percent, OperationContext};
use crate::errors::CoreError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const SHORTCUT_EXTENSION: &str = "url";

#[derive(Debug, Clone)]
pub struct DeleteShortcutsOptions {
    /// Comma-separated list of name fragments to match against stems.
    pub names: String,
    pub case_sensitive: bool,
}

/// Recursively delete `*.url` files whose stem contains any of the given
/// fragments. Returns the number of files deleted.
pub fn delete_shortcuts(
    root: &Path,
    options: &DeleteShortcutsOptions,
    ctx: &OperationContext,
) -> Result<usize, CoreError> {
    let marker = ctx.marker();
    ctx.log
        .info(&format!("{marker}Starting operation: delete URL shortcuts"));
    if !ctx.dry_run {
        ctx.log.warning("This operation deletes files from disk.");
    }
    ctx.log
        .info(&format!("Target directory: {}", root.display()));
    ctx.log
        .info(&format!("Names/fragments to delete: '{}'", options.names));
    ctx.log.info(&format!(
        "Case sensitive: {}",
        if options.case_sensitive { "yes" } else { "no" }
    ));

    let targets: Vec<String> = options
        .names
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            if options.case_sensitive {
                name.to_string()
            } else {
                name.to_lowercase()
            }
        })
        .collect();
    if targets.is_empty() {
        ctx.log
            .warning("No shortcut names or name fragments were given.");
        ctx.progress.update("No names given.", Some(0));
        return Ok(0);
    }

    let mut shortcut_files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(root) {
        match entry {
            Ok(entry) => {
                let is_shortcut = entry.file_type().is_file()
                    && entry
                        .path()
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .is_some_and(|ext| ext.eq_ignore_ascii_case(SHORTCUT_EXTENSION));
                if is_shortcut {
                    shortcut_files.push(entry.into_path());
                }
            }
            Err(err) => ctx.log.error(&format!("Failed to read an entry: {err}")),
        }
    }

    let total = shortcut_files.len();
    let mut deleted = 0usize;

    for (index, path) in shortcut_files.iter().enumerate() {
        if ctx.cancelled() {
            return Ok(deleted);
        }

        let name = path.file_name().unwrap_or_default().to_string_lossy();
        ctx.progress
            .update(&format!("Checking: {name}"), Some(percent(index + 1, total)));

        let stem = path.file_stem().unwrap_or_default().to_string_lossy();
        let stem_to_check = if options.case_sensitive {
            stem.to_string()
        } else {
            stem.to_lowercase()
        };

        if targets.iter().any(|target| stem_to_check.contains(target)) {
            match ctx.fx.remove_file(path) {
                Ok(()) => {
                    ctx.log
                        .success(&format!("{marker}Deleted shortcut: '{}'", path.display()));
                    deleted += 1;
                }
                Err(err) => ctx.log.error(&format!(
                    "Failed to delete shortcut '{}': {err}",
                    path.display()
                )),
            }
        }
    }

    if deleted == 0 {
        ctx.log
            .warning("No URL shortcuts matching the given names were found.");
    } else {
        ctx.log.success(&format!(
            "{marker}Operation 'delete shortcuts' finished. Shortcuts deleted: {deleted}."
        ));
    }
    ctx.finish();
    ctx.log.info(&format!(
        "--- {marker}Operation 'delete shortcuts: {}' finished ---",
        options.names
    ));
    Ok(deleted)
}
