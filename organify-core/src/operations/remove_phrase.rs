//! Removal of a literal phrase or regex pattern from file and folder names.

use super::tree_view::TreeView;
use super::{percent, OperationContext};
use crate::errors::CoreError;
use regex::{Regex, RegexBuilder};
use std::cmp::Reverse;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct RemovePhraseOptions {
    /// Literal phrase, or a regex when `use_regex` is set.
    pub phrase: String,
    pub case_sensitive: bool,
    pub use_regex: bool,
}

/// Remove every occurrence of the phrase (or every match of the pattern)
/// from each file and folder name under `root`.
///
/// Entries are processed deepest first, by path component count, so a child
/// is renamed before its parent's name changes could invalidate its path.
/// Names that would become empty turn into `renamed_file<ext>` /
/// `renamed_folder`; existing destinations are skipped with a conflict
/// warning, never overwritten. Returns the number of entries renamed.
///
/// An invalid regex aborts before any filesystem access; an empty phrase is
/// a usage warning with a zero count.
pub fn remove_phrase_from_names(
    root: &Path,
    options: &RemovePhraseOptions,
    ctx: &OperationContext,
) -> Result<usize, CoreError> {
    let marker = ctx.marker();
    ctx.log.info(&format!(
        "{marker}Starting operation: remove phrase/pattern '{}'",
        options.phrase
    ));
    if !ctx.dry_run {
        ctx.log
            .warning("This operation changes file and folder names on disk.");
    }
    ctx.log
        .info(&format!("Target directory: {}", root.display()));
    ctx.log.info(&format!(
        "Case sensitive: {} | Regex: {}",
        if options.case_sensitive { "yes" } else { "no" },
        if options.use_regex { "yes" } else { "no" }
    ));

    if options.phrase.is_empty() {
        ctx.log
            .warning("The phrase or pattern to remove is empty.");
        ctx.progress.update("Empty phrase.", Some(0));
        return Ok(0);
    }

    // Compiles before any filesystem access; a bad pattern aborts the run.
    let pattern = build_removal_pattern(options)?;
    ctx.progress.update("Collecting entries...", Some(0));

    let mut items: Vec<(PathBuf, bool)> = Vec::new();
    for entry in WalkDir::new(root).min_depth(1) {
        match entry {
            Ok(entry) => {
                let is_dir = entry.file_type().is_dir();
                items.push((entry.into_path(), is_dir));
            }
            Err(err) => ctx.log.error(&format!("Failed to read an entry: {err}")),
        }
    }
    // Deepest first; path order as tiebreak for stable logs.
    items.sort_by_key(|(path, _)| (Reverse(path.components().count()), path.clone()));

    let total = items.len();
    let mut renamed = 0usize;
    let mut view = TreeView::new();

    for (index, (path, is_dir)) in items.iter().enumerate() {
        if ctx.cancelled() {
            return Ok(renamed);
        }

        let original = path.file_name().unwrap_or_default().to_string_lossy();
        ctx.progress
            .update(&format!("Checking: {original}"), Some(percent(index + 1, total)));

        let mut candidate = pattern.replace_all(&original, "").trim().to_string();
        if candidate.is_empty() {
            if !is_dir {
                if let Some(extension) = path.extension() {
                    candidate = format!("renamed_file.{}", extension.to_string_lossy());
                    ctx.log.warning(&format!(
                        "File name '{original}' would become empty. Using '{candidate}'."
                    ));
                } else {
                    ctx.log.warning(&format!(
                        "Skipped: name '{original}' would become empty after removal."
                    ));
                    continue;
                }
            } else {
                candidate = "renamed_folder".to_string();
                ctx.log.warning(&format!(
                    "Folder name '{original}' would become empty. Using '{candidate}'."
                ));
            }
        }

        if candidate == original {
            continue;
        }

        let Some(parent) = path.parent() else {
            continue;
        };
        if view.occupied(parent, OsStr::new(&candidate)) {
            ctx.log.warning(&format!(
                "Conflict: '{}' already exists. Skipping rename of '{original}'.",
                parent.join(&candidate).display()
            ));
            continue;
        }

        let new_path = parent.join(&candidate);
        match ctx.fx.rename(path, &new_path) {
            Ok(()) => {
                view.record_move(path, &new_path);
                ctx.log
                    .success(&format!("{marker}Renamed: '{original}' -> '{candidate}'"));
                renamed += 1;
            }
            Err(err) => ctx.log.error(&format!(
                "Failed to rename '{original}' to '{candidate}': {err}"
            )),
        }
    }

    if renamed == 0 {
        ctx.log
            .warning("The phrase/pattern was not found in any file or folder name.");
    } else {
        ctx.log.success(&format!(
            "{marker}Operation 'remove phrase' finished. Entries renamed: {renamed}."
        ));
    }
    ctx.finish();
    ctx.log.info(&format!(
        "--- {marker}Operation 'remove phrase: {}' finished ---",
        options.phrase
    ));
    Ok(renamed)
}

/// Literal phrases are escaped so both modes go through one regex, with the
/// case toggle applied uniformly.
fn build_removal_pattern(options: &RemovePhraseOptions) -> Result<Regex, CoreError> {
    let source = if options.use_regex {
        options.phrase.clone()
    } else {
        regex::escape(&options.phrase)
    };
    Ok(RegexBuilder::new(&source)
        .case_insensitive(!options.case_sensitive)
        .build()?)
}
