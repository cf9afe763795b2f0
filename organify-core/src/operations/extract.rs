//! Flattening of nested `"1"` marker folders.

use super::tree_view::TreeView;
use super::{percent, OperationContext};
use crate::errors::CoreError;
use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MARKER_NAME: &str = "1";

/// Find every directory with an immediate child named `"1"`, move that
/// child's contents into the directory itself, and delete the `"1"` folder
/// once it is empty.
///
/// Candidates are processed deepest first (by path component count) so that
/// children are flattened before their ancestors are revisited. Same-named
/// entries in the destination are never overwritten: the item is skipped
/// with a conflict warning and the `"1"` folder stays behind. Returns the
/// number of `"1"` folders removed.
pub fn extract_nested_folders(root: &Path, ctx: &OperationContext) -> Result<usize, CoreError> {
    let marker = ctx.marker();
    ctx.log
        .info(&format!("{marker}Starting operation: extract nested '1' folders"));
    if !ctx.dry_run {
        ctx.log
            .warning("This operation changes the directory structure on disk.");
    }
    ctx.log
        .info(&format!("Target directory: {}", root.display()));
    ctx.progress.update("Searching for '1' folders...", Some(0));

    let mut candidates: Vec<PathBuf> = Vec::new();
    // The root is never a candidate, even when it is itself named "1".
    for entry in WalkDir::new(root).min_depth(1) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_dir() && entry.file_name() == MARKER_NAME {
                    if let Some(parent) = entry.path().parent() {
                        candidates.push(parent.to_path_buf());
                    }
                }
            }
            Err(err) => ctx.log.error(&format!("Failed to read an entry: {err}")),
        }
    }
    // Deepest parents first; path order as tiebreak for stable logs.
    candidates.sort_by_key(|path| (Reverse(path.components().count()), path.clone()));

    if candidates.is_empty() {
        ctx.log
            .warning("No '1' folders found under the target directory.");
        ctx.finish();
        ctx.log
            .info(&format!("--- {marker}Operation 'extract' finished ---"));
        return Ok(0);
    }

    let total = candidates.len();
    let mut removed = 0usize;
    let mut view = TreeView::new();

    for (index, parent) in candidates.iter().enumerate() {
        if ctx.cancelled() {
            return Ok(removed);
        }

        let marker_dir = parent.join(MARKER_NAME);
        let step = percent(index + 1, total);
        ctx.log
            .info(&format!("{marker}Found folder: {}", marker_dir.display()));
        let shown = marker_dir.strip_prefix(root).unwrap_or(&marker_dir);
        ctx.progress
            .update(&format!("{marker}Processing: {}", shown.display()), Some(step));

        let items = match view.entries(&marker_dir) {
            Ok(items) => items,
            Err(err) => {
                ctx.log.error(&format!(
                    "Failed to read contents of '{}': {err}",
                    marker_dir.display()
                ));
                continue;
            }
        };

        if !items.is_empty() {
            ctx.log.info(&format!(
                "{marker}Moving {} items from '{}' into '{}'...",
                items.len(),
                marker_dir.display(),
                parent.display()
            ));
            for name in &items {
                if ctx.cancelled() {
                    return Ok(removed);
                }

                let source = marker_dir.join(name);
                let dest = parent.join(name);
                if view.occupied(parent, name) {
                    ctx.log.warning(&format!(
                        "Conflict: '{}' already exists in '{}'. Skipping.",
                        name.to_string_lossy(),
                        parent.display()
                    ));
                    continue;
                }
                match ctx.fx.move_entry(&source, &dest) {
                    Ok(()) => {
                        view.record_move(&source, &dest);
                        ctx.log
                            .success(&format!("{marker}Moved: '{}'", name.to_string_lossy()));
                    }
                    Err(err) => ctx.log.error(&format!(
                        "Failed to move '{}': {err}",
                        name.to_string_lossy()
                    )),
                }
            }
        }

        match view.is_empty(&marker_dir) {
            Ok(true) => match ctx.fx.remove_empty_dir(&marker_dir) {
                Ok(()) => {
                    view.record_remove(&marker_dir);
                    ctx.log.success(&format!(
                        "{marker}Removed empty folder: {}",
                        marker_dir.display()
                    ));
                    removed += 1;
                }
                Err(err) => ctx.log.error(&format!(
                    "Failed to remove folder '{}': {err}",
                    marker_dir.display()
                )),
            },
            Ok(false) => ctx.log.warning(&format!(
                "Folder '{}' is not empty after moving. Not removed.",
                marker_dir.display()
            )),
            Err(err) => ctx.log.error(&format!(
                "Failed to re-check folder '{}': {err}",
                marker_dir.display()
            )),
        }
    }

    if removed > 0 {
        ctx.log.success(&format!(
            "{marker}Operation 'extract' finished. '1' folders processed and removed: {removed}."
        ));
    } else {
        ctx.log.warning(&format!(
            "{marker}'1' folders were found, but none could be removed (conflicts or errors)."
        ));
    }
    ctx.finish();
    ctx.log
        .info(&format!("--- {marker}Operation 'extract' finished ---"));
    Ok(removed)
}
