//! Sequential 1..N renaming of image files, per directory.

use super::tree_view::TreeView;
use super::{has_image_extension, percent, OperationContext};
use crate::errors::CoreError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MAX_CONFLICT_SUFFIXES: u32 = 100;

/// Rename the image files of every subdirectory under `root` to
/// `1.ext, 2.ext, ...`.
///
/// Image files are selected by a case-insensitive extension allow-list and
/// sorted lexicographically by their current name; the 1-based position in
/// that order becomes the new stem, with the extension preserved and
/// lower-cased. A taken target name gets `_conflict_N` suffixes until a free
/// name is found; after 100 collisions the file is left alone and an error
/// is logged. Returns the number of files renamed.
pub fn rename_images_sequentially(root: &Path, ctx: &OperationContext) -> Result<usize, CoreError> {
    let marker = ctx.marker();
    ctx.log
        .info(&format!("{marker}Starting operation: rename images 1-N"));
    if !ctx.dry_run {
        ctx.log.warning("This operation changes file names on disk.");
    }
    ctx.log
        .info(&format!("Target directory: {}", root.display()));
    ctx.progress.update("Searching for images...", Some(0));

    // Directories that contain at least one image file, in walk order.
    let mut dirs: Vec<PathBuf> = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for entry in WalkDir::new(root) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && has_image_extension(entry.path()) {
                    if let Some(parent) = entry.path().parent() {
                        if seen.insert(parent.to_path_buf()) {
                            dirs.push(parent.to_path_buf());
                        }
                    }
                }
            }
            Err(err) => ctx.log.error(&format!("Failed to read an entry: {err}")),
        }
    }

    let total_dirs = dirs.len();
    let mut renamed_total = 0usize;
    let mut processed_dirs = 0usize;
    let mut view = TreeView::new();

    for (index, dir) in dirs.iter().enumerate() {
        if ctx.cancelled() {
            return Ok(renamed_total);
        }

        let step = percent(index + 1, total_dirs);
        let image_files = match view.entries(dir) {
            Ok(entries) => {
                let mut files: Vec<OsString> = entries
                    .into_iter()
                    .filter(|name| {
                        let path = dir.join(name);
                        path.is_file() && has_image_extension(&path)
                    })
                    .collect();
                files.sort();
                files
            }
            Err(err) => {
                ctx.log
                    .error(&format!("Failed to read folder '{}': {err}", dir.display()));
                continue;
            }
        };

        if image_files.is_empty() {
            continue;
        }

        processed_dirs += 1;
        let shown = dir.strip_prefix(root).map_or_else(
            |_| dir.display().to_string(),
            |rel| {
                if rel.as_os_str().is_empty() {
                    ".".to_string()
                } else {
                    rel.display().to_string()
                }
            },
        );
        ctx.log
            .info(&format!("{marker}Processing folder: {shown}"));
        ctx.log
            .info(&format!("Images found: {}", image_files.len()));
        ctx.progress
            .update(&format!("{marker}Processing: {shown}"), Some(step));

        let mut renamed_here = 0usize;
        for (position, file_name) in image_files.iter().enumerate() {
            if ctx.cancelled() {
                return Ok(renamed_total);
            }

            let old_path = dir.join(file_name);
            let extension = old_path
                .extension()
                .map(|ext| ext.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            let target_name = format!("{}.{extension}", position + 1);

            if file_name.as_os_str() == std::ffi::OsStr::new(&target_name) {
                ctx.log.info(&format!(
                    "File '{}' already has its target name. Skipping.",
                    file_name.to_string_lossy()
                ));
                continue;
            }

            let final_name = if view.occupied(dir, std::ffi::OsStr::new(&target_name)) {
                let Some(free) = next_free_name(&mut view, dir, position + 1, &extension) else {
                    ctx.log.error(&format!(
                        "Too many conflicts for '{target_name}'. Skipping '{}'.",
                        file_name.to_string_lossy()
                    ));
                    continue;
                };
                ctx.log.warning(&format!(
                    "Conflict for '{target_name}'. Renaming to '{free}' instead."
                ));
                free
            } else {
                target_name
            };

            let new_path = dir.join(&final_name);
            match ctx.fx.rename(&old_path, &new_path) {
                Ok(()) => {
                    view.record_move(&old_path, &new_path);
                    ctx.log.success(&format!(
                        "{marker}Renamed: '{}' -> '{final_name}'",
                        file_name.to_string_lossy()
                    ));
                    renamed_total += 1;
                    renamed_here += 1;
                }
                Err(err) => ctx.log.error(&format!(
                    "Failed to rename '{}': {err}",
                    file_name.to_string_lossy()
                )),
            }
        }

        ctx.log
            .info(&format!("Renamed in folder: {renamed_here} files."));
    }

    if processed_dirs == 0 {
        ctx.log.warning("No images found to rename.");
    } else {
        ctx.log.success(&format!(
            "{marker}Operation 'rename images' finished. Renamed {renamed_total} files in {processed_dirs} folders."
        ));
    }
    ctx.finish();
    ctx.log
        .info(&format!("--- {marker}Operation 'rename images' finished ---"));
    Ok(renamed_total)
}

/// First `<stem>_conflict_<n>.<ext>` name not taken in `dir`, if any within
/// the attempt budget.
fn next_free_name(
    view: &mut TreeView,
    dir: &Path,
    stem: usize,
    extension: &str,
) -> Option<String> {
    for attempt in 1..=MAX_CONFLICT_SUFFIXES {
        let candidate = format!("{stem}_conflict_{attempt}.{extension}");
        if !view.occupied(dir, std::ffi::OsStr::new(&candidate)) {
            return Some(candidate);
        }
    }
    None
}
