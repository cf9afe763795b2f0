//! Read-only generation of delimited photo-path strings for spreadsheet
//! import.

use super::{has_image_extension, percent, OperationContext, ResultSink};
use crate::errors::CoreError;
use crate::sort::natural_key;
use std::path::{Path, PathBuf};

const PATH_DELIMITER: &str = "|";

/// For each model name (one per line) look up the same-named subdirectory
/// under `root`, natural-sort the image files directly inside it, and join
/// their absolute paths into one templated string.
///
/// Never mutates the filesystem. The newline-joined success block and error
/// block are delivered exactly once through `results`; returns the number of
/// models that produced a path string.
pub fn generate_photo_paths(
    root: &Path,
    model_list: &str,
    ctx: &OperationContext,
    results: Option<&dyn ResultSink>,
) -> Result<usize, CoreError> {
    ctx.log
        .info("Starting operation: photo path generation");
    ctx.log.info(&format!("Base path: {}", root.display()));

    let models: Vec<&str> = model_list
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if models.is_empty() {
        ctx.log
            .warning("The model list is empty. Operation aborted.");
        ctx.progress.update("Model list is empty.", Some(0));
        if let Some(sink) = results {
            sink.publish("", "");
        }
        return Ok(0);
    }

    // Paths in the output are absolute regardless of how root was given.
    let absolute_root = if root.is_absolute() {
        root.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(root))
            .unwrap_or_else(|_| root.to_path_buf())
    };

    let total = models.len();
    let mut success_lines: Vec<String> = Vec::new();
    let mut error_lines: Vec<String> = Vec::new();

    for (index, model) in models.iter().enumerate() {
        if ctx.cancelled() {
            break;
        }

        ctx.progress.update(
            &format!("Checking: {model}"),
            Some(percent(index + 1, total)),
        );
        let model_path = absolute_root.join(model);

        if !model_path.is_dir() {
            error_lines.push(format!("{model} -> ERROR: folder not found!"));
            ctx.log.error(&format!(
                "Folder for model '{model}' not found at: {}",
                model_path.display()
            ));
            continue;
        }

        let mut photos: Vec<PathBuf> = Vec::new();
        match std::fs::read_dir(&model_path) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.is_file() && has_image_extension(&path) {
                        photos.push(path);
                    }
                }
            }
            Err(err) => {
                error_lines.push(format!("{model} -> ERROR: could not read folder: {err}"));
                ctx.log
                    .error(&format!("Could not read folder for '{model}': {err}"));
                continue;
            }
        }

        if photos.is_empty() {
            error_lines.push(format!("{model} -> ERROR: no images found in folder."));
            ctx.log
                .warning(&format!("No images found for model '{model}'."));
            continue;
        }

        photos.sort_by_key(|path| {
            natural_key(&path.file_name().unwrap_or_default().to_string_lossy())
        });
        let joined = photos
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(PATH_DELIMITER);
        success_lines.push(format!("\"[+\n+{joined}]\""));
        ctx.log.success(&format!(
            "Paths for '{model}' ({} photos) generated.",
            photos.len()
        ));
    }

    if let Some(sink) = results {
        sink.publish(&success_lines.join("\n"), &error_lines.join("\n"));
    }

    let generated = success_lines.len();
    if !ctx.cancel.is_cancelled() {
        ctx.log
            .success("Operation 'photo paths' finished.");
        ctx.finish();
    }
    ctx.log
        .info("--- Operation 'photo path generation' finished ---");
    Ok(generated)
}
