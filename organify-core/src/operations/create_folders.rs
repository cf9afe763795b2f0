//! Bulk folder creation from a newline-separated list.

use super::{percent, OperationContext};
use crate::errors::CoreError;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CreateFoldersOptions {
    /// Literal prefix for the final path segment.
    pub prefix: String,
    /// Literal suffix for the final path segment.
    pub suffix: String,
    /// Insert a zero-padded sequence number between prefix and name.
    pub numbering: bool,
    /// First sequence number.
    pub start: u32,
    /// Minimum digits in the sequence number.
    pub padding: usize,
}

impl Default for CreateFoldersOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            numbering: false,
            start: 1,
            padding: 2,
        }
    }
}

/// Create one folder (hierarchy) per non-empty line of `folder_list` under
/// `root`, idempotently. Lines are independent; a failed line does not stop
/// the rest. Returns the number of folders created.
pub fn create_folders_from_list(
    root: &Path,
    folder_list: &str,
    options: &CreateFoldersOptions,
    ctx: &OperationContext,
) -> Result<usize, CoreError> {
    let marker = ctx.marker();
    ctx.log
        .info(&format!("{marker}Starting operation: create folders"));
    if !ctx.dry_run {
        ctx.log.warning("This operation creates folders on disk.");
    }
    ctx.log
        .info(&format!("Target directory: {}", root.display()));

    let names: Vec<&str> = folder_list
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if names.is_empty() {
        ctx.log
            .warning("The folder list is empty. Operation aborted.");
        ctx.progress.update("Folder list is empty.", Some(0));
        return Ok(0);
    }

    let total = names.len();
    let mut created = 0usize;

    for (index, name) in names.iter().enumerate() {
        if ctx.cancelled() {
            break;
        }

        ctx.progress.update(
            &format!("{marker}Creating: {name}"),
            Some(percent(index + 1, total)),
        );

        let Some(sanitized) = sanitize_folder_path(name) else {
            ctx.log.warning(&format!(
                "Skipped: name '{name}' became empty after sanitizing."
            ));
            continue;
        };

        let number = if options.numbering {
            // u64 arithmetic so a start near u32::MAX cannot overflow.
            let sequence = u64::from(options.start) + index as u64;
            format!("{sequence:0width$}_", width = options.padding)
        } else {
            String::new()
        };

        let leaf = sanitized
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let decorated = format!("{}{number}{leaf}{}", options.prefix, options.suffix);
        let final_name = match sanitized.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(&decorated),
            _ => PathBuf::from(&decorated),
        };

        let full_path = root.join(&final_name);
        match ctx.fx.create_dir_all(&full_path) {
            Ok(()) => {
                ctx.log.success(&format!(
                    "{marker}Created folder: '{}'",
                    final_name.display()
                ));
                created += 1;
            }
            Err(err) => ctx.log.error(&format!(
                "Failed to create folder '{}': {err}",
                final_name.display()
            )),
        }
    }

    if created > 0 {
        ctx.log.success(&format!(
            "{marker}Operation 'create folders' finished. Folders created: {created}."
        ));
    } else {
        ctx.log
            .warning(&format!("{marker}No folders were created."));
    }
    ctx.finish();
    ctx.log
        .info(&format!("--- {marker}Operation 'create folders' finished ---"));
    Ok(created)
}

/// Split a folder spec on path separators, strip filesystem-illegal
/// characters from each segment, and drop empty segments. `None` when
/// nothing survives.
pub(crate) fn sanitize_folder_path(spec: &str) -> Option<PathBuf> {
    let mut path = PathBuf::new();
    for segment in spec.split(['/', '\\']) {
        let cleaned: String = segment
            .chars()
            .filter(|ch| !matches!(ch, '?' | ':' | '"' | '<' | '>' | '|' | '*'))
            .collect();
        let cleaned = cleaned.trim();
        if !cleaned.is_empty() {
            path.push(cleaned);
        }
    }
    if path.as_os_str().is_empty() {
        None
    } else {
        Some(path)
    }
}
