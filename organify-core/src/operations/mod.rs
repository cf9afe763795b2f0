//! The six batch operations and their registry.
//!
//! Each operation is an independent, stateless function taking a root path,
//! task-specific parameters and an [`OperationContext`]; it walks the tree
//! (or the supplied list) once, top to bottom, and returns the count of
//! affected items. [`run`] dispatches an [`OperationRequest`] to its
//! function; [`preflight`] performs the up-front usage validation a host
//! surfaces before starting a worker.

pub mod create_folders;
pub mod delete_shortcuts;
pub mod extract;
pub mod photo_paths;
pub mod remove_phrase;
pub mod rename_images;
mod tree_view;

pub use create_folders::{create_folders_from_list, CreateFoldersOptions};
pub use delete_shortcuts::{delete_shortcuts, DeleteShortcutsOptions};
pub use extract::extract_nested_folders;
pub use photo_paths::generate_photo_paths;
pub use remove_phrase::{remove_phrase_from_names, RemovePhraseOptions};
pub use rename_images::rename_images_sequentially;

use crate::effector::Effector;
use crate::errors::CoreError;
use crate::logging::OpLog;
use crate::progress::{CancelFlag, ProgressSink};
use std::path::{Path, PathBuf};

/// Extensions treated as images, matched case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "bmp", "gif", "tiff", "webp", "svg", "ico",
];

pub(crate) fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

pub(crate) fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    u8::try_from(done * 100 / total).unwrap_or(100)
}

/// Cross-cutting collaborators threaded through every operation call.
pub struct OperationContext<'a> {
    pub log: &'a dyn OpLog,
    pub progress: &'a dyn ProgressSink,
    pub cancel: &'a CancelFlag,
    pub fx: &'a dyn Effector,
    pub dry_run: bool,
}

impl<'a> OperationContext<'a> {
    pub fn new(
        log: &'a dyn OpLog,
        progress: &'a dyn ProgressSink,
        cancel: &'a CancelFlag,
        fx: &'a dyn Effector,
        dry_run: bool,
    ) -> Self {
        Self {
            log,
            progress,
            cancel,
            fx,
            dry_run,
        }
    }

    /// Prefix for log lines that describe a (possibly simulated) mutation.
    pub(crate) fn marker(&self) -> &'static str {
        if self.dry_run {
            "[dry run] "
        } else {
            ""
        }
    }

    /// Polls the cancellation flag, emitting the terminal status on the
    /// first observation.
    pub(crate) fn cancelled(&self) -> bool {
        if self.cancel.is_cancelled() {
            self.log.warning("Operation cancelled by user.");
            self.progress.update("Operation cancelled.", Some(0));
            true
        } else {
            false
        }
    }

    pub(crate) fn finish(&self) {
        if !self.cancel.is_cancelled() {
            self.progress.update("Done.", Some(100));
        }
    }
}

/// Receives the two output blocks of the photo-path generator, exactly once
/// per run.
pub trait ResultSink: Send + Sync {
    fn publish(&self, success: &str, errors: &str);
}

impl<F> ResultSink for F
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn publish(&self, success: &str, errors: &str) {
        self(success, errors);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Extract,
    RenameImages,
    RemovePhrase,
    DeleteShortcuts,
    CreateFolders,
    PhotoPaths,
}

impl OperationKind {
    pub const ALL: [Self; 6] = [
        Self::Extract,
        Self::RenameImages,
        Self::RemovePhrase,
        Self::DeleteShortcuts,
        Self::CreateFolders,
        Self::PhotoPaths,
    ];

    /// Stable identifier used by hosts and the CLI.
    pub fn id(self) -> &'static str {
        match self {
            Self::Extract => "extract",
            Self::RenameImages => "rename-images",
            Self::RemovePhrase => "remove-phrase",
            Self::DeleteShortcuts => "delete-shortcuts",
            Self::CreateFolders => "create-folders",
            Self::PhotoPaths => "photo-paths",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Extract => "Extract nested '1' folders",
            Self::RenameImages => "Rename images 1-N",
            Self::RemovePhrase => "Remove phrase/pattern from names",
            Self::DeleteShortcuts => "Delete URL shortcuts",
            Self::CreateFolders => "Create folders from list",
            Self::PhotoPaths => "Generate photo path strings",
        }
    }

    /// Whether the operation mutates the filesystem when not in dry-run.
    pub fn mutates_filesystem(self) -> bool {
        !matches!(self, Self::PhotoPaths)
    }
}

/// A fully parameterised request for one operation run.
#[derive(Debug, Clone)]
pub enum OperationRequest {
    Extract {
        root: PathBuf,
    },
    RenameImages {
        root: PathBuf,
    },
    RemovePhrase {
        root: PathBuf,
        options: RemovePhraseOptions,
    },
    DeleteShortcuts {
        root: PathBuf,
        options: DeleteShortcutsOptions,
    },
    CreateFolders {
        root: PathBuf,
        folder_list: String,
        options: CreateFoldersOptions,
    },
    PhotoPaths {
        root: PathBuf,
        model_list: String,
    },
}

impl OperationRequest {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Extract { .. } => OperationKind::Extract,
            Self::RenameImages { .. } => OperationKind::RenameImages,
            Self::RemovePhrase { .. } => OperationKind::RemovePhrase,
            Self::DeleteShortcuts { .. } => OperationKind::DeleteShortcuts,
            Self::CreateFolders { .. } => OperationKind::CreateFolders,
            Self::PhotoPaths { .. } => OperationKind::PhotoPaths,
        }
    }

    pub fn root(&self) -> &Path {
        match self {
            Self::Extract { root }
            | Self::RenameImages { root }
            | Self::RemovePhrase { root, .. }
            | Self::DeleteShortcuts { root, .. }
            | Self::CreateFolders { root, .. }
            | Self::PhotoPaths { root, .. } => root,
        }
    }
}

/// Usage validation performed before any worker is spawned.
///
/// The operations repeat these checks themselves (they are callable
/// directly); hosts use this to surface the message without starting a run.
pub fn preflight(request: &OperationRequest) -> Result<(), String> {
    if !request.root().is_dir() {
        return Err(format!(
            "'{}' is not an existing directory.",
            request.root().display()
        ));
    }
    match request {
        OperationRequest::RemovePhrase { options, .. } if options.phrase.trim().is_empty() => {
            Err("Please enter a phrase or pattern to remove.".to_string())
        }
        OperationRequest::DeleteShortcuts { options, .. }
            if options
                .names
                .split(',')
                .all(|name| name.trim().is_empty()) =>
        {
            Err("Please enter shortcut names to delete.".to_string())
        }
        OperationRequest::CreateFolders { folder_list, .. }
            if folder_list.trim().is_empty() =>
        {
            Err("Please enter folder names to create.".to_string())
        }
        OperationRequest::PhotoPaths { model_list, .. } if model_list.trim().is_empty() => {
            Err("Please enter model names to generate paths for.".to_string())
        }
        _ => Ok(()),
    }
}

/// Dispatch a request to its operation function.
///
/// Fatal failures are logged with detail, reported as a generic "operation
/// failed" progress status, and returned to the caller.
pub fn run(
    request: &OperationRequest,
    ctx: &OperationContext,
    results: Option<&dyn ResultSink>,
) -> Result<usize, CoreError> {
    let outcome = match request {
        OperationRequest::Extract { root } => extract_nested_folders(root, ctx),
        OperationRequest::RenameImages { root } => rename_images_sequentially(root, ctx),
        OperationRequest::RemovePhrase { root, options } => {
            remove_phrase_from_names(root, options, ctx)
        }
        OperationRequest::DeleteShortcuts { root, options } => {
            delete_shortcuts(root, options, ctx)
        }
        OperationRequest::CreateFolders {
            root,
            folder_list,
            options,
        } => create_folders_from_list(root, folder_list, options, ctx),
        OperationRequest::PhotoPaths { root, model_list } => {
            generate_photo_paths(root, model_list, ctx, results)
        }
    };

    if let Err(err) = &outcome {
        ctx.log.error(&format!("Operation failed: {err}"));
        ctx.progress.update("Operation failed.", Some(0));
    }
    outcome
}
