#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod convert;
pub mod effector;
pub mod errors;
pub mod logging;
pub mod operations;
pub mod progress;
pub mod sizes;
pub mod sort;
pub mod worker;

pub use config::AppConfig;
pub use convert::{detect_article, suggested_file_stem, swap_article, DetectedArticle, Grid};
pub use effector::{DryRunEffector, Effector, FsEffector};
pub use errors::CoreError;
pub use logging::{LogLevel, MemoryLog, OpLog, TermLog};
pub use operations::{
    create_folders_from_list, delete_shortcuts, extract_nested_folders, generate_photo_paths,
    preflight, remove_phrase_from_names, rename_images_sequentially, run, CreateFoldersOptions,
    DeleteShortcutsOptions, OperationContext, OperationKind, OperationRequest,
    RemovePhraseOptions, ResultSink, IMAGE_EXTENSIONS,
};
pub use progress::{CancelFlag, ProgressSink, SilentProgress};
pub use sizes::SizeTable;
pub use worker::{OperationHandle, OperationRunner};
