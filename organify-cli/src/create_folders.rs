use anyhow::Result;
use organify_core::{AppConfig, CreateFoldersOptions, OperationRequest};
use std::path::PathBuf;

/// Flags override the persisted values; whatever ends up used is written
/// back as the new last-used settings.
#[allow(clippy::too_many_arguments)]
pub fn handle_create_folders(
    list: PathBuf,
    path: PathBuf,
    prefix: Option<String>,
    suffix: Option<String>,
    numbering: bool,
    start: Option<u32>,
    padding: Option<usize>,
    config: &mut AppConfig,
    dry_run: bool,
    use_color: bool,
) -> Result<()> {
    let folder_list = crate::read_list(&list)?;

    let options = CreateFoldersOptions {
        prefix: prefix.unwrap_or_else(|| config.folder_prefix.clone()),
        suffix: suffix.unwrap_or_else(|| config.folder_suffix.clone()),
        numbering: numbering || config.folder_numbering,
        start: start.unwrap_or(config.folder_start),
        padding: padding.unwrap_or(config.folder_padding),
    };

    config.last_path = Some(path.clone());
    config.folder_prefix = options.prefix.clone();
    config.folder_suffix = options.suffix.clone();
    config.folder_numbering = options.numbering;
    config.folder_start = options.start;
    config.folder_padding = options.padding;

    crate::execute(
        OperationRequest::CreateFolders {
            root: path,
            folder_list,
            options,
        },
        dry_run,
        use_color,
        None,
    )?;
    Ok(())
}
