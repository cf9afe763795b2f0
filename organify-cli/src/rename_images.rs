use anyhow::Result;
use organify_core::{AppConfig, OperationRequest};
use std::path::PathBuf;

pub fn handle_rename_images(
    path: PathBuf,
    config: &mut AppConfig,
    dry_run: bool,
    use_color: bool,
) -> Result<()> {
    config.last_path = Some(path.clone());
    crate::execute(
        OperationRequest::RenameImages { root: path },
        dry_run,
        use_color,
        None,
    )?;
    Ok(())
}
