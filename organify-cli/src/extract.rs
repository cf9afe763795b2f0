use anyhow::Result;
use organify_core::{AppConfig, OperationRequest};
use std::path::PathBuf;

pub fn handle_extract(
    path: PathBuf,
    config: &mut AppConfig,
    dry_run: bool,
    use_color: bool,
) -> Result<()> {
    config.last_path = Some(path.clone());
    crate::execute(OperationRequest::Extract { root: path }, dry_run, use_color, None)?;
    Ok(())
}
