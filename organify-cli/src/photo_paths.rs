use anyhow::Result;
use organify_core::{AppConfig, OperationRequest, ResultSink};
use std::path::PathBuf;
use std::sync::Arc;

/// The generated path block goes to stdout for piping into a spreadsheet;
/// per-model failures go to stderr.
pub fn handle_photo_paths(
    path: PathBuf,
    list: PathBuf,
    config: &mut AppConfig,
    use_color: bool,
) -> Result<()> {
    let model_list = crate::read_list(&list)?;
    config.last_path = Some(path.clone());

    let sink: Arc<dyn ResultSink> = Arc::new(|success: &str, errors: &str| {
        if !success.is_empty() {
            println!("{success}");
        }
        if !errors.is_empty() {
            eprintln!("{errors}");
        }
    });

    // Read-only: dry-run has nothing to simulate here.
    crate::execute(
        OperationRequest::PhotoPaths {
            root: path,
            model_list,
        },
        false,
        use_color,
        Some(sink),
    )?;
    Ok(())
}
