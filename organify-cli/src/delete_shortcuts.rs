use anyhow::Result;
use organify_core::{AppConfig, DeleteShortcutsOptions, OperationRequest};
use std::path::PathBuf;

pub fn handle_delete_shortcuts(
    names: String,
    path: PathBuf,
    case_sensitive: bool,
    config: &mut AppConfig,
    dry_run: bool,
    use_color: bool,
) -> Result<()> {
    config.last_path = Some(path.clone());
    config.last_shortcut_names = names.clone();
    config.case_sensitive_shortcuts = case_sensitive;

    let options = DeleteShortcutsOptions {
        names,
        case_sensitive,
    };
    crate::execute(
        OperationRequest::DeleteShortcuts {
            root: path,
            options,
        },
        dry_run,
        use_color,
        None,
    )?;
    Ok(())
}
