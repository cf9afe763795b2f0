use anyhow::Result;
use organify_core::{AppConfig, OperationRequest, RemovePhraseOptions};
use std::path::PathBuf;

pub fn handle_remove_phrase(
    phrase: String,
    path: PathBuf,
    case_sensitive: bool,
    use_regex: bool,
    config: &mut AppConfig,
    dry_run: bool,
    use_color: bool,
) -> Result<()> {
    config.last_path = Some(path.clone());
    config.last_phrase = phrase.clone();
    config.case_sensitive_phrase = case_sensitive;
    config.use_regex = use_regex;

    let options = RemovePhraseOptions {
        phrase,
        case_sensitive,
        use_regex,
    };
    crate::execute(
        OperationRequest::RemovePhrase {
            root: path,
            options,
        },
        dry_run,
        use_color,
        None,
    )?;
    Ok(())
}
