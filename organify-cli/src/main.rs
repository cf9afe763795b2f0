use anyhow::{bail, Context, Result};
use clap::Parser;
use organify_core::{
    preflight, AppConfig, CoreError, OpLog, OperationRequest, OperationRunner, ProgressSink,
    ResultSink, SilentProgress, TermLog,
};
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

mod cli;
mod create_folders;
mod delete_shortcuts;
mod extract;
mod photo_paths;
mod remove_phrase;
mod rename_images;
mod sizes;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stderr().is_terminal();

    // Handle -C directory flag
    if let Some(dir) = &cli.directory {
        if let Err(err) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {err:#}");
            process::exit(2);
        }
    }

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let mut config = AppConfig::load_from_path(&config_path);
    let dry_run = if cli.no_dry_run {
        false
    } else if cli.dry_run {
        true
    } else {
        config.dry_run
    };

    // The size table is its own file; running the editor leaves the
    // operation config untouched.
    let persist_config = !matches!(cli.command, Commands::Sizes { .. });

    let result = match cli.command {
        Commands::Extract { path } => {
            extract::handle_extract(path, &mut config, dry_run, use_color)
        },

        Commands::RenameImages { path } => {
            rename_images::handle_rename_images(path, &mut config, dry_run, use_color)
        },

        Commands::RemovePhrase {
            phrase,
            path,
            case_sensitive,
            regex,
        } => remove_phrase::handle_remove_phrase(
            phrase,
            path,
            case_sensitive,
            regex,
            &mut config,
            dry_run,
            use_color,
        ),

        Commands::DeleteShortcuts {
            names,
            path,
            case_sensitive,
        } => delete_shortcuts::handle_delete_shortcuts(
            names,
            path,
            case_sensitive,
            &mut config,
            dry_run,
            use_color,
        ),

        Commands::CreateFolders {
            list,
            path,
            prefix,
            suffix,
            numbering,
            start,
            padding,
        } => create_folders::handle_create_folders(
            list,
            path,
            prefix,
            suffix,
            numbering,
            start,
            padding,
            &mut config,
            dry_run,
            use_color,
        ),

        Commands::PhotoPaths { list, path } => {
            photo_paths::handle_photo_paths(path, list, &mut config, use_color)
        },

        Commands::Sizes { command, file } => sizes::handle_sizes(command, file),
    };

    match result {
        Ok(()) => {
            if persist_config {
                config.dry_run = dry_run;
                if let Err(err) = config.save_to_path(&config_path) {
                    eprintln!("Warning: could not save config: {err:#}");
                }
            }
            process::exit(0);
        },
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(exit_code(&err));
        },
    }
}

/// 2 for bad input (usage errors, bad patterns, missing paths), 3 for
/// runtime failures.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<CoreError>() {
        Some(CoreError::Pattern(_)) | None => 2,
        Some(_) => 3,
    }
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("organify")
        .join("config.json")
}

/// Run one operation on the worker, with Ctrl-C wired to its cancel flag.
pub(crate) fn execute(
    request: OperationRequest,
    dry_run: bool,
    use_color: bool,
    results: Option<Arc<dyn ResultSink>>,
) -> Result<usize> {
    if let Err(message) = preflight(&request) {
        bail!(message);
    }

    let log: Arc<dyn OpLog> = Arc::new(TermLog::new(use_color));
    let progress: Arc<dyn ProgressSink> = Arc::new(SilentProgress);

    let mut runner = OperationRunner::new();
    let cancel = runner.spawn(request, log, progress, results, dry_run)?;
    ctrlc::set_handler(move || cancel.cancel()).context("Failed to set Ctrl-C handler")?;

    match runner.join() {
        Some(outcome) => Ok(outcome?),
        None => Ok(0),
    }
}

/// Read a newline-separated list from a file, or from stdin when the path
/// is `-`.
pub(crate) fn read_list(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read the list from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read list file: {}", path.display()))
    }
}
