use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Batch folder and filename operations for catalog photo workflows
#[derive(Parser, Debug)]
#[command(name = "organify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Simulate the operation without touching the filesystem
    #[arg(long, global = true, conflicts_with = "no_dry_run")]
    pub dry_run: bool,

    /// Perform the operation for real, overriding the configured default
    #[arg(long, global = true)]
    pub no_dry_run: bool,

    /// Run as if started in <PATH> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Use this config file instead of the per-user default
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Move the contents of nested "1" folders up and delete them
    Extract {
        /// Directory to process
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Rename the images in each folder to 1.ext, 2.ext, ... in sorted order
    RenameImages {
        /// Directory to process
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Remove a phrase or regex pattern from every file and folder name
    RemovePhrase {
        /// Phrase to remove (a regular expression with --regex)
        phrase: String,

        /// Directory to process
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Match case exactly
        #[arg(long)]
        case_sensitive: bool,

        /// Treat the phrase as a regular expression
        #[arg(long)]
        regex: bool,
    },

    /// Delete .url shortcut files whose name contains any given fragment
    DeleteShortcuts {
        /// Comma-separated name fragments
        names: String,

        /// Directory to process
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Match case exactly
        #[arg(long)]
        case_sensitive: bool,
    },

    /// Create folders from a newline-separated list
    CreateFolders {
        /// File with one folder spec per line, or - for stdin
        list: PathBuf,

        /// Directory to create the folders under
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Prefix for the final path segment
        #[arg(long)]
        prefix: Option<String>,

        /// Suffix for the final path segment
        #[arg(long)]
        suffix: Option<String>,

        /// Insert a zero-padded sequence number after the prefix
        #[arg(long)]
        numbering: bool,

        /// First sequence number
        #[arg(long)]
        start: Option<u32>,

        /// Minimum digits in the sequence number
        #[arg(long)]
        padding: Option<usize>,
    },

    /// Generate importable photo path strings for the listed model folders
    PhotoPaths {
        /// File with one model name per line, or - for stdin
        list: PathBuf,

        /// Directory holding the model folders
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Inspect or edit the size -> article lookup table
    Sizes {
        #[command(subcommand)]
        command: SizesCommand,

        /// Table file instead of the per-user default
        #[arg(long, global = true, value_name = "PATH")]
        file: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SizesCommand {
    /// Print every entry as "size<TAB>article"
    List,

    /// Add or update one entry
    Set {
        /// Size label, e.g. "42 р"
        size: String,
        /// Numeric article code
        article: u64,
    },

    /// Delete one entry
    Remove {
        /// Size label to delete
        size: String,
    },
}
