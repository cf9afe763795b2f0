use crate::cli::SizesCommand;
use anyhow::{bail, Result};
use organify_core::SizeTable;
use std::path::PathBuf;

pub fn handle_sizes(command: SizesCommand, file: Option<PathBuf>) -> Result<()> {
    let path = file.unwrap_or_else(default_table_path);
    let mut table = SizeTable::load_or_init(&path)?;

    match command {
        SizesCommand::List => {
            for (size, article) in table.iter() {
                println!("{size}\t{article}");
            }
        },
        SizesCommand::Set { size, article } => {
            table.set(size.as_str(), article);
            table.save_to_path(&path)?;
            eprintln!("Saved entry '{size}' -> {article}.");
        },
        SizesCommand::Remove { size } => {
            if !table.remove(&size) {
                bail!("No entry for size '{size}'");
            }
            table.save_to_path(&path)?;
            eprintln!("Removed entry '{size}'.");
        },
    }
    Ok(())
}

fn default_table_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("organify")
        .join("sizes.json")
}
