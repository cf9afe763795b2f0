//! The injected filesystem mutation capability.
//!
//! Every mutating operation performs its side effects through an [`Effector`].
//! [`FsEffector`] touches the real filesystem; [`DryRunEffector`] performs
//! nothing, so a dry run walks the exact same validation, logging and
//! counting paths as a real run while leaving the tree untouched.

use std::fs;
use std::io;
use std::path::Path;

pub trait Effector: Send + Sync {
    /// Move a file or directory into another directory.
    fn move_entry(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Rename a file or directory in place.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    fn remove_file(&self, path: &Path) -> io::Result<()>;

    fn remove_empty_dir(&self, path: &Path) -> io::Result<()>;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// Performs real filesystem mutations.
pub struct FsEffector;

impl Effector for FsEffector {
    fn move_entry(&self, from: &Path, to: &Path) -> io::Result<()> {
        // Moves stay within one tree, so a plain rename suffices.
        fs::rename(from, to)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_empty_dir(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}

/// Accepts every mutation without performing it.
pub struct DryRunEffector;

impl Effector for DryRunEffector {
    fn move_entry(&self, _from: &Path, _to: &Path) -> io::Result<()> {
        Ok(())
    }

    fn rename(&self, _from: &Path, _to: &Path) -> io::Result<()> {
        Ok(())
    }

    fn remove_file(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn remove_empty_dir(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}
