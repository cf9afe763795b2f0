//! Projected view of directory contents during a batch of mutations.
//!
//! Conflict and emptiness checks go through this view instead of hitting the
//! filesystem directly. The view records every move and delete as it is
//! decided, so a dry run (where the effector performs nothing) reaches the
//! same decisions, log lines and counts as a real run on the same starting
//! tree.

use std::collections::{HashMap, HashSet};
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Default)]
pub(crate) struct TreeView {
    dirs: HashMap<PathBuf, HashSet<OsString>>,
}

impl TreeView {
    pub fn new() -> Self {
        Self::default()
    }

    fn load(&mut self, dir: &Path) -> io::Result<&mut HashSet<OsString>> {
        if !self.dirs.contains_key(dir) {
            let mut names = HashSet::new();
            for entry in std::fs::read_dir(dir)? {
                names.insert(entry?.file_name());
            }
            self.dirs.insert(dir.to_path_buf(), names);
        }
        Ok(self.dirs.get_mut(dir).expect("dir was just inserted"))
    }

    /// Entries of `dir` in the projected state, sorted for determinism.
    pub fn entries(&mut self, dir: &Path) -> io::Result<Vec<OsString>> {
        let names = self.load(dir)?;
        let mut sorted: Vec<OsString> = names.iter().cloned().collect();
        sorted.sort();
        Ok(sorted)
    }

    /// Whether `parent` already holds an entry called `name`.
    ///
    /// Falls back to a direct existence probe when the parent directory
    /// cannot be listed.
    pub fn occupied(&mut self, parent: &Path, name: &OsStr) -> bool {
        match self.load(parent) {
            Ok(names) => names.contains(name),
            Err(_) => parent.join(name).exists(),
        }
    }

    pub fn is_empty(&mut self, dir: &Path) -> io::Result<bool> {
        Ok(self.load(dir)?.is_empty())
    }

    /// Record a decided move or rename.
    pub fn record_move(&mut self, from: &Path, to: &Path) {
        if let (Some(parent), Some(name)) = (from.parent(), from.file_name()) {
            if let Some(names) = self.dirs.get_mut(parent) {
                names.remove(name);
            }
        }
        if let (Some(parent), Some(name)) = (to.parent(), to.file_name()) {
            if let Some(names) = self.dirs.get_mut(parent) {
                names.insert(name.to_os_string());
            }
        }
    }

    /// Record a decided removal of a file or directory.
    pub fn record_remove(&mut self, path: &Path) {
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            if let Some(names) = self.dirs.get_mut(parent) {
                names.remove(name);
            }
        }
        self.dirs.remove(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn view_tracks_moves_without_touching_disk() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();
        fs::write(tmp.path().join("b.txt"), "b").unwrap();

        let mut view = TreeView::new();
        assert!(view.occupied(tmp.path(), OsStr::new("a.txt")));
        assert!(!view.occupied(tmp.path(), OsStr::new("c.txt")));

        view.record_move(&tmp.path().join("a.txt"), &tmp.path().join("c.txt"));
        assert!(!view.occupied(tmp.path(), OsStr::new("a.txt")));
        assert!(view.occupied(tmp.path(), OsStr::new("c.txt")));

        // Disk is unchanged; only the projection moved.
        assert!(tmp.path().join("a.txt").exists());
    }

    #[test]
    fn emptiness_follows_recorded_mutations() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("x.txt"), "x").unwrap();

        let mut view = TreeView::new();
        assert!(!view.is_empty(&sub).unwrap());

        view.record_move(&sub.join("x.txt"), &tmp.path().join("x.txt"));
        assert!(view.is_empty(&sub).unwrap());

        view.record_remove(&sub);
        assert!(!view.occupied(tmp.path(), OsStr::new("missing")));
    }
}
