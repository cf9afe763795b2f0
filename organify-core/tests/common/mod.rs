use organify_core::{
    CancelFlag, DryRunEffector, FsEffector, MemoryLog, OperationContext, SilentProgress,
};

static SILENT: SilentProgress = SilentProgress;
static DRY_FX: DryRunEffector = DryRunEffector;
static REAL_FX: FsEffector = FsEffector;

/// Collaborators for driving an operation in tests.
pub struct Harness {
    pub log: MemoryLog,
    pub cancel: CancelFlag,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            log: MemoryLog::new(),
            cancel: CancelFlag::new(),
        }
    }

    pub fn ctx(&self, dry_run: bool) -> OperationContext<'_> {
        let fx: &'static dyn organify_core::Effector =
            if dry_run { &DRY_FX } else { &REAL_FX };
        OperationContext::new(&self.log, &SILENT, &self.cancel, fx, dry_run)
    }

    pub fn messages(&self) -> Vec<String> {
        self.log.messages()
    }
}

/// Snapshot of a tree: sorted relative paths, with file contents.
pub fn snapshot(root: &std::path::Path) -> Vec<(String, Option<String>)> {
    let mut entries: Vec<(String, Option<String>)> = walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .map(|entry| {
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            let contents = if entry.file_type().is_file() {
                Some(std::fs::read_to_string(entry.path()).unwrap_or_default())
            } else {
                None
            };
            (rel, contents)
        })
        .collect();
    entries.sort();
    entries
}
