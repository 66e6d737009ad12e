//! Recursive file enumeration for an audit run.
//!
//! The index is built once per run and shared read-only by all analyzers.
//! Ordering is filesystem-dependent; analyzers must not depend on it for
//! correctness, only for display.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Directory names never descended into unless overridden by config.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", "vendor", "target", "coverage"];

/// Kind of a collected entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// One entry in the file index. Immutable once produced for a run.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// The file index for one audit run.
#[derive(Debug, Clone, Default)]
pub struct FileIndex {
    root: PathBuf,
    entries: Vec<FileEntry>,
}

impl FileIndex {
    /// Walk `root` and build an index.
    ///
    /// A missing root yields an empty index, not an error: an absent
    /// directory is zero evidence, not a run failure. Hidden directories
    /// and the excluded names are skipped entirely; unreadable subtrees
    /// are silently omitted.
    pub fn collect<P: AsRef<Path>>(root: P, excluded_dirs: &[String]) -> Self {
        let root = root.as_ref();
        if !root.exists() {
            return FileIndex {
                root: root.to_path_buf(),
                entries: Vec::new(),
            };
        }

        let mut entries = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| {
                if !e.file_type().is_dir() {
                    return true;
                }
                let name = e.file_name().to_string_lossy();
                // The root itself may be hidden (e.g. auditing ".")
                if e.depth() == 0 {
                    return true;
                }
                if name.starts_with('.') {
                    return false;
                }
                !excluded_dirs.iter().any(|d| d.as_str() == name.as_ref())
            })
            .filter_map(|e| e.ok())
        {
            let kind = if entry.file_type().is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            };
            entries.push(FileEntry {
                path: entry.into_path(),
                kind,
            });
        }

        FileIndex {
            root: root.to_path_buf(),
            entries,
        }
    }

    /// All entries, files and directories.
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Paths of all regular files in the index.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(|e| e.kind == EntryKind::File)
            .map(|e| e.path.as_path())
    }

    /// Files whose extension matches one of `exts` (without dot).
    pub fn files_with_extension<'a>(&'a self, exts: &'a [&str]) -> impl Iterator<Item = &'a Path> {
        self.files().filter(move |p| {
            p.extension()
                .and_then(|e| e.to_str())
                .map(|e| exts.contains(&e))
                .unwrap_or(false)
        })
    }

    /// Files under the named directory directly below the audited root.
    ///
    /// Only a top-level directory qualifies: a nested folder that happens
    /// to share the name (say `src/build/`) is ordinary source, not build
    /// output.
    pub fn files_under<'a>(&'a self, dir_name: &str) -> impl Iterator<Item = &'a Path> {
        let base = self.root.join(dir_name);
        self.files().filter(move |p| p.starts_with(&base))
    }

    /// Find the first file with an exact file name.
    pub fn find_by_name(&self, name: &str) -> Option<&Path> {
        self.files().find(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy() == name)
                .unwrap_or(false)
        })
    }

    /// Whether a directory with the given name sits directly under the
    /// audited root.
    pub fn has_dir(&self, name: &str) -> bool {
        let base = self.root.join(name);
        self.entries
            .iter()
            .any(|e| e.kind == EntryKind::Dir && e.path == base)
    }

    pub fn file_count(&self) -> usize {
        self.files().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
