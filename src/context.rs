//! Shared read-only context handed to every analyzer.
//!
//! Wraps the file index with a lazy content cache so that categories
//! inspecting the same file don't re-read it from disk. The cache is
//! behind an RwLock because analyzers may run concurrently.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::collect::FileIndex;

/// Failure to obtain a file's text content.
///
/// Analyzers recover from this locally: an unreadable artifact becomes a
/// finding plus an uncertainty deduction, never a propagated error.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid UTF-8 text")]
    NotText { path: String },
}

/// Read-only audit context for one run.
pub struct AuditContext {
    root: PathBuf,
    index: FileIndex,
    cache: RwLock<HashMap<PathBuf, Arc<String>>>,
}

impl AuditContext {
    pub fn new<P: AsRef<Path>>(root: P, index: FileIndex) -> Self {
        AuditContext {
            root: root.as_ref().to_path_buf(),
            index,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index(&self) -> &FileIndex {
        &self.index
    }

    /// Read a file as text, caching the result.
    pub fn read_text<P: AsRef<Path>>(&self, path: P) -> Result<Arc<String>, ReadError> {
        let path = path.as_ref();

        {
            let cache = self.cache.read().unwrap();
            if let Some(content) = cache.get(path) {
                return Ok(Arc::clone(content));
            }
        }

        let bytes = fs::read(path).map_err(|source| ReadError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let text = String::from_utf8(bytes).map_err(|_| ReadError::NotText {
            path: path.display().to_string(),
        })?;

        let content = Arc::new(text);
        let mut cache = self.cache.write().unwrap();
        cache.insert(path.to_path_buf(), Arc::clone(&content));
        Ok(content)
    }

    /// Pre-read a set of files in parallel to warm the cache.
    ///
    /// Unreadable files are skipped; analyzers hitting them later get the
    /// same `ReadError` they would have gotten cold.
    pub fn warm(&self, paths: &[PathBuf]) {
        use rayon::prelude::*;

        paths.par_iter().for_each(|p| {
            let _ = self.read_text(p);
        });
    }
}
