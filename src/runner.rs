//! Audit runner that orchestrates all category analyzers.
//!
//! Builds the file index once, hands a shared read-only context to every
//! analyzer, and guards the analyzer boundary: a panicking or hung
//! analyzer becomes a zero-evidence category result instead of aborting
//! the run. Results are reassembled in registration order regardless of
//! completion order.

use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::analyzers::{Analyzer, CategoryResult};
use crate::collect::FileIndex;
use crate::config::AuditConfig;
use crate::context::AuditContext;
use crate::report::AnalysisReport;
use crate::score;

/// Executes registered analyzers against a project root.
pub struct Runner {
    root: PathBuf,
    config: AuditConfig,
}

impl Runner {
    /// Create a runner for the given project root with default config.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Runner {
            root: root.as_ref().to_path_buf(),
            config: AuditConfig::default(),
        }
    }

    /// Replace the runner's configuration.
    pub fn with_config(mut self, config: AuditConfig) -> Self {
        self.config = config;
        self
    }

    /// Run all analyzers and aggregate their results into a report.
    ///
    /// Each analyzer runs on its own thread under a wall-clock budget.
    /// Panics and timeouts degrade that category; the run never aborts.
    pub fn run(&self, analyzers: &[Arc<dyn Analyzer>]) -> AnalysisReport {
        self.run_prepared(self.prepare(), analyzers)
    }

    /// Build the file index and pre-read every text source into the
    /// content cache, so analyzers share one snapshot of the tree and
    /// never block each other on disk reads.
    pub fn prepare(&self) -> Arc<AuditContext> {
        let index = FileIndex::collect(&self.root, &self.config.excluded_dirs());
        let ctx = AuditContext::new(&self.root, index);
        let sources: Vec<PathBuf> = ctx
            .index()
            .files_with_extension(crate::analyzers::TEXT_EXTENSIONS)
            .map(|p| p.to_path_buf())
            .collect();
        ctx.warm(&sources);
        Arc::new(ctx)
    }

    /// Run analyzers against an already-prepared context.
    pub fn run_prepared(
        &self,
        ctx: Arc<AuditContext>,
        analyzers: &[Arc<dyn Analyzer>],
    ) -> AnalysisReport {
        let timeout = Duration::from_secs(self.config.analyzer_timeout_secs());

        // Spawn everything first, then collect in registration order so
        // the report is deterministic even with concurrent execution.
        let mut pending = Vec::with_capacity(analyzers.len());
        for analyzer in analyzers {
            let (tx, rx) = mpsc::channel();
            let analyzer = Arc::clone(analyzer);
            let ctx = Arc::clone(&ctx);
            // Detached on purpose: a hung analyzer is abandoned at timeout
            thread::spawn(move || {
                let outcome =
                    panic::catch_unwind(AssertUnwindSafe(|| analyzer.analyze(&ctx)));
                let _ = tx.send(outcome);
            });
            pending.push(rx);
        }

        let mut categories = Vec::with_capacity(analyzers.len());
        for (analyzer, rx) in analyzers.iter().zip(pending) {
            let category = analyzer.category();
            let result = match rx.recv_timeout(timeout) {
                Ok(Ok(result)) => result,
                Ok(Err(_)) => CategoryResult::failed(category, "analyzer panicked"),
                Err(RecvTimeoutError::Timeout) => CategoryResult::failed(
                    category,
                    &format!("timed out after {}s", timeout.as_secs()),
                ),
                Err(RecvTimeoutError::Disconnected) => {
                    CategoryResult::failed(category, "analyzer exited without a result")
                }
            };
            categories.push(result);
        }

        let summary = score::aggregate(&categories, self.config.critical_floor());
        AnalysisReport::new(summary, categories)
    }
}
