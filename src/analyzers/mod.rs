//! Category analyzers.
//!
//! Each analyzer inspects the shared file index for one category of
//! concern and returns an immutable [`CategoryResult`]. Analyzers are
//! textual heuristics over file contents; how a category decides its
//! findings is private to it, only the result shape is a contract.
//!
//! # Adding a Category
//!
//! 1. Create a module implementing [`Analyzer`]
//! 2. Register it in [`default_analyzers`]
//! 3. Add its name to `config::KNOWN_CATEGORIES`

mod bundle;
mod hygiene;
mod structure;
mod theming;
mod types;

use std::sync::Arc;

use crate::config::AuditConfig;
use crate::context::AuditContext;

pub use bundle::BundleAnalyzer;
pub use hygiene::HygieneAnalyzer;
pub use structure::StructureAnalyzer;
pub use theming::ThemingAnalyzer;
pub use types::{CategoryResult, ResultBuilder, Status};

/// Extensions the built-in analyzers read as text. The runner pre-reads
/// these into the content cache before analyzers start.
pub const TEXT_EXTENSIONS: &[&str] = &[
    "css", "scss", "less", "js", "jsx", "mjs", "ts", "tsx", "html",
];

/// A pluggable category analyzer.
///
/// Implementations must be deterministic for a fixed filesystem state,
/// must not depend on the execution order of other categories, and must
/// recover locally from unreadable artifacts (finding + deduction, not
/// an error). The runner still guards the boundary against panics.
pub trait Analyzer: Send + Sync {
    /// Stable category identifier, e.g. "theming".
    fn category(&self) -> &'static str;

    /// Inspect the tree and produce this category's result.
    fn analyze(&self, ctx: &AuditContext) -> CategoryResult;
}

/// The built-in analyzer set, in registration order, filtered by the
/// config's enabled-category list.
pub fn default_analyzers(config: &AuditConfig) -> Vec<Arc<dyn Analyzer>> {
    let all: Vec<Arc<dyn Analyzer>> = vec![
        Arc::new(StructureAnalyzer::new()),
        Arc::new(ThemingAnalyzer::new(
            config.theming.clone().unwrap_or_default(),
        )),
        Arc::new(BundleAnalyzer::new(
            config.bundle.clone().unwrap_or_default(),
        )),
        Arc::new(HygieneAnalyzer::new()),
    ];

    all.into_iter()
        .filter(|a| config.category_enabled(a.category()))
        .collect()
}
