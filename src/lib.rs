//! Readycheck - production readiness audit engine.
//!
//! Readycheck walks a web project tree once, runs independent category
//! analyzers against file contents (textual heuristics, no parsing),
//! aggregates per-category scores into an overall letter grade, and
//! emits both a colored console report and a persisted JSON report.
//! The process exit code reflects whether critical issues were found.
//!
//! # Architecture
//!
//! - `collect`: recursive file enumeration into a per-run index
//! - `context`: shared read-only context with cached file contents
//! - `analyzers`: pluggable category analyzers and their result types
//! - `runner`: orchestration, analyzer isolation, timeouts
//! - `score`: overall score, grade banding, triage counters
//! - `report`: report data model and console rendering
//! - `persist`: atomic JSON report storage
//! - `config`: YAML configuration schema
//!
//! # Adding a Category
//!
//! See `src/analyzers/` for examples. Implement the `Analyzer` trait
//! and register it in `analyzers::default_analyzers`.

pub mod analyzers;
pub mod cli;
pub mod collect;
pub mod config;
pub mod context;
pub mod persist;
pub mod report;
pub mod runner;
pub mod score;

pub use analyzers::{default_analyzers, Analyzer, CategoryResult, ResultBuilder, Status};
pub use collect::{FileEntry, FileIndex};
pub use config::AuditConfig;
pub use context::{AuditContext, ReadError};
pub use persist::{persist, WriteError};
pub use report::AnalysisReport;
pub use runner::Runner;
pub use score::{aggregate, Summary};
