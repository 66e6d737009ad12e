//! Build output size characteristics.
//!
//! Inspects the production build directory if one exists and compares
//! script and stylesheet payloads against size budgets. A missing build
//! directory is uncertainty, not failure: the audit may run before any
//! build has happened.

use std::fs;
use std::path::Path;

use crate::config::BundleConfig;
use crate::context::AuditContext;

use super::{Analyzer, CategoryResult, ResultBuilder};

const BASELINE: i32 = 90;

/// Audits bundle sizes in the build output directory.
pub struct BundleAnalyzer {
    config: BundleConfig,
}

impl BundleAnalyzer {
    pub fn new(config: BundleConfig) -> Self {
        BundleAnalyzer { config }
    }

    fn file_kb(path: &Path) -> Option<u64> {
        fs::metadata(path).ok().map(|m| m.len() / 1024)
    }
}

impl Analyzer for BundleAnalyzer {
    fn category(&self) -> &'static str {
        "bundle"
    }

    fn analyze(&self, ctx: &AuditContext) -> CategoryResult {
        let mut b = ResultBuilder::new(self.category(), BASELINE);
        let index = ctx.index();

        if index.file_count() == 0 {
            b.deduct(45, "project tree is empty; bundle sizes cannot be assessed");
            return b.finish();
        }

        let output_dir = self
            .config
            .output_dirs()
            .into_iter()
            .find(|d| index.has_dir(d));

        let output_dir = match output_dir {
            Some(d) => d,
            None => {
                b.deduct(
                    10,
                    format!(
                        "no build output directory found (looked for {})",
                        self.config.output_dirs().join(", ")
                    ),
                );
                b.recommend("run a production build so bundle sizes can be audited");
                return b.finish();
            }
        };

        let mut total_script_kb = 0u64;
        let mut total_style_kb = 0u64;
        let mut largest_script_kb = 0u64;
        let mut largest_script = String::new();

        for path in index.files_under(&output_dir) {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            // Unstatable files are dropped; the directory may be racing a build
            let kb = match Self::file_kb(path) {
                Some(kb) => kb,
                None => continue,
            };
            match ext {
                "js" | "mjs" => {
                    total_script_kb += kb;
                    if kb > largest_script_kb {
                        largest_script_kb = kb;
                        largest_script = path
                            .file_name()
                            .map(|n| n.to_string_lossy().to_string())
                            .unwrap_or_default();
                    }
                }
                "css" => total_style_kb += kb,
                _ => {}
            }
        }

        b.note(format!(
            "{}/: {} KB scripts, {} KB stylesheets",
            output_dir, total_script_kb, total_style_kb
        ));

        if total_script_kb > self.config.max_total_script_kb() {
            b.deduct(
                15,
                format!(
                    "total script payload {} KB exceeds the {} KB budget",
                    total_script_kb,
                    self.config.max_total_script_kb()
                ),
            );
            b.recommend("split or lazy-load large scripts to shrink the initial payload");
        }

        if largest_script_kb > self.config.max_script_kb() {
            b.deduct(
                10,
                format!(
                    "{} is {} KB, over the {} KB single-file budget",
                    largest_script, largest_script_kb,
                    self.config.max_script_kb()
                ),
            );
            b.recommend("code-split the largest chunk or move vendored code to its own chunk");
        }

        if total_style_kb > self.config.max_style_kb() {
            b.deduct(
                5,
                format!(
                    "stylesheet payload {} KB exceeds the {} KB budget",
                    total_style_kb,
                    self.config.max_style_kb()
                ),
            );
            b.recommend("purge unused CSS from the production build");
        }

        b.finish()
    }
}
