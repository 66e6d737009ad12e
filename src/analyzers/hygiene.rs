//! Source hygiene: leftover development artifacts.
//!
//! Scans scripts and stylesheets for markers that should not ship to
//! production: console logging, `debugger` statements, alert() calls and
//! unfinished-work comments. Deductions are per occurrence but capped per
//! marker class so a noisy codebase cannot zero the category on its own.

use lazy_static::lazy_static;
use regex::Regex;

use crate::context::AuditContext;

use super::{Analyzer, CategoryResult, ResultBuilder};

const BASELINE: i32 = 98;

/// File extensions inspected for hygiene markers.
const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "css", "scss", "html"];

lazy_static! {
    static ref CONSOLE_LOG: Regex = Regex::new(r"console\.(log|debug|trace)\s*\(").unwrap();
    static ref DEBUGGER: Regex = Regex::new(r"(?m)^\s*debugger\s*;?\s*$").unwrap();
    static ref ALERT: Regex = Regex::new(r"(?m)(^|[^.\w])alert\s*\(").unwrap();
    static ref WORK_MARKER: Regex = Regex::new(r"(?i)\b(TODO|FIXME|HACK|XXX)\b").unwrap();
}

/// Counts per marker class across the scanned tree.
#[derive(Default)]
struct MarkerCounts {
    console: usize,
    debugger: usize,
    alert: usize,
    work: usize,
    unreadable: usize,
}

/// Audits leftover debug statements and work markers.
pub struct HygieneAnalyzer;

impl HygieneAnalyzer {
    pub fn new() -> Self {
        HygieneAnalyzer
    }

    fn count_markers(ctx: &AuditContext) -> MarkerCounts {
        let mut counts = MarkerCounts::default();

        for path in ctx.index().files_with_extension(SOURCE_EXTENSIONS) {
            let content = match ctx.read_text(path) {
                Ok(c) => c,
                Err(_) => {
                    counts.unreadable += 1;
                    continue;
                }
            };

            counts.console += CONSOLE_LOG.find_iter(&content).count();
            counts.debugger += DEBUGGER.find_iter(&content).count();
            counts.alert += ALERT.find_iter(&content).count();
            counts.work += WORK_MARKER.find_iter(&content).count();
        }

        counts
    }
}

impl Default for HygieneAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for HygieneAnalyzer {
    fn category(&self) -> &'static str {
        "hygiene"
    }

    fn analyze(&self, ctx: &AuditContext) -> CategoryResult {
        let mut b = ResultBuilder::new(self.category(), BASELINE);

        if ctx.index().file_count() == 0 {
            b.deduct(45, "project tree is empty; hygiene cannot be assessed");
            return b.finish();
        }

        let counts = Self::count_markers(ctx);

        if counts.console > 0 {
            let points = (counts.console as i32 * 2).min(10);
            b.deduct(
                points,
                format!("{} console logging call(s) in shipped sources", counts.console),
            );
            b.recommend("strip console logging from production builds");
        } else {
            b.note("no console logging in shipped sources");
        }

        if counts.debugger > 0 {
            let points = (counts.debugger as i32 * 5).min(15);
            b.deduct(
                points,
                format!("{} debugger statement(s) left in sources", counts.debugger),
            );
            b.recommend("remove debugger statements before deploying");
        }

        if counts.alert > 0 {
            let points = (counts.alert as i32 * 3).min(9);
            b.deduct(
                points,
                format!("{} alert() call(s) in sources", counts.alert),
            );
            b.recommend("replace alert() with in-page notifications");
        }

        if counts.work > 0 {
            let points = (counts.work as i32).min(10);
            b.deduct(
                points,
                format!("{} unfinished-work marker(s) (TODO/FIXME/HACK)", counts.work),
            );
            b.recommend("resolve or ticket the remaining work markers");
        } else {
            b.note("no unfinished-work markers found");
        }

        if counts.unreadable > 0 {
            b.deduct(
                2,
                format!("{} source file(s) could not be read as text", counts.unreadable),
            );
        }

        b.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::FileIndex;
    use crate::config::AuditConfig;
    use std::fs;
    use tempfile::TempDir;

    fn analyze(temp: &TempDir) -> CategoryResult {
        let config = AuditConfig::default();
        let index = FileIndex::collect(temp.path(), &config.excluded_dirs());
        let ctx = AuditContext::new(temp.path(), index);
        HygieneAnalyzer::new().analyze(&ctx)
    }

    #[test]
    fn test_clean_sources_keep_baseline() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("app.ts"),
            "export function add(a: number, b: number) { return a + b; }",
        )
        .unwrap();

        let result = analyze(&temp);
        assert_eq!(result.score, BASELINE);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_console_and_debugger_deduct() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("app.js"),
            "console.log('a');\nconsole.log('b');\ndebugger;\n",
        )
        .unwrap();

        let result = analyze(&temp);
        // 2 console calls (4 pts) + 1 debugger (5 pts)
        assert_eq!(result.score, BASELINE - 4 - 5);
        assert!(result
            .findings
            .iter()
            .any(|f| f.contains("2 console logging")));
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("debugger")));
    }

    #[test]
    fn test_marker_deductions_are_capped() {
        let temp = TempDir::new().unwrap();
        let noisy: String = (0..50).map(|i| format!("console.log({});\n", i)).collect();
        fs::write(temp.path().join("noisy.js"), noisy).unwrap();

        let result = analyze(&temp);
        // Capped at 10 despite 50 occurrences
        assert_eq!(result.score, BASELINE - 10);
    }

    #[test]
    fn test_work_markers_found() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("wip.ts"),
            "// TODO: wire up retry\n// FIXME: race on teardown\nexport {};\n",
        )
        .unwrap();

        let result = analyze(&temp);
        assert_eq!(result.score, BASELINE - 2);
        assert!(result
            .findings
            .iter()
            .any(|f| f.contains("unfinished-work marker")));
    }

    #[test]
    fn test_alert_outside_word_boundary_only() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("ok.js"),
            "toast.alert('styled'); showAlert('x');\n",
        )
        .unwrap();

        let result = analyze(&temp);
        // Method calls and suffixed names are not the global alert()
        assert_eq!(result.score, BASELINE);
    }
}
