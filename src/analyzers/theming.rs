//! Theming and motion-preference support.
//!
//! Scans stylesheets, scripts and markup for the markers that indicate a
//! project respects user appearance and motion preferences: a dark mode
//! implementation, `prefers-reduced-motion` handling, and visible focus
//! styling. Each missing marker costs a configurable deduction.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::ThemingConfig;
use crate::context::AuditContext;

use super::{Analyzer, CategoryResult, ResultBuilder};

const BASELINE: i32 = 95;

/// File extensions inspected for theming markers.
const THEMED_EXTENSIONS: &[&str] = &["css", "scss", "less", "js", "jsx", "ts", "tsx", "html"];

lazy_static! {
    static ref DARK_MODE: Regex =
        Regex::new(r"(?i)prefers-color-scheme|darkMode|dark-mode|data-theme").unwrap();
    static ref REDUCED_MOTION: Regex = Regex::new(r"(?i)prefers-reduced-motion").unwrap();
    static ref FOCUS_VISIBLE: Regex = Regex::new(r":focus-visible|focus-visible:").unwrap();
}

/// Audits dark mode, reduced motion and focus styling markers.
pub struct ThemingAnalyzer {
    config: ThemingConfig,
}

impl ThemingAnalyzer {
    pub fn new(config: ThemingConfig) -> Self {
        ThemingAnalyzer { config }
    }
}

impl Analyzer for ThemingAnalyzer {
    fn category(&self) -> &'static str {
        "theming"
    }

    fn analyze(&self, ctx: &AuditContext) -> CategoryResult {
        let mut b = ResultBuilder::new(self.category(), BASELINE);
        let deduction = self.config.marker_deduction();

        if ctx.index().file_count() == 0 {
            b.deduct(45, "project tree is empty; theming cannot be assessed");
            return b.finish();
        }

        let mut dark = false;
        let mut motion = false;
        let mut focus = false;
        let mut unreadable = 0usize;
        let mut inspected = 0usize;

        for path in ctx.index().files_with_extension(THEMED_EXTENSIONS) {
            let content = match ctx.read_text(path) {
                Ok(c) => c,
                Err(_) => {
                    unreadable += 1;
                    continue;
                }
            };
            inspected += 1;

            // No early exit: the unreadable count must not depend on
            // directory iteration order.
            dark = dark || DARK_MODE.is_match(&content);
            motion = motion || REDUCED_MOTION.is_match(&content);
            focus = focus || FOCUS_VISIBLE.is_match(&content);
        }

        if inspected == 0 {
            b.deduct(
                deduction,
                "no stylesheets or scripts found to inspect for theming",
            );
            b.recommend("add stylesheets before relying on this category");
            if unreadable > 0 {
                b.note(format!("{} candidate file(s) could not be read", unreadable));
            }
            return b.finish();
        }

        if dark {
            b.note("dark mode support detected (prefers-color-scheme or theme switch)");
        } else {
            b.deduct(deduction, "no dark mode handling found");
            b.recommend("support prefers-color-scheme or provide a theme toggle");
        }

        if motion {
            b.note("reduced motion preference respected (prefers-reduced-motion)");
        } else {
            b.deduct(deduction, "no prefers-reduced-motion handling found");
            b.recommend("wrap animations in a prefers-reduced-motion media query");
        }

        if focus {
            b.note("visible focus styling present (:focus-visible)");
        } else {
            b.deduct(5, "no :focus-visible styling found");
            b.recommend("style :focus-visible so keyboard focus is visible");
        }

        if unreadable > 0 {
            b.deduct(
                2,
                format!(
                    "{} candidate file(s) could not be read as text",
                    unreadable
                ),
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

    fn analyze(temp: &TempDir, theming: ThemingConfig) -> CategoryResult {
        let config = AuditConfig::default();
        let index = FileIndex::collect(temp.path(), &config.excluded_dirs());
        let ctx = AuditContext::new(temp.path(), index);
        ThemingAnalyzer::new(theming).analyze(&ctx)
    }

    #[test]
    fn test_dark_present_motion_absent() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("theme.css"),
            "@media (prefers-color-scheme: dark) { body { background: #111; } }\n\
             :focus-visible { outline: 2px solid; }",
        )
        .unwrap();

        let result = analyze(&temp, ThemingConfig::default());

        assert!(result
            .findings
            .iter()
            .any(|f| f.contains("dark mode support detected")));
        assert!(result
            .findings
            .iter()
            .any(|f| f.contains("no prefers-reduced-motion")));
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("prefers-reduced-motion")));
        // One missing marker, one default deduction
        assert_eq!(result.score, BASELINE - ThemingConfig::default().marker_deduction());
    }

    #[test]
    fn test_all_markers_present_keeps_baseline() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("theme.css"),
            "@media (prefers-color-scheme: dark) {}\n\
             @media (prefers-reduced-motion: reduce) { * { animation: none; } }\n\
             :focus-visible { outline: 2px solid; }",
        )
        .unwrap();

        let result = analyze(&temp, ThemingConfig::default());
        assert_eq!(result.score, BASELINE);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_configured_deduction_applies() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("theme.css"),
            "@media (prefers-reduced-motion: reduce) {}\n:focus-visible {}",
        )
        .unwrap();

        let theming = ThemingConfig {
            marker_deduction: Some(20),
        };
        let result = analyze(&temp, theming);
        // Only dark mode is missing
        assert_eq!(result.score, BASELINE - 20);
    }

    #[test]
    fn test_no_candidate_files_is_uncertainty() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.txt"), "plain text only").unwrap();

        let result = analyze(&temp, ThemingConfig::default());
        assert_eq!(
            result.score,
            BASELINE - ThemingConfig::default().marker_deduction()
        );
        assert!(result.findings[0].contains("no stylesheets"));
    }

    #[test]
    fn test_marker_in_script_counts() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("theme.ts"),
            "const dark = window.matchMedia('(prefers-color-scheme: dark)');\n\
             const calm = window.matchMedia('(prefers-reduced-motion: reduce)');\n\
             document.body.classList.add('focus-visible:ring');",
        )
        .unwrap();

        let result = analyze(&temp, ThemingConfig::default());
        assert_eq!(result.score, BASELINE);
    }
}
