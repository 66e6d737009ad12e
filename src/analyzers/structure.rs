//! Project structure conventions.
//!
//! Checks that the conventional anchors of a web project are present:
//! a package manifest, a README, a source directory, a license. Absence
//! of any one is a deduction, never a hard failure.

use crate::context::AuditContext;

use super::{Analyzer, CategoryResult, ResultBuilder};

const BASELINE: i32 = 95;

/// Audits the presence of conventional project files.
pub struct StructureAnalyzer;

impl StructureAnalyzer {
    pub fn new() -> Self {
        StructureAnalyzer
    }
}

impl Default for StructureAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StructureAnalyzer {
    fn category(&self) -> &'static str {
        "structure"
    }

    fn analyze(&self, ctx: &AuditContext) -> CategoryResult {
        let mut b = ResultBuilder::new(self.category(), BASELINE);
        let index = ctx.index();

        if index.file_count() == 0 {
            b.deduct(45, "project tree is empty or unreadable");
            b.recommend("point readycheck at a checked-out project root");
            return b.finish();
        }

        if index.find_by_name("package.json").is_some() {
            b.note("package manifest present (package.json)");
        } else {
            b.deduct(15, "no package.json manifest found");
            b.recommend("add a package.json declaring dependencies and scripts");
        }

        let has_readme = index.find_by_name("README.md").is_some()
            || index.find_by_name("README").is_some();
        if has_readme {
            b.note("README present");
        } else {
            b.deduct(10, "no README found");
            b.recommend("add a README covering setup and deployment");
        }

        if index.has_dir("src") {
            b.note("source directory present (src/)");
        } else {
            b.deduct(10, "no src/ directory; sources appear unorganized");
            b.recommend("group application sources under src/");
        }

        let has_license = index.find_by_name("LICENSE").is_some()
            || index.find_by_name("LICENSE.md").is_some()
            || index.find_by_name("LICENSE.txt").is_some();
        if has_license {
            b.note("license file present");
        } else {
            b.deduct(5, "no LICENSE file found");
            b.recommend("add a LICENSE file stating the project's terms");
        }

        if index.find_by_name(".gitignore").is_some() {
            b.note(".gitignore present");
        } else {
            b.deduct(5, "no .gitignore; build output may end up in version control");
            b.recommend("add a .gitignore covering node_modules and build output");
        }

        b.finish()
    }
}
