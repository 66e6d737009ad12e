//! Audit configuration schema.
//!
//! An optional `readycheck.yaml` tunes exclusions, thresholds and
//! per-category knobs. Every field has a sensible default so running
//! without a config file is the common case.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::collect::DEFAULT_EXCLUDED_DIRS;
use crate::score::DEFAULT_CRITICAL_FLOOR;

/// Config file names searched in the audited root.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["readycheck.yaml", ".readycheck.yaml"];

/// Category names known to the built-in analyzer set.
pub const KNOWN_CATEGORIES: &[&str] = &["structure", "theming", "bundle", "hygiene"];

/// Top-level audit configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AuditConfig {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub name: String,
    /// Directory names never descended into (replaces the default list).
    #[serde(default)]
    pub excluded_dirs: Vec<String>,
    /// Categories scoring below this count as critical issues (default: 50).
    #[serde(default)]
    pub critical_floor: Option<i32>,
    /// Per-analyzer wall-clock budget in seconds (default: 30).
    #[serde(default)]
    pub analyzer_timeout_secs: Option<u64>,
    /// Categories to run; empty means all registered analyzers.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub theming: Option<ThemingConfig>,
    #[serde(default)]
    pub bundle: Option<BundleConfig>,
}

impl AuditConfig {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: AuditConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Look for a config file in `root`; absence is not an error.
    pub fn discover<P: AsRef<Path>>(root: P) -> anyhow::Result<Option<Self>> {
        for name in DEFAULT_CONFIG_NAMES {
            let path = root.as_ref().join(name);
            if path.exists() {
                return Ok(Some(Self::parse_file(&path)?));
            }
        }
        Ok(None)
    }

    /// Excluded directory names, falling back to the built-in list.
    pub fn excluded_dirs(&self) -> Vec<String> {
        if self.excluded_dirs.is_empty() {
            DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect()
        } else {
            self.excluded_dirs.clone()
        }
    }

    /// Score floor below which a category counts as critical.
    pub fn critical_floor(&self) -> i32 {
        self.critical_floor.unwrap_or(DEFAULT_CRITICAL_FLOOR)
    }

    /// Per-analyzer timeout in seconds.
    pub fn analyzer_timeout_secs(&self) -> u64 {
        self.analyzer_timeout_secs.unwrap_or(30)
    }

    /// Whether a category is enabled (empty filter enables everything).
    pub fn category_enabled(&self, category: &str) -> bool {
        self.categories.is_empty() || self.categories.iter().any(|c| c == category)
    }
}

/// Knobs for the theming analyzer.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ThemingConfig {
    /// Points deducted per missing theming marker (default: 10).
    #[serde(default)]
    pub marker_deduction: Option<i32>,
}

impl ThemingConfig {
    pub fn marker_deduction(&self) -> i32 {
        self.marker_deduction.unwrap_or(10)
    }
}

/// Knobs for the bundle analyzer.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BundleConfig {
    /// Build output directory names to inspect (default: dist, build).
    #[serde(default)]
    pub output_dirs: Vec<String>,
    /// Budget for total script payload in KB (default: 500).
    #[serde(default)]
    pub max_total_script_kb: Option<u64>,
    /// Budget for a single script file in KB (default: 250).
    #[serde(default)]
    pub max_script_kb: Option<u64>,
    /// Budget for total stylesheet payload in KB (default: 100).
    #[serde(default)]
    pub max_style_kb: Option<u64>,
}

impl BundleConfig {
    pub fn output_dirs(&self) -> Vec<String> {
        if self.output_dirs.is_empty() {
            vec!["dist".to_string(), "build".to_string()]
        } else {
            self.output_dirs.clone()
        }
    }

    pub fn max_total_script_kb(&self) -> u64 {
        self.max_total_script_kb.unwrap_or(500)
    }

    pub fn max_script_kb(&self) -> u64 {
        self.max_script_kb.unwrap_or(250)
    }

    pub fn max_style_kb(&self) -> u64 {
        self.max_style_kb.unwrap_or(100)
    }
}

/// Validate a config, returning an error describing the first problem.
pub fn validate(config: &AuditConfig) -> anyhow::Result<()> {
    // Floor of at least 1 so a failed category (score 0) always counts
    // as critical.
    if let Some(floor) = config.critical_floor {
        if !(1..=100).contains(&floor) {
            anyhow::bail!("critical_floor must be between 1 and 100, got {}", floor);
        }
    }

    if let Some(timeout) = config.analyzer_timeout_secs {
        if timeout == 0 {
            anyhow::bail!("analyzer_timeout_secs must be greater than zero");
        }
    }

    for category in &config.categories {
        if !KNOWN_CATEGORIES.contains(&category.as_str()) {
            anyhow::bail!(
                "unknown category {:?} (known: {})",
                category,
                KNOWN_CATEGORIES.join(", ")
            );
        }
    }

    if let Some(theming) = &config.theming {
        if let Some(d) = theming.marker_deduction {
            if !(0..=100).contains(&d) {
                anyhow::bail!("theming.marker_deduction must be between 0 and 100, got {}", d);
            }
        }
    }

    Ok(())
}
