//! Command-line interface for readycheck.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::analyzers;
use crate::config::{self, AuditConfig};
use crate::persist;
use crate::report;
use crate::runner::Runner;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Default location for the persisted report, relative to the audited root.
pub const DEFAULT_REPORT_PATH: &str = "reports/readycheck.json";

/// Starter configuration written by `readycheck init`.
const CONFIG_TEMPLATE: &str = include_str!("templates/readycheck.yaml");

/// Production readiness audit engine.
///
/// Readycheck walks a web project tree, runs independent category
/// analyzers against file contents, aggregates their scores into an
/// overall grade, and persists a machine-readable report. The exit code
/// reflects whether critical issues were found, so CI can gate on it.
#[derive(Parser)]
#[command(name = "readycheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Audit a project tree and persist the report
    #[command(visible_alias = "check")]
    Audit(AuditArgs),
    /// Create a starter readycheck.yaml
    Init(InitArgs),
}

/// Arguments for the audit command.
#[derive(Parser)]
pub struct AuditArgs {
    /// Project root to audit
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Where to write the JSON report (relative paths resolve under the root)
    #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
    pub output: PathBuf,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Path to a config YAML (default: auto-discover in the root)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip writing the report file
    #[arg(long)]
    pub no_save: bool,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "readycheck.yaml")]
    pub output: PathBuf,
}

/// Run the audit command.
pub fn run_audit(args: &AuditArgs) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    // Load config: explicit path, or auto-discovered, or defaults
    let config = match &args.config {
        Some(path) => match AuditConfig::parse_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error parsing config: {}", e);
                return Ok(EXIT_ERROR);
            }
        },
        None => match AuditConfig::discover(&args.path) {
            Ok(found) => found.unwrap_or_default(),
            Err(e) => {
                eprintln!("Error parsing discovered config: {}", e);
                return Ok(EXIT_ERROR);
            }
        },
    };

    if let Err(e) = config::validate(&config) {
        eprintln!("Error: invalid config: {}", e);
        return Ok(EXIT_ERROR);
    }

    let analyzers = analyzers::default_analyzers(&config);
    let runner = Runner::new(&args.path).with_config(config);
    let analysis = runner.run(&analyzers);

    // Console output first: the operator sees results even if the write
    // below fails.
    let root_str = args.path.to_string_lossy();
    match args.format.as_str() {
        "json" => println!("{}", analysis.to_json()?),
        _ => report::write_pretty(&root_str, &analysis),
    }

    if !args.no_save {
        let dest = resolve_output(&args.path, &args.output);
        persist::persist(&analysis, &dest)?;
        if args.format != "json" {
            println!("  {}", format!("report saved to {}", dest.display()));
        }
    }

    if analysis.summary.critical_issues == 0 {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}

/// Resolve the report destination relative to the audited root.
fn resolve_output(root: &Path, output: &Path) -> PathBuf {
    if output.is_absolute() {
        output.to_path_buf()
    } else {
        root.join(output)
    }
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, CONFIG_TEMPLATE) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to fit your project", args.output.display());
    println!("  2. Run: readycheck audit .");

    Ok(EXIT_SUCCESS)
}
