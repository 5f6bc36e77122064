use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::cli::output::{render_summary, render_text_export};
use crate::cli::init_tracing;
use crate::config::{
    DEFAULT_ACTIVITY_WINDOW_DAYS, DEFAULT_FILES_PER_PROJECT, DEFAULT_MAX_MESSAGE_CHARS, ScanConfig,
};
use crate::indexer::{build_activity_report, export_messages, messages_per_day};
use crate::utils::{default_projects_dir, format_path_with_tilde};

/// Number of dates listed in the export's per-day breakdown
const DAILY_BREAKDOWN_DAYS: usize = 15;

#[derive(Parser)]
#[command(name = "ai-activity-digest")]
#[command(version = "0.1.0")]
#[command(about = "Summarize and export Claude Code conversation activity", long_about = None)]
pub struct Cli {
    /// Log debug details (skipped lines and files) to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize per-project activity over the last few days
    Summary(SummaryArgs),
    /// Export every message as a flat list, newest first
    Export(ExportArgs),
}

#[derive(Args)]
pub struct SummaryArgs {
    /// Projects directory (defaults to ~/.claude/projects)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Include files modified within this many days
    #[arg(long, default_value_t = DEFAULT_ACTIVITY_WINDOW_DAYS)]
    pub days: u32,

    /// Filenames listed per project and day in the report
    #[arg(long, default_value_t = DEFAULT_FILES_PER_PROJECT)]
    pub files_per_project: usize,

    /// Write the full report as JSON to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Projects directory (defaults to ~/.claude/projects)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Skip files modified more than this many days ago
    #[arg(long)]
    pub horizon_days: Option<u32>,

    /// Truncate messages longer than this many characters
    #[arg(long, default_value_t = DEFAULT_MAX_MESSAGE_CHARS)]
    pub max_chars: usize,

    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Text,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Some(Commands::Summary(args)) => show_summary(args)?,
        Some(Commands::Export(args)) => run_export(args)?,
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root.to_path_buf()),
        None => default_projects_dir(),
    }
}

fn show_summary(args: &SummaryArgs) -> Result<()> {
    let root = resolve_root(args.root.as_deref())?;
    let config = ScanConfig::new(&root)
        .with_activity_window_days(args.days)
        .with_files_per_project(args.files_per_project);

    let report = build_activity_report(&config)?;
    print!("{}", render_summary(&report, &format_path_with_tilde(&root)));

    if let Some(output) = &args.output {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        write_output(output, &json)?;
        println!();
        println!("Report written to {}", output.display());
    }

    Ok(())
}

fn run_export(args: &ExportArgs) -> Result<()> {
    let root = resolve_root(args.root.as_deref())?;
    let config = ScanConfig::new(&root)
        .with_export_horizon_days(args.horizon_days)
        .with_max_message_chars(args.max_chars);

    let entries = export_messages(&config)?;

    let rendered = match args.format {
        ExportFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&entries).context("Failed to serialize export")?;
            json.push('\n');
            json
        }
        ExportFormat::Text => render_text_export(&entries),
    };

    match &args.output {
        Some(output) => write_output(output, &rendered)?,
        None => io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .context("Failed to write export to stdout")?,
    }

    eprintln!("Exported {} messages", entries.len());
    for (date, count) in messages_per_day(&entries).into_iter().take(DAILY_BREAKDOWN_DAYS) {
        let label = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map(|d| d.format("%a %d %b %Y").to_string())
            .unwrap_or(date);
        eprintln!("  {}: {} messages", label, count);
    }

    Ok(())
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
