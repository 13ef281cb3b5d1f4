use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use crate::config::AnalysisConfig;
use crate::export::{resolve_output_path, write_export};
use crate::filters::FilterType;
use crate::models::{AnalysisStats, TimelineEvent};
use crate::session::Session;
use crate::tui::run_interactive;
use crate::utils::{format_path_with_tilde, single_line, strip_ansi_codes};

#[derive(Parser)]
#[command(name = "care-journey-timeline")]
#[command(version)]
#[command(about = "Extract and browse decisions and milestones from healthcare chat logs", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v warn, -vv info, -vvv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Analysis config file (TOML)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Overrides for individual analysis parameters
#[derive(Args, Debug, Default, Clone)]
pub struct AnalysisArgs {
    /// Days before a decision in which messages count as related
    #[arg(long, value_name = "DAYS", global = true)]
    pub window_days: Option<i64>,

    /// Characters quoted per evidence excerpt
    #[arg(long, value_name = "CHARS", global = true)]
    pub excerpt_chars: Option<usize>,

    /// Maximum number of milestone events
    #[arg(long, value_name = "N", global = true)]
    pub max_milestones: Option<usize>,
}

impl AnalysisArgs {
    pub fn apply(&self, mut config: AnalysisConfig) -> Result<AnalysisConfig> {
        if let Some(days) = self.window_days {
            config.related_window_days = days;
        }
        if let Some(chars) = self.excerpt_chars {
            config.evidence_excerpt_chars = chars;
        }
        if let Some(max) = self.max_milestones {
            config.max_milestones = max;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the extracted timeline
    Timeline {
        /// Chat-log export (JSON array)
        file: PathBuf,

        /// Only events whose title, author or summary contain this text
        #[arg(short, long)]
        search: Option<String>,

        /// Event type to show (all, decision, milestone)
        #[arg(short = 't', long = "type", default_value = "all")]
        filter_type: FilterType,

        /// Filter query, e.g. "author:ruby since:2025-01-01"
        #[arg(short, long)]
        query: Option<String>,

        /// Include the analysis sections of each event
        #[arg(short, long)]
        details: bool,
    },
    /// Show the Journey Overview statistics
    Stats {
        /// Chat-log export (JSON array)
        file: PathBuf,
    },
    /// Write the analysis to a JSON file
    Export {
        /// Chat-log export (JSON array)
        file: PathBuf,

        /// Output path (default: care-journey-analysis-YYYY-MM-DD.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Search term recorded with the export
        #[arg(short, long)]
        search: Option<String>,

        /// Event type recorded with the export
        #[arg(short = 't', long = "type", default_value = "all")]
        filter_type: FilterType,
    },
    /// Browse the timeline interactively
    Browse {
        /// Chat-log export (JSON array)
        file: PathBuf,
    },
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        _ => Level::DEBUG,
    };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let config = cli.analysis.apply(AnalysisConfig::load(cli.config.as_deref())?)?;
    debug!("Analysis config: {:?}", config);

    match command {
        Commands::Timeline { file, search, filter_type, query, details } => {
            let mut session = load_session(file, &config)?
                .with_search_term(search.clone().unwrap_or_default())
                .with_filter_type(*filter_type);
            if let Some(query) = query {
                session = session.with_query(query).context("Invalid --query")?;
            }
            print_timeline(&session, *details);
        }
        Commands::Stats { file } => {
            let session = load_session(file, &config)?;
            print_stats(file, &session);
        }
        Commands::Export { file, output, search, filter_type } => {
            let session = load_session(file, &config)?
                .with_search_term(search.clone().unwrap_or_default())
                .with_filter_type(*filter_type);
            let doc = session.export(Utc::now());
            let path = resolve_output_path(output.as_deref(), &doc);
            write_export(&doc, &path)?;
            println!("Exported {} events to {}", doc.analysis.len(), path.display());
        }
        Commands::Browse { file } => {
            let session = load_session(file, &config)?;
            let export_dir = env::current_dir().context("Failed to resolve current directory")?;
            run_interactive(session, export_dir)?;
        }
    }

    Ok(())
}

fn load_session(file: &Path, config: &AnalysisConfig) -> Result<Session> {
    Ok(Session::empty().load_file(file, config)?)
}

fn print_timeline(session: &Session, details: bool) {
    let events = session.visible_events();
    let total = session.timeline().len();

    if events.is_empty() {
        if total == 0 {
            println!("No decisions or milestones found");
        } else {
            println!("No events match the current filters ({} total)", total);
        }
        return;
    }

    for event in &events {
        if details {
            println!("{}", strip_ansi_codes(&event.report()));
        } else {
            println!("{}", timeline_row(event));
        }
    }

    if events.len() < total {
        println!();
        println!("{} of {} events shown", events.len(), total);
    }
}

fn timeline_row(event: &TimelineEvent) -> String {
    format!(
        "{}  {:<9}  {:<16}  {}",
        event.timestamp.format("%Y-%m-%d"),
        event.kind.label(),
        single_line(&event.author),
        single_line(&event.title)
    )
}

fn print_stats(file: &Path, session: &Session) {
    let stats: &AnalysisStats = session.stats();
    let or_none = |items: Vec<String>| {
        if items.is_empty() { "none".to_string() } else { items.join(", ") }
    };

    println!("Journey Overview");
    println!("================");
    println!("Chat log: {}", format_path_with_tilde(file));
    println!("Log entries: {}", session.raw_entries().len());
    println!();
    println!("Total events: {}", stats.total_events);
    println!("  Decisions: {}", stats.decisions);
    println!("  Milestones: {}", stats.milestones);
    println!("Time span: {}", stats.time_span.as_deref().unwrap_or("n/a"));
    println!(
        "Team members: {}",
        or_none(stats.team_members.iter().map(|m| single_line(m)).collect())
    );
    println!("Key metrics: {}", or_none(stats.key_metrics.clone()));
    println!("Care phases: {}", or_none(stats.care_phases.clone()));
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_timeline_args() {
        let cli = Cli::try_parse_from([
            "care-journey-timeline",
            "-vv",
            "timeline",
            "log.json",
            "--type",
            "milestone",
            "--search",
            "bp",
            "--window-days",
            "14",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.analysis.window_days, Some(14));
        match cli.command {
            Some(Commands::Timeline { file, filter_type, search, details, .. }) => {
                assert_eq!(file, PathBuf::from("log.json"));
                assert_eq!(filter_type, FilterType::Milestone);
                assert_eq!(search.as_deref(), Some("bp"));
                assert!(!details);
            }
            _ => panic!("expected timeline command"),
        }
    }

    #[test]
    fn test_invalid_type_rejected() {
        let result =
            Cli::try_parse_from(["care-journey-timeline", "timeline", "log.json", "--type", "note"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_analysis_args_override_config() {
        let args = AnalysisArgs { window_days: Some(3), excerpt_chars: None, max_milestones: Some(2) };
        let config = args.apply(AnalysisConfig::default()).unwrap();
        assert_eq!(config.related_window_days, 3);
        assert_eq!(config.evidence_excerpt_chars, 100);
        assert_eq!(config.max_milestones, 2);
    }

    #[test]
    fn test_analysis_args_validated() {
        let args = AnalysisArgs { excerpt_chars: Some(0), ..AnalysisArgs::default() };
        assert!(args.apply(AnalysisConfig::default()).is_err());
    }
}
