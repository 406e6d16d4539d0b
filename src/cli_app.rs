//! Top-level CLI definition and dispatch.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell as CompletionShell, generate};
use colored::{Colorize, control};
use serde_json::{Value, json};
use thiserror::Error;

use undashed::audit::auditor::Auditor;
use undashed::audit::lister::{ListOptions, list_entry_names};
use undashed::audit::pattern::SequencePattern;
use undashed::audit::report::AuditReport;
use undashed::core::config::Config;
use undashed::logger::jsonl::{EventType, JsonlConfig, JsonlWriter, LogEntry, Severity};

/// undashed — audits directory entry names for the date-sequence convention.
#[derive(Debug, Parser)]
#[command(
    name = "undashed",
    author,
    version,
    about = "undashed - Filename Conformance Auditor",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Override config file path.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Force JSON output mode.
    #[arg(long, global = true)]
    json: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Increase verbosity.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Quiet mode (errors only).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Audit a directory's entry names against the conformance pattern.
    Audit(AuditArgs),
    /// View and seed configuration state.
    Config(ConfigArgs),
    /// Show version and optional build metadata.
    Version(VersionArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Args, Default)]
struct AuditArgs {
    /// Directory to audit (falls back to the configured audit root when omitted).
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,
    /// Override the conformance pattern for this run.
    #[arg(long, value_name = "REGEX", allow_hyphen_values = true)]
    pattern: Option<String>,
    /// Include dot-prefixed entries in the audit.
    #[arg(long)]
    hidden: bool,
    /// Skip the JSONL activity log for this run.
    #[arg(long)]
    no_log: bool,
}

#[derive(Debug, Clone, Args, Default)]
struct ConfigArgs {
    /// Config operation to run.
    #[command(subcommand)]
    command: Option<ConfigCommand>,
}

#[derive(Debug, Clone, Subcommand)]
enum ConfigCommand {
    /// Print the effective config file path.
    Path,
    /// Show the effective configuration.
    Show,
    /// Write a default config file if none exists.
    Init,
}

#[derive(Debug, Clone, Args, Default)]
struct VersionArgs {
    /// Include build metadata.
    #[arg(long)]
    build: bool,
}

#[derive(Debug, Clone, Args)]
struct CompletionsArgs {
    /// Shell to generate completion script for.
    #[arg(value_enum)]
    shell: CompletionShell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

/// CLI error type with explicit exit-code mapping.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input at runtime.
    #[error("{0}")]
    User(String),
    /// Environment/runtime failure.
    #[error("{0}")]
    Runtime(String),
    /// JSON serialization failed.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
    /// Output write failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code contract for the CLI.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::User(_) => 1,
            Self::Runtime(_) | Self::Io(_) => 2,
            Self::Json(_) => 3,
        }
    }
}

/// Dispatch CLI commands.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.no_color {
        control::set_override(false);
    }

    match &cli.command {
        Command::Audit(args) => run_audit(cli, args),
        Command::Config(args) => run_config(cli, args),
        Command::Version(args) => emit_version(cli, args),
        Command::Completions(args) => {
            let mut command = Cli::command();
            let binary_name = command.get_name().to_string();
            generate(args.shell, &mut command, binary_name, &mut io::stdout());
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Audit command
// ---------------------------------------------------------------------------

fn run_audit(cli: &Cli, args: &AuditArgs) -> Result<(), CliError> {
    let config =
        Config::load(cli.config.as_deref()).map_err(|e| CliError::Runtime(e.to_string()))?;
    let start = Instant::now();

    // Determine the audit root: CLI path or configured root.
    let root = args
        .path
        .clone()
        .unwrap_or_else(|| config.audit.root.clone());

    // The pattern must compile before the directory is touched.
    let pattern_source = args
        .pattern
        .clone()
        .unwrap_or_else(|| config.audit.pattern.clone());
    let pattern =
        SequencePattern::new(&pattern_source).map_err(|e| CliError::Runtime(e.to_string()))?;

    let options = ListOptions {
        include_hidden: args.hidden || config.audit.include_hidden,
    };

    let mut logger = (!args.no_log).then(|| {
        JsonlWriter::open(JsonlConfig {
            path: config.paths.jsonl_log.clone(),
            ..JsonlConfig::default()
        })
    });

    let entries = match list_entry_names(&root, options) {
        Ok(entries) => entries,
        Err(err) => {
            if let Some(logger) = logger.as_mut() {
                let mut entry = LogEntry::new(EventType::AuditError, Severity::Critical);
                entry.root = Some(root.display().to_string());
                entry.pattern = Some(pattern_source.clone());
                entry.error_code = Some(err.code().to_string());
                entry.error_message = Some(err.to_string());
                logger.write_entry(&entry);
                logger.flush();
            }
            return Err(CliError::Runtime(err.to_string()));
        }
    };

    let auditor = Auditor::new(pattern);
    let outcome = auditor.audit(&entries);
    let duration = start.elapsed();

    let report = AuditReport {
        root: &root,
        pattern: &pattern_source,
        outcome: &outcome,
        duration,
    };

    match output_mode(cli) {
        OutputMode::Human => {
            let mut stdout = io::stdout().lock();
            report.write_human(&mut stdout)?;
            stdout.flush()?;

            if cli.verbose {
                let summary = report.summary_line();
                if outcome.flagged.is_empty() {
                    eprintln!("{}", summary.green());
                } else {
                    eprintln!("{}", summary.yellow());
                }
            }
        }
        OutputMode::Json => write_json_line(&report.to_json())?,
    }

    if let Some(logger) = logger.as_mut() {
        let mut entry = LogEntry::new(EventType::AuditComplete, Severity::Info);
        entry.root = Some(root.display().to_string());
        entry.pattern = Some(pattern_source);
        entry.flagged = Some(outcome.flagged.len());
        entry.conforming = Some(outcome.conforming);
        entry.total = Some(outcome.total);
        entry.duration_ms = Some(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX));
        logger.write_entry(&entry);
        logger.flush();
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Config command
// ---------------------------------------------------------------------------

fn run_config(cli: &Cli, args: &ConfigArgs) -> Result<(), CliError> {
    match args.command.as_ref().unwrap_or(&ConfigCommand::Show) {
        ConfigCommand::Path => {
            let path = cli
                .config
                .clone()
                .unwrap_or_else(Config::default_path);
            match output_mode(cli) {
                OutputMode::Human => println!("{}", path.display()),
                OutputMode::Json => {
                    write_json_line(&json!({ "config_file": path.to_string_lossy() }))?;
                }
            }
            Ok(())
        }
        ConfigCommand::Show => {
            let config = Config::load(cli.config.as_deref())
                .map_err(|e| CliError::Runtime(e.to_string()))?;
            match output_mode(cli) {
                OutputMode::Human => {
                    let rendered = toml::to_string_pretty(&config)
                        .map_err(|e| CliError::Runtime(e.to_string()))?;
                    print!("{rendered}");
                }
                OutputMode::Json => {
                    let payload = serde_json::to_value(&config)?;
                    write_json_line(&payload)?;
                }
            }
            Ok(())
        }
        ConfigCommand::Init => {
            let path = cli
                .config
                .clone()
                .unwrap_or_else(Config::default_path);
            if path.exists() {
                return Err(CliError::User(format!(
                    "config file already exists: {}",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let rendered = toml::to_string_pretty(&Config::default())
                .map_err(|e| CliError::Runtime(e.to_string()))?;
            fs::write(&path, rendered)?;

            match output_mode(cli) {
                OutputMode::Human => println!("Wrote default config to {}", path.display()),
                OutputMode::Json => {
                    write_json_line(&json!({
                        "action": "init",
                        "config_file": path.to_string_lossy(),
                    }))?;
                }
            }
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Version command
// ---------------------------------------------------------------------------

fn emit_version(cli: &Cli, args: &VersionArgs) -> Result<(), CliError> {
    let version = env!("CARGO_PKG_VERSION");
    let package = env!("CARGO_PKG_NAME");
    let target = option_env!("TARGET").unwrap_or("unknown");
    let profile = option_env!("PROFILE").unwrap_or("unknown");

    match output_mode(cli) {
        OutputMode::Human => {
            println!("undashed {version}");
            if args.build {
                println!("package: {package}");
                println!("target: {target}");
                println!("profile: {profile}");
            }
        }
        OutputMode::Json => {
            let payload = json!({
                "binary": "undashed",
                "version": version,
                "package": package,
                "build": {
                    "target": target,
                    "profile": profile,
                }
            });
            write_json_line(&payload)?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Output helpers
// ---------------------------------------------------------------------------

fn write_json_line(payload: &Value) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, payload)?;
    writeln!(stdout)?;
    Ok(())
}

fn output_mode(cli: &Cli) -> OutputMode {
    let env_mode = std::env::var("UNDASHED_OUTPUT_FORMAT").ok();
    resolve_output_mode(cli.json, env_mode.as_deref())
}

/// JSON is opt-in via flag or env; piped stdout stays in human mode, which
/// is already the flagged-names-then-count contract.
fn resolve_output_mode(json_flag: bool, env_mode: Option<&str>) -> OutputMode {
    if json_flag {
        return OutputMode::Json;
    }

    match env_mode
        .map(str::trim)
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("json") => OutputMode::Json,
        _ => OutputMode::Human,
    }
}
