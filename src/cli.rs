//! Command-Line Interface
//!
//! Argument parsing and dispatch to the command handlers.

use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncReadExt, BufReader};
use tracing::debug;

use crate::commands::{
    analyze_message, check_health, exit_code, format_analysis, init_settings, run_interactive,
    show_settings, SessionOptions,
};
use crate::models::response::{CommandResponse, HealthResponse};
use crate::models::settings::SettingsUpdate;
use crate::state::AppState;
use crate::storage::ConfigService;
use crate::utils::error::{AppError, AppResult};
use crate::view::Painter;

#[derive(Parser, Debug)]
#[command(
    name = "recruiter-check",
    version,
    about = "Paste a recruiter message, get a scam-risk assessment"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Settings file (default ~/.recruiter-check/config.json)")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Base URL of the analysis service")]
    pub api_url: Option<String>,
    #[arg(long, global = true, value_name = "SECS", help = "Request timeout in seconds")]
    pub timeout: Option<u64>,
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze one message from an argument, a file or stdin
    Analyze(AnalyzeArgs),
    /// Analyze messages one after another until end of input
    Interactive,
    /// Check that the analysis service is reachable
    Health,
    /// Inspect or create the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Message text; read from stdin when neither TEXT nor --file is given
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,
    #[arg(long, short = 'f', help = "Read the message from a file")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Write a settings file with default values
    Init {
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

impl Cli {
    /// Overrides carried by the global flags
    pub fn settings_update(&self) -> SettingsUpdate {
        SettingsUpdate {
            api_url: self.api_url.clone(),
            request_timeout_secs: self.timeout,
            color: self.no_color.then_some(false),
        }
    }
}

/// Run the parsed command and return the process exit code.
pub async fn execute(cli: Cli) -> AppResult<i32> {
    let mut settings = ConfigService::load(cli.config.clone())?;
    settings.apply_env()?;
    let update = cli.settings_update();
    if !update.is_empty() {
        settings.apply_overrides(update)?;
    }

    let config = settings.get_config_clone();
    let painter = Painter::new(config.color && color_supported());
    debug!(api_url = %config.api_url, timeout = config.request_timeout_secs, "settings resolved");

    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Command::Config { action } => {
            let code = match action {
                ConfigAction::Show => {
                    let response = show_settings(&settings);
                    write_settings(&mut stdout, &response, cli.json)?;
                    0
                }
                ConfigAction::Init { force } => {
                    let response = init_settings(&settings, *force);
                    write_init(&mut stdout, &response, cli.json)?;
                    if response.success {
                        0
                    } else {
                        1
                    }
                }
            };
            Ok(code)
        }
        Command::Health => {
            let state = AppState::new(config)?;
            let response = check_health(&state).await;
            write_health(&mut stdout, &response, painter, cli.json)?;
            Ok(if response.success { 0 } else { 1 })
        }
        Command::Analyze(args) => {
            let text = read_message(args).await?;
            let state = AppState::new(config)?;
            let response = analyze_message(&state, &text).await;
            stdout.write_all(format_analysis(&response, painter, cli.json)?.as_bytes())?;
            Ok(exit_code(&response))
        }
        Command::Interactive => {
            let state = AppState::new(config)?;
            let reader = BufReader::new(tokio::io::stdin());
            let options = SessionOptions {
                painter,
                json: cli.json,
            };
            let summary = run_interactive(&state, reader, &mut stdout, options).await?;
            if !cli.json {
                writeln!(
                    stdout,
                    "\n{} analyzed, {} failed",
                    summary.submitted, summary.failed
                )?;
            }
            Ok(if summary.failed == 0 { 0 } else { 1 })
        }
    }
}

fn color_supported() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

async fn read_message(args: &AnalyzeArgs) -> AppResult<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path).map_err(|e| {
            AppError::validation(format!("cannot read {}: {}", path.display(), e))
        });
    }
    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;
    Ok(text)
}

fn write_settings<W: Write>(
    out: &mut W,
    response: &CommandResponse<crate::commands::SettingsReport>,
    json: bool,
) -> AppResult<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(response)?)?;
        return Ok(());
    }
    if let Some(report) = &response.data {
        let source = if report.from_file {
            "loaded"
        } else {
            "not found, using defaults"
        };
        writeln!(out, "# {} ({})", report.config_path.display(), source)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&report.config)?)?;
    }
    Ok(())
}

fn write_init<W: Write>(
    out: &mut W,
    response: &CommandResponse<PathBuf>,
    json: bool,
) -> AppResult<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(response)?)?;
        return Ok(());
    }
    match (&response.data, &response.error) {
        (Some(path), _) => writeln!(out, "Wrote default settings to {}", path.display())?,
        (None, Some(error)) => writeln!(out, "{}", error)?,
        (None, None) => {}
    }
    Ok(())
}

fn write_health<W: Write>(
    out: &mut W,
    response: &CommandResponse<HealthResponse>,
    painter: Painter,
    json: bool,
) -> AppResult<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(response)?)?;
        return Ok(());
    }
    let Some(health) = &response.data else {
        return Ok(());
    };
    let style = if response.success {
        owo_colors::Style::new().green().bold()
    } else {
        owo_colors::Style::new().red().bold()
    };
    write!(
        out,
        "Analysis service at {}: {}",
        health.endpoint,
        painter.paint(&health.status, style)
    )?;
    match &response.error {
        Some(error) => writeln!(out, " ({})", error)?,
        None => writeln!(out)?,
    }
    Ok(())
}
