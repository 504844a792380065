use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use turnplay_core::logging::{self, LoggingConfig};
use turnplay_core::{Config, FileLoggingConfig, Playback, StepCategory, Transcript, Turn};
use turnplay_ui::{App, DisplayOptions};

/// Column width for non-interactive output
const SHOW_WIDTH: usize = 100;

/// Turnplay - step through recorded multi-agent conversations
#[derive(Parser, Debug)]
#[command(name = "turnplay")]
#[command(about = "Replay multi-agent conversation transcripts turn by turn", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to turnplay.toml (default: ./turnplay.toml)
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open a transcript in the interactive player
    Play {
        /// Transcript JSON file (default: playback.transcript from config)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Print the revealed part of a transcript and exit
    Show {
        /// Transcript JSON file (default: playback.transcript from config)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Reveal turns 1 through N (default: all)
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
        upto: Option<u64>,

        /// Include processing steps for every revealed turn
        #[arg(long)]
        details: bool,
    },
    /// Validate a transcript and print a summary
    Check {
        /// Transcript JSON file (default: playback.transcript from config)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Print an example configuration file
    Config,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(|| PathBuf::from("turnplay.toml"));
    let config = Config::from_file_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let interactive = matches!(cli.command, Commands::Play { .. });
    let _log_guard = logging::init_logging(Some(logging_config(&config, cli.verbose, interactive)))
        .context("Failed to initialize logging")?;

    tracing::debug!(path = %logging::sanitize_path(&config_path), "configuration loaded");

    if cli.verbose && !interactive {
        println!("{} Using config: {}", "Info:".blue().bold(), config_path.display());
    }

    match cli.command {
        Commands::Play { file } => cmd_play(&config, file),
        Commands::Show { file, upto, details } => cmd_show(&config, file, upto, details),
        Commands::Check { file } => cmd_check(&config, file),
        Commands::Config => {
            print!("{}", Config::example());
            Ok(())
        }
    }
}

/// Logging settings for this invocation
///
/// The interactive player owns the terminal, so its logs go to the rotating
/// file only. `--verbose` raises the level and, for `play`, turns the file on.
fn logging_config(config: &Config, verbose: bool, interactive: bool) -> LoggingConfig {
    let mut logging = LoggingConfig::from(config.logging.clone());
    if verbose {
        logging = logging.with_level("debug");
    }

    if interactive {
        if verbose && logging.file.is_none() {
            logging = logging.with_file_logging(FileLoggingConfig { enabled: true, ..FileLoggingConfig::default() });
        }
        logging = logging.file_only();
    }

    logging
}

/// Pick the transcript path from the command line or config
fn resolve_transcript(config: &Config, file: Option<PathBuf>) -> Result<PathBuf> {
    file.or_else(|| config.playback.transcript.clone())
        .context("No transcript given; pass FILE or set playback.transcript in turnplay.toml")
}

/// Load, validate and wrap a transcript in a fresh playback
fn open_playback(path: &Path) -> Result<Playback> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start runtime")?;

    let transcript = runtime
        .block_on(turnplay_core::load_transcript_file(path))
        .with_context(|| format!("Failed to read transcript {}", path.display()))?;

    Playback::with_transcript(transcript).with_context(|| format!("Invalid transcript {}", path.display()))
}

/// Start the interactive player
fn cmd_play(config: &Config, file: Option<PathBuf>) -> Result<()> {
    let path = resolve_transcript(config, file)?;
    let playback = open_playback(&path)?;

    let privacy = LoggingConfig::from(config.logging.clone()).privacy;
    let mut app = App::new(playback, DisplayOptions::from(&config.playback))
        .with_privacy(privacy)
        .with_source(path);

    turnplay_ui::run(&mut app).context("Terminal error")?;
    Ok(())
}

/// Print the revealed prefix as colored text
fn cmd_show(config: &Config, file: Option<PathBuf>, upto: Option<u64>, details: bool) -> Result<()> {
    let path = resolve_transcript(config, file)?;
    let mut playback = open_playback(&path)?;

    reveal(&mut playback, upto, details)?;
    print!("{}", render_text(&playback, DisplayOptions::from(&config.playback), SHOW_WIDTH));
    Ok(())
}

/// Validate a transcript and print its summary
fn cmd_check(config: &Config, file: Option<PathBuf>) -> Result<()> {
    let path = resolve_transcript(config, file)?;
    let playback = open_playback(&path)?;
    print!("{}", summary_text(playback.transcript()));
    println!("{} {} is a valid transcript", "Success:".green().bold(), path.display());
    Ok(())
}

/// Advance to turn `upto` (saturating) and optionally expand every revealed turn
fn reveal(playback: &mut Playback, upto: Option<u64>, details: bool) -> Result<()> {
    match upto {
        Some(n) => {
            for _ in 1..n {
                if !playback.advance().moved() {
                    break;
                }
            }
        }
        None => {
            playback.reveal_all();
        }
    }

    if details {
        let ids: Vec<_> = playback.visible_prefix().iter().map(|t| t.id().clone()).collect();
        for id in ids {
            playback.set_detail(&id, true)?;
        }
    }

    Ok(())
}

fn summary_text(transcript: &Transcript) -> String {
    let agents = transcript.agents();
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", "Session:".blue().bold(), display_session(&transcript.session_name)));
    out.push_str(&format!("{} {}\n", "Turns:".blue().bold(), transcript.len()));
    out.push_str(&format!("{} {}\n", "Steps:".blue().bold(), transcript.step_count()));
    if agents.is_empty() {
        out.push_str(&format!("{} {}\n", "Agents:".blue().bold(), "none".dimmed()));
    } else {
        out.push_str(&format!("{} {}\n", "Agents:".blue().bold(), agents.join(", ").cyan()));
    }
    out
}

fn display_session(name: &str) -> &str {
    match name.trim() {
        "" => "untitled session",
        name => name,
    }
}

/// Plain-terminal rendition of what the player would show
fn render_text(playback: &Playback, options: DisplayOptions, width: usize) -> String {
    let (shown, total) = playback.progress();
    let mut out = String::new();

    out.push_str(&format!(
        "{}  {}\n",
        display_session(playback.session_name()).bold(),
        format!("turn {}/{}", shown, total).cyan()
    ));
    if options.show_agents {
        let agents = playback.transcript().agents();
        if !agents.is_empty() {
            out.push_str(&format!("{} {}\n", "agents:".dimmed(), agents.join(", ").blue()));
        }
    }

    if total == 0 {
        out.push_str(&format!("\n{}\n", "This transcript has no turns.".dimmed()));
        return out;
    }

    for (index, turn) in playback.visible_prefix().iter().enumerate() {
        out.push('\n');
        render_turn_text(&mut out, turn, index, playback.is_detail_visible(turn.id()), options, width);
    }
    out
}

fn render_turn_text(
    out: &mut String, turn: &Turn, index: usize, expanded: bool, options: DisplayOptions, width: usize,
) {
    out.push_str(&format!("{} {}\n", turn.display_label(index).bold(), format!("#{}", turn.id()).dimmed()));
    push_wrapped(out, "User", &turn.user_message, width);
    push_wrapped(out, "Agent", &turn.agent_message, width);

    if !turn.has_steps() {
        return;
    }

    if !expanded {
        let count = turn.steps().len();
        let noun = if count == 1 { "step" } else { "steps" };
        out.push_str(&format!("    {}\n", format!("▸ {} {}", count, noun).dimmed()));
        return;
    }

    for step in turn.steps() {
        let entry = step.log_entry();
        let delay = if options.show_delays && step.simulated_delay_ms > 0 {
            format!("  {}", turnplay_ui::components::format_delay(step.simulated_delay_ms))
        } else {
            String::new()
        };
        out.push_str(&format!(
            "    {} {}: {}{}\n",
            category_tag(step.category()),
            entry.agent.bold(),
            entry.content,
            delay.dimmed()
        ));
    }
}

fn category_tag(category: StepCategory) -> String {
    let tag = format!("[{}]", category.as_str());
    match category {
        StepCategory::Research => tag.cyan().to_string(),
        StepCategory::Clarify => tag.magenta().to_string(),
        StepCategory::Respond => tag.blue().to_string(),
        StepCategory::Route => tag.yellow().to_string(),
        StepCategory::Complete => tag.green().to_string(),
        StepCategory::General => tag.dimmed().to_string(),
    }
}

fn push_wrapped(out: &mut String, role: &str, text: &str, width: usize) {
    let label = format!("  {}: ", role);
    let indent = " ".repeat(label.len());
    let options = textwrap::Options::new(width).initial_indent(&label).subsequent_indent(&indent);
    out.push_str(&textwrap::fill(text, options));
    out.push('\n');
}
