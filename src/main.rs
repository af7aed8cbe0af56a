use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

use sm_debug::{
    config,
    console::{ConsoleOutput, DefaultChoice, TerminalPrompt},
    constants::CONFIG_ENV,
    ports::InteractionPort,
    report::report,
    theme,
};

/// Show states and transitions of state machine graphs
#[derive(Debug, Parser)]
#[command(name = "sm-debug", version, about, long_about = None)]
struct Cli {
    /// A state machine graph
    graph: Option<String>,

    /// Configuration file (.json, .yaml or .yml)
    #[arg(short, long, env = CONFIG_ENV, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Never prompt; use the first configured graph when none is named
    #[arg(short = 'n', long)]
    no_interaction: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Application entry point
fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = config::load(cli.config.as_deref()).wrap_err("Failed to load configuration")?;
    let color = theme::color_enabled(cli.no_color);

    let stdout = io::stdout();
    let mut output = ConsoleOutput::new(stdout.lock(), color);

    let mut default_choice = DefaultChoice;
    let mut prompt;
    let interact: &mut dyn InteractionPort = if cli.no_interaction {
        &mut default_choice
    } else {
        prompt = TerminalPrompt::new(io::stdin().lock(), io::stdout(), color);
        &mut prompt
    };

    let status = report(&config, cli.graph.as_deref(), interact, &mut output)
        .wrap_err("Failed to write the state machine report")?;

    Ok(status.into())
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ============================================================================
// Tests
// ============================================================================
