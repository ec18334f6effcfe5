mod ui;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use zcalc::calculator::{CalculatorEngine, clipboard_text, copy_to_clipboard};
use zcalc::config::CalcConfig;
use zcalc::input::parse_script;

#[derive(Parser)]
#[command(name = "zcalc", version, about = "A keyboard-driven four-function calculator")]
struct Cli {
    /// Path to a config file (defaults to <config dir>/zcalc/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive calculator (default).
    Interactive,
    /// Replay a key script such as "5+3*2=" and print the readout.
    Keys {
        /// Keys to press; named keys go in brackets, e.g. "12[bs]3[enter]".
        script: String,
        /// Print the readout as JSON.
        #[arg(long)]
        json: bool,
        /// Copy the final result to the clipboard.
        #[arg(long)]
        copy: bool,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CalcConfig::load(cli.config.as_deref())?;
    let engine = CalculatorEngine::with_options(config.engine_options(), config.display_options());

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => ui::run(engine),
        Commands::Keys { script, json, copy } => run_keys(engine, &script, json, copy),
    }
}

fn run_keys(mut engine: CalculatorEngine, script: &str, json: bool, copy: bool) -> Result<()> {
    let commands = parse_script(script).with_context(|| format!("invalid key script {script:?}"))?;
    let snapshot = engine.apply_all(commands);

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        if !snapshot.history.is_empty() {
            println!("{}", snapshot.history);
        }
        println!("{}", snapshot.display);
    }

    if copy {
        copy_to_clipboard(clipboard_text(engine.state()))?;
    }

    Ok(())
}
