//! Binary entrypoint for the textquest CLI.
//!
//! Commands:
//! - `play [--script <file>]` - play interactively on stdin, or replay a file of commands (default)
//! - `init` - write a starter `config.toml`
//!
//! See the library crate docs for module-level details: `textquest::`.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info, warn};
use tokio::io::BufReader;

use textquest::config::Config;
use textquest::game::Game;
use textquest::shell::Shell;

#[derive(Parser)]
#[command(name = "textquest")]
#[command(about = "A tiny text adventure: pack your bag and get to the university")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (the default when no subcommand is given)
    Play {
        /// Read commands from this file instead of stdin, echoing each one
        #[arg(short, long)]
        script: Option<String>,
    },
    /// Write a default configuration file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play { script: None });

    match command {
        Commands::Init => {
            init_logging(&Config::default(), cli.verbose);
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Play { script } => {
            let config = Config::load_or_default(&cli.config).await?;
            init_logging(&config, cli.verbose);
            info!("Starting textquest v{}", env!("CARGO_PKG_VERSION"));
            if !std::path::Path::new(&cli.config).exists() {
                info!("No config file at {}; using defaults", cli.config);
            }

            let mut game = Game::new();
            let mut stdout = tokio::io::stdout();
            let result = match script {
                Some(path) => {
                    let file = tokio::fs::File::open(&path)
                        .await
                        .with_context(|| format!("Failed to open script {}", path))?;
                    Shell::new(config.game)
                        .with_echo(true)
                        .run(&mut game, BufReader::new(file), &mut stdout)
                        .await
                }
                None => {
                    Shell::new(config.game)
                        .run(&mut game, BufReader::new(tokio::io::stdin()), &mut stdout)
                        .await
                }
            };

            if let Err(e) = result {
                error!("Session aborted: {:#}", e);
                eprintln!("Ошибка чтения ввода: {:#}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn init_logging(config: &Config, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // Base level from CLI verbosity overrides config
    let base_level = match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    // Game output owns stdout; logs go to stderr
    builder.target(env_logger::Target::Stderr);

    let file = config.logging.file.as_ref().and_then(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });
    let file_failed = config.logging.file.is_some() && file.is_none();

    if let Some(f) = file {
        let mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Echo to the console only when a person is watching it
        let is_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }

    let _ = builder.try_init();

    if file_failed {
        warn!(
            "Could not open log file {:?}; logging to stderr only",
            config.logging.file
        );
    }
}
