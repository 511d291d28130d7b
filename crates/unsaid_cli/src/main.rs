//! Command-line front end over `unsaid_core`.
//!
//! # Responsibility
//! - Submit one entry or print the feed against a local SQLite store.
//! - Keep a `ping` probe to verify core crate wiring.

use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use unsaid_core::db::open_db;
use unsaid_core::{
    default_log_level, init_logging, now_epoch_ms, CoreConfig, FeedService, FeedStatus,
    SqliteEntryRepository, SubmissionPipeline,
};

/// unsaid - leave a thought anonymously, read what others left
#[derive(Parser, Debug)]
#[command(name = "unsaid", version, about = "Write what you couldn't say.")]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, default_value = "unsaid.sqlite3")]
    db: PathBuf,

    /// TOML config file (word limit, lanes, blocked phrases)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Leave an entry
    Write {
        /// Entry text; multiple arguments are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Print every entry, newest first
    Read {
        /// Print lanes side by side instead of a single column
        #[arg(long)]
        lanes: bool,
    },

    /// Check core wiring
    Ping,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let config = match cli.config.as_ref() {
        Some(path) => CoreConfig::load(path)?,
        None => CoreConfig::default(),
    };

    match cli.command {
        Command::Ping => {
            println!("unsaid_core ping={}", unsaid_core::ping());
            println!("unsaid_core version={}", unsaid_core::core_version());
            Ok(ExitCode::SUCCESS)
        }
        Command::Write { text } => {
            let conn = open_db(&cli.db)?;
            let repo = SqliteEntryRepository::try_new(&conn)?;
            let pipeline = SubmissionPipeline::from_config(&repo, &config);
            let text = text.join(" ");

            match pipeline.submit(&text) {
                Ok(entry) => {
                    println!("Left it here. ({})", pipeline.budget(&entry.content));
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    eprintln!("{}", err.user_message());
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Read { lanes } => {
            let conn = open_db(&cli.db)?;
            let repo = SqliteEntryRepository::try_new(&conn)?;
            let feed = FeedService::from_config(&repo, &config).load(now_epoch_ms());

            match feed.status {
                FeedStatus::Unavailable => {
                    eprintln!("Couldn't load thoughts right now.");
                    return Ok(ExitCode::FAILURE);
                }
                FeedStatus::Empty => {
                    println!("No thoughts yet.");
                    return Ok(ExitCode::SUCCESS);
                }
                FeedStatus::Loaded => {}
            }

            if lanes {
                for (index, lane) in feed.lanes.iter().enumerate() {
                    println!("== lane {} ==", index + 1);
                    for card in lane {
                        print_card(&card.preview, card.truncated, &card.age_label);
                    }
                }
            } else {
                for card in feed.cards() {
                    print_card(&card.preview, card.truncated, &card.age_label);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_card(preview: &str, truncated: bool, age_label: &str) {
    if truncated {
        println!("{preview} ... Read more");
    } else {
        println!("{preview}");
    }
    println!("  - {age_label}");
    println!();
}
