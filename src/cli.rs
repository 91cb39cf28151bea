use std::io::Write;

use chrono::DateTime;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::domains::ChatMessage;
use crate::error::{Result, SpendwiseChatError};
use crate::store::TranscriptStore;

#[derive(Parser, Debug)]
#[command(name = "spendwise-chat")]
#[command(about = "Inspect and edit a Spendwise chat transcript")]
pub struct Cli {
    /// JSON config file; defaults apply when omitted.
    #[arg(long)]
    pub config: Option<String>,

    /// Overrides the transcript path from the config.
    #[arg(long, env = "SPENDWISE_TRANSCRIPT")]
    pub transcript: Option<String>,

    /// Log at debug level unless SPENDWISE_LOG says otherwise.
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a new message stamped with the current time.
    Add {
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Print the most recent messages.
    List {
        #[arg(long, default_value_t = 0)]
        limit: usize,
    },
    /// Reset the transcript to empty, even if the file on disk is unreadable.
    Clear,
}

pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::convention_defaults(),
    };
    let path = cli
        .transcript
        .unwrap_or_else(|| config.resolved_transcript_path());
    let store = TranscriptStore::new(path);

    match cli.command {
        Command::Add { role, content } => {
            let mut history = store.load()?;
            history.set_limit(config.history_config().max_messages.unwrap_or(0));
            let line = render(history.record(role.as_deref(), content.as_deref()));
            store.save(&history)?;
            emit(out, &line)?;
        }
        Command::List { limit } => {
            let history = store.load()?;
            for message in history.recent(limit) {
                emit(out, &render(message))?;
            }
        }
        Command::Clear => store.clear()?,
    }
    Ok(())
}

/// `[<rfc3339>] role: content`, or raw milliseconds when chrono cannot place the timestamp.
pub fn render(message: &ChatMessage) -> String {
    let when = DateTime::from_timestamp_millis(message.timestamp())
        .map(|time| time.to_rfc3339())
        .unwrap_or_else(|| message.timestamp().to_string());
    format!(
        "[{when}] {}: {}",
        message.role().unwrap_or_default(),
        message.content().unwrap_or_default()
    )
}

fn emit<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{line}").map_err(|e| SpendwiseChatError::Io(e.to_string()))
}
