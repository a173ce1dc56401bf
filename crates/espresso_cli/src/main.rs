//! Command-line front-end for the notes core.
//!
//! # Responsibility
//! - Drive the same façade the GUI uses, one operation per invocation.
//! - Keep output deterministic for scripting and quick local checks.

use clap::{Parser, Subcommand};
use espresso_core::{
    core_version, default_log_level, init_logging, JsonFileNoteRepository, NoteService, SaveStatus,
};
use log::warn;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "espresso", about = "Manage notes stored in a JSON file")]
struct Cli {
    /// Notes file. Defaults to $ESPRESSO_NOTES_PATH or notes/notes.json.
    #[arg(long, value_name = "PATH")]
    notes_file: Option<PathBuf>,
    /// Absolute directory for rolling log files.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
    /// trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print all notes as JSON, in index order.
    List,
    /// Append a note.
    Create { title: String, content: String },
    /// Delete the note at INDEX.
    Delete {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Replace the title of the note at INDEX.
    Title {
        #[arg(allow_negative_numbers = true)]
        index: i64,
        text: String,
    },
    /// Replace the content of the note at INDEX.
    Content {
        #[arg(allow_negative_numbers = true)]
        index: i64,
        text: String,
    },
    /// Print the core version.
    Version,
}

fn main() -> ExitCode {
    match run(Cli::parse(), &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// Executes one command. `Err` carries the message for stderr.
fn run(cli: Cli, out: &mut dyn Write) -> Result<(), String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let repo = match cli.notes_file {
        Some(path) => JsonFileNoteRepository::new(path),
        None => JsonFileNoteRepository::from_env(),
    };
    let mut service = NoteService::open(repo);

    let status = match cli.command {
        Command::List => {
            let rendered = serde_json::to_string_pretty(service.notes())
                .map_err(|err| format!("error: failed to render notes: {err}"))?;
            return write_line(out, &rendered);
        }
        Command::Version => {
            return write_line(out, &format!("espresso_core version={}", core_version()))
        }
        Command::Create { title, content } => service.create_note(title, content),
        Command::Delete { index } => service.delete_note(index),
        Command::Title { index, text } => service.update_note_title(index, text),
        Command::Content { index, text } => service.update_note_content(index, text),
    };

    match status {
        SaveStatus::Saved => Ok(()),
        SaveStatus::Failed(err) => {
            warn!("event=cli_save module=cli status=error error={}", err);
            Err(format!("warning: change not saved: {err}"))
        }
    }
}

fn write_line(out: &mut dyn Write, line: &str) -> Result<(), String> {
    writeln!(out, "{line}").map_err(|err| format!("error: failed to write output: {err}"))
}
