//! `cloudapp` command-line front-end.
//!
//! # Responsibility
//! - Resolve configuration, start logging, open slot storage.
//! - Run one-shot quote/notes commands or an interactive page session.

mod shell;
mod terminal;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cloudapp_core::db::open_db;
use cloudapp_core::{
    init_logging, render_note_rows, AppConfig, ConfigOverrides, FixedAnswerPrompt,
    HttpQuoteSource, NoteStore, NoteTargets, NoteValidationError, NotesError, Page, QuoteLoader,
    SqliteSlotRepository, UserPrompt,
};
use cloudapp_core::ui::prompt::EMPTY_NOTE_ALERT;
use log::warn;
use std::path::PathBuf;
use std::process::ExitCode;
use terminal::{TerminalPrompt, TerminalSurface};

#[derive(Debug, Parser)]
#[command(name = "cloudapp", version, about = "Quote of the day and a local notes list")]
struct Cli {
    /// SQLite file holding the notes slot.
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Slot key for the notes array.
    #[arg(long, global = true)]
    notes_key: Option<String>,
    /// Random-quote endpoint.
    #[arg(long, global = true)]
    quote_url: Option<String>,
    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Absolute directory for log files.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch and print a random quote.
    Quote,
    /// Manage notes.
    Notes {
        #[command(subcommand)]
        action: NotesCommand,
    },
    /// Interactive page session.
    Shell,
}

#[derive(Debug, Subcommand)]
enum NotesCommand {
    /// Print all notes in insertion order.
    List {
        /// Print list-item markup.
        #[arg(long)]
        html: bool,
    },
    /// Append a note.
    Add { text: String },
    /// Delete the note at a position shown by `list`.
    Delete {
        #[arg(allow_negative_numbers = true)]
        index: i64,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = AppConfig::from_env().with_overrides(ConfigOverrides {
        db_path: cli.db,
        notes_key: cli.notes_key,
        quote_endpoint: cli.quote_url,
        log_level: cli.log_level,
        log_dir: cli.log_dir,
    });

    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open `{}`", config.db_path.display()))?;
    let repo = SqliteSlotRepository::try_new(&conn).context("notes storage is not ready")?;
    let store = NoteStore::new(repo).with_key(config.notes_key.clone());
    let quotes = QuoteLoader::new(
        HttpQuoteSource::new(config.quote_endpoint.clone())
            .context("failed to build HTTP client")?,
    );

    match cli.command {
        Command::Quote => {
            let mut surface = TerminalSurface::new();
            quotes.load(&mut surface).await;
            Ok(ExitCode::SUCCESS)
        }
        Command::Notes { action } => run_notes(&store, action),
        Command::Shell => {
            shell::run(Page::new(store, quotes)).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_notes(
    store: &NoteStore<SqliteSlotRepository<'_>>,
    action: NotesCommand,
) -> anyhow::Result<ExitCode> {
    match action {
        NotesCommand::List { html } => {
            let notes = store.list()?;
            TerminalSurface::new()
                .with_html(html)
                .show_note_rows(&render_note_rows(&notes));
            Ok(ExitCode::SUCCESS)
        }
        NotesCommand::Add { text } => match store.append(&text) {
            Ok(note) => {
                println!("added [{}] {}", note.id, note.created_at);
                Ok(ExitCode::SUCCESS)
            }
            Err(NotesError::Validation(NoteValidationError::EmptyText)) => {
                TerminalPrompt.alert(EMPTY_NOTE_ALERT);
                Ok(ExitCode::FAILURE)
            }
            Err(err) => Err(err.into()),
        },
        NotesCommand::Delete { index, yes } => {
            let confirm_all = FixedAnswerPrompt::always_yes();
            let prompt: &dyn UserPrompt = if yes { &confirm_all } else { &TerminalPrompt };
            match store.delete_at(index, prompt) {
                Ok(Some(note)) => {
                    println!("deleted [{}]", note.id);
                    Ok(ExitCode::SUCCESS)
                }
                Ok(None) => {
                    println!("cancelled");
                    Ok(ExitCode::SUCCESS)
                }
                Err(NotesError::IndexOutOfRange { index, len }) => {
                    warn!(
                        "event=note_delete module=cli status=error error_code=index_out_of_range index={index} len={len}"
                    );
                    eprintln!("no note at position {index} ({len} note(s))");
                    Ok(ExitCode::FAILURE)
                }
                Err(err) => Err(err.into()),
            }
        }
    }
}
