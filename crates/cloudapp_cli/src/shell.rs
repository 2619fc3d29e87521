//! Interactive page session: each input line becomes one UI event.

use crate::terminal::{TerminalPrompt, TerminalSurface};
use cloudapp_core::ui::event::SUBMIT_KEY;
use cloudapp_core::{Page, QuoteSource, SlotRepository, UiEvent};
use log::info;
use std::io::{self, BufRead, Write};
use std::time::Instant;

const HELP: &str = "commands: quote | add <text> | delete <index> | list | resize <w> <h> | help | quit";

/// Parsed shell input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Event(UiEvent),
    /// Put text in the note input, then press Enter.
    Add(String),
    List,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_line(line: &str) -> ShellCommand {
    let line = line.trim();
    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map(|(head, rest)| (head, rest.trim()))
        .unwrap_or((line, ""));

    match head {
        "" => ShellCommand::Empty,
        "quote" => ShellCommand::Event(UiEvent::NewQuoteRequested),
        "add" => ShellCommand::Add(rest.to_string()),
        "list" => ShellCommand::List,
        "help" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        "delete" => match rest.parse::<i64>() {
            Ok(index) => ShellCommand::Event(UiEvent::DeleteNoteRequested(index)),
            Err(_) => ShellCommand::Unknown(line.to_string()),
        },
        "resize" => {
            let mut dims = rest.split_whitespace().map(str::parse::<u32>);
            match (dims.next(), dims.next(), dims.next()) {
                (Some(Ok(width)), Some(Ok(height)), None) => {
                    ShellCommand::Event(UiEvent::Resized { width, height })
                }
                _ => ShellCommand::Unknown(line.to_string()),
            }
        }
        _ => ShellCommand::Unknown(line.to_string()),
    }
}

/// Runs the session until `quit` or end of input.
pub async fn run<R: SlotRepository, S: QuoteSource>(mut page: Page<R, S>) -> io::Result<()> {
    let mut surface = TerminalSurface::new().with_loading_placeholder(true);
    let prompt = TerminalPrompt;

    println!("{HELP}");
    page.dispatch(UiEvent::PageReady, &mut surface, &prompt, Instant::now())
        .await;

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            break;
        }
        page.tick(Instant::now());

        match parse_line(&line) {
            ShellCommand::Event(event) => {
                page.dispatch(event, &mut surface, &prompt, Instant::now())
                    .await;
            }
            ShellCommand::Add(text) => {
                surface.set_note_input(text);
                page.dispatch(
                    UiEvent::NoteInputKey(SUBMIT_KEY.to_string()),
                    &mut surface,
                    &prompt,
                    Instant::now(),
                )
                .await;
            }
            ShellCommand::List => {
                page.render_notes(&mut surface);
            }
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Quit => break,
            ShellCommand::Empty => {}
            ShellCommand::Unknown(input) => eprintln!("unknown command `{input}`; {HELP}"),
        }
    }

    page.tick(Instant::now());
    info!("event=shell_exit module=cli status=ok");
    Ok(())
}
