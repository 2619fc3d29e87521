//! Terminal implementations of the display surface and user prompts.

use cloudapp_core::model::quote::QUOTE_LOADING_AUTHOR;
use cloudapp_core::{NoteRow, NoteTargets, QuoteTargets, UserPrompt};
use std::io::{self, BufRead, Write};

/// Writes quote and notes output to stdout; holds the pending note input.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    quote_text: String,
    input: String,
    html: bool,
    show_loading: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints note rows as list-item markup instead of plain lines.
    pub fn with_html(mut self, html: bool) -> Self {
        self.html = html;
        self
    }

    /// Also prints the loading placeholder pair before each quote.
    pub fn with_loading_placeholder(mut self, show_loading: bool) -> Self {
        self.show_loading = show_loading;
        self
    }

    /// Text block printed once both quote targets are written.
    fn quote_block(&self, author: &str) -> Option<String> {
        if author == QUOTE_LOADING_AUTHOR && !self.show_loading {
            return None;
        }
        Some(format!("{}\n    {}", self.quote_text, author))
    }

    pub fn set_note_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }
}

impl QuoteTargets for TerminalSurface {
    fn set_quote_text(&mut self, text: &str) {
        self.quote_text = text.to_string();
    }

    fn set_quote_author(&mut self, author: &str) {
        if let Some(block) = self.quote_block(author) {
            println!("{block}");
        }
    }
}

impl NoteTargets for TerminalSurface {
    fn note_input(&self) -> String {
        self.input.clone()
    }

    fn clear_note_input(&mut self) {
        self.input.clear();
    }

    fn show_note_rows(&mut self, rows: &[NoteRow]) {
        for row in rows {
            if self.html {
                println!("{}", row.to_html());
                continue;
            }
            match row {
                NoteRow::Item {
                    index,
                    escaped_text,
                } => println!("  [{index}] {escaped_text}"),
                NoteRow::Placeholder { message } => println!("  {message}"),
            }
        }
    }
}

/// Alerts on stderr; confirmations read `y`/`yes` from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl UserPrompt for TerminalPrompt {
    fn alert(&self, message: &str) {
        eprintln!("! {message}");
    }

    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "ya"
    )
}

#[cfg(test)]
mod tests {
    use super::{is_yes, TerminalSurface};
    use cloudapp_core::model::quote::{QUOTE_LOADING_AUTHOR, QUOTE_LOADING_TEXT};
    use cloudapp_core::QuoteTargets;

    #[test]
    fn one_shot_surface_prints_only_the_final_quote() {
        let mut surface = TerminalSurface::new();
        surface.set_quote_text(QUOTE_LOADING_TEXT);
        assert_eq!(surface.quote_block(QUOTE_LOADING_AUTHOR), None);

        surface.set_quote_text("\"X\"");
        assert_eq!(surface.quote_block("- Y").as_deref(), Some("\"X\"\n    - Y"));
    }

    #[test]
    fn interactive_surface_also_prints_loading_pair() {
        let mut surface = TerminalSurface::new().with_loading_placeholder(true);
        surface.set_quote_text(QUOTE_LOADING_TEXT);
        assert_eq!(
            surface.quote_block(QUOTE_LOADING_AUTHOR).as_deref(),
            Some("Memuat quote...\n    - Loading...")
        );
    }

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(is_yes("ya"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("maybe"));
    }
}
