//! Interactive candidate selection.
//!
//! The pipeline only talks to the [`Chooser`] trait, so tests and
//! non-interactive runs can supply their own selections.

use crate::models::media::{Selection, Shortlist};
use crate::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Picks zero or one candidate from a shortlist.
pub trait Chooser {
    /// `name` is the directory the shortlist was searched for.
    fn choose(&mut self, name: &str, shortlist: &Shortlist) -> Result<Selection>;
}

/// Interpret one line of user input against a shortlist of `len` entries.
///
/// Only a single digit `1`-`9` within range selects; `0` skips. Anything
/// else is reported and treated as a skip.
pub fn parse_selection(input: &str, len: usize) -> Selection {
    let input = input.trim();

    if input == "0" {
        tracing::info!("Skipped by user");
        return Selection::Skipped;
    }

    let mut chars = input.chars();
    if let (Some(c @ '1'..='9'), None) = (chars.next(), chars.next()) {
        let choice = c as usize - '0' as usize;
        if choice <= len {
            return Selection::Selected(choice - 1);
        }
    }

    tracing::warn!("Invalid selection {:?}, skipping", input);
    Selection::Skipped
}

/// Chooser that prints the shortlist and reads the answer from a line reader.
pub struct TerminalChooser<R, W> {
    input: R,
    output: W,
}

impl TerminalChooser<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Chooser bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn print_shortlist(&mut self, name: &str, shortlist: &Shortlist) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{} {}", "Results for:".bold(), name.cyan())?;
        for (i, candidate) in shortlist.candidates().iter().enumerate() {
            writeln!(
                self.output,
                "  {} {} ({})",
                format!("{})", i + 1).yellow(),
                candidate.title,
                candidate.display_year()
            )?;
        }
        write!(self.output, "Select [1-{}], 0 to skip: ", shortlist.len())?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Chooser for TerminalChooser<R, W> {
    fn choose(&mut self, name: &str, shortlist: &Shortlist) -> Result<Selection> {
        self.print_shortlist(name, shortlist)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::warn!("No input available, skipping {}", name);
            return Ok(Selection::Skipped);
        }

        Ok(parse_selection(&line, shortlist.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ranker::rank;
    use crate::models::media::SearchCandidate;
    use std::io::Cursor;

    fn shortlist(n: usize) -> Shortlist {
        rank(
            (0..n)
                .map(|i| SearchCandidate {
                    title: format!("Movie {}", i + 1),
                    release_date: "2001-01-01".to_string(),
                    popularity: (10 - i) as f64,
                    ..Default::default()
                })
                .collect(),
        )
    }

    #[test]
    fn test_parse_selection_in_range() {
        assert_eq!(parse_selection("1", 3), Selection::Selected(0));
        assert_eq!(parse_selection("3\n", 3), Selection::Selected(2));
        assert_eq!(parse_selection("  2  ", 5), Selection::Selected(1));
    }

    #[test]
    fn test_parse_selection_zero_skips() {
        assert_eq!(parse_selection("0", 3), Selection::Skipped);
    }

    #[test]
    fn test_parse_selection_invalid_skips() {
        assert_eq!(parse_selection("4", 3), Selection::Skipped);
        assert_eq!(parse_selection("01", 3), Selection::Skipped);
        assert_eq!(parse_selection("12", 5), Selection::Skipped);
        assert_eq!(parse_selection("abc", 3), Selection::Skipped);
        assert_eq!(parse_selection("", 3), Selection::Skipped);
        assert_eq!(parse_selection("-1", 3), Selection::Skipped);
    }

    #[test]
    fn test_terminal_chooser_reads_answer() {
        let mut out = Vec::new();
        let selection = {
            let mut chooser = TerminalChooser::new(Cursor::new("2\n"), &mut out);
            chooser.choose("Terminator", &shortlist(3)).unwrap()
        };
        assert_eq!(selection, Selection::Selected(1));

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Movie 1 (2001)"));
        assert!(printed.contains("Movie 3 (2001)"));
    }

    #[test]
    fn test_terminal_chooser_eof_skips() {
        let mut chooser = TerminalChooser::new(Cursor::new(""), Vec::new());
        assert_eq!(
            chooser.choose("Terminator", &shortlist(2)).unwrap(),
            Selection::Skipped
        );
    }
}
