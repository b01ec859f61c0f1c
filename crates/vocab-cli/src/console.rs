//! Terminal output for definitions and quiz prompts.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::debug;

use vocab_core::quiz::QuizPrompter;
use vocab_core::{Definition, ResolveReporter, SourceError};

/// Prints definitions as soon as they are resolved.
pub struct ConsoleReporter {
    overrides_dir: PathBuf,
}

impl ConsoleReporter {
    pub fn new(overrides_dir: impl Into<PathBuf>) -> Self {
        Self {
            overrides_dir: overrides_dir.into(),
        }
    }
}

impl ResolveReporter for ConsoleReporter {
    fn on_definition(&self, definition: &Definition) {
        println!("\n{}", definition.text.trim_end());
    }

    fn on_miss(&self, word: &str, source: &str, error: &SourceError) {
        if !error.is_not_found() {
            debug!(word, source, error = %error, "lookup failed");
        }
    }

    fn on_nothing_found(&self, word: &str) {
        println!(
            "\nNo definition found for \"{word}\". Either the online dictionaries \
             don't know it or the lookup is out of date, and no user definition \
             was found in {} .\n",
            self.overrides_dir.display()
        );
    }
}

/// Asks quiz questions on a terminal and waits for enter.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> QuizPrompter for ConsolePrompter<R, W> {
    fn ask(&mut self, index: usize, total: usize, word: &str) -> std::io::Result<()> {
        write!(
            self.output,
            "\n{}\n[Q. {index}/{total}] Define: \"{word}\"  \n(Press enter when ready for definition.)",
            "=".repeat(50)
        )?;
        self.output.flush()?;

        // EOF counts as "ready" too.
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    fn reveal(&mut self, _word: &str) -> std::io::Result<()> {
        writeln!(self.output, "\n{}", "-".repeat(50))?;
        self.output.flush()
    }
}
