//! Console output with optional ANSI color support.
//!
//! Writer-generic so tests can capture what the tool prints.

use std::io::{self, Write};

use crate::core::flags::ColorMode;

pub struct Console<W: Write> {
    writer: W,
    colors: bool,
}

impl Console<io::Stdout> {
    pub fn stdout(mode: ColorMode) -> Console<io::Stdout> {
        Console::new(io::stdout(), mode.colors_enabled())
    }
}

impl Console<io::Stderr> {
    pub fn stderr(mode: ColorMode) -> Console<io::Stderr> {
        Console::new(io::stderr(), mode.colors_enabled())
    }
}

impl<W: Write> Console<W> {
    pub fn new(writer: W, colors: bool) -> Self {
        Console { writer, colors }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.colors {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }

    pub fn green(&self, text: &str) -> String {
        self.paint("32", text)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint("90", text)
    }

    pub fn line(&mut self, text: &str) {
        let _ = writeln!(self.writer, "{}", text);
    }

    pub fn blank(&mut self) {
        let _ = writeln!(self.writer);
    }

    /// Print without a trailing newline and flush, for input prompts.
    pub fn prompt(&mut self, text: &str) {
        let _ = write!(self.writer, "{}", text);
        let _ = self.writer.flush();
    }

    pub fn error(&mut self, message: &str) {
        let prefix = self.paint("31", "Error:");
        let _ = writeln!(self.writer, "{} {}", prefix, message);
    }

    pub fn warning(&mut self, message: &str) {
        let prefix = self.paint("33", "Warning:");
        let _ = writeln!(self.writer, "{} {}", prefix, message);
    }
}
