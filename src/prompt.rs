//! Wizard input: free-text lines and numbered select menus.
//!
//! When stdin is not a terminal (scripted use), all of stdin is read up
//! front and consumed line by line; exhausted input yields empty strings,
//! which select the defaults.

use std::collections::VecDeque;
use std::io::{self, IsTerminal, Read, Write};

use crate::console::Console;

pub struct InputProvider {
    tty: bool,
    lines: VecDeque<String>,
}

impl InputProvider {
    pub fn new(interactive: bool) -> io::Result<Self> {
        let tty = interactive && io::stdin().is_terminal();
        let mut lines = VecDeque::new();
        if interactive && !tty {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            lines.extend(input.lines().map(|s| s.to_string()));
        }
        Ok(Self { tty, lines })
    }

    /// A provider fed from a fixed script instead of stdin (used by tests).
    pub fn scripted<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            tty: false,
            lines: lines.into_iter().collect(),
        }
    }

    pub fn is_tty(&self) -> bool {
        self.tty
    }

    pub fn read_line<W: Write>(
        &mut self,
        console: &mut Console<W>,
        prompt: &str,
    ) -> io::Result<String> {
        console.prompt(prompt);
        if self.tty {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            Ok(input.trim_end().to_string())
        } else {
            Ok(self.lines.pop_front().unwrap_or_default())
        }
    }

    /// Numbered menu. An empty, non-numeric or out-of-range answer selects
    /// the default. Answers are the displayed indexes.
    pub fn select<W: Write>(
        &mut self,
        console: &mut Console<W>,
        prompt: &str,
        options: &[&str],
        default_idx: usize,
    ) -> io::Result<usize> {
        if !self.tty {
            let line = self.read_line(console, "")?;
            let selected = parse_selection(&line, options.len(), default_idx);
            let value = console.green(options[selected]);
            console.line(&format!("{}: {} (non-interactive)", prompt, value));
            return Ok(selected);
        }

        console.line(prompt);
        for (idx, option) in options.iter().enumerate() {
            if idx == default_idx {
                let hint = console.muted("(default)");
                console.line(&format!("  [{}] {} {}", idx, option, hint));
            } else {
                console.line(&format!("  [{}] {}", idx, option));
            }
        }
        let line = self.read_line(console, "> ")?;
        Ok(parse_selection(&line, options.len(), default_idx))
    }
}

fn parse_selection(line: &str, len: usize, default_idx: usize) -> usize {
    match line.trim().parse::<usize>() {
        Ok(idx) if idx < len => idx,
        _ => default_idx,
    }
}
