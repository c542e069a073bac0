//! The interactive wizard. Asks for everything not already answered on the
//! command line and folds the answers into `Overrides`.
//!
//! Input and the raw argument list are injected so tests can drive the flow
//! with a scripted provider.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::S;
use crate::config::{FileDefaults, Overrides};
use crate::console::Console;
use crate::core::flags::{Compiler, Strictness};
use crate::prompt::InputProvider;
use crate::utils::is_dir_nonempty;

/// Returns Ok(false) when the user declined to overwrite a non-empty
/// directory.
pub fn run_wizard<W: Write>(
    input: &mut InputProvider,
    console: &mut Console<W>,
    overrides: &mut Overrides,
    defaults: &FileDefaults,
    raw_args: &[String],
) -> io::Result<bool> {
    console.line("--- c-init Interactive Wizard ---");
    console.blank();

    if overrides.name.is_none() && overrides.path.is_none() {
        let entry = input.read_line(console, "Project Name [.]: ")?;
        if !entry.is_empty() && entry != "." {
            overrides.path = Some(entry);
        }
    }

    let path_for_check = PathBuf::from(overrides.path.clone().unwrap_or_else(|| S!(".")));
    if is_dir_nonempty(&path_for_check).unwrap_or(false) && !overrides.force {
        let res = input.select(console, "Folder not empty. Overwrite?", &["No", "Yes"], 0)?;
        if res == 1 {
            overrides.force = true;
        } else {
            return Ok(false);
        }
    }

    if overrides.cc.is_none() {
        let default_idx = match defaults.cc {
            Some(Compiler::Gcc) => 1,
            _ => 0,
        };
        let res = input.select(console, "Compiler", &["clang", "gcc"], default_idx)?;
        overrides.cc = Some(if res == 1 {
            Compiler::Gcc
        } else {
            Compiler::Clang
        });
    }

    if overrides.strictness.is_none() {
        let default_idx = match defaults.strictness {
            Some(Strictness::Loose) => 0,
            Some(Strictness::Strictest) => 2,
            _ => 1,
        };
        let res = input.select(
            console,
            "Compiler Strictness",
            &["loose", "strict", "strictest"],
            default_idx,
        )?;
        overrides.strictness = Some(match res {
            0 => Strictness::Loose,
            1 => Strictness::Strict,
            _ => Strictness::Strictest,
        });
    }

    if overrides.linter_strictness.is_none() {
        let default_idx = match defaults.linter_strictness {
            None => 0,
            Some(Strictness::Loose) => 1,
            Some(Strictness::Strict) => 2,
            Some(Strictness::Strictest) => 3,
        };
        let res = input.select(
            console,
            "Linter Strictness",
            &["(same as strictness)", "loose", "strict", "strictest"],
            default_idx,
        )?;
        overrides.linter_strictness = match res {
            1 => Some(Strictness::Loose),
            2 => Some(Strictness::Strict),
            3 => Some(Strictness::Strictest),
            _ => None,
        };
    }

    // an explicit skip flag on the command line suppresses its question
    let provided_no_git = raw_args.iter().any(|arg| arg == "--no-git");
    if !provided_no_git {
        let default_idx = if defaults.no_git.unwrap_or(false) { 0 } else { 1 };
        let res = input.select(console, "Run git init?", &["No", "Yes"], default_idx)?;
        overrides.no_git = Some(res == 0);
    }

    let provided_no_tests = raw_args.iter().any(|arg| arg == "--no-tests");
    if !provided_no_tests {
        let default_idx = if defaults.no_tests.unwrap_or(false) { 0 } else { 1 };
        let res = input.select(console, "Generate tests?", &["No", "Yes"], default_idx)?;
        overrides.no_tests = Some(res == 0);
    }

    console.blank();
    Ok(true)
}
