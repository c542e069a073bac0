use serde::Deserialize;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs};
use tracing::{debug, warn};

use crate::S;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILENAME};
use crate::core::flags::{ColorMode, Compiler, Strictness};
use crate::utils::PathSanitizer;

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    defaults: FileDefaults,
}

/// The `[defaults]` table of the user config file. Every key optional.
#[derive(Debug, Default, Deserialize)]
pub struct FileDefaults {
    pub cc: Option<Compiler>,
    pub strictness: Option<Strictness>,
    pub linter_strictness: Option<Strictness>,
    pub color: Option<ColorMode>,
    pub no_git: Option<bool>,
    pub no_commit: Option<bool>,
    pub no_hello: Option<bool>,
    pub no_tests: Option<bool>,
}

pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
}

/// Load the user defaults file. A missing, unreadable or malformed file is
/// never fatal: the built-in defaults apply and the problem is logged.
pub fn load_file_defaults() -> FileDefaults {
    let Some(path) = config_file_path() else {
        return FileDefaults::default();
    };
    match fs::read_to_string(&path) {
        Ok(text) => match toml::from_str::<FileConfig>(&text) {
            Ok(config) => {
                debug!("loaded defaults from {}", path.sanitize());
                config.defaults
            }
            Err(err) => {
                warn!("ignoring malformed defaults file {}: {}", path.sanitize(), err);
                FileDefaults::default()
            }
        },
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("no defaults file at {}", path.sanitize());
            FileDefaults::default()
        }
        Err(err) => {
            warn!("unable to read defaults file {}: {}", path.sanitize(), err);
            FileDefaults::default()
        }
    }
}

/// Values the user supplied explicitly, on the command line or through the
/// wizard. `None` means "not given", so file defaults can fill the gap.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub name: Option<String>,
    pub path: Option<String>,
    pub cc: Option<Compiler>,
    pub strictness: Option<Strictness>,
    pub linter_strictness: Option<Strictness>,
    pub color: Option<ColorMode>,
    pub force: bool,
    pub interactive: bool,
    pub no_git: Option<bool>,
    pub no_commit: Option<bool>,
    pub no_hello: Option<bool>,
    pub no_tests: Option<bool>,
}

/// Fully resolved settings driving the generation pipeline.
#[derive(Debug, Clone)]
pub struct Settings {
    pub name: Option<String>,
    pub path: String,
    pub cc: Compiler,
    pub strictness: Strictness,
    /// None means "same as strictness".
    pub linter_strictness: Option<Strictness>,
    pub force: bool,
    pub no_git: bool,
    pub no_commit: bool,
    pub no_hello: bool,
    pub no_tests: bool,
}

impl Settings {
    /// Precedence, lowest first: built-in defaults, defaults file, explicit
    /// values (command line, then wizard answers folded into `overrides`).
    pub fn resolve(defaults: &FileDefaults, overrides: Overrides) -> Settings {
        Settings {
            name: overrides.name,
            path: overrides
                .path
                .filter(|path| !path.is_empty())
                .unwrap_or_else(|| S!(".")),
            cc: overrides.cc.or(defaults.cc).unwrap_or(Compiler::Clang),
            strictness: overrides
                .strictness
                .or(defaults.strictness)
                .unwrap_or(Strictness::Strict),
            linter_strictness: overrides.linter_strictness.or(defaults.linter_strictness),
            force: overrides.force,
            no_git: overrides.no_git.or(defaults.no_git).unwrap_or(false),
            no_commit: overrides.no_commit.or(defaults.no_commit).unwrap_or(false),
            no_hello: overrides.no_hello.or(defaults.no_hello).unwrap_or(false),
            no_tests: overrides.no_tests.or(defaults.no_tests).unwrap_or(false),
        }
    }

    pub fn linter_strictness(&self) -> Strictness {
        self.linter_strictness.unwrap_or(self.strictness)
    }
}
