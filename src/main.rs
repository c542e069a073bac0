use std::io;
use std::process::ExitCode;
use std::{env, panic};

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{FmtSubscriber, fmt, layer::SubscriberExt};

use c_init::config::{self, Overrides, Settings};
use c_init::console::Console;
use c_init::constants::{LOG_DIR_ENV_VAR, LOG_ENV_VAR, TOOL_NAME};
use c_init::core::flags::{ColorMode, Compiler, Strictness};
use c_init::core::scaffold;
use c_init::prompt::InputProvider;
use c_init::wizard::run_wizard;

#[derive(Debug, Parser)]
#[command(name = TOOL_NAME, version, disable_help_subcommand = true)]
struct Cli {
    /// Help information
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project name (defaults to directory name)
    #[arg(long)]
    name: Option<String>,

    /// Choose compiler
    #[arg(long, value_enum)]
    cc: Option<Compiler>,

    /// strictness: loose | strict | strictest
    #[arg(short = 's', long, value_enum)]
    strictness: Option<Strictness>,

    /// linter strictness: loose | strict | strictest
    #[arg(long, value_enum)]
    linter_strictness: Option<Strictness>,

    /// Color: auto | always | never
    #[arg(long, value_enum)]
    color: Option<ColorMode>,

    /// Allow non-empty directory
    #[arg(short = 'f', long, action = ArgAction::SetTrue)]
    force: bool,

    /// Skip git init and .gitignore
    #[arg(long, action = ArgAction::SetTrue)]
    no_git: bool,

    /// Skip initial git commit
    #[arg(long, action = ArgAction::SetTrue)]
    no_commit: bool,

    /// Skip generating src/main.c
    #[arg(long, action = ArgAction::SetTrue)]
    no_hello: bool,

    /// Skip generating tests and vendoring acutest
    #[arg(long, action = ArgAction::SetTrue)]
    no_tests: bool,

    /// Run interactive wizard
    #[arg(short = 'i', long, action = ArgAction::SetTrue)]
    interactive: bool,

    /// Project path
    path: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show help
    Help,
}

impl From<Cli> for Overrides {
    fn from(cli: Cli) -> Self {
        // SetTrue flags are indistinguishable from their defaults after
        // parsing, so an unset flag maps to None and file defaults apply.
        Overrides {
            name: cli.name,
            path: cli.path,
            cc: cli.cc,
            strictness: cli.strictness,
            linter_strictness: cli.linter_strictness,
            color: cli.color,
            force: cli.force,
            interactive: cli.interactive,
            no_git: cli.no_git.then_some(true),
            no_commit: cli.no_commit.then_some(true),
            no_hello: cli.no_hello.then_some(true),
            no_tests: cli.no_tests.then_some(true),
        }
    }
}

/// Logs go to stderr (WARN unless C_INIT_LOG says otherwise) and, when
/// C_INIT_LOG_DIR is set, to a rolling file appender as well.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let max_level = env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::WARN);

    let mut guard = None;
    if let Ok(dir) = env::var(LOG_DIR_ENV_VAR) {
        let file_appender = RollingFileAppender::builder()
            .max_log_files(5)
            .filename_prefix(format!("c_init_{}", std::process::id()))
            .filename_suffix("log")
            .build(&dir);
        match file_appender {
            Ok(appender) => {
                let (file_writer, file_guard) = tracing_appender::non_blocking(appender);
                let subscriber = FmtSubscriber::builder()
                    .with_max_level(max_level)
                    .with_ansi(false)
                    .with_writer(io::stderr)
                    .finish()
                    .with(fmt::layer().with_ansi(false).with_writer(file_writer));
                let _ = tracing::subscriber::set_global_default(subscriber);
                guard = Some(file_guard);
            }
            Err(err) => {
                let subscriber = FmtSubscriber::builder()
                    .with_max_level(max_level)
                    .with_ansi(false)
                    .with_writer(io::stderr)
                    .finish();
                let _ = tracing::subscriber::set_global_default(subscriber);
                tracing::warn!("unable to open log directory {}: {}", dir, err);
            }
        }
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(max_level)
            .with_ansi(false)
            .with_writer(io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
    panic::set_hook(Box::new(tracing_panic::panic_hook));
    guard
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if matches!(cli.command, Some(Commands::Help)) {
        let mut cmd = Cli::command();
        let _ = cmd.print_help();
        println!();
        return ExitCode::SUCCESS;
    }

    let _log_guard = init_logging();

    let defaults = config::load_file_defaults();
    let mut overrides = Overrides::from(cli);

    // Resolved before the wizard so prompts match the final color mode.
    let color = overrides.color.or(defaults.color).unwrap_or_default();
    let mut console = Console::stdout(color);
    let mut errors = Console::stderr(color);

    if overrides.interactive {
        let raw_args: Vec<String> = env::args().collect();
        let proceed = InputProvider::new(true).and_then(|mut input| {
            run_wizard(&mut input, &mut console, &mut overrides, &defaults, &raw_args)
        });
        match proceed {
            Ok(true) => {}
            Ok(false) => {
                console.line("Exiting...");
                return ExitCode::from(1);
            }
            Err(err) => {
                errors.error(&format!("failed to read input: {}", err));
                return ExitCode::from(1);
            }
        }
    }

    let settings = Settings::resolve(&defaults, overrides);
    match scaffold::generate(&settings) {
        Ok(outcome) => {
            scaffold::print_summary(&mut console, &settings, &outcome);
            if cfg!(target_os = "macos") && outcome.cc_command.starts_with("gcc") {
                let text = errors.muted(
                    "Sanitizers may fail with GCC on macOS (ASan runtime missing). Prefer clang for 'make sanitize'.",
                );
                errors.warning(&text);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            errors.error(&format!("{:#}", err));
            ExitCode::from(1)
        }
    }
}
