use std::sync::Once;

use assert_fs::TempDir;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

use c_init::config::Settings;
use c_init::core::flags::{Compiler, Strictness};
use c_init::utils::PathSanitizer as _;

static TRACING: Once = Once::new();

pub fn setup_tracing() {
    TRACING.call_once(|| {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(LevelFilter::INFO)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

pub fn scratch_dir() -> TempDir {
    setup_tracing();
    TempDir::new().expect("failed to create scratch dir")
}

/// Settings targeting the scratch dir, with git disabled so scaffolding
/// stays hermetic. Tests flip individual fields as needed.
pub fn settings_for(dir: &TempDir) -> Settings {
    Settings {
        name: None,
        path: dir.path().sanitize(),
        cc: Compiler::Clang,
        strictness: Strictness::Strict,
        linter_strictness: None,
        force: false,
        no_git: true,
        no_commit: true,
        no_hello: false,
        no_tests: false,
    }
}
