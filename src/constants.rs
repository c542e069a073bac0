pub const TOOL_NAME: &str = "c-init";

pub const CONFIG_DIR_NAME: &str = "c-init";
pub const CONFIG_FILENAME: &str = "config.toml";

/// Overrides the defaults file location (used by tests).
pub const CONFIG_ENV_VAR: &str = "C_INIT_CONFIG";
pub const LOG_ENV_VAR: &str = "C_INIT_LOG";
pub const LOG_DIR_ENV_VAR: &str = "C_INIT_LOG_DIR";

pub const GITIGNORE_CONTENT: &str = "target/\n";

/// Homebrew installs gcc with a version suffix, most recent first.
pub const GCC_MACOS_CANDIDATES: &[&str] = &["gcc-15", "gcc-14", "gcc-13"];

pub const TEST_SECTION_BEGIN: &str = "# TEST_SECTION_BEGIN";
pub const TEST_SECTION_END: &str = "# TEST_SECTION_END";

pub const PHONY_WITH_TESTS: &str = "all run release run-release test sanitize fmt lint clean";
pub const PHONY_WITHOUT_TESTS: &str = "all run release run-release sanitize fmt lint clean";
