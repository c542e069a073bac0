use crate::core::flags::Strictness;

pub const MAKEFILE_TEMPLATE: &str = include_str!("../../assets/Makefile");
pub const README_TEMPLATE: &str = include_str!("../../assets/README.md");
pub const MAIN_C_TEMPLATE: &str = include_str!("../../assets/main.c");

/// Vendored into generated projects under tests/test-deps/.
pub const ACUTEST_HEADER: &str = include_str!("../../assets/acutest.h");
pub const TEST_BASIC: &str = include_str!("../../assets/test_basic.c");

const CLANG_TIDY_LOOSE: &str = include_str!("../../assets/clang-tidy-loose.yaml");
const CLANG_TIDY_STRICT: &str = include_str!("../../assets/clang-tidy-strict.yaml");
const CLANG_TIDY_STRICTEST: &str = include_str!("../../assets/clang-tidy-strictest.yaml");

pub fn clang_tidy_profile(strictness: Strictness) -> &'static str {
    match strictness {
        Strictness::Loose => CLANG_TIDY_LOOSE,
        Strictness::Strict => CLANG_TIDY_STRICT,
        Strictness::Strictest => CLANG_TIDY_STRICTEST,
    }
}
