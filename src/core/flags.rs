use clap::ValueEnum;
use itertools::Itertools;
use serde::Deserialize;
use std::io::IsTerminal;
use std::slice;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compiler {
    Clang,
    Gcc,
}

impl Compiler {
    pub fn as_str(&self) -> &'static str {
        match self {
            Compiler::Clang => "clang",
            Compiler::Gcc => "gcc",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    Loose,
    Strict,
    Strictest,
}

impl Strictness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strictness::Loose => "loose",
            Strictness::Strict => "strict",
            Strictness::Strictest => "strictest",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn colors_enabled(&self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

const FLAGS_LOOSE_BASE: &[&str] = &["-std=c2x", "-Iinclude", "-Wall", "-Wextra"];

const FLAGS_CLANG_SYSTEM_INCLUDES: &[&str] = &[
    "-isystem/opt/homebrew/include",
    "-isystem/usr/local/include",
];

const FLAGS_STRICT_COMMON: &[&str] = &[
    "-Werror",
    "-Wpedantic",
    "-Wcast-align",
    "-Wpointer-arith",
    "-Wmissing-prototypes",
    "-Wstrict-prototypes",
    "-Wsign-conversion",
    "-Wswitch-enum",
    "-Wconversion",
    "-Wcast-qual",
    "-Wshadow",
];

const FLAGS_GCC_STRICT_EXTRA: &[&str] = &["-Wlogical-op", "-Wjump-misses-init"];

const FLAGS_STRICTEST_COMMON: &[&str] = &[
    "-Wundef",
    "-Wformat=2",
    "-Wfloat-equal",
    "-Wswitch-default",
    "-Wdouble-promotion",
];

const FLAGS_GCC_STRICTEST_EXTRA: &[&str] = &[
    "-Wstrict-overflow=2",
    "-Wduplicated-cond",
    "-Wduplicated-branches",
    "-Wrestrict",
    "-Wnull-dereference",
    "-Wjump-misses-init",
];

const FLAGS_CLANG_STRICTEST_EXTRA: &[&str] = &["-Wstrict-overflow=5"];

// clangd resolves these relative to tests/. test-deps is a system include so
// lint findings inside the vendored runner header stay suppressed.
const FLAGS_TEST_INCLUDE: &[&str] = &["-I../include", "-I.", "-isystem", "./test-deps"];

/// Ordered flag list for a compiler and strictness. Strictly additive:
/// strict contains loose, strictest contains strict.
pub fn compile_flags(cc: Compiler, strictness: Strictness) -> Vec<&'static str> {
    let mut flags: Vec<&'static str> = FLAGS_LOOSE_BASE.to_vec();
    if matches!(cc, Compiler::Clang) {
        flags.extend_from_slice(FLAGS_CLANG_SYSTEM_INCLUDES);
    }
    if matches!(strictness, Strictness::Strict | Strictness::Strictest) {
        flags.extend_from_slice(FLAGS_STRICT_COMMON);
        if matches!(cc, Compiler::Gcc) {
            flags.extend_from_slice(FLAGS_GCC_STRICT_EXTRA);
        }
    }
    if matches!(strictness, Strictness::Strictest) {
        flags.extend_from_slice(FLAGS_STRICTEST_COMMON);
        match cc {
            Compiler::Gcc => flags.extend_from_slice(FLAGS_GCC_STRICTEST_EXTRA),
            Compiler::Clang => flags.extend_from_slice(FLAGS_CLANG_STRICTEST_EXTRA),
        }
    }
    flags
}

/// Contents of compile_flags.txt, one flag per line (the clangd convention).
pub fn flags_file(cc: Compiler, strictness: Strictness) -> String {
    compile_flags(cc, strictness).iter().join("\n")
}

/// The project flag list with `-Iinclude` rewritten for the tests directory.
pub fn test_flags_file(cc: Compiler, strictness: Strictness) -> String {
    compile_flags(cc, strictness)
        .iter()
        .flat_map(|flag| {
            if *flag == "-Iinclude" {
                FLAGS_TEST_INCLUDE.iter()
            } else {
                slice::from_ref(flag).iter()
            }
        })
        .join("\n")
}
