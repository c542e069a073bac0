use std::process::Command;
use tracing::info;

use crate::S;
use crate::constants::GCC_MACOS_CANDIDATES;
use crate::core::flags::Compiler;
use crate::utils::find_executable;

/// Resolve the compiler choice to an actual command name.
///
/// On macOS `gcc` is Apple clang in disguise, so a Homebrew gcc with a
/// version suffix is preferred when one is on PATH.
pub fn resolve_cc(cc: Compiler) -> String {
    match cc {
        Compiler::Clang => S!("clang"),
        Compiler::Gcc => {
            if cfg!(target_os = "macos") {
                for candidate in GCC_MACOS_CANDIDATES {
                    if find_executable(candidate).is_some() {
                        info!("using homebrew gcc: {}", candidate);
                        return S!(*candidate);
                    }
                }
            }
            S!("gcc")
        }
    }
}

pub fn is_cc_available(command: &str) -> bool {
    match Command::new(command).arg("--version").output() {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}
