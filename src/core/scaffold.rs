//! The generation pipeline: directories, templated assets, flag files,
//! linter profile, git setup and the final summary.
//!
//! Everything is rooted at an explicit directory; the working directory is
//! never changed, so the pipeline can run against scratch dirs in tests.

use anyhow::{Context, Result, anyhow, bail};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::{env, fs};
use tracing::{info, warn};

use crate::S;
use crate::config::Settings;
use crate::console::Console;
use crate::constants::{
    GITIGNORE_CONTENT, PHONY_WITH_TESTS, PHONY_WITHOUT_TESTS, TEST_SECTION_BEGIN, TEST_SECTION_END,
};
use crate::core::{assets, flags, template, toolchain};
use crate::utils::{PathSanitizer, is_dir_nonempty, write_file};

#[derive(Debug)]
pub struct ScaffoldOutcome {
    pub project_name: String,
    pub binary_name: String,
    pub root: PathBuf,
    pub cc_command: String,
    pub with_tests: bool,
    /// Relative paths of every file written, in generation order.
    pub files: Vec<String>,
}

pub fn generate(settings: &Settings) -> Result<ScaffoldOutcome> {
    let root = PathBuf::from(&settings.path);
    if root != Path::new(".") {
        fs::create_dir_all(&root)
            .with_context(|| format!("failed to create {}", settings.path))?;
    }

    let project_name = resolve_project_name(settings, &root);
    let binary_name = project_name.to_ascii_lowercase().replace(' ', "_");

    if is_dir_nonempty(&root).unwrap_or(false) && !settings.force {
        bail!(
            "The folder {} is not empty (use --force to proceed)",
            settings.path
        );
    }

    for dir in ["src", "include", "target"] {
        fs::create_dir_all(root.join(dir)).with_context(|| format!("failed to create {}", dir))?;
    }
    if !settings.no_tests {
        fs::create_dir_all(root.join("tests").join("test-deps"))
            .context("failed to create tests/test-deps")?;
    }

    let cc_command = toolchain::resolve_cc(settings.cc);
    info!("resolved compiler {} -> {}", settings.cc.as_str(), cc_command);
    if !toolchain::is_cc_available(&cc_command) {
        warn!("{} not found in PATH; the generated Makefile will need it", cc_command);
    }

    let mut files: Vec<String> = Vec::new();

    if !settings.no_hello {
        let vars = HashMap::from([(S!("project_name"), project_name.clone())]);
        let main_c = template::fill_template(assets::MAIN_C_TEMPLATE, &vars)
            .map_err(|err| anyhow!(err))
            .context("main.c template")?;
        emit(&root, "src/main.c", &main_c, &mut files)?;
    }

    if !settings.no_tests {
        emit(&root, "tests/test-deps/acutest.h", assets::ACUTEST_HEADER, &mut files)?;
        emit(&root, "tests/test_basic.c", assets::TEST_BASIC, &mut files)?;
    }

    let makefile = makefile_contents(&cc_command, &binary_name, settings.no_tests)?;
    emit(&root, "Makefile", &makefile, &mut files)?;

    emit(
        &root,
        "compile_flags.txt",
        &flags::flags_file(settings.cc, settings.strictness),
        &mut files,
    )?;
    if !settings.no_tests {
        emit(
            &root,
            "tests/compile_flags.txt",
            &flags::test_flags_file(settings.cc, settings.strictness),
            &mut files,
        )?;
    }

    emit(
        &root,
        ".clang-tidy",
        assets::clang_tidy_profile(settings.linter_strictness()),
        &mut files,
    )?;

    let vars = HashMap::from([(S!("project_name"), project_name.clone())]);
    let readme = template::fill_template(assets::README_TEMPLATE, &vars)
        .map_err(|err| anyhow!(err))
        .context("README template")?;
    emit(&root, "README.md", &readme, &mut files)?;

    if !settings.no_git {
        init_git(&root, settings.no_commit, &mut files)?;
    }

    Ok(ScaffoldOutcome {
        project_name,
        binary_name,
        root,
        cc_command,
        with_tests: !settings.no_tests,
        files,
    })
}

fn resolve_project_name(settings: &Settings, root: &Path) -> String {
    if let Some(name) = &settings.name {
        return name.clone();
    }
    if root == Path::new(".") {
        if let Ok(current) = env::current_dir() {
            if let Some(name) = current.file_name().and_then(|s| s.to_str()) {
                return S!(name);
            }
        }
    } else if let Some(name) = root.file_name().and_then(|s| s.to_str()) {
        return S!(name);
    }
    S!("project")
}

fn emit(root: &Path, rel: &str, contents: &str, files: &mut Vec<String>) -> Result<()> {
    let path = root.join(rel);
    write_file(&path, contents).with_context(|| format!("failed to write {}", rel))?;
    info!("wrote {}", path.sanitize());
    files.push(S!(rel));
    Ok(())
}

/// Fill the Makefile template. With tests the section marker lines are
/// stripped; without tests the whole section is replaced by a minimal
/// sanitize target.
fn makefile_contents(cc_command: &str, binary_name: &str, no_tests: bool) -> Result<String> {
    let phony = if no_tests {
        PHONY_WITHOUT_TESTS
    } else {
        PHONY_WITH_TESTS
    };
    let vars = HashMap::from([
        (S!("cc"), S!(cc_command)),
        (S!("name"), S!(binary_name)),
        (S!("phony"), S!(phony)),
    ]);
    let mut makefile = template::fill_template(assets::MAKEFILE_TEMPLATE, &vars)
        .map_err(|err| anyhow!(err))
        .context("Makefile template")?;

    if no_tests {
        if let (Some(start), Some(end)) = (
            makefile.find(TEST_SECTION_BEGIN),
            makefile.find(TEST_SECTION_END),
        ) {
            let end = end + TEST_SECTION_END.len();
            makefile.replace_range(start..end, "sanitize:\n\t@$(MAKE) SANITIZE=1 MODE=debug all\n");
        }
    } else {
        makefile = makefile
            .replace(&format!("{}\n", TEST_SECTION_BEGIN), "")
            .replace(&format!("\n{}", TEST_SECTION_END), "");
    }
    Ok(makefile)
}

/// Set up a git repository at the root. A failed `git init` skips the
/// .gitignore and the commit; a failed commit (missing git identity) is
/// tolerated. Nothing here fails scaffolding.
fn init_git(root: &Path, no_commit: bool, files: &mut Vec<String>) -> Result<()> {
    if root.join(".git").exists() {
        info!("{} already has a git repository, skipping init", root.sanitize());
        return Ok(());
    }
    let initialized = Command::new("git")
        .args(["init", "-q"])
        .current_dir(root)
        .status()
        .map(|status| status.success())
        .unwrap_or(false);
    if !initialized {
        warn!("git init failed in {}, skipping repository setup", root.sanitize());
        return Ok(());
    }
    emit(root, ".gitignore", GITIGNORE_CONTENT, files)?;
    if !no_commit {
        let _ = Command::new("git")
            .args(["add", "-A"])
            .current_dir(root)
            .status();
        let committed = Command::new("git")
            .args(["commit", "-m", "init"])
            .current_dir(root)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false);
        if !committed {
            warn!("initial git commit failed (missing git identity?)");
        }
    }
    Ok(())
}

pub fn print_summary<W: Write>(
    console: &mut Console<W>,
    settings: &Settings,
    outcome: &ScaffoldOutcome,
) {
    let created = console.green("Created");
    console.line(&format!(
        "{} project '{}' at {} (using {})",
        created, outcome.project_name, settings.path, outcome.cc_command
    ));
    console.blank();
    console.line("Next steps:");
    let comment = console.muted("# debug build");
    console.line(&format!("  make         {}", comment));
    let comment = console.muted("# build+run");
    console.line(&format!("  make run     {}", comment));
    let comment = console.muted("# run in watch mode");
    console.line(&format!("  make watch   {}", comment));
    if outcome.with_tests {
        let comment = console.muted("# build and run tests");
        console.line(&format!("  make test    {}", comment));
    }
    let comment = console.muted("# release build");
    console.line(&format!("  make release {}", comment));
    console.blank();
    console.line("Happy Hacking!");
}
