use std::fs;

use c_init::S;
use c_init::core::scaffold::generate;

use crate::setup::setup::*;

#[test]
fn test_full_tree() {
    let dir = scratch_dir();
    let settings = settings_for(&dir);
    let outcome = generate(&settings).expect("generation failed");

    for rel in [
        "Makefile",
        "compile_flags.txt",
        ".clang-tidy",
        "README.md",
        "src/main.c",
        "tests/test_basic.c",
        "tests/test-deps/acutest.h",
        "tests/compile_flags.txt",
    ] {
        assert!(dir.path().join(rel).is_file(), "missing {}", rel);
        assert!(outcome.files.contains(&S!(rel)), "{} not recorded", rel);
    }
    for subdir in ["src", "include", "target", "tests/test-deps"] {
        assert!(dir.path().join(subdir).is_dir(), "missing dir {}", subdir);
    }
    assert!(outcome.with_tests);
    assert_eq!(outcome.cc_command, "clang");
}

#[test]
fn test_project_name_defaults_to_directory_name() {
    let dir = scratch_dir();
    let settings = settings_for(&dir);
    let outcome = generate(&settings).expect("generation failed");

    let dir_name = dir.path().file_name().unwrap().to_str().unwrap();
    assert_eq!(outcome.project_name, dir_name);
}

#[test]
fn test_explicit_name_flows_into_hello_and_readme() {
    let dir = scratch_dir();
    let mut settings = settings_for(&dir);
    settings.name = Some(S!("My Project"));
    let outcome = generate(&settings).expect("generation failed");

    assert_eq!(outcome.project_name, "My Project");
    assert_eq!(outcome.binary_name, "my_project");

    let main_c = fs::read_to_string(dir.path().join("src/main.c")).unwrap();
    assert!(main_c.contains("Hello from %s!"));
    assert!(main_c.contains("\"My Project\""));

    let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.starts_with("# My Project"));
}

#[test]
fn test_nonempty_dir_refused_without_force() {
    let dir = scratch_dir();
    fs::write(dir.path().join("leftover.txt"), "x").unwrap();

    let settings = settings_for(&dir);
    let err = generate(&settings).expect_err("should refuse a non-empty dir");
    assert!(err.to_string().contains("is not empty"));
    assert!(err.to_string().contains("--force"));

    let mut forced = settings_for(&dir);
    forced.force = true;
    generate(&forced).expect("force should proceed");
    assert!(dir.path().join("Makefile").is_file());
}

#[test]
fn test_no_hello_skips_main_c() {
    let dir = scratch_dir();
    let mut settings = settings_for(&dir);
    settings.no_hello = true;
    let outcome = generate(&settings).expect("generation failed");

    assert!(!dir.path().join("src/main.c").exists());
    assert!(!outcome.files.contains(&S!("src/main.c")));
    // src/ itself is still created
    assert!(dir.path().join("src").is_dir());
}

#[test]
fn test_no_tests_skips_test_scaffolding() {
    let dir = scratch_dir();
    let mut settings = settings_for(&dir);
    settings.no_tests = true;
    let outcome = generate(&settings).expect("generation failed");

    assert!(!dir.path().join("tests").exists());
    assert!(!outcome.with_tests);
    assert!(!outcome.files.iter().any(|f| f.starts_with("tests/")));
}

#[test]
fn test_vendored_test_program_content() {
    let dir = scratch_dir();
    let settings = settings_for(&dir);
    generate(&settings).expect("generation failed");

    let test_basic = fs::read_to_string(dir.path().join("tests/test_basic.c")).unwrap();
    assert!(test_basic.contains("#define ACUTEST_IMPLEMENTATION"));
    assert!(test_basic.contains("{\"tutorial\", test_tutorial}"));
    assert!(test_basic.contains("{\"addition\", test_addition}"));
    assert!(test_basic.contains("{NULL, NULL}"));

    let header = fs::read_to_string(dir.path().join("tests/test-deps/acutest.h")).unwrap();
    assert!(header.contains("#define TEST_LIST"));
    assert!(header.contains("#define TEST_CHECK(cond)"));
    assert!(header.contains("#define TEST_MSG"));
}

#[test]
fn test_compile_flags_files() {
    let dir = scratch_dir();
    let settings = settings_for(&dir);
    generate(&settings).expect("generation failed");

    let flags = fs::read_to_string(dir.path().join("compile_flags.txt")).unwrap();
    assert!(flags.starts_with("-std=c2x\n"));
    assert!(flags.lines().any(|line| line == "-Iinclude"));
    assert!(flags.lines().any(|line| line == "-Werror"));

    let test_flags = fs::read_to_string(dir.path().join("tests/compile_flags.txt")).unwrap();
    assert!(!test_flags.lines().any(|line| line == "-Iinclude"));
    assert!(test_flags.contains("-I../include\n-I.\n-isystem\n./test-deps"));
}

#[test]
fn test_clang_tidy_profile_follows_linter_strictness() {
    let dir = scratch_dir();
    let mut settings = settings_for(&dir);
    settings.linter_strictness = Some(c_init::core::flags::Strictness::Strictest);
    generate(&settings).expect("generation failed");

    let tidy = fs::read_to_string(dir.path().join(".clang-tidy")).unwrap();
    assert!(tidy.contains("WarningsAsErrors: '*'"));
}

#[test]
fn test_git_init_and_gitignore_are_consistent() {
    let dir = scratch_dir();
    let mut settings = settings_for(&dir);
    settings.no_git = false;
    generate(&settings).expect("generation failed");

    // a failed git init skips the .gitignore, a successful one writes it
    assert_eq!(
        dir.path().join(".git").is_dir(),
        dir.path().join(".gitignore").is_file()
    );
    if dir.path().join(".gitignore").is_file() {
        let gitignore = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert_eq!(gitignore, "target/\n");
    }
}

#[test]
fn test_no_git_leaves_no_repository() {
    let dir = scratch_dir();
    let settings = settings_for(&dir);
    generate(&settings).expect("generation failed");

    assert!(!dir.path().join(".git").exists());
    assert!(!dir.path().join(".gitignore").exists());
}
