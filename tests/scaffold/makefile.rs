use std::fs;

use c_init::core::flags::Compiler;
use c_init::core::scaffold::generate;

use crate::setup::setup::*;

#[test]
fn test_makefile_placeholders_filled() {
    let dir = scratch_dir();
    let mut settings = settings_for(&dir);
    settings.name = Some("Demo App".to_string());
    generate(&settings).expect("generation failed");

    let makefile = fs::read_to_string(dir.path().join("Makefile")).unwrap();
    assert!(makefile.starts_with("CC := clang\nNAME := demo_app\n"));
    assert!(!makefile.contains("${"), "unfilled placeholder left behind");
}

#[test]
fn test_makefile_with_tests_keeps_section_strips_markers() {
    let dir = scratch_dir();
    let settings = settings_for(&dir);
    generate(&settings).expect("generation failed");

    let makefile = fs::read_to_string(dir.path().join("Makefile")).unwrap();
    assert!(!makefile.contains("# TEST_SECTION_BEGIN"));
    assert!(!makefile.contains("# TEST_SECTION_END"));
    assert!(makefile.contains("\ntest: $(TEST_BIN)\n"));
    assert!(makefile.contains("@$(MAKE) SANITIZE=1 MODE=debug all test"));
    assert!(makefile.contains(
        ".PHONY: all run release run-release test sanitize fmt lint clean"
    ));
}

#[test]
fn test_makefile_without_tests_replaces_section() {
    let dir = scratch_dir();
    let mut settings = settings_for(&dir);
    settings.no_tests = true;
    generate(&settings).expect("generation failed");

    let makefile = fs::read_to_string(dir.path().join("Makefile")).unwrap();
    assert!(!makefile.contains("# TEST_SECTION_BEGIN"));
    assert!(!makefile.contains("TEST_BIN"));
    assert!(!makefile.contains("\ntest:"));
    assert!(makefile.contains("sanitize:\n\t@$(MAKE) SANITIZE=1 MODE=debug all\n"));
    assert!(makefile.contains(
        ".PHONY: all run release run-release sanitize fmt lint clean"
    ));
}

#[test]
fn test_makefile_uses_resolved_gcc_command() {
    let dir = scratch_dir();
    let mut settings = settings_for(&dir);
    settings.cc = Compiler::Gcc;
    let outcome = generate(&settings).expect("generation failed");

    let makefile = fs::read_to_string(dir.path().join("Makefile")).unwrap();
    assert!(makefile.starts_with(&format!("CC := {}\n", outcome.cc_command)));
    assert!(outcome.cc_command.starts_with("gcc"));
}
