//! Integration tests for the skema binary.
//!
//! Every generate invocation here passes both positionals, so no prompt
//! fires and the runs stay non-interactive.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn skema() -> Command {
    Command::cargo_bin("skema").unwrap()
}

fn project_with_pattern(pattern: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("skema.toml"),
        format!("scaffold_pattern = \"{pattern}\"\n"),
    )
    .unwrap();
    temp
}

#[test]
fn help_flag() {
    skema()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn version_flag() {
    skema()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_config_aborts_before_anything_else() {
    let temp = TempDir::new().unwrap();

    skema()
        .current_dir(temp.path())
        .args(["generate", "usecase", "OrderTotal"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("skema.toml"))
        .stderr(predicate::str::contains("skema init"));

    // Fail-fast: nothing was created.
    assert!(!temp.path().join("src").exists());
}

#[test]
fn generates_usecase_with_kebab_pattern() {
    let temp = project_with_pattern("kebab-case");

    skema()
        .current_dir(temp.path())
        .args(["generate", "usecase", "OrderTotal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("order-total.usecase.ts"));

    let file = temp.path().join("src/order-total/order-total.usecase.ts");
    let spec = temp
        .path()
        .join("src/order-total/order-total.usecase.spec.ts");
    assert!(file.exists());
    assert!(spec.exists(), "spec emission defaults to on");

    let content = std::fs::read_to_string(&file).unwrap();
    assert!(content.contains("export class OrderTotalUseCase"));

    // The companion spec imports the source file it sits next to.
    let spec_content = std::fs::read_to_string(&spec).unwrap();
    assert!(spec_content.contains("from './order-total.usecase'"));
}

#[test]
fn single_letter_alias_expands() {
    let temp = project_with_pattern("kebab-case");

    skema()
        .current_dir(temp.path())
        .args(["g", "u", "UserProfile"])
        .assert()
        .success();

    assert!(
        temp.path()
            .join("src/user-profile/user-profile.usecase.ts")
            .exists()
    );
}

#[test]
fn no_spec_suppresses_companion_file() {
    let temp = project_with_pattern("kebab-case");

    skema()
        .current_dir(temp.path())
        .args(["generate", "dto", "Invoice", "--no-spec"])
        .assert()
        .success();

    assert!(temp.path().join("src/invoice/invoice.dto.ts").exists());
    assert!(!temp.path().join("src/invoice/invoice.dto.spec.ts").exists());
}

#[test]
fn pascal_pattern_keeps_folder_pascal() {
    let temp = project_with_pattern("PascalCase");

    skema()
        .current_dir(temp.path())
        .args(["generate", "service", "user_profile"])
        .assert()
        .success();

    let file = temp.path().join("src/UserProfile/UserProfile.service.ts");
    assert!(file.exists());
    let content = std::fs::read_to_string(&file).unwrap();
    assert!(content.contains("UserProfileService"));
}

#[test]
fn unsupported_schematic_fails_with_allowed_set() {
    let temp = project_with_pattern("kebab-case");

    skema()
        .current_dir(temp.path())
        .args(["generate", "widget", "Anything"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("widget"))
        .stderr(predicate::str::contains(
            "usecase, controller, dto, service",
        ));

    assert!(!temp.path().join("src").exists());
}

#[test]
fn rerun_into_existing_folder_succeeds() {
    let temp = project_with_pattern("kebab-case");

    for _ in 0..2 {
        skema()
            .current_dir(temp.path())
            .args(["generate", "usecase", "OrderTotal"])
            .assert()
            .success();
    }
}

#[test]
fn config_without_pattern_defaults_to_kebab() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("skema.toml"), "").unwrap();

    skema()
        .current_dir(temp.path())
        .args(["generate", "controller", "UserProfile"])
        .assert()
        .success();

    assert!(
        temp.path()
            .join("src/user-profile/user-profile.controller.ts")
            .exists()
    );
}

#[test]
fn invalid_pattern_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("skema.toml"),
        "scaffold_pattern = \"SCREAMING\"\n",
    )
    .unwrap();

    skema()
        .current_dir(temp.path())
        .args(["generate", "usecase", "OrderTotal"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn init_writes_default_config() {
    let temp = TempDir::new().unwrap();

    skema()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success();

    let config = std::fs::read_to_string(temp.path().join("skema.toml")).unwrap();
    assert!(config.contains("kebab-case"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("skema.toml"),
        "scaffold_pattern = \"camelCase\"\n",
    )
    .unwrap();

    skema()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success();

    // Untouched without --force.
    let config = std::fs::read_to_string(temp.path().join("skema.toml")).unwrap();
    assert!(config.contains("camelCase"));

    skema()
        .current_dir(temp.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let config = std::fs::read_to_string(temp.path().join("skema.toml")).unwrap();
    assert!(config.contains("kebab-case"));
}

#[test]
fn completions_bash_emits_script() {
    skema()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skema"));
}

#[test]
fn template_override_is_used() {
    let temp = project_with_pattern("kebab-case");
    let overrides = temp.path().join(".skema/templates");
    std::fs::create_dir_all(&overrides).unwrap();
    std::fs::write(
        overrides.join("dto.ts.tmpl"),
        "// project-local {{name}}\n",
    )
    .unwrap();

    skema()
        .current_dir(temp.path())
        .args(["generate", "dto", "Order", "--no-spec"])
        .assert()
        .success();

    let content = std::fs::read_to_string(temp.path().join("src/order/order.dto.ts")).unwrap();
    assert_eq!(content, "// project-local Order\n");
}
