use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::{contains, is_match};
use tempfile::TempDir;

const LIB_RUNTIME: &str = "/* library copy */\nvar cordova = { platformId: 'nodewebkit' };\n";

fn cmd(bin: &str, home: &Path) -> Command {
    let mut cmd = match bin {
        "create" => Command::new(assert_cmd::cargo::cargo_bin!("create")),
        _ => Command::new(assert_cmd::cargo::cargo_bin!("update")),
    };
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env_remove("NWKIT_RUNTIME_DIR")
        .env_remove("NWKIT_TEMPLATE_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// A runtime library root containing `cordova-lib/cordova.js`.
fn library(content: &str) -> TempDir {
    let dir = TempDir::new().expect("lib dir");
    fs::create_dir_all(dir.path().join("cordova-lib")).expect("mkdir");
    fs::write(dir.path().join("cordova-lib/cordova.js"), content).expect("write lib");
    dir
}

/// A template directory whose `index.html` carries `marker`.
fn templates(marker: &str) -> TempDir {
    let dir = TempDir::new().expect("template dir");
    fs::create_dir_all(dir.path().join("app/www")).expect("mkdir");
    fs::write(
        dir.path().join("app/www/index.html.tera"),
        format!("<!-- {marker} --><title>{{{{ window_title }}}}</title>\n"),
    )
    .expect("write template");
    dir
}

fn write_settings(home: &Path, yaml: &str) {
    fs::create_dir_all(home.join(".nwkit")).expect("mkdir");
    fs::write(home.join(".nwkit/config.yaml"), yaml).expect("write settings");
}

fn index_html(target: &Path) -> String {
    fs::read_to_string(target.join("app/www/index.html")).expect("index.html")
}

fn create_project(home: &Path, lib: &Path, target: &Path) {
    cmd("create", home)
        .arg(target)
        .args(["com.example.proj", "projName"])
        .arg("--runtime-dir")
        .arg(lib)
        .assert()
        .success()
        .stderr("");
}

#[test]
fn create_without_args_prints_usage() {
    let home = TempDir::new().expect("home");
    cmd("create", home.path())
        .assert()
        .code(64)
        .stderr(is_match("^Usage: create").expect("regex"));
}

#[test]
fn create_help_wins_over_valid_args() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let target = workspace.path().join("p");

    cmd("create", home.path())
        .arg("--help")
        .arg(&target)
        .args(["pkg", "projName"])
        .assert()
        .code(64)
        .stderr(is_match("^Usage: create").expect("regex"));
    assert!(!target.exists());
}

#[test]
fn create_with_missing_name_prints_usage() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    cmd("create", home.path())
        .arg(workspace.path().join("p"))
        .arg("pkg")
        .assert()
        .code(64)
        .stderr(is_match("^Usage: create").expect("regex"));
}

#[test]
fn unknown_flags_are_usage_errors() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let target = workspace.path().join("p");

    cmd("create", home.path())
        .arg("--version")
        .assert()
        .code(64)
        .stdout("")
        .stderr(is_match("^Usage: create").expect("regex"));
    cmd("update", home.path())
        .arg(&target)
        .arg("--version")
        .assert()
        .code(64)
        .stderr(is_match("^Usage: update").expect("regex"));
    cmd("create", home.path())
        .arg(&target)
        .args(["pkg", "p", "extra"])
        .assert()
        .code(64)
        .stderr(is_match("^Usage: create").expect("regex"));
    assert!(!target.exists());
}

#[test]
fn create_rejects_malformed_package_id() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let target = workspace.path().join("p");

    cmd("create", home.path())
        .arg(&target)
        .args(["com example", "projName"])
        .assert()
        .code(64)
        .stderr(is_match("^Usage: create").expect("regex"))
        .stderr(contains("<PACKAGE_ID>"));
    assert!(!target.exists());
}

#[test]
fn create_on_existing_dir_is_conflict() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let target = workspace.path().join("taken");
    fs::create_dir(&target).expect("mkdir");
    fs::write(target.join("notes.txt"), "keep me").expect("write");

    cmd("create", home.path())
        .arg(&target)
        .args(["pkg", "projName"])
        .assert()
        .code(64)
        .stderr("Project already exists. Delete and recreate\n");
    assert_eq!(fs::read_to_string(target.join("notes.txt")).expect("read"), "keep me");
    assert!(!target.join("app").exists());
}

#[test]
fn create_builds_project_from_runtime_dir() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let lib = library(LIB_RUNTIME);
    let target = workspace.path().join("theProjDir");

    cmd("create", home.path())
        .arg(&target)
        .args(["com.example.proj", "projName"])
        .arg("--runtime-dir")
        .arg(lib.path())
        .assert()
        .success()
        .stderr("")
        .stdout(contains("projName"));

    assert!(target.join("app").is_dir());
    assert_eq!(
        fs::read_to_string(target.join("app/www/cordova.js")).expect("asset"),
        LIB_RUNTIME
    );

    let manifest: serde_json::Value =
        serde_json::from_slice(&fs::read(target.join("app/package.json")).expect("manifest"))
            .expect("json");
    assert_eq!(manifest["main"], "www/index.html");
    assert_eq!(manifest["name"], "projName");
    assert_eq!(manifest["window"]["title"], "projName");
}

#[test]
fn create_uses_bundled_runtime_by_default() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let target = workspace.path().join("p");

    cmd("create", home.path())
        .arg(&target)
        .args(["pkg", "p"])
        .assert()
        .success()
        .stderr("");

    let asset = fs::read(target.join("app/www/cordova.js")).expect("asset");
    assert_eq!(asset, nwkit_sync::runtime::EMBEDDED_RUNTIME);
}

#[test]
fn runtime_dir_from_environment() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let lib = library("/* from env */");
    let target = workspace.path().join("p");

    cmd("create", home.path())
        .env("NWKIT_RUNTIME_DIR", lib.path())
        .arg(&target)
        .args(["pkg", "p"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(target.join("app/www/cordova.js")).expect("asset"),
        "/* from env */"
    );
}

#[test]
fn runtime_dir_from_settings_file() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let lib = library("/* from settings */");
    let target = workspace.path().join("p");

    write_settings(
        home.path(),
        &format!("runtime_dir: {}\n", lib.path().display()),
    );

    cmd("create", home.path())
        .arg(&target)
        .args(["pkg", "p"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(target.join("app/www/cordova.js")).expect("asset"),
        "/* from settings */"
    );
}

#[test]
fn runtime_dir_flag_beats_environment() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let from_flag = library("/* from flag */");
    let from_env = library("/* from env */");
    let target = workspace.path().join("p");

    cmd("create", home.path())
        .env("NWKIT_RUNTIME_DIR", from_env.path())
        .arg(&target)
        .args(["pkg", "p"])
        .arg("--runtime-dir")
        .arg(from_flag.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(target.join("app/www/cordova.js")).expect("asset"),
        "/* from flag */"
    );
}

#[test]
fn runtime_dir_environment_beats_settings() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let from_env = library("/* from env */");
    let from_settings = library("/* from settings */");
    let target = workspace.path().join("p");
    write_settings(
        home.path(),
        &format!("runtime_dir: {}\n", from_settings.path().display()),
    );

    cmd("create", home.path())
        .env("NWKIT_RUNTIME_DIR", from_env.path())
        .arg(&target)
        .args(["pkg", "p"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(target.join("app/www/cordova.js")).expect("asset"),
        "/* from env */"
    );
}

#[test]
fn template_dir_from_flag() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let tpl = templates("flag-skeleton");
    let target = workspace.path().join("p");

    cmd("create", home.path())
        .arg(&target)
        .args(["pkg", "Flagged"])
        .arg("--template-dir")
        .arg(tpl.path())
        .assert()
        .success()
        .stderr("");

    assert_eq!(index_html(&target), "<!-- flag-skeleton --><title>Flagged</title>\n");
    assert!(target.join("app/www/css/index.css").is_file());
}

#[test]
fn template_dir_from_environment() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let tpl = templates("env-skeleton");
    let target = workspace.path().join("p");

    cmd("create", home.path())
        .env("NWKIT_TEMPLATE_DIR", tpl.path())
        .arg(&target)
        .args(["pkg", "p"])
        .assert()
        .success();

    assert!(index_html(&target).starts_with("<!-- env-skeleton -->"));
}

#[test]
fn template_dir_from_settings_file() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let tpl = templates("settings-skeleton");
    let target = workspace.path().join("p");
    write_settings(
        home.path(),
        &format!("template_dir: {}\n", tpl.path().display()),
    );

    cmd("create", home.path())
        .arg(&target)
        .args(["pkg", "p"])
        .assert()
        .success();

    assert!(index_html(&target).starts_with("<!-- settings-skeleton -->"));
}

#[test]
fn template_dir_flag_beats_environment_and_settings() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let from_flag = templates("flag-skeleton");
    let from_env = templates("env-skeleton");
    let from_settings = templates("settings-skeleton");
    let target = workspace.path().join("p");
    write_settings(
        home.path(),
        &format!("template_dir: {}\n", from_settings.path().display()),
    );

    cmd("create", home.path())
        .env("NWKIT_TEMPLATE_DIR", from_env.path())
        .arg(&target)
        .args(["pkg", "p"])
        .arg("--template-dir")
        .arg(from_flag.path())
        .assert()
        .success();

    assert!(index_html(&target).starts_with("<!-- flag-skeleton -->"));
}

#[test]
fn embedded_skeleton_without_template_dir() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let target = workspace.path().join("p");

    cmd("create", home.path())
        .arg(&target)
        .args(["pkg", "p"])
        .assert()
        .success();

    let index = index_html(&target);
    assert!(!index.contains("-skeleton -->"));
    assert!(index.contains(r#"src="cordova.js""#));
}

#[test]
fn malformed_settings_file_is_config_error() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let target = workspace.path().join("p");

    write_settings(home.path(), "runtime_dir: [unclosed\n");

    cmd("create", home.path())
        .arg(&target)
        .args(["pkg", "p"])
        .assert()
        .code(78)
        .stderr(contains("config.yaml"));
    assert!(!target.exists());
}

#[test]
fn create_with_missing_runtime_dir_is_io_failure() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let target = workspace.path().join("p");

    cmd("create", home.path())
        .arg(&target)
        .args(["pkg", "p"])
        .arg("--runtime-dir")
        .arg(workspace.path().join("no-such-lib"))
        .assert()
        .code(74)
        .stderr(contains("error:"));
    assert!(!target.exists());
    assert!(!workspace.path().join(".p.nwkit.tmp").exists());
}

#[test]
fn update_without_args_prints_usage() {
    let home = TempDir::new().expect("home");
    cmd("update", home.path())
        .assert()
        .code(64)
        .stderr(is_match("^Usage: update").expect("regex"));
}

#[test]
fn update_help_wins_over_valid_args() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let lib = library(LIB_RUNTIME);
    let target = workspace.path().join("p");
    create_project(home.path(), lib.path(), &target);

    cmd("update", home.path())
        .arg(&target)
        .arg("--help")
        .assert()
        .code(64)
        .stderr(is_match("^Usage: update").expect("regex"));
}

#[test]
fn update_missing_project_is_not_found() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");

    cmd("update", home.path())
        .arg(workspace.path().join("nope"))
        .assert()
        .code(66)
        .stderr("Project not found\n");
}

#[test]
fn update_on_plain_directory_is_not_found() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");

    cmd("update", home.path())
        .arg(workspace.path())
        .assert()
        .code(66)
        .stderr("Project not found\n");
}

#[test]
fn update_restores_modified_runtime() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let lib = library(LIB_RUNTIME);
    let target = workspace.path().join("theProjDir");
    create_project(home.path(), lib.path(), &target);

    let manifest_before = fs::read(target.join("app/package.json")).expect("manifest");
    fs::write(target.join("app/www/cordova.js"), "// local edits").expect("patch");

    cmd("update", home.path())
        .arg(&target)
        .arg("--runtime-dir")
        .arg(lib.path())
        .assert()
        .success()
        .stderr("")
        .stdout(contains("written").and(contains("projName")));

    assert_eq!(
        fs::read_to_string(target.join("app/www/cordova.js")).expect("asset"),
        LIB_RUNTIME
    );
    assert_eq!(
        fs::read(target.join("app/package.json")).expect("manifest"),
        manifest_before
    );

    cmd("update", home.path())
        .arg(&target)
        .arg("--runtime-dir")
        .arg(lib.path())
        .assert()
        .success()
        .stdout(contains("unchanged"));
}
