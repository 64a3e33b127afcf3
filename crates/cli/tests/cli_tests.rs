// End-to-end tests for the `edtheme` binary.
//
// Every command that touches settings gets an explicit --settings path inside
// a temp dir, so the user's real config is never read or written.

use std::path::Path;
use std::process::{Command, Output};

fn edtheme() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_edtheme"));
    cmd.env_remove("EDTHEME_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    edtheme().args(args).output().expect("failed to run edtheme")
}

fn run_with_settings(args: &[&str], settings: &Path) -> Output {
    edtheme()
        .args(args)
        .arg("--settings")
        .arg(settings)
        .output()
        .expect("failed to run edtheme")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn single_json(out: &Output) -> serde_json::Value {
    let text = stdout(out);
    serde_json::from_str(text.trim())
        .unwrap_or_else(|e| panic!("stdout must be one JSON value: {e}\nstdout:\n{text}"))
}

// ===========================================================================
// list
// ===========================================================================

#[test]
fn list_prints_declared_order() {
    let out = run(&["list"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let lines: Vec<_> = stdout(&out).lines().map(str::to_string).collect();
    assert_eq!(
        lines,
        ["onedarkpro", "dracula", "night", "dark -> onedarkpro", "emerald", "forest", "winter"]
    );
}

#[test]
fn list_json_shape() {
    let out = run(&["list", "--json"]);
    assert!(out.status.success());
    let val = single_json(&out);
    let arr = val.as_array().expect("array");
    assert_eq!(arr.len(), 7);
    assert_eq!(arr[0]["name"], "onedarkpro");
    assert!(arr[0]["alias_of"].is_null());
    assert_eq!(arr[3]["name"], "dark");
    assert_eq!(arr[3]["alias_of"], "onedarkpro");
    assert_eq!(arr[4]["appearance"], "light");
    assert_eq!(arr[6]["appearance"], "light");
    assert_eq!(arr[1]["appearance"], "dark");
}

// ===========================================================================
// show
// ===========================================================================

#[test]
fn show_emits_editor_theme_json() {
    let out = run(&["show", "forest"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let val = single_json(&out);
    assert_eq!(val["base"], "vs-dark");
    assert_eq!(val["inherit"], false);
    assert_eq!(val["colors"]["editor.background"], "#171212");
    assert!(val["rules"].as_array().is_some_and(|r| !r.is_empty()));
}

#[test]
fn show_compact_is_one_line() {
    let out = run(&["show", "dracula", "--compact"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim_end().lines().count(), 1);
    single_json(&out);
}

#[test]
fn show_alias_matches_target() {
    let alias = stdout(&run(&["show", "dark"]));
    let target = stdout(&run(&["show", "onedarkpro"]));
    assert_eq!(alias, target);
}

#[test]
fn show_unknown_exits_not_found() {
    let out = run(&["show", "solarized"]);
    assert_eq!(out.status.code(), Some(3));
    assert!(stdout(&out).is_empty());
    let err = stderr(&out);
    assert!(err.contains("solarized"), "stderr: {err}");
    assert!(err.contains("edtheme list"), "stderr: {err}");
}

#[test]
fn show_is_case_sensitive() {
    let out = run(&["show", "Dracula"]);
    assert_eq!(out.status.code(), Some(3));
}

#[test]
fn show_empty_name_is_usage_error() {
    let out = run(&["show", ""]);
    assert_eq!(out.status.code(), Some(2));
}

// ===========================================================================
// validate / ui-config
// ===========================================================================

#[test]
fn validate_builtin_ok() {
    let out = run(&["validate"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out).trim(), "ok");
}

#[test]
fn ui_config_lists_stock_and_custom_themes() {
    let out = run(&["ui-config"]);
    assert!(out.status.success());
    let val = single_json(&out);
    assert_eq!(
        val,
        serde_json::json!([
            {"onedarkpro": {"extends": "dark", "base-100": "#282c34", "primary": "#81279c"}},
            "dark", "emerald", "forest", "dracula", "night", "lemonade", "winter"
        ])
    );
}

// ===========================================================================
// current / set
// ===========================================================================

#[test]
fn current_defaults_to_dark_without_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let out = run_with_settings(&["current"], &path);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "dark");
    assert!(!path.exists(), "current must not write settings");
}

#[test]
fn set_ui_theme_then_current_follows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let out = run_with_settings(&["set", "forest"], &path);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out).trim(), "forest");
    assert!(path.exists());

    let out = run_with_settings(&["current"], &path);
    assert_eq!(stdout(&out).trim(), "forest");
}

#[test]
fn ui_theme_without_editor_theme_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let out = run_with_settings(&["set", "lemonade"], &path);
    assert!(out.status.success());

    let out = run_with_settings(&["current"], &path);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "dark");
    assert!(stderr(&out).contains("lemonade"));
}

#[test]
fn editor_override_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    run_with_settings(&["set", "winter"], &path);
    let out = run_with_settings(&["set", "dracula", "--editor"], &path);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "dracula");
    assert_eq!(stdout(&run_with_settings(&["current"], &path)).trim(), "dracula");

    let out = run_with_settings(&["set", "--editor", "--clear"], &path);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out).trim(), "winter");

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved, serde_json::json!({"ui.theme": "winter"}));
}

#[test]
fn set_unknown_names_leave_settings_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let out = run_with_settings(&["set", "solarized"], &path);
    assert_eq!(out.status.code(), Some(3));
    assert!(stderr(&out).contains("available:"));

    // lemonade is a UI theme but not an editor theme
    let out = run_with_settings(&["set", "lemonade", "--editor"], &path);
    assert_eq!(out.status.code(), Some(3));

    assert!(!path.exists());
}

#[test]
fn commented_settings_file_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        "{\n    // picked in the UI\n    \"ui.theme\": \"emerald\"\n}\n",
    )
    .unwrap();

    let out = run_with_settings(&["current"], &path);
    assert_eq!(stdout(&out).trim(), "emerald");
}

#[test]
fn set_refuses_to_overwrite_malformed_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let original = r#"{"ui.theme":"forest","editor.theme":"night",}"#;
    std::fs::write(&path, original).unwrap();

    let out = run_with_settings(&["set", "winter"], &path);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("fix or remove"), "stderr: {}", stderr(&out));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn set_without_name_is_usage_error() {
    let out = run(&["set"]);
    assert_eq!(out.status.code(), Some(2));
}
