#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn punchcard(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("punchcard").unwrap();
    cmd.current_dir(dir.path())
        .env("PUNCHCARD_ROOT", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

const MINIMAL_BUG: [&str; 6] = [
    "--set",
    "observed_behavior=X fails",
    "--set",
    "expected_behavior=X works",
    "--set",
    "steps_to_reproduce=1. run X",
];

// ---------------------------------------------------------------------------
// punchcard init / config
// ---------------------------------------------------------------------------

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();
    punchcard(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("created: .punchcard/config.yaml"));

    let content = std::fs::read_to_string(dir.path().join(".punchcard/config.yaml")).unwrap();
    let parsed: serde_yaml::Value = serde_yaml::from_str(&content).unwrap();
    assert_eq!(parsed["version"], serde_yaml::Value::from(1));
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    punchcard(&dir).arg("init").assert().success();
    punchcard(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists:"));
}

#[test]
fn config_validate_default_is_clean() {
    let dir = TempDir::new().unwrap();
    punchcard(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"));
}

#[test]
fn config_validate_fails_on_empty_export_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".punchcard")).unwrap();
    std::fs::write(
        dir.path().join(".punchcard/config.yaml"),
        "version: 1\nexport:\n  dir: \"\"\n",
    )
    .unwrap();

    punchcard(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error] export.dir"));
}

#[test]
fn config_show_json_has_sections() {
    let dir = TempDir::new().unwrap();
    let output = punchcard(&dir)
        .args(["config", "show", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["render"]["escape_xml"], false);
    assert_eq!(json["export"]["dir"], ".");
}

#[test]
fn config_set_persists_and_drives_export() {
    let dir = TempDir::new().unwrap();
    punchcard(&dir)
        .args(["config", "set", "export.dir", "cards"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export.dir = cards"));

    let content = std::fs::read_to_string(dir.path().join(".punchcard/config.yaml")).unwrap();
    assert!(content.contains("cards"));

    punchcard(&dir)
        .args(["render", "cleanup", "--draft", "--export"])
        .assert()
        .success();
    assert!(dir.path().join("cards/untitled_cleanup.xml").exists());
}

#[test]
fn config_set_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    punchcard(&dir)
        .args(["config", "set", "render.indent", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown key 'render.indent'"));
    assert!(!dir.path().join(".punchcard/config.yaml").exists());
}

// ---------------------------------------------------------------------------
// punchcard list / fields
// ---------------------------------------------------------------------------

#[test]
fn list_shows_all_card_types() {
    let dir = TempDir::new().unwrap();
    let output = punchcard(&dir)
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    for ct in [
        "bug_fix",
        "feature_request",
        "feature_change",
        "documentation",
        "testing",
        "security_audit",
        "cleanup",
    ] {
        assert!(text.contains(ct), "missing {ct} in:\n{text}");
    }
}

#[test]
fn list_json_has_seven_entries() {
    let dir = TempDir::new().unwrap();
    let output = punchcard(&dir)
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 7);
    assert_eq!(json[0]["card_type"], "bug_fix");
    assert_eq!(json[0]["details_block"], "bug_details");
}

#[test]
fn fields_json_describes_ratings_and_toggles() {
    let dir = TempDir::new().unwrap();
    let output = punchcard(&dir)
        .args(["fields", "bug_fix", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let fields = json["fields"].as_array().unwrap();
    let urgency = fields.iter().find(|f| f["name"] == "urgency").unwrap();
    assert_eq!(urgency["kind"], "rating");
    assert_eq!(urgency["labels"][2], "Normal");
    let check = fields
        .iter()
        .find(|f| f["name"] == "check_related_code")
        .unwrap();
    assert_eq!(check["tokens"]["on"], "Check");
    assert_eq!(check["tokens"]["off"], "Skip");
}

#[test]
fn unknown_card_type_fails() {
    let dir = TempDir::new().unwrap();
    punchcard(&dir)
        .args(["fields", "refactor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown card type: refactor"));
}

// ---------------------------------------------------------------------------
// punchcard render
// ---------------------------------------------------------------------------

#[test]
fn render_minimal_bug_fix() {
    let dir = TempDir::new().unwrap();
    punchcard(&dir)
        .args(["render", "bug_fix"])
        .args(MINIMAL_BUG)
        .assert()
        .success()
        .stdout(predicate::str::contains("<task_card type=\"bug_fix\""))
        .stdout(predicate::str::contains(
            "<observed_behavior>X fails</observed_behavior>",
        ))
        .stdout(predicate::str::contains("<urgency level=\"3\">Normal</urgency>"));
}

#[test]
fn render_missing_required_fails() {
    let dir = TempDir::new().unwrap();
    punchcard(&dir)
        .args(["render", "bug_fix", "--set", "observed_behavior=X fails"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected_behavior"))
        .stderr(predicate::str::contains("--draft"));
}

#[test]
fn render_draft_skips_required_check() {
    let dir = TempDir::new().unwrap();
    punchcard(&dir)
        .args(["render", "bug_fix", "--draft"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<observed_behavior>Not specified</observed_behavior>",
        ));
}

#[test]
fn render_feature_request_with_title_and_depth() {
    let dir = TempDir::new().unwrap();
    punchcard(&dir)
        .args([
            "render",
            "feature_request",
            "--set",
            "punchcard_title=Add User Dashboard",
            "--set",
            "feature_description=Show usage stats",
            "--set",
            "documentation_depth=5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<output_path>punchcards/add_user_dashboard.md</output_path>",
        ))
        .stdout(predicate::str::contains("Deep - comprehensive documentation"));
}

#[test]
fn render_rejects_out_of_range_rating() {
    let dir = TempDir::new().unwrap();
    punchcard(&dir)
        .args(["render", "bug_fix", "--draft", "--set", "urgency=7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 5"));
}

#[test]
fn render_rejects_malformed_set() {
    let dir = TempDir::new().unwrap();
    punchcard(&dir)
        .args(["render", "bug_fix", "--set", "urgency"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NAME=VALUE"));
}

#[test]
fn render_reads_values_file_then_set_overrides() {
    let dir = TempDir::new().unwrap();
    let values = dir.path().join("card.yaml");
    std::fs::write(
        &values,
        "observed_behavior: boom\nexpected_behavior: no boom\nsteps_to_reproduce: click\nurgency: 2\n",
    )
    .unwrap();

    punchcard(&dir)
        .args(["render", "bug_fix", "--values"])
        .arg(&values)
        .args(["--set", "urgency=5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<observed_behavior>boom</observed_behavior>"))
        .stdout(predicate::str::contains("<urgency level=\"5\">Critical</urgency>"));
}

#[test]
fn render_values_file_accepts_numbers_and_blank_entries() {
    let dir = TempDir::new().unwrap();
    let values = dir.path().join("card.yaml");
    std::fs::write(
        &values,
        "observed_behavior: boom\nexpected_behavior: fine\nsteps_to_reproduce: run\nruntime_version: 2024\nbrowser: 3.11\nerror_messages:\n",
    )
    .unwrap();

    punchcard(&dir)
        .args(["render", "bug_fix", "--values"])
        .arg(&values)
        .assert()
        .success()
        .stdout(predicate::str::contains("<runtime_version>2024</runtime_version>"))
        .stdout(predicate::str::contains("<browser>3.11</browser>"))
        .stdout(predicate::str::contains("<error_messages>None provided</error_messages>"));
}

#[test]
fn render_values_file_rating_out_of_range_names_field() {
    let dir = TempDir::new().unwrap();
    let values = dir.path().join("card.yaml");
    std::fs::write(&values, "urgency: 300\n").unwrap();

    punchcard(&dir)
        .args(["render", "bug_fix", "--draft", "--values"])
        .arg(&values)
        .assert()
        .failure()
        .stderr(predicate::str::contains("rating for 'urgency' must be between 1 and 5, got 300"));
}

#[test]
fn render_export_writes_file_matching_stdout() {
    let dir = TempDir::new().unwrap();
    let output = punchcard(&dir)
        .args(["render", "bug_fix", "--export", "--set", "punchcard_title=Fix Login!!"])
        .args(MINIMAL_BUG)
        .assert()
        .success()
        .stderr(predicate::str::contains("exported:"))
        .get_output()
        .stdout
        .clone();

    let written = std::fs::read(dir.path().join("fix_login_bug_fix.xml")).unwrap();
    assert_eq!(written, output);
}

#[test]
fn render_export_honors_out_dir() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("cards");
    punchcard(&dir)
        .args(["render", "cleanup", "--draft", "--export", "--out"])
        .arg(&out)
        .assert()
        .success();
    assert!(out.join("untitled_cleanup.xml").exists());
}

#[test]
fn render_json_output_has_expected_fields() {
    let dir = TempDir::new().unwrap();
    let output = punchcard(&dir)
        .args(["render", "testing", "--json", "--set", "test_target=parser"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["card_type"], "testing");
    assert_eq!(json["filename"], "untitled_testing.xml");
    assert_eq!(json["mime"], "application/xml");
    assert_eq!(json["copied"], false);
    assert!(json["exported_to"].is_null());
    assert!(json["xml"]
        .as_str()
        .unwrap()
        .contains("<test_target>parser</test_target>"));
}

#[test]
fn render_escape_flag_escapes_entered_text() {
    let dir = TempDir::new().unwrap();
    punchcard(&dir)
        .args(["render", "bug_fix", "--escape", "--set", "error_messages=a < b & c"])
        .args(MINIMAL_BUG)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<error_messages>a &lt; b &amp; c</error_messages>",
        ));
}

#[test]
fn render_copy_failure_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".punchcard")).unwrap();
    std::fs::write(
        dir.path().join(".punchcard/config.yaml"),
        "clipboard:\n  command: punchcard-no-such-clipboard-tool\n",
    )
    .unwrap();

    punchcard(&dir)
        .args(["render", "bug_fix", "--copy"])
        .args(MINIMAL_BUG)
        .assert()
        .success()
        .stdout(predicate::str::contains("<task_card type=\"bug_fix\""))
        .stderr(predicate::str::contains("not copied"));
}

// ---------------------------------------------------------------------------
// punchcard defaults
// ---------------------------------------------------------------------------

#[test]
fn defaults_is_stable_across_runs() {
    let dir = TempDir::new().unwrap();
    let first = punchcard(&dir)
        .args(["defaults", "security_audit"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = punchcard(&dir)
        .args(["defaults", "security_audit"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(first, second);
    let text = String::from_utf8(first).unwrap();
    assert!(text.contains("<audit_depth level=\"3\">Standard audit</audit_depth>"));
    assert!(text.contains("<output_path>punchcards/untitled.md</output_path>"));
}

#[test]
fn defaults_matches_draft_render_without_values() {
    let dir = TempDir::new().unwrap();
    let defaults = punchcard(&dir)
        .args(["defaults", "documentation"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let draft = punchcard(&dir)
        .args(["render", "documentation", "--draft"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(defaults, draft);
}
