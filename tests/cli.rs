use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("ecolar");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn json_stdout(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout is json")
}

#[test]
fn score_reports_excellent_tier() {
    let dir = TempDir::new().expect("temp dir");
    cmd(&dir)
        .args(["score", "--water", "150", "--energy", "10", "--gas", "2"])
        .assert()
        .success()
        .stdout(contains("Sustainability Score: 100/100 (Excellent)"))
        .stdout(contains("Sustainable consumption"));
}

#[test]
fn score_json_sanitizes_raw_input() {
    let dir = TempDir::new().expect("temp dir");
    let output = cmd(&dir)
        .args([
            "score", "--water", "250,0 L", "--energy", "18kWh", "--gas", "3,5", "--json",
        ])
        .output()
        .expect("run ecolar");

    assert!(output.status.success());
    let value = json_stdout(&output.stdout);
    assert_eq!(value["reading"]["water"], 250.0);
    assert_eq!(value["reading"]["gas"], 3.5);
    assert_eq!(value["total_score"], 50);
    assert_eq!(value["category"], "NeedsImprovement");
    assert_eq!(value["action_items"].as_array().map(Vec::len), Some(3));
}

#[test]
fn score_without_input_is_no_data() {
    let dir = TempDir::new().expect("temp dir");
    let output = cmd(&dir)
        .args(["score", "--water", "abc", "--json"])
        .output()
        .expect("run ecolar");

    assert!(output.status.success());
    let value = json_stdout(&output.stdout);
    assert_eq!(value["status"], "no_data");
    assert!(value.get("total_score").is_none());
}

#[test]
fn min_score_from_config_sets_exit_code() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(
        dir.path().join("ecolar.toml"),
        "[general]\nmin_score = 60\ncolor = false\n",
    )
    .expect("write config");

    cmd(&dir)
        .args(["score", "--water", "400", "--energy", "25", "--gas", "5"])
        .assert()
        .code(1)
        .stdout(contains("score 25 is below min_score 60"));
}

#[test]
fn missing_explicit_config_exits_with_error() {
    let dir = TempDir::new().expect("temp dir");
    cmd(&dir)
        .args(["score", "--water", "1", "--config", "nope.toml"])
        .assert()
        .code(2)
        .stderr(contains("config file not found"));
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().expect("temp dir");
    cmd(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("created"));

    let content = fs::read_to_string(dir.path().join("ecolar.toml")).expect("config written");
    assert!(content.contains("min_score = 0"));

    cmd(&dir)
        .arg("init")
        .assert()
        .code(2)
        .stderr(contains("refusing to overwrite"));
}

#[test]
fn tips_lists_saving_tips() {
    let dir = TempDir::new().expect("temp dir");
    cmd(&dir)
        .arg("tips")
        .assert()
        .success()
        .stdout(contains("pressure cooker"));
}

#[test]
fn watch_rescores_after_each_line() {
    let dir = TempDir::new().expect("temp dir");
    let output = cmd(&dir)
        .args(["watch", "--json"])
        .write_stdin("water 150,5\nenergy 18\nbogus 1\ngas 3.5\nreset\nquit\ngas 9\n")
        .output()
        .expect("run ecolar");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let reports: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();

    assert_eq!(reports.len(), 4);
    assert_eq!(reports[0]["total_score"], 92);
    assert_eq!(reports[1]["total_score"], 75);
    assert_eq!(reports[2]["total_score"], 58);
    assert_eq!(reports[3]["status"], "no_data");

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("unrecognized input"));
}

#[test]
fn watch_hides_summary_after_reset() {
    let dir = TempDir::new().expect("temp dir");
    let output = cmd(&dir)
        .arg("watch")
        .write_stdin("water 120\nreset\n")
        .output()
        .expect("run ecolar");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let (scored, cleared) = stdout
        .split_once("Awaiting data")
        .expect("reset shows the no-data badge");

    assert!(scored.contains("Sustainability Score: 100/100 (Excellent)"));
    assert!(scored.contains("TODAY"));
    assert!(cleared.contains("Add your consumption data"));
    assert!(!cleared.contains("TODAY"));
}
