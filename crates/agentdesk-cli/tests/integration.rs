use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn desk(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("agentdesk").unwrap();
    cmd.current_dir(dir.path()).env("AGENTDESK_ROOT", dir.path());
    cmd
}

fn init_workspace(dir: &TempDir) {
    desk(dir).arg("init").assert().success();
}

/// Quick-create a client and return its id from the JSON output.
fn quick_client(dir: &TempDir, name: &str, industry: &str) -> String {
    let output = desk(dir)
        .args(["--json", "client", "quick", name, industry, "Austin, TX"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    value["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// agentdesk init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_directory_tree() {
    let dir = TempDir::new().unwrap();
    desk(&dir).arg("init").assert().success();

    assert!(dir.path().join(".agentdesk").is_dir());
    assert!(dir.path().join(".agentdesk/clients").is_dir());
    assert!(dir.path().join(".agentdesk/links").is_dir());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    desk(&dir).arg("init").assert().success();
    desk(&dir).arg("init").assert().success();
}

#[test]
fn commands_fail_before_init() {
    let dir = TempDir::new().unwrap();
    desk(&dir)
        .args(["client", "quick", "Joe's Plumbing", "Plumbing", "Austin, TX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("agentdesk init"));
}

// ---------------------------------------------------------------------------
// agentdesk client
// ---------------------------------------------------------------------------

#[test]
fn quick_create_is_demo_ready() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    let id = quick_client(&dir, "Joe's Plumbing", "Plumbing");

    desk(&dir)
        .args(["client", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("demo_ready"))
        .stdout(predicate::str::contains("Joe's Plumbing"));
}

#[test]
fn create_fills_profile_from_industry_defaults() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    let output = desk(&dir)
        .args([
            "--json",
            "client",
            "create",
            "Cool Air Co",
            "--industry",
            "HVAC",
            "--service-area",
            "Dallas, TX",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(value["status"], "draft");
    let services: Vec<&str> = value["services"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();
    assert!(services.contains(&"AC Repair"));
}

#[test]
fn list_shows_created_clients() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);
    quick_client(&dir, "Joe's Plumbing", "Plumbing");
    quick_client(&dir, "Cool Air Co", "HVAC");

    desk(&dir)
        .args(["client", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Joe's Plumbing"))
        .stdout(predicate::str::contains("Cool Air Co"));
}

#[test]
fn approve_requires_demo_ready() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    let output = desk(&dir)
        .args([
            "--json",
            "client",
            "create",
            "Draft Co",
            "--industry",
            "Other",
            "--service-area",
            "Austin, TX",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let id = value["id"].as_str().unwrap();

    desk(&dir)
        .args(["client", "approve", id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid transition"));
}

#[test]
fn full_lifecycle_to_production() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);
    let id = quick_client(&dir, "Joe's Plumbing", "Plumbing");

    desk(&dir)
        .args(["client", "approve", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("approved"));

    desk(&dir)
        .args(["client", "publish", &id, "--voice-id", "v123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("production"));

    let output = desk(&dir)
        .args(["--json", "client", "show", &id])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["status"], "production");
    assert_eq!(value["production_details"]["voice_id"], "v123");
    let prompt = value["artifacts"]["production_system_prompt"]
        .as_str()
        .unwrap();
    assert!(prompt.contains("v123"));
}

#[test]
fn edit_then_regenerate_keeps_approved_status() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);
    let id = quick_client(&dir, "Joe's Plumbing", "Plumbing");

    desk(&dir)
        .args(["client", "approve", &id])
        .assert()
        .success();

    desk(&dir)
        .args([
            "client",
            "edit",
            &id,
            "--name",
            "Joe's Plumbing & Drains",
            "--service",
            "Sewer Camera Inspection",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Joe's Plumbing & Drains"));

    desk(&dir)
        .args(["client", "generate", &id])
        .assert()
        .success();

    let output = desk(&dir)
        .args(["--json", "client", "show", &id])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    // Editing and regenerating never moves an approved client back down.
    assert_eq!(value["status"], "approved");
    assert_eq!(value["business_name"], "Joe's Plumbing & Drains");
    let prompt = value["artifacts"]["demo_system_prompt"].as_str().unwrap();
    assert!(prompt.contains("Joe's Plumbing & Drains"));
    assert!(prompt.contains("Sewer Camera Inspection"));
}

#[test]
fn edit_leaves_unnamed_fields_alone() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);
    let id = quick_client(&dir, "Joe's Plumbing", "Plumbing");

    let output = desk(&dir)
        .args(["--json", "client", "edit", &id, "--tone", "formal"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(value["tone"], "formal");
    assert_eq!(value["business_name"], "Joe's Plumbing");
    let services = value["services"].as_array().unwrap();
    assert!(!services.is_empty(), "services must be carried over");
}

#[test]
fn checklist_prints_for_approved_client() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);
    let id = quick_client(&dir, "Joe's Plumbing", "Plumbing");

    desk(&dir)
        .args(["client", "approve", &id])
        .assert()
        .success();

    desk(&dir)
        .args(["client", "checklist", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Production Install Checklist"))
        .stdout(predicate::str::contains("Joe's Plumbing"));
}

#[test]
fn checklist_rejects_unapproved_client() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);
    let id = quick_client(&dir, "Joe's Plumbing", "Plumbing");

    desk(&dir)
        .args(["client", "checklist", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("approved"));
}

#[test]
fn show_draft_reports_no_artifacts() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    let output = desk(&dir)
        .args([
            "--json",
            "client",
            "create",
            "Draft Co",
            "--industry",
            "Other",
            "--service-area",
            "Austin, TX",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let id = value["id"].as_str().unwrap();

    desk(&dir)
        .args(["client", "show", id])
        .assert()
        .success()
        .stdout(predicate::str::contains("(none generated)"));
}

#[test]
fn publish_requires_approval() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);
    let id = quick_client(&dir, "Joe's Plumbing", "Plumbing");

    desk(&dir)
        .args(["client", "publish", &id, "--voice-id", "v123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("approved"));
}

#[test]
fn delete_with_purge_removes_links() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);
    let id = quick_client(&dir, "Joe's Plumbing", "Plumbing");

    desk(&dir)
        .args(["link", "create", &id])
        .assert()
        .success();

    desk(&dir)
        .args(["client", "delete", &id, "--purge-links"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Purged 1"));

    desk(&dir)
        .args(["link", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No demo links"));
}

#[test]
fn industries_lists_builtin_defaults() {
    let dir = TempDir::new().unwrap();
    desk(&dir)
        .arg("industries")
        .assert()
        .success()
        .stdout(predicate::str::contains("HVAC"))
        .stdout(predicate::str::contains("Plumbing"));
}

// ---------------------------------------------------------------------------
// agentdesk link
// ---------------------------------------------------------------------------

#[test]
fn link_create_and_resolve() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);
    let id = quick_client(&dir, "Joe's Plumbing", "Plumbing");

    let output = desk(&dir)
        .args(["--json", "link", "create", &id])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let link: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let slug = link["slug"].as_str().unwrap();
    assert!(slug.starts_with("joes-plumbing-"));

    desk(&dir)
        .args(["link", "resolve", slug])
        .assert()
        .success()
        .stdout(predicate::str::contains("Joe's Plumbing"));

    // Resolving bumps the usage counter.
    let output = desk(&dir)
        .args(["--json", "link", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let links: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(links[0]["usage_count"], 1);
}

#[test]
fn deactivated_link_does_not_resolve() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);
    let id = quick_client(&dir, "Joe's Plumbing", "Plumbing");

    let output = desk(&dir)
        .args(["--json", "link", "create", &id])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let link: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let slug = link["slug"].as_str().unwrap().to_string();
    let link_id = link["id"].as_str().unwrap().to_string();

    desk(&dir)
        .args(["link", "deactivate", &link_id])
        .assert()
        .success();

    desk(&dir)
        .args(["link", "resolve", &slug])
        .assert()
        .failure()
        .stderr(predicate::str::contains("deactivated"));
}

#[test]
fn unknown_slug_fails_with_not_found() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    desk(&dir)
        .args(["link", "resolve", "no-such-demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// ---------------------------------------------------------------------------
// agentdesk export
// ---------------------------------------------------------------------------

#[test]
fn export_writes_bundle_files() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);
    let id = quick_client(&dir, "Joe's Plumbing", "Plumbing");

    let out = dir.path().join("bundle");
    desk(&dir)
        .args(["export", &id, "--out", out.to_str().unwrap()])
        .assert()
        .success();

    assert!(out.join("demo_config.json").exists());
    assert!(out.join("demo_system_prompt.txt").exists());
    assert!(out.join("client_test_instructions.txt").exists());
    assert!(!out.join("production_checklist.md").exists());
}
