use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::tempdir;

// Helper function to run the CLI command and capture output
fn run_command(args: &[&str]) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_devorbit"))
        .args(args)
        .output()
        .expect("Failed to execute devorbit command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let output_text = format!("{}\n{}", stdout, stderr);

    (output.status.success(), output_text)
}

// Helper function to run the CLI command with extra environment variables
fn run_command_with_env(args: &[&str], envs: &[(&str, &str)]) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_devorbit"))
        .args(args)
        .envs(envs.iter().copied())
        .output()
        .expect("Failed to execute devorbit command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let output_text = format!("{}\n{}", stdout, stderr);

    (output.status.success(), output_text)
}

// Helper function to run the swarm session with scripted stdin
fn run_swarm_script(args: &[&str], script: &str) -> (bool, String) {
    run_swarm_script_with_env(args, &[], script)
}

fn run_swarm_script_with_env(args: &[&str], envs: &[(&str, &str)], script: &str) -> (bool, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_devorbit"))
        .args(args)
        .envs(envs.iter().copied())
        .arg("swarm")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn devorbit swarm");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(script.as_bytes())
        .expect("Failed to write script");

    let output = child
        .wait_with_output()
        .expect("Failed to wait for devorbit swarm");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let output_text = format!("{}\n{}", stdout, stderr);

    (output.status.success(), output_text)
}

#[test]
fn test_help_command() {
    let (success, output) = run_command(&["--help"]);
    assert!(success, "Help command failed: {}", output);
    assert!(
        output.contains("DevOrbit - discover developers in your orbit"),
        "Help output doesn't contain expected text"
    );
    assert!(
        output.contains("USAGE:") || output.contains("Usage:") || output.contains("Commands:"),
        "Help output missing usage section"
    );
}

#[test]
fn test_skills_command() {
    let (success, output) = run_command(&["skills"]);
    assert!(success, "Skills command failed: {}", output);

    let stdout_skills: Vec<&str> = output.lines().take(6).collect();
    assert_eq!(
        stdout_skills,
        vec!["React", "TypeScript", "Node.js", "Python", "AI/ML", "TensorFlow"]
    );
    assert!(!output.contains("Security\n"));
}

#[test]
fn test_skills_limit() {
    let (success, output) = run_command(&["skills", "--limit", "1"]);
    assert!(success, "Skills command failed: {}", output);
    assert!(output.starts_with("React\n"));
    assert!(!output.contains("TypeScript"));
}

#[test]
fn test_devs_command() {
    let (success, output) = run_command(&["devs"]);
    assert!(success, "Devs command failed: {}", output);
    assert!(output.contains("Alex Chen"));
    assert!(output.contains("@sarahp"));
    assert!(output.contains("Marcus Johnson"));
}

#[test]
fn test_nav_active_item() {
    let (success, output) = run_command(&["nav", "--path", "/hyperlocal"]);
    assert!(success, "Nav command failed: {}", output);
    assert!(output.contains("[Hyperlocal]"));
    assert!(output.contains("/create-id"));
}

#[test]
fn test_nav_hidden_on_root() {
    let (success, output) = run_command(&["nav", "--path", "/"]);
    assert!(success, "Nav command failed: {}", output);
    assert!(output.contains("navigation hidden on /"));
    assert!(!output.contains("OrbitMatch"));
}

#[test]
fn test_nav_uses_configured_user() {
    let config_dir = tempdir().expect("Failed to create temp config directory");
    let config_path = config_dir.path().join("devorbit.toml");
    fs::write(&config_path, "[user]\ndev_id = \"orbit-99\"\n").expect("Failed to write config");

    let (success, output) = run_command(&[
        "-c",
        config_path.to_str().unwrap(),
        "nav",
        "--path",
        "/events",
    ]);
    assert!(success, "Nav command failed: {}", output);
    assert!(output.contains("/profile/orbit-99"));
    assert!(output.contains("[Events]"));
}

#[test]
fn test_missing_config_fails() {
    let (success, output) = run_command(&["-c", "/nonexistent/devorbit.toml", "skills"]);
    assert!(!success, "Expected failure, got: {}", output);
}

#[test]
fn test_match_command() {
    let (success, output) = run_command(&["match"]);
    assert!(success, "Match command failed: {}", output);
    assert!(output.contains("OrbitMatch"));
    assert!(output.contains("Skill Synergy"));
    assert!(output.contains("Start Matching"));
}

#[test]
fn test_data_file() {
    let data_dir = tempdir().expect("Failed to create temp data directory");
    let data_path = data_dir.path().join("devs.json");
    fs::write(
        &data_path,
        r#"[
            {"id": "a", "name": "Ada", "handle": "ada", "distanceKm": 0.3,
             "skills": ["Rust", "Haskell"], "status": "online", "badges": [], "openForCollab": true},
            {"id": "b", "name": "Bob", "handle": "bob", "distanceKm": 1.0,
             "skills": ["Go", "Rust"], "status": "away", "badges": [], "openForCollab": false}
        ]"#,
    )
    .expect("Failed to write data file");

    let (success, output) = run_command(&["--data", data_path.to_str().unwrap(), "skills"]);
    assert!(success, "Skills command failed: {}", output);
    let skills: Vec<&str> = output.lines().take(3).collect();
    assert_eq!(skills, vec!["Rust", "Haskell", "Go"]);
}

#[test]
fn test_data_file_duplicate_ids_rejected() {
    let data_dir = tempdir().expect("Failed to create temp data directory");
    let data_path = data_dir.path().join("devs.json");
    fs::write(
        &data_path,
        r#"[
            {"id": "a", "name": "Ada", "handle": "ada", "distanceKm": 0.3, "status": "online"},
            {"id": "a", "name": "Bob", "handle": "bob", "distanceKm": 1.0, "status": "busy"}
        ]"#,
    )
    .expect("Failed to write data file");

    let (success, output) = run_command(&["--data", data_path.to_str().unwrap(), "devs"]);
    assert!(!success, "Expected failure, got: {}", output);
    assert!(output.contains("Invalid developer data"));
}

#[test]
fn test_swarm_session_script() {
    let (success, output) = run_swarm_script(&[], "activate\nselect 2\ndismiss\nquit\n");
    assert!(success, "Swarm session failed: {}", output);
    assert!(output.contains("Trigger Swarm Activation"));
    assert!(output.contains("Hyperlocal Swarm Activated"));
    assert!(output.contains("Deactivate (30:00)") || output.contains("Deactivate (29:5"));
    assert!(output.contains("Sarah Park"));
    assert!(output.contains("Open for collab: No"));
}

#[test]
fn test_swarm_session_countdown() {
    let config_dir = tempdir().expect("Failed to create temp config directory");
    let config_path = config_dir.path().join("devorbit.toml");
    fs::write(
        &config_path,
        "[swarm]\nsession_seconds = 3\ntick_interval_ms = 20\n",
    )
    .expect("Failed to write config");

    let (success, output) = run_swarm_script(
        &["-c", config_path.to_str().unwrap()],
        "activate\nwait 0.5\nstatus\nquit\n",
    );
    assert!(success, "Swarm session failed: {}", output);
    assert!(output.contains("Active for 0 minutes."));
    assert!(output.contains("Deactivate (0:00)"));
    assert!(output.contains("Swarm active, 0:00 remaining"));
}

#[test]
fn test_swarm_unknown_input() {
    let (success, output) = run_swarm_script(&[], "select 42\nfly\n");
    assert!(success, "Swarm session failed: {}", output);
    assert!(output.contains("No developer with id 42 nearby"));
    assert!(output.contains("unknown command 'fly'"));
}

#[test]
fn test_swarm_wait_out_of_range() {
    let (success, output) = run_swarm_script(&[], "activate\nwait 1e300\nstatus\nquit\n");
    assert!(success, "Swarm session failed: {}", output);
    assert!(output.contains("invalid number of seconds"));
    assert!(output.contains("Swarm active"));
}

#[test]
fn test_env_overrides_session_length() {
    let (success, output) = run_swarm_script_with_env(
        &[],
        &[("DEVORBIT_SWARM__SESSION_SECONDS", "600")],
        "quit\n",
    );
    assert!(success, "Swarm session failed: {}", output);
    assert!(output.contains("Active for 10 minutes."));
}

#[test]
fn test_env_overrides_user() {
    let (success, output) = run_command_with_env(
        &["nav", "--path", "/events"],
        &[("DEVORBIT_USER__DEV_ID", "orbit-42")],
    );
    assert!(success, "Nav command failed: {}", output);
    assert!(output.contains("/profile/orbit-42"));
}

#[test]
fn test_env_overrides_config_file() {
    let config_dir = tempdir().expect("Failed to create temp config directory");
    let config_path = config_dir.path().join("devorbit.toml");
    fs::write(&config_path, "[swarm]\ntop_skill_limit = 1\n").expect("Failed to write config");

    let (success, output) = run_command_with_env(
        &["-c", config_path.to_str().unwrap(), "skills"],
        &[("DEVORBIT_SWARM__TOP_SKILL_LIMIT", "2")],
    );
    assert!(success, "Skills command failed: {}", output);
    assert!(output.starts_with("React\nTypeScript\n"));
    assert!(!output.contains("Node.js"));
}

#[test]
fn test_nav_follow_menu_link() {
    let (success, output) = run_command(&["nav", "--path", "/hyperlocal", "--menu", "--go", "events"]);
    assert!(success, "Nav command failed: {}", output);
    assert!(output.contains("[Events]"));
    assert!(!output.contains("[Hyperlocal]"));
    // menu closed after following the link
    assert!(!output.contains("/communities"));
}

#[test]
fn test_nav_follow_unknown_item() {
    let (success, output) = run_command(&["nav", "--go", "moon"]);
    assert!(!success, "Expected failure, got: {}", output);
    assert!(output.contains("unknown navigation item 'moon'"));
}
