use crate::common::TempRepo;

#[test]
fn recent_first_branch_lists_main() {
    let repo = TempRepo::new();
    repo.checkout_new_branch("feature");

    let (code, stdout, _) = repo.lbranch(&[]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "Last 5 branches:\n1) main\n");
}

#[test]
fn recent_excludes_current_branch() {
    let repo = TempRepo::new();
    repo.branch_with_commit("feature");
    repo.checkout("main");

    let (code, stdout, _) = repo.lbranch(&[]);

    assert_eq!(code, 0);
    assert!(stdout.contains("1) feature"), "Output: {}", stdout);
    assert!(!stdout.contains(") main"), "Output: {}", stdout);
}

#[test]
fn recent_orders_by_most_recent_switch() {
    let repo = TempRepo::new();

    repo.branch_with_commit("dev");
    repo.branch_with_commit("b1");
    repo.checkout("dev");
    repo.branch_with_commit("b2");
    repo.checkout("b1");
    repo.branch_with_commit("b3");
    repo.checkout("dev");
    repo.branch_with_commit("b4");

    let (code, stdout, _) = repo.lbranch(&[]);

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "Last 5 branches:\n1) dev\n2) b3\n3) b1\n4) b2\n5) main\n"
    );
}

#[test]
fn recent_number_flag_truncates() {
    let repo = TempRepo::new();
    for i in 1..=4 {
        repo.checkout_new_branch(&format!("branch{}", i));
        repo.checkout("main");
    }

    let (code, stdout, _) = repo.lbranch(&["-n", "2"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "Last 2 branches:\n1) branch4\n2) branch3\n");
}

#[test]
fn recent_header_shows_requested_count() {
    let repo = TempRepo::new();
    repo.checkout_new_branch("feature");

    let (code, stdout, _) = repo.lbranch(&["--number", "10"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "Last 10 branches:\n1) main\n");
}

#[test]
fn recent_no_switch_history_prints_header_only() {
    let repo = TempRepo::new();
    repo.commit("second");

    let (code, stdout, stderr) = repo.lbranch(&[]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "Last 5 branches:\n");
    assert!(stderr.is_empty());
}

#[test]
fn recent_detached_head_lists_branches() {
    let repo = TempRepo::new();
    repo.branch_with_commit("feature");
    repo.run_git(&["checkout", "--detach", "main"]);

    let (code, stdout, _) = repo.lbranch(&[]);

    assert_eq!(code, 0);
    assert!(stdout.contains("1) feature"), "Output: {}", stdout);
}

#[test]
fn recent_reads_count_from_config() {
    let repo = TempRepo::new();
    for i in 1..=3 {
        repo.checkout_new_branch(&format!("branch{}", i));
        repo.checkout("main");
    }
    let config = repo.path.join("lbranch.toml");
    std::fs::write(&config, "count = 1\n").unwrap();

    let output = repo
        .lbranch_cmd()
        .env("LBRANCH_CONFIG", &config)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Last 1 branches:\n1) branch3\n"
    );
}

#[test]
fn recent_invalid_config_fails() {
    let repo = TempRepo::new();
    let config = repo.path.join("lbranch.toml");
    std::fs::write(&config, "count = \"many\"\n").unwrap();

    let output = repo
        .lbranch_cmd()
        .env("LBRANCH_CONFIG", &config)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(78));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: Invalid config"));
}
