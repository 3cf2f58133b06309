use tempfile::TempDir;

use crate::common::{lbranch_in, TempRepo};

#[test]
fn no_commits_is_reported_softly() {
    let repo = TempRepo::empty();
    repo.checkout_new_branch("empty-branch");

    let (code, stdout, stderr) = repo.lbranch(&[]);

    assert_eq!(code, 66);
    assert_eq!(
        stdout,
        "No branch history found - repository has no commits yet\n"
    );
    assert!(stderr.is_empty());
}

#[test]
fn outside_repository_fails() {
    let dir = TempDir::new().unwrap();
    let ceiling = dir.path().parent().unwrap().to_path_buf();

    let output = lbranch_in(dir.path())
        .env("GIT_CEILING_DIRECTORIES", ceiling)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(64));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Error: Not a git repository. Please run this command from within a git repository.\n"
    );
}

#[test]
fn missing_git_is_unavailable() {
    let repo = TempRepo::new();
    let empty_path = TempDir::new().unwrap();

    let output = repo
        .lbranch_cmd()
        .env("PATH", empty_path.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(69));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Error: git command not found. Please install git first.\n"
    );
}

#[test]
fn no_color_env_disables_escapes() {
    let repo = TempRepo::new();
    repo.checkout_new_branch("feature");

    let output = repo
        .lbranch_cmd()
        .env("NO_COLOR", "1")
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains('\x1b'));
    assert!(stdout.contains("Last 5 branches:"));
}

#[test]
fn force_color_flag_colors_header() {
    let repo = TempRepo::new();
    repo.checkout_new_branch("feature");

    let (code, stdout, _) = repo.lbranch(&["--force-color"]);

    assert_eq!(code, 0);
    assert!(stdout.starts_with("\x1b[34mLast 5 branches:\x1b[0m\n"), "Output: {:?}", stdout);
    assert!(stdout.contains("1) main\n"));
}

#[test]
fn force_color_env_colors_errors() {
    let dir = TempDir::new().unwrap();
    let ceiling = dir.path().parent().unwrap().to_path_buf();

    let output = lbranch_in(dir.path())
        .env("GIT_CEILING_DIRECTORIES", ceiling)
        .env("FORCE_COLOR", "1")
        .output()
        .unwrap();

    assert!(String::from_utf8_lossy(&output.stderr).starts_with("\x1b[31mError: "));
}

#[test]
fn no_color_flag_beats_force_color_env() {
    let repo = TempRepo::new();
    repo.checkout_new_branch("feature");

    let output = repo
        .lbranch_cmd()
        .arg("--no-color")
        .env("FORCE_COLOR", "1")
        .output()
        .unwrap();

    assert!(!String::from_utf8_lossy(&output.stdout).contains('\x1b'));
}
