use std::io::ErrorKind;
use std::process::{Command, ExitStatus, Output};

use crate::error::{one_line, LbranchError, Result};

/// The git queries and the one mutation lbranch needs.
pub trait Git {
    /// `git --version`. Fails with [`LbranchError::ToolMissing`] when git is not installed.
    fn version(&self) -> Result<String>;

    fn is_inside_work_tree(&self) -> Result<bool>;

    /// Whether `HEAD` resolves to a commit.
    fn has_commits(&self) -> Result<bool>;

    /// Short name of the checked-out branch, or the short commit id when detached.
    fn current_branch_name(&self) -> Result<String>;

    /// Full reflog, newest entry first.
    fn read_reflog(&self) -> Result<String>;

    /// Fails with [`LbranchError::CheckoutFailed`] carrying git's stderr, or
    /// [`LbranchError::CheckoutInterrupted`] when git was stopped by Ctrl-C.
    fn checkout(&self, branch: &str) -> Result<()>;
}

/// [`Git`] backed by the `git` executable on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl GitCli {
    /// Run git and hand back the raw output, whatever its exit status.
    fn output(&self, args: &[&str]) -> Result<Output> {
        let output = Command::new("git").args(args).output().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                LbranchError::ToolMissing
            } else {
                LbranchError::Io(e)
            }
        })?;
        log::debug!("git {} -> {}", args.join(" "), output.status);
        Ok(output)
    }

    /// Run git and capture trimmed stdout, failing on a non-zero exit.
    fn capture(&self, args: &[&str]) -> Result<String> {
        let output = self.output(args)?;
        if output.status.success() {
            Ok(stdout_of(&output))
        } else {
            Err(LbranchError::CommandFailed {
                command: args.join(" "),
                diagnostic: one_line(&String::from_utf8_lossy(&output.stderr)),
            })
        }
    }

    /// Run git and report only whether it succeeded.
    fn succeeds(&self, args: &[&str]) -> Result<bool> {
        Ok(self.output(args)?.status.success())
    }
}

/// Whether a child ended because of SIGINT, by signal or by the 128+2 convention.
fn interrupted(status: &ExitStatus) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if status.signal() == Some(2) {
            return true;
        }
    }
    status.code() == Some(130)
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

impl Git for GitCli {
    fn version(&self) -> Result<String> {
        self.capture(&["--version"])
    }

    fn is_inside_work_tree(&self) -> Result<bool> {
        let output = self.output(&["rev-parse", "--is-inside-work-tree"])?;
        Ok(output.status.success() && stdout_of(&output) == "true")
    }

    fn has_commits(&self) -> Result<bool> {
        self.succeeds(&["rev-parse", "--quiet", "--verify", "HEAD"])
    }

    fn current_branch_name(&self) -> Result<String> {
        let output = self.output(&["symbolic-ref", "--quiet", "--short", "HEAD"])?;
        if output.status.success() {
            return Ok(stdout_of(&output));
        }
        // Detached HEAD
        self.capture(&["rev-parse", "--short", "HEAD"])
    }

    fn read_reflog(&self) -> Result<String> {
        self.capture(&["reflog", "show", "--pretty=format:%gs"])
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        let output = self.output(&["checkout", branch])?;
        if output.status.success() {
            Ok(())
        } else if interrupted(&output.status) {
            Err(LbranchError::CheckoutInterrupted {
                branch: branch.to_string(),
            })
        } else {
            Err(LbranchError::CheckoutFailed {
                branch: branch.to_string(),
                diagnostic: one_line(&String::from_utf8_lossy(&output.stderr)),
            })
        }
    }
}
