use crate::git::Git;
use crate::error::{LbranchError, Result};

/// What the environment checks found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preflight {
    /// git is installed and the repository has at least one commit.
    Ready,
    /// Inside a repository that has no commits yet.
    NoCommits,
}

/// Check, in order, that git is installed, that we are inside a work tree,
/// and that `HEAD` points at a commit.
pub fn preflight(git: &impl Git) -> Result<Preflight> {
    let version = git.version()?;
    log::debug!("using {}", version);

    if !git.is_inside_work_tree()? {
        return Err(LbranchError::NotARepository);
    }

    if !git.has_commits()? {
        return Ok(Preflight::NoCommits);
    }

    Ok(Preflight::Ready)
}

/// The reference to leave out of the history: the branch name, or the
/// short commit id when `HEAD` is detached.
pub fn current_reference(git: &impl Git) -> Result<String> {
    let current = git.current_branch_name()?;
    log::debug!("current reference: {}", current);
    Ok(current)
}
