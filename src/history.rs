//! Branch history extraction
//!
//! Turns `git reflog` text (newest entry first) into the ordered list of
//! distinct branches the user switched away from.

use std::collections::HashSet;

/// Phrase marking a branch switch in a reflog entry. Matched case-insensitively.
const CHECKOUT_MARKER: &str = "checkout: moving from";

/// A `checkout: moving from <source> to <destination>` reflog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutTransition<'a> {
    pub source: &'a str,
    pub destination: Option<&'a str>,
}

impl<'a> CheckoutTransition<'a> {
    /// Parse a single reflog line.
    ///
    /// Returns `None` for lines that are not checkout records, and for
    /// checkout records with nothing after the word `from`.
    pub fn parse(line: &'a str) -> Option<Self> {
        if !line.to_lowercase().contains(CHECKOUT_MARKER) {
            return None;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let from_idx = tokens.iter().position(|t| *t == "from")?;
        let source = *tokens.get(from_idx + 1)?;

        let destination = match tokens.get(from_idx + 2) {
            Some(&"to") => tokens.get(from_idx + 3).copied(),
            _ => None,
        };

        Some(Self {
            source,
            destination,
        })
    }
}

/// Distinct branches, most recently left first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchHistory {
    branches: Vec<String>,
    seen: HashSet<String>,
}

impl BranchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the history from reflog text, excluding `current`.
    ///
    /// With a `limit`, scanning stops as soon as that many branches are known.
    pub fn from_reflog(reflog: &str, current: &str, limit: Option<usize>) -> Self {
        let mut history = Self::new();
        let mut transitions = 0usize;

        for transition in reflog.lines().filter_map(CheckoutTransition::parse) {
            if limit.is_some_and(|limit| history.len() >= limit) {
                break;
            }
            transitions += 1;
            log::trace!(
                "checkout {} -> {}",
                transition.source,
                transition.destination.unwrap_or("?")
            );
            history.record(transition.source, current);
        }

        log::debug!(
            "scanned {} checkout transitions, kept {} branches",
            transitions,
            history.len()
        );
        history
    }

    /// Record a branch the user switched away from.
    ///
    /// Returns `false` when the name is skipped: empty, the current branch,
    /// a detached marker (`{...}`), or already recorded.
    pub fn record(&mut self, branch: &str, current: &str) -> bool {
        if branch.is_empty() || branch == current || branch.starts_with('{') {
            return false;
        }
        if !self.seen.insert(branch.to_string()) {
            return false;
        }
        self.branches.push(branch.to_string());
        true
    }

    /// The first `min(n, len)` branches.
    pub fn truncated(&self, n: usize) -> &[String] {
        &self.branches[..n.min(self.branches.len())]
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}
