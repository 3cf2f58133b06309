use std::io::Write;

use clap::Args;

use crate::color::Palette;
use crate::error::{LbranchError, Outcome, Result};
use crate::git::Git;
use crate::history::BranchHistory;
use crate::prompt::{Prompt, Reply};
use crate::utils::{current_reference, preflight, Preflight};

pub const NO_HISTORY_MESSAGE: &str = "No branch history found - repository has no commits yet";

#[derive(Args, Debug, Clone, Default)]
pub struct RecentArgs {
    /// Number of branches to display (default: 5)
    #[arg(
        short = 'n',
        long = "number",
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
        allow_negative_numbers = true
    )]
    pub number: Option<u32>,

    /// Enter interactive mode to checkout a listed branch
    #[arg(short, long)]
    pub choose: bool,
}

/// A resolved request: how many branches to show and whether to prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub count: usize,
    pub choose: bool,
}

/// List recently checked-out branches and optionally switch to one.
pub fn run(
    request: Request,
    git: &impl Git,
    prompt: &mut impl Prompt,
    palette: &Palette,
    out: &mut impl Write,
) -> Result<Outcome> {
    if preflight(git)? == Preflight::NoCommits {
        writeln!(out, "{}", palette.header(NO_HISTORY_MESSAGE))?;
        return Ok(Outcome::NoCommits);
    }

    let current = current_reference(git)?;
    let reflog = git.read_reflog()?;
    let history = BranchHistory::from_reflog(&reflog, &current, Some(request.count));
    let shown = history.truncated(request.count);

    print_history(out, palette, request.count, shown)?;

    if !request.choose || history.is_empty() {
        return Ok(Outcome::Listed);
    }
    choose(shown, git, prompt, palette, out)
}

/// Header echoes the requested count even when fewer branches exist.
fn print_history(
    out: &mut impl Write,
    palette: &Palette,
    requested: usize,
    branches: &[String],
) -> Result<()> {
    writeln!(out, "{}", palette.header(&format!("Last {} branches:", requested)))?;
    for (i, branch) in branches.iter().enumerate() {
        writeln!(out, "{}) {}", i + 1, branch)?;
    }
    Ok(())
}

fn choose(
    branches: &[String],
    git: &impl Git,
    prompt: &mut impl Prompt,
    palette: &Palette,
    out: &mut impl Write,
) -> Result<Outcome> {
    let question = format!("Enter branch number to checkout (1-{}):", branches.len());
    writeln!(out)?;
    writeln!(out, "{}", palette.prompt(&question))?;
    out.flush()?;

    let input = match prompt.read_line()? {
        Reply::Line(line) => line,
        Reply::Closed => String::new(),
        Reply::Interrupted => return cancelled(out),
    };

    let index = parse_selection(&input, branches.len())
        .ok_or_else(|| LbranchError::InvalidSelection(input.clone()))?;
    let branch = &branches[index - 1];

    writeln!(out)?;
    writeln!(out, "Checking out: {}", branch)?;
    out.flush()?;

    match git.checkout(branch) {
        Err(LbranchError::CheckoutInterrupted { .. }) => return cancelled(out),
        result => result?,
    }
    writeln!(
        out,
        "{}",
        palette.success(&format!("Successfully checked out {}", branch))
    )?;
    Ok(Outcome::Listed)
}

fn cancelled(out: &mut impl Write) -> Result<Outcome> {
    writeln!(out)?;
    writeln!(out, "Operation cancelled.")?;
    Ok(Outcome::Cancelled)
}

/// A 1-based selection: ASCII digits only, within `1..=max`.
pub fn parse_selection(input: &str, max: usize) -> Option<usize> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: usize = input.parse().ok()?;
    (1..=max).contains(&n).then_some(n)
}
