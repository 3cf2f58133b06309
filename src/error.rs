use std::process::ExitCode;

use thiserror::Error;

use crate::config::ConfigError;

/// sysexits(3) codes plus the shell convention for SIGINT.
pub mod code {
    pub const OK: u8 = 0;
    pub const FAILURE: u8 = 1;
    pub const USAGE: u8 = 64;
    pub const NO_INPUT: u8 = 66;
    pub const UNAVAILABLE: u8 = 69;
    pub const TEMP_FAIL: u8 = 75;
    pub const CONFIG: u8 = 78;
    pub const INTERRUPTED: u8 = 130;
}

#[derive(Error, Debug)]
pub enum LbranchError {
    #[error("git command not found. Please install git first.")]
    ToolMissing,

    #[error("Not a git repository. Please run this command from within a git repository.")]
    NotARepository,

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Failed to checkout branch: {diagnostic}")]
    CheckoutFailed { branch: String, diagnostic: String },

    #[error("Checkout of {branch} was interrupted")]
    CheckoutInterrupted { branch: String },

    #[error("Command failed: git {command}: {diagnostic}")]
    CommandFailed { command: String, diagnostic: String },

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LbranchError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ToolMissing => code::UNAVAILABLE,
            Self::NotARepository | Self::InvalidSelection(_) => code::USAGE,
            Self::CheckoutFailed { .. } => code::TEMP_FAIL,
            Self::CheckoutInterrupted { .. } => code::INTERRUPTED,
            Self::Config(_) => code::CONFIG,
            Self::CommandFailed { .. } | Self::Io(_) => code::FAILURE,
        }
    }
}

/// How a run ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// History printed (possibly empty), optionally followed by a checkout.
    Listed,
    /// The repository has no commits yet.
    NoCommits,
    /// The user interrupted the selection prompt.
    Cancelled,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Listed => code::OK,
            Self::NoCommits => code::NO_INPUT,
            Self::Cancelled => code::INTERRUPTED,
        }
    }
}

pub type Result<T> = std::result::Result<T, LbranchError>;

/// Map a finished run onto the process exit status.
pub fn exit_status(result: &Result<Outcome>) -> ExitCode {
    let code = match result {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => e.exit_code(),
    };
    ExitCode::from(code)
}

/// Collapse a multi-line git diagnostic onto one line.
pub fn one_line(diagnostic: &str) -> String {
    diagnostic
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
