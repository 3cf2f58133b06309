//! Reading the branch selection from the terminal.

use std::io;

use tokio::io::{AsyncBufReadExt, BufReader};

/// What came back from a prompt read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A line of input with its terminator stripped.
    Line(String),
    /// Ctrl-C arrived while waiting.
    Interrupted,
    /// Input closed before a line was read.
    Closed,
}

pub trait Prompt {
    fn read_line(&mut self) -> io::Result<Reply>;
}

/// Reads stdin while listening for Ctrl-C, so an interrupt becomes a
/// [`Reply::Interrupted`] instead of killing the process.
///
/// The handler stays installed for the rest of the process: a later Ctrl-C
/// only reaches child processes such as `git checkout`.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn read_line(&mut self) -> io::Result<Reply> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let reply = runtime.block_on(read_or_interrupt());

        // The stdin reader may still be parked on a blocking thread.
        runtime.shutdown_background();
        reply
    }
}

async fn read_or_interrupt() -> io::Result<Reply> {
    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut line = Vec::new();

    let interrupted = tokio::select! {
        read = stdin.read_until(b'\n', &mut line) => {
            if read? == 0 {
                return Ok(Reply::Closed);
            }
            false
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            true
        }
    };

    if interrupted {
        log::debug!("prompt interrupted");
        return Ok(Reply::Interrupted);
    }
    Ok(Reply::Line(decode_line(&line)))
}

/// Raw input as text, invalid UTF-8 replaced rather than rejected.
pub fn decode_line(bytes: &[u8]) -> String {
    strip_terminator(&String::from_utf8_lossy(bytes)).to_string()
}

pub fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
