use colored::Color;
use std::io::IsTerminal;

use crate::config::ColorMode;

/// Theme colors for lbranch output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub header: Color,
    pub prompt: Color,
    pub success: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: Color::Blue,
            prompt: Color::Green,
            success: Color::Green,
            error: Color::Red,
        }
    }
}

/// Command-line color overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorFlags {
    pub no_color: bool,
    pub force_color: bool,
}

/// Everything automatic color detection looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorEnv {
    /// `NO_COLOR` is set.
    pub no_color: bool,
    /// `FORCE_COLOR` is set to something other than `0`.
    pub force_color: bool,
    /// `TERM=dumb`.
    pub dumb_term: bool,
    /// A Windows console without ANSI support.
    pub legacy_console: bool,
    pub stdout_is_terminal: bool,
}

impl ColorEnv {
    /// Sample the process environment.
    pub fn detect() -> Self {
        Self {
            no_color: std::env::var_os("NO_COLOR").is_some(),
            force_color: std::env::var_os("FORCE_COLOR").is_some_and(|v| v.as_os_str() != "0"),
            dumb_term: std::env::var_os("TERM").is_some_and(|v| v.as_os_str() == "dumb"),
            legacy_console: legacy_console(),
            stdout_is_terminal: std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(windows)]
fn legacy_console() -> bool {
    colored::control::set_virtual_terminal(true).is_err()
}

#[cfg(not(windows))]
fn legacy_console() -> bool {
    false
}

/// Decide whether to color output.
/// Flags beat environment, environment beats the config file, and
/// the config file beats terminal detection.
pub fn colors_enabled(flags: ColorFlags, env: ColorEnv, mode: ColorMode) -> bool {
    let (enabled, reason) = if flags.no_color {
        (false, "--no-color")
    } else if flags.force_color {
        (true, "--force-color")
    } else if env.no_color {
        (false, "NO_COLOR")
    } else if env.force_color {
        (true, "FORCE_COLOR")
    } else if mode == ColorMode::Never {
        (false, "config")
    } else if mode == ColorMode::Always {
        (true, "config")
    } else if env.dumb_term {
        (false, "TERM=dumb")
    } else if env.legacy_console {
        (false, "legacy console")
    } else {
        (env.stdout_is_terminal, "terminal detection")
    };

    log::debug!("color {} ({})", if enabled { "on" } else { "off" }, reason);
    enabled
}

/// Resolved, immutable color settings handed to everything that prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
    theme: Theme,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            theme: Theme::default(),
        }
    }

    /// Escape codes come straight from `Color` so output does not depend on
    /// colored's process-wide override.
    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text)
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, self.theme.header)
    }

    pub fn prompt(&self, text: &str) -> String {
        self.paint(text, self.theme.prompt)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, self.theme.success)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, self.theme.error)
    }
}
