mod color;
mod commands;
mod config;
mod error;
mod git;
mod history;
mod prompt;
mod utils;

use std::io;
use std::process::ExitCode;

use clap::{ArgAction, Parser};

use color::{colors_enabled, ColorEnv, ColorFlags, Palette};
use commands::recent::{self, Request};
use commands::RecentArgs;
use config::{ColorMode, Settings};
use error::exit_status;
use git::GitCli;
use prompt::TerminalPrompt;

#[derive(Parser)]
#[command(
    name = "lbranch",
    version,
    about = "Show recently checked out Git branches in chronological order",
    after_help = "Example: lbranch -n 10 -c (shows the last 10 branches with option to choose one)",
    disable_version_flag = true
)]
struct Cli {
    #[command(flatten)]
    recent: RecentArgs,

    /// Disable colored output
    #[arg(long, conflicts_with = "force_color")]
    no_color: bool,

    /// Force colored output even when not writing to a terminal
    #[arg(long)]
    force_color: bool,

    /// Show version information and exit
    #[allow(dead_code)]
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

impl Cli {
    fn color_flags(&self) -> ColorFlags {
        ColorFlags {
            no_color: self.no_color,
            force_color: self.force_color,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(error::code::USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let settings = Settings::load();
    let mode = settings.as_ref().map(|s| s.color).unwrap_or(ColorMode::Auto);
    let palette = Palette::new(colors_enabled(cli.color_flags(), ColorEnv::detect(), mode));

    let result = settings.map_err(Into::into).and_then(|settings| {
        let request = Request {
            count: settings.count(cli.recent.number) as usize,
            choose: cli.recent.choose,
        };
        recent::run(
            request,
            &GitCli,
            &mut TerminalPrompt,
            &palette,
            &mut io::stdout().lock(),
        )
    });

    if let Err(e) = &result {
        eprintln!("{}", palette.error(&format!("Error: {}", e)));
    }
    exit_status(&result)
}
