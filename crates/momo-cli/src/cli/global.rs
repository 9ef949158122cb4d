//! Flags accepted by every momo command, before or after the subcommand.

use std::path::PathBuf;

use clap::Args;

const VERBOSE_HELP: &str = "How much momo reports about its own work on stderr:
    (none)  - warnings, e.g. a member manifest that could not be read
    -v      - which config file and command were used, plus error causes
    -vv     - discovery, placement and prompt details
    -vvv    - everything, including spans around each spawned command";

/// Global flags, flattened into both `momo` and `create-momo`.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Repeatable; see [`VERBOSE_HELP`].
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more about what momo is doing (-v, -vv, -vvv)",
        long_help = VERBOSE_HELP
    )]
    pub verbose: u8,

    /// Only errors reach the terminal. Package-manager and turbo output is
    /// not affected since they inherit the terminal.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Also switched on by a non-empty `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Print without ANSI colors"
    )]
    pub no_color: bool,

    /// Read and write this file instead of `./momo.config.json` or
    /// `~/.momo/config.json`. It does not have to exist yet.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Use this momo config file"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Decorated or plain output (auto picks by terminal)"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Whether error reports include their cause chain.
    pub fn verbose_errors(&self) -> bool {
        self.verbose > 0
    }
}

/// How messages, spinners and the scaffold preview are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Colors, markers and spinners.
    Human,
    /// No colors and no spinners; safe to pipe.
    Plain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn causes_shown_from_first_verbose_step() {
        let mut args = GlobalArgs::default();
        assert!(!args.verbose_errors());
        args.verbose = 1;
        assert!(args.verbose_errors());
    }
}
