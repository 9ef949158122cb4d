//! `momo`: manage a turborepo monorepo from any directory inside it.

use std::process::ExitCode;

use clap::Parser;

use momo_cli::cli::Cli;

fn main() -> ExitCode {
    momo_cli::start(Cli::try_parse)
}
