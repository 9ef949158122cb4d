//! `create-momo [name]`: shorthand for `momo create [name]`, suitable for
//! `pnpm create momo` / `npm create momo`.

use std::process::ExitCode;

use clap::Parser;

use momo_cli::cli::{Cli, CreateMomoCli};

fn main() -> ExitCode {
    momo_cli::start(|| CreateMomoCli::try_parse().map(Cli::from))
}
