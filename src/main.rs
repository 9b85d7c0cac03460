use clap::Parser;
use std::process::ExitCode;

use pdf_finder_lib::cli::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    run(cli)
}
