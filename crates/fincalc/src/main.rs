mod batch;
mod cli;
mod commands;
mod logging;
mod sink;

use clap::Parser;

use crate::cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    commands::run(cli)
}
