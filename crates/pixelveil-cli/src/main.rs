use clap::Parser;
use log::error;

mod cli;
mod commands;
mod error;

pub use error::{CliError, CliResult};

use cli::{CliArgs, Commands};

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    if let Err(e) = run(args) {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> CliResult<()> {
    let options = args.codec_options()?;

    match args.command {
        Commands::Hide(cmd) => cmd.run(options),
        Commands::Unveil(cmd) => cmd.run(options),
        Commands::Analyze(cmd) => cmd.run(options),
        Commands::Capacity(cmd) => cmd.run(options),
    }
}
