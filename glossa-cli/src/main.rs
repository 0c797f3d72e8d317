//! glossa command-line entry point

use std::process;

use clap::Parser;
use env_logger::Env;

use glossa_cli::cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = glossa_cli::run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` takes precedence
fn init_logging(cli: &Cli) {
    if cli.quiet {
        return;
    }
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level())).init();
}
