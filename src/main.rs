use clap::Parser;
use rainfall_analyser::cli::{self, Args};
use std::process;
use tracing::Level;

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = cli::run(&args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
