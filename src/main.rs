use clap::Parser;
use season_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // clap exits non-zero on a missing or malformed argument list
    let args = Args::parse();

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the run summary has already been reported
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
