//! # ignoretree
//!
//! Prints the current working directory as an indented tree, leaving out
//! entries matched by the glob patterns in `.gitignore` files found in the
//! entry's parent directory or any directory above it.

mod cli;
mod core;
mod run;

use clap::Parser;

use cli::Args;

fn main() {
    let args = Args::parse();
    run::init_logger(&args);

    let config = core::config::load(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    });

    if let Err(e) = run::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
