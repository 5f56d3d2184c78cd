//! CLI definitions: argument parsing and help text.

use clap::{ArgAction, Parser};

const AFTER_HELP: &str = "\
The tree is printed for the current directory. Entries whose name matches a
glob listed in a .gitignore file of their parent directory, or of any
directory above it, are left out.

EXAMPLES:
  ignoretree                 Print the tree for the current directory
  ignoretree --header        Print a 'Directory tree for:' line first
  RUST_LOG=trace ignoretree  Log every exclusion decision to stderr
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Print the current directory as a tree, hiding .gitignore'd entries",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Print the absolute path of the directory before the tree
    #[arg(long)]
    pub header: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
