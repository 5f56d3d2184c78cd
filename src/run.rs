//! Application run: logger init, index build, tree output.

use std::io::{self, BufWriter, Write};

use crate::cli::Args;
use crate::core::config::Config;
use crate::core::error::TreeError;
use crate::core::index::PatternIndex;
use crate::core::tree;

/// Initialize env_logger on stderr so stdout carries only the tree.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .target(env_logger::Target::Stderr)
    .try_init();
}

/// Build the pattern index for the configured root, then print the tree.
pub fn run(config: &Config) -> Result<(), TreeError> {
    let index = PatternIndex::build(&config.root, config.pattern_file)?;
    log::info!(
        "Built pattern index for {} ({} directories)",
        config.root.display(),
        index.len()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    tree::render(&config.root, &index, config.header, &mut out)?;
    out.flush()?;
    Ok(())
}
