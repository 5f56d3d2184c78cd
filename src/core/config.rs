use std::env;
use std::path::PathBuf;

use crate::cli::Args;
use crate::core::app;
use crate::core::error::TreeError;

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the tree is printed for (the working directory).
    pub root: PathBuf,
    /// Pattern file name looked up in every directory.
    pub pattern_file: &'static str,
    /// Print a `Directory tree for:` line before the tree.
    pub header: bool,
}

/// Load configuration. Fails only when the working directory cannot be resolved.
pub fn load(args: &Args) -> Result<Config, TreeError> {
    let root = env::current_dir().map_err(TreeError::WorkingDir)?;

    Ok(Config {
        root,
        pattern_file: app::PATTERN_FILE,
        header: args.header,
    })
}
