//! Error type shared by the index builder, the renderer, and the entry point.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors. A missing pattern file and an invalid glob are not errors.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot get current directory: {0}")]
    WorkingDir(#[source] io::Error),

    #[error("cannot walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("cannot read pattern file {}: {source}", path.display())]
    PatternFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    RootMetadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

impl TreeError {
    /// Process exit code: 1 setup, 2 walk or pattern file, 3 root stat or output.
    pub fn exit_code(&self) -> i32 {
        match self {
            TreeError::WorkingDir(_) => 1,
            TreeError::PatternFile { .. } => 2,
            TreeError::Walk(_) => 2,
            TreeError::RootMetadata { .. } | TreeError::Output(_) => 3,
        }
    }
}
