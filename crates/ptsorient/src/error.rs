use std::path::PathBuf;

use thiserror::Error;

/// File-level failures. Each one is fatal for the file being processed.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PtsError {
    #[error("error opening input file {}: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error creating output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error opening output file {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
