use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordFreqError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write report: {0}")]
    Write(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, WordFreqError>;
