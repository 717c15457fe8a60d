//! Wayback Fetch error types.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaybackError {
    #[error("error fetching data: {0}")]
    Network(#[from] reqwest::Error),
    #[error("error parsing JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("unexpected row length {len}: {row:?}")]
    RowShape { len: usize, row: Vec<String> },
    #[error("error writing results: {0}")]
    Output(#[from] io::Error),
    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WaybackError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, WaybackError>;
