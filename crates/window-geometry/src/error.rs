use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Convenient result type for the window-geometry crate.
pub type Result<T> = StdResult<T, Error>;

/// Errors raised while persisting or restoring window geometry.
///
/// None of these are fatal: callers decide whether to carry on with default
/// geometry.
#[derive(Debug, Error)]
pub enum Error {
    /// The geometry file could not be opened or created.
    #[error("cannot open window geometry file {}: {source}", path.display())]
    Open {
        /// Path that was being opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Storing to the geometry file failed after it was opened.
    #[error("cannot store window geometry in {}: {source}", path.display())]
    Store {
        /// File being written.
        path: PathBuf,
        /// What went wrong while encoding or writing.
        #[source]
        source: Box<Error>,
    },

    /// Restoring from the geometry file failed after it was opened.
    #[error("cannot restore window geometry from {}: {source}", path.display())]
    Restore {
        /// File being read.
        path: PathBuf,
        /// What went wrong while reading or decoding.
        #[source]
        source: Box<Error>,
    },

    /// Reading the encoded payload failed.
    #[error("cannot read window geometry: {0}")]
    Read(#[source] io::Error),

    /// Writing the encoded payload failed.
    #[error("cannot write window geometry: {0}")]
    Write(#[source] io::Error),

    /// The writer accepted only part of the encoded payload.
    #[error("could only write {written} of {expected} bytes")]
    ShortWrite {
        /// Bytes accepted by the writer.
        written: usize,
        /// Size of the encoded payload.
        expected: usize,
    },

    /// Serializing the window map failed.
    #[error("cannot encode window geometry: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    /// The payload is not a valid encoded window map.
    #[error("cannot decode window geometry: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}

impl Error {
    /// The underlying failure, looking through the path context added by
    /// [`Registry::store`](crate::Registry::store) and
    /// [`Registry::restore`](crate::Registry::restore).
    pub fn root(&self) -> &Self {
        match self {
            Self::Store { source, .. } | Self::Restore { source, .. } => source.root(),
            other => other,
        }
    }
}
