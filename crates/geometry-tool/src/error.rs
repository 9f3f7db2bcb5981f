//! Error handling for the geometry-tool crate.

use std::{io, result};

use thiserror::Error;

/// Convenient result type for geometry-tool operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors, e.g. writing to stdout.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Failures persisting or restoring the geometry file.
    #[error(transparent)]
    Geometry(#[from] window_geometry::Error),
}
