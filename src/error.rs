use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Every traversal failure is fatal; the first one aborts the walk.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot resolve path {}: {source}", path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot open directory {}: {source}", path.display())]
    DirectoryOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write output: {0}")]
    Write(#[source] io::Error),
}

impl TreeError {
    /// Path that triggered the failure, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            TreeError::PathResolution { path, .. }
            | TreeError::DirectoryOpen { path, .. }
            | TreeError::DirectoryRead { path, .. } => Some(path.as_path()),
            TreeError::Write(_) => None,
        }
    }
}

/// Malformed command line.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct UsageError(#[from] pub clap::Error);
