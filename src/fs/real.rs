use async_trait::async_trait;
use log::debug;
use std::ffi::OsString;
use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::TreeError;
use crate::models::{EntryKind, FsEntry};

use super::{FileSystem, normalize};

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn absolute(&self, path: &Path) -> Result<PathBuf, TreeError> {
        let absolute = std::path::absolute(path).map_err(|source| TreeError::PathResolution {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(normalize(&absolute))
    }

    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>, TreeError> {
        let dir = dir.to_path_buf();
        let join_path = dir.clone();
        task::spawn_blocking(move || {
            let read_error = |source| TreeError::DirectoryRead {
                path: dir.clone(),
                source,
            };

            let handle = std::fs::read_dir(&dir).map_err(|source| TreeError::DirectoryOpen {
                path: dir.clone(),
                source,
            })?;

            let mut entries = Vec::new();
            for entry in handle {
                let entry = entry.map_err(read_error)?;
                // Does not follow symlinks: a link is listed as a leaf.
                if let Some(fs_entry) = to_fs_entry(entry.file_name(), entry.metadata())
                    .map_err(read_error)?
                {
                    entries.push(fs_entry);
                }
            }
            Ok(entries)
        })
        .await
        .map_err(|err| TreeError::DirectoryRead {
            path: join_path,
            source: io::Error::other(err),
        })?
    }
}

/// `None` when the entry vanished between listing and lstat.
fn to_fs_entry(name: OsString, metadata: io::Result<Metadata>) -> io::Result<Option<FsEntry>> {
    let metadata = match metadata {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("{name:?} disappeared while listing, skipping");
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    let kind = if metadata.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    };

    Ok(Some(FsEntry {
        name,
        kind,
        size: metadata.len(),
    }))
}
