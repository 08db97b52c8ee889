mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::{FailAt, MockFileSystem};

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

use crate::error::TreeError;
use crate::models::FsEntry;

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Resolve `path` to an absolute, lexically normalised path.
    async fn absolute(&self, path: &Path) -> Result<PathBuf, TreeError>;

    /// List the immediate children of `dir`, in no particular order.
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>, TreeError>;
}

/// Drop `.` components and fold `..` into its parent without touching the disk.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = matches!(
                    normalized.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                );
                if !at_root {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
