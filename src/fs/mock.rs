use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::TreeError;
use crate::models::FsEntry;

use super::{FileSystem, normalize};

/// Which step of listing a canned failure should report.
#[derive(Clone, Copy, Debug)]
pub enum FailAt {
    Open,
    Read,
}

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Err(FailAt, String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    cwd: Option<PathBuf>,
    responses: HashMap<PathBuf, Response>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    /// Working directory for relative roots. Without one, relative paths fail to resolve.
    pub fn set_cwd(&self, cwd: impl Into<PathBuf>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.cwd = Some(cwd.into());
    }

    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.responses.insert(dir.into(), Response::Ok(entries));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, at: FailAt, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .responses
            .insert(dir.into(), Response::Err(at, message.into()));
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn absolute(&self, path: &Path) -> Result<PathBuf, TreeError> {
        if path.is_absolute() {
            return Ok(normalize(path));
        }

        let inner = self.inner.lock().expect("mock fs lock");
        match inner.cwd.as_ref() {
            Some(cwd) => Ok(normalize(&cwd.join(path))),
            None => Err(TreeError::PathResolution {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no working directory"),
            }),
        }
    }

    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>, TreeError> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        let path = dir.to_path_buf();
        match inner.responses.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(FailAt::Open, message)) => Err(TreeError::DirectoryOpen {
                path,
                source: io::Error::other(message.clone()),
            }),
            Some(Response::Err(FailAt::Read, message)) => Err(TreeError::DirectoryRead {
                path,
                source: io::Error::other(message.clone()),
            }),
            None => Err(TreeError::DirectoryOpen {
                path,
                source: io::Error::new(io::ErrorKind::NotFound, "no mock response"),
            }),
        }
    }
}
