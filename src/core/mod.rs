pub mod format;
mod render;
mod walk;

pub use walk::{WalkOptions, walk};

use std::io::Write;
use std::path::Path;

use log::debug;

use crate::error::TreeError;
use crate::fs::FileSystem;
use crate::models::RenderContext;

/// Streams the tree below a root directory to an output sink.
pub struct TreeRenderer<F> {
    fs: F,
    options: WalkOptions,
}

impl<F: FileSystem> TreeRenderer<F> {
    pub fn new(fs: F, options: WalkOptions) -> Self {
        Self { fs, options }
    }

    /// Resolve `path` and print its subtree to `out`.
    ///
    /// Output is not buffered, so on error the lines written so far remain.
    pub async fn render<W: Write>(&self, out: &mut W, path: &Path) -> Result<(), TreeError> {
        let root = self.fs.absolute(path).await?;
        debug!("rendering {}", root.display());

        walk(&self.fs, out, &root, &self.options, RenderContext::root()).await?;
        out.flush().map_err(TreeError::Write)
    }
}
