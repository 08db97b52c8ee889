use std::io::Write;
use std::path::Path;

use log::{debug, trace};

use crate::error::TreeError;
use crate::fs::FileSystem;
use crate::models::{EntryKind, FsEntry, RenderContext};

use super::render::write_entry;

/// Configuration options for directory traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Whether files are listed alongside directories
    pub include_files: bool,
}

/// List `dir`, print each child and recurse into child directories.
///
/// Pre-order and depth-first: a line is written before its subtree, and each
/// sibling's subtree is finished before the next sibling starts. The first
/// error aborts the walk; lines already written stay written.
pub async fn walk<F: FileSystem, W: Write>(
    fs: &F,
    out: &mut W,
    dir: &Path,
    options: &WalkOptions,
    ctx: RenderContext,
) -> Result<(), TreeError> {
    let entries = fs.read_dir(dir).await?;
    debug!("listed {} ({} entries)", dir.display(), entries.len());

    let entries = filter_entries(sort_entries(entries), options);
    let prefix = ctx.level_prefix();

    let count = entries.len();
    for (index, entry) in entries.iter().enumerate() {
        let is_last = index + 1 == count;
        write_entry(out, &prefix, entry, is_last).map_err(TreeError::Write)?;

        if entry.is_dir() {
            Box::pin(walk(
                fs,
                out,
                &dir.join(&entry.name),
                options,
                ctx.descend(&prefix, is_last),
            ))
            .await?;
        }
    }

    Ok(())
}

/// Ascending by name, compared byte by byte.
fn sort_entries(mut entries: Vec<FsEntry>) -> Vec<FsEntry> {
    entries.sort_by(|a, b| a.name.as_encoded_bytes().cmp(b.name.as_encoded_bytes()));
    entries
}

fn filter_entries(entries: Vec<FsEntry>, options: &WalkOptions) -> Vec<FsEntry> {
    if options.include_files {
        return entries;
    }

    entries
        .into_iter()
        .filter(|entry| match entry.kind {
            EntryKind::Directory => true,
            EntryKind::File => {
                trace!("skipping file {:?}", entry.name);
                false
            }
        })
        .collect()
}
