mod context;
mod entry;

pub use context::RenderContext;
pub use entry::{EntryKind, FsEntry};
