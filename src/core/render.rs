use std::io::{self, Write};

use crate::models::FsEntry;

use super::format::{connector, format_size};

/// Write one tree line: prefix, connector, name and, for files, the size.
pub fn write_entry<W: Write>(
    writer: &mut W,
    prefix: &str,
    entry: &FsEntry,
    is_last: bool,
) -> io::Result<()> {
    writer.write_all(prefix.as_bytes())?;
    writer.write_all(connector(is_last).as_bytes())?;
    writer.write_all(entry.name.as_encoded_bytes())?;

    if !entry.is_dir() {
        write!(writer, " {}", format_size(entry.size))?;
    }

    writer.write_all(b"\n")
}
