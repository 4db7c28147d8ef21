use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};

/// Sibling path with the extension swapped for `.txt`.
///
/// `archive/note.MP3` becomes `archive/note.txt`; the stem keeps its case.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("txt")
}

/// Write `text` to `path`, replacing whatever was there.
///
/// Not atomic: a crash mid-write can leave a truncated file behind.
pub fn write_transcript(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = text.len(), "transcript written");
    Ok(())
}
