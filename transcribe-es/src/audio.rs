use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};

const MP3_SUFFIX: &[u8] = b".mp3";
const MP3_MIME: &str = "audio/mpeg";

/// An MP3 file read into memory, ready to upload.
#[derive(Debug, Clone)]
pub struct AudioInput {
    pub path: PathBuf,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl AudioInput {
    pub fn mime_type(&self) -> &'static str {
        MP3_MIME
    }
}

/// Fail with `FileNotFound` unless something exists at `path`.
pub fn validate_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Fail with `UnsupportedFormat` unless the path text ends in `.mp3`,
/// ignoring ASCII case. The file content is never inspected.
pub fn validate_extension(path: &Path) -> Result<()> {
    let bytes = path.as_os_str().as_encoded_bytes();
    let is_mp3 = bytes.len() >= MP3_SUFFIX.len()
        && bytes[bytes.len() - MP3_SUFFIX.len()..].eq_ignore_ascii_case(MP3_SUFFIX);

    if is_mp3 {
        Ok(())
    } else {
        Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }
}

/// Existence first, then extension.
pub fn validate(path: &Path) -> Result<()> {
    validate_exists(path)?;
    validate_extension(path)
}

/// Read a validated MP3 file into memory.
pub async fn load_audio(path: &Path) -> Result<AudioInput> {
    info!(path = %path.display(), "loading audio");

    let bytes = tokio::fs::read(path).await.map_err(|source| Error::ReadAudio {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| "audio.mp3".into());

    debug!(bytes = bytes.len(), %file_name, "audio loaded");

    Ok(AudioInput {
        path: path.to_path_buf(),
        file_name,
        bytes,
    })
}
