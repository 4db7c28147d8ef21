use std::path::PathBuf;

/// All errors that can occur while turning an MP3 into a transcript file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File '{}' does not exist.", path.display())]
    FileNotFound { path: PathBuf },

    #[error("File '{}' is not an MP3 file.", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("OPENAI_API_KEY environment variable is not set.")]
    MissingCredential,

    #[error("failed to read audio file '{}': {source}", path.display())]
    ReadAudio {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error during transcription: {0}")]
    Transcription(#[from] TranscriptionError),

    #[error("failed to write transcript to '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of the remote transcription call. The CLI reports every variant
/// the same way.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("network error: {0}")]
    Network(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("quota exceeded: {0}")]
    Quota(String),

    #[error("service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for TranscriptionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            TranscriptionError::Malformed(e.to_string())
        } else {
            TranscriptionError::Network(e.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
