//! MP3 in, Spanish transcript out.
//!
//! **transcribe-es** validates a local MP3 file, uploads it to the OpenAI
//! transcription endpoint (`whisper-1`, language `es`) and writes the returned
//! text next to the input as `<stem>.txt`.
//!
//! # Quick start
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> transcribe_es::Result<()> {
//! let config = transcribe_es::Config::load();
//! let written = transcribe_es::run("entrevista.mp3", &config).await?;
//! println!("{}", written.display());
//! # Ok(())
//! # }
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod output;
pub mod transcribe;
pub mod types;

pub use audio::AudioInput;
pub use config::{ApiKey, Config};
pub use error::{Error, Result, TranscriptionError};
pub use transcribe::{OpenAiClient, Transcriber};
pub use types::Transcript;

use std::path::{Path, PathBuf};

use tracing::info;

/// Transcribe `input` with the OpenAI client and write `<stem>.txt`.
/// Returns the path that was written.
pub async fn run(input: impl AsRef<Path>, config: &Config) -> Result<PathBuf> {
    run_with(input, config, OpenAiClient::new).await
}

/// Same pipeline as [`run`], with the backend built by `connect` once the
/// credential has been checked.
///
/// Order is fixed: existence, extension, credential, upload, write. Nothing
/// touches the network or the output file until every check has passed.
pub async fn run_with<T, F>(input: impl AsRef<Path>, config: &Config, connect: F) -> Result<PathBuf>
where
    T: Transcriber,
    F: FnOnce(&Config, &ApiKey) -> T,
{
    let input = input.as_ref();

    audio::validate(input)?;
    info!(path = %input.display(), "input validated");

    let api_key = config.require_api_key()?;
    let transcriber = connect(config, api_key);

    let audio = audio::load_audio(input).await?;
    let transcript = transcriber.transcribe(&audio, &config.language).await?;

    let output = output::output_path(input);
    output::write_transcript(&output, transcript.text())?;

    Ok(output)
}
