use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use transcribe_es::{Config, OpenAiClient};

#[derive(Parser)]
#[command(
    name = "transcribe-es",
    version,
    about = "Transcribe MP3 audio file to Spanish text using OpenAI"
)]
struct Cli {
    /// Path to the MP3 audio file to transcribe.
    mp3_file: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("transcribe_es=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load();

    let output = match transcribe(&cli.mp3_file, &config).await {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("Transcription saved to: {}", output.display());
}

async fn transcribe(input: &Path, config: &Config) -> transcribe_es::Result<PathBuf> {
    transcribe_es::run_with(input, config, |config, api_key| {
        println!("Processing audio file: {}", input.display());
        WithSpinner(OpenAiClient::new(config, api_key))
    })
    .await
}

/// Shows a spinner on stderr while the wrapped backend is working.
struct WithSpinner<T>(T);

impl<T: transcribe_es::Transcriber> transcribe_es::Transcriber for WithSpinner<T> {
    async fn transcribe(
        &self,
        audio: &transcribe_es::AudioInput,
        language: &str,
    ) -> Result<transcribe_es::Transcript, transcribe_es::TranscriptionError> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("valid template"),
        );
        spinner.set_message(format!("Transcribing {}", audio.file_name));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self.0.transcribe(audio, language).await;
        spinner.finish_and_clear();

        if result.is_ok() {
            println!("Transcription completed successfully.");
        }
        result
    }
}
