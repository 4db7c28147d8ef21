//! Transcribe a local MP3 file to Spanish and print where the text went.
//!
//! Usage: OPENAI_API_KEY=... cargo run --example basic -- path/to/audio.mp3

#[tokio::main]
async fn main() -> transcribe_es::Result<()> {
    let path = std::env::args()
        .nth(1)
        .expect("usage: basic <audio.mp3>");

    let config = transcribe_es::Config::load();
    let written = transcribe_es::run(&path, &config).await?;

    println!("{}", std::fs::read_to_string(&written).unwrap_or_default());
    eprintln!("saved to {}", written.display());

    Ok(())
}
