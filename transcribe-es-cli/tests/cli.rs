//! Drives the built `transcribe-es` binary end to end.
//!
//! Every run happens inside a scratch directory with the OpenAI variables
//! cleared, so neither the developer's environment nor a stray `.env` leaks in.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transcribe_es(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_transcribe-es"));
    cmd.current_dir(dir)
        .args(args)
        .env_remove("OPENAI_API_KEY")
        .env_remove("OPENAI_BASE_URL")
        .env_remove("OPENAI_ORG_ID")
        .env_remove("OPENAI_PROJECT_ID")
        .env_remove("RUST_LOG");
    for (k, v) in env {
        cmd.env(k, v);
    }
    cmd.output().expect("failed to run transcribe-es")
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn test_missing_argument_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let out = transcribe_es(dir.path(), &[], &[]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("Usage"));
}

#[test]
fn test_nonexistent_file_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let out = transcribe_es(dir.path(), &["nope.mp3"], &[("OPENAI_API_KEY", "sk-test")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("File 'nope.mp3' does not exist."));
}

#[test]
fn test_wrong_extension_exits_1_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("clip.wav"), b"RIFF").unwrap();

    let out = transcribe_es(dir.path(), &["clip.wav"], &[("OPENAI_API_KEY", "sk-test")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("is not an MP3 file"));
    assert!(!dir.path().join("clip.txt").exists());
}

#[test]
fn test_missing_key_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("clip.mp3"), b"ID3").unwrap();

    let out = transcribe_es(dir.path(), &["clip.mp3"], &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("OPENAI_API_KEY"));
    assert!(!dir.path().join("clip.txt").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_success_writes_transcript() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "Hola desde el servidor."})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Saludo.MP3"), b"ID3 fake").unwrap();
    let base_url = format!("{}/v1", server.uri());

    let out = transcribe_es(
        dir.path(),
        &["Saludo.MP3"],
        &[("OPENAI_API_KEY", "sk-test"), ("OPENAI_BASE_URL", &base_url)],
    );
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert_eq!(
        fs::read_to_string(dir.path().join("Saludo.txt")).unwrap(),
        "Hola desde el servidor."
    );
    let stdout = stdout(&out);
    assert!(stdout.contains("Processing audio file: Saludo.MP3"));
    assert!(stdout.contains("Transcription completed successfully."));
    assert!(stdout.contains("Transcription saved to: Saludo.txt"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_key_from_dotenv_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "desde .env"})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("clip.mp3"), b"ID3 fake").unwrap();
    fs::write(
        dir.path().join(".env"),
        format!("OPENAI_API_KEY=sk-from-dotenv\nOPENAI_BASE_URL={}/v1\n", server.uri()),
    )
    .unwrap();

    let out = transcribe_es(dir.path(), &["clip.mp3"], &[]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert_eq!(
        fs::read_to_string(dir.path().join("clip.txt")).unwrap(),
        "desde .env"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_service_error_exits_1_and_keeps_old_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"message": "The server had an error while processing your request."}
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("clip.mp3"), b"ID3 fake").unwrap();
    fs::write(dir.path().join("clip.txt"), "previous").unwrap();
    let base_url = format!("{}/v1", server.uri());

    let out = transcribe_es(
        dir.path(),
        &["clip.mp3"],
        &[("OPENAI_API_KEY", "sk-test"), ("OPENAI_BASE_URL", &base_url)],
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Error during transcription"));
    assert!(stderr(&out).contains("The server had an error"));
    assert_eq!(
        fs::read_to_string(dir.path().join("clip.txt")).unwrap(),
        "previous"
    );
}
