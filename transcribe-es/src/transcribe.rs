use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use tracing::{debug, info, warn};

use crate::audio::AudioInput;
use crate::config::{ApiKey, Config};
use crate::error::TranscriptionError;
use crate::types::{ApiErrorBody, Transcript};

/// A speech-to-text backend.
#[allow(async_fn_in_trait)]
pub trait Transcriber {
    async fn transcribe(
        &self,
        audio: &AudioInput,
        language: &str,
    ) -> Result<Transcript, TranscriptionError>;
}

/// OpenAI `/audio/transcriptions` client.
pub struct OpenAiClient {
    http: reqwest::Client,
    url: String,
    api_key: ApiKey,
    model: String,
    organization: Option<String>,
    project: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: &Config, api_key: &ApiKey) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: config.transcription_url(),
            api_key: api_key.clone(),
            model: config.model.clone(),
            organization: config.organization.clone(),
            project: config.project.clone(),
        }
    }

    fn build_form(&self, audio: &AudioInput, language: &str) -> Result<Form, TranscriptionError> {
        let file = Part::bytes(audio.bytes.clone())
            .file_name(audio.file_name.clone())
            .mime_str(audio.mime_type())
            .map_err(|e| TranscriptionError::Network(format!("failed to build upload: {e}")))?;

        Ok(Form::new()
            .part("file", file)
            .text("model", self.model.clone())
            .text("language", language.to_string())
            .text("response_format", "json"))
    }
}

impl Transcriber for OpenAiClient {
    async fn transcribe(
        &self,
        audio: &AudioInput,
        language: &str,
    ) -> Result<Transcript, TranscriptionError> {
        let form = self.build_form(audio, language)?;

        info!(url = %self.url, model = %self.model, language, "sending transcription request");

        let mut request = self
            .http
            .post(&self.url)
            .bearer_auth(self.api_key.expose())
            .multipart(form);
        if let Some(org) = &self.organization {
            request = request.header("OpenAI-Organization", org);
        }
        if let Some(project) = &self.project {
            request = request.header("OpenAI-Project", project);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, body_len = body.len(), "transcription response received");

        if !status.is_success() {
            let message = ApiErrorBody::message_from(&body);
            warn!(%status, %message, "transcription request failed");
            return Err(classify(status, message));
        }

        let transcript: Transcript = serde_json::from_str(&body)
            .map_err(|e| TranscriptionError::Malformed(format!("{e}: {body}")))?;

        info!(chars = transcript.text.chars().count(), "transcription received");
        Ok(transcript)
    }
}

fn classify(status: StatusCode, message: String) -> TranscriptionError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TranscriptionError::Auth(message),
        StatusCode::TOO_MANY_REQUESTS => TranscriptionError::Quota(message),
        _ => TranscriptionError::Service {
            status: status.as_u16(),
            message,
        },
    }
}
