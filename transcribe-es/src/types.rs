use serde::{Deserialize, Serialize};

/// Transcription result as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
}

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Full text, untouched.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Error envelope the OpenAI API uses for non-success responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    pub message: String,
}

impl ApiErrorBody {
    /// Pull the human-readable message out of an error body, falling back to
    /// the raw text when it is not the standard envelope.
    pub fn message_from(body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => parsed.error.message,
            Err(_) if body.trim().is_empty() => "no response body".into(),
            Err(_) => body.trim().to_string(),
        }
    }
}
