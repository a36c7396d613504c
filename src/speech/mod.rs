/// Google Cloud Text-to-Speech implementation.
pub mod google;

use async_trait::async_trait;

/// Failure from the synthesis collaborator.
#[derive(Debug)]
pub enum SpeechError {
    /// Transport-level HTTP failure.
    Http(reqwest::Error),
    /// Non-success HTTP status from the synthesis endpoint.
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body, as far as it could be read.
        body: String,
    },
    /// The response payload could not be decoded into audio bytes.
    Decode(String),
    /// The synthesis call exceeded the configured deadline.
    Timeout(u64),
    /// Anything else.
    Message(String),
}

impl From<reqwest::Error> for SpeechError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<serde_json::Error> for SpeechError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

/// Result alias for collaborator calls.
pub type SpeechResult<T> = Result<T, SpeechError>;

/// Speech-synthesis collaborator seam.
///
/// Takes one rendered phrase and returns an opaque audio byte sequence in
/// the implementation's configured encoding. Implementations own their
/// credentials and transport; callers own retry and abort policy.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Synthesizes `text` into audio bytes.
    async fn synthesize(&self, text: &str) -> SpeechResult<Vec<u8>>;
}
