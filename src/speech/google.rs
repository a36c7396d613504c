//! REST client for the Google Cloud Text-to-Speech `text:synthesize` call.

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{AudioEncoding, VoiceGender};

use super::{SpeechError, SpeechResult, Synthesizer};

/// Configuration for [`GoogleSynthesizer`], loaded from environment variables.
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    /// Service base URL, e.g. `https://texttospeech.googleapis.com`.
    pub endpoint: String,
    /// BCP-47 language tag for the voice.
    pub language_code: String,
    /// Requested voice gender.
    pub voice_gender: VoiceGender,
    /// Requested audio encoding.
    pub audio_encoding: AudioEncoding,
    /// API key appended as the `key` query parameter.
    pub api_key: Option<String>,
    /// OAuth access token sent as a bearer credential.
    pub access_token: Option<String>,
    /// Per-request deadline in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: std::env::var("QSOVOICE_TTS_ENDPOINT")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "https://texttospeech.googleapis.com".to_string()),
            language_code: std::env::var("QSOVOICE_TTS_LANGUAGE")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "en-US".to_string()),
            voice_gender: VoiceGender::Neutral,
            audio_encoding: AudioEncoding::Mp3,
            api_key: std::env::var("GOOGLE_TTS_API_KEY").ok().filter(|s| !s.is_empty()),
            access_token: std::env::var("GOOGLE_TTS_ACCESS_TOKEN")
                .ok()
                .filter(|s| !s.is_empty()),
            request_timeout_ms: std::env::var("QSOVOICE_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(30_000),
        }
    }
}

/// Request body for `text:synthesize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeRequest {
    /// Text to synthesize.
    pub input: SynthesisInput,
    /// Voice selection parameters.
    pub voice: VoiceSelection,
    /// Output audio parameters.
    pub audio_config: AudioConfig,
}

/// Input wrapper of [`SynthesizeRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisInput {
    /// Plain text to speak.
    pub text: String,
}

/// Voice parameters of [`SynthesizeRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSelection {
    /// BCP-47 language tag.
    pub language_code: String,
    /// Requested gender.
    pub ssml_gender: VoiceGender,
}

/// Audio parameters of [`SynthesizeRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioConfig {
    /// Output encoding.
    pub audio_encoding: AudioEncoding,
}

impl SynthesizeRequest {
    /// Builds the request body for `text` under `cfg`.
    pub fn new(text: &str, cfg: &SpeechConfig) -> Self {
        Self {
            input: SynthesisInput {
                text: text.to_string(),
            },
            voice: VoiceSelection {
                language_code: cfg.language_code.clone(),
                ssml_gender: cfg.voice_gender,
            },
            audio_config: AudioConfig {
                audio_encoding: cfg.audio_encoding,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    #[serde(default)]
    audio_content: String,
}

/// Decodes the base64 `audioContent` payload of a synthesize response.
pub fn decode_audio_content(payload: &str) -> SpeechResult<Vec<u8>> {
    if payload.is_empty() {
        return Err(SpeechError::Decode("empty audioContent".to_string()));
    }
    BASE64
        .decode(payload)
        .map_err(|e| SpeechError::Decode(format!("audioContent base64: {e}")))
}

/// [`Synthesizer`] backed by the Google Cloud Text-to-Speech REST API.
#[derive(Debug)]
pub struct GoogleSynthesizer {
    http: Client,
    cfg: SpeechConfig,
}

impl GoogleSynthesizer {
    /// Builds a synthesizer from `cfg`.
    ///
    /// Fails when no credential is configured or the HTTP client cannot be
    /// constructed.
    pub fn new(cfg: SpeechConfig) -> SpeechResult<Self> {
        if cfg.api_key.is_none() && cfg.access_token.is_none() {
            return Err(SpeechError::Message(
                "no credential: set GOOGLE_TTS_API_KEY or GOOGLE_TTS_ACCESS_TOKEN".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_millis(cfg.request_timeout_ms))
            .build()
            .map_err(SpeechError::Http)?;
        Ok(Self { http, cfg })
    }

    /// Builds a synthesizer from [`SpeechConfig::default`].
    pub fn from_env() -> SpeechResult<Self> {
        Self::new(SpeechConfig::default())
    }

    fn synthesize_url(&self) -> String {
        format!(
            "{}/v1/text:synthesize",
            self.cfg.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl Synthesizer for GoogleSynthesizer {
    async fn synthesize(&self, text: &str) -> SpeechResult<Vec<u8>> {
        let url = self.synthesize_url();
        debug!(target = "speech", %url, chars = text.len(), "POST text:synthesize");

        let mut req = self
            .http
            .post(&url)
            .header("content-type", "application/json");
        if let Some(key) = &self.cfg.api_key {
            req = req.query(&[("key", key)]);
        }
        if let Some(token) = &self.cfg.access_token {
            req = req.bearer_auth(token);
        }

        let body = SynthesizeRequest::new(text, &self.cfg);
        let resp = req.json(&body).send().await?;

        if !resp.status().is_success() {
            let code = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SpeechError::Status { code, body });
        }

        let payload = resp.text().await?;
        let parsed: SynthesizeResponse = serde_json::from_str(&payload)?;
        decode_audio_content(&parsed.audio_content)
    }
}
