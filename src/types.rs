//! Shared voice-selection and audio-format primitives.

use serde::{Deserialize, Serialize};

/// Voice gender requested from the synthesis collaborator.
///
/// Serialized with the wire names of the synthesis API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoiceGender {
    /// No gender preference.
    Neutral,
    /// Male voice.
    Male,
    /// Female voice.
    Female,
}

/// Audio container/codec requested from the synthesis collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    /// MPEG-1 layer 3.
    Mp3,
    /// Opus in an Ogg container.
    OggOpus,
    /// Uncompressed 16-bit PCM.
    Linear16,
}
