use tokio::sync::broadcast;
use tokio::time::{Duration, timeout};
use tracing::debug;

use crate::{
    adif::render::{ParseError, render_record},
    rules::narration_rules,
    speech::{SpeechError, Synthesizer},
};

use super::events::NarrateEvent;

/// Failure while narrating a batch of records.
#[derive(Debug)]
pub enum NarrateError {
    /// A record failed to render.
    Parse(ParseError),
    /// The synthesis collaborator failed.
    Speech(SpeechError),
}

impl From<ParseError> for NarrateError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<SpeechError> for NarrateError {
    fn from(value: SpeechError) -> Self {
        Self::Speech(value)
    }
}

/// Narrator tuning knobs.
#[derive(Debug, Clone)]
pub struct NarratorConfig {
    /// Deadline for one synthesis call, in milliseconds.
    pub synth_timeout_ms: u64,
    /// Capacity of the progress event channel.
    pub event_capacity: usize,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            synth_timeout_ms: 30_000,
            event_capacity: 256,
        }
    }
}

/// Drives records through render → synthesize and concatenates the audio.
///
/// The core rendering logic takes no dependency on the collaborator; the
/// narrator owns the boxed handle and passes phrases across the seam one at
/// a time, strictly in record order.
pub struct Narrator {
    synth: Box<dyn Synthesizer>,
    config: NarratorConfig,
    events_tx: broadcast::Sender<NarrateEvent>,
}

impl Narrator {
    /// Builds a narrator around a synthesis collaborator.
    pub fn new(synth: Box<dyn Synthesizer>, config: NarratorConfig) -> Self {
        let (events_tx, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            synth,
            config,
            events_tx,
        }
    }

    /// Subscribes to progress events. Events are lossy; no subscriber is
    /// required for narration to proceed.
    pub fn subscribe(&self) -> broadcast::Receiver<NarrateEvent> {
        self.events_tx.subscribe()
    }

    /// Narrates `records` in order and returns the concatenated audio.
    ///
    /// The first render or synthesis failure aborts the batch; there is no
    /// partial-success mode.
    pub async fn narrate(&self, records: &[String]) -> Result<Vec<u8>, NarrateError> {
        let rules = narration_rules();
        let mut audio = Vec::new();

        for (index, record) in records.iter().enumerate() {
            let phrase = render_record(record, rules)?;
            let _ = self.events_tx.send(NarrateEvent::Rendered { index });
            debug!(target = "narrate", index, chars = phrase.len(), "rendered record");

            let fragment = timeout(
                Duration::from_millis(self.config.synth_timeout_ms),
                self.synth.synthesize(&phrase),
            )
            .await
            .map_err(|_| SpeechError::Timeout(self.config.synth_timeout_ms))??;

            let _ = self.events_tx.send(NarrateEvent::Synthesized {
                index,
                bytes: fragment.len(),
            });
            audio.extend_from_slice(&fragment);
        }

        let _ = self.events_tx.send(NarrateEvent::Finished {
            records: records.len(),
            bytes: audio.len(),
        });
        Ok(audio)
    }
}
