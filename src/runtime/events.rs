//! Narration progress events.

/// Events emitted by the narrator while it works through a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrateEvent {
    /// A record was rendered into a phrase.
    Rendered {
        /// Zero-based record index within the batch.
        index: usize,
    },
    /// A phrase came back from the synthesis collaborator.
    Synthesized {
        /// Zero-based record index within the batch.
        index: usize,
        /// Audio fragment size in bytes.
        bytes: usize,
    },
    /// The whole batch finished.
    Finished {
        /// Number of records narrated.
        records: usize,
        /// Total audio size in bytes.
        bytes: usize,
    },
}
