//! Narration pipeline and its event stream.

/// Progress events emitted while narrating.
pub mod events;
/// Sequential render-then-synthesize pipeline.
pub mod narrator;
