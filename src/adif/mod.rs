//! ADIF record selection and tag-length-value field rendering.

/// Spoken-phrase rendering of one raw record.
pub mod render;
/// Line scanner that selects QSO records from a log stream.
pub mod scan;
