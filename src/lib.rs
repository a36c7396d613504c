//! ADIF contact-log narration: QSO record scanning, spoken-phrase rendering,
//! and speech-synthesis orchestration.
//!
//! # Examples
//!
//! Scanning and rendering a log line with [`adif::scan::scan_records`] and
//! [`adif::render::render_record`]:
//! ```
//! use qsovoice::{
//!     adif::{render::render_record, scan::scan_records},
//!     rules::narration_rules,
//! };
//!
//! let log = "\
//! some header line\n\
//! <QSO_DATE:8>20230115><TIME_ON:4>1230><BAND:3>20m><MODE:3>SSB><CALL:5>AB1CD>\n";
//!
//! let records = scan_records(log.as_bytes()).expect("scan");
//! assert_eq!(records.len(), 1);
//!
//! let phrase = render_record(&records[0], narration_rules()).expect("render");
//! assert_eq!(phrase, "time 1230 band 20 meters mode SSB station A B 1 C D ");
//! ```
//!
//! Narrating a full log against the Google synthesizer:
//! ```no_run
//! use qsovoice::{
//!     adif::scan::scan_records,
//!     runtime::narrator::{Narrator, NarratorConfig},
//!     speech::google::GoogleSynthesizer,
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let log = "<QSO_DATE:8>20230115><TIME_ON:4>1230><CALL:5>AB1CD>\n";
//! let records = scan_records(log.as_bytes()).expect("scan");
//!
//! let synth = GoogleSynthesizer::from_env().expect("synthesizer");
//! let narrator = Narrator::new(Box::new(synth), NarratorConfig::default());
//! let audio = narrator.narrate(&records).await.expect("narrate");
//! tokio::fs::write("output.mp3", &audio).await.expect("write");
//! # }
//! ```
#![deny(missing_docs)]

/// Record selection and TLV field rendering.
pub mod adif;
/// Fixed field-rendering rule table.
pub mod rules;
/// Narration pipeline and progress events.
pub mod runtime;
/// Speech-synthesis collaborator seam and Google implementation.
pub mod speech;
/// Shared voice and audio primitives.
pub mod types;
