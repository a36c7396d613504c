//! The fixed, ordered field-rendering table.

/// Describes how one recognized ADIF field is located, decoded, and spoken.
///
/// The table of rules is read-only configuration; its order fixes the order
/// of fields in the rendered phrase regardless of their order in the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Tag literal that opens the field, e.g. `"<TIME_ON:"`.
    pub key: &'static str,
    /// Word(s) spoken before the field value.
    pub spoken_label: &'static str,
    /// Trailing characters dropped from the decoded value before rendering.
    pub truncate_trailing: usize,
    /// Literal spoken after the value; empty for none.
    pub suffix: &'static str,
    /// When true the value is spelled out character by character.
    pub spaced: bool,
}

const RULES: &[FieldRule] = &[
    FieldRule {
        key: "<TIME_ON:",
        spoken_label: "time",
        truncate_trailing: 0,
        suffix: "",
        spaced: false,
    },
    FieldRule {
        key: "<BAND:",
        spoken_label: "band",
        truncate_trailing: 1,
        suffix: "meters",
        spaced: false,
    },
    FieldRule {
        key: "<MODE:",
        spoken_label: "mode",
        truncate_trailing: 0,
        suffix: "",
        spaced: false,
    },
    FieldRule {
        key: "<CALL:",
        spoken_label: "station",
        truncate_trailing: 0,
        suffix: "",
        spaced: true,
    },
    FieldRule {
        key: "<RST_SENT:",
        spoken_label: "send",
        truncate_trailing: 0,
        suffix: "",
        spaced: false,
    },
    FieldRule {
        key: "<RST_RCVD:",
        spoken_label: "received",
        truncate_trailing: 0,
        suffix: "",
        spaced: false,
    },
    FieldRule {
        key: "<SIG_INFO:",
        spoken_label: "information",
        truncate_trailing: 0,
        suffix: "",
        spaced: false,
    },
    FieldRule {
        key: "<COMMENT:",
        spoken_label: "comment",
        truncate_trailing: 0,
        suffix: "",
        spaced: false,
    },
    FieldRule {
        key: "<OPERATOR:",
        spoken_label: "operator",
        truncate_trailing: 0,
        suffix: "",
        spaced: true,
    },
];

/// Returns the narration rule table.
///
/// `QSO_DATE` marks a line as a record and has no rule here, so it is never
/// rendered into a phrase.
pub fn narration_rules() -> &'static [FieldRule] {
    RULES
}
