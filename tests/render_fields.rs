use qsovoice::{
    adif::render::{ParseError, ParseErrorKind, render_record},
    rules::{FieldRule, narration_rules},
};

const FULL_RECORD: &str =
    "<QSO_DATE:8>20230115><TIME_ON:4>1230><BAND:3>20m><MODE:3>SSB><CALL:5>AB1CD>";

#[test]
fn full_record_renders_expected_phrase() {
    let phrase = render_record(FULL_RECORD, narration_rules()).expect("render");
    assert_eq!(phrase, "time 1230 band 20 meters mode SSB station A B 1 C D ");
}

#[test]
fn marker_field_is_never_rendered() {
    let phrase = render_record(FULL_RECORD, narration_rules()).expect("render");
    assert!(!phrase.contains("20230115"));
}

#[test]
fn spaced_rule_spells_out_value() {
    let phrase = render_record("<QSO_DATE:8>20230115><CALL:5>AB1CD>", narration_rules())
        .expect("render");
    assert_eq!(phrase, "station A B 1 C D ");
}

#[test]
fn truncation_drops_trailing_characters_and_speaks_suffix() {
    let phrase =
        render_record("<QSO_DATE:8>20230115><BAND:3>20m>", narration_rules()).expect("render");
    assert_eq!(phrase, "band 20 meters ");
}

#[test]
fn value_whitespace_is_trimmed() {
    let phrase =
        render_record("<QSO_DATE:8>20230115><COMMENT:6> hello>", narration_rules())
            .expect("render");
    assert_eq!(phrase, "comment hello ");
}

#[test]
fn fields_render_in_table_order_not_record_order() {
    let phrase = render_record(
        "<QSO_DATE:8>20230115><CALL:5>AB1CD><MODE:3>SSB><TIME_ON:4>1230>",
        narration_rules(),
    )
    .expect("render");
    assert_eq!(phrase, "time 1230 mode SSB station A B 1 C D ");
}

#[test]
fn missing_fields_contribute_nothing() {
    let phrase = render_record("<QSO_DATE:8>20230115><MODE:3>SSB>", narration_rules())
        .expect("render");
    assert_eq!(phrase, "mode SSB ");
}

#[test]
fn record_with_no_recognized_fields_renders_empty_phrase() {
    let phrase = render_record("<QSO_DATE:8>20230115>", narration_rules()).expect("render");
    assert_eq!(phrase, "");
}

#[test]
fn truncation_at_or_past_value_length_yields_empty_token() {
    let rules = [FieldRule {
        key: "<MODE:",
        spoken_label: "mode",
        truncate_trailing: 5,
        suffix: "",
        spaced: false,
    }];
    let phrase = render_record("<MODE:3>SSB>", &rules).expect("render");
    assert_eq!(phrase, "mode  ");
}

#[test]
fn declared_length_past_record_end_is_out_of_bounds() {
    let err = render_record("<QSO_DATE:8>20230115><TIME_ON:9>1230>", narration_rules())
        .expect_err("length 9 exceeds remaining text");
    assert_eq!(
        err,
        ParseError {
            field_key: "<TIME_ON:",
            record_offset: 21,
            kind: ParseErrorKind::OutOfBounds,
        }
    );
}

#[test]
fn non_numeric_length_fails() {
    let err = render_record("<QSO_DATE:8>20230115><MODE:xx>SSB>", narration_rules())
        .expect_err("xx is not a length");
    assert_eq!(err.field_key, "<MODE:");
    assert_eq!(err.record_offset, 21);
    assert_eq!(err.kind, ParseErrorKind::BadLength);
}

#[test]
fn negative_length_fails() {
    let err = render_record("<MODE:-3>SSB>", narration_rules()).expect_err("negative length");
    assert_eq!(err.kind, ParseErrorKind::BadLength);
}

#[test]
fn unterminated_length_fails() {
    let err = render_record("<QSO_DATE:8>20230115><COMMENT:5", narration_rules())
        .expect_err("no terminator after the length");
    assert_eq!(err.field_key, "<COMMENT:");
    assert_eq!(err.kind, ParseErrorKind::BadLength);
}

#[test]
fn rendering_is_deterministic() {
    let first = render_record(FULL_RECORD, narration_rules()).expect("render");
    let second = render_record(FULL_RECORD, narration_rules()).expect("render");
    assert_eq!(first, second);
}
