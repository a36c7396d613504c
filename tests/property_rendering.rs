use proptest::prelude::*;

use qsovoice::{
    adif::{render::render_record, scan::scan_records},
    rules::narration_rules,
};

fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z0-9]{1,8}").expect("regex")
}

fn field_picks() -> impl Strategy<Value = Vec<(usize, String)>> {
    prop::collection::vec((0usize..9, value_strategy()), 0..9).prop_shuffle()
}

fn build_record(picks: &[(usize, String)]) -> String {
    let rules = narration_rules();
    let mut record = String::from("<QSO_DATE:8>20230115>");
    for (idx, value) in picks {
        let rule = &rules[*idx];
        record.push_str(&format!("{}{}>{}>", rule.key, value.len(), value));
    }
    record
}

fn dedupe_first(picks: Vec<(usize, String)>) -> Vec<(usize, String)> {
    let mut out: Vec<(usize, String)> = Vec::new();
    for (idx, value) in picks {
        if !out.iter().any(|(i, _)| *i == idx) {
            out.push((idx, value));
        }
    }
    out
}

proptest! {
    #[test]
    fn rendering_is_pure_and_table_ordered(picks in field_picks()) {
        let rules = narration_rules();
        let picks = dedupe_first(picks);
        let record = build_record(&picks);

        let first = render_record(&record, rules).expect("render");
        let second = render_record(&record, rules).expect("render");
        prop_assert_eq!(&first, &second);

        // present labels appear in rule-table order regardless of the
        // physical field order in the record
        let mut cursor = 0usize;
        for (idx, rule) in rules.iter().enumerate() {
            if !picks.iter().any(|(i, _)| *i == idx) {
                continue;
            }
            let label = format!("{} ", rule.spoken_label);
            match first[cursor..].find(&label) {
                Some(pos) => cursor += pos + label.len(),
                None => prop_assert!(false, "label {:?} out of order in {:?}", label, first),
            }
        }
    }

    #[test]
    fn absent_fields_leave_no_trace(picks in field_picks()) {
        let rules = narration_rules();
        let picks = dedupe_first(picks);
        let record = build_record(&picks);

        let phrase = render_record(&record, rules).expect("render");
        for (idx, rule) in rules.iter().enumerate() {
            if picks.iter().any(|(i, _)| *i == idx) {
                continue;
            }
            let label = format!("{} ", rule.spoken_label);
            prop_assert!(!phrase.contains(&label), "absent {:?} leaked into {:?}", label, phrase);
            if !rule.suffix.is_empty() {
                prop_assert!(!phrase.contains(rule.suffix));
            }
        }
    }

    #[test]
    fn selector_count_matches_marker_lines(
        lines in prop::collection::vec((any::<bool>(), value_strategy()), 0..40)
    ) {
        let mut input = String::new();
        let mut expected = Vec::new();
        for (qualifies, value) in &lines {
            if *qualifies {
                let record = format!("<QSO_DATE:8>20230115><CALL:{}>{}>", value.len(), value);
                input.push_str(&record);
                input.push('\n');
                expected.push(record);
            } else {
                input.push_str("noise ");
                input.push_str(value);
                input.push('\n');
            }
        }

        let records = scan_records(input.as_bytes()).expect("scan");
        prop_assert_eq!(records, expected);
    }
}
