use crate::rules::FieldRule;

/// Reason a recognized field failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The declared length was missing its terminator or was not a
    /// non-negative base-10 integer.
    BadLength,
    /// The declared length places the value past the end of the record.
    OutOfBounds,
}

/// Decode failure for one recognized field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Tag literal of the field that failed.
    pub field_key: &'static str,
    /// Byte offset of the field's key within the record.
    pub record_offset: usize,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

/// Renders one raw record into a spoken phrase.
///
/// Rules are applied in table order, not record order. A rule whose key does
/// not occur in the record contributes nothing. Decoding any recognized field
/// fails the whole record.
pub fn render_record(record: &str, rules: &[FieldRule]) -> Result<String, ParseError> {
    let mut phrase = String::new();

    for rule in rules {
        let Some(start) = record.find(rule.key) else {
            continue;
        };

        let data = decode_value(record, rule, start)?;

        phrase.push_str(rule.spoken_label);
        phrase.push(' ');

        if rule.spaced {
            for ch in data.chars() {
                phrase.push(ch);
                phrase.push(' ');
            }
        } else {
            // Truncation past the value length yields an empty token.
            let keep = data.chars().count().saturating_sub(rule.truncate_trailing);
            phrase.extend(data.chars().take(keep));
            phrase.push(' ');
        }

        if !rule.suffix.is_empty() {
            phrase.push_str(rule.suffix);
            phrase.push(' ');
        }
    }

    Ok(phrase)
}

fn decode_value<'a>(
    record: &'a str,
    rule: &FieldRule,
    start: usize,
) -> Result<&'a str, ParseError> {
    let len_start = start + rule.key.len();
    let Some(rel) = record[len_start..].find('>') else {
        return Err(ParseError {
            field_key: rule.key,
            record_offset: start,
            kind: ParseErrorKind::BadLength,
        });
    };

    let declared: usize = record[len_start..len_start + rel]
        .parse()
        .map_err(|_| ParseError {
            field_key: rule.key,
            record_offset: start,
            kind: ParseErrorKind::BadLength,
        })?;

    let value_start = len_start + rel + 1;
    let value = value_start
        .checked_add(declared)
        .and_then(|end| record.get(value_start..end))
        .ok_or(ParseError {
            field_key: rule.key,
            record_offset: start,
            kind: ParseErrorKind::OutOfBounds,
        })?;

    Ok(value.trim())
}
