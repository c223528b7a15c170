use serde_json::Value;

use crate::{
    constants::{EMPTY_HINT_FALLBACK, LEAKY_HINT_FALLBACK, LEAKY_HINT_PHRASES},
    models::domain::QuizItem,
};

/// Turns one decoded record into a [`QuizItem`], or `None` if it does not
/// have exactly four string options with `answer` among them.
pub fn validate(record: &Value) -> Option<QuizItem> {
    let options = record
        .get("options")?
        .as_array()?
        .iter()
        .map(|option| option.as_str().map(str::to_string))
        .collect::<Option<Vec<String>>>()?;
    let answer = record.get("answer")?.as_str()?.to_string();

    QuizItem::try_new(
        string_field(record, "question"),
        options,
        answer,
        clean_hint(&string_field(record, "hint")),
        string_field(record, "explanation"),
    )
}

fn string_field(record: &Value, field: &str) -> String {
    record
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Replaces hints that are blank or that send the student back to the
/// source text instead of the concept.
pub fn clean_hint(hint: &str) -> String {
    if hint.trim().is_empty() {
        return EMPTY_HINT_FALLBACK.to_string();
    }

    let lowered = hint.to_lowercase();
    if LEAKY_HINT_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
    {
        return LEAKY_HINT_FALLBACK.to_string();
    }

    hint.to_string()
}
