use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// First bracketed array that holds at least one object, shortest match.
static EMBEDDED_ARRAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\[\s*\{.*?\}\s*\]").expect("EMBEDDED_ARRAY is a valid regex pattern")
});

/// Extracts the array of records from a model reply.
///
/// The whole reply is parsed first. When that fails, the first embedded
/// `[{...}]` span is parsed instead. Anything else yields an empty vector.
pub fn decode_items(raw: &str) -> Vec<Value> {
    if let Ok(items) = serde_json::from_str::<Vec<Value>>(raw.trim()) {
        return items;
    }

    let Some(found) = EMBEDDED_ARRAY.find(raw) else {
        log::debug!("No JSON array found in completion of {} chars", raw.len());
        return Vec::new();
    };

    match serde_json::from_str::<Vec<Value>>(found.as_str()) {
        Ok(items) => {
            log::debug!(
                "Recovered {} records from an embedded JSON array at offset {}",
                items.len(),
                found.start()
            );
            items
        }
        Err(err) => {
            log::debug!("Embedded JSON array failed to parse: {}", err);
            Vec::new()
        }
    }
}
