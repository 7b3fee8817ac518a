use serde_json::{Map, Value};

use crate::normalizers::DictionaryEntry;
use crate::normalizers::types::{NO_ETYMOLOGY, NO_PRONUNCIATION, UNKNOWN};

/// Decode a dictionary lookup payload (a JSON array of entries).
///
/// `word` is used for entries that do not carry their own headword.
/// Array elements that are not objects are dropped.
pub fn normalize(payload: &Value, word: &str) -> Vec<DictionaryEntry> {
    let Some(entries) = payload.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(Value::as_object)
        .map(|entry| decode_entry(entry, word))
        .collect()
}

fn decode_entry(entry: &Map<String, Value>, word: &str) -> DictionaryEntry {
    let mut part_of_speech = None;
    let mut definitions = Vec::new();
    let mut examples = Vec::new();

    for meaning in array_field(entry, "meanings").filter_map(Value::as_object) {
        if let Some(pos) = meaning
            .get("partOfSpeech")
            .and_then(Value::as_str)
            .filter(|pos| !pos.trim().is_empty())
        {
            part_of_speech = Some(pos);
        }
        for definition in array_field(meaning, "definitions").filter_map(Value::as_object) {
            if let Some(text) = definition.get("definition").and_then(Value::as_str) {
                definitions.push(text.to_string());
            }
            if let Some(example) = definition.get("example").and_then(Value::as_str) {
                examples.push(example.to_string());
            }
        }
    }

    let pronunciation = array_field(entry, "phonetics")
        .filter_map(|phonetic| phonetic.get("text").and_then(Value::as_str))
        .find(|text| !text.trim().is_empty());

    let etymology = array_field(entry, "etymologies")
        .next()
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty());

    DictionaryEntry {
        word: entry
            .get("word")
            .and_then(Value::as_str)
            .unwrap_or(word)
            .to_string(),
        part_of_speech: part_of_speech.unwrap_or(UNKNOWN).to_string(),
        definitions,
        etymology: etymology.unwrap_or(NO_ETYMOLOGY).to_string(),
        pronunciation: pronunciation.unwrap_or(NO_PRONUNCIATION).to_string(),
        examples,
    }
}

/// Elements of `object[key]`, or nothing when absent or not an array.
fn array_field<'a>(object: &'a Map<String, Value>, key: &str) -> impl Iterator<Item = &'a Value> {
    object
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}
