//! Category Store Normalizer — turns a skills value of unknown shape into a
//! complete [`CategoryMap`].
//!
//! Accepted shapes:
//! - flat list → every element classified and bucketed
//! - category object → values coerced to arrays, custom keys kept
//! - bare string → treated as a comma/newline separated flat list
//! - null / anything else → the empty taxonomy
//!
//! `normalize_skills(&to_value(normalize_skills(x))) == normalize_skills(x)`.

use serde_json::{Map, Value};
use tracing::debug;

use crate::fields::coerce_scalar;
use crate::skills::category_map::CategoryMap;
use crate::skills::classifier::classify;

pub fn normalize_skills(value: &Value) -> CategoryMap {
    match value {
        Value::Array(items) => from_flat_list(items.iter().filter_map(coerce_scalar)),
        Value::Object(map) => from_category_object(map),
        Value::String(text) => from_flat_list(split_list(text)),
        Value::Null => CategoryMap::with_taxonomy(),
        other => {
            debug!("Ignoring skills value of unexpected shape: {other}");
            CategoryMap::with_taxonomy()
        }
    }
}

fn split_list(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split([',', '\n']).map(str::to_string)
}

fn from_flat_list(skills: impl Iterator<Item = String>) -> CategoryMap {
    let mut map = CategoryMap::with_taxonomy();
    for skill in skills {
        let category = classify(&skill);
        map.insert(category.as_str(), &skill);
    }
    map
}

fn from_category_object(input: &Map<String, Value>) -> CategoryMap {
    let mut map = CategoryMap::with_taxonomy();
    for (key, value) in input {
        if key.trim().is_empty() {
            debug!("Dropping skills category with a blank name");
            continue;
        }
        map.add_category(key);
        for skill in coerce_to_list(value) {
            map.insert(key, &skill);
        }
    }
    map
}

/// Bare strings are wrapped, arrays keep their scalar elements, anything else
/// becomes an empty list.
fn coerce_to_list(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items.iter().filter_map(coerce_scalar).collect(),
        _ => Vec::new(),
    }
}
