//! Stub synthesis - produces an example value that fits a JSON Schema.
//!
//! Synthesis never fails. Anything it does not understand (missing or unknown
//! `type`, a schema that isn't an object, bounds that aren't numbers) degrades
//! to `null`, an empty object or the documented defaults.
//!
//! # Dispatch order
//!
//! 1. A non-object schema yields `null`.
//! 2. A non-empty `enum` yields one of its members, whatever `type` says.
//! 3. Otherwise `type` is resolved (see [`resolve_type`]) and dispatched:
//!
//! | type | result |
//! |------|--------|
//! | `object` | every entry of `properties`, synthesized recursively |
//! | `array` | `minItems..=maxItems` items (default `1..=3`) from `items` |
//! | `string` | fixed date / date-time, `<word>@example.com`, `https://example.com/<word>`, or `<word>-<word>` |
//! | `integer` | `minimum..=maximum` (default `1..=255`) |
//! | `number` | `minimum..=maximum` (default `0.1..=2.0`), two decimals |
//! | `boolean` | coin flip |
//! | anything else | `null` |

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{Map, Number, Value};

use crate::types::json_type_name;

/// Placeholder vocabulary for synthesized strings.
pub const WORDS: &[&str] = &[
    "amber", "birch", "coral", "delta", "ember", "fjord", "glint", "harbor", "inlet", "juniper",
    "kestrel", "lumen", "maple", "nectar", "orbit", "pebble", "quartz", "ridge", "summit",
    "tundra", "umbra", "velvet", "willow", "zephyr",
];

const DEFAULT_MIN_ITEMS: i64 = 1;
const DEFAULT_MAX_ITEMS: i64 = 3;
const DEFAULT_MIN_INTEGER: i64 = 1;
const DEFAULT_MAX_INTEGER: i64 = 255;
const DEFAULT_MIN_NUMBER: f64 = 0.1;
const DEFAULT_MAX_NUMBER: f64 = 2.0;

const FIXED_DATE: &str = "2024-01-01";
const FIXED_DATE_TIME: &str = "2024-01-01T00:00:00Z";

/// Synthesize a value for `schema` using the thread-local random generator.
pub fn generate(schema: &Value) -> Value {
    generate_with_rng(schema, &mut rand::thread_rng())
}

/// Synthesize a value for `schema`, drawing randomness from `rng`.
///
/// With a seeded generator the output is reproducible.
pub fn generate_with_rng<R: Rng + ?Sized>(schema: &Value, rng: &mut R) -> Value {
    let Value::Object(map) = schema else {
        if !schema.is_null() {
            tracing::debug!(actual = json_type_name(schema), "schema is not an object");
        }
        return Value::Null;
    };

    if let Some(Value::Array(members)) = map.get("enum") {
        if let Some(member) = members.choose(rng) {
            return member.clone();
        }
    }

    match resolve_type(schema) {
        Some("object") => generate_object(map, rng),
        Some("array") => generate_array(map, rng),
        Some("string") => Value::String(generate_string(map, rng)),
        Some("integer") => Value::from(generate_integer(map, rng)),
        Some("number") => generate_number(map, rng),
        Some("boolean") => Value::Bool(rng.gen_bool(0.5)),
        // "null", unknown names, or no type at all
        _ => Value::Null,
    }
}

/// Resolve the effective `type` of a schema.
///
/// A string is used as-is. For a union array, the first string member other
/// than `"null"` wins; if there is none, the first element is used when it is
/// a string (so `["null"]` resolves to `"null"`).
pub fn resolve_type(schema: &Value) -> Option<&str> {
    match schema.get("type")? {
        Value::String(ty) => Some(ty.as_str()),
        Value::Array(members) => {
            let non_null = members
                .iter()
                .filter_map(Value::as_str)
                .find(|ty| *ty != "null");

            non_null.or_else(|| {
                let first = members.first().and_then(Value::as_str);
                tracing::debug!(fallback = ?first, "type union has no non-null member");
                first
            })
        }
        _ => None,
    }
}

// --- Internal implementation ---

fn generate_object<R: Rng + ?Sized>(schema: &Map<String, Value>, rng: &mut R) -> Value {
    let mut result = Map::new();

    if let Some(Value::Object(properties)) = schema.get("properties") {
        for (key, property) in properties {
            result.insert(key.clone(), generate_with_rng(property, rng));
        }
    }

    Value::Object(result)
}

fn generate_array<R: Rng + ?Sized>(schema: &Map<String, Value>, rng: &mut R) -> Value {
    let empty = Value::Object(Map::new());
    let item_schema = match schema.get("items") {
        Some(items @ Value::Object(_)) => items,
        _ => &empty,
    };

    let min = int_bound(schema, "minItems").unwrap_or(DEFAULT_MIN_ITEMS).max(0);
    let max = int_bound(schema, "maxItems").unwrap_or(DEFAULT_MAX_ITEMS);
    let len = random_int(min, max, rng);

    (0..len)
        .map(|_| generate_with_rng(item_schema, rng))
        .collect()
}

fn generate_string<R: Rng + ?Sized>(schema: &Map<String, Value>, rng: &mut R) -> String {
    match schema.get("format").and_then(Value::as_str) {
        Some("date") => FIXED_DATE.to_string(),
        Some("date-time") => FIXED_DATE_TIME.to_string(),
        Some("email") => format!("{}@example.com", pick_word(rng)),
        Some("uri") => format!("https://example.com/{}", pick_word(rng)),
        _ => format!("{}-{}", pick_word(rng), pick_word(rng)),
    }
}

fn generate_integer<R: Rng + ?Sized>(schema: &Map<String, Value>, rng: &mut R) -> i64 {
    let min = int_bound(schema, "minimum").unwrap_or(DEFAULT_MIN_INTEGER);
    let max = int_bound(schema, "maximum").unwrap_or(DEFAULT_MAX_INTEGER);
    random_int(min, max, rng)
}

fn generate_number<R: Rng + ?Sized>(schema: &Map<String, Value>, rng: &mut R) -> Value {
    let min = float_bound(schema, "minimum").unwrap_or(DEFAULT_MIN_NUMBER);
    let max = float_bound(schema, "maximum").unwrap_or(DEFAULT_MAX_NUMBER);

    let value = if min >= max {
        min
    } else {
        // Interpolate so `max - min` cannot overflow for wide finite ranges
        let t = rng.gen::<f64>();
        min * (1.0 - t) + max * t
    };
    let scaled = value * 100.0;
    let rounded = if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    };

    Number::from_f64(rounded)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn pick_word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WORDS.choose(rng).copied().unwrap_or("stub")
}

/// Inclusive range draw; an inverted range collapses to `min`.
fn random_int<R: Rng + ?Sized>(min: i64, max: i64, rng: &mut R) -> i64 {
    if min >= max {
        min
    } else {
        rng.gen_range(min..=max)
    }
}

fn float_bound(schema: &Map<String, Value>, key: &str) -> Option<f64> {
    schema.get(key).and_then(Value::as_f64)
}

/// Numeric bound truncated toward zero; `as` saturates out-of-range floats.
fn int_bound(schema: &Map<String, Value>, key: &str) -> Option<i64> {
    float_bound(schema, key).map(|bound| bound as i64)
}
