//! Field-name heuristics for leaf types and list detection.
//!
//! Both classifiers are ordered rule lists evaluated first-match-wins. The
//! order is part of the behavior: boolean prefixes are checked before the
//! float substrings, which are checked before the broad integer patterns, so a
//! name like `is_count` stays a boolean.
//!
//! | # | pattern (case-insensitive) | verdict |
//! |---|----------------------------|---------|
//! | 1 | `^is_`, `^has_`, `^can_`, `^show_`, `^enable` | `boolean` |
//! | 2 | `rate`, `ratio`, `factor`, `chance`, `multiplier`, `percent`, `latitude`, `longitude` | `number` |
//! | 3 | `_id$`, `^id$`, `_stat$`, `^hp$`, and counters like `count`, `level`, `speed`, `score` | `integer` |
//! | - | anything else | `string` |
//!
//! These are best-effort labels. `rates` infers `number` even if the field is a list.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::PrimitiveType;

/// A single pattern-to-verdict rule.
struct TypeRule {
    pattern: Regex,
    verdict: PrimitiveType,
}

impl TypeRule {
    fn new(pattern: &str, verdict: PrimitiveType) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            verdict,
        }
    }
}

static TYPE_RULES: Lazy<Vec<TypeRule>> = Lazy::new(|| {
    vec![
        TypeRule::new(r"(?i)^is_|^has_|^can_|^show_|^enable", PrimitiveType::Boolean),
        TypeRule::new(
            r"(?i)rate|ratio|factor|chance|multiplier|percent|latitude|longitude",
            PrimitiveType::Number,
        ),
        TypeRule::new(
            concat!(
                r"(?i)_id$|^id$|_stat$|effort|experience|height|weight|count|level|order|floor",
                r"|generation|accuracy|power|pp|priority|damage|speed|attack|defense|^hp$",
                r"|age|quantity|amount|total|size|rank|score|index|position|duration",
            ),
            PrimitiveType::Integer,
        ),
    ]
});

/// Suffixes that mark a composite field as a list. A bare `s` already covers
/// most of them; the longer ones are kept so the list reads as documentation.
const LIST_SUFFIXES: &[&str] = &[
    "s",
    "types",
    "stats",
    "abilities",
    "moves",
    "items",
    "forms",
    "results",
    "edges",
    "nodes",
];

/// Infer the JSON Schema type of a leaf field from its name.
pub fn infer_type(field_name: &str) -> PrimitiveType {
    TYPE_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(field_name))
        .map(|rule| rule.verdict)
        .unwrap_or(PrimitiveType::String)
}

/// Returns true if a composite field name looks like a list.
///
/// Matching is case-sensitive.
pub fn is_list_field(field_name: &str) -> bool {
    LIST_SUFFIXES
        .iter()
        .any(|suffix| field_name.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Type Inference ===

    #[test]
    fn boolean_prefixes() {
        for name in ["is_hidden", "is_active", "has_ability", "can_evolve", "show_all", "enabled"] {
            assert_eq!(infer_type(name), PrimitiveType::Boolean, "{name}");
        }
    }

    #[test]
    fn boolean_prefix_is_case_insensitive() {
        assert_eq!(infer_type("IS_DEFAULT"), PrimitiveType::Boolean);
        assert_eq!(infer_type("EnableLogging"), PrimitiveType::Boolean);
    }

    #[test]
    fn boolean_precedes_integer_and_number() {
        assert_eq!(infer_type("is_count"), PrimitiveType::Boolean);
        assert_eq!(infer_type("has_rate"), PrimitiveType::Boolean);
        assert_eq!(infer_type("is_id"), PrimitiveType::Boolean);
    }

    #[test]
    fn boolean_prefix_must_be_anchored() {
        // "this_" contains "is_" but not at the start
        assert_eq!(infer_type("this_name"), PrimitiveType::String);
    }

    #[test]
    fn float_substrings() {
        for name in ["success_rate", "damage_ratio", "gender_rate", "capture_chance", "latitude"] {
            assert_eq!(infer_type(name), PrimitiveType::Number, "{name}");
        }
    }

    #[test]
    fn float_precedes_integer() {
        // contains "damage" (integer) and "ratio" (number)
        assert_eq!(infer_type("damage_ratio"), PrimitiveType::Number);
        assert_eq!(infer_type("level_multiplier"), PrimitiveType::Number);
    }

    #[test]
    fn integer_patterns() {
        for name in [
            "base_stat",
            "effort",
            "base_experience",
            "height",
            "weight",
            "id",
            "user_id",
            "hp",
            "HP",
            "pp",
            "move_count",
            "page_index",
        ] {
            assert_eq!(infer_type(name), PrimitiveType::Integer, "{name}");
        }
    }

    #[test]
    fn id_patterns_are_anchored() {
        assert_eq!(infer_type("identifier"), PrimitiveType::String);
        assert_eq!(infer_type("hp_label"), PrimitiveType::String);
    }

    #[test]
    fn default_is_string() {
        for name in ["name", "description", "slug", "url"] {
            assert_eq!(infer_type(name), PrimitiveType::String, "{name}");
        }
    }

    #[test]
    fn known_false_positives_are_kept() {
        // "rates" is classified by substring even though it reads like a list
        assert_eq!(infer_type("rates"), PrimitiveType::Number);
        // "message" contains "age"
        assert_eq!(infer_type("message"), PrimitiveType::Integer);
    }

    // === List Detection ===

    #[test]
    fn list_suffixes() {
        for name in [
            "edges",
            "nodes",
            "moves",
            "pokemons",
            "pokemon_v2_pokemonstats",
            "pokemon_v2_pokemontypes",
            "pokemon_v2_pokemonabilities",
        ] {
            assert!(is_list_field(name), "{name}");
        }
    }

    #[test]
    fn singular_names_are_not_lists() {
        for name in ["pokemon_v2_pokemon", "pokemon_v2_stat", "pokemon_v2_type", "user"] {
            assert!(!is_list_field(name), "{name}");
        }
    }

    #[test]
    fn list_detection_is_case_sensitive() {
        assert!(!is_list_field("EDGES"));
    }
}
