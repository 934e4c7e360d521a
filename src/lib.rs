//! GraphQL Query Stubs
//!
//! Bootstraps stand-in API responses without a live backend, in two steps that
//! only share the JSON Schema wire format:
//!
//! 1. [`build_schema`] turns a GraphQL query into a JSON Schema for its
//!    response, guessing leaf types from field names.
//! 2. [`generate`] turns any JSON Schema into an example value.
//!
//! # Example
//!
//! ```
//! use graphql_query_stubs::{build_schema, generate, Overrides, PrimitiveType};
//!
//! let mut overrides = Overrides::new();
//! overrides.insert("data.pokemon.name".to_string(), PrimitiveType::String);
//!
//! let schema = build_schema(
//!     "query Q { pokemon { name height is_default moves { power } } }",
//!     &overrides,
//! )
//! .unwrap();
//!
//! let pokemon = &schema["properties"]["data"]["properties"]["pokemon"];
//! assert_eq!(pokemon["properties"]["height"]["type"], "integer");
//! assert_eq!(pokemon["properties"]["is_default"]["type"], "boolean");
//! assert_eq!(pokemon["properties"]["moves"]["type"], "array");
//!
//! let stub = generate(&schema);
//! assert!(stub["data"]["pokemon"]["name"].is_string());
//! ```
//!
//! # Inference Rules
//!
//! | Selection | Schema |
//! |-----------|--------|
//! | leaf with an override at its path | `{ "type": <override> }` |
//! | other leaf | `{ "type": <heuristic> }` |
//! | composite with a plural name | `{ "type": "array", "items": <object> }` |
//! | other composite | `{ "type": "object", "properties": ... }` |
//!
//! Override paths start at `data` and gain an `items` segment under every list
//! field, e.g. `data.pokemons.items.name`.

mod error;
mod heuristics;
mod inferrer;
mod loader;
mod synth;
mod types;

pub use error::{BuildError, LoadError};
pub use heuristics::{infer_type, is_list_field};
pub use inferrer::{build_schema, parse_selections, selections_to_schema};
pub use loader::{
    load_overrides, load_overrides_str, load_schema, load_schema_str, read_input, STDIN_PATH,
};
pub use synth::{generate, generate_with_rng, resolve_type, WORDS};
pub use types::{
    Overrides, PrimitiveType, SelectionNode, ITEMS_SEGMENT, ROOT_PATH, SCHEMA_DRAFT_07,
};
