//! Input loading for the command-line driver.
//!
//! Reads query text, override tables and JSON Schemas from files or stdin.
//! The inference and synthesis modules never touch I/O themselves.

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::LoadError;
use crate::types::Overrides;

/// Path argument that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Read text from `path`, or from stdin when `path` is `None` or `-`.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file doesn't exist, or
/// `LoadError::ReadError` / `LoadError::StdinError` if reading fails.
pub fn read_input(path: Option<&Path>) -> Result<String, LoadError> {
    match path {
        Some(path) if path != Path::new(STDIN_PATH) => read_file(path),
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|source| LoadError::StdinError { source })?;
            Ok(content)
        }
    }
}

/// Load an override table from a JSON file.
///
/// # Errors
///
/// Returns the I/O errors of [`read_input`], or `LoadError::InvalidOverrides`
/// if the file isn't a flat object of primitive type names.
pub fn load_overrides(path: &Path) -> Result<Overrides, LoadError> {
    let content = read_file(path)?;
    load_overrides_str(&content)
}

/// Parse an override table from a JSON string.
///
/// # Errors
///
/// Returns `LoadError::InvalidOverrides` if the string isn't a flat object
/// mapping paths to `string`, `integer`, `number` or `boolean`.
pub fn load_overrides_str(content: &str) -> Result<Overrides, LoadError> {
    let overrides: Overrides = serde_json::from_str(content)
        .map_err(|source| LoadError::InvalidOverrides { source })?;
    tracing::debug!(count = overrides.len(), "loaded type overrides");
    Ok(overrides)
}

/// Load a JSON Schema from a file, or from stdin when `path` is `None` or `-`.
///
/// # Errors
///
/// Returns the I/O errors of [`read_input`], or `LoadError::InvalidJson`.
pub fn load_schema(path: Option<&Path>) -> Result<Value, LoadError> {
    let content = read_input(path)?;
    load_schema_str(&content)
}

/// Parse a JSON Schema from a string.
///
/// Any JSON value is accepted; synthesis decides what to make of it.
///
/// # Errors
///
/// Returns `LoadError::InvalidJson` if the string isn't valid JSON.
pub fn load_schema_str(content: &str) -> Result<Value, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::InvalidJson { source })
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    std::fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrimitiveType;
    use std::path::PathBuf;

    #[test]
    fn read_input_missing_file() {
        let result = read_input(Some(Path::new("/nonexistent/query.graphql")));
        assert!(matches!(result, Err(LoadError::FileNotFound { .. })));
    }

    #[test]
    fn read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("query.graphql");
        std::fs::write(&path, "{ thing }").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "{ thing }");
    }

    #[test]
    fn load_overrides_parses_table() {
        let overrides =
            load_overrides_str(r#"{"data.pokemons.items.name": "string", "data.x": "number"}"#)
                .unwrap();
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides["data.x"], PrimitiveType::Number);
    }

    #[test]
    fn load_overrides_rejects_non_primitive() {
        let result = load_overrides_str(r#"{"data.x": "array"}"#);
        assert!(matches!(result, Err(LoadError::InvalidOverrides { .. })));
    }

    #[test]
    fn load_overrides_rejects_nested_values() {
        let result = load_overrides_str(r#"{"data": {"x": "string"}}"#);
        assert!(matches!(result, Err(LoadError::InvalidOverrides { .. })));
    }

    #[test]
    fn load_overrides_missing_file() {
        let result = load_overrides(&PathBuf::from("/nonexistent/overrides.json"));
        assert!(matches!(result, Err(LoadError::FileNotFound { .. })));
    }

    #[test]
    fn load_schema_str_invalid_json() {
        let result = load_schema_str("{ not json");
        assert!(matches!(result, Err(LoadError::InvalidJson { .. })));
    }

    #[test]
    fn load_schema_str_accepts_any_value() {
        assert_eq!(load_schema_str("null").unwrap(), Value::Null);
        assert_eq!(load_schema_str("[1]").unwrap(), serde_json::json!([1]));
    }
}
