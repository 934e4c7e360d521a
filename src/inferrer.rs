//! Schema inference - turns a GraphQL query into a JSON Schema for its response.

use graphql_parser::query::{Definition, OperationDefinition, Selection, SelectionSet};
use serde_json::{json, Map, Value};

use crate::error::BuildError;
use crate::heuristics::{infer_type, is_list_field};
use crate::types::{Overrides, SelectionNode, ITEMS_SEGMENT, ROOT_PATH, SCHEMA_DRAFT_07};

/// Build a JSON Schema describing the response of the first operation in `source`.
///
/// Leaf types come from `overrides` when the leaf's dot path is present there,
/// and from field-name heuristics otherwise. Composite fields whose names look
/// plural become arrays of objects.
///
/// # Errors
///
/// Returns `BuildError::Parse` if the query isn't valid GraphQL, or
/// `BuildError::NoOperation` if it parses but contains no operation.
pub fn build_schema(source: &str, overrides: &Overrides) -> Result<Value, BuildError> {
    let selections = parse_selections(source)?;
    let data = selections_to_schema(&selections, overrides, ROOT_PATH);

    Ok(json!({
        "$schema": SCHEMA_DRAFT_07,
        "type": "object",
        "properties": {
            "data": data
        }
    }))
}

/// Parse `source` and return the top-level field selections of its first operation.
///
/// Queries, mutations, subscriptions and the anonymous `{ ... }` shorthand all
/// count; the first one in document order wins. Fragment spreads and inline
/// fragments are dropped from the tree.
///
/// # Errors
///
/// Same as [`build_schema`].
pub fn parse_selections(source: &str) -> Result<Vec<SelectionNode>, BuildError> {
    let document = graphql_parser::parse_query::<&str>(source)?;

    let selection_set = document
        .definitions
        .iter()
        .find_map(|definition| match definition {
            Definition::Operation(operation) => Some(operation_selection_set(operation)),
            Definition::Fragment(_) => None,
        })
        .ok_or(BuildError::NoOperation)?;

    tracing::debug!(
        fields = selection_set.items.len(),
        "selected first operation definition"
    );

    Ok(to_selection_nodes(selection_set))
}

/// Transform a selection tree into an object schema rooted at `path`.
///
/// Properties appear in selection order.
pub fn selections_to_schema(
    selections: &[SelectionNode],
    overrides: &Overrides,
    path: &str,
) -> Value {
    let mut properties = Map::new();

    for selection in selections {
        let field_path = format!("{}.{}", path, selection.name);

        let schema = if selection.is_leaf() {
            leaf_schema(&selection.name, &field_path, overrides)
        } else {
            let children = selection.children.as_deref().unwrap_or_default();
            if is_list_field(&selection.name) {
                let item_path = format!("{}.{}", field_path, ITEMS_SEGMENT);
                json!({
                    "type": "array",
                    "items": selections_to_schema(children, overrides, &item_path)
                })
            } else {
                selections_to_schema(children, overrides, &field_path)
            }
        };

        properties.insert(selection.name.clone(), schema);
    }

    json!({
        "type": "object",
        "properties": properties
    })
}

// --- Internal implementation ---

fn leaf_schema(name: &str, field_path: &str, overrides: &Overrides) -> Value {
    let ty = match overrides.get(field_path) {
        Some(overridden) => {
            tracing::trace!(path = field_path, ty = %overridden, "applying type override");
            *overridden
        }
        None => infer_type(name),
    };

    json!({ "type": ty.as_str() })
}

fn operation_selection_set<'d, 'a>(
    operation: &'d OperationDefinition<'a, &'a str>,
) -> &'d SelectionSet<'a, &'a str> {
    match operation {
        OperationDefinition::SelectionSet(selection_set) => selection_set,
        OperationDefinition::Query(query) => &query.selection_set,
        OperationDefinition::Mutation(mutation) => &mutation.selection_set,
        OperationDefinition::Subscription(subscription) => &subscription.selection_set,
    }
}

fn to_selection_nodes<'a>(selection_set: &SelectionSet<'a, &'a str>) -> Vec<SelectionNode> {
    selection_set
        .items
        .iter()
        .filter_map(|selection| match selection {
            Selection::Field(field) if field.selection_set.items.is_empty() => {
                Some(SelectionNode::leaf(field.name))
            }
            Selection::Field(field) => Some(SelectionNode::composite(
                field.name,
                to_selection_nodes(&field.selection_set),
            )),
            // Fragments contribute no properties
            Selection::FragmentSpread(_) | Selection::InlineFragment(_) => None,
        })
        .collect()
}
