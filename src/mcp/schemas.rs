//! JSON schema builders for MCP tools.

use serde_json::{Map, Value};

/// Build the schema describing the `normalize-name` tool input.
pub(crate) fn normalize_input_schema() -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert(
        "input".into(),
        string_schema("Handwritten name; separators become spaces, non-letters are dropped"),
    );
    finalize_object_schema(properties, &["input"])
}

/// Build the schema describing the `add-entry` tool input.
pub(crate) fn add_entry_input_schema() -> Map<String, Value> {
    let mut properties = Map::new();

    let mut type_schema = Map::new();
    type_schema.insert("type".into(), Value::String("string".into()));
    type_schema.insert(
        "description".into(),
        Value::String(
            "Entry variant; ingredients carry cookTime, recipes carry requiredItems".into(),
        ),
    );
    type_schema.insert(
        "enum".into(),
        Value::Array(
            ["ingredient", "recipe"]
                .into_iter()
                .map(|variant| Value::String(variant.into()))
                .collect(),
        ),
    );
    properties.insert("type".into(), Value::Object(type_schema));

    properties.insert(
        "name".into(),
        string_schema("Unique, case-sensitive entry name"),
    );

    let mut cook_time_schema = Map::new();
    cook_time_schema.insert("type".into(), Value::String("integer".into()));
    cook_time_schema.insert("minimum".into(), Value::from(0));
    cook_time_schema.insert(
        "description".into(),
        Value::String("Cook time per unit (ingredients only)".into()),
    );
    properties.insert("cookTime".into(), Value::Object(cook_time_schema));

    let mut item_properties = Map::new();
    item_properties.insert("name".into(), string_schema("Name of the required entry"));
    let mut quantity_schema = Map::new();
    quantity_schema.insert("type".into(), Value::String("integer".into()));
    quantity_schema.insert("minimum".into(), Value::from(1));
    item_properties.insert("quantity".into(), Value::Object(quantity_schema));

    let mut items_schema = Map::new();
    items_schema.insert("type".into(), Value::String("array".into()));
    items_schema.insert(
        "description".into(),
        Value::String("Required items (recipes only); names must be distinct".into()),
    );
    items_schema.insert(
        "items".into(),
        Value::Object(finalize_object_schema(item_properties, &["name", "quantity"])),
    );
    properties.insert("requiredItems".into(), Value::Object(items_schema));

    finalize_object_schema(properties, &["type", "name"])
}

/// Build the schema describing the `recipe-summary` tool input.
pub(crate) fn summary_input_schema() -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert("name".into(), string_schema("Recipe name to resolve"));
    finalize_object_schema(properties, &["name"])
}

/// Schema for tools that take no arguments.
pub(crate) fn empty_object_schema() -> Map<String, Value> {
    finalize_object_schema(Map::new(), &[])
}

fn string_schema(description: &str) -> Value {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("string".into()));
    schema.insert("description".into(), Value::String(description.into()));
    Value::Object(schema)
}

fn finalize_object_schema(properties: Map<String, Value>, required: &[&str]) -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("object".into()));
    schema.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert(
            "required".into(),
            Value::Array(
                required
                    .iter()
                    .map(|&key| Value::String(key.into()))
                    .collect(),
            ),
        );
    }
    schema.insert("additionalProperties".into(), Value::Bool(false));
    schema
}
