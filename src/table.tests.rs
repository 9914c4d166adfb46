use k8s_openapi::serde_json::{json, to_value};

use super::*;

#[test]
fn column_definition_serialize_test() {
    let column = ColumnDefinition::name("Name of the resource.");
    assert_eq!(
        json!({
            "name": "Name",
            "type": "string",
            "format": "name",
            "priority": 0,
            "description": "Name of the resource.",
        }),
        to_value(&column).unwrap()
    );

    let column = ColumnDefinition::integer("Restarts", "Number of restarts.").wide();
    assert_eq!(
        json!({
            "name": "Restarts",
            "type": "integer",
            "priority": 1,
            "description": "Number of restarts.",
        }),
        to_value(&column).unwrap()
    );
}

#[test]
fn cell_value_serialize_test() {
    let cells = vec![
        CellValue::from("api-5d4f7"),
        CellValue::from(3_i64),
        CellValue::from(true),
    ];
    assert_eq!(json!(["api-5d4f7", 3, true]), to_value(&cells).unwrap());
}

#[test]
fn row_condition_serialize_test() {
    let row = TableRow::with_conditions(
        vec!["api-5d4f7".into()],
        vec![RowCondition::completed("Succeeded", "The pod has completed successfully.")],
    );
    assert_eq!(
        json!({
            "cells": ["api-5d4f7"],
            "conditions": [{
                "type": "Completed",
                "status": "True",
                "reason": "Succeeded",
                "message": "The pod has completed successfully.",
            }],
        }),
        to_value(&row).unwrap()
    );
}

#[test]
fn table_serialize_test() {
    let table = Table {
        column_definitions: vec![ColumnDefinition::name("Name of the resource.")],
        rows: vec![TableRow::new(vec!["api-5d4f7".into()])],
        resource_version: "12345".to_owned(),
        continue_token: String::new(),
        remaining_item_count: Some(7),
    };

    assert_eq!(
        json!({
            "columnDefinitions": [{
                "name": "Name",
                "type": "string",
                "format": "name",
                "priority": 0,
                "description": "Name of the resource.",
            }],
            "rows": [{ "cells": ["api-5d4f7"] }],
            "resourceVersion": "12345",
            "remainingItemCount": 7,
        }),
        to_value(&table).unwrap()
    );
}
