use k8s_openapi::api::flowcontrol::v1::FlowSchema;

use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
};

#[cfg(test)]
#[path = "./flow_schema.tests.rs"]
mod flow_schema_tests;

pub const KIND: &str = "FlowSchema";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the flow schema."),
        ColumnDefinition::string("PriorityLevel", "Priority level configuration the schema points to."),
        ColumnDefinition::string("MatchingPrecedence", "Matching order of the schema, lower matches first."),
        ColumnDefinition::string("DistinguisherMethod", "How requests matching the schema are distinguished."),
        ColumnDefinition::string("Age", "Time since the flow schema was created."),
        ColumnDefinition::string("MissingPL", "References a broken or non-existent PriorityLevelConfiguration."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::FlowSchemas(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    // Schemas are evaluated in precedence order, so the rows are sorted the
    // same way, with the name as a tie breaker.
    let mut schemas: Vec<&FlowSchema> = list.items.iter().collect();
    schemas.sort_by(|left, right| {
        matching_precedence(left)
            .cmp(&matching_precedence(right))
            .then_with(|| left.metadata.name.cmp(&right.metadata.name))
    });

    let mut rows = Vec::with_capacity(schemas.len());
    for schema in schemas {
        let spec = schema.spec.as_ref();
        let priority_level = spec
            .map(|s| s.priority_level_configuration.name.clone())
            .unwrap_or_default();
        let distinguisher_method = spec
            .and_then(|s| s.distinguisher_method.as_ref())
            .map(|method| method.type_.clone())
            .unwrap_or_else(|| "<none>".to_owned());
        let dangling = schema
            .status
            .as_ref()
            .and_then(|s| s.conditions.as_deref())
            .unwrap_or_default()
            .iter()
            .find(|condition| condition.type_.as_deref() == Some("Dangling"))
            .map(|condition| condition.status.clone().unwrap_or_default())
            .unwrap_or_else(|| "?".to_owned());

        rows.push(TableRow::new(vec![
            object_name(&schema.metadata).into(),
            priority_level.into(),
            i64::from(matching_precedence(schema)).into(),
            distinguisher_method.into(),
            object_age(&schema.metadata).into(),
            dangling.into(),
        ]));
    }

    Ok(rows)
}

fn matching_precedence(schema: &FlowSchema) -> i32 {
    schema
        .spec
        .as_ref()
        .and_then(|s| s.matching_precedence)
        .unwrap_or_default()
}
