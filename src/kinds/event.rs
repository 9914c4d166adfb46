use k8s_openapi::api::core::v1::Event;

use crate::{
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
    utils::{format_micro_timestamp_since, format_timestamp_since},
};

#[cfg(test)]
#[path = "./event.tests.rs"]
mod event_tests;

pub const KIND: &str = "Event";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::string("Last Seen", "Time since the event was last observed."),
        ColumnDefinition::string("Type", "Type of the event (Normal, Warning)."),
        ColumnDefinition::string("Reason", "Short, machine understandable reason for the event."),
        ColumnDefinition::string("Object", "Object the event is about."),
        ColumnDefinition::string("Subobject", "Object field path the event is about.").wide(),
        ColumnDefinition::string("Source", "Component reporting the event.").wide(),
        ColumnDefinition::string("Message", "Human readable description of the event."),
        ColumnDefinition::string("First Seen", "Time since the event was first observed.").wide(),
        ColumnDefinition::string("Count", "Number of times the event has occurred.").wide(),
        ColumnDefinition::name("Name of the event.").wide(),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::Events(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for event in &list.items {
        let first_seen = match &event.first_timestamp {
            Some(timestamp) => format_timestamp_since(Some(timestamp)),
            None => format_micro_timestamp_since(event.event_time.as_ref()),
        };
        let mut last_seen = match &event.last_timestamp {
            Some(timestamp) => format_timestamp_since(Some(timestamp)),
            None => first_seen.clone(),
        };

        let mut count = event.count.unwrap_or_default();
        if let Some(series) = &event.series {
            last_seen = format_micro_timestamp_since(series.last_observed_time.as_ref());
            count = series.count.unwrap_or_default();
        } else if count == 0 {
            // Singleton events don't have a count set in the new API.
            count = 1;
        }

        let kind = event
            .involved_object
            .kind
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();
        let target = match event.involved_object.name.as_deref() {
            Some(name) if !name.is_empty() => format!("{kind}/{name}"),
            _ => kind,
        };

        rows.push(TableRow::new(vec![
            last_seen.into(),
            event.type_.clone().unwrap_or_default().into(),
            event.reason.clone().unwrap_or_default().into(),
            target.into(),
            event
                .involved_object
                .field_path
                .clone()
                .unwrap_or_default()
                .into(),
            format_source(event).into(),
            event.message.as_deref().unwrap_or_default().trim().into(),
            first_seen.into(),
            i64::from(count).into(),
            event.metadata.name.clone().unwrap_or_default().into(),
        ]));
    }

    Ok(rows)
}

/// Joins the reporting component and host, preferring the legacy source
/// fields when they are set.
fn format_source(event: &Event) -> String {
    let source = event.source.as_ref();
    let component = first_non_empty(
        source.and_then(|s| s.component.as_deref()),
        event.reporting_component.as_deref(),
    );
    let instance = first_non_empty(
        source.and_then(|s| s.host.as_deref()),
        event.reporting_instance.as_deref(),
    );

    if instance.is_empty() {
        component.to_owned()
    } else {
        format!("{component}, {instance}")
    }
}

fn first_non_empty<'a>(first: Option<&'a str>, second: Option<&'a str>) -> &'a str {
    match first {
        Some(value) if !value.is_empty() => value,
        _ => second.unwrap_or_default(),
    }
}
