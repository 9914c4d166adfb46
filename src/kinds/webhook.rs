use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
};

pub const MUTATING_KIND: &str = "MutatingWebhookConfiguration";
pub const VALIDATING_KIND: &str = "ValidatingWebhookConfiguration";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the webhook configuration."),
        ColumnDefinition::integer("Webhooks", "Number of webhooks registered in this configuration."),
        ColumnDefinition::string("Age", "Time since the webhook configuration was created."),
    ]
}

pub fn render_mutating(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::MutatingWebhookConfigurations(list) = list else {
        return Err(RenderError::unexpected_kind(MUTATING_KIND, list.kind()));
    };

    Ok(list
        .items
        .iter()
        .map(|configuration| {
            let count = configuration.webhooks.as_ref().map(Vec::len).unwrap_or_default();
            TableRow::new(vec![
                object_name(&configuration.metadata).into(),
                (count as i64).into(),
                object_age(&configuration.metadata).into(),
            ])
        })
        .collect())
}

pub fn render_validating(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::ValidatingWebhookConfigurations(list) = list else {
        return Err(RenderError::unexpected_kind(VALIDATING_KIND, list.kind()));
    };

    Ok(list
        .items
        .iter()
        .map(|configuration| {
            let count = configuration.webhooks.as_ref().map(Vec::len).unwrap_or_default();
            TableRow::new(vec![
                object_name(&configuration.metadata).into(),
                (count as i64).into(),
                object_age(&configuration.metadata).into(),
            ])
        })
        .collect())
}
