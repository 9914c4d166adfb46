use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
};

pub const KIND: &str = "Secret";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the secret."),
        ColumnDefinition::string("Type", "Type used to facilitate programmatic handling of the data."),
        ColumnDefinition::string("Data", "Number of entries in the secret."),
        ColumnDefinition::string("Age", "Time since the secret was created."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::Secrets(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    Ok(list
        .items
        .iter()
        .map(|secret| {
            let entries = secret.data.as_ref().map(|d| d.len()).unwrap_or_default();
            TableRow::new(vec![
                object_name(&secret.metadata).into(),
                secret.type_.clone().unwrap_or_default().into(),
                (entries as i64).into(),
                object_age(&secret.metadata).into(),
            ])
        })
        .collect())
}
