use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
};

pub const KIND: &str = "Namespace";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the namespace."),
        ColumnDefinition::string("Status", "Phase of the namespace lifecycle."),
        ColumnDefinition::string("Age", "Time since the namespace was created."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::Namespaces(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    Ok(list
        .items
        .iter()
        .map(|namespace| {
            TableRow::new(vec![
                object_name(&namespace.metadata).into(),
                namespace
                    .status
                    .as_ref()
                    .and_then(|s| s.phase.clone())
                    .unwrap_or_default()
                    .into(),
                object_age(&namespace.metadata).into(),
            ])
        })
        .collect())
}
