use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
};

pub const KIND: &str = "ConfigMap";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the config map."),
        ColumnDefinition::string("Data", "Number of entries in the config map."),
        ColumnDefinition::string("Age", "Time since the config map was created."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::ConfigMaps(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    Ok(list
        .items
        .iter()
        .map(|config_map| {
            let entries = config_map.data.as_ref().map(|d| d.len()).unwrap_or_default()
                + config_map.binary_data.as_ref().map(|d| d.len()).unwrap_or_default();
            TableRow::new(vec![
                object_name(&config_map.metadata).into(),
                (entries as i64).into(),
                object_age(&config_map.metadata).into(),
            ])
        })
        .collect())
}
