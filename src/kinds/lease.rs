use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
};

pub const KIND: &str = "Lease";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the lease."),
        ColumnDefinition::string("Holder", "Identity of the current holder of the lease."),
        ColumnDefinition::string("Age", "Time since the lease was created."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::Leases(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    Ok(list
        .items
        .iter()
        .map(|lease| {
            TableRow::new(vec![
                object_name(&lease.metadata).into(),
                lease
                    .spec
                    .as_ref()
                    .and_then(|s| s.holder_identity.clone())
                    .unwrap_or_default()
                    .into(),
                object_age(&lease.metadata).into(),
            ])
        })
        .collect())
}
