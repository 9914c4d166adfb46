use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
    utils::container_cells,
};

pub const KIND: &str = "StatefulSet";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the stateful set."),
        ColumnDefinition::string("Ready", "Number of ready replicas out of the desired count."),
        ColumnDefinition::string("Age", "Time since the stateful set was created."),
        ColumnDefinition::string("Containers", "Names of the containers in the template.").wide(),
        ColumnDefinition::string("Images", "Images of the containers in the template.").wide(),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::StatefulSets(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for stateful_set in &list.items {
        let spec = stateful_set.spec.as_ref();
        let status = stateful_set.status.as_ref();
        let desired = spec.and_then(|s| s.replicas).unwrap_or_default();
        let ready = status.and_then(|s| s.ready_replicas).unwrap_or_default();

        let containers = spec
            .and_then(|s| s.template.spec.as_ref())
            .map(|s| s.containers.as_slice())
            .unwrap_or_default();
        let (names, images) = container_cells(containers);

        rows.push(TableRow::new(vec![
            object_name(&stateful_set.metadata).into(),
            format!("{ready}/{desired}").into(),
            object_age(&stateful_set.metadata).into(),
            names.into(),
            images.into(),
        ]));
    }

    Ok(rows)
}
