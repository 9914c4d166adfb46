use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
    utils::{container_cells, format_label_selector},
};

pub const KIND: &str = "ReplicaSet";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the replica set."),
        ColumnDefinition::integer("Desired", "Desired number of replicas."),
        ColumnDefinition::integer("Current", "Most recently observed number of replicas."),
        ColumnDefinition::integer("Ready", "Number of ready replicas."),
        ColumnDefinition::string("Age", "Time since the replica set was created."),
        ColumnDefinition::string("Containers", "Names of the containers in the template.").wide(),
        ColumnDefinition::string("Images", "Images of the containers in the template.").wide(),
        ColumnDefinition::string("Selector", "Label selector matching the managed pods.").wide(),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::ReplicaSets(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for replica_set in &list.items {
        let spec = replica_set.spec.as_ref();
        let status = replica_set.status.as_ref();
        let desired = spec.and_then(|s| s.replicas).unwrap_or_default();
        let current = status.map(|s| s.replicas).unwrap_or_default();
        let ready = status.and_then(|s| s.ready_replicas).unwrap_or_default();

        let containers = spec
            .and_then(|s| s.template.as_ref())
            .and_then(|t| t.spec.as_ref())
            .map(|s| s.containers.as_slice())
            .unwrap_or_default();
        let (names, images) = container_cells(containers);

        rows.push(TableRow::new(vec![
            object_name(&replica_set.metadata).into(),
            i64::from(desired).into(),
            i64::from(current).into(),
            i64::from(ready).into(),
            object_age(&replica_set.metadata).into(),
            names.into(),
            images.into(),
            format_label_selector(spec.map(|s| &s.selector)).into(),
        ]));
    }

    Ok(rows)
}
