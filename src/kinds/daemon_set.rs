use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
    utils::{container_cells, format_label_selector, format_labels},
};

pub const KIND: &str = "DaemonSet";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the daemon set."),
        ColumnDefinition::integer("Desired", "Number of nodes that should run the daemon pod."),
        ColumnDefinition::integer("Current", "Number of nodes running at least one daemon pod."),
        ColumnDefinition::integer("Ready", "Number of nodes running a ready daemon pod."),
        ColumnDefinition::integer("Up-to-date", "Number of nodes running the updated daemon pod."),
        ColumnDefinition::integer("Available", "Number of nodes with an available daemon pod."),
        ColumnDefinition::string("Node Selector", "Node labels the daemon pods are scheduled to."),
        ColumnDefinition::string("Age", "Time since the daemon set was created."),
        ColumnDefinition::string("Containers", "Names of the containers in the template.").wide(),
        ColumnDefinition::string("Images", "Images of the containers in the template.").wide(),
        ColumnDefinition::string("Selector", "Label selector matching the managed pods.").wide(),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::DaemonSets(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for daemon_set in &list.items {
        let spec = daemon_set.spec.as_ref();
        let status = daemon_set.status.as_ref();
        let desired = status.map(|s| s.desired_number_scheduled).unwrap_or_default();
        let current = status.map(|s| s.current_number_scheduled).unwrap_or_default();
        let ready = status.map(|s| s.number_ready).unwrap_or_default();
        let updated = status.and_then(|s| s.updated_number_scheduled).unwrap_or_default();
        let available = status.and_then(|s| s.number_available).unwrap_or_default();

        let template_spec = spec.and_then(|s| s.template.spec.as_ref());
        let containers = template_spec.map(|s| s.containers.as_slice()).unwrap_or_default();
        let (names, images) = container_cells(containers);
        let node_selector = format_labels(template_spec.and_then(|s| s.node_selector.as_ref()));

        rows.push(TableRow::new(vec![
            object_name(&daemon_set.metadata).into(),
            i64::from(desired).into(),
            i64::from(current).into(),
            i64::from(ready).into(),
            i64::from(updated).into(),
            i64::from(available).into(),
            node_selector.into(),
            object_age(&daemon_set.metadata).into(),
            names.into(),
            images.into(),
            format_label_selector(spec.map(|s| &s.selector)).into(),
        ]));
    }

    Ok(rows)
}
