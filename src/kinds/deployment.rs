use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
    utils::{container_cells, label_selector_string},
};

pub const KIND: &str = "Deployment";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the deployment."),
        ColumnDefinition::string("Ready", "Number of ready replicas out of the desired count."),
        ColumnDefinition::string("Up-to-date", "Number of replicas updated to the desired template."),
        ColumnDefinition::string("Available", "Number of replicas available to users."),
        ColumnDefinition::string("Age", "Time since the deployment was created."),
        ColumnDefinition::string("Containers", "Names of the containers in the template.").wide(),
        ColumnDefinition::string("Images", "Images of the containers in the template.").wide(),
        ColumnDefinition::string("Selector", "Label selector matching the managed pods.").wide(),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::Deployments(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for deployment in &list.items {
        let spec = deployment.spec.as_ref();
        let status = deployment.status.as_ref();
        let desired = spec.and_then(|s| s.replicas).unwrap_or_default();
        let ready = status.and_then(|s| s.ready_replicas).unwrap_or_default();
        let updated = status.and_then(|s| s.updated_replicas).unwrap_or_default();
        let available = status.and_then(|s| s.available_replicas).unwrap_or_default();

        let containers = spec
            .and_then(|s| s.template.spec.as_ref())
            .map(|s| s.containers.as_slice())
            .unwrap_or_default();
        let (names, images) = container_cells(containers);
        let selector = match label_selector_string(spec.map(|s| &s.selector)) {
            Some(selector) => selector,
            None => "<invalid>".to_owned(),
        };

        rows.push(TableRow::new(vec![
            object_name(&deployment.metadata).into(),
            format!("{ready}/{desired}").into(),
            i64::from(updated).into(),
            i64::from(available).into(),
            object_age(&deployment.metadata).into(),
            names.into(),
            images.into(),
            selector.into(),
        ]));
    }

    Ok(rows)
}
