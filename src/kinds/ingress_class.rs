use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
};

pub const KIND: &str = "IngressClass";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the ingress class."),
        ColumnDefinition::string("Controller", "Controller responsible for handling the class."),
        ColumnDefinition::string("Parameters", "Reference to a resource with additional parameters."),
        ColumnDefinition::string("Age", "Time since the ingress class was created."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::IngressClasses(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for class in &list.items {
        let spec = class.spec.as_ref();
        let parameters = match spec.and_then(|s| s.parameters.as_ref()) {
            Some(parameters) => {
                let mut result = parameters.kind.clone();
                if let Some(group) = &parameters.api_group {
                    result = format!("{result}.{group}");
                }

                format!("{result}/{}", parameters.name)
            },
            None => "<none>".to_owned(),
        };

        rows.push(TableRow::new(vec![
            object_name(&class.metadata).into(),
            spec.and_then(|s| s.controller.clone()).unwrap_or_default().into(),
            parameters.into(),
            object_age(&class.metadata).into(),
        ]));
    }

    Ok(rows)
}
