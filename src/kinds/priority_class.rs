use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
};

pub const KIND: &str = "PriorityClass";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the priority class."),
        ColumnDefinition::integer("Value", "Priority assigned to pods using the class."),
        ColumnDefinition::boolean("Global-Default", "Whether the class is used for pods without a priority class."),
        ColumnDefinition::string("Age", "Time since the priority class was created."),
        ColumnDefinition::string("PreemptionPolicy", "Policy for preempting lower priority pods."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::PriorityClasses(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    Ok(list
        .items
        .iter()
        .map(|class| {
            TableRow::new(vec![
                object_name(&class.metadata).into(),
                class.value.into(),
                class.global_default.unwrap_or_default().into(),
                object_age(&class.metadata).into(),
                class.preemption_policy.clone().unwrap_or_default().into(),
            ])
        })
        .collect())
}
