use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
    utils::format_int_or_string,
};

pub const KIND: &str = "PodDisruptionBudget";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the pod disruption budget."),
        ColumnDefinition::string("Min Available", "Minimum number of pods that must stay available."),
        ColumnDefinition::string("Max Unavailable", "Maximum number of pods that may be unavailable."),
        ColumnDefinition::integer("Allowed Disruptions", "Number of pods that may be disrupted right now."),
        ColumnDefinition::string("Age", "Time since the pod disruption budget was created."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::PodDisruptionBudgets(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    Ok(list
        .items
        .iter()
        .map(|budget| {
            let spec = budget.spec.as_ref();
            let min_available = spec
                .and_then(|s| s.min_available.as_ref())
                .map(format_int_or_string)
                .unwrap_or_else(|| "N/A".to_owned());
            let max_unavailable = spec
                .and_then(|s| s.max_unavailable.as_ref())
                .map(format_int_or_string)
                .unwrap_or_else(|| "N/A".to_owned());
            let allowed = budget
                .status
                .as_ref()
                .map(|s| s.disruptions_allowed)
                .unwrap_or_default();

            TableRow::new(vec![
                object_name(&budget.metadata).into(),
                min_available.into(),
                max_unavailable.into(),
                i64::from(allowed).into(),
                object_age(&budget.metadata).into(),
            ])
        })
        .collect())
}
