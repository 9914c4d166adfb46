use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
    utils::format_label_selector,
};

#[cfg(test)]
#[path = "./network_policy.tests.rs"]
mod network_policy_tests;

pub const KIND: &str = "NetworkPolicy";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the network policy."),
        ColumnDefinition::string("Pod-Selector", "Label selector of the pods the policy applies to."),
        ColumnDefinition::string("Age", "Time since the network policy was created."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::NetworkPolicies(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    Ok(list
        .items
        .iter()
        .map(|policy| {
            TableRow::new(vec![
                object_name(&policy.metadata).into(),
                format_label_selector(policy.spec.as_ref().and_then(|s| s.pod_selector.as_ref())).into(),
                object_age(&policy.metadata).into(),
            ])
        })
        .collect())
}
