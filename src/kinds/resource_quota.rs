use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
};

#[cfg(test)]
#[path = "./resource_quota.tests.rs"]
mod resource_quota_tests;

pub const KIND: &str = "ResourceQuota";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the resource quota."),
        ColumnDefinition::string("Age", "Time since the resource quota was created."),
        ColumnDefinition::string("Request", "Usage and hard limit for requested resources."),
        ColumnDefinition::string("Limit", "Usage and hard limit for resource limits."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::ResourceQuotas(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for quota in &list.items {
        let status = quota.status.as_ref();
        let hard = status.and_then(|s| s.hard.as_ref());
        let used = status.and_then(|s| s.used.as_ref());

        let mut requests = Vec::new();
        let mut limits = Vec::new();
        // Hard limits are kept in a sorted map, so the columns come out in
        // resource name order.
        for (resource, hard_quantity) in hard.into_iter().flatten() {
            let used_quantity = used
                .and_then(|u| u.get(resource))
                .map(|quantity| quantity.0.as_str())
                .unwrap_or("0");
            let entry = format!("{resource}: {used_quantity}/{}", hard_quantity.0);
            if resource.split('.').next() == Some("limits") && resource.contains('.') {
                limits.push(entry);
            } else {
                requests.push(entry);
            }
        }

        rows.push(TableRow::new(vec![
            object_name(&quota.metadata).into(),
            object_age(&quota.metadata).into(),
            requests.join(", ").into(),
            limits.join(", ").into(),
        ]));
    }

    Ok(rows)
}
