use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{CellValue, ColumnDefinition, TableRow},
};

pub const KIND: &str = "PriorityLevelConfiguration";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the priority level configuration."),
        ColumnDefinition::string("Type", "Type of the priority level (Exempt, Limited)."),
        ColumnDefinition::string("NominalConcurrencyShares", "Nominal concurrency shares of a limited level."),
        ColumnDefinition::string("Queues", "Number of queues of a queuing level."),
        ColumnDefinition::string("HandSize", "Shuffle sharding hand size of a queuing level."),
        ColumnDefinition::string("QueueLengthLimit", "Queue length limit of a queuing level."),
        ColumnDefinition::string("Age", "Time since the priority level configuration was created."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::PriorityLevelConfigurations(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for level in &list.items {
        let spec = level.spec.as_ref();
        let limited = spec.and_then(|s| s.limited.as_ref());
        let queuing = limited
            .and_then(|l| l.limit_response.as_ref())
            .and_then(|r| r.queuing.as_ref());

        let shares = optional_count(limited.and_then(|l| l.nominal_concurrency_shares));
        let queues = optional_count(queuing.and_then(|q| q.queues));
        let hand_size = optional_count(queuing.and_then(|q| q.hand_size));
        let queue_length_limit = optional_count(queuing.and_then(|q| q.queue_length_limit));

        rows.push(TableRow::new(vec![
            object_name(&level.metadata).into(),
            spec.map(|s| s.type_.clone()).unwrap_or_default().into(),
            shares,
            queues,
            hand_size,
            queue_length_limit,
            object_age(&level.metadata).into(),
        ]));
    }

    Ok(rows)
}

// Levels without queuing keep the placeholder in the numeric cells.
fn optional_count(value: Option<i32>) -> CellValue {
    match value {
        Some(value) => i64::from(value).into(),
        None => "<none>".into(),
    }
}
