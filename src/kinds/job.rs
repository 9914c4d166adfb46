use k8s_openapi::{api::batch::v1::JobCondition, chrono::Utc};

use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
    utils::{container_cells, format_duration, format_label_selector},
};

#[cfg(test)]
#[path = "./job.tests.rs"]
mod job_tests;

pub const KIND: &str = "Job";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the job."),
        ColumnDefinition::string("Status", "Status of the job."),
        ColumnDefinition::string("Completions", "Number of successful completions out of the desired count."),
        ColumnDefinition::string("Duration", "Time the job took to complete, or has been running for."),
        ColumnDefinition::string("Age", "Time since the job was created."),
        ColumnDefinition::string("Containers", "Names of the containers in the template.").wide(),
        ColumnDefinition::string("Images", "Images of the containers in the template.").wide(),
        ColumnDefinition::string("Selector", "Label selector matching the managed pods.").wide(),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::Jobs(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for job in &list.items {
        let spec = job.spec.as_ref();
        let status = job.status.as_ref();
        let conditions = status.and_then(|s| s.conditions.as_deref()).unwrap_or_default();
        let succeeded = status.and_then(|s| s.succeeded).unwrap_or_default();

        let completions = match spec.and_then(|s| s.completions) {
            Some(completions) => format!("{succeeded}/{completions}"),
            None => {
                let parallelism = spec.and_then(|s| s.parallelism).unwrap_or_default();
                if parallelism > 1 {
                    format!("{succeeded}/1 of {parallelism}")
                } else {
                    format!("{succeeded}/1")
                }
            },
        };

        let state = if has_condition(conditions, "Complete") {
            "Complete"
        } else if has_condition(conditions, "Failed") {
            "Failed"
        } else if job.metadata.deletion_timestamp.is_some() {
            "Terminating"
        } else if has_condition(conditions, "Suspended") {
            "Suspended"
        } else if has_condition(conditions, "FailureTarget") {
            "FailureTarget"
        } else {
            "Running"
        };

        let duration = match (
            status.and_then(|s| s.start_time.as_ref()),
            status.and_then(|s| s.completion_time.as_ref()),
        ) {
            (Some(start), Some(completion)) => format_duration(completion.0.signed_duration_since(start.0)),
            (Some(start), None) => format_duration(Utc::now().signed_duration_since(start.0)),
            (None, _) => String::new(),
        };

        let containers = spec
            .and_then(|s| s.template.spec.as_ref())
            .map(|s| s.containers.as_slice())
            .unwrap_or_default();
        let (names, images) = container_cells(containers);

        rows.push(TableRow::new(vec![
            object_name(&job.metadata).into(),
            state.into(),
            completions.into(),
            duration.into(),
            object_age(&job.metadata).into(),
            names.into(),
            images.into(),
            format_label_selector(spec.and_then(|s| s.selector.as_ref())).into(),
        ]));
    }

    Ok(rows)
}

fn has_condition(conditions: &[JobCondition], condition: &str) -> bool {
    conditions.iter().any(|c| c.type_ == condition && c.status == "True")
}
