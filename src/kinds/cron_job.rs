use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
    utils::{container_cells, format_bool_option, format_label_selector, format_timestamp_since},
};

pub const KIND: &str = "CronJob";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the cron job."),
        ColumnDefinition::string("Schedule", "Schedule in cron format."),
        ColumnDefinition::string("Timezone", "Time zone for the schedule."),
        ColumnDefinition::boolean("Suspend", "Tells whether subsequent executions are suspended."),
        ColumnDefinition::integer("Active", "Number of currently running jobs."),
        ColumnDefinition::string("Last Schedule", "Time since the last successful schedule."),
        ColumnDefinition::string("Age", "Time since the cron job was created."),
        ColumnDefinition::string("Containers", "Names of the containers in the template.").wide(),
        ColumnDefinition::string("Images", "Images of the containers in the template.").wide(),
        ColumnDefinition::string("Selector", "Label selector matching the managed pods.").wide(),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::CronJobs(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for cron_job in &list.items {
        let spec = cron_job.spec.as_ref();
        let status = cron_job.status.as_ref();

        let schedule = spec.map(|s| s.schedule.clone()).unwrap_or_default();
        let time_zone = spec
            .and_then(|s| s.time_zone.clone())
            .unwrap_or_else(|| "<none>".to_owned());
        let active = status.and_then(|s| s.active.as_ref()).map(Vec::len).unwrap_or_default();
        let last_schedule = match status.and_then(|s| s.last_schedule_time.as_ref()) {
            Some(time) => format_timestamp_since(Some(time)),
            None => "<none>".to_owned(),
        };

        let job_spec = spec.and_then(|s| s.job_template.spec.as_ref());
        let containers = job_spec
            .and_then(|s| s.template.spec.as_ref())
            .map(|s| s.containers.as_slice())
            .unwrap_or_default();
        let (names, images) = container_cells(containers);

        rows.push(TableRow::new(vec![
            object_name(&cron_job.metadata).into(),
            schedule.into(),
            time_zone.into(),
            format_bool_option(spec.and_then(|s| s.suspend)).into(),
            (active as i64).into(),
            last_schedule.into(),
            object_age(&cron_job.metadata).into(),
            names.into(),
            images.into(),
            format_label_selector(job_spec.and_then(|s| s.selector.as_ref())).into(),
        ]));
    }

    Ok(rows)
}
