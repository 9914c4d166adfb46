use k8s_openapi::{
    api::autoscaling::v2::{MetricSpec, MetricStatus, MetricTarget, MetricValueStatus},
    apimachinery::pkg::api::resource::Quantity,
};

use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
};

#[cfg(test)]
#[path = "./horizontal_pod_autoscaler.tests.rs"]
mod horizontal_pod_autoscaler_tests;

pub const KIND: &str = "HorizontalPodAutoscaler";

const MAX_METRICS: usize = 2;

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the autoscaler."),
        ColumnDefinition::string("Reference", "Scaled resource the autoscaler manages."),
        ColumnDefinition::string("Targets", "Current and target values of the configured metrics."),
        ColumnDefinition::string("MinPods", "Lower limit for the number of replicas."),
        ColumnDefinition::string("MaxPods", "Upper limit for the number of replicas."),
        ColumnDefinition::string("Replicas", "Current number of replicas."),
        ColumnDefinition::string("Age", "Time since the autoscaler was created."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::HorizontalPodAutoscalers(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for autoscaler in &list.items {
        let spec = autoscaler.spec.as_ref();
        let status = autoscaler.status.as_ref();

        let reference = spec
            .map(|s| format!("{}/{}", s.scale_target_ref.kind, s.scale_target_ref.name))
            .unwrap_or_default();
        let metrics = format_metrics(
            spec.and_then(|s| s.metrics.as_deref()).unwrap_or_default(),
            status.and_then(|s| s.current_metrics.as_deref()).unwrap_or_default(),
        );
        let min_pods = match spec.and_then(|s| s.min_replicas) {
            Some(min) => min.to_string(),
            None => "<unset>".to_owned(),
        };
        let max_pods = spec.map(|s| s.max_replicas).unwrap_or_default();
        let replicas = status.and_then(|s| s.current_replicas).unwrap_or_default();

        rows.push(TableRow::new(vec![
            object_name(&autoscaler.metadata).into(),
            reference.into(),
            metrics.into(),
            min_pods.into(),
            i64::from(max_pods).into(),
            i64::from(replicas).into(),
            object_age(&autoscaler.metadata).into(),
        ]));
    }

    Ok(rows)
}

fn format_metrics(specs: &[MetricSpec], statuses: &[MetricStatus]) -> String {
    if specs.is_empty() {
        return "<none>".to_owned();
    }

    let mut list = Vec::new();
    for (index, spec) in specs.iter().enumerate() {
        let entry = match spec.type_.as_str() {
            "External" => spec.external.as_ref().map(|source| {
                value_pair(
                    &source.target,
                    statuses.get(index).and_then(|s| s.external.as_ref()).map(|s| &s.current),
                )
            }),
            "Pods" => spec.pods.as_ref().map(|source| {
                let current = statuses
                    .get(index)
                    .and_then(|s| s.pods.as_ref())
                    .and_then(|s| s.current.average_value.as_ref());
                format!(
                    "{}/{}",
                    quantity(current),
                    quantity(source.target.average_value.as_ref())
                )
            }),
            "Object" => spec.object.as_ref().map(|source| {
                value_pair(
                    &source.target,
                    statuses.get(index).and_then(|s| s.object.as_ref()).map(|s| &s.current),
                )
            }),
            "Resource" => spec.resource.as_ref().map(|source| {
                let current = statuses.get(index).and_then(|s| s.resource.as_ref()).map(|s| &s.current);
                format!("{}: {}", source.name, resource_pair(&source.target, current))
            }),
            "ContainerResource" => spec.container_resource.as_ref().map(|source| {
                let current = statuses
                    .get(index)
                    .and_then(|s| s.container_resource.as_ref())
                    .map(|s| &s.current);
                format!("{}: {}", source.name, resource_pair(&source.target, current))
            }),
            _ => None,
        };

        list.push(entry.unwrap_or_else(|| "<unknown type>".to_owned()));
    }

    let count = list.len();
    let more = count > MAX_METRICS;
    if more {
        list.truncate(MAX_METRICS);
    }

    let joined = list.join(", ");
    if more {
        format!("{joined} + {} more...", count - MAX_METRICS)
    } else {
        joined
    }
}

/// Formats `current/target`, marking average-based targets with `(avg)`.
fn value_pair(target: &MetricTarget, current: Option<&MetricValueStatus>) -> String {
    if let Some(target_average) = &target.average_value {
        let current = current.and_then(|c| c.average_value.as_ref());
        format!("{}/{} (avg)", quantity(current), target_average.0)
    } else {
        let current = current.and_then(|c| c.value.as_ref());
        format!("{}/{}", quantity(current), quantity(target.value.as_ref()))
    }
}

/// Formats `current/target` for resource metrics, falling back to utilization
/// percentages when no average value is configured.
fn resource_pair(target: &MetricTarget, current: Option<&MetricValueStatus>) -> String {
    if let Some(target_average) = &target.average_value {
        let current = current.and_then(|c| c.average_value.as_ref());
        return format!("{}/{}", quantity(current), target_average.0);
    }

    let current = match current.and_then(|c| c.average_utilization) {
        Some(utilization) => format!("{utilization}%"),
        None => "<unknown>".to_owned(),
    };
    let target = match target.average_utilization {
        Some(utilization) => format!("{utilization}%"),
        None => "<auto>".to_owned(),
    };

    format!("{current}/{target}")
}

fn quantity(value: Option<&Quantity>) -> &str {
    value.map(|quantity| quantity.0.as_str()).unwrap_or("<unknown>")
}
