use k8s_openapi::{
    api::core::v1::{Container, Pod, PodCondition},
    apimachinery::pkg::apis::meta::v1::Time,
};

use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, RowCondition, TableRow},
    utils::format_timestamp_since,
};

#[cfg(test)]
#[path = "./pod.tests.rs"]
mod pod_tests;

pub const KIND: &str = "Pod";

/// Status reason set by the node controller on pods whose node stopped responding.
const NODE_UNREACHABLE_REASON: &str = "NodeLost";
const SCHEDULING_GATED_REASON: &str = "SchedulingGated";
const POD_INITIALIZING_REASON: &str = "PodInitializing";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the pod."),
        ColumnDefinition::string("Ready", "Number of containers in the pod that are ready."),
        ColumnDefinition::string("Status", "Aggregate status of the containers in the pod."),
        ColumnDefinition::string(
            "Restarts",
            "Number of container restarts, with the time of the last restart.",
        ),
        ColumnDefinition::string("Age", "Time since the pod was created."),
        ColumnDefinition::string("IP", "IP address allocated to the pod.").wide(),
        ColumnDefinition::string("Node", "Name of the node the pod is scheduled on.").wide(),
        ColumnDefinition::string("Nominated Node", "Name of the node the pod is nominated to run on.").wide(),
        ColumnDefinition::string("Readiness Gates", "Readiness gates satisfied by the pod.").wide(),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::Pods(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    Ok(list.items.iter().map(row).collect())
}

fn row(pod: &Pod) -> TableRow {
    let spec = pod.spec.as_ref();
    let status = pod.status.as_ref();
    let conditions = status.and_then(|s| s.conditions.as_deref()).unwrap_or_default();
    let containers = spec.map(|s| s.containers.as_slice()).unwrap_or_default();
    let init_containers = spec.and_then(|s| s.init_containers.as_deref()).unwrap_or_default();

    let phase = status.and_then(|s| s.phase.as_deref()).unwrap_or_default();
    let mut reason = status
        .and_then(|s| s.reason.clone())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| phase.to_owned());
    if conditions
        .iter()
        .any(|c| c.type_ == "PodScheduled" && c.reason.as_deref() == Some(SCHEDULING_GATED_REASON))
    {
        reason = SCHEDULING_GATED_REASON.to_owned();
    }

    let row_conditions = match phase {
        "Succeeded" => vec![RowCondition::completed("Succeeded", "The pod has completed successfully.")],
        "Failed" => vec![RowCondition::completed("Failed", "The pod failed.")],
        _ => Vec::new(),
    };

    let restartable_init = |name: &str| {
        init_containers
            .iter()
            .find(|c| c.name == name)
            .is_some_and(is_restartable_init_container)
    };

    let mut total_containers = containers.len();
    let mut ready_containers = 0usize;
    let mut restarts: i64 = 0;
    let mut last_restart: Option<Time> = None;
    let mut restartable_init_restarts: i64 = 0;
    let mut last_restartable_init_restart: Option<Time> = None;

    for container in init_containers {
        if is_restartable_init_container(container) {
            total_containers += 1;
        }
    }

    let init_statuses = status.and_then(|s| s.init_container_statuses.as_deref()).unwrap_or_default();
    let mut initializing = false;
    for (index, container) in init_statuses.iter().enumerate() {
        restarts += i64::from(container.restart_count);
        let last_finished = container
            .last_state
            .as_ref()
            .and_then(|s| s.terminated.as_ref())
            .and_then(|t| t.finished_at.as_ref());
        if let Some(finished) = last_finished {
            if last_restart.as_ref().is_none_or(|last| last.0 < finished.0) {
                last_restart = Some(finished.clone());
            }
        }

        let restartable = restartable_init(&container.name);
        if restartable {
            restartable_init_restarts += i64::from(container.restart_count);
            if let Some(finished) = last_finished {
                if last_restartable_init_restart
                    .as_ref()
                    .is_none_or(|last| last.0 < finished.0)
                {
                    last_restartable_init_restart = Some(finished.clone());
                }
            }
        }

        let state = container.state.as_ref();
        let terminated = state.and_then(|s| s.terminated.as_ref());
        if terminated.is_some_and(|t| t.exit_code == 0) {
            // The init container finished cleanly, move on to the next one.
            continue;
        }

        if restartable && container.started == Some(true) {
            if container.ready {
                ready_containers += 1;
            }

            continue;
        }

        if let Some(terminated) = terminated {
            reason = match terminated.reason.as_deref() {
                Some(r) if !r.is_empty() => format!("Init:{r}"),
                _ => match terminated.signal {
                    Some(signal) if signal != 0 => format!("Init:Signal:{signal}"),
                    _ => format!("Init:ExitCode:{}", terminated.exit_code),
                },
            };
        } else if let Some(waiting) = state
            .and_then(|s| s.waiting.as_ref())
            .and_then(|w| w.reason.as_deref())
            .filter(|r| !r.is_empty() && *r != POD_INITIALIZING_REASON)
        {
            reason = format!("Init:{waiting}");
        } else {
            reason = format!("Init:{index}/{}", init_containers.len());
        }

        initializing = true;
        break;
    }

    if !initializing || is_pod_initialized(conditions) {
        // Restarts of regular init containers are no longer interesting once
        // initialization is over, restartable ones keep counting.
        restarts = restartable_init_restarts;
        last_restart = last_restartable_init_restart;

        let mut has_running = false;
        let container_statuses = status.and_then(|s| s.container_statuses.as_deref()).unwrap_or_default();
        for container in container_statuses.iter().rev() {
            restarts += i64::from(container.restart_count);
            if let Some(finished) = container
                .last_state
                .as_ref()
                .and_then(|s| s.terminated.as_ref())
                .and_then(|t| t.finished_at.as_ref())
            {
                if last_restart.as_ref().is_none_or(|last| last.0 < finished.0) {
                    last_restart = Some(finished.clone());
                }
            }

            let state = container.state.as_ref();
            let terminated = state.and_then(|s| s.terminated.as_ref());
            if let Some(waiting) = state
                .and_then(|s| s.waiting.as_ref())
                .and_then(|w| w.reason.as_deref())
                .filter(|r| !r.is_empty())
            {
                reason = waiting.to_owned();
            } else if let Some(r) = terminated.and_then(|t| t.reason.as_deref()).filter(|r| !r.is_empty()) {
                reason = r.to_owned();
            } else if let Some(terminated) = terminated {
                reason = match terminated.signal {
                    Some(signal) if signal != 0 => format!("Signal:{signal}"),
                    _ => format!("ExitCode:{}", terminated.exit_code),
                };
            } else if container.ready && state.is_some_and(|s| s.running.is_some()) {
                has_running = true;
                ready_containers += 1;
            }
        }

        // All containers terminated but at least one keeps running, the pod
        // is either serving or waiting for readiness again.
        if reason == "Completed" && has_running {
            if has_pod_ready_condition(conditions) {
                reason = "Running".to_owned();
            } else {
                reason = "NotReady".to_owned();
            }
        }
    }

    if pod.metadata.deletion_timestamp.is_some() {
        if status.and_then(|s| s.reason.as_deref()) == Some(NODE_UNREACHABLE_REASON) {
            reason = "Unknown".to_owned();
        } else if !is_pod_phase_terminal(phase) {
            reason = "Terminating".to_owned();
        }
    }

    let mut restarts_cell = restarts.to_string();
    if restarts != 0 {
        if let Some(last) = &last_restart {
            restarts_cell = format!("{restarts} ({} ago)", format_timestamp_since(Some(last)));
        }
    }

    let pod_ip = status
        .and_then(|s| s.pod_ips.as_ref())
        .and_then(|ips| ips.first())
        .map(|ip| ip.ip.as_str())
        .filter(|ip| !ip.is_empty())
        .unwrap_or("<none>");
    let node_name = spec
        .and_then(|s| s.node_name.as_deref())
        .filter(|n| !n.is_empty())
        .unwrap_or("<none>");
    let nominated_node = status
        .and_then(|s| s.nominated_node_name.as_deref())
        .filter(|n| !n.is_empty())
        .unwrap_or("<none>");

    let readiness_gates = match spec.and_then(|s| s.readiness_gates.as_deref()).filter(|g| !g.is_empty()) {
        Some(gates) => {
            let ready = gates
                .iter()
                .filter(|gate| {
                    conditions
                        .iter()
                        .find(|c| c.type_ == gate.condition_type)
                        .is_some_and(|c| c.status == "True")
                })
                .count();
            format!("{ready}/{}", gates.len())
        },
        None => "<none>".to_owned(),
    };

    TableRow::with_conditions(
        vec![
            object_name(&pod.metadata).into(),
            format!("{ready_containers}/{total_containers}").into(),
            reason.into(),
            restarts_cell.into(),
            object_age(&pod.metadata).into(),
            pod_ip.into(),
            node_name.into(),
            nominated_node.into(),
            readiness_gates.into(),
        ],
        row_conditions,
    )
}

/// Returns `true` for init containers that keep running alongside the main
/// containers (sidecars).
pub(crate) fn is_restartable_init_container(container: &Container) -> bool {
    container.restart_policy.as_deref() == Some("Always")
}

fn is_pod_phase_terminal(phase: &str) -> bool {
    phase == "Failed" || phase == "Succeeded"
}

fn is_pod_initialized(conditions: &[PodCondition]) -> bool {
    conditions
        .iter()
        .find(|c| c.type_ == "Initialized")
        .is_some_and(|c| c.status == "True")
}

fn has_pod_ready_condition(conditions: &[PodCondition]) -> bool {
    conditions.iter().any(|c| c.type_ == "Ready" && c.status == "True")
}
