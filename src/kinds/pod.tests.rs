use k8s_openapi::{
    List,
    api::core::v1::{
        ContainerState, ContainerStateRunning, ContainerStateTerminated, ContainerStateWaiting, ContainerStatus,
        PodSpec, PodStatus,
    },
    apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta},
    chrono::{Duration, Utc},
};
use rstest::rstest;

use crate::table::{CellValue, ConditionStatus, RowConditionType};

use super::*;

fn as_list(pods: Vec<Pod>) -> ResourceList {
    List {
        items: pods,
        metadata: ListMeta::default(),
    }
    .into()
}

fn render_single(pod: Pod) -> TableRow {
    let rows = render(&as_list(vec![pod])).unwrap();
    assert_eq!(1, rows.len());
    rows.into_iter().next().unwrap()
}

fn running_container(name: &str, ready: bool) -> ContainerStatus {
    ContainerStatus {
        name: name.to_owned(),
        ready,
        state: Some(ContainerState {
            running: Some(ContainerStateRunning::default()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn terminated_container(name: &str, exit_code: i32, reason: Option<&str>) -> ContainerStatus {
    ContainerStatus {
        name: name.to_owned(),
        state: Some(ContainerState {
            terminated: Some(ContainerStateTerminated {
                exit_code,
                reason: reason.map(ToString::to_string),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn waiting_container(name: &str, reason: &str) -> ContainerStatus {
    ContainerStatus {
        name: name.to_owned(),
        state: Some(ContainerState {
            waiting: Some(ContainerStateWaiting {
                reason: Some(reason.to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn condition(type_: &str, status: &str) -> PodCondition {
    PodCondition {
        type_: type_.to_owned(),
        status: status.to_owned(),
        ..Default::default()
    }
}

fn pod(
    containers: &[&str],
    init_containers: &[(&str, bool)],
    phase: &str,
    statuses: Vec<ContainerStatus>,
    init_statuses: Vec<ContainerStatus>,
) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some("api-5d4f7".to_owned()),
            ..Default::default()
        },
        spec: Some(PodSpec {
            containers: containers
                .iter()
                .map(|name| Container {
                    name: (*name).to_owned(),
                    ..Default::default()
                })
                .collect(),
            init_containers: Some(
                init_containers
                    .iter()
                    .map(|(name, restartable)| Container {
                        name: (*name).to_owned(),
                        restart_policy: restartable.then(|| "Always".to_owned()),
                        ..Default::default()
                    })
                    .collect(),
            ),
            ..Default::default()
        }),
        status: Some(PodStatus {
            phase: Some(phase.to_owned()),
            container_statuses: Some(statuses),
            init_container_statuses: Some(init_statuses),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[test]
fn render_running_pod_test() {
    let pod = pod(&["api"], &[], "Running", vec![running_container("api", true)], Vec::new());
    let row = render_single(pod);

    assert_eq!(CellValue::from("1/1"), row.cells[1]);
    assert_eq!(CellValue::from("Running"), row.cells[2]);
    assert_eq!(CellValue::from("0"), row.cells[3]);
    assert!(row.conditions.is_empty());
}

#[test]
fn render_succeeded_pod_test() {
    let pod = pod(
        &["api"],
        &[],
        "Succeeded",
        vec![terminated_container("api", 0, Some("Completed"))],
        Vec::new(),
    );
    let row = render_single(pod);

    assert_eq!(CellValue::from("0/1"), row.cells[1]);
    assert_eq!(CellValue::from("Completed"), row.cells[2]);
    assert_eq!(1, row.conditions.len());
    assert_eq!(RowConditionType::Completed, row.conditions[0].condition_type);
    assert_eq!(ConditionStatus::True, row.conditions[0].status);
    assert_eq!("Succeeded", row.conditions[0].reason);
}

#[test]
fn render_failed_pod_condition_test() {
    let pod = pod(&["api"], &[], "Failed", Vec::new(), Vec::new());
    let row = render_single(pod);

    assert_eq!("Failed", row.conditions[0].reason);
    assert_eq!("The pod failed.", row.conditions[0].message);
}

#[rstest]
#[case("Init:ExitCode:2", terminated_container("setup", 2, None))]
#[case("Init:Error", terminated_container("setup", 1, Some("Error")))]
#[case("Init:CrashLoopBackOff", waiting_container("setup", "CrashLoopBackOff"))]
fn render_failing_init_container_test(#[case] expected: &str, #[case] status: ContainerStatus) {
    let pod = pod(
        &["api"],
        &[("setup", false), ("migrate", false)],
        "Pending",
        Vec::new(),
        vec![status],
    );

    let row = render_single(pod);
    assert_eq!(CellValue::from(expected), row.cells[2]);
}

#[test]
fn render_initializing_pod_test() {
    // PodInitializing is not worth reporting, the progress counter is.
    let pod = pod(
        &["api"],
        &[("setup", false), ("migrate", false)],
        "Pending",
        Vec::new(),
        vec![waiting_container("setup", "PodInitializing")],
    );

    let row = render_single(pod);
    assert_eq!(CellValue::from("Init:0/2"), row.cells[2]);
    assert_eq!(CellValue::from("0/1"), row.cells[1]);
}

#[test]
fn render_sidecar_pod_test() {
    let mut sidecar = running_container("proxy", true);
    sidecar.started = Some(true);

    let mut pod = pod(
        &["api"],
        &[("proxy", true)],
        "Running",
        vec![running_container("api", true)],
        vec![sidecar],
    );
    pod.status.as_mut().unwrap().conditions = Some(vec![condition("Initialized", "True")]);

    let row = render_single(pod);
    assert_eq!(CellValue::from("2/2"), row.cells[1]);
    assert_eq!(CellValue::from("Running"), row.cells[2]);
}

#[test]
fn render_completed_with_running_test() {
    let statuses = vec![terminated_container("job", 0, Some("Completed")), running_container("api", true)];
    let mut pod = pod(&["job", "api"], &[], "Running", statuses, Vec::new());
    pod.status.as_mut().unwrap().conditions = Some(vec![condition("Ready", "True")]);
    assert_eq!(CellValue::from("Running"), render_single(pod.clone()).cells[2]);

    pod.status.as_mut().unwrap().conditions = Some(vec![condition("Ready", "False")]);
    assert_eq!(CellValue::from("NotReady"), render_single(pod).cells[2]);
}

#[test]
fn render_restarts_test() {
    let mut container = running_container("api", true);
    container.restart_count = 3;
    container.last_state = Some(ContainerState {
        terminated: Some(ContainerStateTerminated {
            exit_code: 1,
            finished_at: Some(Time(Utc::now() - Duration::minutes(5))),
            ..Default::default()
        }),
        ..Default::default()
    });

    let pod = pod(&["api"], &[], "Running", vec![container], Vec::new());
    let row = render_single(pod);
    let CellValue::String(restarts) = &row.cells[3] else {
        panic!("restarts cell is not a string");
    };
    assert!(restarts.starts_with("3 ("), "unexpected restarts cell: {restarts}");
    assert!(restarts.ends_with(" ago)"), "unexpected restarts cell: {restarts}");
}

#[test]
fn render_terminating_pod_test() {
    let mut pod = pod(&["api"], &[], "Running", vec![running_container("api", true)], Vec::new());
    pod.metadata.deletion_timestamp = Some(Time(Utc::now()));
    assert_eq!(CellValue::from("Terminating"), render_single(pod.clone()).cells[2]);

    // Deleted pods in a terminal phase keep their phase.
    pod.status.as_mut().unwrap().phase = Some("Succeeded".to_owned());
    pod.status.as_mut().unwrap().container_statuses = None;
    assert_eq!(CellValue::from("Succeeded"), render_single(pod).cells[2]);
}

#[test]
fn render_unreachable_node_test() {
    let mut pod = pod(&["api"], &[], "Running", Vec::new(), Vec::new());
    pod.metadata.deletion_timestamp = Some(Time(Utc::now()));
    pod.status.as_mut().unwrap().reason = Some("NodeLost".to_owned());

    assert_eq!(CellValue::from("Unknown"), render_single(pod).cells[2]);
}

#[test]
fn render_scheduling_gated_test() {
    let mut pod = pod(&["api"], &[], "Pending", Vec::new(), Vec::new());
    pod.status.as_mut().unwrap().conditions = Some(vec![PodCondition {
        reason: Some("SchedulingGated".to_owned()),
        ..condition("PodScheduled", "False")
    }]);

    assert_eq!(CellValue::from("SchedulingGated"), render_single(pod).cells[2]);
}

#[test]
fn render_wide_cells_test() {
    let pod = pod(&["api"], &[], "Running", Vec::new(), Vec::new());
    let row = render_single(pod);

    assert_eq!(9, row.cells.len());
    assert_eq!(CellValue::from("<none>"), row.cells[5]);
    assert_eq!(CellValue::from("<none>"), row.cells[6]);
    assert_eq!(CellValue::from("<none>"), row.cells[7]);
    assert_eq!(CellValue::from("<none>"), row.cells[8]);
}

#[test]
fn render_unexpected_kind_test() {
    let list: ResourceList = List::<k8s_openapi::api::core::v1::Service> {
        items: Vec::new(),
        metadata: ListMeta::default(),
    }
    .into();

    let result = render(&list);
    assert!(matches!(
        result,
        Err(RenderError::UnexpectedKind {
            handler: "Pod",
            actual: "Service",
        })
    ));
}
