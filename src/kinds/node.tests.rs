use std::collections::BTreeMap;

use k8s_openapi::{
    List,
    api::core::v1::{NodeAddress, NodeCondition, NodeSpec, NodeStatus, NodeSystemInfo},
    apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta},
};
use rstest::rstest;

use crate::table::CellValue;

use super::*;

fn node(conditions: Vec<NodeCondition>, unschedulable: bool) -> Node {
    Node {
        metadata: ObjectMeta {
            name: Some("worker-1".to_owned()),
            ..Default::default()
        },
        spec: Some(NodeSpec {
            unschedulable: unschedulable.then_some(true),
            ..Default::default()
        }),
        status: Some(NodeStatus {
            conditions: Some(conditions),
            ..Default::default()
        }),
    }
}

fn condition(type_: &str, status: &str) -> NodeCondition {
    NodeCondition {
        type_: type_.to_owned(),
        status: status.to_owned(),
        ..Default::default()
    }
}

fn render_single(node: Node) -> TableRow {
    let list: ResourceList = List {
        items: vec![node],
        metadata: ListMeta::default(),
    }
    .into();

    render(&list).unwrap().into_iter().next().unwrap()
}

#[rstest]
#[case("Ready", vec![condition("Ready", "True")], false)]
#[case("NotReady", vec![condition("Ready", "False")], false)]
#[case("NotReady", vec![condition("Ready", "Unknown")], false)]
#[case("Unknown", vec![], false)]
#[case("Unknown", vec![condition("DiskPressure", "True")], false)]
#[case("Ready,SchedulingDisabled", vec![condition("Ready", "True")], true)]
#[case("NotReady", vec![condition("Ready", "True"), condition("Ready", "False")], false)]
fn render_status_test(#[case] expected: &str, #[case] conditions: Vec<NodeCondition>, #[case] unschedulable: bool) {
    let row = render_single(node(conditions, unschedulable));
    assert_eq!(CellValue::from(expected), row.cells[1]);
}

#[rstest]
#[case("<none>", &[])]
#[case("control-plane", &[("node-role.kubernetes.io/control-plane", "")])]
#[case("worker", &[("kubernetes.io/role", "worker")])]
#[case(
    "control-plane,etcd",
    &[("node-role.kubernetes.io/control-plane", ""), ("node-role.kubernetes.io/etcd", "")]
)]
#[case("worker", &[("kubernetes.io/role", "worker"), ("node-role.kubernetes.io/worker", "")])]
fn render_roles_test(#[case] expected: &str, #[case] labels: &[(&str, &str)]) {
    let mut node = node(Vec::new(), false);
    node.metadata.labels = Some(
        labels
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect::<BTreeMap<_, _>>(),
    );

    assert_eq!(CellValue::from(expected), render_single(node).cells[2]);
}

#[test]
fn render_info_test() {
    let mut node = node(Vec::new(), false);
    node.status.as_mut().unwrap().node_info = Some(NodeSystemInfo {
        kubelet_version: "v1.33.2".to_owned(),
        os_image: "Talos (v1.10)".to_owned(),
        kernel_version: "6.12.5".to_owned(),
        container_runtime_version: "containerd://2.0.5".to_owned(),
        ..Default::default()
    });
    node.status.as_mut().unwrap().addresses = Some(vec![
        NodeAddress {
            type_: "InternalIP".to_owned(),
            address: "10.0.0.5".to_owned(),
        },
        NodeAddress {
            type_: "ExternalIP".to_owned(),
            address: "203.0.113.5".to_owned(),
        },
    ]);

    let row = render_single(node);
    assert_eq!(CellValue::from("v1.33.2"), row.cells[4]);
    assert_eq!(CellValue::from("10.0.0.5"), row.cells[5]);
    assert_eq!(CellValue::from("203.0.113.5"), row.cells[6]);
    assert_eq!(CellValue::from("Talos (v1.10)"), row.cells[7]);
    assert_eq!(CellValue::from("6.12.5"), row.cells[8]);
    assert_eq!(CellValue::from("containerd://2.0.5"), row.cells[9]);
}

#[test]
fn render_missing_info_test() {
    let row = render_single(node(Vec::new(), false));

    assert_eq!(CellValue::from(""), row.cells[4]);
    assert_eq!(CellValue::from("<none>"), row.cells[5]);
    assert_eq!(CellValue::from("<none>"), row.cells[6]);
    assert_eq!(CellValue::from("<unknown>"), row.cells[7]);
    assert_eq!(CellValue::from("<unknown>"), row.cells[8]);
    assert_eq!(CellValue::from("<unknown>"), row.cells[9]);
}
