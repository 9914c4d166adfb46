use std::collections::BTreeMap;

use k8s_openapi::{
    List,
    api::networking::v1::{NetworkPolicy, NetworkPolicySpec},
    apimachinery::pkg::apis::meta::v1::{LabelSelector, ListMeta, ObjectMeta},
};

use crate::table::CellValue;

use super::*;

fn render_single(policy: NetworkPolicy) -> TableRow {
    let list: ResourceList = List {
        items: vec![policy],
        metadata: ListMeta::default(),
    }
    .into();

    render(&list).unwrap().into_iter().next().unwrap()
}

fn policy(spec: Option<NetworkPolicySpec>) -> NetworkPolicy {
    NetworkPolicy {
        metadata: ObjectMeta {
            name: Some("deny-ingress".to_owned()),
            ..Default::default()
        },
        spec,
    }
}

#[test]
fn render_test() {
    let spec = NetworkPolicySpec {
        pod_selector: Some(LabelSelector {
            match_labels: Some(BTreeMap::from([("app".to_owned(), "web".to_owned())])),
            ..Default::default()
        }),
        ..Default::default()
    };

    let row = render_single(policy(Some(spec)));
    assert_eq!(CellValue::from("deny-ingress"), row.cells[0]);
    assert_eq!(CellValue::from("app=web"), row.cells[1]);
}

#[test]
fn render_missing_selector_test() {
    let row = render_single(policy(Some(NetworkPolicySpec::default())));
    assert_eq!(CellValue::from("<none>"), row.cells[1]);

    let row = render_single(policy(None));
    assert_eq!(CellValue::from("<none>"), row.cells[1]);
}
