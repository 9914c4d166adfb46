use std::collections::BTreeMap;

use k8s_openapi::{
    List,
    api::core::v1::{ResourceQuota, ResourceQuotaStatus},
    apimachinery::pkg::{api::resource::Quantity, apis::meta::v1::{ListMeta, ObjectMeta}},
};

use crate::table::CellValue;

use super::*;

fn quantities(entries: &[(&str, &str)]) -> BTreeMap<String, Quantity> {
    entries
        .iter()
        .map(|(resource, value)| ((*resource).to_owned(), Quantity((*value).to_owned())))
        .collect()
}

fn render_single(quota: ResourceQuota) -> TableRow {
    let list: ResourceList = List {
        items: vec![quota],
        metadata: ListMeta::default(),
    }
    .into();

    render(&list).unwrap().into_iter().next().unwrap()
}

#[test]
fn render_test() {
    let quota = ResourceQuota {
        metadata: ObjectMeta {
            name: Some("compute".to_owned()),
            ..Default::default()
        },
        status: Some(ResourceQuotaStatus {
            hard: Some(quantities(&[
                ("requests.cpu", "4"),
                ("limits.cpu", "8"),
                ("limits.memory", "16Gi"),
                ("pods", "20"),
            ])),
            used: Some(quantities(&[
                ("requests.cpu", "2500m"),
                ("limits.cpu", "5"),
                ("pods", "12"),
            ])),
        }),
        ..Default::default()
    };

    let row = render_single(quota);
    assert_eq!(CellValue::from("compute"), row.cells[0]);
    // Hard limits are sorted by resource name, missing usage counts as zero.
    assert_eq!(CellValue::from("pods: 12/20, requests.cpu: 2500m/4"), row.cells[2]);
    assert_eq!(
        CellValue::from("limits.cpu: 5/8, limits.memory: 0/16Gi"),
        row.cells[3]
    );
}

#[test]
fn render_empty_status_test() {
    let quota = ResourceQuota {
        metadata: ObjectMeta {
            name: Some("compute".to_owned()),
            ..Default::default()
        },
        ..Default::default()
    };

    let row = render_single(quota);
    assert_eq!(CellValue::from(""), row.cells[2]);
    assert_eq!(CellValue::from(""), row.cells[3]);
}
