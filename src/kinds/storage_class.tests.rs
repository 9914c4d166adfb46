use std::collections::BTreeMap;

use k8s_openapi::{
    List,
    api::storage::v1::StorageClass,
    apimachinery::pkg::apis::meta::v1::ListMeta,
};
use rstest::rstest;

use crate::table::CellValue;

use super::*;

fn class(name: &str, annotations: &[(&str, &str)]) -> StorageClass {
    StorageClass {
        metadata: ObjectMeta {
            name: Some(name.to_owned()),
            annotations: (!annotations.is_empty()).then(|| {
                annotations
                    .iter()
                    .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
                    .collect::<BTreeMap<_, _>>()
            }),
            ..Default::default()
        },
        provisioner: "rancher.io/local-path".to_owned(),
        ..Default::default()
    }
}

fn render_single(class: StorageClass) -> TableRow {
    let list: ResourceList = List {
        items: vec![class],
        metadata: ListMeta::default(),
    }
    .into();

    render(&list).unwrap().into_iter().next().unwrap()
}

#[rstest]
#[case("local-path", &[])]
#[case("local-path (default)", &[("storageclass.kubernetes.io/is-default-class", "true")])]
#[case("local-path (default)", &[("storageclass.beta.kubernetes.io/is-default-class", "true")])]
#[case("local-path", &[("storageclass.kubernetes.io/is-default-class", "false")])]
fn render_default_class_test(#[case] expected: &str, #[case] annotations: &[(&str, &str)]) {
    let row = render_single(class("local-path", annotations));
    assert_eq!(CellValue::from(expected), row.cells[0]);
}

#[test]
fn render_test() {
    let row = render_single(class("local-path", &[]));

    assert_eq!(CellValue::from("rancher.io/local-path"), row.cells[1]);
    assert_eq!(CellValue::from("Delete"), row.cells[2]);
    assert_eq!(CellValue::from("Immediate"), row.cells[3]);
    assert_eq!(CellValue::from(false), row.cells[4]);

    let mut class = class("fast", &[]);
    class.reclaim_policy = Some("Retain".to_owned());
    class.volume_binding_mode = Some("WaitForFirstConsumer".to_owned());
    class.allow_volume_expansion = Some(true);

    let row = render_single(class);
    assert_eq!(CellValue::from("Retain"), row.cells[2]);
    assert_eq!(CellValue::from("WaitForFirstConsumer"), row.cells[3]);
    assert_eq!(CellValue::from(true), row.cells[4]);
}
