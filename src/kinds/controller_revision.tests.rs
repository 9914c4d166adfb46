use k8s_openapi::{
    List,
    api::apps::v1::ControllerRevision,
    apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta, OwnerReference},
};
use rstest::rstest;

use crate::table::CellValue;

use super::*;

fn revision(owners: Vec<OwnerReference>) -> ControllerRevision {
    ControllerRevision {
        metadata: ObjectMeta {
            name: Some("web-7d4f8".to_owned()),
            owner_references: Some(owners),
            ..Default::default()
        },
        revision: 4,
        ..Default::default()
    }
}

fn render_list(revisions: Vec<ControllerRevision>) -> Result<Vec<TableRow>, RenderError> {
    let list: ResourceList = List {
        items: revisions,
        metadata: ListMeta::default(),
    }
    .into();

    render(&list)
}

#[rstest]
#[case(("", "v1"), "v1")]
#[case(("apps", "v1"), "apps/v1")]
fn parse_group_version_test(#[case] expected: (&str, &str), #[case] api_version: &str) {
    let (group, version) = parse_group_version(api_version).unwrap();
    assert_eq!(expected, (group.as_str(), version.as_str()));
}

#[test]
fn parse_group_version_invalid_test() {
    let result = parse_group_version("apps/v1/extra");
    assert!(matches!(result, Err(RenderError::InvalidGroupVersion(_))));
}

#[test]
fn render_test() {
    let owner = OwnerReference {
        api_version: "apps/v1".to_owned(),
        kind: "StatefulSet".to_owned(),
        name: "web".to_owned(),
        controller: Some(true),
        ..Default::default()
    };

    let rows = render_list(vec![revision(vec![owner])]).unwrap();
    assert_eq!(CellValue::from("web-7d4f8"), rows[0].cells[0]);
    assert_eq!(CellValue::from("statefulset.apps/web"), rows[0].cells[1]);
    assert_eq!(CellValue::from(4_i64), rows[0].cells[2]);
}

#[test]
fn render_no_controller_test() {
    // Owners that are not the managing controller are ignored.
    let owner = OwnerReference {
        api_version: "apps/v1".to_owned(),
        kind: "StatefulSet".to_owned(),
        name: "web".to_owned(),
        controller: Some(false),
        ..Default::default()
    };

    let rows = render_list(vec![revision(vec![owner])]).unwrap();
    assert_eq!(CellValue::from("<none>"), rows[0].cells[1]);
}

#[test]
fn render_core_group_test() {
    let owner = OwnerReference {
        api_version: "v1".to_owned(),
        kind: "Node".to_owned(),
        name: "worker-1".to_owned(),
        controller: Some(true),
        ..Default::default()
    };

    let rows = render_list(vec![revision(vec![owner])]).unwrap();
    assert_eq!(CellValue::from("node/worker-1"), rows[0].cells[1]);
}

#[test]
fn render_invalid_group_version_test() {
    let owner = OwnerReference {
        api_version: "apps/v1/extra".to_owned(),
        kind: "StatefulSet".to_owned(),
        name: "web".to_owned(),
        controller: Some(true),
        ..Default::default()
    };

    let result = render_list(vec![revision(vec![owner])]);
    assert!(matches!(result, Err(RenderError::InvalidGroupVersion(_))));
}
