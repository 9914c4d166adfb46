use k8s_openapi::{
    List,
    api::rbac::v1::RoleBinding,
    apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta},
};

use crate::table::CellValue;

use super::*;

fn subject(kind: &str, name: &str, namespace: Option<&str>) -> Subject {
    Subject {
        kind: kind.to_owned(),
        name: name.to_owned(),
        namespace: namespace.map(ToString::to_string),
        ..Default::default()
    }
}

#[test]
fn subject_strings_test() {
    let subjects = vec![
        subject("User", "jane", None),
        subject("Group", "system:masters", None),
        subject("ServiceAccount", "deployer", Some("ci")),
        subject("User", "joe", None),
        subject("Unknown", "ignored", None),
    ];

    let (users, groups, accounts) = subject_strings(&subjects);
    assert_eq!(vec!["jane", "joe"], users);
    assert_eq!(vec!["system:masters"], groups);
    assert_eq!(vec!["ci/deployer"], accounts);
}

#[test]
fn render_role_bindings_test() {
    let binding = RoleBinding {
        metadata: ObjectMeta {
            name: Some("deployers".to_owned()),
            ..Default::default()
        },
        role_ref: RoleRef {
            kind: "ClusterRole".to_owned(),
            name: "edit".to_owned(),
            ..Default::default()
        },
        subjects: Some(vec![
            subject("User", "jane", None),
            subject("ServiceAccount", "deployer", Some("ci")),
        ]),
    };

    let list: ResourceList = List {
        items: vec![binding],
        metadata: ListMeta::default(),
    }
    .into();

    let rows = render_role_bindings(&list).unwrap();
    assert_eq!(CellValue::from("deployers"), rows[0].cells[0]);
    assert_eq!(CellValue::from("ClusterRole/edit"), rows[0].cells[1]);
    assert_eq!(CellValue::from("jane"), rows[0].cells[3]);
    assert_eq!(CellValue::from(""), rows[0].cells[4]);
    assert_eq!(CellValue::from("ci/deployer"), rows[0].cells[5]);
}

#[test]
fn render_wrong_list_test() {
    let list: ResourceList = List::<RoleBinding> {
        items: Vec::new(),
        metadata: ListMeta::default(),
    }
    .into();

    let result = render_cluster_role_bindings(&list);
    assert!(matches!(
        result,
        Err(RenderError::UnexpectedKind {
            handler: "ClusterRoleBinding",
            actual: "RoleBinding",
        })
    ));
}
