use k8s_openapi::{
    List,
    api::flowcontrol::v1::{
        FlowDistinguisherMethod, FlowSchemaCondition, FlowSchemaSpec, FlowSchemaStatus,
        PriorityLevelConfigurationReference,
    },
    apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta},
};

use crate::table::CellValue;

use super::*;

fn schema(name: &str, precedence: i32) -> FlowSchema {
    FlowSchema {
        metadata: ObjectMeta {
            name: Some(name.to_owned()),
            ..Default::default()
        },
        spec: Some(FlowSchemaSpec {
            priority_level_configuration: PriorityLevelConfigurationReference {
                name: "workload-low".to_owned(),
            },
            matching_precedence: Some(precedence),
            ..Default::default()
        }),
        status: None,
    }
}

fn render_list(schemas: Vec<FlowSchema>) -> Vec<TableRow> {
    let list: ResourceList = List {
        items: schemas,
        metadata: ListMeta::default(),
    }
    .into();

    render(&list).unwrap()
}

#[test]
fn render_sorted_test() {
    let rows = render_list(vec![
        schema("zeta", 100),
        schema("alpha", 500),
        schema("beta", 100),
    ]);

    let names = rows.iter().map(|row| row.cells[0].clone()).collect::<Vec<_>>();
    assert_eq!(
        vec![
            CellValue::from("beta"),
            CellValue::from("zeta"),
            CellValue::from("alpha"),
        ],
        names
    );
}

#[test]
fn render_test() {
    let mut schema = schema("health-checks", 2500);
    schema.spec.as_mut().unwrap().distinguisher_method = Some(FlowDistinguisherMethod {
        type_: "ByUser".to_owned(),
    });
    schema.status = Some(FlowSchemaStatus {
        conditions: Some(vec![FlowSchemaCondition {
            type_: Some("Dangling".to_owned()),
            status: Some("False".to_owned()),
            ..Default::default()
        }]),
    });

    let row = render_list(vec![schema]).into_iter().next().unwrap();
    assert_eq!(CellValue::from("health-checks"), row.cells[0]);
    assert_eq!(CellValue::from("workload-low"), row.cells[1]);
    assert_eq!(CellValue::from(2500_i64), row.cells[2]);
    assert_eq!(CellValue::from("ByUser"), row.cells[3]);
    assert_eq!(CellValue::from("False"), row.cells[5]);
}

#[test]
fn render_defaults_test() {
    let row = render_list(vec![schema("catch-all", 10000)]).into_iter().next().unwrap();

    assert_eq!(CellValue::from("<none>"), row.cells[3]);
    // Unknown until the server reports the Dangling condition.
    assert_eq!(CellValue::from("?"), row.cells[5]);
}
