use k8s_openapi::{
    List,
    api::core::v1::{EventSeries, EventSource, ObjectReference},
    apimachinery::pkg::apis::meta::v1::{ListMeta, MicroTime, ObjectMeta, Time},
    chrono::{Duration, Utc},
};
use rstest::rstest;

use crate::table::CellValue;

use super::*;

fn event(name: &str) -> Event {
    Event {
        metadata: ObjectMeta {
            name: Some(name.to_owned()),
            ..Default::default()
        },
        involved_object: ObjectReference {
            kind: Some("Pod".to_owned()),
            name: Some("api-5d4f7".to_owned()),
            ..Default::default()
        },
        reason: Some("Started".to_owned()),
        type_: Some("Normal".to_owned()),
        message: Some(" Started container api \n".to_owned()),
        ..Default::default()
    }
}

fn render_single(event: Event) -> TableRow {
    let list: ResourceList = List {
        items: vec![event],
        metadata: ListMeta::default(),
    }
    .into();

    render(&list).unwrap().into_iter().next().unwrap()
}

#[test]
fn render_test() {
    let row = render_single(event("api-5d4f7.17f"));

    assert_eq!(10, row.cells.len());
    assert_eq!(CellValue::from("Normal"), row.cells[1]);
    assert_eq!(CellValue::from("Started"), row.cells[2]);
    assert_eq!(CellValue::from("pod/api-5d4f7"), row.cells[3]);
    assert_eq!(CellValue::from("Started container api"), row.cells[6]);
    assert_eq!(CellValue::from(1_i64), row.cells[8]);
    assert_eq!(CellValue::from("api-5d4f7.17f"), row.cells[9]);
}

#[test]
fn render_timestamps_test() {
    let mut event = event("api-5d4f7.17f");
    let row = render_single(event.clone());
    assert_eq!(CellValue::from("<unknown>"), row.cells[0]);
    assert_eq!(CellValue::from("<unknown>"), row.cells[7]);

    // Without the legacy timestamps the microsecond event time is used.
    event.event_time = Some(MicroTime(Utc::now() - Duration::seconds(30)));
    let row = render_single(event.clone());
    assert_eq!(CellValue::from("30s"), row.cells[0]);
    assert_eq!(CellValue::from("30s"), row.cells[7]);

    event.first_timestamp = Some(Time(Utc::now() - Duration::minutes(10)));
    event.last_timestamp = Some(Time(Utc::now() - Duration::seconds(45)));
    let row = render_single(event);
    assert_eq!(CellValue::from("45s"), row.cells[0]);
    assert_eq!(CellValue::from("10m"), row.cells[7]);
}

#[test]
fn render_series_test() {
    let mut event = event("api-5d4f7.17f");
    event.count = Some(3);
    event.series = Some(EventSeries {
        count: Some(17),
        last_observed_time: Some(MicroTime(Utc::now() - Duration::seconds(5))),
    });

    let row = render_single(event);
    assert_eq!(CellValue::from("5s"), row.cells[0]);
    assert_eq!(CellValue::from(17_i64), row.cells[8]);
}

#[rstest]
#[case("", None, None, None, None)]
#[case("kubelet", Some("kubelet"), None, None, None)]
#[case("kubelet, worker-1", Some("kubelet"), Some("worker-1"), None, None)]
#[case("kubelet, worker-1", None, None, Some("kubelet"), Some("worker-1"))]
#[case("kubelet, worker-1", Some("kubelet"), None, Some("ignored"), Some("worker-1"))]
fn format_source_test(
    #[case] expected: &str,
    #[case] component: Option<&str>,
    #[case] host: Option<&str>,
    #[case] reporting_component: Option<&str>,
    #[case] reporting_instance: Option<&str>,
) {
    let mut event = event("api-5d4f7.17f");
    event.source = Some(EventSource {
        component: component.map(ToString::to_string),
        host: host.map(ToString::to_string),
    });
    event.reporting_component = reporting_component.map(ToString::to_string);
    event.reporting_instance = reporting_instance.map(ToString::to_string);

    assert_eq!(expected, format_source(&event));
}

#[test]
fn render_object_without_name_test() {
    let mut event = event("api-5d4f7.17f");
    event.involved_object.name = None;

    let row = render_single(event);
    assert_eq!(CellValue::from("pod"), row.cells[3]);
}
