use k8s_openapi::{
    List,
    api::batch::v1::{Job, JobSpec, JobStatus},
    apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta, Time},
    chrono::{Duration, TimeZone},
};
use rstest::rstest;

use crate::table::CellValue;

use super::*;

fn job(spec: JobSpec, status: JobStatus) -> Job {
    Job {
        metadata: ObjectMeta {
            name: Some("migrate".to_owned()),
            ..Default::default()
        },
        spec: Some(spec),
        status: Some(status),
        ..Default::default()
    }
}

fn render_single(job: Job) -> TableRow {
    let list: ResourceList = List {
        items: vec![job],
        metadata: ListMeta::default(),
    }
    .into();

    render(&list).unwrap().into_iter().next().unwrap()
}

fn true_condition(type_: &str) -> JobCondition {
    JobCondition {
        type_: type_.to_owned(),
        status: "True".to_owned(),
        ..Default::default()
    }
}

#[rstest]
#[case("Complete", vec![true_condition("Complete")], false)]
#[case("Failed", vec![true_condition("Failed")], false)]
#[case("Failed", vec![true_condition("Failed")], true)]
#[case("Terminating", vec![true_condition("Suspended")], true)]
#[case("Suspended", vec![true_condition("Suspended")], false)]
#[case("FailureTarget", vec![true_condition("FailureTarget")], false)]
#[case("Running", Vec::new(), false)]
fn render_status_test(#[case] expected: &str, #[case] conditions: Vec<JobCondition>, #[case] deleted: bool) {
    let mut job = job(
        JobSpec::default(),
        JobStatus {
            conditions: Some(conditions),
            ..Default::default()
        },
    );
    if deleted {
        job.metadata.deletion_timestamp = Some(Time(k8s_openapi::chrono::Utc::now()));
    }

    assert_eq!(CellValue::from(expected), render_single(job).cells[1]);
}

#[rstest]
#[case("2/5", Some(5), None, 2)]
#[case("1/1", None, None, 1)]
#[case("0/1", None, Some(1), 0)]
#[case("3/1 of 4", None, Some(4), 3)]
fn render_completions_test(
    #[case] expected: &str,
    #[case] completions: Option<i32>,
    #[case] parallelism: Option<i32>,
    #[case] succeeded: i32,
) {
    let job = job(
        JobSpec {
            completions,
            parallelism,
            ..Default::default()
        },
        JobStatus {
            succeeded: Some(succeeded),
            ..Default::default()
        },
    );

    assert_eq!(CellValue::from(expected), render_single(job).cells[2]);
}

#[test]
fn render_duration_test() {
    let start = k8s_openapi::chrono::Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
    let completed = job(
        JobSpec::default(),
        JobStatus {
            start_time: Some(Time(start)),
            completion_time: Some(Time(start + Duration::seconds(312))),
            ..Default::default()
        },
    );
    assert_eq!(CellValue::from("5m12s"), render_single(completed).cells[3]);

    let unstarted = job(JobSpec::default(), JobStatus::default());
    assert_eq!(CellValue::from(""), render_single(unstarted).cells[3]);
}
