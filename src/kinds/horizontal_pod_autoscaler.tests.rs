use k8s_openapi::{
    List,
    api::autoscaling::v2::{
        CrossVersionObjectReference, HorizontalPodAutoscaler, HorizontalPodAutoscalerSpec,
        HorizontalPodAutoscalerStatus, MetricIdentifier, PodsMetricSource, PodsMetricStatus, ResourceMetricSource,
        ResourceMetricStatus,
    },
    apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta},
};

use crate::table::CellValue;

use super::*;

fn cpu_spec(average_utilization: Option<i32>) -> MetricSpec {
    MetricSpec {
        type_: "Resource".to_owned(),
        resource: Some(ResourceMetricSource {
            name: "cpu".to_owned(),
            target: MetricTarget {
                type_: "Utilization".to_owned(),
                average_utilization,
                ..Default::default()
            },
        }),
        ..Default::default()
    }
}

fn cpu_status(average_utilization: i32) -> MetricStatus {
    MetricStatus {
        type_: "Resource".to_owned(),
        resource: Some(ResourceMetricStatus {
            name: "cpu".to_owned(),
            current: MetricValueStatus {
                average_utilization: Some(average_utilization),
                ..Default::default()
            },
        }),
        ..Default::default()
    }
}

fn pods_spec(name: &str, average_value: &str) -> MetricSpec {
    MetricSpec {
        type_: "Pods".to_owned(),
        pods: Some(PodsMetricSource {
            metric: MetricIdentifier {
                name: name.to_owned(),
                ..Default::default()
            },
            target: MetricTarget {
                type_: "AverageValue".to_owned(),
                average_value: Some(Quantity(average_value.to_owned())),
                ..Default::default()
            },
        }),
        ..Default::default()
    }
}

#[test]
fn format_metrics_test() {
    assert_eq!("<none>", format_metrics(&[], &[]));
    assert_eq!("cpu: <unknown>/80%", format_metrics(&[cpu_spec(Some(80))], &[]));
    assert_eq!(
        "cpu: 42%/80%",
        format_metrics(&[cpu_spec(Some(80))], &[cpu_status(42)])
    );
    assert_eq!("cpu: <unknown>/<auto>", format_metrics(&[cpu_spec(None)], &[]));
    assert_eq!(
        "<unknown>/100m",
        format_metrics(&[pods_spec("requests-per-second", "100m")], &[])
    );
}

#[test]
fn format_metrics_current_pods_test() {
    let status = MetricStatus {
        type_: "Pods".to_owned(),
        pods: Some(PodsMetricStatus {
            metric: MetricIdentifier::default(),
            current: MetricValueStatus {
                average_value: Some(Quantity("200m".to_owned())),
                ..Default::default()
            },
        }),
        ..Default::default()
    };

    assert_eq!(
        "200m/100m",
        format_metrics(&[pods_spec("requests-per-second", "100m")], &[status])
    );
}

#[test]
fn format_metrics_truncated_test() {
    let specs = vec![cpu_spec(Some(80)), pods_spec("a", "1"), pods_spec("b", "2")];
    assert_eq!("cpu: <unknown>/80%, <unknown>/1 + 1 more...", format_metrics(&specs, &[]));
}

#[test]
fn format_metrics_unknown_type_test() {
    let spec = MetricSpec {
        type_: "Magic".to_owned(),
        ..Default::default()
    };
    assert_eq!("<unknown type>", format_metrics(&[spec], &[]));

    // A known type with no matching source is unknown as well.
    let spec = MetricSpec {
        type_: "Resource".to_owned(),
        ..Default::default()
    };
    assert_eq!("<unknown type>", format_metrics(&[spec], &[]));
}

#[test]
fn render_test() {
    let autoscaler = HorizontalPodAutoscaler {
        metadata: ObjectMeta {
            name: Some("api".to_owned()),
            ..Default::default()
        },
        spec: Some(HorizontalPodAutoscalerSpec {
            scale_target_ref: CrossVersionObjectReference {
                kind: "Deployment".to_owned(),
                name: "api".to_owned(),
                ..Default::default()
            },
            min_replicas: Some(2),
            max_replicas: 10,
            metrics: Some(vec![cpu_spec(Some(80))]),
            ..Default::default()
        }),
        status: Some(HorizontalPodAutoscalerStatus {
            current_replicas: Some(4),
            ..Default::default()
        }),
    };

    let list: ResourceList = List {
        items: vec![autoscaler],
        metadata: ListMeta::default(),
    }
    .into();

    let row = render(&list).unwrap().into_iter().next().unwrap();
    assert_eq!(CellValue::from("api"), row.cells[0]);
    assert_eq!(CellValue::from("Deployment/api"), row.cells[1]);
    assert_eq!(CellValue::from("cpu: <unknown>/80%"), row.cells[2]);
    assert_eq!(CellValue::from("2"), row.cells[3]);
    assert_eq!(CellValue::from(10_i64), row.cells[4]);
    assert_eq!(CellValue::from(4_i64), row.cells[5]);
}

#[test]
fn render_unset_min_replicas_test() {
    let autoscaler = HorizontalPodAutoscaler {
        metadata: ObjectMeta::default(),
        spec: Some(HorizontalPodAutoscalerSpec {
            scale_target_ref: CrossVersionObjectReference::default(),
            max_replicas: 3,
            ..Default::default()
        }),
        status: None,
    };

    let list: ResourceList = List {
        items: vec![autoscaler],
        metadata: ListMeta::default(),
    }
    .into();

    let row = render(&list).unwrap().into_iter().next().unwrap();
    assert_eq!(CellValue::from("<unset>"), row.cells[3]);
    assert_eq!(CellValue::from(0_i64), row.cells[5]);
}
