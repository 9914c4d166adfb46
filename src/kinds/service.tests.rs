use k8s_openapi::{
    List,
    api::core::v1::{LoadBalancerIngress, ServiceSpec, ServiceStatus},
    apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta},
};
use rstest::rstest;

use crate::table::CellValue;

use super::*;

fn service(spec: ServiceSpec, status: Option<ServiceStatus>) -> Service {
    Service {
        metadata: ObjectMeta {
            name: Some("api".to_owned()),
            ..Default::default()
        },
        spec: Some(spec),
        status,
    }
}

fn render_single(service: Service) -> TableRow {
    let list: ResourceList = List {
        items: vec![service],
        metadata: ListMeta::default(),
    }
    .into();

    render(&list).unwrap().into_iter().next().unwrap()
}

fn lb_status(ingress: Vec<LoadBalancerIngress>) -> Option<ServiceStatus> {
    Some(ServiceStatus {
        load_balancer: Some(LoadBalancerStatus {
            ingress: Some(ingress),
        }),
        ..Default::default()
    })
}

fn ip_ingress(ip: &str) -> LoadBalancerIngress {
    LoadBalancerIngress {
        ip: Some(ip.to_owned()),
        ..Default::default()
    }
}

#[test]
fn make_port_string_test() {
    let ports = vec![
        ServicePort {
            port: 80,
            ..Default::default()
        },
        ServicePort {
            port: 443,
            protocol: Some("TCP".to_owned()),
            node_port: Some(30443),
            ..Default::default()
        },
        ServicePort {
            port: 53,
            protocol: Some("UDP".to_owned()),
            ..Default::default()
        },
    ];

    assert_eq!("80/TCP,443:30443/TCP,53/UDP", make_port_string(&ports));
}

#[rstest]
#[case("<none>", "ClusterIP", Vec::new())]
#[case("198.51.100.7", "ClusterIP", vec!["198.51.100.7"])]
#[case("198.51.100.7,198.51.100.8", "NodePort", vec!["198.51.100.7", "198.51.100.8"])]
#[case("<unknown>", "", Vec::new())]
fn external_ip_test(#[case] expected: &str, #[case] type_: &str, #[case] external_ips: Vec<&str>) {
    let service = service(
        ServiceSpec {
            type_: Some(type_.to_owned()),
            external_ips: Some(external_ips.iter().map(ToString::to_string).collect()),
            ..Default::default()
        },
        None,
    );

    assert_eq!(CellValue::from(expected), render_single(service).cells[3]);
}

#[test]
fn external_ip_load_balancer_test() {
    let spec = ServiceSpec {
        type_: Some("LoadBalancer".to_owned()),
        ..Default::default()
    };

    let pending = service(spec.clone(), None);
    assert_eq!(CellValue::from("<pending>"), render_single(pending).cells[3]);

    let balanced = service(spec.clone(), lb_status(vec![ip_ingress("203.0.113.9")]));
    assert_eq!(CellValue::from("203.0.113.9"), render_single(balanced).cells[3]);

    // Repeated ingress points collapse, the first occurrence wins.
    let duplicated = service(
        spec.clone(),
        lb_status(vec![
            ip_ingress("203.0.113.9"),
            ip_ingress("203.0.113.9"),
            LoadBalancerIngress {
                hostname: Some("lb.example.com".to_owned()),
                ..Default::default()
            },
        ]),
    );
    assert_eq!(
        CellValue::from("203.0.113.9,lb.example.com"),
        render_single(duplicated).cells[3]
    );

    let merged = service(
        ServiceSpec {
            external_ips: Some(vec!["198.51.100.7".to_owned()]),
            ..spec
        },
        lb_status(vec![ip_ingress("203.0.113.9")]),
    );
    assert_eq!(
        CellValue::from("203.0.113.9,198.51.100.7"),
        render_single(merged).cells[3]
    );
}

#[test]
fn external_name_test() {
    let service = service(
        ServiceSpec {
            type_: Some("ExternalName".to_owned()),
            external_name: Some("db.example.com".to_owned()),
            ..Default::default()
        },
        None,
    );

    assert_eq!(CellValue::from("db.example.com"), render_single(service).cells[3]);
}

#[test]
fn render_test() {
    let service = service(
        ServiceSpec {
            type_: Some("ClusterIP".to_owned()),
            cluster_ips: Some(vec!["10.96.0.10".to_owned()]),
            ports: Some(vec![ServicePort {
                port: 8080,
                ..Default::default()
            }]),
            selector: Some([("app".to_owned(), "api".to_owned())].into()),
            ..Default::default()
        },
        None,
    );

    let row = render_single(service);
    assert_eq!(CellValue::from("api"), row.cells[0]);
    assert_eq!(CellValue::from("ClusterIP"), row.cells[1]);
    assert_eq!(CellValue::from("10.96.0.10"), row.cells[2]);
    assert_eq!(CellValue::from("8080/TCP"), row.cells[4]);
    assert_eq!(CellValue::from("app=api"), row.cells[6]);
}
