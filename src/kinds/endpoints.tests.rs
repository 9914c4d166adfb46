use k8s_openapi::api::core::v1::{EndpointAddress, EndpointPort, EndpointSubset};
use rstest::rstest;

use super::*;

fn subset(ips: &[&str], ports: &[i32]) -> EndpointSubset {
    EndpointSubset {
        addresses: Some(
            ips.iter()
                .map(|ip| EndpointAddress {
                    ip: (*ip).to_owned(),
                    ..Default::default()
                })
                .collect(),
        ),
        ports: Some(
            ports
                .iter()
                .map(|port| EndpointPort {
                    port: *port,
                    ..Default::default()
                })
                .collect(),
        ),
        ..Default::default()
    }
}

fn endpoints(subsets: Option<Vec<EndpointSubset>>) -> Endpoints {
    Endpoints {
        subsets,
        ..Default::default()
    }
}

#[rstest]
#[case("<none>", None)]
#[case("<none>", Some(Vec::new()))]
#[case("10.0.0.1:8080", Some(vec![subset(&["10.0.0.1"], &[8080])]))]
#[case("10.0.0.1:8080,10.0.0.2:8080", Some(vec![subset(&["10.0.0.1", "10.0.0.2"], &[8080])]))]
#[case(
    "10.0.0.1:80,10.0.0.2:80,10.0.0.1:443 + 1 more...",
    Some(vec![subset(&["10.0.0.1", "10.0.0.2"], &[80, 443])])
)]
#[case("[fd00::1]:53", Some(vec![subset(&["fd00::1"], &[53])]))]
fn format_endpoints_test(#[case] expected: &str, #[case] subsets: Option<Vec<EndpointSubset>>) {
    assert_eq!(expected, format_endpoints(&endpoints(subsets)));
}

#[test]
fn format_endpoints_headless_test() {
    let mut subset = subset(&["10.0.0.1", "10.0.0.2"], &[]);
    subset.ports = None;

    assert_eq!("10.0.0.1,10.0.0.2", format_endpoints(&endpoints(Some(vec![subset]))));
}

#[test]
fn format_endpoints_truncated_test() {
    let subsets = vec![subset(&["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4", "10.0.0.5"], &[80])];

    assert_eq!(
        "10.0.0.1:80,10.0.0.2:80,10.0.0.3:80 + 2 more...",
        format_endpoints(&endpoints(Some(subsets)))
    );
}
