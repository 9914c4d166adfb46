use rstest::rstest;

use super::*;

fn port(number: Option<i32>, name: Option<&str>) -> EndpointPort {
    EndpointPort {
        port: number,
        name: name.map(ToString::to_string),
        ..Default::default()
    }
}

fn endpoint(addresses: &[&str]) -> Endpoint {
    Endpoint {
        addresses: addresses.iter().map(ToString::to_string).collect(),
        ..Default::default()
    }
}

#[rstest]
#[case("<unset>", vec![])]
#[case("8080", vec![port(Some(8080), None)])]
#[case("dns", vec![port(None, Some("dns"))])]
#[case("*", vec![port(None, None)])]
#[case("80,443,8080 + 1 more...", vec![
    port(Some(80), None),
    port(Some(443), None),
    port(Some(8080), None),
    port(Some(9090), None),
])]
fn format_ports_test(#[case] expected: &str, #[case] ports: Vec<EndpointPort>) {
    assert_eq!(expected, format_ports(&ports));
}

#[rstest]
#[case("<unset>", vec![])]
#[case("10.0.0.1,10.0.0.2", vec![endpoint(&["10.0.0.1"]), endpoint(&["10.0.0.2"])])]
#[case("10.0.0.1,10.0.0.2,10.0.0.3 + 2 more...", vec![
    endpoint(&["10.0.0.1", "10.0.0.2"]),
    endpoint(&["10.0.0.3", "10.0.0.4", "10.0.0.5"]),
])]
fn format_addresses_test(#[case] expected: &str, #[case] endpoints: Vec<Endpoint>) {
    assert_eq!(expected, format_addresses(&endpoints));
}
