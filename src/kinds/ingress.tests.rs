use k8s_openapi::api::networking::v1::IngressLoadBalancerIngress;
use rstest::rstest;

use super::*;

fn rule(host: &str) -> IngressRule {
    IngressRule {
        host: (!host.is_empty()).then(|| host.to_owned()),
        ..Default::default()
    }
}

#[rstest]
#[case("*", vec![])]
#[case("*", vec![rule("")])]
#[case("a.example.com", vec![rule("a.example.com")])]
#[case("a.example.com,b.example.com", vec![rule("a.example.com"), rule(""), rule("b.example.com")])]
#[case("a.example.com,b.example.com,c.example.com + 2 more...", vec![
    rule("a.example.com"),
    rule("b.example.com"),
    rule("c.example.com"),
    rule("d.example.com"),
    rule("e.example.com"),
])]
fn format_hosts_test(#[case] expected: &str, #[case] rules: Vec<IngressRule>) {
    assert_eq!(expected, format_hosts(&rules));
}

#[test]
fn format_ports_test() {
    assert_eq!("80", format_ports(&[]));
    assert_eq!("80, 443", format_ports(&[IngressTLS::default()]));
}

#[test]
fn load_balancer_ingress_test() {
    assert_eq!("", load_balancer_ingress(None));

    let status = IngressLoadBalancerStatus {
        ingress: Some(vec![
            IngressLoadBalancerIngress {
                ip: Some("203.0.113.9".to_owned()),
                ..Default::default()
            },
            IngressLoadBalancerIngress {
                ip: Some("203.0.113.9".to_owned()),
                ..Default::default()
            },
            IngressLoadBalancerIngress {
                hostname: Some("lb.example.com".to_owned()),
                ..Default::default()
            },
        ]),
    };

    assert_eq!("203.0.113.9,lb.example.com", load_balancer_ingress(Some(&status)));
}
