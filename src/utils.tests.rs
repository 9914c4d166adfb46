use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelectorRequirement;
use rstest::rstest;

use super::*;

#[rstest]
#[case("<invalid>", -2)]
#[case("0s", -1)]
#[case("0s", 0)]
#[case("47s", 47)]
#[case("119s", 119)]
#[case("2m", 120)]
#[case("5m12s", 312)]
#[case("9m59s", 599)]
#[case("10m", 600)]
#[case("179m", 179 * 60)]
#[case("3h", 180 * 60)]
#[case("7h59m", 8 * 3600 - 60)]
#[case("8h", 8 * 3600)]
#[case("47h", 48 * 3600 - 1)]
#[case("2d", 48 * 3600)]
#[case("2d3h", 51 * 3600)]
#[case("7d23h", 8 * 24 * 3600 - 3600)]
#[case("8d", 8 * 24 * 3600)]
#[case("729d", 2 * 365 * 24 * 3600 - 24 * 3600)]
#[case("2y", 2 * 365 * 24 * 3600)]
#[case("2y1d", 2 * 365 * 24 * 3600 + 24 * 3600)]
#[case("8y", 8 * 365 * 24 * 3600)]
#[case("12y", 12 * 365 * 24 * 3600 + 24 * 3600)]
fn format_duration_test(#[case] expected: &str, #[case] seconds: i64) {
    assert_eq!(expected, format_duration(Duration::seconds(seconds)));
}

#[test]
fn format_timestamp_since_test() {
    assert_eq!("<unknown>", format_timestamp_since(None));
    assert_eq!("<unknown>", format_micro_timestamp_since(None));

    let timestamp = Time(Utc::now() - Duration::seconds(30));
    assert_eq!("30s", format_timestamp_since(Some(&timestamp)));
}

#[rstest]
#[case("<unset>", &[], false, 0)]
#[case("a,b", &["a", "b"], false, 0)]
#[case("a,b,c + 2 more...", &["a", "b", "c"], true, 5)]
fn list_with_more_test(#[case] expected: &str, #[case] list: &[&str], #[case] more: bool, #[case] count: usize) {
    let list = list.iter().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(expected, list_with_more(&list, more, count, 3));
}

#[test]
fn format_labels_test() {
    assert_eq!("<none>", format_labels(None));
    assert_eq!("<none>", format_labels(Some(&BTreeMap::new())));

    let labels = BTreeMap::from([
        ("app".to_owned(), "api".to_owned()),
        ("tier".to_owned(), "backend".to_owned()),
    ]);
    assert_eq!("app=api,tier=backend", format_labels(Some(&labels)));
}

#[test]
fn label_selector_string_test() {
    assert_eq!(Some(String::new()), label_selector_string(None));
    assert_eq!(Some(String::new()), label_selector_string(Some(&LabelSelector::default())));

    let selector = LabelSelector {
        match_labels: Some(BTreeMap::from([("app".to_owned(), "api".to_owned())])),
        match_expressions: Some(vec![
            LabelSelectorRequirement {
                key: "tier".to_owned(),
                operator: "In".to_owned(),
                values: Some(vec!["web".to_owned(), "backend".to_owned()]),
            },
            LabelSelectorRequirement {
                key: "env".to_owned(),
                operator: "Exists".to_owned(),
                values: None,
            },
            LabelSelectorRequirement {
                key: "legacy".to_owned(),
                operator: "DoesNotExist".to_owned(),
                values: None,
            },
        ]),
    };
    assert_eq!(
        Some("app=api,tier in (backend,web),env,!legacy".to_owned()),
        label_selector_string(Some(&selector))
    );

    let selector = LabelSelector {
        match_labels: None,
        match_expressions: Some(vec![LabelSelectorRequirement {
            key: "tier".to_owned(),
            operator: "Like".to_owned(),
            values: None,
        }]),
    };
    assert_eq!(None, label_selector_string(Some(&selector)));
}

#[test]
fn format_label_selector_test() {
    assert_eq!("<none>", format_label_selector(None));
    assert_eq!("<none>", format_label_selector(Some(&LabelSelector::default())));

    let selector = LabelSelector {
        match_labels: None,
        match_expressions: Some(vec![LabelSelectorRequirement {
            key: "tier".to_owned(),
            operator: "Like".to_owned(),
            values: None,
        }]),
    };
    assert_eq!("<error>", format_label_selector(Some(&selector)));
}

#[rstest]
#[case("", &[])]
#[case("RWO", &["ReadWriteOnce"])]
#[case("RWO,ROX,RWX", &["ReadWriteMany", "ReadOnlyMany", "ReadWriteOnce"])]
#[case("RWO,RWOP", &["ReadWriteOncePod", "ReadWriteOnce", "ReadWriteOnce"])]
fn access_modes_string_test(#[case] expected: &str, #[case] modes: &[&str]) {
    let modes = modes.iter().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(expected, access_modes_string(&modes));
}

#[test]
fn format_bool_test() {
    assert_eq!("True", format_bool(true));
    assert_eq!("False", format_bool(false));
    assert_eq!("True", format_bool_option(Some(true)));
    assert_eq!("False", format_bool_option(Some(false)));
    assert_eq!("<unset>", format_bool_option(None));
}

#[test]
fn format_int_or_string_test() {
    assert_eq!("5", format_int_or_string(&IntOrString::Int(5)));
    assert_eq!("25%", format_int_or_string(&IntOrString::String("25%".to_owned())));
}

#[rstest]
#[case("10.0.0.1:8080", "10.0.0.1", 8080)]
#[case("[fd00::1]:53", "fd00::1", 53)]
fn join_host_port_test(#[case] expected: &str, #[case] host: &str, #[case] port: i32) {
    assert_eq!(expected, join_host_port(host, port));
}

#[test]
fn container_cells_test() {
    let containers = vec![
        Container {
            name: "api".to_owned(),
            image: Some("registry.local/api:1.2".to_owned()),
            ..Default::default()
        },
        Container {
            name: "proxy".to_owned(),
            image: Some("envoy:1.30".to_owned()),
            ..Default::default()
        },
    ];

    let (names, images) = container_cells(&containers);
    assert_eq!("api,proxy", names);
    assert_eq!("registry.local/api:1.2,envoy:1.30", images);
}
