use k8s_openapi::{
    List,
    api::{
        admissionregistration::v1::{MutatingWebhookConfiguration, ValidatingWebhookConfiguration},
        apps::v1::{ControllerRevision, DaemonSet, Deployment, ReplicaSet, StatefulSet},
        autoscaling::v2::HorizontalPodAutoscaler,
        batch::v1::{CronJob, Job},
        certificates::v1::CertificateSigningRequest,
        coordination::v1::Lease,
        core::v1::{
            ConfigMap, Endpoints, Event, Namespace, Node, PersistentVolume, PersistentVolumeClaim, Pod, ResourceQuota,
            Secret, Service, ServiceAccount,
        },
        discovery::v1::EndpointSlice,
        flowcontrol::v1::{FlowSchema, PriorityLevelConfiguration},
        networking::v1::{Ingress, IngressClass, NetworkPolicy},
        policy::v1::PodDisruptionBudget,
        rbac::v1::{ClusterRoleBinding, RoleBinding},
        scheduling::v1::PriorityClass,
        storage::v1::StorageClass,
    },
    apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta},
};
use rstest::rstest;

use crate::{kinds, table::CellValue};

use super::*;

fn pods(items: Vec<Pod>, metadata: ListMeta) -> ResourceList {
    List { items, metadata }.into()
}

fn named_pod(name: &str) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some(name.to_owned()),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn register_test() {
    let mut registry = TableRegistry::new();
    registry
        .register(kinds::pod::KIND, kinds::pod::columns(), kinds::pod::render)
        .unwrap();

    assert!(registry.contains("Pod"));
    assert!(!registry.contains("Deployment"));
    assert_eq!(vec!["Pod"], registry.kinds().collect::<Vec<_>>());
}

#[test]
fn register_duplicate_test() {
    let mut registry = TableRegistry::new();
    registry
        .register(kinds::pod::KIND, kinds::pod::columns(), kinds::pod::render)
        .unwrap();

    let result = registry.register(kinds::pod::KIND, kinds::pod::columns(), kinds::pod::render);
    assert!(matches!(result, Err(RegistryError::DuplicateHandler("Pod"))));
    assert!(registry.contains("Pod"));
}

#[rstest]
#[case::empty_set(Vec::new())]
#[case::empty_name(vec![ColumnDefinition::string("", "An unnamed column.")])]
#[case::duplicate_name(vec![
    ColumnDefinition::string("Age", "Time since creation."),
    ColumnDefinition::string("Age", "Time since creation."),
])]
#[case::negative_priority(vec![ColumnDefinition {
    priority: -1,
    ..ColumnDefinition::string("Age", "Time since creation.")
}])]
#[case::all_wide(vec![ColumnDefinition::string("Age", "Time since creation.").wide()])]
fn register_invalid_columns_test(#[case] columns: Vec<ColumnDefinition>) {
    let mut registry = TableRegistry::new();
    let result = registry.register(kinds::pod::KIND, columns, kinds::pod::render);

    assert!(matches!(result, Err(RegistryError::InvalidHandler { kind: "Pod", .. })));
    assert!(!registry.contains("Pod"));
}

#[test]
fn generate_unregistered_kind_test() {
    let registry = TableRegistry::new();
    let list = pods(Vec::new(), ListMeta::default());

    let result = registry.generate(&list, GenerateOptions::default());
    assert!(matches!(result, Err(GenerateError::UnregisteredKind("Pod"))));
}

#[test]
fn generate_render_error_test() {
    // A handler registered under the wrong kind receives lists it rejects.
    let mut registry = TableRegistry::new();
    registry
        .register(kinds::pod::KIND, kinds::event::columns(), kinds::event::render)
        .unwrap();

    let list = pods(Vec::new(), ListMeta::default());
    let result = registry.generate(&list, GenerateOptions::default());
    assert!(matches!(
        result,
        Err(GenerateError::Render(RenderError::UnexpectedKind {
            handler: "Event",
            actual: "Pod",
        }))
    ));
}

#[test]
fn generate_cell_count_mismatch_test() {
    fn short_row(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
        Ok(vec![TableRow::new(vec!["only one cell".into()]); list.len()])
    }

    let mut registry = TableRegistry::new();
    registry
        .register(
            kinds::pod::KIND,
            vec![
                ColumnDefinition::name("Name of the pod."),
                ColumnDefinition::string("Age", "Time since creation."),
            ],
            short_row,
        )
        .unwrap();

    let list = pods(vec![named_pod("api-5d4f7")], ListMeta::default());
    let result = registry.generate(&list, GenerateOptions::default());
    assert!(matches!(
        result,
        Err(GenerateError::CellCountMismatch {
            kind: "Pod",
            row: 0,
            cells: 1,
            columns: 2,
        })
    ));
}

#[test]
fn generate_wide_filtering_test() {
    let registry = TableRegistry::with_defaults().unwrap();
    let list = pods(vec![named_pod("api-5d4f7")], ListMeta::default());

    let table = registry.generate(&list, GenerateOptions::default()).unwrap();
    assert_eq!(5, table.column_definitions.len());
    assert_eq!(5, table.rows[0].cells.len());
    assert!(table.column_definitions.iter().all(|column| column.priority == 0));

    let table = registry.generate(&list, GenerateOptions::wide()).unwrap();
    assert_eq!(9, table.column_definitions.len());
    assert_eq!(9, table.rows[0].cells.len());
}

#[test]
fn generate_positional_mask_test() {
    // Wide columns in the middle of the catalog must drop the matching cells,
    // not just truncate the row.
    let registry = TableRegistry::with_defaults().unwrap();
    let event = Event {
        metadata: ObjectMeta {
            name: Some("api-5d4f7.17f".to_owned()),
            ..Default::default()
        },
        message: Some("Started container api".to_owned()),
        reason: Some("Started".to_owned()),
        type_: Some("Normal".to_owned()),
        ..Default::default()
    };
    let list: ResourceList = List {
        items: vec![event],
        metadata: ListMeta::default(),
    }
    .into();

    let table = registry.generate(&list, GenerateOptions::default()).unwrap();
    let names = table.column_definitions.iter().map(|c| c.name).collect::<Vec<_>>();
    assert_eq!(vec!["Last Seen", "Type", "Reason", "Object", "Message"], names);
    assert_eq!(
        vec![
            CellValue::from("<unknown>"),
            CellValue::from("Normal"),
            CellValue::from("Started"),
            CellValue::from(""),
            CellValue::from("Started container api"),
        ],
        table.rows[0].cells
    );
}

#[test]
fn generate_pagination_test() {
    let registry = TableRegistry::with_defaults().unwrap();
    let metadata = ListMeta {
        resource_version: Some("12345".to_owned()),
        continue_: Some("next-page-token".to_owned()),
        remaining_item_count: Some(42),
        ..Default::default()
    };

    let list = pods(Vec::new(), metadata);
    let table = registry.generate(&list, GenerateOptions::default()).unwrap();

    assert_eq!("12345", table.resource_version);
    assert_eq!("next-page-token", table.continue_token);
    assert_eq!(Some(42), table.remaining_item_count);
    assert!(table.rows.is_empty());
}

#[test]
fn generate_deterministic_test() {
    let registry = TableRegistry::with_defaults().unwrap();
    let list = pods(vec![named_pod("api-5d4f7"), named_pod("api-8xk2p")], ListMeta::default());

    let first = registry.generate(&list, GenerateOptions::wide()).unwrap();
    let second = registry.generate(&list, GenerateOptions::wide()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn generate_empty_lists_test() {
    macro_rules! empty_lists {
        ($($resource:ty),+ $(,)?) => {
            vec![$(ResourceList::from(List::<$resource> {
                items: Vec::new(),
                metadata: ListMeta::default(),
            }),)+]
        };
    }

    let lists = empty_lists![
        Pod,
        Deployment,
        ReplicaSet,
        DaemonSet,
        StatefulSet,
        ControllerRevision,
        Job,
        CronJob,
        Service,
        Endpoints,
        EndpointSlice,
        Ingress,
        IngressClass,
        NetworkPolicy,
        Node,
        Namespace,
        Event,
        Secret,
        ConfigMap,
        ServiceAccount,
        PersistentVolume,
        PersistentVolumeClaim,
        StorageClass,
        PriorityClass,
        RoleBinding,
        ClusterRoleBinding,
        CertificateSigningRequest,
        Lease,
        ResourceQuota,
        PodDisruptionBudget,
        HorizontalPodAutoscaler,
        FlowSchema,
        PriorityLevelConfiguration,
        MutatingWebhookConfiguration,
        ValidatingWebhookConfiguration,
    ];
    assert_eq!(35, lists.len());

    let registry = TableRegistry::with_defaults().unwrap();
    for list in &lists {
        let table = registry.generate(list, GenerateOptions::default()).unwrap();
        assert!(table.rows.is_empty(), "{} rows not empty", list.kind());
        assert!(!table.column_definitions.is_empty(), "{} has no columns", list.kind());
        assert!(
            table.column_definitions.iter().all(|column| column.priority == 0),
            "{} leaked wide columns",
            list.kind()
        );
    }
}

#[test]
fn with_defaults_test() {
    let registry = TableRegistry::with_defaults().unwrap();
    assert_eq!(35, registry.kinds().count());
    for kind in ["Pod", "Deployment", "Event", "FlowSchema", "MutatingWebhookConfiguration"] {
        assert!(registry.contains(kind), "missing handler for {kind}");
    }
}
