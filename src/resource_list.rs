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
    apimachinery::pkg::apis::meta::v1::ListMeta,
};

macro_rules! resource_lists {
    ($($variant:ident => $kind:literal, $type:ty;)+) => {
        /// A strongly typed list of cluster resources accepted by the table
        /// generation engine.
        ///
        /// The set of variants is closed, so a render function registered for
        /// a kind can rely on receiving the matching variant and everything
        /// else is rejected at compile time.
        #[derive(Clone, Debug)]
        pub enum ResourceList {
            $($variant(List<$type>),)+
        }

        impl ResourceList {
            /// Returns the kind of the items the list holds.
            pub fn kind(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $kind,)+
                }
            }

            /// Returns the list metadata carrying pagination details.
            pub fn list_meta(&self) -> &ListMeta {
                match self {
                    $(Self::$variant(list) => &list.metadata,)+
                }
            }

            /// Returns the number of items in the list.
            pub fn len(&self) -> usize {
                match self {
                    $(Self::$variant(list) => list.items.len(),)+
                }
            }

            /// Returns `true` if the list has no items.
            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }
        }

        $(
            impl From<List<$type>> for ResourceList {
                fn from(list: List<$type>) -> Self {
                    Self::$variant(list)
                }
            }
        )+
    };
}

resource_lists! {
    Pods => "Pod", Pod;
    Deployments => "Deployment", Deployment;
    ReplicaSets => "ReplicaSet", ReplicaSet;
    DaemonSets => "DaemonSet", DaemonSet;
    StatefulSets => "StatefulSet", StatefulSet;
    ControllerRevisions => "ControllerRevision", ControllerRevision;
    Jobs => "Job", Job;
    CronJobs => "CronJob", CronJob;
    Services => "Service", Service;
    Endpoints => "Endpoints", Endpoints;
    EndpointSlices => "EndpointSlice", EndpointSlice;
    Ingresses => "Ingress", Ingress;
    IngressClasses => "IngressClass", IngressClass;
    NetworkPolicies => "NetworkPolicy", NetworkPolicy;
    Nodes => "Node", Node;
    Namespaces => "Namespace", Namespace;
    Events => "Event", Event;
    Secrets => "Secret", Secret;
    ConfigMaps => "ConfigMap", ConfigMap;
    ServiceAccounts => "ServiceAccount", ServiceAccount;
    PersistentVolumes => "PersistentVolume", PersistentVolume;
    PersistentVolumeClaims => "PersistentVolumeClaim", PersistentVolumeClaim;
    StorageClasses => "StorageClass", StorageClass;
    PriorityClasses => "PriorityClass", PriorityClass;
    RoleBindings => "RoleBinding", RoleBinding;
    ClusterRoleBindings => "ClusterRoleBinding", ClusterRoleBinding;
    CertificateSigningRequests => "CertificateSigningRequest", CertificateSigningRequest;
    Leases => "Lease", Lease;
    ResourceQuotas => "ResourceQuota", ResourceQuota;
    PodDisruptionBudgets => "PodDisruptionBudget", PodDisruptionBudget;
    HorizontalPodAutoscalers => "HorizontalPodAutoscaler", HorizontalPodAutoscaler;
    FlowSchemas => "FlowSchema", FlowSchema;
    PriorityLevelConfigurations => "PriorityLevelConfiguration", PriorityLevelConfiguration;
    MutatingWebhookConfigurations => "MutatingWebhookConfiguration", MutatingWebhookConfiguration;
    ValidatingWebhookConfigurations => "ValidatingWebhookConfiguration", ValidatingWebhookConfiguration;
}
