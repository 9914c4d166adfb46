use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

use crate::{
    registry::{RegistryError, TableRegistry},
    utils::format_timestamp_since,
};

pub mod certificate_signing_request;
pub mod config_map;
pub mod controller_revision;
pub mod cron_job;
pub mod daemon_set;
pub mod deployment;
pub mod endpoint_slice;
pub mod endpoints;
pub mod event;
pub mod flow_schema;
pub mod horizontal_pod_autoscaler;
pub mod ingress;
pub mod ingress_class;
pub mod job;
pub mod lease;
pub mod namespace;
pub mod network_policy;
pub mod node;
pub mod persistent_volume;
pub mod persistent_volume_claim;
pub mod pod;
pub mod pod_disruption_budget;
pub mod priority_class;
pub mod priority_level_configuration;
pub mod replica_set;
pub mod resource_quota;
pub mod role_binding;
pub mod secret;
pub mod service;
pub mod service_account;
pub mod stateful_set;
pub mod storage_class;
pub mod webhook;

/// Registers table handlers for all built-in kinds.
pub fn register_defaults(registry: &mut TableRegistry) -> Result<(), RegistryError> {
    registry.register(pod::KIND, pod::columns(), pod::render)?;
    registry.register(deployment::KIND, deployment::columns(), deployment::render)?;
    registry.register(replica_set::KIND, replica_set::columns(), replica_set::render)?;
    registry.register(daemon_set::KIND, daemon_set::columns(), daemon_set::render)?;
    registry.register(stateful_set::KIND, stateful_set::columns(), stateful_set::render)?;
    registry.register(
        controller_revision::KIND,
        controller_revision::columns(),
        controller_revision::render,
    )?;
    registry.register(job::KIND, job::columns(), job::render)?;
    registry.register(cron_job::KIND, cron_job::columns(), cron_job::render)?;
    registry.register(service::KIND, service::columns(), service::render)?;
    registry.register(endpoints::KIND, endpoints::columns(), endpoints::render)?;
    registry.register(endpoint_slice::KIND, endpoint_slice::columns(), endpoint_slice::render)?;
    registry.register(ingress::KIND, ingress::columns(), ingress::render)?;
    registry.register(ingress_class::KIND, ingress_class::columns(), ingress_class::render)?;
    registry.register(network_policy::KIND, network_policy::columns(), network_policy::render)?;
    registry.register(node::KIND, node::columns(), node::render)?;
    registry.register(namespace::KIND, namespace::columns(), namespace::render)?;
    registry.register(event::KIND, event::columns(), event::render)?;
    registry.register(secret::KIND, secret::columns(), secret::render)?;
    registry.register(config_map::KIND, config_map::columns(), config_map::render)?;
    registry.register(service_account::KIND, service_account::columns(), service_account::render)?;
    registry.register(
        persistent_volume::KIND,
        persistent_volume::columns(),
        persistent_volume::render,
    )?;
    registry.register(
        persistent_volume_claim::KIND,
        persistent_volume_claim::columns(),
        persistent_volume_claim::render,
    )?;
    registry.register(storage_class::KIND, storage_class::columns(), storage_class::render)?;
    registry.register(priority_class::KIND, priority_class::columns(), priority_class::render)?;
    registry.register(
        role_binding::ROLE_BINDING_KIND,
        role_binding::role_binding_columns(),
        role_binding::render_role_bindings,
    )?;
    registry.register(
        role_binding::CLUSTER_ROLE_BINDING_KIND,
        role_binding::cluster_role_binding_columns(),
        role_binding::render_cluster_role_bindings,
    )?;
    registry.register(
        certificate_signing_request::KIND,
        certificate_signing_request::columns(),
        certificate_signing_request::render,
    )?;
    registry.register(lease::KIND, lease::columns(), lease::render)?;
    registry.register(resource_quota::KIND, resource_quota::columns(), resource_quota::render)?;
    registry.register(
        pod_disruption_budget::KIND,
        pod_disruption_budget::columns(),
        pod_disruption_budget::render,
    )?;
    registry.register(
        horizontal_pod_autoscaler::KIND,
        horizontal_pod_autoscaler::columns(),
        horizontal_pod_autoscaler::render,
    )?;
    registry.register(flow_schema::KIND, flow_schema::columns(), flow_schema::render)?;
    registry.register(
        priority_level_configuration::KIND,
        priority_level_configuration::columns(),
        priority_level_configuration::render,
    )?;
    registry.register(webhook::MUTATING_KIND, webhook::columns(), webhook::render_mutating)?;
    registry.register(webhook::VALIDATING_KIND, webhook::columns(), webhook::render_validating)?;

    Ok(())
}

/// Returns the object name, empty when unset.
pub(crate) fn object_name(metadata: &ObjectMeta) -> String {
    metadata.name.clone().unwrap_or_default()
}

/// Returns the time elapsed since the object was created.
pub(crate) fn object_age(metadata: &ObjectMeta) -> String {
    format_timestamp_since(metadata.creation_timestamp.as_ref())
}
