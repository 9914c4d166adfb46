use k8s_openapi::api::core::v1::Node;

use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
};

#[cfg(test)]
#[path = "./node.tests.rs"]
mod node_tests;

pub const KIND: &str = "Node";

const NODE_ROLE_PREFIX: &str = "node-role.kubernetes.io/";
const NODE_ROLE_LABEL: &str = "kubernetes.io/role";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the node."),
        ColumnDefinition::string("Status", "Readiness and schedulability of the node."),
        ColumnDefinition::string("Roles", "Roles assigned to the node."),
        ColumnDefinition::string("Age", "Time since the node was created."),
        ColumnDefinition::string("Version", "Kubelet version reported by the node."),
        ColumnDefinition::string("Internal-IP", "IP address of the node within the cluster.").wide(),
        ColumnDefinition::string("External-IP", "IP address of the node reachable from outside the cluster.").wide(),
        ColumnDefinition::string("OS-Image", "Operating system image reported by the node.").wide(),
        ColumnDefinition::string("Kernel-Version", "Kernel version reported by the node.").wide(),
        ColumnDefinition::string("Container-Runtime", "Container runtime version reported by the node.").wide(),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::Nodes(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    Ok(list.items.iter().map(row).collect())
}

fn row(node: &Node) -> TableRow {
    let status = node.status.as_ref();
    let conditions = status.and_then(|s| s.conditions.as_deref()).unwrap_or_default();

    // The last condition of a type wins, matching the API server behavior for
    // duplicated condition entries.
    let mut state = Vec::new();
    if let Some(ready) = conditions.iter().filter(|c| c.type_ == "Ready").last() {
        if ready.status == "True" {
            state.push("Ready".to_owned());
        } else {
            state.push("NotReady".to_owned());
        }
    }

    if state.is_empty() {
        state.push("Unknown".to_owned());
    }

    if node.spec.as_ref().is_some_and(|s| s.unschedulable == Some(true)) {
        state.push("SchedulingDisabled".to_owned());
    }

    let roles = node_roles(node);
    let roles = if roles.is_empty() { "<none>".to_owned() } else { roles.join(",") };

    let info = status.and_then(|s| s.node_info.as_ref());
    let kubelet_version = info.map(|i| i.kubelet_version.clone()).unwrap_or_default();
    let os_image = info
        .map(|i| i.os_image.as_str())
        .filter(|v| !v.is_empty())
        .unwrap_or("<unknown>");
    let kernel_version = info
        .map(|i| i.kernel_version.as_str())
        .filter(|v| !v.is_empty())
        .unwrap_or("<unknown>");
    let runtime_version = info
        .map(|i| i.container_runtime_version.as_str())
        .filter(|v| !v.is_empty())
        .unwrap_or("<unknown>");

    TableRow::new(vec![
        object_name(&node.metadata).into(),
        state.join(",").into(),
        roles.into(),
        object_age(&node.metadata).into(),
        kubelet_version.into(),
        node_address(node, "InternalIP").into(),
        node_address(node, "ExternalIP").into(),
        os_image.into(),
        kernel_version.into(),
        runtime_version.into(),
    ])
}

/// Returns the first address of the given type, or `<none>`.
fn node_address<'a>(node: &'a Node, address_type: &str) -> &'a str {
    node.status
        .as_ref()
        .and_then(|s| s.addresses.as_deref())
        .unwrap_or_default()
        .iter()
        .find(|address| address.type_ == address_type)
        .map(|address| address.address.as_str())
        .unwrap_or("<none>")
}

/// Collects node roles from `node-role.kubernetes.io/<role>` labels and the
/// legacy `kubernetes.io/role` label, in label order.
fn node_roles(node: &Node) -> Vec<&str> {
    let mut roles = Vec::new();
    for (key, value) in node.metadata.labels.as_ref().into_iter().flatten() {
        if let Some(role) = key.strip_prefix(NODE_ROLE_PREFIX).filter(|r| !r.is_empty()) {
            if !roles.contains(&role) {
                roles.push(role);
            }
        } else if key == NODE_ROLE_LABEL && !value.is_empty() && !roles.contains(&value.as_str()) {
            roles.push(value);
        }
    }

    roles
}
