use k8s_openapi::api::core::v1::{LoadBalancerStatus, Service, ServicePort};

use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
    utils::format_labels,
};

#[cfg(test)]
#[path = "./service.tests.rs"]
mod service_tests;

pub const KIND: &str = "Service";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the service."),
        ColumnDefinition::string("Type", "Type determining how the service is exposed."),
        ColumnDefinition::string("Cluster-IP", "IP address of the service within the cluster."),
        ColumnDefinition::string("External-IP", "IP addresses the service is reachable at from outside the cluster."),
        ColumnDefinition::string("Port(s)", "Ports exposed by the service."),
        ColumnDefinition::string("Age", "Time since the service was created."),
        ColumnDefinition::string("Selector", "Label selector matching the backing pods.").wide(),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::Services(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for service in &list.items {
        let spec = service.spec.as_ref();
        let service_type = spec.and_then(|s| s.type_.as_deref()).unwrap_or_default();
        let cluster_ip = spec
            .and_then(|s| s.cluster_ips.as_ref())
            .and_then(|ips| ips.first())
            .map(String::as_str)
            .unwrap_or("<none>");
        let ports = match spec.and_then(|s| s.ports.as_deref()) {
            Some(ports) if !ports.is_empty() => make_port_string(ports),
            _ => "<none>".to_owned(),
        };

        rows.push(TableRow::new(vec![
            object_name(&service.metadata).into(),
            service_type.into(),
            cluster_ip.into(),
            external_ip(service).into(),
            ports.into(),
            object_age(&service.metadata).into(),
            format_labels(spec.and_then(|s| s.selector.as_ref())).into(),
        ]));
    }

    Ok(rows)
}

fn make_port_string(ports: &[ServicePort]) -> String {
    ports
        .iter()
        .map(|port| {
            let protocol = port.protocol.as_deref().unwrap_or("TCP");
            match port.node_port {
                Some(node_port) if node_port > 0 => format!("{}:{node_port}/{protocol}", port.port),
                _ => format!("{}/{protocol}", port.port),
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn external_ip(service: &Service) -> String {
    let spec = service.spec.as_ref();
    let external_ips = spec.and_then(|s| s.external_ips.as_deref()).unwrap_or_default();

    match spec.and_then(|s| s.type_.as_deref()).unwrap_or_default() {
        "ClusterIP" | "NodePort" => {
            if external_ips.is_empty() {
                "<none>".to_owned()
            } else {
                external_ips.join(",")
            }
        },
        "LoadBalancer" => {
            let ingress = load_balancer_ingress(service.status.as_ref().and_then(|s| s.load_balancer.as_ref()));
            if !external_ips.is_empty() {
                let mut results = Vec::new();
                if !ingress.is_empty() {
                    results.extend(ingress.split(',').map(str::to_owned));
                }

                results.extend(external_ips.iter().cloned());
                results.join(",")
            } else if !ingress.is_empty() {
                ingress
            } else {
                "<pending>".to_owned()
            }
        },
        "ExternalName" => spec.and_then(|s| s.external_name.clone()).unwrap_or_default(),
        _ => "<unknown>".to_owned(),
    }
}

/// Summarizes load balancer ingress points, keeping the first occurrence of
/// every IP or hostname so repeated generation yields the same string.
fn load_balancer_ingress(status: Option<&LoadBalancerStatus>) -> String {
    let Some(ingress) = status.and_then(|s| s.ingress.as_deref()) else {
        return String::new();
    };

    let mut seen: Vec<&str> = Vec::new();
    for entry in ingress {
        let value = entry
            .ip
            .as_deref()
            .filter(|ip| !ip.is_empty())
            .or_else(|| entry.hostname.as_deref().filter(|host| !host.is_empty()));
        if let Some(value) = value {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
    }

    seen.join(",")
}
