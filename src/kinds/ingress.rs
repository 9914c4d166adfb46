use k8s_openapi::api::networking::v1::{IngressLoadBalancerStatus, IngressRule, IngressTLS};

use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
};

#[cfg(test)]
#[path = "./ingress.tests.rs"]
mod ingress_tests;

pub const KIND: &str = "Ingress";

const MAX_HOSTS: usize = 3;

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the ingress."),
        ColumnDefinition::string("Class", "Name of the ingress class used for additional configuration."),
        ColumnDefinition::string("Hosts", "Hosts that incoming requests are matched against."),
        ColumnDefinition::string("Address", "Ingress points of the load balancer."),
        ColumnDefinition::string("Ports", "Ports the ingress is reachable at."),
        ColumnDefinition::string("Age", "Time since the ingress was created."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::Ingresses(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for ingress in &list.items {
        let spec = ingress.spec.as_ref();
        let class_name = spec
            .and_then(|s| s.ingress_class_name.as_deref())
            .unwrap_or("<none>");
        let rules = spec.and_then(|s| s.rules.as_deref()).unwrap_or_default();
        let tls = spec.and_then(|s| s.tls.as_deref()).unwrap_or_default();
        let address = load_balancer_ingress(ingress.status.as_ref().and_then(|s| s.load_balancer.as_ref()));

        rows.push(TableRow::new(vec![
            object_name(&ingress.metadata).into(),
            class_name.into(),
            format_hosts(rules).into(),
            address.into(),
            format_ports(tls).into(),
            object_age(&ingress.metadata).into(),
        ]));
    }

    Ok(rows)
}

fn format_hosts(rules: &[IngressRule]) -> String {
    let mut list = Vec::new();
    let mut more = false;
    for rule in rules {
        if list.len() == MAX_HOSTS {
            more = true;
        }

        if more {
            continue;
        }

        if let Some(host) = rule.host.as_deref().filter(|h| !h.is_empty()) {
            list.push(host);
        }
    }

    if list.is_empty() {
        return "*".to_owned();
    }

    let joined = list.join(",");
    if more {
        format!("{joined} + {} more...", rules.len() - MAX_HOSTS)
    } else {
        joined
    }
}

fn format_ports(tls: &[IngressTLS]) -> &'static str {
    if tls.is_empty() { "80" } else { "80, 443" }
}

/// Summarizes ingress load balancer entries, keeping the first occurrence of
/// every IP or hostname so repeated generation yields the same string.
fn load_balancer_ingress(status: Option<&IngressLoadBalancerStatus>) -> String {
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
