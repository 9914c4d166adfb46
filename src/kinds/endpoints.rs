use k8s_openapi::api::core::v1::Endpoints;

use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
    utils::join_host_port,
};

#[cfg(test)]
#[path = "./endpoints.tests.rs"]
mod endpoints_tests;

pub const KIND: &str = "Endpoints";

const MAX_ENDPOINTS: usize = 3;

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the endpoints object."),
        ColumnDefinition::string("Endpoints", "Addresses and ports of the backing pods."),
        ColumnDefinition::string("Age", "Time since the endpoints object was created."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::Endpoints(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    Ok(list
        .items
        .iter()
        .map(|endpoints| {
            TableRow::new(vec![
                object_name(&endpoints.metadata).into(),
                format_endpoints(endpoints).into(),
                object_age(&endpoints.metadata).into(),
            ])
        })
        .collect())
}

fn format_endpoints(endpoints: &Endpoints) -> String {
    let Some(subsets) = endpoints.subsets.as_deref().filter(|s| !s.is_empty()) else {
        return "<none>".to_owned();
    };

    let mut list = Vec::new();
    let mut more = false;
    let mut count = 0;
    for subset in subsets {
        let addresses = subset.addresses.as_deref().unwrap_or_default();
        let ports = subset.ports.as_deref().unwrap_or_default();

        // Headless services can have no ports.
        if ports.is_empty() {
            count += addresses.len();
            for address in addresses {
                if list.len() == MAX_ENDPOINTS {
                    more = true;
                    break;
                }

                list.push(address.ip.clone());
            }

            continue;
        }

        for port in ports {
            count += addresses.len();
            for address in addresses {
                if list.len() == MAX_ENDPOINTS {
                    more = true;
                    break;
                }

                list.push(join_host_port(&address.ip, port.port));
            }
        }
    }

    let joined = list.join(",");
    if more {
        format!("{joined} + {} more...", count - MAX_ENDPOINTS)
    } else {
        joined
    }
}
