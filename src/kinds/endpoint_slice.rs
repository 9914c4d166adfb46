use k8s_openapi::api::discovery::v1::{Endpoint, EndpointPort};

use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
    utils::list_with_more,
};

#[cfg(test)]
#[path = "./endpoint_slice.tests.rs"]
mod endpoint_slice_tests;

pub const KIND: &str = "EndpointSlice";

const MAX_ENDPOINTS: usize = 3;

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the endpoint slice."),
        ColumnDefinition::string("AddressType", "Type of the addresses carried by the slice."),
        ColumnDefinition::string("Ports", "Ports exposed by the endpoints in the slice."),
        ColumnDefinition::string("Endpoints", "Addresses of the endpoints in the slice."),
        ColumnDefinition::string("Age", "Time since the endpoint slice was created."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::EndpointSlices(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    Ok(list
        .items
        .iter()
        .map(|slice| {
            TableRow::new(vec![
                object_name(&slice.metadata).into(),
                slice.address_type.clone().into(),
                format_ports(slice.ports.as_deref().unwrap_or_default()).into(),
                format_addresses(&slice.endpoints).into(),
                object_age(&slice.metadata).into(),
            ])
        })
        .collect())
}

fn format_ports(ports: &[EndpointPort]) -> String {
    let mut list = Vec::new();
    let mut more = false;
    let mut count = 0;
    for port in ports {
        if list.len() < MAX_ENDPOINTS {
            let number = match (port.port, port.name.as_deref()) {
                (Some(port), _) => port.to_string(),
                (None, Some(name)) => name.to_owned(),
                (None, None) => "*".to_owned(),
            };
            list.push(number);
        } else if list.len() == MAX_ENDPOINTS {
            more = true;
        }

        count += 1;
    }

    list_with_more(&list, more, count, MAX_ENDPOINTS)
}

fn format_addresses(endpoints: &[Endpoint]) -> String {
    let mut list = Vec::new();
    let mut more = false;
    let mut count = 0;
    for endpoint in endpoints {
        for address in &endpoint.addresses {
            if list.len() < MAX_ENDPOINTS {
                list.push(address.clone());
            } else if list.len() == MAX_ENDPOINTS {
                more = true;
            }

            count += 1;
        }
    }

    list_with_more(&list, more, count, MAX_ENDPOINTS)
}
