use k8s_openapi::{api::certificates::v1::CertificateSigningRequest, chrono::Duration};

use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
    utils::format_duration,
};

#[cfg(test)]
#[path = "./certificate_signing_request.tests.rs"]
mod certificate_signing_request_tests;

pub const KIND: &str = "CertificateSigningRequest";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the certificate signing request."),
        ColumnDefinition::string("Age", "Time since the request was created."),
        ColumnDefinition::string("SignerName", "Signer the request is addressed to."),
        ColumnDefinition::string("Requestor", "User that created the request."),
        ColumnDefinition::string("RequestedDuration", "Requested validity of the issued certificate."),
        ColumnDefinition::string("Condition", "Approval state of the request."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::CertificateSigningRequests(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for request in &list.items {
        let signer_name = if request.spec.signer_name.is_empty() {
            "<none>"
        } else {
            request.spec.signer_name.as_str()
        };
        let requested_duration = match request.spec.expiration_seconds {
            Some(seconds) => format_duration(Duration::seconds(i64::from(seconds))),
            None => "<none>".to_owned(),
        };

        rows.push(TableRow::new(vec![
            object_name(&request.metadata).into(),
            object_age(&request.metadata).into(),
            signer_name.into(),
            request.spec.username.clone().unwrap_or_default().into(),
            requested_duration.into(),
            extract_status(request).into(),
        ]));
    }

    Ok(rows)
}

/// Summarizes the request conditions, in order of precedence.
fn extract_status(request: &CertificateSigningRequest) -> String {
    let mut approved = false;
    let mut denied = false;
    let mut failed = false;
    let conditions = request
        .status
        .as_ref()
        .and_then(|s| s.conditions.as_deref())
        .unwrap_or_default();
    for condition in conditions {
        match condition.type_.as_str() {
            "Approved" => approved = true,
            "Denied" => denied = true,
            "Failed" => failed = true,
            _ => {},
        }
    }

    let mut status = if denied {
        "Denied".to_owned()
    } else if approved {
        "Approved".to_owned()
    } else {
        "Pending".to_owned()
    };

    if failed {
        status.push_str(",Failed");
    }

    let issued = request
        .status
        .as_ref()
        .and_then(|s| s.certificate.as_ref())
        .is_some_and(|certificate| !certificate.0.is_empty());
    if issued {
        status.push_str(",Issued");
    }

    status
}
