use k8s_openapi::api::core::v1::PersistentVolumeClaim;

use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
    utils::{BETA_STORAGE_CLASS_ANNOTATION, access_modes_string},
};

pub const KIND: &str = "PersistentVolumeClaim";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the persistent volume claim."),
        ColumnDefinition::string("Status", "Phase of the claim lifecycle."),
        ColumnDefinition::string("Volume", "Name of the volume backing the claim."),
        ColumnDefinition::string("Capacity", "Actual capacity of the underlying volume."),
        ColumnDefinition::string("Access Modes", "Actual access modes of the underlying volume."),
        ColumnDefinition::string("StorageClass", "Storage class of the claim."),
        ColumnDefinition::string("VolumeAttributesClass", "Volume attributes class of the claim."),
        ColumnDefinition::string("Age", "Time since the claim was created."),
        ColumnDefinition::string("VolumeMode", "Whether the volume is used with a filesystem or as a raw block device.")
            .wide(),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::PersistentVolumeClaims(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for claim in &list.items {
        let spec = claim.spec.as_ref();
        let status = claim.status.as_ref();

        let phase = if claim.metadata.deletion_timestamp.is_some() {
            "Terminating".to_owned()
        } else {
            status.and_then(|s| s.phase.clone()).unwrap_or_default()
        };

        let volume_name = spec.and_then(|s| s.volume_name.as_deref()).unwrap_or_default();
        let mut capacity = String::new();
        let mut access_modes = String::new();
        if !volume_name.is_empty() {
            access_modes = access_modes_string(status.and_then(|s| s.access_modes.as_deref()).unwrap_or_default());
            capacity = status
                .and_then(|s| s.capacity.as_ref())
                .and_then(|c| c.get("storage"))
                .map(|quantity| quantity.0.clone())
                .unwrap_or_else(|| "0".to_owned());
        }

        rows.push(TableRow::new(vec![
            object_name(&claim.metadata).into(),
            phase.into(),
            volume_name.into(),
            capacity.into(),
            access_modes.into(),
            claim_class(claim).into(),
            spec.and_then(|s| s.volume_attributes_class_name.as_deref())
                .unwrap_or("<unset>")
                .into(),
            object_age(&claim.metadata).into(),
            spec.and_then(|s| s.volume_mode.as_deref()).unwrap_or("<unset>").into(),
        ]));
    }

    Ok(rows)
}

/// Returns the storage class of the claim, preferring the legacy annotation
/// over the spec field.
fn claim_class(claim: &PersistentVolumeClaim) -> String {
    if let Some(class) = claim
        .metadata
        .annotations
        .as_ref()
        .and_then(|a| a.get(BETA_STORAGE_CLASS_ANNOTATION))
    {
        return class.clone();
    }

    claim
        .spec
        .as_ref()
        .and_then(|s| s.storage_class_name.clone())
        .unwrap_or_default()
}
