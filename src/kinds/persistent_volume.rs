use k8s_openapi::api::core::v1::PersistentVolume;

use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
    utils::{BETA_STORAGE_CLASS_ANNOTATION, access_modes_string},
};

pub const KIND: &str = "PersistentVolume";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the persistent volume."),
        ColumnDefinition::string("Capacity", "Storage capacity of the volume."),
        ColumnDefinition::string("Access Modes", "Ways the volume can be mounted."),
        ColumnDefinition::string("Reclaim Policy", "What happens to the volume when released from its claim."),
        ColumnDefinition::string("Status", "Phase of the volume lifecycle."),
        ColumnDefinition::string("Claim", "Binding reference to the claim using the volume."),
        ColumnDefinition::string("StorageClass", "Storage class of the volume."),
        ColumnDefinition::string("VolumeAttributesClass", "Volume attributes class of the volume."),
        ColumnDefinition::string("Reason", "Brief explanation of the current status."),
        ColumnDefinition::string("Age", "Time since the persistent volume was created."),
        ColumnDefinition::string("VolumeMode", "Whether the volume is used with a filesystem or as a raw block device.")
            .wide(),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::PersistentVolumes(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for volume in &list.items {
        let spec = volume.spec.as_ref();
        let status = volume.status.as_ref();

        let claim = match spec.and_then(|s| s.claim_ref.as_ref()) {
            Some(claim_ref) => format!(
                "{}/{}",
                claim_ref.namespace.as_deref().unwrap_or_default(),
                claim_ref.name.as_deref().unwrap_or_default()
            ),
            None => String::new(),
        };

        let capacity = spec
            .and_then(|s| s.capacity.as_ref())
            .and_then(|c| c.get("storage"))
            .map(|quantity| quantity.0.clone())
            .unwrap_or_else(|| "0".to_owned());

        let phase = if volume.metadata.deletion_timestamp.is_some() {
            "Terminating".to_owned()
        } else {
            status.and_then(|s| s.phase.clone()).unwrap_or_default()
        };

        let modes = spec.and_then(|s| s.access_modes.as_deref()).unwrap_or_default();

        rows.push(TableRow::new(vec![
            object_name(&volume.metadata).into(),
            capacity.into(),
            access_modes_string(modes).into(),
            spec.and_then(|s| s.persistent_volume_reclaim_policy.clone())
                .unwrap_or_default()
                .into(),
            phase.into(),
            claim.into(),
            volume_class(volume).into(),
            spec.and_then(|s| s.volume_attributes_class_name.as_deref())
                .unwrap_or("<unset>")
                .into(),
            status.and_then(|s| s.reason.clone()).unwrap_or_default().into(),
            object_age(&volume.metadata).into(),
            spec.and_then(|s| s.volume_mode.as_deref()).unwrap_or("<unset>").into(),
        ]));
    }

    Ok(rows)
}

/// Returns the storage class of the volume, preferring the legacy annotation
/// over the spec field.
fn volume_class(volume: &PersistentVolume) -> String {
    if let Some(class) = volume
        .metadata
        .annotations
        .as_ref()
        .and_then(|a| a.get(BETA_STORAGE_CLASS_ANNOTATION))
    {
        return class.clone();
    }

    volume
        .spec
        .as_ref()
        .and_then(|s| s.storage_class_name.clone())
        .unwrap_or_default()
}
