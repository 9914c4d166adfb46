use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
};

#[cfg(test)]
#[path = "./storage_class.tests.rs"]
mod storage_class_tests;

pub const KIND: &str = "StorageClass";

const IS_DEFAULT_ANNOTATION: &str = "storageclass.kubernetes.io/is-default-class";
const BETA_IS_DEFAULT_ANNOTATION: &str = "storageclass.beta.kubernetes.io/is-default-class";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the storage class."),
        ColumnDefinition::string("Provisioner", "Type of the provisioner backing the class."),
        ColumnDefinition::string("ReclaimPolicy", "Reclaim policy applied to dynamically provisioned volumes."),
        ColumnDefinition::string("VolumeBindingMode", "How claims against the class are bound and provisioned."),
        ColumnDefinition::string("AllowVolumeExpansion", "Whether volumes of the class can be expanded."),
        ColumnDefinition::string("Age", "Time since the storage class was created."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::StorageClasses(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for class in &list.items {
        let mut name = object_name(&class.metadata);
        if is_default_class(&class.metadata) {
            name.push_str(" (default)");
        }

        rows.push(TableRow::new(vec![
            name.into(),
            class.provisioner.clone().into(),
            class.reclaim_policy.as_deref().unwrap_or("Delete").into(),
            class.volume_binding_mode.as_deref().unwrap_or("Immediate").into(),
            class.allow_volume_expansion.unwrap_or_default().into(),
            object_age(&class.metadata).into(),
        ]));
    }

    Ok(rows)
}

fn is_default_class(metadata: &ObjectMeta) -> bool {
    let Some(annotations) = metadata.annotations.as_ref() else {
        return false;
    };

    annotations.get(IS_DEFAULT_ANNOTATION).map(String::as_str) == Some("true")
        || annotations.get(BETA_IS_DEFAULT_ANNOTATION).map(String::as_str) == Some("true")
}
