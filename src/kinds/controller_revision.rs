use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
};

#[cfg(test)]
#[path = "./controller_revision.tests.rs"]
mod controller_revision_tests;

pub const KIND: &str = "ControllerRevision";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the controller revision."),
        ColumnDefinition::string("Controller", "Controller that owns the revision."),
        ColumnDefinition::string("Revision", "Revision number."),
        ColumnDefinition::string("Age", "Time since the controller revision was created."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::ControllerRevisions(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    let mut rows = Vec::with_capacity(list.items.len());
    for revision in &list.items {
        let mut controller = "<none>".to_owned();
        let owner = revision
            .metadata
            .owner_references
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|reference| reference.controller == Some(true));
        if let Some(owner) = owner {
            let (group, _) = parse_group_version(&owner.api_version)?;
            let group_kind = if group.is_empty() {
                owner.kind.clone()
            } else {
                format!("{}.{group}", owner.kind)
            };
            controller = format!("{}/{}", group_kind.to_lowercase(), owner.name);
        }

        rows.push(TableRow::new(vec![
            object_name(&revision.metadata).into(),
            controller.into(),
            revision.revision.into(),
            object_age(&revision.metadata).into(),
        ]));
    }

    Ok(rows)
}

/// Splits an `apiVersion` value into its group and version parts. The group
/// is empty for the legacy core API.
fn parse_group_version(api_version: &str) -> Result<(String, String), RenderError> {
    match api_version.split('/').collect::<Vec<_>>().as_slice() {
        [version] => Ok((String::new(), (*version).to_owned())),
        [group, version] => Ok(((*group).to_owned(), (*version).to_owned())),
        _ => Err(RenderError::InvalidGroupVersion(api_version.to_owned())),
    }
}
