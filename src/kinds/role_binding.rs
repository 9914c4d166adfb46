use k8s_openapi::{
    api::rbac::v1::{RoleRef, Subject},
    apimachinery::pkg::apis::meta::v1::ObjectMeta,
};

use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
};

#[cfg(test)]
#[path = "./role_binding.tests.rs"]
mod role_binding_tests;

pub const ROLE_BINDING_KIND: &str = "RoleBinding";
pub const CLUSTER_ROLE_BINDING_KIND: &str = "ClusterRoleBinding";

pub fn role_binding_columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the role binding."),
        ColumnDefinition::string("Role", "Role the binding grants."),
        ColumnDefinition::string("Age", "Time since the role binding was created."),
        ColumnDefinition::string("Users", "Users in the role binding.").wide(),
        ColumnDefinition::string("Groups", "Groups in the role binding.").wide(),
        ColumnDefinition::string("ServiceAccounts", "Service accounts in the role binding.").wide(),
    ]
}

pub fn cluster_role_binding_columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the cluster role binding."),
        ColumnDefinition::string("Role", "Role the binding grants."),
        ColumnDefinition::string("Age", "Time since the cluster role binding was created."),
        ColumnDefinition::string("Users", "Users in the cluster role binding.").wide(),
        ColumnDefinition::string("Groups", "Groups in the cluster role binding.").wide(),
        ColumnDefinition::string("ServiceAccounts", "Service accounts in the cluster role binding.").wide(),
    ]
}

pub fn render_role_bindings(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::RoleBindings(list) = list else {
        return Err(RenderError::unexpected_kind(ROLE_BINDING_KIND, list.kind()));
    };

    Ok(list
        .items
        .iter()
        .map(|binding| binding_row(&binding.metadata, &binding.role_ref, binding.subjects.as_deref()))
        .collect())
}

pub fn render_cluster_role_bindings(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::ClusterRoleBindings(list) = list else {
        return Err(RenderError::unexpected_kind(CLUSTER_ROLE_BINDING_KIND, list.kind()));
    };

    Ok(list
        .items
        .iter()
        .map(|binding| binding_row(&binding.metadata, &binding.role_ref, binding.subjects.as_deref()))
        .collect())
}

fn binding_row(metadata: &ObjectMeta, role_ref: &RoleRef, subjects: Option<&[Subject]>) -> TableRow {
    let (users, groups, accounts) = subject_strings(subjects.unwrap_or_default());
    TableRow::new(vec![
        object_name(metadata).into(),
        format!("{}/{}", role_ref.kind, role_ref.name).into(),
        object_age(metadata).into(),
        users.join(", ").into(),
        groups.join(", ").into(),
        accounts.join(", ").into(),
    ])
}

/// Splits subjects into users, groups and namespaced service accounts.
fn subject_strings(subjects: &[Subject]) -> (Vec<String>, Vec<String>, Vec<String>) {
    let mut users = Vec::new();
    let mut groups = Vec::new();
    let mut accounts = Vec::new();
    for subject in subjects {
        match subject.kind.as_str() {
            "ServiceAccount" => accounts.push(format!(
                "{}/{}",
                subject.namespace.as_deref().unwrap_or_default(),
                subject.name
            )),
            "User" => users.push(subject.name.clone()),
            "Group" => groups.push(subject.name.clone()),
            _ => {},
        }
    }

    (users, groups, accounts)
}
