use crate::{
    kinds::{object_age, object_name},
    registry::RenderError,
    resource_list::ResourceList,
    table::{ColumnDefinition, TableRow},
};

pub const KIND: &str = "ServiceAccount";

pub fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::name("Name of the service account."),
        ColumnDefinition::string("Secrets", "Number of secrets the account may use."),
        ColumnDefinition::string("Age", "Time since the service account was created."),
    ]
}

pub fn render(list: &ResourceList) -> Result<Vec<TableRow>, RenderError> {
    let ResourceList::ServiceAccounts(list) = list else {
        return Err(RenderError::unexpected_kind(KIND, list.kind()));
    };

    Ok(list
        .items
        .iter()
        .map(|account| {
            let secrets = account.secrets.as_ref().map(Vec::len).unwrap_or_default();
            TableRow::new(vec![
                object_name(&account.metadata).into(),
                (secrets as i64).into(),
                object_age(&account.metadata).into(),
            ])
        })
        .collect())
}
