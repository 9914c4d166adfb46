use std::collections::{HashMap, HashSet};

use tracing::{error, warn};

use crate::{
    resource_list::ResourceList,
    table::{ColumnDefinition, Table, TableRow},
};

#[cfg(test)]
#[path = "./registry.tests.rs"]
mod registry_tests;

/// Attributes controlling table generation.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenerateOptions {
    /// Includes wide (priority > 0) columns in the output.
    pub wide: bool,
}

impl GenerateOptions {
    /// Options for wide output.
    pub const fn wide() -> Self {
        Self { wide: true }
    }
}

/// Renders all items of one resource list into table rows. The row cells must
/// match the full column catalog registered for the kind, including wide
/// columns.
pub type RenderFn = fn(&ResourceList) -> Result<Vec<TableRow>, RenderError>;

/// Possible errors when registering a table handler.
#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    /// Column definitions violate the registration contract.
    #[error("invalid table handler for kind {kind}: {reason}")]
    InvalidHandler { kind: &'static str, reason: String },

    /// A handler is already registered for the kind.
    #[error("duplicate table handler registered for kind {0}")]
    DuplicateHandler(&'static str),
}

/// Possible errors from a kind-specific render function.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// The render function received a list of a different kind.
    #[error("{handler} table handler received a {actual} list")]
    UnexpectedKind { handler: &'static str, actual: &'static str },

    /// An owner reference carries an unparsable group/version.
    #[error("unparsable group/version: {0}")]
    InvalidGroupVersion(String),
}

impl RenderError {
    pub(crate) fn unexpected_kind(handler: &'static str, actual: &'static str) -> Self {
        Self::UnexpectedKind { handler, actual }
    }
}

/// Possible errors from table generation.
#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    /// No table handler is registered for the kind.
    #[error("no table handler registered for kind {0}")]
    UnregisteredKind(&'static str),

    /// The render function for the kind failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// A renderer emitted a row whose cell count does not match its columns.
    #[error("{kind} row {row} has {cells} cells, expected {columns}")]
    CellCountMismatch {
        kind: &'static str,
        row: usize,
        cells: usize,
        columns: usize,
    },
}

struct HandlerEntry {
    columns: Vec<ColumnDefinition>,
    render: RenderFn,
}

/// Maps resource kinds to their column catalogs and render functions.
/// Intended to be built once at startup and only read afterwards.
#[derive(Default)]
pub struct TableRegistry {
    handlers: HashMap<&'static str, HandlerEntry>,
}

impl TableRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with all built-in kinds registered.
    pub fn with_defaults() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        crate::kinds::register_defaults(&mut registry)?;
        Ok(registry)
    }

    /// Registers a table handler for `kind`. Rejected registrations leave the
    /// registry unchanged.
    pub fn register(
        &mut self,
        kind: &'static str,
        columns: Vec<ColumnDefinition>,
        render: RenderFn,
    ) -> Result<(), RegistryError> {
        if let Err(reason) = validate_columns(&columns) {
            error!("cannot register table handler for {kind}: {reason}");
            return Err(RegistryError::InvalidHandler { kind, reason });
        }

        if self.handlers.contains_key(kind) {
            error!("duplicate table handler registration for {kind}");
            return Err(RegistryError::DuplicateHandler(kind));
        }

        self.handlers.insert(kind, HandlerEntry { columns, render });
        Ok(())
    }

    /// Returns `true` if a handler is registered for `kind`.
    pub fn contains(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    /// Returns all registered kinds, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    /// Generates a table for the provided resource list. Wide columns and
    /// their cells are dropped from the output unless `options.wide` is set.
    pub fn generate(&self, list: &ResourceList, options: GenerateOptions) -> Result<Table, GenerateError> {
        let kind = list.kind();
        let handler = self.handlers.get(kind).ok_or(GenerateError::UnregisteredKind(kind))?;
        let rows = (handler.render)(list)?;

        let emitted = handler
            .columns
            .iter()
            .map(|column| options.wide || column.priority == 0)
            .collect::<Vec<_>>();
        let column_definitions = handler
            .columns
            .iter()
            .zip(&emitted)
            .filter(|(_, emitted)| **emitted)
            .map(|(column, _)| column.clone())
            .collect();

        let mut table_rows = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            if row.cells.len() != emitted.len() {
                warn!(
                    "{kind} renderer emitted {} cells for row {index}, expected {}",
                    row.cells.len(),
                    emitted.len()
                );
                return Err(GenerateError::CellCountMismatch {
                    kind,
                    row: index,
                    cells: row.cells.len(),
                    columns: emitted.len(),
                });
            }

            let cells = row
                .cells
                .into_iter()
                .zip(&emitted)
                .filter(|(_, emitted)| **emitted)
                .map(|(cell, _)| cell)
                .collect();
            table_rows.push(TableRow {
                cells,
                conditions: row.conditions,
            });
        }

        let metadata = list.list_meta();
        Ok(Table {
            column_definitions,
            rows: table_rows,
            resource_version: metadata.resource_version.clone().unwrap_or_default(),
            continue_token: metadata.continue_.clone().unwrap_or_default(),
            remaining_item_count: metadata.remaining_item_count,
        })
    }
}

fn validate_columns(columns: &[ColumnDefinition]) -> Result<(), String> {
    if columns.is_empty() {
        return Err("column definitions must not be empty".to_owned());
    }

    let mut names = HashSet::new();
    for column in columns {
        if column.name.is_empty() {
            return Err("column name must not be empty".to_owned());
        }

        if !names.insert(column.name) {
            return Err(format!("duplicate column name {}", column.name));
        }

        if column.priority < 0 {
            return Err(format!("column {} has a negative priority", column.name));
        }
    }

    if !columns.iter().any(|column| column.priority == 0) {
        return Err("at least one default (priority 0) column is required".to_owned());
    }

    Ok(())
}
