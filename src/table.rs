use serde::Serialize;

#[cfg(test)]
#[path = "./table.tests.rs"]
mod table_tests;

/// Data type of values in a single table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnDataType {
    String,
    Integer,
    Boolean,
}

/// Describes one column of a generated table.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub data_type: ColumnDataType,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub format: &'static str,
    pub priority: i32,
    pub description: &'static str,
}

impl ColumnDefinition {
    /// Creates a default (always visible) string column.
    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            data_type: ColumnDataType::String,
            format: "",
            priority: 0,
            description,
        }
    }

    /// Creates a default (always visible) integer column.
    pub const fn integer(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            data_type: ColumnDataType::Integer,
            format: "",
            priority: 0,
            description,
        }
    }

    /// Creates a default (always visible) boolean column.
    pub const fn boolean(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            data_type: ColumnDataType::Boolean,
            format: "",
            priority: 0,
            description,
        }
    }

    /// Creates the object name column, carrying the `name` format hint.
    pub const fn name(description: &'static str) -> Self {
        Self {
            name: "Name",
            data_type: ColumnDataType::String,
            format: "name",
            priority: 0,
            description,
        }
    }

    /// Moves the column to wide output only.
    pub const fn wide(mut self) -> Self {
        self.priority = 1;
        self
    }
}

/// A single scalar table cell.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Boolean(bool),
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Well-known row condition types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RowConditionType {
    /// The object backing the row ran to completion.
    Completed,
}

/// Status of a row condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

/// A condition attached to a single row, describing the state of the object
/// behind it in a way that is not tied to any particular column.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowCondition {
    #[serde(rename = "type")]
    pub condition_type: RowConditionType,
    pub status: ConditionStatus,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reason: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl RowCondition {
    /// Creates a `Completed` condition that is `True`.
    pub fn completed(reason: &str, message: &str) -> Self {
        Self {
            condition_type: RowConditionType::Completed,
            status: ConditionStatus::True,
            reason: reason.to_owned(),
            message: message.to_owned(),
        }
    }
}

/// One rendered table row.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TableRow {
    pub cells: Vec<CellValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<RowCondition>,
}

impl TableRow {
    /// Creates a row from cells, with no conditions.
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self {
            cells,
            conditions: Vec::new(),
        }
    }

    /// Creates a row from cells and conditions.
    pub fn with_conditions(cells: Vec<CellValue>, conditions: Vec<RowCondition>) -> Self {
        Self { cells, conditions }
    }
}

/// A generated table, ready to be serialized and displayed.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub column_definitions: Vec<ColumnDefinition>,
    pub rows: Vec<TableRow>,
    /// Resource version of the list the table was generated from.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_version: String,
    /// Continuation token for fetching the next page of the list.
    #[serde(rename = "continue", skip_serializing_if = "String::is_empty")]
    pub continue_token: String,
    /// Number of items left out of the paginated list, when the server knows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_item_count: Option<i64>,
}
