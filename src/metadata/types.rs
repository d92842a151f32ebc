// Copyright (c) 2025 ADBC Drivers Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Data structures for metadata results.
//!
//! Each operation assembles typed records (`TableRow`, `ColumnRow`, ...)
//! which are flattened into [`OutputRow`]s under the operation's fixed
//! [`ColumnSpec`] list. A [`MetadataResult`] holds the list and the rows
//! and guarantees every row has exactly one value per column.

use crate::error::{Error, Result};
use crate::metadata::schemas::{self, ColumnKind, ColumnSpec};
use crate::metadata::type_mapping::{TypeInfoEntry, NULLABLE};

/// One nullable output value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Text(String),
    Int16(i16),
    Int32(i32),
    Bool(bool),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int16(v) => Some(i32::from(*v)),
            Value::Int32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether this value can be stored in a column of `kind`.
    pub fn fits(&self, kind: ColumnKind) -> bool {
        matches!(
            (self, kind),
            (Value::Null, _)
                | (Value::Text(_), ColumnKind::Text)
                | (Value::Int16(_), ColumnKind::Int16)
                | (Value::Int32(_), ColumnKind::Int32)
                | (Value::Bool(_), ColumnKind::Boolean)
        )
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int16(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int32(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// One output row, ordered like the owning result's columns.
pub type OutputRow = Vec<Value>;

/// A typed row record with a fixed column list.
pub trait MetadataRecord {
    const COLUMNS: &'static [ColumnSpec];

    /// Flatten into values ordered like [`Self::COLUMNS`].
    fn into_row(self) -> OutputRow;
}

/// Schema listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRow {
    pub schema_name: Option<String>,
}

impl MetadataRecord for SchemaRow {
    const COLUMNS: &'static [ColumnSpec] = schemas::SCHEMAS;

    fn into_row(self) -> OutputRow {
        vec![self.schema_name.into(), Value::Null]
    }
}

/// Table type listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableTypeRow {
    pub table_type: &'static str,
}

impl MetadataRecord for TableTypeRow {
    const COLUMNS: &'static [ColumnSpec] = schemas::TABLE_TYPES;

    fn into_row(self) -> OutputRow {
        vec![self.table_type.into()]
    }
}

/// Table listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: String,
    /// "TABLE", "SYSTEM TABLE" or the catalog's own table type.
    pub table_type: Option<String>,
    pub self_referencing_col_name: Option<String>,
    /// "SYSTEM", "USER" or NULL.
    pub ref_generation: Option<&'static str>,
}

impl MetadataRecord for TableRow {
    const COLUMNS: &'static [ColumnSpec] = schemas::TABLES;

    fn into_row(self) -> OutputRow {
        vec![
            self.catalog_name.into(),
            self.schema_name.into(),
            self.table_name.into(),
            self.table_type.into(),
            // REMARKS
            "".into(),
            // TYPE_CAT, TYPE_SCHEM, TYPE_NAME
            Value::Null,
            Value::Null,
            Value::Null,
            self.self_referencing_col_name.into(),
            self.ref_generation.into(),
        ]
    }
}

/// Column listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRow {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: Option<String>,
    pub column_name: Option<String>,
    pub data_type: i16,
    pub type_name: Option<String>,
    pub decimal_digits: Option<i32>,
    pub num_prec_radix: Option<i32>,
    pub column_def: Option<String>,
    pub char_octet_length: Option<String>,
    pub ordinal_position: Option<i32>,
    /// "YES" or "NO".
    pub is_nullable: String,
    /// "YES", "NO", or the catalog's own text.
    pub is_generated: Option<String>,
}

impl MetadataRecord for ColumnRow {
    const COLUMNS: &'static [ColumnSpec] = schemas::COLUMNS;

    fn into_row(self) -> OutputRow {
        vec![
            self.catalog_name.into(),
            self.schema_name.into(),
            self.table_name.into(),
            self.column_name.into(),
            self.data_type.into(),
            self.type_name.into(),
            // COLUMN_SIZE, BUFFER_LENGTH
            Value::Null,
            Value::Null,
            self.decimal_digits.into(),
            self.num_prec_radix.into(),
            NULLABLE.into(),
            // REMARKS
            Value::Null,
            self.column_def.into(),
            // SQL_DATA_TYPE, SQL_DATETIME_SUB
            Value::Null,
            Value::Null,
            self.char_octet_length.into(),
            self.ordinal_position.into(),
            self.is_nullable.into(),
            // SCOPE_CATALOG, SCOPE_SCHEMA, SCOPE_TABLE, SOURCE_DATA_TYPE
            Value::Null,
            Value::Null,
            Value::Null,
            Value::Null,
            // IS_AUTOINCREMENT
            "NO".into(),
            self.is_generated.into(),
        ]
    }
}

/// Primary key column entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKeyRow {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: Option<String>,
    pub column_name: Option<String>,
    pub key_seq: Option<i16>,
    pub pk_name: Option<String>,
}

impl MetadataRecord for PrimaryKeyRow {
    const COLUMNS: &'static [ColumnSpec] = schemas::PRIMARY_KEYS;

    fn into_row(self) -> OutputRow {
        vec![
            self.catalog_name.into(),
            self.schema_name.into(),
            self.table_name.into(),
            self.column_name.into(),
            self.key_seq.into(),
            self.pk_name.into(),
        ]
    }
}

/// One granted privilege on one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivilegeRow {
    pub schema_name: String,
    pub table_name: String,
    pub grantor: Option<String>,
    pub grantee: String,
    pub privilege: String,
    pub grantable: bool,
}

impl MetadataRecord for PrivilegeRow {
    const COLUMNS: &'static [ColumnSpec] = schemas::TABLE_PRIVILEGES;

    fn into_row(self) -> OutputRow {
        vec![
            Value::Null,
            self.schema_name.into(),
            self.table_name.into(),
            self.grantor.into(),
            self.grantee.into(),
            self.privilege.into(),
            if self.grantable { "YES" } else { "NO" }.into(),
        ]
    }
}

/// Type-info entry, expanded from the static type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfoRow(pub &'static TypeInfoEntry);

impl MetadataRecord for TypeInfoRow {
    const COLUMNS: &'static [ColumnSpec] = schemas::TYPE_INFO;

    fn into_row(self) -> OutputRow {
        let entry = self.0;
        let nullable = NULLABLE as i16;
        vec![
            entry.name.into(),
            // All type codes fit in a smallint.
            (entry.data_type as i16).into(),
            entry.precision.into(),
            // LITERAL_PREFIX, LITERAL_SUFFIX, CREATE_PARAMS
            Value::Null,
            Value::Null,
            Value::Null,
            nullable.into(),
            entry.case_sensitive.into(),
            entry.searchable.into(),
            // UNSIGNED_ATTRIBUTE, FIXED_PREC_SCALE, AUTO_INCREMENT
            true.into(),
            false.into(),
            false.into(),
            entry.name.into(),
            0i16.into(),
            entry.maximum_scale.into(),
            // SQL_DATA_TYPE, SQL_DATETIME_SUB
            Value::Null,
            Value::Null,
            10i32.into(),
        ]
    }
}

/// User-defined type entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UdtRow {
    pub type_cat: Option<String>,
    pub type_schem: Option<String>,
    pub type_name: Option<String>,
    pub class_name: Option<String>,
    pub data_type: Option<i32>,
    pub remarks: Option<String>,
    pub base_type: Option<i16>,
}

impl MetadataRecord for UdtRow {
    const COLUMNS: &'static [ColumnSpec] = schemas::UDTS;

    fn into_row(self) -> OutputRow {
        vec![
            self.type_cat.into(),
            self.type_schem.into(),
            self.type_name.into(),
            self.class_name.into(),
            self.data_type.into(),
            self.remarks.into(),
            self.base_type.into(),
        ]
    }
}

/// Rows of one metadata operation under its fixed column list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataResult {
    columns: &'static [ColumnSpec],
    rows: Vec<OutputRow>,
}

impl MetadataResult {
    /// A result with no rows.
    pub fn empty(columns: &'static [ColumnSpec]) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Collect typed records into a result, checking every flattened row
    /// against the record's column list.
    pub fn from_records<R, I>(records: I) -> Result<Self>
    where
        R: MetadataRecord,
        I: IntoIterator<Item = R>,
    {
        Self::from_rows(
            R::COLUMNS,
            records.into_iter().map(MetadataRecord::into_row).collect(),
        )
    }

    /// Build a result from raw rows, checking their shape.
    pub fn from_rows(columns: &'static [ColumnSpec], rows: Vec<OutputRow>) -> Result<Self> {
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::invalid_state(format!(
                    "row {} has {} values, expected {}",
                    index,
                    row.len(),
                    columns.len()
                )));
            }
            for (value, column) in row.iter().zip(columns) {
                if !value.fits(column.kind) {
                    return Err(Error::invalid_state(format!(
                        "row {} column {} expects {:?}, got {:?}",
                        index, column.name, column.kind, value
                    )));
                }
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &'static [ColumnSpec] {
        self.columns
    }

    pub fn rows(&self) -> &[OutputRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<OutputRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value at `row` in the column called `column`.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let index = schemas::position(self.columns, column)?;
        self.rows.get(row)?.get(index)
    }
}
