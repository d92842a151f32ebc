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

//! Row cursor over an `ExecuteResult`.
//!
//! The cursor walks batches from the underlying reader one row at a time.
//! Columns are addressed by name (exact match first, then ASCII
//! case-insensitive) or by 1-based index. All getters return `None` for SQL
//! NULL and fail with `Error::InvalidState` when the column type cannot be
//! read as the requested kind.

use crate::client::ExecuteResult;
use crate::error::{Error, Result};
use crate::reader::ResultReader;
use arrow_array::cast::AsArray;
use arrow_array::types::{Int16Type, Int32Type, Int64Type, Int8Type};
use arrow_array::{Array, ArrayRef, RecordBatch};
use arrow_schema::DataType;

/// Column address for cursor getters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRef<'a> {
    Name(&'a str),
    /// 1-based column index.
    Index(usize),
}

impl<'a> From<&'a str> for ColumnRef<'a> {
    fn from(name: &'a str) -> Self {
        ColumnRef::Name(name)
    }
}

impl From<usize> for ColumnRef<'_> {
    fn from(index: usize) -> Self {
        ColumnRef::Index(index)
    }
}

/// Forward-only row cursor.
pub struct ResultCursor {
    reader: Box<dyn ResultReader + Send>,
    batch: Option<RecordBatch>,
    row: usize,
    exhausted: bool,
}

impl std::fmt::Debug for ResultCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCursor")
            .field("row", &self.row)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

impl ResultCursor {
    pub fn new(result: ExecuteResult) -> Self {
        Self {
            reader: result.reader,
            batch: None,
            row: 0,
            exhausted: false,
        }
    }

    /// Move to the next row. Returns `false` once the result is exhausted.
    pub fn advance(&mut self) -> Result<bool> {
        if self.exhausted {
            return Ok(false);
        }
        if let Some(batch) = &self.batch {
            if self.row + 1 < batch.num_rows() {
                self.row += 1;
                return Ok(true);
            }
        }
        // Skip empty batches.
        loop {
            match self.reader.next_batch()? {
                Some(batch) if batch.num_rows() == 0 => continue,
                Some(batch) => {
                    self.batch = Some(batch);
                    self.row = 0;
                    return Ok(true);
                }
                None => {
                    self.batch = None;
                    self.exhausted = true;
                    return Ok(false);
                }
            }
        }
    }

    fn current(&self) -> Result<&RecordBatch> {
        self.batch
            .as_ref()
            .ok_or_else(|| Error::invalid_state("cursor is not positioned on a row"))
    }

    fn column<'c>(&self, column: impl Into<ColumnRef<'c>>) -> Result<Option<ArrayRef>> {
        let batch = self.current()?;
        let array = batch.column(column_position(batch, column.into())?);
        if array.is_null(self.row) {
            return Ok(None);
        }
        Ok(Some(array.clone()))
    }

    /// Read a column as text. Integers and booleans are rendered as text.
    pub fn get_string<'c>(&self, column: impl Into<ColumnRef<'c>>) -> Result<Option<String>> {
        let Some(array) = self.column(column)? else {
            return Ok(None);
        };
        let row = self.row;
        let value = match array.data_type() {
            DataType::Utf8 => array.as_string::<i32>().value(row).to_string(),
            DataType::LargeUtf8 => array.as_string::<i64>().value(row).to_string(),
            DataType::Int8 => array.as_primitive::<Int8Type>().value(row).to_string(),
            DataType::Int16 => array.as_primitive::<Int16Type>().value(row).to_string(),
            DataType::Int32 => array.as_primitive::<Int32Type>().value(row).to_string(),
            DataType::Int64 => array.as_primitive::<Int64Type>().value(row).to_string(),
            DataType::Boolean => array.as_boolean().value(row).to_string(),
            dt => return Err(unexpected_type("string", dt)),
        };
        Ok(Some(value))
    }

    /// Read a column as raw bytes.
    pub fn get_bytes<'c>(&self, column: impl Into<ColumnRef<'c>>) -> Result<Option<Vec<u8>>> {
        let Some(array) = self.column(column)? else {
            return Ok(None);
        };
        let row = self.row;
        let value = match array.data_type() {
            DataType::Binary => array.as_binary::<i32>().value(row).to_vec(),
            DataType::LargeBinary => array.as_binary::<i64>().value(row).to_vec(),
            DataType::Utf8 => array.as_string::<i32>().value(row).as_bytes().to_vec(),
            DataType::LargeUtf8 => array.as_string::<i64>().value(row).as_bytes().to_vec(),
            dt => return Err(unexpected_type("bytes", dt)),
        };
        Ok(Some(value))
    }

    /// Read a column as a 32-bit integer. Numeric text is parsed.
    pub fn get_i32<'c>(&self, column: impl Into<ColumnRef<'c>>) -> Result<Option<i32>> {
        let Some(array) = self.column(column)? else {
            return Ok(None);
        };
        let row = self.row;
        let value = match array.data_type() {
            DataType::Int8 => i32::from(array.as_primitive::<Int8Type>().value(row)),
            DataType::Int16 => i32::from(array.as_primitive::<Int16Type>().value(row)),
            DataType::Int32 => array.as_primitive::<Int32Type>().value(row),
            DataType::Int64 => {
                let v = array.as_primitive::<Int64Type>().value(row);
                i32::try_from(v).map_err(|_| {
                    Error::invalid_state(format!("value {} does not fit in a 32-bit integer", v))
                })?
            }
            DataType::Utf8 | DataType::LargeUtf8 => {
                let text = match array.data_type() {
                    DataType::Utf8 => array.as_string::<i32>().value(row),
                    _ => array.as_string::<i64>().value(row),
                };
                text.trim().parse::<i32>().map_err(|_| {
                    Error::invalid_state(format!("expected integer text, got '{}'", text))
                })?
            }
            dt => return Err(unexpected_type("integer", dt)),
        };
        Ok(Some(value))
    }

    /// Read a column as a boolean. Text `t`/`true` and `f`/`false` are accepted.
    pub fn get_bool<'c>(&self, column: impl Into<ColumnRef<'c>>) -> Result<Option<bool>> {
        let Some(array) = self.column(column)? else {
            return Ok(None);
        };
        let row = self.row;
        match array.data_type() {
            DataType::Boolean => Ok(Some(array.as_boolean().value(row))),
            DataType::Utf8 => parse_bool_text(array.as_string::<i32>().value(row)).map(Some),
            DataType::LargeUtf8 => parse_bool_text(array.as_string::<i64>().value(row)).map(Some),
            dt => Err(unexpected_type("boolean", dt)),
        }
    }

    /// Declared type of a column, independent of the current row's value.
    pub fn data_type<'c>(&self, column: impl Into<ColumnRef<'c>>) -> Result<DataType> {
        let batch = self.current()?;
        let idx = column_position(batch, column.into())?;
        Ok(batch.schema().field(idx).data_type().clone())
    }

    /// Read a list-of-text column. NULL elements are kept as `None`.
    pub fn get_string_array<'c>(
        &self,
        column: impl Into<ColumnRef<'c>>,
    ) -> Result<Option<Vec<Option<String>>>> {
        let Some(array) = self.column(column)? else {
            return Ok(None);
        };
        let values = match array.data_type() {
            DataType::List(_) => array.as_list::<i32>().value(self.row),
            DataType::LargeList(_) => array.as_list::<i64>().value(self.row),
            dt => return Err(unexpected_type("array", dt)),
        };
        let strings = match values.data_type() {
            DataType::Utf8 => values
                .as_string::<i32>()
                .iter()
                .map(|v| v.map(str::to_string))
                .collect(),
            DataType::LargeUtf8 => values
                .as_string::<i64>()
                .iter()
                .map(|v| v.map(str::to_string))
                .collect(),
            dt => return Err(unexpected_type("array of string", dt)),
        };
        Ok(Some(strings))
    }
}

/// Resolve a 1-based index or a name to a 0-based column position.
fn column_position(batch: &RecordBatch, column: ColumnRef<'_>) -> Result<usize> {
    match column {
        ColumnRef::Index(i) if i >= 1 && i <= batch.num_columns() => Ok(i - 1),
        ColumnRef::Index(i) => Err(Error::invalid_argument(format!(
            "column index {} out of range (1..={})",
            i,
            batch.num_columns()
        ))),
        ColumnRef::Name(name) => column_index(batch, name),
    }
}

/// Get the index of a column by name, or return an error.
fn column_index(batch: &RecordBatch, name: &str) -> Result<usize> {
    let schema = batch.schema();
    if let Ok(idx) = schema.index_of(name) {
        return Ok(idx);
    }
    schema
        .fields()
        .iter()
        .position(|f| f.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            Error::invalid_state(format!("Expected column '{}' in metadata result", name))
        })
}

fn parse_bool_text(text: &str) -> Result<bool> {
    match text {
        "t" | "true" | "TRUE" => Ok(true),
        "f" | "false" | "FALSE" => Ok(false),
        other => Err(Error::invalid_state(format!(
            "expected boolean text, got '{}'",
            other
        ))),
    }
}

fn unexpected_type(wanted: &str, dt: &DataType) -> Error {
    Error::invalid_state(format!("Expected {} column, got {:?}", wanted, dt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::InlineReader;
    use arrow_array::builder::{ListBuilder, StringBuilder};
    use arrow_array::{BooleanArray, Int16Array, StringArray};
    use arrow_schema::{Field, Schema};
    use std::sync::Arc;

    fn cursor(batches: Vec<RecordBatch>) -> ResultCursor {
        ResultCursor::new(ExecuteResult {
            reader: Box::new(InlineReader::new(batches)),
        })
    }

    fn sample_batch() -> RecordBatch {
        let mut names = ListBuilder::new(StringBuilder::new());
        names.values().append_value("id");
        names.values().append_value("_id");
        names.append(true);
        names.append(false);

        let schema = Arc::new(Schema::new(vec![
            Field::new("table_name", DataType::Utf8, true),
            Field::new("ordinal_position", DataType::Int16, true),
            Field::new("is_nullable", DataType::Boolean, true),
            Field::new("setting", DataType::Utf8, true),
            Field::new(
                "constraint_name",
                DataType::List(Arc::new(Field::new("item", DataType::Utf8, true))),
                true,
            ),
        ]));
        RecordBatch::try_new(
            schema,
            vec![
                Arc::new(StringArray::from(vec![Some("t1"), None])),
                Arc::new(Int16Array::from(vec![Some(3), None])),
                Arc::new(BooleanArray::from(vec![Some(true), None])),
                Arc::new(StringArray::from(vec![Some(" 32"), Some("f")])),
                Arc::new(names.finish()),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_getters_by_name_and_index() {
        let mut cursor = cursor(vec![sample_batch()]);
        assert!(cursor.advance().unwrap());

        assert_eq!(cursor.get_string("table_name").unwrap().as_deref(), Some("t1"));
        assert_eq!(cursor.get_string(1usize).unwrap().as_deref(), Some("t1"));
        assert_eq!(cursor.get_string("TABLE_NAME").unwrap().as_deref(), Some("t1"));
        assert_eq!(cursor.get_i32("ordinal_position").unwrap(), Some(3));
        assert_eq!(cursor.get_string("ordinal_position").unwrap().as_deref(), Some("3"));
        assert_eq!(cursor.get_bool("is_nullable").unwrap(), Some(true));
        assert_eq!(cursor.get_i32("setting").unwrap(), Some(32));
        assert_eq!(cursor.get_bytes("table_name").unwrap(), Some(b"t1".to_vec()));
        assert_eq!(
            cursor.get_string_array("constraint_name").unwrap(),
            Some(vec![Some("id".to_string()), Some("_id".to_string())])
        );
    }

    #[test]
    fn test_nulls_and_text_booleans() {
        let mut cursor = cursor(vec![sample_batch()]);
        assert!(cursor.advance().unwrap());
        assert!(cursor.advance().unwrap());

        assert_eq!(cursor.get_string("table_name").unwrap(), None);
        assert_eq!(cursor.get_i32("ordinal_position").unwrap(), None);
        assert_eq!(cursor.get_bool("is_nullable").unwrap(), None);
        assert_eq!(cursor.get_bool("setting").unwrap(), Some(false));
        assert_eq!(cursor.get_string_array("constraint_name").unwrap(), None);

        assert!(!cursor.advance().unwrap());
        assert!(!cursor.advance().unwrap());
    }

    #[test]
    fn test_errors() {
        let mut cursor = cursor(vec![sample_batch()]);
        assert!(matches!(
            cursor.get_string("table_name"),
            Err(Error::InvalidState(_))
        ));

        assert!(cursor.advance().unwrap());
        assert!(matches!(cursor.get_string(0usize), Err(Error::InvalidArgument(_))));
        assert!(matches!(cursor.get_string(9usize), Err(Error::InvalidArgument(_))));
        assert!(matches!(cursor.get_string("missing"), Err(Error::InvalidState(_))));
        assert!(matches!(cursor.get_bool("table_name"), Err(Error::InvalidState(_))));
        assert!(matches!(
            cursor.get_string_array("table_name"),
            Err(Error::InvalidState(_))
        ));
    }

    #[test]
    fn test_data_type_ignores_row_nulls() {
        let mut cursor = cursor(vec![sample_batch()]);
        assert!(matches!(cursor.data_type("table_name"), Err(Error::InvalidState(_))));
        assert!(cursor.advance().unwrap());
        assert!(cursor.advance().unwrap());
        assert!(matches!(
            cursor.data_type("constraint_name").unwrap(),
            DataType::List(_)
        ));
        assert_eq!(cursor.data_type(1usize).unwrap(), DataType::Utf8);
        assert!(matches!(cursor.data_type(6usize), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_skips_empty_batches() {
        let batch = sample_batch();
        let empty = batch.slice(0, 0);
        let mut cursor = cursor(vec![empty, batch.slice(1, 1)]);
        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.get_bool("setting").unwrap(), Some(false));
        assert!(!cursor.advance().unwrap());
    }
}
