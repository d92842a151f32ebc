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

//! Arrow export of metadata results.
//!
//! Converts a [`MetadataResult`] into a single [`RecordBatch`] whose schema
//! is derived from the result's fixed column list. Each column is built
//! in one pass over the rows.
//!
//! # Example
//!
//! ```ignore
//! let tables = service.list_tables(Some("doc"), None)?;
//! let batch = tables.to_record_batch()?;
//! assert_eq!(batch.num_columns(), 10);
//! ```

use crate::error::{Error, Result};
use crate::metadata::schemas::{arrow_schema, ColumnKind, ColumnSpec};
use crate::metadata::types::{MetadataResult, OutputRow, Value};
use crate::reader::InlineReader;

use arrow_array::{ArrayRef, BooleanArray, Int16Array, Int32Array, RecordBatch, StringArray};
use arrow_schema::SchemaRef;
use std::sync::Arc;

impl MetadataResult {
    /// Arrow schema of this result.
    pub fn schema(&self) -> SchemaRef {
        Arc::new(arrow_schema(self.columns()))
    }

    /// Export all rows as one record batch.
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let schema = self.schema();
        let arrays = self
            .columns()
            .iter()
            .enumerate()
            .map(|(index, column)| build_column(self.rows(), index, column))
            .collect::<Result<Vec<_>>>()?;
        if arrays.is_empty() {
            return Ok(RecordBatch::new_empty(schema));
        }
        Ok(RecordBatch::try_new(schema, arrays)?)
    }

    /// Export as a reader yielding a single batch.
    pub fn to_reader(&self) -> Result<InlineReader> {
        Ok(InlineReader::new(vec![self.to_record_batch()?]))
    }
}

fn build_column(rows: &[OutputRow], index: usize, column: &ColumnSpec) -> Result<ArrayRef> {
    let values = rows.iter().map(|row| row.get(index).unwrap_or(&Value::Null));
    let mismatch = |value: &Value| {
        Error::invalid_state(format!(
            "column {} expects {:?}, got {:?}",
            column.name, column.kind, value
        ))
    };

    let array: ArrayRef = match column.kind {
        ColumnKind::Text => Arc::new(
            values
                .map(|v| match v {
                    Value::Null => Ok(None),
                    Value::Text(s) => Ok(Some(s.as_str())),
                    other => Err(mismatch(other)),
                })
                .collect::<Result<StringArray>>()?,
        ),
        ColumnKind::Int16 => Arc::new(
            values
                .map(|v| match v {
                    Value::Null => Ok(None),
                    Value::Int16(n) => Ok(Some(*n)),
                    other => Err(mismatch(other)),
                })
                .collect::<Result<Int16Array>>()?,
        ),
        ColumnKind::Int32 => Arc::new(
            values
                .map(|v| match v {
                    Value::Null => Ok(None),
                    Value::Int32(n) => Ok(Some(*n)),
                    other => Err(mismatch(other)),
                })
                .collect::<Result<Int32Array>>()?,
        ),
        ColumnKind::Boolean => Arc::new(
            values
                .map(|v| match v {
                    Value::Null => Ok(None),
                    Value::Bool(b) => Ok(Some(*b)),
                    other => Err(mismatch(other)),
                })
                .collect::<Result<BooleanArray>>()?,
        ),
    };
    Ok(array)
}
