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

//! Result readers for catalog query results.
//!
//! This module provides:
//! - `ResultReader`: batch-level interface implemented by execution channels
//! - `InlineReader`: reader over record batches already held in memory
//! - `ResultCursor`: row-level cursor with typed getters by name or index

pub mod cursor;

use crate::error::Result;
use arrow_array::RecordBatch;
use arrow_schema::{Schema, SchemaRef};
use std::collections::VecDeque;
use std::sync::Arc;

pub use cursor::{ColumnRef, ResultCursor};

/// Trait for reading result batches.
///
/// Implemented by the execution channel for whatever transport it uses.
pub trait ResultReader: Send {
    /// Get the schema of the result.
    fn schema(&self) -> Result<SchemaRef>;

    /// Get the next record batch, or None if end of results.
    fn next_batch(&mut self) -> Result<Option<RecordBatch>>;
}

/// Reader over record batches that are already in memory.
///
/// Catalog results are small, so channels that receive inline results
/// can hand them over through this reader.
#[derive(Debug)]
pub struct InlineReader {
    batches: VecDeque<RecordBatch>,
    schema: SchemaRef,
}

impl InlineReader {
    /// Create a reader from pre-built batches.
    ///
    /// The schema is taken from the first batch; an empty batch list yields
    /// an empty schema.
    pub fn new(batches: Vec<RecordBatch>) -> Self {
        let schema = batches
            .first()
            .map(|b| b.schema())
            .unwrap_or_else(|| Arc::new(Schema::empty()));
        Self {
            batches: batches.into(),
            schema,
        }
    }

    /// Create an empty reader that still reports a schema.
    pub fn empty(schema: SchemaRef) -> Self {
        Self {
            batches: VecDeque::new(),
            schema,
        }
    }
}

impl ResultReader for InlineReader {
    fn schema(&self) -> Result<SchemaRef> {
        Ok(self.schema.clone())
    }

    fn next_batch(&mut self) -> Result<Option<RecordBatch>> {
        Ok(self.batches.pop_front())
    }
}
