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

//! Execution channel consumed by the metadata layer.
//!
//! This module provides:
//! - `CatalogClient` trait: abstract interface to whatever executes SQL
//! - `ExecuteResult`: reader handle returned by an execution
//! - `escape`: literal escaping primitives used by default implementations

pub mod escape;

use crate::error::Result;
use crate::reader::ResultReader;
use async_trait::async_trait;

pub use escape::{escape_string, quote_escaped};

/// Result of executing a catalog query.
pub struct ExecuteResult {
    pub reader: Box<dyn ResultReader + Send>,
}

impl std::fmt::Debug for ExecuteResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecuteResult").finish_non_exhaustive()
    }
}

/// Abstract interface for the SQL execution channel.
///
/// Implementations own transport, timeouts, retries and cancellation.
/// Errors from `execute` are surfaced by the metadata layer unchanged.
#[async_trait]
pub trait CatalogClient: Send + Sync + std::fmt::Debug {
    /// Execute a read-only SQL statement and return its rows.
    async fn execute(&self, sql: &str) -> Result<ExecuteResult>;

    /// Whether the connection uses standard-conforming strings.
    fn standard_conforming_strings(&self) -> bool {
        true
    }

    /// Escape text for embedding inside a single-quoted SQL literal.
    ///
    /// The default follows the connection's quoting mode.
    fn escape_literal(&self, text: &str) -> Result<String> {
        escape_string(text, self.standard_conforming_strings())
    }
}
