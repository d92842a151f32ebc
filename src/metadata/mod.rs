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

//! Version-adaptive catalog metadata.
//!
//! ## Module Structure
//!
//! - `version`: dotted version parsing, comparison and named gates
//! - `plan`: per-operation decisions resolved from the server version
//! - `table_types`: table-type categories and their catalog predicates
//! - `acl`: ACL array tokenizer and privilege decoder
//! - `sql`: SQL builder for catalog queries
//! - `assemble`: row assembly from query results
//! - `schemas`: fixed output column lists
//! - `types`: output values, row records and `MetadataResult`
//! - `builder`: Arrow export of results
//! - `type_mapping`: type name to type code mapping and the type-info table
//! - `service`: the `MetadataService` facade
//! - `info`: scalar capability answers

pub mod acl;
pub mod assemble;
pub mod builder;
pub mod info;
pub mod plan;
pub mod schemas;
pub mod service;
pub mod sql;
pub mod table_types;
pub mod type_mapping;
pub mod types;
pub mod version;

// Re-export commonly used types
pub use info::{Holdability, RowIdLifetime, TransactionIsolation};
pub use schemas::{ColumnKind, ColumnSpec};
pub use service::MetadataService;
pub use sql::CatalogQueryBuilder;
pub use types::{MetadataRecord, MetadataResult, OutputRow, Value};
pub use version::{compare, Version, VersionGate};
