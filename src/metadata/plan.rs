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

//! Per-operation query plans.
//!
//! A plan captures every version-dependent decision an operation makes.
//! It is resolved once per call from the detected server version and then
//! handed to both the SQL builder and the row assembler, so the two can
//! never disagree about which columns exist.

use crate::metadata::version::{
    Version, EXTENDED_INFORMATION_SCHEMA, GENERATED_AS_TEXT, KCU_TABLE_CATALOG, KCU_TABLE_SCHEMA,
    KEY_COLUMN_USAGE, SCHEMA_COLUMN_RENAMED,
};

/// Column of `information_schema` tables that carries the schema name.
pub fn schema_column(version: &Version) -> &'static str {
    if SCHEMA_COLUMN_RENAMED.is_open(version) {
        "table_schema"
    } else {
        "schema_name"
    }
}

/// Decisions for listing tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablesPlan {
    pub schema_column: &'static str,
    /// Catalog, type and self-reference columns are selected, and only base
    /// tables are returned.
    pub extended: bool,
}

impl TablesPlan {
    pub fn for_version(version: &Version) -> Self {
        Self {
            schema_column: schema_column(version),
            extended: EXTENDED_INFORMATION_SCHEMA.is_open(version),
        }
    }
}

/// Decisions for listing columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnsPlan {
    pub schema_column: &'static str,
    /// Catalog, precision, default, octet length, nullability and
    /// generation columns are selected.
    pub extended: bool,
    /// `is_generated` arrives as text instead of a boolean.
    pub generated_as_text: bool,
}

impl ColumnsPlan {
    pub fn for_version(version: &Version) -> Self {
        Self {
            schema_column: schema_column(version),
            extended: EXTENDED_INFORMATION_SCHEMA.is_open(version),
            generated_as_text: GENERATED_AS_TEXT.is_open(version),
        }
    }
}

/// Decisions for listing primary keys. The two shapes query different
/// catalog tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryKeysPlan {
    /// One row per table with the key columns in an array.
    ConstraintArray { schema_column: &'static str },
    /// One row per key column from `key_column_usage`.
    KeyColumnUsage {
        /// `kcu` column holding the schema name.
        schema_field: &'static str,
        /// `kcu` column holding the catalog name, or `None` for NULL.
        catalog_field: Option<&'static str>,
    },
}

impl PrimaryKeysPlan {
    pub fn for_version(version: &Version) -> Self {
        if !KEY_COLUMN_USAGE.is_open(version) {
            return PrimaryKeysPlan::ConstraintArray {
                schema_column: schema_column(version),
            };
        }
        // These two move independently of each other.
        let schema_field = if KCU_TABLE_SCHEMA.is_open(version) {
            "table_schema"
        } else {
            "table_catalog"
        };
        let catalog_field = KCU_TABLE_CATALOG
            .is_open(version)
            .then_some("table_catalog");
        PrimaryKeysPlan::KeyColumnUsage {
            schema_field,
            catalog_field,
        }
    }
}
