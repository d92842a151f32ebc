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

//! CrateDB catalog metadata for SQL clients.
//!
//! This crate answers introspection questions (schemas, tables, columns,
//! primary keys, privileges, types) against a CrateDB cluster reached over
//! the PostgreSQL wire protocol. The catalog vocabulary changes across
//! server versions; every operation detects the server version, issues the
//! matching catalog query and assembles the result into one fixed column
//! layout.
//!
//! ## Overview
//!
//! - [`CatalogClient`] - Channel that executes SQL; supplied by the caller
//! - [`MetadataService`] - One method per metadata question
//! - [`MetadataResult`] - Fixed column list plus rows, exportable to Arrow
//! - [`MetadataConfig`] - Connection facts and caching policy
//!
//! ## Example
//!
//! ```ignore
//! use cratedb_metadata::{MetadataConfig, MetadataService};
//!
//! let runtime = tokio::runtime::Runtime::new()?;
//! let service = MetadataService::new(client, runtime.handle().clone(), MetadataConfig::new());
//!
//! let tables = service.list_tables(Some("doc"), None)?;
//! for row in tables.rows() {
//!     println!("{:?}", row);
//! }
//! let batch = tables.to_record_batch()?;
//! ```
//!
//! ## Configuration Options
//!
//! See [`config`] for the option keys accepted by
//! [`MetadataConfig::set_option`].

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod reader;

// Re-export main types
pub use client::{CatalogClient, ExecuteResult};
pub use config::{MetadataConfig, VersionCachePolicy};
pub use error::{Error, Result};
pub use metadata::{MetadataResult, MetadataService, Value, Version};
pub use reader::{InlineReader, ResultCursor, ResultReader};
