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

//! Metadata service executing catalog queries through a [`CatalogClient`].
//!
//! Each `list_*` method resolves the server version, picks the plan for
//! that version, builds the SQL, executes it and assembles the rows into a
//! [`MetadataResult`] with a fixed column list. Operations the catalog has
//! no data for return an empty result with the full column list.
//!
//! ## Example
//!
//! ```ignore
//! use cratedb_metadata::metadata::MetadataService;
//!
//! let service = MetadataService::new(client, runtime, MetadataConfig::default());
//! let tables = service.list_tables(Some("doc"), None)?;
//! let columns = service.list_columns(Some("doc"), Some("t1"), None)?;
//! ```

use crate::client::CatalogClient;
use crate::config::{MetadataConfig, VersionCachePolicy};
use crate::error::{Error, Result};
use crate::metadata::assemble;
use crate::metadata::plan::{ColumnsPlan, PrimaryKeysPlan, TablesPlan};
use crate::metadata::schemas::{self, ColumnSpec};
use crate::metadata::sql::CatalogQueryBuilder;
use crate::metadata::type_mapping::TYPE_INFO;
use crate::metadata::types::{MetadataResult, TableTypeRow, TypeInfoRow};
use crate::metadata::version::Version;
use crate::reader::ResultCursor;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Table types reported by [`MetadataService::list_table_types`].
const TABLE_TYPES: &[&str] = &["SYSTEM TABLE", "TABLE"];

/// Service answering metadata questions for one connection.
///
/// The service is synchronous: every call blocks on the runtime until the
/// catalog query completes. The maximum identifier length and index key
/// count are fetched on first use and kept for the service's lifetime;
/// the server version is kept as well when the config asks for
/// [`VersionCachePolicy::PerConnection`].
#[derive(Debug)]
pub struct MetadataService {
    client: Arc<dyn CatalogClient>,
    runtime: tokio::runtime::Handle,
    config: MetadataConfig,
    version: OnceLock<Version>,
    max_name_length: OnceLock<i32>,
    max_index_keys: OnceLock<i32>,
}

impl MetadataService {
    /// Create a new MetadataService.
    ///
    /// # Arguments
    ///
    /// * `client` - Channel used to execute catalog queries.
    /// * `runtime` - Runtime handle the blocking calls run on.
    /// * `config` - Connection facts and caching policy.
    pub fn new(
        client: Arc<dyn CatalogClient>,
        runtime: tokio::runtime::Handle,
        config: MetadataConfig,
    ) -> Self {
        let log = config.log();
        if log.level.is_some() || log.file.is_some() {
            crate::logging::init_logging(log);
        }
        Self {
            client,
            runtime,
            config,
            version: OnceLock::new(),
            max_name_length: OnceLock::new(),
            max_index_keys: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &MetadataConfig {
        &self.config
    }

    pub(crate) fn client(&self) -> &dyn CatalogClient {
        self.client.as_ref()
    }

    fn query_builder(&self) -> CatalogQueryBuilder<'_> {
        CatalogQueryBuilder::new(self.client.as_ref())
            .with_standard_conforming_strings(self.config.standard_conforming_strings())
    }

    /// Execute one catalog query and position a cursor before its first row.
    fn execute(&self, sql: &str) -> Result<ResultCursor> {
        debug!("Executing metadata query: {}", sql);
        let result = self.runtime.block_on(self.client.execute(sql))?;
        Ok(ResultCursor::new(result))
    }

    fn empty(&self, operation: &str, columns: &'static [ColumnSpec]) -> Result<MetadataResult> {
        debug!("{} has no catalog data, returning empty result", operation);
        Ok(MetadataResult::empty(columns))
    }

    /// Server version as reported by the cluster.
    ///
    /// With [`VersionCachePolicy::PerCall`] every call runs the version
    /// query; with `PerConnection` the first answer is reused.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] when the query returns no row or a NULL
    /// version, [`Error::Format`] when the version is not numeric.
    pub fn server_version(&self) -> Result<Version> {
        match self.config.version_cache() {
            VersionCachePolicy::PerCall => self.fetch_version(),
            VersionCachePolicy::PerConnection => {
                if let Some(version) = self.version.get() {
                    return Ok(version.clone());
                }
                let version = self.fetch_version()?;
                Ok(self.version.get_or_init(|| version).clone())
            }
        }
    }

    fn fetch_version(&self) -> Result<Version> {
        let mut cursor = self.execute(CatalogQueryBuilder::build_version())?;
        if !cursor.advance()? {
            return Err(Error::configuration("unable to fetch server version"));
        }
        let text = cursor
            .get_string("version")?
            .ok_or_else(|| Error::configuration("unable to fetch server version"))?;
        let version = Version::parse(&text)?;
        debug!("Detected server version {}", version);
        Ok(version)
    }

    /// List schemas matching `schema_pattern`.
    pub fn list_schemas(&self, schema_pattern: Option<&str>) -> Result<MetadataResult> {
        let sql = self
            .query_builder()
            .with_schema_pattern(schema_pattern)
            .build_schemas()?;
        let rows = assemble::schema_rows(&mut self.execute(&sql)?)?;
        debug!("Found {} schemas", rows.len());
        MetadataResult::from_records(rows)
    }

    /// List catalogs. The cluster exposes none through this layer.
    pub fn list_catalogs(&self) -> Result<MetadataResult> {
        self.empty("list_catalogs", schemas::CATALOGS)
    }

    /// List the table types reported by [`Self::list_tables`] on servers
    /// without a catalog table type.
    pub fn list_table_types(&self) -> Result<MetadataResult> {
        MetadataResult::from_records(
            TABLE_TYPES
                .iter()
                .map(|&table_type| TableTypeRow { table_type }),
        )
    }

    /// List tables.
    ///
    /// # Arguments
    ///
    /// * `schema_pattern` - `None` matches every schema, `Some("")` matches
    ///   tables without a schema, anything else is a LIKE pattern.
    /// * `table_pattern` - LIKE pattern for table names, `None` for all.
    pub fn list_tables(
        &self,
        schema_pattern: Option<&str>,
        table_pattern: Option<&str>,
    ) -> Result<MetadataResult> {
        let version = self.server_version()?;
        let plan = TablesPlan::for_version(&version);
        let sql = self
            .query_builder()
            .with_schema_pattern(schema_pattern)
            .with_table_pattern(table_pattern)
            .build_tables(&plan)?;
        let rows = assemble::table_rows(&mut self.execute(&sql)?, &plan)?;
        debug!("Found {} tables", rows.len());
        MetadataResult::from_records(rows)
    }

    /// List columns of matching tables. Nested object fields are excluded.
    pub fn list_columns(
        &self,
        schema_pattern: Option<&str>,
        table_pattern: Option<&str>,
        column_pattern: Option<&str>,
    ) -> Result<MetadataResult> {
        let version = self.server_version()?;
        let plan = ColumnsPlan::for_version(&version);
        let sql = self
            .query_builder()
            .with_schema_pattern(schema_pattern)
            .with_table_pattern(table_pattern)
            .with_column_pattern(column_pattern)
            .build_columns(&plan)?;
        let rows = assemble::column_rows(&mut self.execute(&sql)?, &plan)?;
        debug!("Found {} columns", rows.len());
        MetadataResult::from_records(rows)
    }

    /// List the primary key columns of one table.
    ///
    /// `schema` and `table` are exact names; `None` for `schema` searches
    /// every schema.
    pub fn list_primary_keys(&self, schema: Option<&str>, table: &str) -> Result<MetadataResult> {
        let version = self.server_version()?;
        let plan = PrimaryKeysPlan::for_version(&version);
        let sql = self.query_builder().build_primary_keys(&plan, schema, table)?;
        let rows = assemble::primary_key_rows(&mut self.execute(&sql)?, &plan)?;
        debug!("Found {} primary key columns for {}", rows.len(), table);
        MetadataResult::from_records(rows)
    }

    /// Foreign keys are not supported by the cluster.
    pub fn list_imported_keys(&self) -> Result<MetadataResult> {
        self.empty("list_imported_keys", schemas::KEYS)
    }

    pub fn list_exported_keys(&self) -> Result<MetadataResult> {
        self.empty("list_exported_keys", schemas::KEYS)
    }

    pub fn list_cross_reference(&self) -> Result<MetadataResult> {
        self.empty("list_cross_reference", schemas::KEYS)
    }

    /// List privileges granted on matching tables and views.
    ///
    /// Relations without an ACL report the owner's default privileges,
    /// which depend on the configured PostgreSQL protocol version.
    pub fn list_table_privileges(
        &self,
        schema_pattern: Option<&str>,
        table_pattern: Option<&str>,
    ) -> Result<MetadataResult> {
        let sql = self
            .query_builder()
            .with_schema_pattern(schema_pattern)
            .with_table_pattern(table_pattern)
            .build_table_privileges()?;
        let rows =
            assemble::privilege_rows(&mut self.execute(&sql)?, self.config.protocol_version())?;
        debug!("Found {} table privileges", rows.len());
        MetadataResult::from_records(rows)
    }

    pub fn list_column_privileges(&self) -> Result<MetadataResult> {
        self.empty("list_column_privileges", schemas::COLUMN_PRIVILEGES)
    }

    /// List the supported data types: scalars first, then arrays.
    pub fn list_type_info(&self) -> Result<MetadataResult> {
        MetadataResult::from_records(TYPE_INFO.iter().map(TypeInfoRow))
    }

    /// List user-defined types.
    ///
    /// `type_name_pattern` may be qualified as `schema.type` or
    /// `catalog.schema.type`, in which case its schema replaces
    /// `schema_pattern`. `types` restricts the listing to the given type
    /// codes (`STRUCT`, `DISTINCT`); other codes match nothing.
    pub fn list_udts(
        &self,
        schema_pattern: Option<&str>,
        type_name_pattern: Option<&str>,
        types: Option<&[i32]>,
    ) -> Result<MetadataResult> {
        let sql = self
            .query_builder()
            .with_schema_pattern(schema_pattern)
            .with_type_name_pattern(type_name_pattern)
            .with_udt_types(types)
            .build_udts()?;
        let rows = assemble::udt_rows(&mut self.execute(&sql)?)?;
        debug!("Found {} user-defined types", rows.len());
        MetadataResult::from_records(rows)
    }

    pub fn list_index_info(&self) -> Result<MetadataResult> {
        self.empty("list_index_info", schemas::INDEX_INFO)
    }

    pub fn list_best_row_identifier(&self) -> Result<MetadataResult> {
        self.empty("list_best_row_identifier", schemas::BEST_ROW_IDENTIFIER)
    }

    pub fn list_version_columns(&self) -> Result<MetadataResult> {
        self.empty("list_version_columns", schemas::VERSION_COLUMNS)
    }

    pub fn list_procedures(&self) -> Result<MetadataResult> {
        self.empty("list_procedures", schemas::PROCEDURES)
    }

    pub fn list_procedure_columns(&self) -> Result<MetadataResult> {
        self.empty("list_procedure_columns", schemas::PROCEDURE_COLUMNS)
    }

    pub fn list_functions(&self) -> Result<MetadataResult> {
        self.empty("list_functions", schemas::FUNCTIONS)
    }

    pub fn list_function_columns(&self) -> Result<MetadataResult> {
        self.empty("list_function_columns", schemas::FUNCTION_COLUMNS)
    }

    pub fn list_pseudo_columns(&self) -> Result<MetadataResult> {
        self.empty("list_pseudo_columns", schemas::PSEUDO_COLUMNS)
    }

    pub fn list_super_types(&self) -> Result<MetadataResult> {
        self.empty("list_super_types", schemas::SUPER_TYPES)
    }

    pub fn list_super_tables(&self) -> Result<MetadataResult> {
        self.empty("list_super_tables", schemas::SUPER_TABLES)
    }

    pub fn list_attributes(&self) -> Result<MetadataResult> {
        self.empty("list_attributes", schemas::ATTRIBUTES)
    }

    pub fn list_client_info_properties(&self) -> Result<MetadataResult> {
        self.empty("list_client_info_properties", schemas::CLIENT_INFO_PROPERTIES)
    }

    /// Maximum identifier length: the storage length of the `name` type
    /// minus its terminator. Fetched once.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] when the catalog has no `name` type.
    pub fn max_name_length(&self) -> Result<i32> {
        if let Some(length) = self.max_name_length.get() {
            return Ok(*length);
        }
        let mut cursor = self.execute(CatalogQueryBuilder::build_max_name_length())?;
        if !cursor.advance()? {
            return Err(Error::configuration(
                "unable to find pg_catalog.name type in the catalog",
            ));
        }
        let typlen = cursor
            .get_i32("typlen")?
            .ok_or_else(|| Error::configuration("pg_catalog.name type has no length"))?;
        Ok(*self.max_name_length.get_or_init(|| typlen - 1))
    }

    /// Maximum number of columns in an index. Fetched once.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] when the setting is missing.
    pub fn max_index_keys(&self) -> Result<i32> {
        if let Some(keys) = self.max_index_keys.get() {
            return Ok(*keys);
        }
        let mut cursor = self.execute(CatalogQueryBuilder::build_max_index_keys())?;
        if !cursor.advance()? {
            return Err(Error::configuration(
                "unable to determine a value for max_index_keys",
            ));
        }
        let keys = cursor
            .get_i32("setting")?
            .ok_or_else(|| Error::configuration("max_index_keys setting is NULL"))?;
        Ok(*self.max_index_keys.get_or_init(|| keys))
    }
}
