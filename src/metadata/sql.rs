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

//! SQL builder for catalog queries.
//!
//! Builds the `information_schema` and `pg_catalog` queries behind each
//! metadata operation. Every caller-supplied value is passed through the
//! client's literal escaping before it is interpolated; no other module
//! assembles SQL text.
//!
//! Filter patterns use SQL LIKE syntax. The schema pattern has three cases:
//! `None` matches everything, `Some("")` matches a NULL schema, and any
//! other value is a LIKE pattern. Table and column patterns are omitted
//! entirely when `None`.

use crate::client::{escape_string, quote_escaped, CatalogClient};
use crate::error::Result;
use crate::metadata::plan::{ColumnsPlan, PrimaryKeysPlan, TablesPlan};
use crate::metadata::table_types;
use crate::metadata::type_mapping::{DISTINCT, OTHER, PG_BASE_TYPES, STRUCT};

/// Query reporting the version of one cluster node.
pub const VERSION_QUERY: &str = "select version['number'] as version from sys.nodes limit 1";

/// Query returning the storage length of the `name` type.
pub const MAX_NAME_LENGTH_QUERY: &str = "SELECT t.typlen FROM pg_catalog.pg_type t, \
     pg_catalog.pg_namespace n WHERE t.typnamespace=n.oid AND t.typname='name' \
     AND n.nspname='pg_catalog'";

/// Query returning the `max_index_keys` setting.
pub const MAX_INDEX_KEYS_QUERY: &str =
    "SELECT setting FROM pg_catalog.pg_settings WHERE name='max_index_keys'";

/// Table types whose privileges are listed.
const PRIVILEGE_TABLE_TYPES: &[&str] = &[
    "TABLE",
    "PARTITIONED TABLE",
    "VIEW",
    "MATERIALIZED VIEW",
    "FOREIGN TABLE",
];

/// Builds SQL for catalog queries.
///
/// # Examples
///
/// ```ignore
/// let plan = TablesPlan::for_version(&version);
/// let sql = CatalogQueryBuilder::new(client.as_ref())
///     .with_schema_pattern(Some("doc"))
///     .with_table_pattern(Some("t%"))
///     .build_tables(&plan)?;
/// ```
pub struct CatalogQueryBuilder<'a> {
    client: &'a dyn CatalogClient,
    standard_conforming_strings: Option<bool>,
    schema_pattern: Option<String>,
    table_pattern: Option<String>,
    column_pattern: Option<String>,
    type_name_pattern: Option<String>,
    udt_types: Option<Vec<i32>>,
}

impl<'a> CatalogQueryBuilder<'a> {
    /// Create a new builder with no filters set.
    pub fn new(client: &'a dyn CatalogClient) -> Self {
        Self {
            client,
            standard_conforming_strings: None,
            schema_pattern: None,
            table_pattern: None,
            column_pattern: None,
            type_name_pattern: None,
            udt_types: None,
        }
    }

    /// Override the client's quoting mode. `None` keeps the client's.
    pub fn with_standard_conforming_strings(mut self, enabled: Option<bool>) -> Self {
        self.standard_conforming_strings = enabled;
        self
    }

    /// Set the schema pattern filter.
    pub fn with_schema_pattern(mut self, pattern: Option<&str>) -> Self {
        self.schema_pattern = pattern.map(str::to_string);
        self
    }

    /// Set the table name pattern filter.
    pub fn with_table_pattern(mut self, pattern: Option<&str>) -> Self {
        self.table_pattern = pattern.map(str::to_string);
        self
    }

    /// Set the column name pattern filter.
    pub fn with_column_pattern(mut self, pattern: Option<&str>) -> Self {
        self.column_pattern = pattern.map(str::to_string);
        self
    }

    /// Set the type name pattern for UDT listings. The pattern may be
    /// qualified as `schema.type` or `catalog.schema.type`.
    pub fn with_type_name_pattern(mut self, pattern: Option<&str>) -> Self {
        self.type_name_pattern = pattern.map(str::to_string);
        self
    }

    /// Restrict UDT listings to the given type codes (`STRUCT`, `DISTINCT`).
    pub fn with_udt_types(mut self, types: Option<&[i32]>) -> Self {
        self.udt_types = types.map(<[i32]>::to_vec);
        self
    }

    /// Build the server version query.
    pub fn build_version() -> &'static str {
        VERSION_QUERY
    }

    /// Build the `name` type length lookup.
    pub fn build_max_name_length() -> &'static str {
        MAX_NAME_LENGTH_QUERY
    }

    /// Build the `max_index_keys` lookup.
    pub fn build_max_index_keys() -> &'static str {
        MAX_INDEX_KEYS_QUERY
    }

    /// Build the schema listing over `information_schema.schemata`.
    pub fn build_schemas(&self) -> Result<String> {
        let mut sql = "select schema_name from information_schema.schemata".to_string();
        if let Some(ref pattern) = self.schema_pattern {
            sql.push_str(&format!(
                " where schema_name like '{}'",
                self.escape(pattern)?
            ));
        }
        sql.push_str(" order by schema_name");
        Ok(sql)
    }

    /// Build the table listing over `information_schema.tables`.
    pub fn build_tables(&self, plan: &TablesPlan) -> Result<String> {
        let schema = plan.schema_column;
        let mut sql = format!("SELECT {}, table_name", schema);
        if plan.extended {
            sql.push_str(
                ", table_catalog, table_type, self_referencing_column_name, reference_generation",
            );
        }
        sql.push_str(" FROM information_schema.tables");
        sql.push_str(&self.info_schema_where(schema, false)?);
        if plan.extended {
            sql.push_str(" AND table_type = 'BASE TABLE'");
        }
        sql.push_str(&format!(" ORDER BY {}, table_name", schema));
        Ok(sql)
    }

    /// Build the column listing over `information_schema.columns`.
    ///
    /// Nested object fields (`a['b']`) and dotted names are excluded.
    pub fn build_columns(&self, plan: &ColumnsPlan) -> Result<String> {
        let schema = plan.schema_column;
        let mut sql = format!(
            "SELECT {}, table_name, column_name, data_type, ordinal_position",
            schema
        );
        if plan.extended {
            sql.push_str(
                ", table_catalog, numeric_precision, numeric_precision_radix, column_default, \
                 character_octet_length, is_nullable, is_generated",
            );
        }
        sql.push_str(" FROM information_schema.columns");
        sql.push_str(&self.info_schema_where(schema, true)?);
        sql.push_str(" AND column_name NOT LIKE '%[%]' AND column_name NOT LIKE '%.%'");
        sql.push_str(&format!(" ORDER BY {}, table_name, ordinal_position", schema));
        Ok(sql)
    }

    /// Build the primary key listing for one table.
    ///
    /// `schema` and `table` are exact names, not patterns.
    pub fn build_primary_keys(
        &self,
        plan: &PrimaryKeysPlan,
        schema: Option<&str>,
        table: &str,
    ) -> Result<String> {
        match *plan {
            PrimaryKeysPlan::ConstraintArray { schema_column } => {
                let mut sql = format!(
                    "SELECT NULL AS TABLE_CAT, {} AS TABLE_SCHEM, table_name AS TABLE_NAME, \
                     constraint_name AS COLUMN_NAMES, 0 AS KEY_SEQ, NULL AS PK_NAME \
                     FROM information_schema.table_constraints \
                     WHERE '_id' != ANY(constraint_name) AND table_name = '{}'",
                    schema_column,
                    self.escape(table)?
                );
                if let Some(schema) = schema {
                    sql.push_str(&format!(
                        " AND {} = '{}'",
                        schema_column,
                        self.escape(schema)?
                    ));
                }
                sql.push_str(" ORDER BY TABLE_SCHEM, TABLE_NAME");
                Ok(sql)
            }
            PrimaryKeysPlan::KeyColumnUsage {
                schema_field,
                catalog_field,
            } => {
                let catalog = match catalog_field {
                    Some(field) => format!("kcu.{}", field),
                    None => "NULL".to_string(),
                };
                let mut sql = format!(
                    "SELECT {} AS \"TABLE_CAT\", kcu.{} AS \"TABLE_SCHEM\", \
                     kcu.table_name AS \"TABLE_NAME\", kcu.column_name AS \"COLUMN_NAME\", \
                     kcu.ordinal_position AS \"KEY_SEQ\", kcu.constraint_name AS \"PK_NAME\" \
                     FROM information_schema.key_column_usage kcu \
                     WHERE kcu.table_name = '{}'",
                    catalog,
                    schema_field,
                    self.escape(table)?
                );
                if let Some(schema) = schema {
                    sql.push_str(&format!(
                        " AND kcu.{} = '{}'",
                        schema_field,
                        self.escape(schema)?
                    ));
                }
                sql.push_str(" ORDER BY \"TABLE_SCHEM\", \"TABLE_NAME\", \"KEY_SEQ\"");
                Ok(sql)
            }
        }
    }

    /// Build the relation ACL listing over `pg_class`.
    pub fn build_table_privileges(&self) -> Result<String> {
        let mut sql = "SELECT n.nspname, c.relname, r.rolname, c.relacl \
                       FROM pg_catalog.pg_namespace n, pg_catalog.pg_class c, pg_catalog.pg_roles r \
                       WHERE c.relnamespace = n.oid AND c.relowner = r.oid"
            .to_string();
        if let Some(clause) = table_types::filter_clause(PRIVILEGE_TABLE_TYPES, true) {
            sql.push_str(&format!(" AND ({})", clause));
        }
        if let Some(ref pattern) = self.schema_pattern {
            sql.push_str(&format!(" AND n.nspname LIKE {}", self.quote(pattern)?));
        }
        if let Some(ref pattern) = self.table_pattern {
            sql.push_str(&format!(" AND c.relname LIKE {}", self.quote(pattern)?));
        }
        sql.push_str(" ORDER BY nspname, relname");
        Ok(sql)
    }

    /// Build the user-defined type listing over `pg_type`.
    ///
    /// A qualified type name pattern overrides the schema pattern.
    pub fn build_udts(&self) -> Result<String> {
        let mut sql = format!(
            "select null as type_cat, n.nspname as type_schem, t.typname as type_name, \
             null as class_name, CASE WHEN t.typtype='c' then {} else {} end as data_type, \
             pg_catalog.obj_description(t.oid, 'pg_type') as remarks, {} as base_type \
             from pg_catalog.pg_type t, pg_catalog.pg_namespace n \
             where t.typnamespace = n.oid and n.nspname != 'pg_catalog' \
             and n.nspname != 'pg_toast'",
            STRUCT,
            DISTINCT,
            domain_base_type()
        );

        match self.udt_types {
            Some(ref types) => {
                sql.push_str(" and (false");
                for code in types {
                    if *code == STRUCT {
                        sql.push_str(" or t.typtype = 'c'");
                    } else if *code == DISTINCT {
                        sql.push_str(" or t.typtype = 'd'");
                    }
                }
                sql.push(')');
            }
            None => sql.push_str(" and t.typtype IN ('c','d')"),
        }

        let mut schema_pattern = self.schema_pattern.as_deref();
        if let Some(ref pattern) = self.type_name_pattern {
            let (schema, type_name) = split_qualified_type_name(pattern);
            if schema.is_some() {
                schema_pattern = schema;
            }
            sql.push_str(&format!(" and t.typname like {}", self.quote(type_name)?));
        }
        if let Some(pattern) = schema_pattern {
            sql.push_str(&format!(" and n.nspname like {}", self.quote(pattern)?));
        }

        sql.push_str(" order by data_type, type_schem, type_name");
        Ok(sql)
    }

    /// WHERE clause shared by the `information_schema` listings.
    fn info_schema_where(&self, schema_column: &str, with_columns: bool) -> Result<String> {
        let mut clause = match self.schema_pattern.as_deref() {
            None => format!(" where {} like '%'", schema_column),
            Some("") => format!(" where {} is null", schema_column),
            Some(pattern) => format!(" where {} like '{}'", schema_column, self.escape(pattern)?),
        };
        if with_columns {
            if let Some(ref pattern) = self.column_pattern {
                clause.push_str(&format!(" and column_name like '{}'", self.escape(pattern)?));
            }
        }
        if let Some(ref pattern) = self.table_pattern {
            clause.push_str(&format!(" and table_name like '{}'", self.escape(pattern)?));
        }
        Ok(clause)
    }

    fn standard_conforming_strings(&self) -> bool {
        self.standard_conforming_strings
            .unwrap_or_else(|| self.client.standard_conforming_strings())
    }

    fn escape(&self, text: &str) -> Result<String> {
        match self.standard_conforming_strings {
            Some(enabled) => escape_string(text, enabled),
            None => self.client.escape_literal(text),
        }
    }

    /// Escape and quote, with an `E` prefix when backslashes are escapes.
    fn quote(&self, text: &str) -> Result<String> {
        Ok(quote_escaped(
            &self.escape(text)?,
            self.standard_conforming_strings(),
        ))
    }
}

/// Type code of a domain's base type; NULL for composite types.
fn domain_base_type() -> String {
    let mut sql = "CASE WHEN t.typtype = 'd' then (select CASE".to_string();
    for (oid, code) in PG_BASE_TYPES {
        sql.push_str(&format!(" when base_type.oid = {} then {}", oid, code));
    }
    sql.push_str(&format!(
        " else {} end from pg_catalog.pg_type base_type where base_type.oid = t.typbasetype) \
         else null end",
        OTHER
    ));
    sql
}

/// Split `catalog.schema.type` or `schema.type` into (schema, type).
///
/// With two or more dots the schema is everything between the first and
/// the last dot; the catalog part is ignored.
fn split_qualified_type_name(pattern: &str) -> (Option<&str>, &str) {
    match (pattern.find('.'), pattern.rfind('.')) {
        (Some(first), Some(last)) if first != last => {
            (Some(&pattern[first + 1..last]), &pattern[last + 1..])
        }
        (Some(first), Some(_)) => (Some(&pattern[..first]), &pattern[first + 1..]),
        _ => (None, pattern),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ExecuteResult;
    use crate::error::Error;
    use crate::metadata::version::Version;
    use async_trait::async_trait;

    /// Client that only escapes; executing is a test bug.
    #[derive(Debug)]
    struct EscapeOnlyClient {
        standard_conforming_strings: bool,
    }

    #[async_trait]
    impl CatalogClient for EscapeOnlyClient {
        async fn execute(&self, _sql: &str) -> Result<ExecuteResult> {
            Err(Error::execution("not connected"))
        }

        fn standard_conforming_strings(&self) -> bool {
            self.standard_conforming_strings
        }
    }

    const CLIENT: EscapeOnlyClient = EscapeOnlyClient {
        standard_conforming_strings: true,
    };

    fn v(text: &str) -> Version {
        Version::parse(text).unwrap()
    }

    #[test]
    fn test_build_schemas() {
        let sql = CatalogQueryBuilder::new(&CLIENT).build_schemas().unwrap();
        assert_eq!(
            sql,
            "select schema_name from information_schema.schemata order by schema_name"
        );

        let sql = CatalogQueryBuilder::new(&CLIENT)
            .with_schema_pattern(Some("d'oc%"))
            .build_schemas()
            .unwrap();
        assert_eq!(
            sql,
            "select schema_name from information_schema.schemata \
             where schema_name like 'd''oc%' order by schema_name"
        );
    }

    #[test]
    fn test_build_tables_legacy() {
        let plan = TablesPlan::for_version(&v("1.9.9"));
        let sql = CatalogQueryBuilder::new(&CLIENT).build_tables(&plan).unwrap();
        assert_eq!(
            sql,
            "SELECT schema_name, table_name FROM information_schema.tables \
             where schema_name like '%' ORDER BY schema_name, table_name"
        );
    }

    #[test]
    fn test_build_tables_extended_at_boundary() {
        let plan = TablesPlan::for_version(&v("2.0.0"));
        let sql = CatalogQueryBuilder::new(&CLIENT)
            .with_schema_pattern(Some("doc"))
            .with_table_pattern(Some("t%"))
            .build_tables(&plan)
            .unwrap();
        assert_eq!(
            sql,
            "SELECT table_schema, table_name, table_catalog, table_type, \
             self_referencing_column_name, reference_generation \
             FROM information_schema.tables where table_schema like 'doc' \
             and table_name like 't%' AND table_type = 'BASE TABLE' \
             ORDER BY table_schema, table_name"
        );
    }

    #[test]
    fn test_tables_sql_differs_only_in_gated_fragments() {
        let build = |version: &str| {
            CatalogQueryBuilder::new(&CLIENT)
                .with_schema_pattern(Some("doc"))
                .build_tables(&TablesPlan::for_version(&v(version)))
                .unwrap()
        };
        let legacy = build("1.9.9");
        let current = build("2.0.0");
        assert!(legacy.contains("schema_name like 'doc'"));
        assert!(!legacy.contains("table_schema"));
        assert!(current.contains("table_schema like 'doc'"));
        assert_eq!(
            current
                .replace(
                    ", table_catalog, table_type, self_referencing_column_name, reference_generation",
                    ""
                )
                .replace(" AND table_type = 'BASE TABLE'", "")
                .replace("table_schema", "schema_name"),
            legacy
        );
    }

    #[test]
    fn test_empty_schema_pattern_is_null() {
        let plan = TablesPlan::for_version(&v("3.0.0"));
        let sql = CatalogQueryBuilder::new(&CLIENT)
            .with_schema_pattern(Some(""))
            .build_tables(&plan)
            .unwrap();
        assert!(sql.contains(" where table_schema is null AND table_type"));
    }

    #[test]
    fn test_build_columns() {
        let sql = CatalogQueryBuilder::new(&CLIENT)
            .with_table_pattern(Some("t1"))
            .with_column_pattern(Some("id"))
            .build_columns(&ColumnsPlan::for_version(&v("1.9.9")))
            .unwrap();
        assert_eq!(
            sql,
            "SELECT schema_name, table_name, column_name, data_type, ordinal_position \
             FROM information_schema.columns where schema_name like '%' \
             and column_name like 'id' and table_name like 't1' \
             AND column_name NOT LIKE '%[%]' AND column_name NOT LIKE '%.%' \
             ORDER BY schema_name, table_name, ordinal_position"
        );

        let sql = CatalogQueryBuilder::new(&CLIENT)
            .build_columns(&ColumnsPlan::for_version(&v("2.0.0")))
            .unwrap();
        assert!(sql.starts_with(
            "SELECT table_schema, table_name, column_name, data_type, ordinal_position, \
             table_catalog, numeric_precision, numeric_precision_radix, column_default, \
             character_octet_length, is_nullable, is_generated FROM"
        ));
    }

    #[test]
    fn test_build_primary_keys_constraint_array() {
        let plan = PrimaryKeysPlan::for_version(&v("2.2.0"));
        let sql = CatalogQueryBuilder::new(&CLIENT)
            .build_primary_keys(&plan, Some("doc"), "t'1")
            .unwrap();
        assert_eq!(
            sql,
            "SELECT NULL AS TABLE_CAT, table_schema AS TABLE_SCHEM, table_name AS TABLE_NAME, \
             constraint_name AS COLUMN_NAMES, 0 AS KEY_SEQ, NULL AS PK_NAME \
             FROM information_schema.table_constraints \
             WHERE '_id' != ANY(constraint_name) AND table_name = 't''1' \
             AND table_schema = 'doc' ORDER BY TABLE_SCHEM, TABLE_NAME"
        );
    }

    #[test]
    fn test_build_primary_keys_key_column_usage() {
        let sql = CatalogQueryBuilder::new(&CLIENT)
            .build_primary_keys(&PrimaryKeysPlan::for_version(&v("3.0.0")), None, "t1")
            .unwrap();
        assert!(sql.starts_with("SELECT NULL AS \"TABLE_CAT\", kcu.table_catalog AS \"TABLE_SCHEM\""));
        assert!(sql.ends_with(
            "WHERE kcu.table_name = 't1' ORDER BY \"TABLE_SCHEM\", \"TABLE_NAME\", \"KEY_SEQ\""
        ));

        let sql = CatalogQueryBuilder::new(&CLIENT)
            .build_primary_keys(&PrimaryKeysPlan::for_version(&v("5.1.0")), Some("doc"), "t1")
            .unwrap();
        assert!(sql.starts_with(
            "SELECT kcu.table_catalog AS \"TABLE_CAT\", kcu.table_schema AS \"TABLE_SCHEM\""
        ));
        assert!(sql.contains("AND kcu.table_schema = 'doc'"));
    }

    #[test]
    fn test_build_table_privileges() {
        let sql = CatalogQueryBuilder::new(&CLIENT)
            .with_schema_pattern(Some("doc"))
            .with_table_pattern(Some("t%"))
            .build_table_privileges()
            .unwrap();
        assert!(sql.starts_with("SELECT n.nspname, c.relname, r.rolname, c.relacl FROM"));
        assert!(sql.contains("AND ((c.relkind = 'r' AND n.nspname !~ '^pg_'"));
        assert!(sql.contains("OR (c.relkind = 'f'))"));
        assert!(sql.ends_with(
            "AND n.nspname LIKE 'doc' AND c.relname LIKE 't%' ORDER BY nspname, relname"
        ));
    }

    #[test]
    fn test_build_udts_default_types() {
        let sql = CatalogQueryBuilder::new(&CLIENT).build_udts().unwrap();
        assert!(sql.contains("CASE WHEN t.typtype='c' then 2002 else 2001 end as data_type"));
        assert!(sql.contains(" and t.typtype IN ('c','d')"));
        assert!(sql.ends_with(" order by data_type, type_schem, type_name"));
    }

    #[test]
    fn test_build_udts_type_filter_and_qualified_name() {
        let sql = CatalogQueryBuilder::new(&CLIENT)
            .with_udt_types(Some(&[STRUCT, 12][..]))
            .with_schema_pattern(Some("ignored"))
            .with_type_name_pattern(Some("crate.doc.point"))
            .build_udts()
            .unwrap();
        assert!(sql.contains(" and (false or t.typtype = 'c')"));
        assert!(sql.contains(" and t.typname like 'point' and n.nspname like 'doc'"));
        assert!(!sql.contains("ignored"));
    }

    #[test]
    fn test_build_udts_e_strings() {
        let client = EscapeOnlyClient {
            standard_conforming_strings: false,
        };
        let sql = CatalogQueryBuilder::new(&client)
            .with_type_name_pattern(Some(r"a\b"))
            .build_udts()
            .unwrap();
        let expected = format!(" and t.typname like E'{}'", escape_string(r"a\b", false).unwrap());
        assert!(sql.contains(&expected));
    }

    #[test]
    fn test_build_udts_domain_base_type() {
        let sql = CatalogQueryBuilder::new(&CLIENT).build_udts().unwrap();
        assert!(sql.contains("as remarks, CASE WHEN t.typtype = 'd' then (select CASE"));
        assert!(sql.contains(" when base_type.oid = 23 then 4"));
        assert!(sql.contains(
            " else 1111 end from pg_catalog.pg_type base_type \
             where base_type.oid = t.typbasetype) else null end as base_type"
        ));
    }

    #[test]
    fn test_standard_conforming_strings_override() {
        let sql = CatalogQueryBuilder::new(&CLIENT)
            .with_standard_conforming_strings(Some(false))
            .with_type_name_pattern(Some(r"a\b"))
            .with_table_pattern(Some(r"t\1"))
            .build_udts()
            .unwrap();
        assert!(sql.contains(r" and t.typname like E'a\\b'"));

        let sql = CatalogQueryBuilder::new(&CLIENT)
            .with_standard_conforming_strings(Some(false))
            .with_table_pattern(Some(r"t\1"))
            .build_tables(&TablesPlan::for_version(&v("2.0.0")))
            .unwrap();
        assert!(sql.contains(r"and table_name like 't\\1'"));

        let off = EscapeOnlyClient {
            standard_conforming_strings: false,
        };
        let sql = CatalogQueryBuilder::new(&off)
            .with_standard_conforming_strings(Some(true))
            .with_type_name_pattern(Some(r"a\b"))
            .build_udts()
            .unwrap();
        assert!(sql.contains(r" and t.typname like 'a\b'"));
    }

    #[test]
    fn test_split_qualified_type_name() {
        assert_eq!(split_qualified_type_name("point"), (None, "point"));
        assert_eq!(split_qualified_type_name("doc.point"), (Some("doc"), "point"));
        assert_eq!(
            split_qualified_type_name("crate.doc.point"),
            (Some("doc"), "point")
        );
        assert_eq!(
            split_qualified_type_name("a.b.c.d"),
            (Some("b.c"), "d")
        );
    }

    #[test]
    fn test_escape_failure_propagates() {
        let result = CatalogQueryBuilder::new(&CLIENT)
            .with_table_pattern(Some("bad\0"))
            .build_tables(&TablesPlan::for_version(&v("2.0.0")));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
