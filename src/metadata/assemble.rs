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

//! Row assembly for catalog query results.
//!
//! Each function drains a [`ResultCursor`] and produces typed records. The
//! plan handed in is the same one the SQL builder used, so a column is only
//! read when the query selected it; everything else is a constant or NULL.

use crate::error::{Error, Result};
use crate::metadata::acl::{parse_acl, quote_acl_item};
use crate::metadata::plan::{ColumnsPlan, PrimaryKeysPlan, TablesPlan};
use crate::metadata::type_mapping::map_type;
use crate::metadata::types::{
    ColumnRow, PrimaryKeyRow, PrivilegeRow, SchemaRow, TableRow, UdtRow,
};
use crate::metadata::version::Version;
use crate::reader::ResultCursor;
use arrow_schema::DataType;
use tracing::trace;

/// Schemas whose tables are reported as system tables before the catalog
/// carried a table type.
const SYSTEM_SCHEMAS: &[&str] = &["sys", "information_schema"];

/// Map the catalog's reference generation onto its short form.
pub fn reference_generation(value: Option<&str>) -> Option<&'static str> {
    match value? {
        "SYSTEM GENERATED" => Some("SYSTEM"),
        "USER GENERATED" => Some("USER"),
        _ => None,
    }
}

fn yes_no(value: bool) -> String {
    if value { "YES" } else { "NO" }.to_string()
}

/// Rows of the schema listing.
pub fn schema_rows(cursor: &mut ResultCursor) -> Result<Vec<SchemaRow>> {
    let mut rows = Vec::new();
    while cursor.advance()? {
        rows.push(SchemaRow {
            schema_name: cursor.get_string("schema_name")?,
        });
    }
    Ok(rows)
}

/// Rows of the table listing.
pub fn table_rows(cursor: &mut ResultCursor, plan: &TablesPlan) -> Result<Vec<TableRow>> {
    let mut rows = Vec::new();
    while cursor.advance()? {
        let schema_name = cursor.get_string(plan.schema_column)?;
        let table_name = cursor.get_string("table_name")?.unwrap_or_default();
        let row = if plan.extended {
            TableRow {
                catalog_name: cursor.get_string("table_catalog")?,
                schema_name,
                table_name,
                table_type: cursor.get_string("table_type")?,
                self_referencing_col_name: cursor.get_string("self_referencing_column_name")?,
                ref_generation: reference_generation(
                    cursor.get_string("reference_generation")?.as_deref(),
                ),
            }
        } else {
            let table_type = if schema_name
                .as_deref()
                .is_some_and(|schema| SYSTEM_SCHEMAS.contains(&schema))
            {
                "SYSTEM TABLE"
            } else {
                "TABLE"
            };
            TableRow {
                catalog_name: None,
                schema_name,
                table_name,
                table_type: Some(table_type.to_string()),
                self_referencing_col_name: None,
                ref_generation: None,
            }
        };
        rows.push(row);
    }
    Ok(rows)
}

/// Rows of the column listing.
pub fn column_rows(cursor: &mut ResultCursor, plan: &ColumnsPlan) -> Result<Vec<ColumnRow>> {
    let mut rows = Vec::new();
    while cursor.advance()? {
        let type_name = cursor.get_string("data_type")?;
        // Every type code fits in a smallint.
        let data_type = map_type(type_name.as_deref().unwrap_or_default()) as i16;

        let mut row = ColumnRow {
            catalog_name: None,
            schema_name: cursor.get_string(plan.schema_column)?,
            table_name: cursor.get_string("table_name")?,
            column_name: cursor.get_string("column_name")?,
            data_type,
            type_name,
            decimal_digits: None,
            num_prec_radix: Some(10),
            column_def: None,
            char_octet_length: None,
            ordinal_position: cursor.get_i32("ordinal_position")?,
            is_nullable: yes_no(true),
            is_generated: Some(yes_no(false)),
        };

        if plan.extended {
            row.catalog_name = cursor.get_string("table_catalog")?;
            row.decimal_digits = cursor.get_i32("numeric_precision")?;
            row.num_prec_radix = cursor.get_i32("numeric_precision_radix")?;
            row.column_def = cursor.get_string("column_default")?;
            row.char_octet_length = cursor.get_string("character_octet_length")?;
            row.is_nullable = yes_no(cursor.get_bool("is_nullable")?.unwrap_or(false));
            row.is_generated = if plan.generated_as_text {
                cursor.get_string("is_generated")?
            } else {
                Some(yes_no(cursor.get_bool("is_generated")?.unwrap_or(false)))
            };
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Rows of the primary key listing.
///
/// The constraint-array shape returns one row per table; it is expanded to
/// one row per key column with a 1-based sequence number.
pub fn primary_key_rows(
    cursor: &mut ResultCursor,
    plan: &PrimaryKeysPlan,
) -> Result<Vec<PrimaryKeyRow>> {
    let mut rows = Vec::new();
    while cursor.advance()? {
        match plan {
            PrimaryKeysPlan::ConstraintArray { .. } => {
                let catalog_name = cursor.get_string(1usize)?;
                let schema_name = cursor.get_string(2usize)?;
                let table_name = cursor.get_string(3usize)?;
                let pk_name = cursor.get_string(6usize)?;
                let columns = cursor.get_string_array(4usize)?.unwrap_or_default();
                for (i, column_name) in columns.into_iter().enumerate() {
                    rows.push(PrimaryKeyRow {
                        catalog_name: catalog_name.clone(),
                        schema_name: schema_name.clone(),
                        table_name: table_name.clone(),
                        column_name,
                        // 1-based, like the key_column_usage shape.
                        key_seq: i16::try_from(i + 1).ok(),
                        pk_name: pk_name.clone(),
                    });
                }
            }
            PrimaryKeysPlan::KeyColumnUsage { .. } => {
                let key_seq = cursor
                    .get_i32("KEY_SEQ")?
                    .map(|seq| {
                        i16::try_from(seq).map_err(|_| {
                            Error::invalid_state(format!("key sequence {} out of range", seq))
                        })
                    })
                    .transpose()?;
                rows.push(PrimaryKeyRow {
                    catalog_name: cursor.get_string("TABLE_CAT")?,
                    schema_name: cursor.get_string("TABLE_SCHEM")?,
                    table_name: cursor.get_string("TABLE_NAME")?,
                    column_name: cursor.get_string("COLUMN_NAME")?,
                    key_seq,
                    pk_name: cursor.get_string("PK_NAME")?,
                });
            }
        }
    }
    Ok(rows)
}

/// Read `relacl` as an ACL array literal, whether the channel delivers it
/// as text or as a list of entries.
fn acl_literal(cursor: &ResultCursor) -> Result<Option<String>> {
    match cursor.data_type("relacl")? {
        DataType::List(_) | DataType::LargeList(_) => {
            let Some(items) = cursor.get_string_array("relacl")? else {
                return Ok(None);
            };
            let items: Vec<String> = items
                .into_iter()
                .flatten()
                .map(|item| quote_acl_item(&item))
                .collect();
            Ok(Some(format!("{{{}}}", items.join(","))))
        }
        _ => cursor.get_string("relacl"),
    }
}

/// Rows of the table privilege listing, one per (table, privilege,
/// grantee, grant). Privileges are ordered by name within a table.
///
/// `protocol_version` decides the owner's default privileges for relations
/// without an ACL.
pub fn privilege_rows(
    cursor: &mut ResultCursor,
    protocol_version: &Version,
) -> Result<Vec<PrivilegeRow>> {
    let mut rows = Vec::new();
    while cursor.advance()? {
        let schema_name = cursor.get_string("nspname")?.unwrap_or_default();
        let table_name = cursor.get_string("relname")?.unwrap_or_default();
        let owner = cursor.get_string("rolname")?.unwrap_or_default();
        let acl = acl_literal(cursor)?;
        trace!(schema = %schema_name, table = %table_name, acl = ?acl, "decoding relation ACL");

        for (privilege, grantees) in parse_acl(acl.as_deref(), &owner, protocol_version) {
            for (grantee, grants) in grantees {
                for grant in grants {
                    rows.push(PrivilegeRow {
                        schema_name: schema_name.clone(),
                        table_name: table_name.clone(),
                        grantor: grant.grantor,
                        grantee: grantee.clone(),
                        privilege: privilege.clone(),
                        grantable: grant.grantable,
                    });
                }
            }
        }
    }
    Ok(rows)
}

/// Rows of the user-defined type listing.
pub fn udt_rows(cursor: &mut ResultCursor) -> Result<Vec<UdtRow>> {
    let mut rows = Vec::new();
    while cursor.advance()? {
        let base_type = cursor
            .get_i32("base_type")?
            .and_then(|code| i16::try_from(code).ok());
        rows.push(UdtRow {
            type_cat: cursor.get_string("type_cat")?,
            type_schem: cursor.get_string("type_schem")?,
            type_name: cursor.get_string("type_name")?,
            class_name: cursor.get_string("class_name")?,
            data_type: cursor.get_i32("data_type")?,
            remarks: cursor.get_string("remarks")?,
            base_type,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ExecuteResult;
    use crate::reader::InlineReader;
    use arrow_array::builder::{ListBuilder, StringBuilder};
    use arrow_array::{ArrayRef, BooleanArray, Int32Array, RecordBatch, StringArray};
    use std::sync::Arc;

    fn cursor(columns: Vec<(&str, ArrayRef)>) -> ResultCursor {
        let batch = RecordBatch::try_from_iter(columns).unwrap();
        ResultCursor::new(ExecuteResult {
            reader: Box::new(InlineReader::new(vec![batch])),
        })
    }

    fn strings(values: &[Option<&str>]) -> ArrayRef {
        Arc::new(StringArray::from(values.to_vec()))
    }

    fn ints(values: &[Option<i32>]) -> ArrayRef {
        Arc::new(Int32Array::from(values.to_vec()))
    }

    fn bools(values: &[bool]) -> ArrayRef {
        Arc::new(BooleanArray::from(values.to_vec()))
    }

    fn v(text: &str) -> Version {
        Version::parse(text).unwrap()
    }

    #[test]
    fn test_reference_generation() {
        assert_eq!(reference_generation(Some("SYSTEM GENERATED")), Some("SYSTEM"));
        assert_eq!(reference_generation(Some("USER GENERATED")), Some("USER"));
        assert_eq!(reference_generation(Some("DERIVED")), None);
        assert_eq!(reference_generation(None), None);
    }

    #[test]
    fn test_legacy_table_rows() {
        let mut c = cursor(vec![
            ("schema_name", strings(&[Some("doc"), Some("sys")])),
            ("table_name", strings(&[Some("t1"), Some("nodes")])),
        ]);
        let rows = table_rows(&mut c, &TablesPlan::for_version(&v("1.9.0"))).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].table_type.as_deref(), Some("TABLE"));
        assert_eq!(rows[1].table_type.as_deref(), Some("SYSTEM TABLE"));
        assert!(rows.iter().all(|r| r.catalog_name.is_none()
            && r.self_referencing_col_name.is_none()
            && r.ref_generation.is_none()));
    }

    #[test]
    fn test_table_rows_keep_null_schema() {
        let mut c = cursor(vec![
            ("schema_name", strings(&[None])),
            ("table_name", strings(&[Some("t1")])),
        ]);
        let rows = table_rows(&mut c, &TablesPlan::for_version(&v("1.9.0"))).unwrap();
        assert_eq!(rows[0].schema_name, None);
        assert_eq!(rows[0].table_type.as_deref(), Some("TABLE"));

        let mut c = cursor(vec![("schema_name", strings(&[None, Some("doc")]))]);
        let rows = schema_rows(&mut c).unwrap();
        assert_eq!(rows[0].schema_name, None);
        assert_eq!(rows[1].schema_name.as_deref(), Some("doc"));
    }

    #[test]
    fn test_extended_table_rows() {
        let mut c = cursor(vec![
            ("table_schema", strings(&[Some("doc")])),
            ("table_name", strings(&[Some("t1")])),
            ("table_catalog", strings(&[Some("crate")])),
            ("table_type", strings(&[Some("BASE TABLE")])),
            ("self_referencing_column_name", strings(&[Some("_id")])),
            ("reference_generation", strings(&[Some("SYSTEM GENERATED")])),
        ]);
        let rows = table_rows(&mut c, &TablesPlan::for_version(&v("3.0.0"))).unwrap();
        assert_eq!(rows[0].catalog_name.as_deref(), Some("crate"));
        assert_eq!(rows[0].table_type.as_deref(), Some("BASE TABLE"));
        assert_eq!(rows[0].self_referencing_col_name.as_deref(), Some("_id"));
        assert_eq!(rows[0].ref_generation, Some("SYSTEM"));
    }

    fn extended_columns(is_generated: ArrayRef) -> ResultCursor {
        cursor(vec![
            ("table_schema", strings(&[Some("doc")])),
            ("table_name", strings(&[Some("t1")])),
            ("column_name", strings(&[Some("x")])),
            ("data_type", strings(&[Some("long_array")])),
            ("ordinal_position", ints(&[Some(2)])),
            ("table_catalog", strings(&[Some("crate")])),
            ("numeric_precision", ints(&[Some(64)])),
            ("numeric_precision_radix", ints(&[Some(2)])),
            ("column_default", strings(&[None])),
            ("character_octet_length", ints(&[Some(8)])),
            ("is_nullable", bools(&[false])),
            ("is_generated", is_generated),
        ])
    }

    #[test]
    fn test_column_rows_boolean_generated() {
        let mut c = extended_columns(bools(&[true]));
        let rows = column_rows(&mut c, &ColumnsPlan::for_version(&v("3.3.0"))).unwrap();
        let row = &rows[0];
        assert_eq!(row.data_type, 2003);
        assert_eq!(row.catalog_name.as_deref(), Some("crate"));
        assert_eq!(row.decimal_digits, Some(64));
        assert_eq!(row.num_prec_radix, Some(2));
        assert_eq!(row.char_octet_length.as_deref(), Some("8"));
        assert_eq!(row.is_nullable, "NO");
        assert_eq!(row.is_generated.as_deref(), Some("YES"));
        assert_eq!(row.ordinal_position, Some(2));
    }

    #[test]
    fn test_column_rows_text_generated() {
        let mut c = extended_columns(strings(&[Some("ALWAYS")]));
        let rows = column_rows(&mut c, &ColumnsPlan::for_version(&v("4.0.0"))).unwrap();
        assert_eq!(rows[0].is_generated.as_deref(), Some("ALWAYS"));
    }

    #[test]
    fn test_column_rows_legacy_constants() {
        let mut c = cursor(vec![
            ("schema_name", strings(&[Some("doc")])),
            ("table_name", strings(&[Some("t1")])),
            ("column_name", strings(&[Some("name")])),
            ("data_type", strings(&[Some("geo_shape")])),
            ("ordinal_position", ints(&[Some(1)])),
        ]);
        let rows = column_rows(&mut c, &ColumnsPlan::for_version(&v("1.2.0"))).unwrap();
        let row = &rows[0];
        assert_eq!(row.data_type, 1111);
        assert_eq!(row.num_prec_radix, Some(10));
        assert_eq!(row.is_nullable, "YES");
        assert_eq!(row.is_generated.as_deref(), Some("NO"));
        assert!(row.catalog_name.is_none() && row.decimal_digits.is_none());
    }

    #[test]
    fn test_primary_key_rows_expand_constraint_array() {
        let mut names = ListBuilder::new(StringBuilder::new());
        names.values().append_value("a");
        names.values().append_value("b");
        names.append(true);
        let mut c = cursor(vec![
            ("TABLE_CAT", strings(&[None])),
            ("TABLE_SCHEM", strings(&[Some("doc")])),
            ("TABLE_NAME", strings(&[Some("t1")])),
            ("COLUMN_NAMES", Arc::new(names.finish()) as ArrayRef),
            ("KEY_SEQ", ints(&[Some(0)])),
            ("PK_NAME", strings(&[None])),
        ]);
        let plan = PrimaryKeysPlan::for_version(&v("2.2.0"));
        let rows = primary_key_rows(&mut c, &plan).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].column_name.as_deref(), Some("a"));
        assert_eq!(rows[0].key_seq, Some(1));
        assert_eq!(rows[1].column_name.as_deref(), Some("b"));
        assert_eq!(rows[1].key_seq, Some(2));
        assert_eq!(rows[1].schema_name.as_deref(), Some("doc"));
    }

    #[test]
    fn test_primary_key_rows_key_column_usage() {
        let mut c = cursor(vec![
            ("TABLE_CAT", strings(&[Some("crate"), Some("crate")])),
            ("TABLE_SCHEM", strings(&[Some("doc"), Some("doc")])),
            ("TABLE_NAME", strings(&[Some("t1"), Some("t1")])),
            ("COLUMN_NAME", strings(&[Some("a"), Some("b")])),
            ("KEY_SEQ", ints(&[Some(1), Some(2)])),
            ("PK_NAME", strings(&[Some("t1_pk"), Some("t1_pk")])),
        ]);
        let plan = PrimaryKeysPlan::for_version(&v("5.1.0"));
        let rows = primary_key_rows(&mut c, &plan).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].key_seq, Some(2));
        assert_eq!(rows[0].catalog_name.as_deref(), Some("crate"));
        assert_eq!(rows[0].pk_name.as_deref(), Some("t1_pk"));
    }

    #[test]
    fn test_privilege_rows_from_text_acl() {
        let mut c = cursor(vec![
            ("nspname", strings(&[Some("doc"), Some("doc")])),
            ("relname", strings(&[Some("t1"), Some("t2")])),
            ("rolname", strings(&[Some("crate"), Some("crate")])),
            ("relacl", strings(&[Some("{alice=r*w/crate}"), None])),
        ]);
        let rows = privilege_rows(&mut c, &v("14.0")).unwrap();

        let t1: Vec<_> = rows.iter().filter(|r| r.table_name == "t1").collect();
        assert_eq!(t1.len(), 2);
        assert_eq!(t1[0].privilege, "SELECT");
        assert!(t1[0].grantable);
        assert_eq!(t1[1].privilege, "UPDATE");
        assert!(!t1[1].grantable);
        assert_eq!(t1[0].grantor.as_deref(), Some("crate"));

        // Default owner ACL, TRUNCATE included from protocol 8.4.
        let t2: Vec<_> = rows.iter().filter(|r| r.table_name == "t2").collect();
        assert_eq!(t2.len(), 7);
        assert!(t2.iter().any(|r| r.privilege == "TRUNCATE"));
        assert!(t2.iter().all(|r| r.grantee == "crate"));
    }

    #[test]
    fn test_privilege_rows_default_acl_before_truncate() {
        let mut c = cursor(vec![
            ("nspname", strings(&[Some("doc")])),
            ("relname", strings(&[Some("t1")])),
            ("rolname", strings(&[Some("crate")])),
            ("relacl", strings(&[None])),
        ]);
        let rows = privilege_rows(&mut c, &v("8.3")).unwrap();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.privilege != "TRUNCATE"));
    }

    #[test]
    fn test_privilege_rows_from_list_acl() {
        let mut acl = ListBuilder::new(StringBuilder::new());
        acl.values().append_value("=r/crate");
        acl.values().append_value("bob=a/crate");
        acl.append(true);
        let mut c = cursor(vec![
            ("nspname", strings(&[Some("doc")])),
            ("relname", strings(&[Some("t1")])),
            ("rolname", strings(&[Some("crate")])),
            ("relacl", Arc::new(acl.finish()) as ArrayRef),
        ]);
        let rows = privilege_rows(&mut c, &v("14.0")).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].privilege, "INSERT");
        assert_eq!(rows[0].grantee, "bob");
        assert_eq!(rows[1].privilege, "SELECT");
        assert_eq!(rows[1].grantee, "PUBLIC");
    }

    #[test]
    fn test_privilege_rows_list_acl_with_delimiters() {
        let mut acl = ListBuilder::new(StringBuilder::new());
        acl.values().append_value(r#"we"ird,name=r/crate"#);
        acl.values().append_value(r"back\slash=w/crate");
        acl.append(true);
        acl.append(false);
        let mut c = cursor(vec![
            ("nspname", strings(&[Some("doc"), Some("doc")])),
            ("relname", strings(&[Some("t1"), Some("t2")])),
            ("rolname", strings(&[Some("crate"), Some("crate")])),
            ("relacl", Arc::new(acl.finish()) as ArrayRef),
        ]);
        let rows = privilege_rows(&mut c, &v("14.0")).unwrap();

        let t1: Vec<_> = rows.iter().filter(|r| r.table_name == "t1").collect();
        assert_eq!(t1.len(), 2);
        assert_eq!(t1[0].privilege, "SELECT");
        assert_eq!(t1[0].grantee, r#"we"ird,name"#);
        assert_eq!(t1[1].privilege, "UPDATE");
        assert_eq!(t1[1].grantee, r"back\slash");

        // A NULL list still falls back to the owner's defaults.
        let t2: Vec<_> = rows.iter().filter(|r| r.table_name == "t2").collect();
        assert_eq!(t2.len(), 7);
    }

    #[test]
    fn test_udt_rows() {
        let mut c = cursor(vec![
            ("type_cat", strings(&[None])),
            ("type_schem", strings(&[Some("doc")])),
            ("type_name", strings(&[Some("point")])),
            ("class_name", strings(&[None])),
            ("data_type", ints(&[Some(2002)])),
            ("remarks", strings(&[Some("a point")])),
            ("base_type", ints(&[None])),
        ]);
        let rows = udt_rows(&mut c).unwrap();
        assert_eq!(rows[0].data_type, Some(2002));
        assert_eq!(rows[0].base_type, None);
        assert_eq!(rows[0].remarks.as_deref(), Some("a point"));
    }

    #[test]
    fn test_udt_rows_domain_base_type() {
        let mut c = cursor(vec![
            ("type_cat", strings(&[None])),
            ("type_schem", strings(&[Some("doc")])),
            ("type_name", strings(&[Some("positive_int")])),
            ("class_name", strings(&[None])),
            ("data_type", ints(&[Some(2001)])),
            ("remarks", strings(&[None])),
            ("base_type", ints(&[Some(4)])),
        ]);
        let rows = udt_rows(&mut c).unwrap();
        assert_eq!(rows[0].data_type, Some(2001));
        assert_eq!(rows[0].base_type, Some(4));
    }
}
