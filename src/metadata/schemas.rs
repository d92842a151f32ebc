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

//! Fixed output column lists for every metadata operation.
//!
//! Column order and kinds are part of the public contract: callers read
//! results by position as well as by name. Each list is a `&'static`
//! slice so a [`MetadataResult`](super::types::MetadataResult) can carry
//! it without allocation, and [`arrow_schema`] turns any list into the
//! Arrow schema used by `to_record_batch()`.

use arrow_schema::{DataType, Field, Schema};

/// Value kind of one output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Text,
    Int16,
    Int32,
    Boolean,
}

impl ColumnKind {
    /// Arrow type used when exporting a column of this kind.
    pub fn arrow_type(self) -> DataType {
        match self {
            ColumnKind::Text => DataType::Utf8,
            ColumnKind::Int16 => DataType::Int16,
            ColumnKind::Int32 => DataType::Int32,
            ColumnKind::Boolean => DataType::Boolean,
        }
    }
}

/// One named, typed output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn text(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Text,
    }
}

const fn int16(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Int16,
    }
}

const fn int32(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Int32,
    }
}

const fn boolean(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Boolean,
    }
}

/// Build the Arrow schema for a column list. Every field is nullable.
pub fn arrow_schema(columns: &[ColumnSpec]) -> Schema {
    Schema::new(
        columns
            .iter()
            .map(|c| Field::new(c.name, c.kind.arrow_type(), true))
            .collect::<Vec<_>>(),
    )
}

/// Position of `name` in a column list.
pub fn position(columns: &[ColumnSpec], name: &str) -> Option<usize> {
    columns.iter().position(|c| c.name == name)
}

pub const SCHEMAS: &[ColumnSpec] = &[text("TABLE_SCHEM"), text("TABLE_CAT")];

pub const CATALOGS: &[ColumnSpec] = &[text("TABLE_CAT")];

pub const TABLE_TYPES: &[ColumnSpec] = &[text("TABLE_TYPE")];

pub const TABLES: &[ColumnSpec] = &[
    text("TABLE_CAT"),
    text("TABLE_SCHEM"),
    text("TABLE_NAME"),
    text("TABLE_TYPE"),
    text("REMARKS"),
    text("TYPE_CAT"),
    text("TYPE_SCHEM"),
    text("TYPE_NAME"),
    text("SELF_REFERENCING_COL_NAME"),
    text("REF_GENERATION"),
];

/// `BUFFER_LENGTH` and `CHAR_OCTET_LENGTH` are text columns even though
/// the octet length is numeric in the catalog.
pub const COLUMNS: &[ColumnSpec] = &[
    text("TABLE_CAT"),
    text("TABLE_SCHEM"),
    text("TABLE_NAME"),
    text("COLUMN_NAME"),
    int16("DATA_TYPE"),
    text("TYPE_NAME"),
    int32("COLUMN_SIZE"),
    text("BUFFER_LENGTH"),
    int32("DECIMAL_DIGITS"),
    int32("NUM_PREC_RADIX"),
    int32("NULLABLE"),
    text("REMARKS"),
    text("COLUMN_DEF"),
    int32("SQL_DATA_TYPE"),
    int32("SQL_DATETIME_SUB"),
    text("CHAR_OCTET_LENGTH"),
    int32("ORDINAL_POSITION"),
    text("IS_NULLABLE"),
    text("SCOPE_CATALOG"),
    text("SCOPE_SCHEMA"),
    text("SCOPE_TABLE"),
    int16("SOURCE_DATA_TYPE"),
    text("IS_AUTOINCREMENT"),
    text("IS_GENERATEDCOLUMN"),
];

pub const PRIMARY_KEYS: &[ColumnSpec] = &[
    text("TABLE_CAT"),
    text("TABLE_SCHEM"),
    text("TABLE_NAME"),
    text("COLUMN_NAME"),
    int16("KEY_SEQ"),
    text("PK_NAME"),
];

/// Shared by imported keys, exported keys and cross references.
pub const KEYS: &[ColumnSpec] = &[
    text("PKTABLE_CAT"),
    text("PKTABLE_SCHEM"),
    text("PKTABLE_NAME"),
    text("PKCOLUMN_NAME"),
    text("FKTABLE_CAT"),
    text("FKTABLE_SCHEM"),
    text("FKTABLE_NAME"),
    text("FKCOLUMN_NAME"),
    text("KEY_SEQ"),
    text("UPDATE_RULE"),
    text("DELETE_RULE"),
    text("FK_NAME"),
    text("PK_NAME"),
    text("DEFERRABILITY"),
];

pub const TABLE_PRIVILEGES: &[ColumnSpec] = &[
    text("TABLE_CAT"),
    text("TABLE_SCHEM"),
    text("TABLE_NAME"),
    text("GRANTOR"),
    text("GRANTEE"),
    text("PRIVILEGE"),
    text("IS_GRANTABLE"),
];

pub const COLUMN_PRIVILEGES: &[ColumnSpec] = &[
    text("TABLE_CAT"),
    text("TABLE_SCHEM"),
    text("TABLE_NAME"),
    text("COLUMN_NAME"),
    text("GRANTOR"),
    text("GRANTEE"),
    text("PRIVILEGE"),
    text("IS_GRANTABLE"),
];

pub const TYPE_INFO: &[ColumnSpec] = &[
    text("TYPE_NAME"),
    int16("DATA_TYPE"),
    int32("PRECISION"),
    text("LITERAL_PREFIX"),
    text("LITERAL_SUFFIX"),
    text("CREATE_PARAMS"),
    int16("NULLABLE"),
    boolean("CASE_SENSITIVE"),
    int16("SEARCHABLE"),
    boolean("UNSIGNED_ATTRIBUTE"),
    boolean("FIXED_PREC_SCALE"),
    boolean("AUTO_INCREMENT"),
    text("LOCAL_TYPE_NAME"),
    int16("MINIMUM_SCALE"),
    int16("MAXIMUM_SCALE"),
    int32("SQL_DATA_TYPE"),
    int32("SQL_DATETIME_SUB"),
    int32("NUM_PREC_RADIX"),
];

pub const UDTS: &[ColumnSpec] = &[
    text("TYPE_CAT"),
    text("TYPE_SCHEM"),
    text("TYPE_NAME"),
    text("CLASS_NAME"),
    int32("DATA_TYPE"),
    text("REMARKS"),
    int16("BASE_TYPE"),
];

pub const INDEX_INFO: &[ColumnSpec] = &[
    text("TABLE_CAT"),
    text("TABLE_SCHEM"),
    text("TABLE_NAME"),
    text("NON_UNIQUE"),
    text("INDEX_QUALIFIER"),
    text("INDEX_NAME"),
    text("TYPE"),
    text("ORDINAL_POSITION"),
    text("COLUMN_NAME"),
    text("ASC_OR_DESC"),
    text("CARDINALITY"),
    text("PAGES"),
    text("FILTER_CONDITION"),
];

pub const BEST_ROW_IDENTIFIER: &[ColumnSpec] = &[
    text("SCOPE"),
    text("COLUMN_NAME"),
    text("DATA_TYPE"),
    text("TYPE_NAME"),
    text("COLUMN_SIZE"),
    text("BUFFER_LENGTH"),
    text("DECIMAL_DIGITS"),
    text("PSEUDO_COLUMNS"),
];

pub const VERSION_COLUMNS: &[ColumnSpec] = &[
    int16("SCOPE"),
    text("COLUMN_NAME"),
    int32("DATA_TYPE"),
    text("TYPE_NAME"),
    int32("COLUMN_SIZE"),
    int32("BUFFER_LENGTH"),
    int16("DECIMAL_DIGITS"),
    int16("PSEUDO_COLUMN"),
];

pub const PROCEDURES: &[ColumnSpec] = &[
    text("PROCEDURE_CAT"),
    text("PROCEDURE_SCHEM"),
    text("PROCEDURE_NAME"),
    int32("NUM_INPUT_PARAMS"),
    int32("NUM_OUTPUT_PARAMS"),
    int32("NUM_RESULT_SETS"),
    text("REMARKS"),
    int16("PROCEDURE_TYPE"),
    text("SPECIFIC_NAME"),
];

pub const PROCEDURE_COLUMNS: &[ColumnSpec] = &[
    text("PROCEDURE_CAT"),
    text("PROCEDURE_SCHEM"),
    text("PROCEDURE_NAME"),
    text("COLUMN_NAME"),
    int16("COLUMN_TYPE"),
    text("DATA_TYPE"),
    text("TYPE_NAME"),
    int32("PRECISION"),
    int32("LENGTH"),
    int16("SCALE"),
    int16("RADIX"),
    int16("NULLABLE"),
    text("REMARKS"),
    text("COLUMN_DEF"),
    int32("SQL_DATA_TYPE"),
    int32("SQL_DATETIME_SUB"),
    int32("CHAR_OCTET_LENGTH"),
    int32("ORDINAL_POSITION"),
    text("IS_NULLABLE"),
    text("SPECIFIC_NAME"),
];

pub const FUNCTIONS: &[ColumnSpec] = &[
    text("FUNCTION_CAT"),
    text("FUNCTION_SCHEM"),
    text("FUNCTION_NAME"),
    text("REMARKS"),
    int16("FUNCTION_TYPE"),
    text("SPECIFIC_NAME"),
];

pub const FUNCTION_COLUMNS: &[ColumnSpec] = &[
    text("FUNCTION_CAT"),
    text("FUNCTION_SCHEM"),
    text("FUNCTION_NAME"),
    text("COLUMN_NAME"),
    int16("COLUMN_TYPE"),
    int32("DATA_TYPE"),
    text("TYPE_NAME"),
    int32("PRECISION"),
    int32("LENGTH"),
    int16("SCALE"),
    int16("RADIX"),
    int16("NULLABLE"),
    text("REMARKS"),
    int32("CHAR_OCTET_LENGTH"),
    int32("ORDINAL_POSITION"),
    text("IS_NULLABLE"),
    text("SPECIFIC_NAME"),
];

pub const PSEUDO_COLUMNS: &[ColumnSpec] = &[
    text("TABLE_CAT"),
    text("TABLE_SCHEM"),
    text("TABLE_NAME"),
    text("COLUMN_NAME"),
    int32("DATA_TYPE"),
    int32("COLUMN_SIZE"),
    int32("DECIMAL_DIGITS"),
    int32("NUM_PREC_RADIX"),
    text("COLUMN_USAGE"),
    text("REMARKS"),
    int32("CHAR_OCTET_LENGTH"),
    text("IS_NULLABLE"),
];

pub const SUPER_TYPES: &[ColumnSpec] = &[
    text("TYPE_CAT"),
    text("TYPE_SCHEM"),
    text("TYPE_NAME"),
    text("SUPERTYPE_CAT"),
    text("SUPERTYPE_SCHEM"),
    text("SUPERTYPE_NAME"),
];

pub const SUPER_TABLES: &[ColumnSpec] = &[
    text("TABLE_CAT"),
    text("TABLE_SCHEM"),
    text("TABLE_NAME"),
    text("SUPERTABLE_NAME"),
];

pub const ATTRIBUTES: &[ColumnSpec] = &[
    text("TYPE_CAT"),
    text("TYPE_SCHEM"),
    text("TYPE_NAME"),
    text("ATTR_NAME"),
    text("DATA_TYPE"),
    text("ATTR_TYPE_NAME"),
    text("ATTR_SIZE"),
    text("DECIMAL_DIGITS"),
    text("NUM_PREC_RADIX"),
    text("NULLABLE"),
    text("REMARKS"),
    text("ATTR_DEF"),
    text("SQL_DATA_TYPE"),
    text("SQL_DATETIME_SUB"),
    text("CHAR_OCTET_LENGTH"),
    text("ORDINAL_POSITION"),
    text("IS_NULLABLE"),
    text("SCOPE_CATALOG"),
    text("SCOPE_SCHEMA"),
    text("SCOPE_TABLE"),
    text("SOURCE_DATA_TYPE"),
];

pub const CLIENT_INFO_PROPERTIES: &[ColumnSpec] = &[
    text("NAME"),
    int32("MAX_LEN"),
    text("DEFAULT_VALUE"),
    text("DESCRIPTION"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_column_counts() {
        assert_eq!(TABLES.len(), 10);
        assert_eq!(COLUMNS.len(), 24);
        assert_eq!(PRIMARY_KEYS.len(), 6);
        assert_eq!(KEYS.len(), 14);
        assert_eq!(TABLE_PRIVILEGES.len(), 7);
        assert_eq!(TYPE_INFO.len(), 18);
        assert_eq!(UDTS.len(), 7);
        assert_eq!(INDEX_INFO.len(), 13);
        assert_eq!(PROCEDURE_COLUMNS.len(), 20);
        assert_eq!(FUNCTION_COLUMNS.len(), 17);
        assert_eq!(PSEUDO_COLUMNS.len(), 12);
        assert_eq!(ATTRIBUTES.len(), 21);
    }

    #[test]
    fn test_names_unique_within_each_list() {
        for columns in [
            SCHEMAS,
            TABLES,
            COLUMNS,
            PRIMARY_KEYS,
            KEYS,
            TABLE_PRIVILEGES,
            COLUMN_PRIVILEGES,
            TYPE_INFO,
            UDTS,
            INDEX_INFO,
            BEST_ROW_IDENTIFIER,
            VERSION_COLUMNS,
            PROCEDURES,
            PROCEDURE_COLUMNS,
            FUNCTIONS,
            FUNCTION_COLUMNS,
            PSEUDO_COLUMNS,
            SUPER_TYPES,
            SUPER_TABLES,
            ATTRIBUTES,
            CLIENT_INFO_PROPERTIES,
        ] {
            let names: HashSet<_> = columns.iter().map(|c| c.name).collect();
            assert_eq!(names.len(), columns.len());
        }
    }

    #[test]
    fn test_arrow_schema() {
        let schema = arrow_schema(PRIMARY_KEYS);
        assert_eq!(schema.fields().len(), 6);
        assert_eq!(schema.field(4).name(), "KEY_SEQ");
        assert_eq!(schema.field(4).data_type(), &DataType::Int16);
        assert!(schema.fields().iter().all(|f| f.is_nullable()));

        let schema = arrow_schema(TYPE_INFO);
        assert_eq!(schema.field(7).data_type(), &DataType::Boolean);
    }

    #[test]
    fn test_position() {
        assert_eq!(position(TABLES, "TABLE_TYPE"), Some(3));
        assert_eq!(position(TABLES, "table_type"), None);
    }
}
