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

//! CrateDB type name → JDBC type code mapping.
//!
//! Maps the type names reported in `information_schema.columns.data_type`
//! to `java.sql.Types` codes, and holds the static type-info table.

pub const TINYINT: i32 = -6;
pub const BIGINT: i32 = -5;
pub const INTEGER: i32 = 4;
pub const SMALLINT: i32 = 5;
pub const REAL: i32 = 7;
pub const DOUBLE: i32 = 8;
pub const VARCHAR: i32 = 12;
pub const BOOLEAN: i32 = 16;
pub const TIMESTAMP: i32 = 93;
pub const OTHER: i32 = 1111;
pub const DISTINCT: i32 = 2001;
pub const STRUCT: i32 = 2002;
pub const ARRAY: i32 = 2003;

/// `columnNullable` / `typeNullable`.
pub const NULLABLE: i32 = 1;

/// Searchability codes for the type-info `SEARCHABLE` column.
pub const TYPE_PRED_NONE: i16 = 0;
pub const TYPE_PRED_BASIC: i16 = 2;
pub const TYPE_SEARCHABLE: i16 = 3;

/// Map a CrateDB type name to a JDBC type code.
///
/// Total over all input: unrecognized names map to [`OTHER`].
pub fn map_type(type_name: &str) -> i32 {
    match type_name {
        "byte" => TINYINT,
        "long" => BIGINT,
        "integer" => INTEGER,
        "short" => SMALLINT,
        "float" => REAL,
        "double" => DOUBLE,
        "string" | "ip" => VARCHAR,
        "boolean" => BOOLEAN,
        "timestamp" => TIMESTAMP,
        "object" => STRUCT,
        "string_array" | "ip_array" | "integer_array" | "long_array" | "short_array"
        | "byte_array" | "float_array" | "double_array" | "timestamp_array" | "boolean_array"
        | "object_array" => ARRAY,
        _ => OTHER,
    }
}

/// `pg_type` oids of the built-in base types a domain can be declared
/// over, with the type code reported for them. Other bases report OTHER.
pub const PG_BASE_TYPES: &[(u32, i32)] = &[
    (16, BOOLEAN),
    (18, TINYINT),
    (20, BIGINT),
    (21, SMALLINT),
    (23, INTEGER),
    (25, VARCHAR),
    (700, REAL),
    (701, DOUBLE),
    (1043, VARCHAR),
    (1114, TIMESTAMP),
    (1184, TIMESTAMP),
];

/// One row of the static type-info table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfoEntry {
    pub name: &'static str,
    pub data_type: i32,
    pub precision: Option<i32>,
    pub case_sensitive: bool,
    pub searchable: i16,
    pub maximum_scale: i16,
}

const fn scalar(
    name: &'static str,
    data_type: i32,
    precision: Option<i32>,
    case_sensitive: bool,
    searchable: i16,
    maximum_scale: i16,
) -> TypeInfoEntry {
    TypeInfoEntry {
        name,
        data_type,
        precision,
        case_sensitive,
        searchable,
        maximum_scale,
    }
}

const fn array(name: &'static str) -> TypeInfoEntry {
    scalar(name, ARRAY, None, false, TYPE_PRED_NONE, 0)
}

/// Supported types in reporting order: scalars first, then arrays.
pub const TYPE_INFO: &[TypeInfoEntry] = &[
    scalar("byte", TINYINT, Some(3), false, TYPE_PRED_BASIC, 0),
    scalar("long", BIGINT, Some(19), false, TYPE_PRED_BASIC, 0),
    scalar("integer", INTEGER, Some(10), false, TYPE_PRED_BASIC, 0),
    scalar("short", SMALLINT, Some(5), false, TYPE_PRED_BASIC, 0),
    scalar("float", REAL, Some(7), false, TYPE_PRED_BASIC, 6),
    scalar("double", DOUBLE, Some(15), false, TYPE_PRED_BASIC, 14),
    scalar("string", VARCHAR, None, true, TYPE_SEARCHABLE, 0),
    scalar("ip", VARCHAR, Some(15), false, TYPE_SEARCHABLE, 0),
    scalar("boolean", BOOLEAN, None, false, TYPE_PRED_BASIC, 0),
    scalar("timestamp", TIMESTAMP, None, true, TYPE_PRED_BASIC, 0),
    scalar("object", STRUCT, None, false, TYPE_PRED_NONE, 0),
    array("string_array"),
    array("ip_array"),
    array("long_array"),
    array("integer_array"),
    array("short_array"),
    array("boolean_array"),
    array("byte_array"),
    array("float_array"),
    array("double_array"),
    array("object_array"),
];
