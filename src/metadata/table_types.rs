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

//! Table-type categories and their `pg_class` filter predicates.
//!
//! Each category has two predicates over `c` (`pg_class`) and `n`
//! (`pg_namespace`): a schema-scoped form used when the query joins the
//! namespace, and an unscoped form that relies on relation names only.

/// One table-type category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableTypeRule {
    pub category: &'static str,
    pub scoped: &'static str,
    pub unscoped: &'static str,
}

const fn rule(category: &'static str, scoped: &'static str, unscoped: &'static str) -> TableTypeRule {
    TableTypeRule {
        category,
        scoped,
        unscoped,
    }
}

/// All recognized categories.
pub const TABLE_TYPE_RULES: &[TableTypeRule] = &[
    rule(
        "TABLE",
        "c.relkind = 'r' AND n.nspname !~ '^pg_' AND n.nspname <> 'information_schema'",
        "c.relkind = 'r' AND c.relname !~ '^pg_'",
    ),
    rule(
        "PARTITIONED TABLE",
        "c.relkind = 'p' AND n.nspname !~ '^pg_' AND n.nspname <> 'information_schema'",
        "c.relkind = 'p' AND c.relname !~ '^pg_'",
    ),
    rule(
        "VIEW",
        "c.relkind = 'v' AND n.nspname <> 'pg_catalog' AND n.nspname <> 'information_schema'",
        "c.relkind = 'v' AND c.relname !~ '^pg_'",
    ),
    rule(
        "INDEX",
        "c.relkind = 'i' AND n.nspname !~ '^pg_' AND n.nspname <> 'information_schema'",
        "c.relkind = 'i' AND c.relname !~ '^pg_'",
    ),
    rule(
        "PARTITIONED INDEX",
        "c.relkind = 'I' AND n.nspname !~ '^pg_' AND n.nspname <> 'information_schema'",
        "c.relkind = 'I' AND c.relname !~ '^pg_'",
    ),
    rule("SEQUENCE", "c.relkind = 'S'", "c.relkind = 'S'"),
    rule(
        "TYPE",
        "c.relkind = 'c' AND n.nspname !~ '^pg_' AND n.nspname <> 'information_schema'",
        "c.relkind = 'c' AND c.relname !~ '^pg_'",
    ),
    rule(
        "SYSTEM TABLE",
        "c.relkind = 'r' AND (n.nspname = 'pg_catalog' OR n.nspname = 'information_schema')",
        "c.relkind = 'r' AND c.relname ~ '^pg_' AND c.relname !~ '^pg_toast_' AND c.relname !~ '^pg_temp_'",
    ),
    rule(
        "SYSTEM TOAST TABLE",
        "c.relkind = 'r' AND n.nspname = 'pg_toast'",
        "c.relkind = 'r' AND c.relname ~ '^pg_toast_'",
    ),
    rule(
        "SYSTEM TOAST INDEX",
        "c.relkind = 'i' AND n.nspname = 'pg_toast'",
        "c.relkind = 'i' AND c.relname ~ '^pg_toast_'",
    ),
    rule(
        "SYSTEM VIEW",
        "c.relkind = 'v' AND (n.nspname = 'pg_catalog' OR n.nspname = 'information_schema') ",
        "c.relkind = 'v' AND c.relname ~ '^pg_'",
    ),
    rule(
        "SYSTEM INDEX",
        "c.relkind = 'i' AND (n.nspname = 'pg_catalog' OR n.nspname = 'information_schema') ",
        "c.relkind = 'v' AND c.relname ~ '^pg_' AND c.relname !~ '^pg_toast_' AND c.relname !~ '^pg_temp_'",
    ),
    rule(
        "TEMPORARY TABLE",
        "c.relkind IN ('r','p') AND n.nspname ~ '^pg_temp_' ",
        "c.relkind IN ('r','p') AND c.relname ~ '^pg_temp_' ",
    ),
    rule(
        "TEMPORARY INDEX",
        "c.relkind = 'i' AND n.nspname ~ '^pg_temp_' ",
        "c.relkind = 'i' AND c.relname ~ '^pg_temp_' ",
    ),
    rule(
        "TEMPORARY VIEW",
        "c.relkind = 'v' AND n.nspname ~ '^pg_temp_' ",
        "c.relkind = 'v' AND c.relname ~ '^pg_temp_' ",
    ),
    rule(
        "TEMPORARY SEQUENCE",
        "c.relkind = 'S' AND n.nspname ~ '^pg_temp_' ",
        "c.relkind = 'S' AND c.relname ~ '^pg_temp_' ",
    ),
    rule("FOREIGN TABLE", "c.relkind = 'f'", "c.relkind = 'f'"),
    rule("MATERIALIZED VIEW", "c.relkind = 'm'", "c.relkind = 'm'"),
];

/// Look up the rule for a category name. Matching is exact.
pub fn lookup(category: &str) -> Option<&'static TableTypeRule> {
    TABLE_TYPE_RULES.iter().find(|r| r.category == category)
}

/// OR together the predicates of the recognized categories.
///
/// Unrecognized categories are skipped. Returns `None` when no category
/// is recognized.
pub fn filter_clause<S: AsRef<str>>(categories: &[S], scoped: bool) -> Option<String> {
    let predicates: Vec<String> = categories
        .iter()
        .filter_map(|c| {
            let found = lookup(c.as_ref());
            if found.is_none() {
                tracing::debug!(category = c.as_ref(), "skipping unknown table type");
            }
            found
        })
        .map(|r| format!("({})", if scoped { r.scoped } else { r.unscoped }))
        .collect();
    if predicates.is_empty() {
        None
    } else {
        Some(predicates.join(" OR "))
    }
}
