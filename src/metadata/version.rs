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

//! Server version comparison and named version gates.
//!
//! Versions compare by the numeric value of each component in turn; when
//! one side runs out of components the shorter version sorts first.
//! `"2.0"` is therefore before `"2.0.0"`, and `"2.01"` equals `"2.1"`.

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;

/// A dotted numeric server version such as `4.2.1`.
#[derive(Debug, Clone)]
pub struct Version {
    text: String,
    components: Vec<u64>,
}

impl Version {
    /// Parse a dotted version string.
    ///
    /// Every component must be a non-negative integer; anything else fails
    /// with [`Error::Format`].
    pub fn parse(text: &str) -> Result<Self> {
        let components = text
            .split('.')
            .map(|part| {
                part.parse::<u64>().map_err(|_| Error::Format {
                    version: text.to_string(),
                    component: part.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            text: text.to_string(),
            components,
        })
    }

    /// Build a version from numeric components.
    pub fn from_parts(parts: &[u64]) -> Self {
        let text = parts
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(".");
        Self {
            text,
            components: parts.to_vec(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Numeric value of the component at `index`, or 0 when absent.
    pub fn component(&self, index: usize) -> u64 {
        self.components.get(index).copied().unwrap_or(0)
    }

    /// `true` if this version sorts strictly before `other`.
    pub fn before(&self, other: &str) -> Result<bool> {
        Ok(self.cmp(&Version::parse(other)?) == Ordering::Less)
    }

    /// `true` if this version sorts strictly after `other`.
    pub fn after(&self, other: &str) -> Result<bool> {
        Ok(self.cmp(&Version::parse(other)?) == Ordering::Greater)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components.cmp(&other.components)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

/// Compare two version strings, returning -1, 0 or 1.
pub fn compare(a: &str, b: &str) -> Result<i32> {
    let ordering = Version::parse(a)?.cmp(&Version::parse(b)?);
    Ok(match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    })
}

/// How a gate's threshold is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateBound {
    /// Open at the threshold and above.
    AtLeast,
    /// Open strictly above the threshold.
    After,
}

/// A named server-version threshold.
#[derive(Debug, Clone, Copy)]
pub struct VersionGate {
    pub name: &'static str,
    pub since: &'static [u64],
    pub bound: GateBound,
}

impl VersionGate {
    const fn at_least(name: &'static str, since: &'static [u64]) -> Self {
        Self {
            name,
            since,
            bound: GateBound::AtLeast,
        }
    }

    const fn after(name: &'static str, since: &'static [u64]) -> Self {
        Self {
            name,
            since,
            bound: GateBound::After,
        }
    }

    pub fn threshold(&self) -> Version {
        Version::from_parts(self.since)
    }

    /// Whether the gated behavior applies to `version`.
    pub fn is_open(&self, version: &Version) -> bool {
        let ordering = version.cmp(&self.threshold());
        let open = match self.bound {
            GateBound::AtLeast => ordering != Ordering::Less,
            GateBound::After => ordering == Ordering::Greater,
        };
        tracing::trace!(gate = self.name, version = %version, open, "version gate");
        open
    }
}

/// Schema identifier column renamed from `schema_name` to `table_schema`.
pub const SCHEMA_COLUMN_RENAMED: VersionGate =
    VersionGate::at_least("SCHEMA_COLUMN_RENAMED", &[2, 0, 0]);

/// Extended `information_schema` column lists and the base-table filter.
pub const EXTENDED_INFORMATION_SCHEMA: VersionGate =
    VersionGate::at_least("EXTENDED_INFORMATION_SCHEMA", &[2, 0, 0]);

/// Primary keys come from `key_column_usage` instead of constraint arrays.
pub const KEY_COLUMN_USAGE: VersionGate = VersionGate::at_least("KEY_COLUMN_USAGE", &[2, 3, 0]);

/// `kcu.table_schema` carries the schema name.
pub const KCU_TABLE_SCHEMA: VersionGate = VersionGate::after("KCU_TABLE_SCHEMA", &[3, 0, 0]);

/// `is_generated` is reported as text rather than a boolean.
pub const GENERATED_AS_TEXT: VersionGate = VersionGate::at_least("GENERATED_AS_TEXT", &[4, 0, 0]);

/// `kcu.table_catalog` carries the catalog name.
pub const KCU_TABLE_CATALOG: VersionGate = VersionGate::at_least("KCU_TABLE_CATALOG", &[5, 1, 0]);

/// The owner's default privileges include TRUNCATE. Checked against the
/// PostgreSQL protocol version rather than the CrateDB release.
pub const TRUNCATE_PRIVILEGE: VersionGate =
    VersionGate::at_least("TRUNCATE_PRIVILEGE", &[8, 4, 0]);
