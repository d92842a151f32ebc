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

//! Connection facts and layer policy consumed by the metadata service.
//!
//! ## Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `cratedb.strict` | false | Strict mode; gates transaction-support answers |
//! | `cratedb.standard_conforming_strings` | from client | Literal quoting mode (`E''` when off); overrides the client's report |
//! | `cratedb.protocol_version` | 14.0 | PostgreSQL server version announced by the cluster |
//! | `cratedb.user` | | User name reported by `user_name()` |
//! | `cratedb.url` | | Connection URL reported by `url()` |
//! | `cratedb.read_only` | false | Read-only connection flag |
//! | `cratedb.metadata.version_cache` | per_call | `per_call` or `per_connection` |
//! | `cratedb.log_level` | | Log level (see [`crate::logging`]) |
//! | `cratedb.log_file` | | Log file path |

use crate::error::{Error, Result};
use crate::logging::{LogConfig, LOG_LEVELS};
use crate::metadata::version::Version;

/// PostgreSQL server version announced by current clusters.
const DEFAULT_PROTOCOL_VERSION: &[u64] = &[14, 0];

/// When the server version is (re)fetched from the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionCachePolicy {
    /// One version round trip per metadata call.
    #[default]
    PerCall,
    /// Fetch once on first use and reuse for the lifetime of the service.
    PerConnection,
}

impl VersionCachePolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "per_call" | "call" => Some(Self::PerCall),
            "per_connection" | "connection" => Some(Self::PerConnection),
            _ => None,
        }
    }
}

/// Configuration for a [`MetadataService`](crate::metadata::MetadataService).
#[derive(Debug, Clone)]
pub struct MetadataConfig {
    strict: bool,
    standard_conforming_strings: Option<bool>,
    protocol_version: Version,
    user_name: Option<String>,
    url: Option<String>,
    read_only: bool,
    version_cache: VersionCachePolicy,
    log: LogConfig,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            strict: false,
            standard_conforming_strings: None,
            protocol_version: Version::from_parts(DEFAULT_PROTOCOL_VERSION),
            user_name: None,
            url: None,
            read_only: false,
            version_cache: VersionCachePolicy::default(),
            log: LogConfig::default(),
        }
    }
}

impl MetadataConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Quoting mode set on the config, if any. `None` defers to the client.
    pub fn standard_conforming_strings(&self) -> Option<bool> {
        self.standard_conforming_strings
    }

    /// PostgreSQL server version reported in the connection handshake.
    ///
    /// Distinct from the cluster's own version returned by
    /// [`MetadataService::server_version`](crate::metadata::MetadataService::server_version).
    pub fn protocol_version(&self) -> &Version {
        &self.protocol_version
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    pub fn version_cache(&self) -> VersionCachePolicy {
        self.version_cache
    }

    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_standard_conforming_strings(mut self, enabled: bool) -> Self {
        self.standard_conforming_strings = Some(enabled);
        self
    }

    pub fn with_protocol_version(mut self, version: Version) -> Self {
        self.protocol_version = version;
        self
    }

    pub fn with_version_cache(mut self, policy: VersionCachePolicy) -> Self {
        self.version_cache = policy;
        self
    }

    /// Parse a boolean option value.
    fn parse_bool_option(value: &str) -> Option<bool> {
        match value.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        }
    }

    fn invalid_option(key: &str, value: &str) -> Error {
        Error::invalid_argument(format!("invalid value '{}' for option '{}'", value, key))
    }

    /// Set a single option by key.
    ///
    /// Unknown keys and unparsable values are rejected with
    /// [`Error::InvalidArgument`].
    pub fn set_option(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "cratedb.strict" => {
                self.strict =
                    Self::parse_bool_option(value).ok_or_else(|| Self::invalid_option(key, value))?;
            }
            "cratedb.standard_conforming_strings" => {
                self.standard_conforming_strings = Some(
                    Self::parse_bool_option(value).ok_or_else(|| Self::invalid_option(key, value))?,
                );
            }
            "cratedb.read_only" => {
                self.read_only =
                    Self::parse_bool_option(value).ok_or_else(|| Self::invalid_option(key, value))?;
            }
            "cratedb.protocol_version" => {
                self.protocol_version =
                    Version::parse(value).map_err(|_| Self::invalid_option(key, value))?;
            }
            "cratedb.user" => self.user_name = Some(value.to_string()),
            "cratedb.url" => self.url = Some(value.to_string()),
            "cratedb.metadata.version_cache" => {
                self.version_cache = VersionCachePolicy::parse(value)
                    .ok_or_else(|| Self::invalid_option(key, value))?;
            }
            "cratedb.log_level" => {
                if !LOG_LEVELS.contains(&value.to_lowercase().as_str()) {
                    return Err(Self::invalid_option(key, value));
                }
                self.log.level = Some(value.to_string());
            }
            "cratedb.log_file" => self.log.file = Some(value.to_string()),
            _ => {
                return Err(Error::invalid_argument(format!("unknown option '{}'", key)));
            }
        }
        Ok(())
    }
}
