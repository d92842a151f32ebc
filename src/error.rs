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

//! Error types for the metadata layer.
//!
//! Failures from the execution channel are surfaced unchanged as
//! [`Error::Execution`]; nothing in this crate retries or recovers.
//! Unrecognized domain values (privilege letters, type names, table-type
//! categories) are not errors and never reach this module.

use thiserror::Error;

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for metadata operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required catalog lookup returned no row. Fatal, never retried.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A version string component was not numeric.
    #[error("invalid version '{version}': component '{component}' is not a number")]
    Format { version: String, component: String },

    /// The execution channel failed (network, syntax, server-side error).
    #[error("execution error: {0}")]
    Execution(String),

    /// The caller requested a capability cast that is not supported.
    #[error("cannot unwrap to {target}")]
    Unwrap { target: &'static str },

    /// A caller-supplied argument or option value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A result did not have the shape the assembler expected, or a
    /// cursor was read before `advance()`.
    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("not implemented: {0}")]
    NotImplemented(String),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow_schema::ArrowError),
}

impl Error {
    /// Builds an [`Error::Execution`] from anything displayable.
    ///
    /// Client implementations use this to wrap their transport errors.
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution(message.into())
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}
