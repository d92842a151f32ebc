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

//! SQL literal escaping.

use crate::error::{Error, Result};

/// Escape `text` for use between single quotes.
///
/// Single quotes are doubled. Backslashes are doubled as well when the
/// connection does not use standard-conforming strings. NUL characters
/// cannot be represented in a literal and are rejected.
pub fn escape_string(text: &str, standard_conforming_strings: bool) -> Result<String> {
    let mut out = String::with_capacity(text.len() + 2);
    for ch in text.chars() {
        match ch {
            '\0' => {
                return Err(Error::invalid_argument(
                    "zero bytes may not occur in string parameters",
                ))
            }
            '\'' => out.push_str("''"),
            '\\' if !standard_conforming_strings => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    Ok(out)
}

/// Wrap already-escaped text in quotes, prefixing `E` when backslashes
/// are escapes.
pub fn quote_escaped(escaped: &str, standard_conforming_strings: bool) -> String {
    if standard_conforming_strings {
        format!("'{}'", escaped)
    } else {
        format!("E'{}'", escaped)
    }
}
