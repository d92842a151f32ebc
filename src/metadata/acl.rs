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

//! ACL array decoding.
//!
//! The catalog reports relation ACLs as array literals such as
//! `{alice=arwdDxt/bob,"=r/bob"}`. Each entry is `grantee=privileges/grantor`,
//! where the grantee may be empty (meaning PUBLIC) and a `*` after a
//! privilege letter marks that privilege as grantable.

use crate::metadata::version::{Version, TRUNCATE_PRIVILEGE};
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// Privilege decoded from one ACL letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Privilege {
    Insert,
    Select,
    Update,
    Delete,
    Truncate,
    Rule,
    References,
    Trigger,
    Execute,
    Usage,
    Create,
    CreateTemp,
    Unknown,
}

impl Privilege {
    pub fn from_letter(letter: char) -> Self {
        match letter {
            'a' => Privilege::Insert,
            'r' | 'p' => Privilege::Select,
            'w' => Privilege::Update,
            'd' => Privilege::Delete,
            'D' => Privilege::Truncate,
            'R' => Privilege::Rule,
            'x' => Privilege::References,
            't' => Privilege::Trigger,
            'X' => Privilege::Execute,
            'U' => Privilege::Usage,
            'C' => Privilege::Create,
            'T' => Privilege::CreateTemp,
            _ => Privilege::Unknown,
        }
    }

    /// SQL name of the privilege.
    pub fn as_str(&self) -> &'static str {
        match self {
            Privilege::Insert => "INSERT",
            Privilege::Select => "SELECT",
            Privilege::Update => "UPDATE",
            Privilege::Delete => "DELETE",
            Privilege::Truncate => "TRUNCATE",
            Privilege::Rule => "RULE",
            Privilege::References => "REFERENCES",
            Privilege::Trigger => "TRIGGER",
            Privilege::Execute => "EXECUTE",
            Privilege::Usage => "USAGE",
            Privilege::Create => "CREATE",
            Privilege::CreateTemp => "CREATE TEMP",
            Privilege::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One decoded ACL entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclEntry {
    pub grantee: String,
    pub grantor: Option<String>,
    /// Privileges in letter order, each with its grantable flag.
    pub privileges: Vec<(Privilege, bool)>,
}

/// A single grant of one privilege to one grantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    pub grantor: Option<String>,
    pub grantable: bool,
}

/// privilege name -> grantee -> grants, in sorted key order.
pub type PrivilegeMap = BTreeMap<String, BTreeMap<String, Vec<Grant>>>;

/// Split an ACL array literal into its entry tokens.
///
/// Scanning starts after the opening brace; commas inside double quotes do
/// not split, and a backslash escapes the character after it. The last
/// token ends before the closing brace. Quoted tokens lose their enclosing
/// quotes and backslash escapes.
pub fn split_acl_array(text: Option<&str>) -> Vec<String> {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return Vec::new();
    };

    // Byte offsets of every char; the delimiters scanned for are ASCII.
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();
    let mut in_quotes = false;
    let mut escaped = false;
    let mut begin = chars.get(1).map_or(text.len(), |(i, _)| *i);
    for &(i, c) in chars.iter().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                tokens.push(text[begin..i].to_string());
                begin = i + 1;
            }
            _ => {}
        }
    }
    let end = chars.last().map_or(0, |(i, _)| *i);
    tokens.push(text.get(begin..end).unwrap_or_default().to_string());

    tokens
        .into_iter()
        .map(|token| {
            if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
                unescape(&token[1..token.len() - 1])
            } else {
                token
            }
        })
        .collect()
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.extend(chars.next());
        } else {
            out.push(c);
        }
    }
    out
}

/// Quote one ACL item for an array literal when it holds a delimiter,
/// escaping backslashes and double quotes.
pub fn quote_acl_item(item: &str) -> String {
    if item.contains([',', '"', '\\', '{', '}']) {
        format!("\"{}\"", item.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        item.to_string()
    }
}

/// Decode one ACL token. Tokens without `=` yield `None`.
pub fn decode_acl_entry(token: &str) -> Option<AclEntry> {
    let eq = token.rfind('=')?;
    let grantee = match &token[..eq] {
        "" => "PUBLIC".to_string(),
        user => user.to_string(),
    };
    let rest = &token[eq + 1..];
    let (letters, grantor) = match rest.rfind('/') {
        Some(slash) => (&rest[..slash], Some(rest[slash + 1..].to_string())),
        None => (rest, None),
    };

    let letters: Vec<char> = letters.chars().collect();
    let mut privileges = Vec::with_capacity(letters.len());
    for (i, &c) in letters.iter().enumerate() {
        if c == '*' {
            continue;
        }
        let grantable = i < letters.len() - 1 && letters[i + 1] == '*';
        let privilege = Privilege::from_letter(c);
        if privilege == Privilege::Unknown {
            warn!(letter = %c, grantee = %grantee, "unknown ACL privilege letter");
        }
        privileges.push((privilege, grantable));
    }

    Some(AclEntry {
        grantee,
        grantor,
        privileges,
    })
}

/// Decode an ACL array literal. Null and empty input yield no entries.
pub fn decode_acl_array(text: Option<&str>) -> Vec<AclEntry> {
    split_acl_array(text)
        .iter()
        .filter_map(|token| decode_acl_entry(token))
        .collect()
}

/// Owner privileges assumed when a relation has no explicit ACL.
///
/// `protocol_version` is the PostgreSQL protocol version the server
/// speaks, not the CrateDB release.
pub fn default_owner_privileges(protocol_version: &Version) -> &'static str {
    if TRUNCATE_PRIVILEGE.is_open(protocol_version) {
        "arwdDxt"
    } else {
        "arwdxt"
    }
}

/// ACL literal granting `owner` the default privileges on its own relation.
pub fn default_acl(owner: &str, protocol_version: &Version) -> String {
    format!(
        "{{{}={}/{}}}",
        owner,
        default_owner_privileges(protocol_version),
        owner
    )
}

/// Decode an ACL and group the grants by privilege name and grantee.
///
/// An absent ACL is replaced by [`default_acl`] for `owner`.
pub fn parse_acl(acl: Option<&str>, owner: &str, protocol_version: &Version) -> PrivilegeMap {
    let synthesized;
    let acl = match acl {
        Some(text) => text,
        None => {
            synthesized = default_acl(owner, protocol_version);
            synthesized.as_str()
        }
    };

    let mut privileges = PrivilegeMap::new();
    for entry in decode_acl_array(Some(acl)) {
        for (privilege, grantable) in &entry.privileges {
            privileges
                .entry(privilege.as_str().to_string())
                .or_default()
                .entry(entry.grantee.clone())
                .or_default()
                .push(Grant {
                    grantor: entry.grantor.clone(),
                    grantable: *grantable,
                });
        }
    }
    privileges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entry: &AclEntry) -> Vec<&'static str> {
        entry.privileges.iter().map(|(p, _)| p.as_str()).collect()
    }

    #[test]
    fn test_decode_full_owner_entry() {
        let entries = decode_acl_array(Some("{alice=arwdDxt/bob}"));
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.grantee, "alice");
        assert_eq!(entry.grantor.as_deref(), Some("bob"));
        assert_eq!(
            names(entry),
            vec![
                "INSERT",
                "SELECT",
                "UPDATE",
                "DELETE",
                "TRUNCATE",
                "REFERENCES",
                "TRIGGER"
            ]
        );
        assert!(entry.privileges.iter().all(|(_, grantable)| !grantable));
    }

    #[test]
    fn test_rule_letter() {
        let entries = decode_acl_array(Some("{alice=R/bob}"));
        assert_eq!(names(&entries[0]), vec!["RULE"]);
    }

    #[test]
    fn test_empty_grantee_is_public() {
        let entries = decode_acl_array(Some("{=r/bob}"));
        assert_eq!(entries[0].grantee, "PUBLIC");
        assert_eq!(names(&entries[0]), vec!["SELECT"]);
    }

    #[test]
    fn test_grantable_marker() {
        let entry = decode_acl_entry("carol=ar*/bob").unwrap();
        assert_eq!(
            entry.privileges,
            vec![(Privilege::Insert, false), (Privilege::Select, true)]
        );

        let entry = decode_acl_entry("carol=a*r/bob").unwrap();
        assert_eq!(
            entry.privileges,
            vec![(Privilege::Insert, true), (Privilege::Select, false)]
        );

        // A letter in last position has no following marker to look at.
        let entry = decode_acl_entry("carol=r").unwrap();
        assert_eq!(entry.privileges, vec![(Privilege::Select, false)]);
        assert!(entry.grantor.is_none());
    }

    #[test]
    fn test_null_and_empty_input() {
        assert!(decode_acl_array(None).is_empty());
        assert!(decode_acl_array(Some("")).is_empty());
        assert!(decode_acl_array(Some("{}")).is_empty());
    }

    #[test]
    fn test_unknown_letter_degrades() {
        let entry = decode_acl_entry("dave=rZ/bob").unwrap();
        assert_eq!(
            entry.privileges,
            vec![(Privilege::Select, false), (Privilege::Unknown, false)]
        );
    }

    #[test]
    fn test_entries_without_equals_are_skipped() {
        let entries = decode_acl_array(Some("{garbage,alice=r/bob}"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].grantee, "alice");
    }

    #[test]
    fn test_split_respects_quotes() {
        let tokens = split_acl_array(Some(r#"{"a,b=r/c",d=w/e}"#));
        assert_eq!(tokens, vec!["a,b=r/c".to_string(), "d=w/e".to_string()]);

        let tokens = split_acl_array(Some(r#"{"x\",y=r/z"}"#));
        assert_eq!(tokens, vec![r#"x",y=r/z"#.to_string()]);

        let tokens = split_acl_array(Some(r#"{"a\\=r/b",c=w/d}"#));
        assert_eq!(tokens, vec![r#"a\=r/b"#.to_string(), "c=w/d".to_string()]);
    }

    #[test]
    fn test_quoted_items_split_back() {
        let items = [r#"x",y=r/z"#, r#"a\b=w/c"#, "plain=r/o"];
        let literal = format!(
            "{{{}}}",
            items.iter().map(|i| quote_acl_item(i)).collect::<Vec<_>>().join(",")
        );
        assert_eq!(literal, r#"{"x\",y=r/z","a\\b=w/c",plain=r/o}"#);
        assert_eq!(split_acl_array(Some(&literal)), items);
    }

    #[test]
    fn test_every_letter_decodes_once() {
        let letters = "arwdDRxtXUCTp";
        let entry = decode_acl_entry(&format!("u={}/o", letters)).unwrap();
        assert_eq!(entry.privileges.len(), letters.len());
        assert!(entry
            .privileges
            .iter()
            .all(|(p, _)| *p != Privilege::Unknown));
    }

    #[test]
    fn test_default_acl_by_protocol_version() {
        let old = Version::parse("8.3").unwrap();
        let new = Version::parse("8.4").unwrap();
        let current = Version::parse("14.0").unwrap();
        assert_eq!(default_acl("crate", &old), "{crate=arwdxt/crate}");
        assert_eq!(default_acl("crate", &new), "{crate=arwdDxt/crate}");
        assert_eq!(default_acl("crate", &current), "{crate=arwdDxt/crate}");
    }

    #[test]
    fn test_parse_acl_groups_by_privilege() {
        let version = Version::parse("14.0").unwrap();
        let map = parse_acl(Some("{alice=r*w/bob,=r/bob}"), "owner", &version);
        let select = &map["SELECT"];
        assert_eq!(select.len(), 2);
        assert_eq!(
            select["alice"],
            vec![Grant {
                grantor: Some("bob".to_string()),
                grantable: true
            }]
        );
        assert!(!select["PUBLIC"][0].grantable);
        assert_eq!(map["UPDATE"]["alice"].len(), 1);
        assert_eq!(
            map.keys().collect::<Vec<_>>(),
            vec!["SELECT", "UPDATE"]
        );
    }

    #[test]
    fn test_parse_acl_default_for_owner() {
        let version = Version::parse("14.0").unwrap();
        let map = parse_acl(None, "crate", &version);
        assert!(map.contains_key("TRUNCATE"));

        let map = parse_acl(None, "crate", &Version::parse("8.3").unwrap());
        assert!(!map.contains_key("TRUNCATE"));
        assert_eq!(
            map["INSERT"]["crate"][0].grantor.as_deref(),
            Some("crate")
        );
    }
}
