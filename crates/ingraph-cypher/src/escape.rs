// Ingraph - Tabular-to-Graph Ingestion Compiler
//
// Copyright (c) 2025 Ingraph contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Cypher identifier escaping.
//!
//! Labels, relationship types, property names, and column references all pass
//! through here before landing in generated text. Identifiers are normalized
//! to NFC and stripped of control/invisible codepoints so that visually
//! identical schema names cannot produce distinct constraints or labels.

use unicode_normalization::UnicodeNormalization;

/// Normalize a string to NFC form.
pub fn normalize_unicode(s: &str) -> String {
    s.nfc().collect()
}

/// Control characters, zero-width characters, and directional formatting are
/// filtered from identifiers before escaping.
fn is_dangerous_unicode(c: char) -> bool {
    c.is_control()
        || matches!(
            c,
            '\u{200B}'..='\u{200D}' // zero-width space / non-joiner / joiner
            | '\u{FEFF}'            // zero-width no-break space
            | '\u{202A}'..='\u{202E}' // directional embedding / override
            | '\u{2066}'..='\u{2069}' // directional isolates
            | '\u{00AD}'            // soft hyphen
        )
}

/// Check whether a string is a valid bare Cypher identifier.
///
/// Bare identifiers start with an ASCII letter or underscore and contain only
/// ASCII letters, digits, and underscores.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Escape an identifier (label, type, or property name) for Cypher.
///
/// The input is NFC-normalized and filtered; anything that is not a bare
/// identifier afterwards is wrapped in backticks, with embedded backticks
/// doubled.
///
/// # Examples
///
/// ```
/// # use ingraph_cypher::escape::escape_identifier;
/// assert_eq!(escape_identifier("Person"), "Person");
/// assert_eq!(escape_identifier("line-item"), "`line-item`");
/// ```
pub fn escape_identifier(s: &str) -> String {
    let sanitized: String = normalize_unicode(s)
        .chars()
        .filter(|c| !is_dangerous_unicode(*c))
        .collect();

    if is_valid_identifier(&sanitized) {
        sanitized
    } else {
        format!("`{}`", sanitized.replace('`', "``"))
    }
}

/// Escape a source-column reference.
///
/// Column names come straight out of CSV headers and are escaped under a
/// looser rule than identifiers: only a leading non-alphanumeric character or
/// an embedded space forces backticks, so headers like `1st_place` stay bare.
///
/// # Examples
///
/// ```
/// # use ingraph_cypher::escape::escape_column;
/// assert_eq!(escape_column("first_name"), "first_name");
/// assert_eq!(escape_column("1st_place"), "1st_place");
/// assert_eq!(escape_column("_hidden"), "`_hidden`");
/// assert_eq!(escape_column("unit price"), "`unit price`");
/// ```
pub fn escape_column(s: &str) -> String {
    let leading_invalid = s
        .chars()
        .next()
        .is_some_and(|c| !c.is_ascii_alphanumeric());
    if leading_invalid || s.contains(' ') {
        format!("`{}`", s.replace('`', "``"))
    } else {
        s.to_string()
    }
}
