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

//! Naming-convention normalization.
//!
//! Labels become PascalCase, relationship types SCREAMING_SNAKE_CASE, and
//! property names camelCase. Conversion first detects the existing case style
//! and then retargets by splitting into words, so every conversion is
//! idempotent: `to_pascal_case(to_pascal_case(s)) == to_pascal_case(s)`.

/// Detected case style of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingCase {
    /// `camelCase`, including single lowercase words.
    Camel,
    /// `PascalCase`.
    Pascal,
    /// `snake_case`.
    Snake,
    /// `SCREAMING_SNAKE_CASE`, including single all-caps words.
    ScreamingSnake,
    /// Anything else (spaces, punctuation, mixed separators).
    Mixed,
}

/// Detect the case style of an identifier.
pub fn detect_case(s: &str) -> NamingCase {
    if s.is_empty() {
        return NamingCase::Mixed;
    }
    let word_chars = s.chars().all(|c| c.is_alphanumeric() || c == '_');
    if !word_chars {
        return NamingCase::Mixed;
    }
    if s.chars().any(|c| c.is_lowercase()) {
        if s.contains('_') {
            if s.chars().any(|c| c.is_uppercase()) {
                NamingCase::Mixed
            } else {
                NamingCase::Snake
            }
        } else if s.chars().next().is_some_and(|c| c.is_uppercase()) {
            NamingCase::Pascal
        } else if s.chars().next().is_some_and(|c| c.is_lowercase()) {
            NamingCase::Camel
        } else {
            NamingCase::Mixed
        }
    } else {
        // No lowercase letters at all: digits, caps, underscores.
        NamingCase::ScreamingSnake
    }
}

/// Split an identifier into lowercase words at separators and case boundaries.
///
/// Boundaries: any non-alphanumeric character, a lower-to-upper transition,
/// a digit-to-upper transition, and the last capital of an acronym run
/// followed by a lowercase letter ("HTTPServer" -> "http", "server").
fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for i in 0..chars.len() {
        let c = chars[i];
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase()
                || prev.is_numeric()
                || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert an identifier to PascalCase. Idempotent.
///
/// A string that already starts with a capital and contains no separators is
/// left alone, so acronym runs like `HTTP` or `NodeAB` survive repeated
/// normalization instead of collapsing on the second pass.
pub fn to_pascal_case(s: &str) -> String {
    let already_pascal = s.chars().next().is_some_and(|c| c.is_uppercase())
        && s.chars().all(|c| c.is_alphanumeric());
    if already_pascal {
        return s.to_string();
    }
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert an identifier to camelCase. Idempotent.
pub fn to_camel_case(s: &str) -> String {
    if detect_case(s) == NamingCase::Camel {
        return s.to_string();
    }
    let words = split_words(s);
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// Convert an identifier to SCREAMING_SNAKE_CASE. Idempotent.
pub fn to_screaming_snake_case(s: &str) -> String {
    if detect_case(s) == NamingCase::ScreamingSnake {
        return s.to_string();
    }
    split_words(s)
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_case() {
        assert_eq!(detect_case("relProp"), NamingCase::Camel);
        assert_eq!(detect_case("age"), NamingCase::Camel);
        assert_eq!(detect_case("NodeA"), NamingCase::Pascal);
        assert_eq!(detect_case("first_name"), NamingCase::Snake);
        assert_eq!(detect_case("HAS_RELATIONSHIP"), NamingCase::ScreamingSnake);
        assert_eq!(detect_case("KNOWS"), NamingCase::ScreamingSnake);
        assert_eq!(detect_case("Mixed_Case"), NamingCase::Mixed);
        assert_eq!(detect_case("with space"), NamingCase::Mixed);
        assert_eq!(detect_case(""), NamingCase::Mixed);
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("first_name"), vec!["first", "name"]);
        assert_eq!(split_words("relProp"), vec!["rel", "prop"]);
        assert_eq!(split_words("HTTPServer"), vec!["http", "server"]);
        assert_eq!(split_words("HAS_RELATIONSHIP"), vec!["has", "relationship"]);
        assert_eq!(split_words("prop1"), vec!["prop1"]);
        assert_eq!(split_words("has-posts"), vec!["has", "posts"]);
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("node_a"), "NodeA");
        assert_eq!(to_pascal_case("nodeA"), "NodeA");
        assert_eq!(to_pascal_case("NodeA"), "NodeA");
        assert_eq!(to_pascal_case("HAS_THING"), "HasThing");
        assert_eq!(to_pascal_case("person"), "Person");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("rel_prop"), "relProp");
        assert_eq!(to_camel_case("RelProp"), "relProp");
        assert_eq!(to_camel_case("relProp"), "relProp");
        assert_eq!(to_camel_case("UNIQUE_PROP"), "uniqueProp");
    }

    #[test]
    fn test_to_screaming_snake_case() {
        assert_eq!(to_screaming_snake_case("hasRelationship"), "HAS_RELATIONSHIP");
        assert_eq!(to_screaming_snake_case("HasRelationship"), "HAS_RELATIONSHIP");
        assert_eq!(to_screaming_snake_case("has_relationship"), "HAS_RELATIONSHIP");
        assert_eq!(to_screaming_snake_case("KNOWS"), "KNOWS");
        assert_eq!(
            to_screaming_snake_case("HAS_RELATIONSHIP"),
            "HAS_RELATIONSHIP"
        );
    }

    #[test]
    fn test_idempotence() {
        for input in ["first_name", "relProp", "NodeA", "HAS_THING", "HTTPServer", "prop1"] {
            let pascal = to_pascal_case(input);
            assert_eq!(to_pascal_case(&pascal), pascal, "pascal({input})");
            let camel = to_camel_case(input);
            assert_eq!(to_camel_case(&camel), camel, "camel({input})");
            let snake = to_screaming_snake_case(input);
            assert_eq!(to_screaming_snake_case(&snake), snake, "snake({input})");
        }
    }
}
