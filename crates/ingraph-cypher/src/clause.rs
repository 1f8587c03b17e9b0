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

//! Clause-level Cypher generation.
//!
//! Every function here is a pure mapping from schema entities to text.
//! Property order follows declaration order throughout, so generated output
//! is byte-stable across runs.

use crate::escape::{escape_column, escape_identifier};
use ingraph_core::{Node, Property, Relationship};

/// Parameterized row-binding preamble shared by all MERGE statements.
const ROWS_PREAMBLE: &str = "WITH $dict.rows AS rows\nUNWIND rows AS row";

/// Render a value expression for a property's primary column.
///
/// With `strict_typing` the column reference is wrapped in the Neo4j
/// conversion function for the property's type; strings and lists pass
/// through uncast. Aliases are never cast, only the primary mapping is.
pub fn cast_value(property: &Property, strict_typing: bool) -> String {
    let column = format!("row.{}", escape_column(&property.column_mapping));
    if !strict_typing {
        return column;
    }
    match property.dtype.cast_function() {
        Some(func) => format!("{}({})", func, column),
        None => column,
    }
}

/// The column a property's second endpoint is matched on.
///
/// Falls back to the primary mapping when no alias is set.
fn alias_column(property: &Property) -> &str {
    property.alias.as_deref().unwrap_or(&property.column_mapping)
}

/// Pick the identity properties used as MERGE/MATCH keys.
///
/// Composite key members win over unique properties when both exist.
fn identity_keys<'a>(keys: Vec<&'a Property>, uniques: Vec<&'a Property>) -> Vec<&'a Property> {
    if keys.is_empty() {
        uniques
    } else {
        keys
    }
}

/// Render the `{prop: cast(row.col), ...}` match fragment for a set of
/// identity properties, in declaration order.
pub fn unique_match_fragment(properties: &[&Property], strict_typing: bool) -> String {
    let parts: Vec<String> = properties
        .iter()
        .map(|p| format!("{}: {}", escape_identifier(&p.name), cast_value(p, strict_typing)))
        .collect();
    format!("{{{}}}", parts.join(", "))
}

/// Render a `SET var.p = cast(row.col), ...` clause for non-identifying
/// properties.
///
/// Returns the empty string when there is nothing to set; callers omit the
/// line entirely rather than emit a bare `SET`.
pub fn set_fragment(var: &str, properties: &[&Property], strict_typing: bool) -> String {
    if properties.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = properties
        .iter()
        .map(|p| {
            format!(
                "{}.{} = {}",
                var,
                escape_identifier(&p.name),
                cast_value(p, strict_typing)
            )
        })
        .collect();
    format!("SET {}", parts.join(", "))
}

/// The MERGE body for a node, without the row-binding preamble.
///
/// This is the part that gets wrapped by the LOAD CSV and YAML emitters.
pub fn merge_node_body(node: &Node, strict_typing: bool) -> String {
    let keys = identity_keys(node.key_properties(), node.unique_properties());
    let fragment = unique_match_fragment(&keys, strict_typing);
    let mut out = format!("MERGE (n:{} {})", escape_identifier(&node.label), fragment);
    let set = set_fragment("n", &node.nonidentifying_properties(), strict_typing);
    if !set.is_empty() {
        out.push('\n');
        out.push_str(&set);
    }
    out
}

/// The full parameterized MERGE statement for a node.
///
/// # Examples
///
/// ```
/// use ingraph_core::{Node, Property, PropertyType};
/// use ingraph_cypher::merge_node;
///
/// let person = Node::new(
///     "Person",
///     vec![Property::new("name", PropertyType::Str, "first_name", "people.csv").unique()],
///     "people.csv",
/// );
/// let cypher = merge_node(&person, true);
/// assert!(cypher.starts_with("WITH $dict.rows AS rows"));
/// assert!(cypher.contains("MERGE (n:Person {name: row.first_name})"));
/// ```
pub fn merge_node(node: &Node, strict_typing: bool) -> String {
    format!("{}\n{}", ROWS_PREAMBLE, merge_node_body(node, strict_typing))
}

/// The MERGE body for a relationship, without the row-binding preamble.
///
/// Same-label relationships match the source endpoint on the primary column
/// mapping and the target endpoint on the alias column; validation guarantees
/// an alias exists on at least one identity property. Distinct-label
/// relationships match each endpoint on its own identity fragment.
pub fn merge_relationship_body(
    rel: &Relationship,
    source_node: &Node,
    target_node: &Node,
    strict_typing: bool,
) -> String {
    let mut lines = Vec::new();

    if source_node.label == target_node.label {
        let keys = identity_keys(
            source_node.key_properties(),
            source_node.unique_properties(),
        );
        let source_fragment = unique_match_fragment(&keys, strict_typing);
        let target_parts: Vec<String> = keys
            .iter()
            .map(|p| {
                format!(
                    "{}: row.{}",
                    escape_identifier(&p.name),
                    escape_column(alias_column(p))
                )
            })
            .collect();
        lines.push(format!(
            "MATCH (source:{} {})",
            escape_identifier(&source_node.label),
            source_fragment
        ));
        lines.push(format!(
            "MATCH (target:{} {{{}}})",
            escape_identifier(&target_node.label),
            target_parts.join(", ")
        ));
    } else {
        for (var, node) in [("source", source_node), ("target", target_node)] {
            let keys = identity_keys(node.key_properties(), node.unique_properties());
            lines.push(format!(
                "MATCH ({}:{} {})",
                var,
                escape_identifier(&node.label),
                unique_match_fragment(&keys, strict_typing)
            ));
        }
    }

    let rel_keys = identity_keys(rel.key_properties(), rel.unique_properties());
    if rel_keys.is_empty() {
        lines.push(format!(
            "MERGE (source)-[n:{}]->(target)",
            escape_identifier(&rel.rel_type)
        ));
    } else {
        lines.push(format!(
            "MERGE (source)-[n:{} {}]->(target)",
            escape_identifier(&rel.rel_type),
            unique_match_fragment(&rel_keys, strict_typing)
        ));
    }

    let set = set_fragment("n", &rel.nonidentifying_properties(), strict_typing);
    if !set.is_empty() {
        lines.push(set);
    }
    lines.join("\n")
}

/// The full parameterized MERGE statement for a relationship.
pub fn merge_relationship(
    rel: &Relationship,
    source_node: &Node,
    target_node: &Node,
    strict_typing: bool,
) -> String {
    format!(
        "{}\n{}",
        ROWS_PREAMBLE,
        merge_relationship_body(rel, source_node, target_node, strict_typing)
    )
}

/// Which shape of uniqueness constraint a clause declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Single-property uniqueness on a node label.
    Unique,
    /// Composite node key.
    NodeKey,
    /// Composite relationship key.
    RelationshipKey,
}

/// Machine name for a constraint, also used as the dedup key across a model.
///
/// `lower(label_or_type)` joined with the lowered property names by
/// underscores, e.g. `person_name` or `address_street_zip`.
pub fn constraint_key(label_or_type: &str, properties: &[&Property]) -> String {
    let mut key = label_or_type.to_lowercase();
    for prop in properties {
        key.push('_');
        key.push_str(&prop.name.to_lowercase());
    }
    key
}

/// Render one `CREATE CONSTRAINT ... IF NOT EXISTS ...;` clause.
pub fn constraint_clause(
    kind: ConstraintKind,
    label_or_type: &str,
    properties: &[&Property],
) -> String {
    let name = escape_identifier(&constraint_key(label_or_type, properties));
    let refs: Vec<String> = properties
        .iter()
        .map(|p| format!("{}.{}", constraint_var(kind), escape_identifier(&p.name)))
        .collect();
    let require = if refs.len() == 1 {
        refs[0].clone()
    } else {
        format!("({})", refs.join(", "))
    };
    match kind {
        ConstraintKind::Unique => format!(
            "CREATE CONSTRAINT {} IF NOT EXISTS FOR (n:{}) REQUIRE {} IS UNIQUE;",
            name,
            escape_identifier(label_or_type),
            require
        ),
        ConstraintKind::NodeKey => format!(
            "CREATE CONSTRAINT {} IF NOT EXISTS FOR (n:{}) REQUIRE {} IS NODE KEY;",
            name,
            escape_identifier(label_or_type),
            require
        ),
        ConstraintKind::RelationshipKey => format!(
            "CREATE CONSTRAINT {} IF NOT EXISTS FOR ()-[r:{}]-() REQUIRE {} IS RELATIONSHIP KEY;",
            name,
            escape_identifier(label_or_type),
            require
        ),
    }
}

fn constraint_var(kind: ConstraintKind) -> &'static str {
    match kind {
        ConstraintKind::Unique | ConstraintKind::NodeKey => "n",
        ConstraintKind::RelationshipKey => "r",
    }
}
