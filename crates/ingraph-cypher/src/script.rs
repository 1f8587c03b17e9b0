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

//! Whole-model script assembly.
//!
//! Walks a validated [`DataModel`] and concatenates clause output into
//! complete scripts: constraints first, then node MERGEs, then relationship
//! MERGEs, always in declaration order.

use crate::clause::{
    constraint_clause, constraint_key, merge_node, merge_relationship, ConstraintKind,
};
use ingraph_core::DataModel;
use std::collections::BTreeSet;

/// Collect every constraint clause for a model, deduplicated by machine key,
/// in first-encountered order walking nodes then relationships.
pub fn generate_constraints(model: &DataModel) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();

    for node in model.nodes() {
        for prop in node.unique_properties() {
            if seen.insert(constraint_key(&node.label, &[prop])) {
                out.push(constraint_clause(ConstraintKind::Unique, &node.label, &[prop]));
            }
        }
        let keys = node.key_properties();
        if !keys.is_empty() && seen.insert(constraint_key(&node.label, &keys)) {
            out.push(constraint_clause(ConstraintKind::NodeKey, &node.label, &keys));
        }
    }
    for rel in model.relationships() {
        let keys = rel.key_properties();
        if !keys.is_empty() && seen.insert(constraint_key(&rel.rel_type, &keys)) {
            out.push(constraint_clause(
                ConstraintKind::RelationshipKey,
                &rel.rel_type,
                &keys,
            ));
        }
    }
    out
}

/// The constraints file: newline-joined `CREATE CONSTRAINT` lines.
pub fn generate_constraints_cypher(model: &DataModel) -> String {
    generate_constraints(model).join("\n")
}

/// The full standard-Cypher script for a model.
///
/// Constraint clauses come first, then one parameterized MERGE statement per
/// node and per relationship, each terminated with a semicolon.
pub fn generate_cypher(model: &DataModel, strict_typing: bool) -> String {
    let mut statements = generate_constraints(model);

    for node in model.nodes() {
        statements.push(format!("{};", merge_node(node, strict_typing)));
    }
    for rel in model.relationships() {
        // Endpoints are resolved; referential validation ran at construction.
        let (Some(source), Some(target)) = (model.node(&rel.source), model.node(&rel.target))
        else {
            continue;
        };
        statements.push(format!(
            "{};",
            merge_relationship(rel, source, target, strict_typing)
        ));
    }
    statements.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ingraph_core::{Node, Property, PropertyType, Relationship, ValidationConfig};

    fn model() -> DataModel {
        let person = Node::new(
            "Person",
            vec![
                Property::new("name", PropertyType::Str, "first_name", "people.csv").unique(),
                Property::new("age", PropertyType::Int, "age", "people.csv"),
            ],
            "people.csv",
        );
        let company = Node::new(
            "Company",
            vec![Property::new("name", PropertyType::Str, "company", "people.csv").unique()],
            "people.csv",
        );
        let works_at = Relationship::new("WORKS_AT", "Person", "Company", vec![], "people.csv");
        DataModel::new(
            vec![person, company],
            vec![works_at],
            &ValidationConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_generate_constraints_order_and_names() {
        let constraints = generate_constraints(&model());
        assert_eq!(constraints.len(), 2);
        assert!(constraints[0].contains("person_name"));
        assert!(constraints[1].contains("company_name"));
    }

    #[test]
    fn test_generate_constraints_dedup() {
        let a = Node::new(
            "Person",
            vec![Property::new("name", PropertyType::Str, "name_a", "a.csv").unique()],
            "a.csv",
        );
        let b = Node::new(
            "Person",
            vec![Property::new("name", PropertyType::Str, "name_b", "b.csv").unique()],
            "b.csv",
        );
        let model = DataModel::new(vec![a, b], vec![], &ValidationConfig::default()).unwrap();
        assert_eq!(generate_constraints(&model).len(), 1);
    }

    #[test]
    fn test_generate_cypher_ordering() {
        let script = generate_cypher(&model(), true);
        let constraint_pos = script.find("CREATE CONSTRAINT person_name").unwrap();
        let person_pos = script.find("MERGE (n:Person").unwrap();
        let company_pos = script.find("MERGE (n:Company").unwrap();
        let rel_pos = script.find("MERGE (source)-[n:WORKS_AT]->(target)").unwrap();
        assert!(constraint_pos < person_pos);
        assert!(person_pos < company_pos);
        assert!(company_pos < rel_pos);
    }

    #[test]
    fn test_generate_cypher_statements_are_terminated() {
        let script = generate_cypher(&model(), true);
        for statement in script.split("\n\n") {
            assert!(statement.ends_with(';'), "unterminated: {statement}");
        }
    }
}
