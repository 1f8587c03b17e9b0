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

//! End-to-end generation scenarios over validated models.

use ingraph_core::{DataModel, Node, Property, PropertyType, Relationship, ValidationConfig};
use ingraph_cypher::{
    generate_cypher, generate_load_csv, merge_relationship, LoadCsvConfig, LoadMethod,
};

fn two_node_model() -> DataModel {
    let a = Node::new(
        "NodeA",
        vec![
            Property::new("uniqueProp1", PropertyType::Str, "unique_prop_1", "a.csv").unique(),
            Property::new("prop1", PropertyType::Str, "prop_1", "a.csv"),
        ],
        "a.csv",
    );
    let b = Node::new(
        "NodeB",
        vec![Property::new("uniqueProp2", PropertyType::Str, "unique_prop_2", "b.csv").unique()],
        "b.csv",
    );
    let rel = Relationship::new(
        "HAS_RELATIONSHIP",
        "NodeA",
        "NodeB",
        vec![Property::new("relProp", PropertyType::Int, "rel_prop", "a.csv")],
        "a.csv",
    );
    DataModel::new(vec![a, b], vec![rel], &ValidationConfig::default()).unwrap()
}

#[test]
fn end_to_end_two_nodes_and_relationship() {
    let script = generate_cypher(&two_node_model(), true);

    assert!(script.contains(
        "MERGE (n:NodeA {uniqueProp1: row.unique_prop_1})\nSET n.prop1 = row.prop_1"
    ));
    assert!(script.contains("MERGE (n:NodeB {uniqueProp2: row.unique_prop_2})"));
    assert!(script.contains("MATCH (source:NodeA {uniqueProp1: row.unique_prop_1})"));
    assert!(script.contains("MATCH (target:NodeB {uniqueProp2: row.unique_prop_2})"));
    assert!(script.contains(
        "MERGE (source)-[n:HAS_RELATIONSHIP]->(target)\nSET n.relProp = toIntegerOrNull(row.rel_prop)"
    ));
}

#[test]
fn constraints_precede_merges_and_are_named() {
    let script = generate_cypher(&two_node_model(), true);
    let c1 = script.find("CREATE CONSTRAINT nodea_uniqueprop1").unwrap();
    let c2 = script.find("CREATE CONSTRAINT nodeb_uniqueprop2").unwrap();
    let first_merge = script.find("MERGE").unwrap();
    assert!(c1 < first_merge);
    assert!(c2 < first_merge);
}

#[test]
fn self_referencing_relationship_matches_primary_and_alias() {
    let person = Node::new(
        "Person",
        vec![Property::new("name", PropertyType::Str, "first_name", "people.csv")
            .unique()
            .with_alias("knows_name")],
        "people.csv",
    );
    let knows = Relationship::new("KNOWS", "Person", "Person", vec![], "people.csv");
    let model = DataModel::new(
        vec![person],
        vec![knows],
        &ValidationConfig::default(),
    )
    .unwrap();

    let rel = model.relationship("KNOWS").unwrap();
    let node = model.node("Person").unwrap();
    let cypher = merge_relationship(rel, node, node, true);
    assert!(cypher.contains("MATCH (source:Person {name: row.first_name})"));
    assert!(cypher.contains("MATCH (target:Person {name: row.knows_name})"));
}

#[test]
fn load_csv_browser_method_prefixes_auto_and_batches() {
    let config = LoadCsvConfig::default().with_batch_size(50);
    let script = generate_load_csv(&two_node_model(), &config);

    assert!(script.contains(":auto LOAD CSV WITH HEADERS FROM 'file:///a.csv' AS row"));
    assert!(script.contains("} IN TRANSACTIONS OF 50 ROWS;"));
}

#[test]
fn load_csv_driver_method_has_no_prefix() {
    let config = LoadCsvConfig::default().with_method(LoadMethod::Driver);
    let script = generate_load_csv(&two_node_model(), &config);
    assert!(!script.contains(":auto "));
    assert!(script.contains("LOAD CSV WITH HEADERS FROM 'file:///b.csv' AS row"));
}

#[test]
fn load_csv_emits_one_block_per_entity_nodes_first() {
    let script = generate_load_csv(&two_node_model(), &LoadCsvConfig::default());
    let blocks: Vec<&str> = script.matches("LOAD CSV WITH HEADERS").collect();
    assert_eq!(blocks.len(), 3);

    let node_a = script.find("MERGE (n:NodeA").unwrap();
    let node_b = script.find("MERGE (n:NodeB").unwrap();
    let rel = script.find("MERGE (source)-[n:HAS_RELATIONSHIP]").unwrap();
    assert!(node_a < node_b);
    assert!(node_b < rel);
}

#[test]
fn strict_typing_disabled_emits_raw_columns() {
    let script = generate_cypher(&two_node_model(), false);
    assert!(script.contains("SET n.relProp = row.rel_prop"));
    assert!(!script.contains("toIntegerOrNull"));
}
