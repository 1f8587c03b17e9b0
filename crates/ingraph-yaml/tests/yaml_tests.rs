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

//! Document-level emission scenarios.

use ingraph_core::{DataModel, Node, Property, PropertyType, Relationship, ValidationConfig};
use ingraph_yaml::{generate_ingest_yaml, FileOverrides, IngestYamlConfig};

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
fn document_head_carries_connection_settings_in_order() {
    let config = IngestYamlConfig::default()
        .with_server_uri("bolt://db:7687")
        .with_credentials("loader", "s3cret")
        .with_database("graph");
    let yaml = generate_ingest_yaml(&model(), &config).unwrap();

    let server = yaml.find("server_uri: bolt://db:7687").unwrap();
    let user = yaml.find("admin_user: loader").unwrap();
    let pass = yaml.find("admin_pass: s3cret").unwrap();
    let database = yaml.find("database: graph").unwrap();
    let basepath = yaml.find("basepath:").unwrap();
    let pre = yaml.find("pre_ingest:").unwrap();
    let files = yaml.find("files:").unwrap();
    assert!(server < user && user < pass && pass < database);
    assert!(database < basepath && basepath < pre && pre < files);
}

#[test]
fn pre_ingest_lists_constraints_without_terminators() {
    let yaml = generate_ingest_yaml(&model(), &IngestYamlConfig::default()).unwrap();
    assert!(yaml.contains(
        "- CREATE CONSTRAINT person_name IF NOT EXISTS FOR (n:Person) REQUIRE n.name IS UNIQUE"
    ));
    assert!(!yaml.contains("IS UNIQUE;"));
}

#[test]
fn pre_ingest_appends_caller_statements_split_on_semicolons() {
    let config = IngestYamlConfig::default()
        .with_pre_ingest("MATCH (n) DETACH DELETE n; CREATE INDEX idx FOR (n:Person) ON (n.age)");
    let yaml = generate_ingest_yaml(&model(), &config).unwrap();
    assert!(yaml.contains("- MATCH (n) DETACH DELETE n"));
    assert!(yaml.contains("- CREATE INDEX idx FOR (n:Person) ON (n.age)"));
}

#[test]
fn cql_is_a_literal_block_scalar() {
    let yaml = generate_ingest_yaml(&model(), &IngestYamlConfig::default()).unwrap();
    assert!(yaml.contains("cql: |"));
    assert!(yaml.contains("WITH $dict.rows AS rows"));
    assert!(yaml.contains("MERGE (n:Person {name: row.first_name})"));
}

#[test]
fn cql_newlines_survive_a_parse_roundtrip() {
    let yaml = generate_ingest_yaml(&model(), &IngestYamlConfig::default()).unwrap();
    let document: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

    let cql = document["files"][0]["cql"].as_str().unwrap();
    assert_eq!(
        cql,
        "WITH $dict.rows AS rows\n\
         UNWIND rows AS row\n\
         MERGE (n:Person {name: row.first_name})\n\
         SET n.age = toIntegerOrNull(row.age)"
    );
}

#[test]
fn one_file_entry_per_entity_with_base_prefixed_urls() {
    let yaml = generate_ingest_yaml(&model(), &IngestYamlConfig::default()).unwrap();
    assert_eq!(yaml.matches("url: $BASE/people.csv").count(), 3);
    assert!(yaml.contains("MERGE (source)-[n:WORKS_AT]->(target)"));
}

#[test]
fn overrides_apply_to_the_matching_url_only() {
    let config = IngestYamlConfig::default().with_chunk_size(200).with_overrides(
        "$BASE/people.csv",
        FileOverrides {
            chunk_size: Some(25),
            field_separator: Some("|".to_string()),
            skip_records: Some(1),
            skip_file: None,
        },
    );
    let yaml = generate_ingest_yaml(&model(), &config).unwrap();
    assert!(yaml.contains("chunk_size: 25"));
    assert!(yaml.contains("field_separator: '|'"));
    assert!(yaml.contains("skip_records: 1"));
    assert!(!yaml.contains("skip_file"));
}

#[test]
fn post_ingest_is_omitted_when_empty() {
    let yaml = generate_ingest_yaml(&model(), &IngestYamlConfig::default()).unwrap();
    assert!(!yaml.contains("post_ingest"));

    let config = IngestYamlConfig::default()
        .with_post_ingest(vec!["MATCH (n:Person) SET n.loaded = true".to_string()]);
    let yaml = generate_ingest_yaml(&model(), &config).unwrap();
    assert!(yaml.contains("post_ingest:"));
    assert!(yaml.contains("- MATCH (n:Person) SET n.loaded = true"));
}

#[test]
fn strict_typing_disabled_emits_raw_columns() {
    let config = IngestYamlConfig::default().with_strict_typing(false);
    let yaml = generate_ingest_yaml(&model(), &config).unwrap();
    assert!(yaml.contains("SET n.age = row.age"));
    assert!(!yaml.contains("toIntegerOrNull"));
}
