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

//! Cypher generation for validated ingraph data models.
//!
//! Compiles a [`DataModel`](ingraph_core::DataModel) into deterministic Neo4j
//! text: constraint DDL, parameterized MERGE statements, and batched LOAD CSV
//! scripts. Every generation function is a pure mapping from (model, config)
//! to a string; output order follows declaration order by contract.
//!
//! # Examples
//!
//! ```
//! use ingraph_core::{DataModel, Node, Property, PropertyType, ValidationConfig};
//! use ingraph_cypher::generate_cypher;
//!
//! let person = Node::new(
//!     "Person",
//!     vec![
//!         Property::new("name", PropertyType::Str, "first_name", "people.csv").unique(),
//!         Property::new("age", PropertyType::Int, "age", "people.csv"),
//!     ],
//!     "people.csv",
//! );
//! let model = DataModel::new(vec![person], vec![], &ValidationConfig::default()).unwrap();
//!
//! let script = generate_cypher(&model, true);
//! assert!(script.contains("CREATE CONSTRAINT person_name"));
//! assert!(script.contains("MERGE (n:Person {name: row.first_name})"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod clause;
pub mod escape;
pub mod load_csv;
pub mod script;

pub use clause::{
    cast_value, constraint_clause, constraint_key, merge_node, merge_node_body,
    merge_relationship, merge_relationship_body, set_fragment, unique_match_fragment,
    ConstraintKind,
};
pub use escape::{escape_column, escape_identifier, is_valid_identifier};
pub use load_csv::{
    csv_file_name, generate_load_csv, load_csv_block, LoadCsvConfig, LoadCsvConfigBuilder,
    LoadMethod,
};
pub use script::{generate_constraints, generate_constraints_cypher, generate_cypher};
