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

//! # Ingraph - Tabular-to-Graph Ingestion Compiler
//!
//! Ingraph compiles a declarative description of a tabular-to-graph mapping
//! into validated Neo4j ingestion artifacts. Describe nodes, relationships,
//! and their column bindings; validation enforces the cross-entity schema
//! invariants, and the generators emit constraint DDL, parameterized MERGE
//! Cypher, batched LOAD CSV scripts, and YAML ingestion configs.
//!
//! ## Quick Start
//!
//! ```rust
//! use ingraph::{
//!     generate_cypher, DataModel, Node, Property, PropertyType, Relationship,
//!     ValidationConfig,
//! };
//!
//! let person = Node::new(
//!     "Person",
//!     vec![
//!         Property::new("name", PropertyType::Str, "first_name", "people.csv").unique(),
//!         Property::new("age", PropertyType::Int, "age", "people.csv"),
//!     ],
//!     "people.csv",
//! );
//! let company = Node::new(
//!     "Company",
//!     vec![Property::new("name", PropertyType::Str, "company", "people.csv").unique()],
//!     "people.csv",
//! );
//! let works_at = Relationship::new("WORKS_AT", "Person", "Company", vec![], "people.csv");
//!
//! // Validation runs at construction; a DataModel always satisfies every
//! // schema invariant.
//! let model = DataModel::new(
//!     vec![person, company],
//!     vec![works_at],
//!     &ValidationConfig::default(),
//! )
//! .expect("model is valid");
//!
//! let script = generate_cypher(&model, true);
//! assert!(script.contains("MERGE (n:Person {name: row.first_name})"));
//! ```
//!
//! ## Crates
//!
//! - [`ingraph_core`]: schema entities, validation engine, naming conventions
//! - [`ingraph_cypher`]: clause generation, constraint DDL, LOAD CSV scripts
//! - [`ingraph_yaml`]: YAML ingestion config emission

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

// Re-export the data model and validation engine.
pub use ingraph_core::{
    detect_case, to_camel_case, to_pascal_case, to_screaming_snake_case, DataModel, NamingCase,
    Node, Property, PropertyType, Relationship, ValidationConfig, ValidationError,
    ValidationErrorKind, ValidationErrors,
};

// Re-export the Cypher generators and the clause-level primitives.
pub use ingraph_cypher::{
    cast_value, constraint_clause, constraint_key, generate_constraints,
    generate_constraints_cypher, generate_cypher, generate_load_csv, merge_node,
    merge_relationship, set_fragment, unique_match_fragment, ConstraintKind, LoadCsvConfig,
    LoadMethod,
};

// Re-export the YAML emitter.
pub use ingraph_yaml::{generate_ingest_yaml, FileOverrides, IngestYamlConfig, IngestYamlError};
