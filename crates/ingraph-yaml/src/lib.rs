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

//! YAML ingestion config emission for validated ingraph data models.
//!
//! Turns a [`DataModel`](ingraph_core::DataModel) into the YAML document an
//! ingestion runner consumes: connection settings, constraint `pre_ingest`
//! statements, and one `files` entry per entity carrying its parameterized
//! MERGE Cypher.
//!
//! # Examples
//!
//! ```
//! use ingraph_core::{DataModel, Node, Property, PropertyType, ValidationConfig};
//! use ingraph_yaml::{generate_ingest_yaml, IngestYamlConfig};
//!
//! let person = Node::new(
//!     "Person",
//!     vec![Property::new("name", PropertyType::Str, "first_name", "people.csv").unique()],
//!     "people.csv",
//! );
//! let model = DataModel::new(vec![person], vec![], &ValidationConfig::default()).unwrap();
//!
//! let yaml = generate_ingest_yaml(&model, &IngestYamlConfig::default()).unwrap();
//! assert!(yaml.contains("url: $BASE/people.csv"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod to_yaml;

pub use config::{FileOverrides, IngestYamlConfig};
pub use to_yaml::{generate_ingest_yaml, split_statements, IngestYamlError};
