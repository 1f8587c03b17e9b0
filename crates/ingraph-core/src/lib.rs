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

//! Core data model and validation engine for tabular-to-graph mappings.
//!
//! A mapping describes how rows of flat source files become a property graph:
//! [`Property`] binds one column to one attribute, [`Node`] and
//! [`Relationship`] compose properties with identity semantics, and
//! [`DataModel`] is the aggregate root that validates the whole schema at
//! construction and is immutable afterwards.
//!
//! The validation engine checks structural, identity, referential,
//! cross-file-alias, duplicate-mapping, and parallel-relationship invariants
//! in ordered phases, reporting every violation of a model in one aggregated
//! [`ValidationErrors`] value.
//!
//! # Example
//!
//! ```
//! use ingraph_core::{DataModel, Node, Property, PropertyType, Relationship, ValidationConfig};
//!
//! let person = Node::new(
//!     "Person",
//!     vec![
//!         Property::new("name", PropertyType::Str, "first_name", "people.csv").unique(),
//!         Property::new("age", PropertyType::Int, "age", "people.csv"),
//!     ],
//!     "people.csv",
//! );
//! let pet = Node::new(
//!     "Pet",
//!     vec![Property::new("name", PropertyType::Str, "pet_name", "people.csv").unique()],
//!     "people.csv",
//! );
//! let owns = Relationship::new("OWNS", "Person", "Pet", vec![], "people.csv");
//!
//! let model = DataModel::new(vec![person, pet], vec![owns], &ValidationConfig::default())
//!     .expect("schema is consistent");
//! assert_eq!(model.relationships()[0].rel_type, "OWNS");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod model;
pub mod naming;
pub mod node;
pub mod property;
pub mod relationship;
pub mod validate;

pub use error::{ValidationError, ValidationErrorKind, ValidationErrors};
pub use model::DataModel;
pub use naming::{
    detect_case, to_camel_case, to_pascal_case, to_screaming_snake_case, NamingCase,
};
pub use node::Node;
pub use property::{Property, PropertyType};
pub use relationship::Relationship;
pub use validate::ValidationConfig;
