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

//! The validated aggregate root.

use crate::error::ValidationErrors;
use crate::node::Node;
use crate::relationship::Relationship;
use crate::validate::{self, ValidationConfig};
use serde::Serialize;

/// A validated, immutable graph data model.
///
/// Construction runs the full validation engine; a `DataModel` value
/// therefore always satisfies every schema invariant, and the generators
/// treat it as such. Fields are private so the invariants cannot be broken
/// after the fact. There is deliberately no `Deserialize` impl: external
/// importers deserialize nodes and relationships and go through
/// [`DataModel::new`].
///
/// Nodes and relationships keep declaration order; generation output order is
/// a contract, not an iteration accident.
///
/// # Examples
///
/// ```
/// use ingraph_core::{DataModel, Node, Property, PropertyType, ValidationConfig};
///
/// let person = Node::new(
///     "Person",
///     vec![Property::new("name", PropertyType::Str, "first_name", "people.csv").unique()],
///     "people.csv",
/// );
/// let model = DataModel::new(vec![person], vec![], &ValidationConfig::default()).unwrap();
/// assert_eq!(model.nodes().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataModel {
    nodes: Vec<Node>,
    relationships: Vec<Relationship>,
}

impl DataModel {
    /// Validate parts into a model, or return every violation found.
    ///
    /// Flag exclusivity is silently corrected and, when
    /// `config.apply_naming_conventions` is set, labels/types/properties are
    /// rewritten to canonical casing before the model is frozen.
    ///
    /// # Errors
    ///
    /// Returns the aggregated [`ValidationErrors`] when any phase records a
    /// violation; the model is never partially constructed.
    pub fn new(
        nodes: Vec<Node>,
        relationships: Vec<Relationship>,
        config: &ValidationConfig,
    ) -> Result<Self, ValidationErrors> {
        let (nodes, relationships) = validate::run(nodes, relationships, config)?;
        Ok(Self {
            nodes,
            relationships,
        })
    }

    /// Nodes in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Relationships in declaration order.
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Look up a node by label.
    pub fn node(&self, label: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.label == label)
    }

    /// Look up a relationship by type.
    pub fn relationship(&self, rel_type: &str) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.rel_type == rel_type)
    }
}
