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

//! Relationship entity: a typed edge between two node labels.

use crate::property::Property;
use serde::{Deserialize, Serialize};

/// A graph relationship schema entry.
///
/// `source` and `target` name [`Node`](crate::Node) labels in the same model;
/// the validation engine rejects dangling references. A relationship may be
/// loaded from a different source file than its endpoint nodes, in which case
/// the endpoints' identifying properties must carry aliases naming the join
/// columns in the relationship's file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Relationship type.
    pub rel_type: String,
    /// Ordered property list.
    pub properties: Vec<Property>,
    /// Label of the start node.
    pub source: String,
    /// Label of the end node.
    pub target: String,
    /// Logical source file or table the relationship is loaded from.
    pub source_name: String,
}

impl Relationship {
    /// Create a relationship schema entry.
    pub fn new(
        rel_type: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        properties: Vec<Property>,
        source_name: impl Into<String>,
    ) -> Self {
        Self {
            rel_type: rel_type.into(),
            properties,
            source: source.into(),
            target: target.into(),
            source_name: source_name.into(),
        }
    }

    /// Whether source and target name the same label.
    pub fn is_self_referencing(&self) -> bool {
        self.source == self.target
    }

    /// Properties carrying a uniqueness constraint, in declaration order.
    pub fn unique_properties(&self) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.is_unique).collect()
    }

    /// Properties participating in the composite key, in declaration order.
    pub fn key_properties(&self) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.part_of_key).collect()
    }

    /// Properties outside the identity mechanism, in declaration order.
    pub fn nonidentifying_properties(&self) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| !p.is_identifier())
            .collect()
    }
}
