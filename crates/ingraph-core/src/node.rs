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

//! Node entity: a labeled set of properties bound to one source.

use crate::property::Property;
use serde::{Deserialize, Serialize};

/// A graph node schema entry.
///
/// Properties keep declaration order; every generated fragment walks them in
/// that order, so output is stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node label.
    pub label: String,
    /// Ordered property list.
    pub properties: Vec<Property>,
    /// Logical source file or table the node is loaded from.
    pub source_name: String,
}

impl Node {
    /// Create a node schema entry.
    pub fn new(
        label: impl Into<String>,
        properties: Vec<Property>,
        source_name: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            properties,
            source_name: source_name.into(),
        }
    }

    /// Properties carrying a uniqueness constraint, in declaration order.
    pub fn unique_properties(&self) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.is_unique).collect()
    }

    /// Properties participating in the composite key, in declaration order.
    pub fn key_properties(&self) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.part_of_key).collect()
    }

    /// Properties participating in the identity mechanism (unique or key).
    pub fn identifying_properties(&self) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| p.is_identifier())
            .collect()
    }

    /// Properties outside the identity mechanism, in declaration order.
    ///
    /// These are the ones written by a generated SET clause.
    pub fn nonidentifying_properties(&self) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| !p.is_identifier())
            .collect()
    }
}
