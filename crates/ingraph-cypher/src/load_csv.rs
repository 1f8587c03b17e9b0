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

//! Batched LOAD CSV script emission.
//!
//! Wraps each entity's MERGE body in a `LOAD CSV ... CALL { ... } IN
//! TRANSACTIONS` block so large files ingest in batches instead of one
//! giant transaction.

use crate::clause::{merge_node_body, merge_relationship_body};
use crate::script::generate_constraints_cypher;
use ingraph_core::DataModel;
use serde::{Deserialize, Serialize};

/// Where the generated script will be pasted or executed.
///
/// Neo4j Browser needs an explicit `:auto ` prefix before `CALL { ... } IN
/// TRANSACTIONS`; drivers manage the transaction themselves and reject the
/// prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadMethod {
    /// Interactive Neo4j Browser session.
    #[default]
    Browser,
    /// Driver-managed session.
    Driver,
}

/// Options for LOAD CSV script generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadCsvConfig {
    /// Rows per transaction batch.
    pub batch_size: usize,
    /// Execution surface the script targets.
    pub method: LoadMethod,
    /// Whether typed columns are wrapped in conversion functions.
    pub strict_typing: bool,
}

impl Default for LoadCsvConfig {
    fn default() -> Self {
        Self {
            batch_size: 10_000,
            method: LoadMethod::Browser,
            strict_typing: true,
        }
    }
}

/// Builder for [`LoadCsvConfig`].
///
/// # Examples
///
/// ```
/// # use ingraph_cypher::load_csv::{LoadCsvConfig, LoadMethod};
/// let config = LoadCsvConfig::builder()
///     .batch_size(500)
///     .method(LoadMethod::Driver)
///     .build();
/// assert_eq!(config.batch_size, 500);
/// ```
#[derive(Debug, Default)]
pub struct LoadCsvConfigBuilder {
    batch_size: Option<usize>,
    method: Option<LoadMethod>,
    strict_typing: Option<bool>,
}

impl LoadCsvConfigBuilder {
    /// Create a new builder with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transaction batch size.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Set the execution surface.
    pub fn method(mut self, method: LoadMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Enable or disable strict typing casts.
    pub fn strict_typing(mut self, strict_typing: bool) -> Self {
        self.strict_typing = Some(strict_typing);
        self
    }

    /// Build the configuration, filling unset fields from the defaults.
    pub fn build(self) -> LoadCsvConfig {
        let defaults = LoadCsvConfig::default();
        LoadCsvConfig {
            batch_size: self.batch_size.unwrap_or(defaults.batch_size),
            method: self.method.unwrap_or(defaults.method),
            strict_typing: self.strict_typing.unwrap_or(defaults.strict_typing),
        }
    }
}

impl LoadCsvConfig {
    /// Create a builder for custom configurations.
    pub fn builder() -> LoadCsvConfigBuilder {
        LoadCsvConfigBuilder::default()
    }

    /// Set the transaction batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the execution surface.
    pub fn with_method(mut self, method: LoadMethod) -> Self {
        self.method = method;
        self
    }

    /// Enable or disable strict typing casts.
    pub fn with_strict_typing(mut self, strict_typing: bool) -> Self {
        self.strict_typing = strict_typing;
        self
    }
}

/// Resolve a logical source name to a CSV file name.
///
/// Source names without an extension gain `.csv`; names already carrying it
/// pass through unchanged.
pub fn csv_file_name(source_name: &str) -> String {
    if source_name.ends_with(".csv") {
        source_name.to_string()
    } else {
        format!("{}.csv", source_name)
    }
}

/// Wrap one MERGE body in a batched LOAD CSV block.
pub fn load_csv_block(body: &str, csv_name: &str, config: &LoadCsvConfig) -> String {
    let prefix = match config.method {
        LoadMethod::Browser => ":auto ",
        LoadMethod::Driver => "",
    };
    let indented: Vec<String> = body.lines().map(|line| format!("\t{}", line)).collect();
    format!(
        "{prefix}LOAD CSV WITH HEADERS FROM 'file:///{csv}' AS row\n\
         CALL {{\n\
         \tWITH row\n\
         {body}\n\
         }} IN TRANSACTIONS OF {batch} ROWS;",
        prefix = prefix,
        csv = csv_name,
        body = indented.join("\n"),
        batch = config.batch_size,
    )
}

/// The full LOAD CSV script for a model.
///
/// Constraints come first, then one block per node, then one per
/// relationship, in declaration order.
pub fn generate_load_csv(model: &DataModel, config: &LoadCsvConfig) -> String {
    let mut sections = Vec::new();

    let constraints = generate_constraints_cypher(model);
    if !constraints.is_empty() {
        sections.push(constraints);
    }

    for node in model.nodes() {
        sections.push(load_csv_block(
            &merge_node_body(node, config.strict_typing),
            &csv_file_name(&node.source_name),
            config,
        ));
    }
    for rel in model.relationships() {
        let (Some(source), Some(target)) = (model.node(&rel.source), model.node(&rel.target))
        else {
            continue;
        };
        sections.push(load_csv_block(
            &merge_relationship_body(rel, source, target, config.strict_typing),
            &csv_file_name(&rel.source_name),
            config,
        ));
    }
    sections.join("\n\n")
}
