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

//! Ingestion document emission.
//!
//! Serializes a validated model plus an [`IngestYamlConfig`] into the YAML
//! document consumed by the ingestion runner: connection head, `pre_ingest`
//! constraints, one `files` entry per entity with its parameterized Cypher,
//! and optional `post_ingest` statements.

use crate::config::{FileOverrides, IngestYamlConfig};
use ingraph_core::DataModel;
use ingraph_cypher::{csv_file_name, generate_constraints, merge_node, merge_relationship};
use serde::Serialize;
use thiserror::Error;

/// Errors from ingestion document emission.
#[derive(Debug, Error)]
pub enum IngestYamlError {
    /// The document failed to serialize.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result alias for ingestion document emission.
pub type Result<T> = std::result::Result<T, IngestYamlError>;

// Field order here is the emitted key order; serde_yaml preserves it.
#[derive(Serialize)]
struct IngestDocument {
    server_uri: String,
    admin_user: String,
    admin_pass: String,
    database: String,
    basepath: String,
    pre_ingest: Vec<String>,
    files: Vec<FileEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    post_ingest: Option<Vec<String>>,
}

#[derive(Serialize)]
struct FileEntry {
    url: String,
    cql: String,
    chunk_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    field_separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skip_records: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skip_file: Option<bool>,
}

impl FileEntry {
    fn new(url: String, cql: String, config: &IngestYamlConfig) -> Self {
        let overrides = config.overrides.get(&url).cloned().unwrap_or_default();
        let FileOverrides {
            chunk_size,
            field_separator,
            skip_records,
            skip_file,
        } = overrides;
        Self {
            url,
            cql,
            chunk_size: chunk_size.unwrap_or(config.chunk_size),
            field_separator,
            skip_records,
            skip_file,
        }
    }
}

/// Split raw Cypher text into statements on top-level semicolons.
///
/// Semicolons inside single quotes, double quotes, or backticks do not split.
/// Empty fragments are dropped, so trailing terminators are harmless.
pub fn split_statements(raw: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in raw.chars() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' | '`' => {
                    quote = Some(c);
                    current.push(c);
                }
                ';' => {
                    let trimmed = current.trim();
                    if !trimmed.is_empty() {
                        statements.push(trimmed.to_string());
                    }
                    current.clear();
                }
                _ => current.push(c),
            },
        }
    }
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        statements.push(trimmed.to_string());
    }
    statements
}

/// Generate the YAML ingestion document for a model.
///
/// One file entry is emitted per node and per relationship, in declaration
/// order, each carrying the full parameterized MERGE statement as a literal
/// block scalar.
///
/// # Errors
///
/// Returns [`IngestYamlError::Yaml`] if the document fails to serialize.
pub fn generate_ingest_yaml(model: &DataModel, config: &IngestYamlConfig) -> Result<String> {
    let mut pre_ingest: Vec<String> = generate_constraints(model)
        .iter()
        .map(|c| c.trim_end_matches(';').to_string())
        .collect();
    if let Some(extra) = &config.pre_ingest_extra {
        pre_ingest.extend(split_statements(extra));
    }

    let mut files = Vec::new();
    for node in model.nodes() {
        let url = format!("$BASE/{}", csv_file_name(&node.source_name));
        files.push(FileEntry::new(
            url,
            merge_node(node, config.strict_typing),
            config,
        ));
    }
    for rel in model.relationships() {
        let (Some(source), Some(target)) = (model.node(&rel.source), model.node(&rel.target))
        else {
            continue;
        };
        let url = format!("$BASE/{}", csv_file_name(&rel.source_name));
        files.push(FileEntry::new(
            url,
            merge_relationship(rel, source, target, config.strict_typing),
            config,
        ));
    }

    let document = IngestDocument {
        server_uri: config.server_uri.clone(),
        admin_user: config.admin_user.clone(),
        admin_pass: config.admin_pass.clone(),
        database: config.database.clone(),
        basepath: config.basepath.clone(),
        pre_ingest,
        files,
        post_ingest: if config.post_ingest.is_empty() {
            None
        } else {
            Some(config.post_ingest.clone())
        },
    };
    Ok(serde_yaml::to_string(&document)?)
}
