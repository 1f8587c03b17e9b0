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

//! Configuration for YAML ingestion config emission.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-file overrides for one entry in the generated config.
///
/// Every field is optional; unset fields fall back to the global defaults and
/// are omitted from the emitted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOverrides {
    /// Rows per ingestion chunk for this file only.
    pub chunk_size: Option<usize>,
    /// Column separator when the file is not comma-delimited.
    pub field_separator: Option<String>,
    /// Leading records to skip.
    pub skip_records: Option<usize>,
    /// Keep the entry in the document but skip it at ingestion time.
    pub skip_file: Option<bool>,
}

/// Options for the generated ingestion document.
///
/// Connection fields land verbatim in the document head; `overrides` is keyed
/// by the normalized `$BASE/<csv>` URL of the file entry it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestYamlConfig {
    /// Bolt URI of the target server.
    pub server_uri: String,
    /// Ingestion user.
    pub admin_user: String,
    /// Ingestion password.
    pub admin_pass: String,
    /// Target database name.
    pub database: String,
    /// Base path the `$BASE` placeholder expands to.
    pub basepath: String,
    /// Default rows per ingestion chunk.
    pub chunk_size: usize,
    /// Whether typed columns are wrapped in conversion functions.
    pub strict_typing: bool,
    /// Extra statements appended to `pre_ingest` after the constraints,
    /// split on top-level semicolons.
    pub pre_ingest_extra: Option<String>,
    /// Statements run after ingestion; omitted from the document when empty.
    pub post_ingest: Vec<String>,
    /// Per-file overrides keyed by `$BASE/<csv>` URL.
    pub overrides: BTreeMap<String, FileOverrides>,
}

impl Default for IngestYamlConfig {
    fn default() -> Self {
        Self {
            server_uri: "bolt://localhost:7687".to_string(),
            admin_user: "neo4j".to_string(),
            admin_pass: "password".to_string(),
            database: "neo4j".to_string(),
            basepath: "file:./".to_string(),
            chunk_size: 100,
            strict_typing: true,
            pre_ingest_extra: None,
            post_ingest: Vec::new(),
            overrides: BTreeMap::new(),
        }
    }
}

impl IngestYamlConfig {
    /// Set the server URI.
    pub fn with_server_uri(mut self, uri: impl Into<String>) -> Self {
        self.server_uri = uri.into();
        self
    }

    /// Set the ingestion credentials.
    pub fn with_credentials(
        mut self,
        user: impl Into<String>,
        pass: impl Into<String>,
    ) -> Self {
        self.admin_user = user.into();
        self.admin_pass = pass.into();
        self
    }

    /// Set the target database.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set the `$BASE` expansion path.
    pub fn with_basepath(mut self, basepath: impl Into<String>) -> Self {
        self.basepath = basepath.into();
        self
    }

    /// Set the default chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Enable or disable strict typing casts.
    pub fn with_strict_typing(mut self, strict_typing: bool) -> Self {
        self.strict_typing = strict_typing;
        self
    }

    /// Append raw statements to `pre_ingest` after the constraints.
    pub fn with_pre_ingest(mut self, statements: impl Into<String>) -> Self {
        self.pre_ingest_extra = Some(statements.into());
        self
    }

    /// Set the `post_ingest` statements.
    pub fn with_post_ingest(mut self, statements: Vec<String>) -> Self {
        self.post_ingest = statements;
        self
    }

    /// Attach overrides for one file entry, keyed by its `$BASE/<csv>` URL.
    pub fn with_overrides(mut self, url: impl Into<String>, overrides: FileOverrides) -> Self {
        self.overrides.insert(url.into(), overrides);
        self
    }
}
