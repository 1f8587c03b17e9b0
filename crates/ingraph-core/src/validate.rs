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

//! Validation engine.
//!
//! Runs at [`DataModel`](crate::DataModel) construction. Phases execute in a
//! fixed order and each phase collects every violation it can find before the
//! next one runs, so a single failed construction reports the complete set of
//! problems rather than the first:
//!
//! 1. structural (column membership, flag exclusivity, key arity)
//! 2. identity mechanism per node
//! 3. referential (relationship endpoints)
//! 4. same-label alias requirement
//! 5. cross-file join aliases
//! 6. column-mapping uniqueness
//! 7. parallel-relationship detection
//! 8. optional naming-convention normalization (only on a clean model)

use crate::error::{ValidationError, ValidationErrorKind, ValidationErrors};
use crate::naming::{to_camel_case, to_pascal_case, to_screaming_snake_case};
use crate::node::Node;
use crate::property::Property;
use crate::relationship::Relationship;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fully-enumerated validation configuration, passed by value.
///
/// Replaces the optional-key context dictionaries of ad hoc validators: every
/// switch the engine consults is a named field with a documented default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Valid column names per logical source. An empty table disables column
    /// membership checks (no data dictionary supplied).
    pub valid_columns: BTreeMap<String, Vec<String>>,
    /// Require every node to resolve an identity mechanism (default: true).
    pub enforce_uniqueness: bool,
    /// Permit one (source, column) pair to back several properties
    /// (default: false).
    pub allow_duplicate_column_mappings: bool,
    /// Rewrite labels, types, and property names to the canonical casing
    /// (default: false).
    pub apply_naming_conventions: bool,
    /// Permit more than one relationship between a label pair
    /// (default: false).
    pub allow_parallel_relationships: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            valid_columns: BTreeMap::new(),
            enforce_uniqueness: true,
            allow_duplicate_column_mappings: false,
            apply_naming_conventions: false,
            allow_parallel_relationships: false,
        }
    }
}

impl ValidationConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the valid columns of one source.
    pub fn with_source_columns(
        mut self,
        source: impl Into<String>,
        columns: Vec<String>,
    ) -> Self {
        self.valid_columns.insert(source.into(), columns);
        self
    }

    /// Disable the node-identity requirement.
    pub fn without_uniqueness(mut self) -> Self {
        self.enforce_uniqueness = false;
        self
    }

    /// Permit duplicate column mappings.
    pub fn allowing_duplicate_column_mappings(mut self) -> Self {
        self.allow_duplicate_column_mappings = true;
        self
    }

    /// Enable naming-convention normalization.
    pub fn with_naming_conventions(mut self) -> Self {
        self.apply_naming_conventions = true;
        self
    }

    /// Permit parallel relationships.
    pub fn allowing_parallel_relationships(mut self) -> Self {
        self.allow_parallel_relationships = true;
        self
    }
}

/// Validate and (on success) normalize model parts.
///
/// Returns the corrected parts: flag exclusivity is silently repaired and,
/// when enabled, naming conventions are applied. Any violation returns the
/// full aggregate instead.
pub(crate) fn run(
    mut nodes: Vec<Node>,
    mut relationships: Vec<Relationship>,
    config: &ValidationConfig,
) -> Result<(Vec<Node>, Vec<Relationship>), ValidationErrors> {
    // A property claiming both flags resolves to is_unique; part_of_key is
    // silently cleared rather than rejected.
    for prop in all_properties_mut(&mut nodes, &mut relationships) {
        if prop.is_unique && prop.part_of_key {
            prop.part_of_key = false;
        }
    }

    let mut errors = ValidationErrors::new();

    check_structural(&nodes, &relationships, config, &mut errors);
    if config.enforce_uniqueness {
        check_identity(&nodes, &relationships, &mut errors);
    }
    check_referential(&nodes, &relationships, &mut errors);
    check_same_label(&nodes, &relationships, &mut errors);
    check_cross_file(&nodes, &relationships, config, &mut errors);
    if !config.allow_duplicate_column_mappings {
        check_duplicate_mappings(&nodes, &relationships, &mut errors);
    }
    if !config.allow_parallel_relationships {
        check_parallel(&relationships, &mut errors);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    if config.apply_naming_conventions {
        apply_naming(&mut nodes, &mut relationships);
    }

    Ok((nodes, relationships))
}

fn all_properties_mut<'a>(
    nodes: &'a mut [Node],
    relationships: &'a mut [Relationship],
) -> impl Iterator<Item = &'a mut Property> {
    nodes
        .iter_mut()
        .flat_map(|n| n.properties.iter_mut())
        .chain(relationships.iter_mut().flat_map(|r| r.properties.iter_mut()))
}

fn qualified(owner: &str, prop: &Property) -> String {
    format!("{}.{}", owner, prop.name)
}

/// Phase 1: every column_mapping and alias must resolve against the
/// valid-columns table, when one was supplied.
fn check_structural(
    nodes: &[Node],
    relationships: &[Relationship],
    config: &ValidationConfig,
    errors: &mut ValidationErrors,
) {
    if config.valid_columns.is_empty() {
        return;
    }

    let owners = nodes
        .iter()
        .map(|n| (n.label.as_str(), &n.properties))
        .chain(
            relationships
                .iter()
                .map(|r| (r.rel_type.as_str(), &r.properties)),
        );

    for (owner, properties) in owners {
        for prop in properties {
            match config.valid_columns.get(&prop.source_name) {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::Structural,
                    vec![qualified(owner, prop)],
                    format!(
                        "source '{}' referenced by '{}' is not in the valid-columns table",
                        prop.source_name,
                        qualified(owner, prop)
                    ),
                )),
                Some(columns) => {
                    if !columns.contains(&prop.column_mapping) {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::Structural,
                            vec![qualified(owner, prop)],
                            format!(
                                "column '{}' mapped by '{}' does not exist in source '{}'",
                                prop.column_mapping,
                                qualified(owner, prop),
                                prop.source_name
                            ),
                        ));
                    }
                }
            }
            // An alias may name a column of another file (the cross-file join
            // key), so membership is checked against every known source here;
            // phase 5 pins it to the relationship's own file.
            if let Some(alias) = &prop.alias {
                let known = config
                    .valid_columns
                    .values()
                    .any(|columns| columns.contains(alias));
                if !known {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::Structural,
                        vec![qualified(owner, prop)],
                        format!(
                            "alias column '{}' on '{}' does not exist in any source",
                            alias,
                            qualified(owner, prop)
                        ),
                    ));
                }
            }
        }
    }
}

/// Phase 2: each node resolves exactly one identity mechanism; composite keys
/// everywhere need at least two members.
fn check_identity(
    nodes: &[Node],
    relationships: &[Relationship],
    errors: &mut ValidationErrors,
) {
    for node in nodes {
        let uniques = node.unique_properties();
        let keys = node.key_properties();

        if keys.len() == 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::Identity,
                vec![qualified(&node.label, keys[0])],
                format!(
                    "node '{}' declares a composite key with a single property '{}'; a key needs at least 2",
                    node.label, keys[0].name
                ),
            ));
        } else if keys.is_empty() {
            match uniques.len() {
                1 => {}
                0 => errors.push(ValidationError::new(
                    ValidationErrorKind::Identity,
                    vec![node.label.clone()],
                    format!(
                        "node '{}' has no unique property and no composite key",
                        node.label
                    ),
                )),
                n => errors.push(ValidationError::new(
                    ValidationErrorKind::Identity,
                    uniques.iter().map(|p| qualified(&node.label, p)).collect(),
                    format!(
                        "node '{}' declares {} unique properties; exactly one is required",
                        node.label, n
                    ),
                )),
            }
        }
    }

    for rel in relationships {
        let keys = rel.key_properties();
        if keys.len() == 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::Identity,
                vec![qualified(&rel.rel_type, keys[0])],
                format!(
                    "relationship '{}' declares a composite key with a single property '{}'; a key needs at least 2",
                    rel.rel_type, keys[0].name
                ),
            ));
        }
    }
}

/// Phase 3: relationship endpoints must name nodes of the model.
fn check_referential(
    nodes: &[Node],
    relationships: &[Relationship],
    errors: &mut ValidationErrors,
) {
    for rel in relationships {
        for endpoint in [&rel.source, &rel.target] {
            if !nodes.iter().any(|n| &n.label == endpoint) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::Referential,
                    vec![rel.rel_type.clone()],
                    format!(
                        "relationship '{}' references unknown node label '{}'",
                        rel.rel_type, endpoint
                    ),
                ));
            }
        }
    }
}

/// Phase 4: a self-referencing relationship needs an aliased identifying
/// property on its node to tell the two endpoint rows apart.
fn check_same_label(
    nodes: &[Node],
    relationships: &[Relationship],
    errors: &mut ValidationErrors,
) {
    for rel in relationships.iter().filter(|r| r.is_self_referencing()) {
        let Some(node) = nodes.iter().find(|n| n.label == rel.source) else {
            continue; // already a referential error
        };
        let has_aliased_identifier = node
            .identifying_properties()
            .iter()
            .any(|p| p.alias.is_some());
        if !has_aliased_identifier {
            errors.push(ValidationError::new(
                ValidationErrorKind::Identity,
                vec![rel.rel_type.clone(), node.label.clone()],
                format!(
                    "self-referencing relationship '{}' requires an aliased unique or key property on node '{}'",
                    rel.rel_type, node.label
                ),
            ));
        }
    }
}

/// Phase 5: when a relationship is loaded from a different file than an
/// endpoint node, every identifying property of that node needs an alias that
/// is a column of the relationship's file.
fn check_cross_file(
    nodes: &[Node],
    relationships: &[Relationship],
    config: &ValidationConfig,
    errors: &mut ValidationErrors,
) {
    for rel in relationships {
        let mut endpoints = vec![&rel.source];
        if rel.target != rel.source {
            endpoints.push(&rel.target);
        }
        for endpoint in endpoints {
            let Some(node) = nodes.iter().find(|n| &n.label == endpoint) else {
                continue; // already a referential error
            };
            if node.source_name == rel.source_name {
                continue;
            }
            let rel_columns = config.valid_columns.get(&rel.source_name);
            for prop in node.identifying_properties() {
                match &prop.alias {
                    None => errors.push(ValidationError::new(
                        ValidationErrorKind::CrossFileAlias,
                        vec![rel.rel_type.clone(), qualified(&node.label, prop)],
                        format!(
                            "relationship '{}' is loaded from '{}' but identifying property '{}' of node '{}' has no alias into that file",
                            rel.rel_type,
                            rel.source_name,
                            qualified(&node.label, prop),
                            node.label
                        ),
                    )),
                    Some(alias) => {
                        if let Some(columns) = rel_columns {
                            if !columns.contains(alias) {
                                errors.push(ValidationError::new(
                                    ValidationErrorKind::CrossFileAlias,
                                    vec![rel.rel_type.clone(), qualified(&node.label, prop)],
                                    format!(
                                        "alias '{}' of '{}' is not a column of relationship source '{}'",
                                        alias,
                                        qualified(&node.label, prop),
                                        rel.source_name
                                    ),
                                ));
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Phase 6: a (source, column) pair may be claimed by at most one property
/// model-wide.
fn check_duplicate_mappings(
    nodes: &[Node],
    relationships: &[Relationship],
    errors: &mut ValidationErrors,
) {
    // Vec keeps first-encountered order for deterministic error output.
    let mut groups: Vec<((String, String), Vec<String>)> = Vec::new();

    let owners = nodes
        .iter()
        .map(|n| (n.label.as_str(), &n.properties))
        .chain(
            relationships
                .iter()
                .map(|r| (r.rel_type.as_str(), &r.properties)),
        );

    for (owner, properties) in owners {
        for prop in properties {
            let key = (prop.source_name.clone(), prop.column_mapping.clone());
            match groups.iter_mut().find(|(k, _)| *k == key) {
                Some((_, members)) => members.push(qualified(owner, prop)),
                None => groups.push((key, vec![qualified(owner, prop)])),
            }
        }
    }

    for ((source, column), members) in groups {
        if members.len() > 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateMapping,
                members.clone(),
                format!(
                    "column '{}' of source '{}' is claimed by multiple properties: {}",
                    column,
                    source,
                    members.join(", ")
                ),
            ));
        }
    }
}

/// Phase 7: at most one relationship per unordered label pair.
fn check_parallel(relationships: &[Relationship], errors: &mut ValidationErrors) {
    let mut groups: Vec<((String, String), Vec<String>)> = Vec::new();

    for rel in relationships {
        let key = if rel.source <= rel.target {
            (rel.source.clone(), rel.target.clone())
        } else {
            (rel.target.clone(), rel.source.clone())
        };
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, types)) => types.push(rel.rel_type.clone()),
            None => groups.push((key, vec![rel.rel_type.clone()])),
        }
    }

    for ((a, b), types) in groups {
        if types.len() > 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ParallelRelationship,
                types.clone(),
                format!(
                    "labels '{}' and '{}' are connected by more than one relationship: {}",
                    a,
                    b,
                    types.join(", ")
                ),
            ));
        }
    }
}

/// Phase 8: canonical casing, applied only to a clean model.
fn apply_naming(nodes: &mut [Node], relationships: &mut [Relationship]) {
    for node in nodes.iter_mut() {
        node.label = to_pascal_case(&node.label);
        for prop in &mut node.properties {
            prop.name = to_camel_case(&prop.name);
        }
    }
    for rel in relationships.iter_mut() {
        rel.rel_type = to_screaming_snake_case(&rel.rel_type);
        rel.source = to_pascal_case(&rel.source);
        rel.target = to_pascal_case(&rel.target);
        for prop in &mut rel.properties {
            prop.name = to_camel_case(&prop.name);
        }
    }
}
