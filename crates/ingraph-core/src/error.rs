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

//! Structured validation errors.
//!
//! Validation never fails fast: every phase appends to one
//! [`ValidationErrors`] aggregate so a caller sees all violations of a model
//! in a single pass.

use std::fmt;
use thiserror::Error;

/// The kind of schema violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Unknown column reference or malformed property flags.
    Structural,
    /// Missing or invalid uniqueness mechanism.
    Identity,
    /// Relationship endpoint naming an unknown node label.
    Referential,
    /// Unresolvable cross-file join alias.
    CrossFileAlias,
    /// Column claimed by more than one property.
    DuplicateMapping,
    /// More than one relationship between a node pair.
    ParallelRelationship,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structural => write!(f, "StructuralError"),
            Self::Identity => write!(f, "IdentityError"),
            Self::Referential => write!(f, "ReferentialError"),
            Self::CrossFileAlias => write!(f, "CrossFileAliasError"),
            Self::DuplicateMapping => write!(f, "DuplicateMappingError"),
            Self::ParallelRelationship => write!(f, "ParallelRelationshipError"),
        }
    }
}

/// A single schema violation: kind, offending entities, human message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{kind}] {message}")]
pub struct ValidationError {
    /// What class of invariant was violated.
    pub kind: ValidationErrorKind,
    /// Names of the offending entities ("Label" or "Label.property").
    pub entities: Vec<String>,
    /// Human-readable description.
    pub message: String,
}

impl ValidationError {
    /// Create a validation error.
    pub fn new(
        kind: ValidationErrorKind,
        entities: Vec<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            entities,
            message: message.into(),
        }
    }
}

/// Aggregate of all violations found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one violation.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Whether no violations were recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded violations.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// All violations, in the order the phases found them.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Violations of one kind.
    pub fn of_kind(
        &self,
        kind: ValidationErrorKind,
    ) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} validation error(s):", self.errors.len())?;
        for error in &self.errors {
            writeln!(f, "  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::new(
            ValidationErrorKind::Identity,
            vec!["Person".to_string()],
            "node 'Person' has no unique property or composite key",
        );
        let msg = err.to_string();
        assert!(msg.contains("IdentityError"));
        assert!(msg.contains("Person"));
    }

    #[test]
    fn test_aggregate_display_lists_all() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::new(
            ValidationErrorKind::Structural,
            vec!["Person.age".to_string()],
            "column 'age' not found in source 'people.csv'",
        ));
        errors.push(ValidationError::new(
            ValidationErrorKind::Referential,
            vec!["KNOWS".to_string()],
            "relationship 'KNOWS' targets unknown label 'Alien'",
        ));
        let text = errors.to_string();
        assert!(text.starts_with("2 validation error(s):"));
        assert!(text.contains("StructuralError"));
        assert!(text.contains("ReferentialError"));
    }

    #[test]
    fn test_of_kind_filter() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::new(
            ValidationErrorKind::Identity,
            vec!["A".to_string()],
            "a",
        ));
        errors.push(ValidationError::new(
            ValidationErrorKind::DuplicateMapping,
            vec!["B".to_string()],
            "b",
        ));
        assert_eq!(errors.of_kind(ValidationErrorKind::Identity).count(), 1);
        assert_eq!(errors.of_kind(ValidationErrorKind::Referential).count(), 0);
    }
}
