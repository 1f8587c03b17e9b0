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

//! Column-to-attribute property mapping.
//!
//! A [`Property`] binds one graph attribute to one source column, carrying the
//! value type and the identity flags that drive constraint generation and
//! MERGE-key selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value type of a property, mirroring the Neo4j property type system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    /// Plain string; never cast.
    Str,
    /// Integer, cast with `toIntegerOrNull`.
    Int,
    /// Float, cast with `toFloatOrNull`.
    Float,
    /// Boolean, cast with `toBooleanOrNull`.
    Bool,
    /// Calendar date, cast with `date`.
    Date,
    /// Date and time, cast with `datetime`.
    DateTime,
    /// Time of day, cast with `time`.
    Time,
    /// Spatial point, cast with `point`.
    Point,
    /// Homogeneous list of another type; never cast.
    List(Box<PropertyType>),
}

impl PropertyType {
    /// Resolve a source-schema type name to a `PropertyType`.
    ///
    /// Matching is case-insensitive and suffix-based so that qualified names
    /// from external dictionaries ("LocalDateTime", "ZonedTime", "int64")
    /// resolve to the right variant. `datetime` is checked before `time` and
    /// `date` to keep the suffixes unambiguous. Unknown names fall back to
    /// [`PropertyType::Str`], which generates no cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ingraph_core::PropertyType;
    /// assert_eq!(PropertyType::from_source("STRING"), PropertyType::Str);
    /// assert_eq!(PropertyType::from_source("LocalDateTime"), PropertyType::DateTime);
    /// assert_eq!(PropertyType::from_source("int64"), PropertyType::Int);
    /// assert_eq!(
    ///     PropertyType::from_source("LIST<INTEGER>"),
    ///     PropertyType::List(Box::new(PropertyType::Int)),
    /// );
    /// ```
    pub fn from_source(name: &str) -> Self {
        let lower = name.trim().to_ascii_lowercase();

        if let Some(inner) = lower
            .strip_prefix("list<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return PropertyType::List(Box::new(PropertyType::from_source(inner)));
        }

        if lower.ends_with("datetime") {
            PropertyType::DateTime
        } else if lower.ends_with("time") {
            PropertyType::Time
        } else if lower.ends_with("date") {
            PropertyType::Date
        } else if lower.ends_with("point") {
            PropertyType::Point
        } else if lower.ends_with("bool") || lower.ends_with("boolean") {
            PropertyType::Bool
        } else if lower.ends_with("int") || lower.ends_with("integer") || lower.ends_with("int64") {
            PropertyType::Int
        } else if lower.ends_with("float") || lower.ends_with("double") {
            PropertyType::Float
        } else {
            PropertyType::Str
        }
    }

    /// Neo4j conversion function applied under strict typing, if any.
    ///
    /// Strings and lists pass through uncast.
    pub fn cast_function(&self) -> Option<&'static str> {
        match self {
            PropertyType::Str | PropertyType::List(_) => None,
            PropertyType::Int => Some("toIntegerOrNull"),
            PropertyType::Float => Some("toFloatOrNull"),
            PropertyType::Bool => Some("toBooleanOrNull"),
            PropertyType::Date => Some("date"),
            PropertyType::DateTime => Some("datetime"),
            PropertyType::Time => Some("time"),
            PropertyType::Point => Some("point"),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::Str => write!(f, "STRING"),
            PropertyType::Int => write!(f, "INTEGER"),
            PropertyType::Float => write!(f, "FLOAT"),
            PropertyType::Bool => write!(f, "BOOLEAN"),
            PropertyType::Date => write!(f, "DATE"),
            PropertyType::DateTime => write!(f, "DATETIME"),
            PropertyType::Time => write!(f, "TIME"),
            PropertyType::Point => write!(f, "POINT"),
            PropertyType::List(inner) => write!(f, "LIST<{}>", inner),
        }
    }
}

/// One column-to-attribute mapping with type and identity flags.
///
/// `is_unique` and `part_of_key` are mutually exclusive: a property either
/// carries a single-column uniqueness constraint or participates in a
/// composite key, never both. When both are set the validation engine
/// silently clears `part_of_key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Attribute name in the graph.
    pub name: String,
    /// Value type, used for strict-typing casts.
    pub dtype: PropertyType,
    /// Primary source column the value is read from.
    pub column_mapping: String,
    /// Secondary column used for same-label relationship disambiguation or
    /// cross-file joins.
    pub alias: Option<String>,
    /// Whether the property carries a uniqueness constraint.
    pub is_unique: bool,
    /// Whether the property participates in a composite key.
    pub part_of_key: bool,
    /// Logical source file or table the column belongs to.
    pub source_name: String,
}

impl Property {
    /// Create a non-identifying property.
    pub fn new(
        name: impl Into<String>,
        dtype: PropertyType,
        column_mapping: impl Into<String>,
        source_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dtype,
            column_mapping: column_mapping.into(),
            alias: None,
            is_unique: false,
            part_of_key: false,
            source_name: source_name.into(),
        }
    }

    /// Mark the property as carrying a uniqueness constraint.
    ///
    /// Clears `part_of_key`; the two flags are mutually exclusive.
    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self.part_of_key = false;
        self
    }

    /// Mark the property as part of a composite key.
    ///
    /// Ignored when `is_unique` is already set.
    pub fn key_part(mut self) -> Self {
        if !self.is_unique {
            self.part_of_key = true;
        }
        self
    }

    /// Attach a secondary column mapping.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Whether the property participates in the entity's identity mechanism.
    pub fn is_identifier(&self) -> bool {
        self.is_unique || self.part_of_key
    }
}
