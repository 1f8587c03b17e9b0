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

//! Property-based tests for naming normalization and type resolution.

use ingraph_core::{to_camel_case, to_pascal_case, to_screaming_snake_case, PropertyType};
use proptest::prelude::*;

proptest! {
    #[test]
    fn pascal_case_is_idempotent(s in "[A-Za-z0-9_ -]{0,32}") {
        let once = to_pascal_case(&s);
        prop_assert_eq!(to_pascal_case(&once), once.clone());
    }

    #[test]
    fn camel_case_is_idempotent(s in "[A-Za-z0-9_ -]{0,32}") {
        let once = to_camel_case(&s);
        prop_assert_eq!(to_camel_case(&once), once.clone());
    }

    #[test]
    fn screaming_snake_case_is_idempotent(s in "[A-Za-z0-9_ -]{0,32}") {
        let once = to_screaming_snake_case(&s);
        prop_assert_eq!(to_screaming_snake_case(&once), once.clone());
    }

    #[test]
    fn pascal_case_output_has_no_separators(s in "[A-Za-z0-9_ -]{0,32}") {
        let out = to_pascal_case(&s);
        prop_assert!(!out.contains('_'));
        prop_assert!(!out.contains(' '));
        prop_assert!(!out.contains('-'));
    }

    #[test]
    fn screaming_snake_output_has_no_lowercase(s in "[A-Za-z0-9_ -]{0,32}") {
        let out = to_screaming_snake_case(&s);
        prop_assert!(out.chars().all(|c| !c.is_lowercase()));
    }

    #[test]
    fn type_resolution_never_panics(s in "\\PC{0,64}") {
        let _ = PropertyType::from_source(&s);
    }
}
