// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the schema-authoring error taxonomy and the aggregated compile
//! failure type.
//!
//! Every error here is detectable from the declarations alone; nothing is
//! deferred to packing or serialization time. The compiler collects every
//! violation across the whole schema before failing, so one compile attempt
//! surfaces the complete list of authoring mistakes.

use crate::schema::{AnnotationKind, SettingType};
use std::fmt;

/// A single schema-authoring violation.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// A range or HDR annotation was attached to a field whose declared
    /// type does not support it.
    InvalidAnnotationTarget {
        /// Name of the owning settings group.
        group: String,
        /// Identifier of the offending field.
        field: String,
        /// The annotation kind that was attached.
        annotation: AnnotationKind,
        /// The field's declared type.
        value_type: SettingType,
    },
    /// An `EnumLabel` annotation was attached to a settings field instead
    /// of an enum member.
    MisplacedEnumLabel {
        /// Name of the owning settings group.
        group: String,
        /// Identifier of the offending field.
        field: String,
    },
    /// The numeric range annotations are inconsistent: min above max, or a
    /// non-positive step size.
    InvalidRange {
        /// Name of the owning settings group.
        group: String,
        /// Identifier of the offending field.
        field: String,
        /// What exactly is wrong with the range.
        detail: String,
    },
    /// A single-valued annotation kind was attached more than once to the
    /// same field.
    DuplicateAnnotation {
        /// Name of the owning settings group.
        group: String,
        /// Identifier of the offending field.
        field: String,
        /// The annotation kind that was duplicated.
        annotation: AnnotationKind,
    },
    /// Two members of one enum type resolve to the same display label
    /// after label defaulting.
    DuplicateEnumLabel {
        /// Name of the enum type.
        enum_type: String,
        /// The label shared by more than one member.
        label: String,
    },
    /// An enum-typed field references an enum type the schema does not
    /// declare.
    UnknownEnumType {
        /// Name of the owning settings group.
        group: String,
        /// Identifier of the offending field.
        field: String,
        /// The unresolved enum type name.
        enum_type: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::InvalidAnnotationTarget {
                group,
                field,
                annotation,
                value_type,
            } => {
                write!(
                    f,
                    "Annotation '{annotation}' is not valid on '{group}.{field}' of type {value_type}"
                )
            }
            SchemaError::MisplacedEnumLabel { group, field } => {
                write!(
                    f,
                    "'EnumLabel' attached to settings field '{group}.{field}'; it is only valid on enum members"
                )
            }
            SchemaError::InvalidRange {
                group,
                field,
                detail,
            } => {
                write!(f, "Invalid numeric range on '{group}.{field}': {detail}")
            }
            SchemaError::DuplicateAnnotation {
                group,
                field,
                annotation,
            } => {
                write!(
                    f,
                    "Annotation '{annotation}' attached more than once to '{group}.{field}'"
                )
            }
            SchemaError::DuplicateEnumLabel { enum_type, label } => {
                write!(
                    f,
                    "Enum type '{enum_type}' has more than one member labeled '{label}'"
                )
            }
            SchemaError::UnknownEnumType {
                group,
                field,
                enum_type,
            } => {
                write!(
                    f,
                    "Field '{group}.{field}' references undeclared enum type '{enum_type}'"
                )
            }
        }
    }
}

impl std::error::Error for SchemaError {}

/// The aggregated failure of one compile attempt.
///
/// Holds every [`SchemaError`] found across the whole schema; the list is
/// never empty. No partial artifacts are produced alongside this error.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileError {
    /// All violations, in discovery order.
    pub errors: Vec<SchemaError>,
}

impl CompileError {
    /// Wraps a non-empty violation list.
    pub fn new(errors: Vec<SchemaError>) -> Self {
        debug_assert!(!errors.is_empty(), "CompileError with no violations");
        Self { errors }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Settings schema compilation failed with {} error(s):",
            self.errors.len()
        )?;
        for error in &self.errors {
            writeln!(f, "  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.errors.first().map(|e| e as _)
    }
}
