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

//! Resolves each field declaration into its canonical metadata record.
//!
//! Defaulting is per-attribute and independent: an annotation's value is
//! used when present, a fixed default otherwise. The policy lives here and
//! nowhere else; downstream stages never look at raw annotations.

use crate::error::SchemaError;
use crate::schema::{AnnotationSet, FieldDeclaration, SettingType};
use serde::{Deserialize, Serialize};

/// The resolved, default-applied metadata for one settings field.
///
/// Produced once per field during compilation and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// The field's identifier, copied from its declaration.
    pub identifier: String,
    /// Editor display name; defaults to the identifier.
    pub display_name: String,
    /// Editor help text; defaults to empty.
    pub help_text: String,
    /// Editor sub-group; defaults to empty.
    pub group: String,
    /// Lower numeric bound; defaults to 0.
    pub min_value: f32,
    /// Upper numeric bound; defaults to 0.
    pub max_value: f32,
    /// Editor slider increment; defaults to 0.
    pub step_size: f32,
    /// Whether the field is packed into the constant buffer; defaults to
    /// true.
    pub is_shader_constant: bool,
    /// Whether a 3-component vector field is an HDR color; defaults to
    /// false.
    pub is_hdr: bool,
    /// The declared value type, copied from the declaration.
    pub value_type: SettingType,
}

/// Extracts the metadata record for one field of the named group.
///
/// Always produces a record (defaulting never fails); every validation
/// violation found along the way is returned alongside it. Callers must
/// discard the record when the violation list of the whole schema is
/// non-empty. Extraction is referentially transparent: identical
/// declarations always yield identical output.
pub fn extract_metadata(
    group_name: &str,
    field: &FieldDeclaration,
) -> (FieldMetadata, Vec<SchemaError>) {
    let (set, duplicates) = AnnotationSet::from_annotations(&field.annotations);

    let mut errors: Vec<SchemaError> = duplicates
        .into_iter()
        .map(|kind| SchemaError::DuplicateAnnotation {
            group: group_name.to_string(),
            field: field.identifier.clone(),
            annotation: kind,
        })
        .collect();

    validate(group_name, field, &set, &mut errors);

    let metadata = FieldMetadata {
        identifier: field.identifier.clone(),
        display_name: set
            .display_name
            .clone()
            .unwrap_or_else(|| field.identifier.clone()),
        help_text: set.help_text.clone().unwrap_or_default(),
        group: set.group.clone().unwrap_or_default(),
        min_value: set.min_value.unwrap_or(0.0),
        max_value: set.max_value.unwrap_or(0.0),
        step_size: set.step_size.unwrap_or(0.0),
        is_shader_constant: set.use_as_shader_constant.unwrap_or(true),
        is_hdr: set.hdr.unwrap_or(false),
        value_type: field.value_type.clone(),
    };

    (metadata, errors)
}

/// Checks annotation/type compatibility and range consistency, appending
/// every violation found. Never short-circuits.
fn validate(
    group_name: &str,
    field: &FieldDeclaration,
    set: &AnnotationSet,
    errors: &mut Vec<SchemaError>,
) {
    use crate::schema::AnnotationKind;

    let numeric = field.value_type.is_numeric();

    let range_kinds = [
        (set.min_value.is_some(), AnnotationKind::MinValue),
        (set.max_value.is_some(), AnnotationKind::MaxValue),
        (set.step_size.is_some(), AnnotationKind::StepSize),
    ];
    for (present, kind) in range_kinds {
        if present && !numeric {
            errors.push(SchemaError::InvalidAnnotationTarget {
                group: group_name.to_string(),
                field: field.identifier.clone(),
                annotation: kind,
                value_type: field.value_type.clone(),
            });
        }
    }

    if set.hdr.is_some() && field.value_type != SettingType::Vector3 {
        errors.push(SchemaError::InvalidAnnotationTarget {
            group: group_name.to_string(),
            field: field.identifier.clone(),
            annotation: AnnotationKind::Hdr,
            value_type: field.value_type.clone(),
        });
    }

    if set.enum_label.is_some() {
        errors.push(SchemaError::MisplacedEnumLabel {
            group: group_name.to_string(),
            field: field.identifier.clone(),
        });
    }

    // Range consistency only applies where the annotations were legal to
    // begin with.
    if numeric {
        if let (Some(min), Some(max)) = (set.min_value, set.max_value) {
            if min > max {
                errors.push(SchemaError::InvalidRange {
                    group: group_name.to_string(),
                    field: field.identifier.clone(),
                    detail: format!("MinValue ({min}) is greater than MaxValue ({max})"),
                });
            }
        }
        if let Some(step) = set.step_size {
            if step <= 0.0 {
                errors.push(SchemaError::InvalidRange {
                    group: group_name.to_string(),
                    field: field.identifier.clone(),
                    detail: format!("StepSize ({step}) must be greater than zero"),
                });
            }
        }
    }
}
