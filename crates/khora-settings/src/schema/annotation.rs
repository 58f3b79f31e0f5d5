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

//! Declarative annotations attached to settings fields, and the resolved
//! at-most-one-of-each view the metadata extractor consumes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single annotation attached to a settings field.
///
/// Annotations carry auxiliary metadata only; they never change a field's
/// type or default value. Each kind may appear at most once per field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Annotation {
    /// Human-readable name shown by editors instead of the identifier.
    DisplayName(String),
    /// Longer help/tooltip text for editors.
    HelpText(String),
    /// Editor sub-group the field is sorted under.
    Group(String),
    /// Lower bound for numeric fields.
    MinValue(f32),
    /// Upper bound for numeric fields.
    MaxValue(f32),
    /// Editor slider increment for numeric fields.
    StepSize(f32),
    /// Whether the field is packed into the group's constant buffer.
    /// Fields without this annotation are shader-visible by default.
    UseAsShaderConstant(bool),
    /// Marks a 3-component vector field as a high-dynamic-range color.
    Hdr(bool),
    /// Display label for an enum member. Only legal inside an enum
    /// declaration, never on a settings field.
    EnumLabel(String),
}

impl Annotation {
    /// The kind discriminant of this annotation.
    pub fn kind(&self) -> AnnotationKind {
        match self {
            Annotation::DisplayName(_) => AnnotationKind::DisplayName,
            Annotation::HelpText(_) => AnnotationKind::HelpText,
            Annotation::Group(_) => AnnotationKind::Group,
            Annotation::MinValue(_) => AnnotationKind::MinValue,
            Annotation::MaxValue(_) => AnnotationKind::MaxValue,
            Annotation::StepSize(_) => AnnotationKind::StepSize,
            Annotation::UseAsShaderConstant(_) => AnnotationKind::UseAsShaderConstant,
            Annotation::Hdr(_) => AnnotationKind::Hdr,
            Annotation::EnumLabel(_) => AnnotationKind::EnumLabel,
        }
    }
}

/// Discriminant for the recognized annotation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationKind {
    /// See [`Annotation::DisplayName`].
    DisplayName,
    /// See [`Annotation::HelpText`].
    HelpText,
    /// See [`Annotation::Group`].
    Group,
    /// See [`Annotation::MinValue`].
    MinValue,
    /// See [`Annotation::MaxValue`].
    MaxValue,
    /// See [`Annotation::StepSize`].
    StepSize,
    /// See [`Annotation::UseAsShaderConstant`].
    UseAsShaderConstant,
    /// See [`Annotation::Hdr`].
    Hdr,
    /// See [`Annotation::EnumLabel`].
    EnumLabel,
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnnotationKind::DisplayName => "DisplayName",
            AnnotationKind::HelpText => "HelpText",
            AnnotationKind::Group => "Group",
            AnnotationKind::MinValue => "MinValue",
            AnnotationKind::MaxValue => "MaxValue",
            AnnotationKind::StepSize => "StepSize",
            AnnotationKind::UseAsShaderConstant => "UseAsShaderConstant",
            AnnotationKind::Hdr => "HDR",
            AnnotationKind::EnumLabel => "EnumLabel",
        };
        write!(f, "{name}")
    }
}

/// The resolved, at-most-one-of-each-kind view of a field's annotations.
///
/// Built from the raw ordered annotation list; the first occurrence of a
/// kind wins and every further occurrence of that kind is reported back to
/// the caller as a duplicate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSet {
    /// Value of the `DisplayName` annotation, if attached.
    pub display_name: Option<String>,
    /// Value of the `HelpText` annotation, if attached.
    pub help_text: Option<String>,
    /// Value of the `Group` annotation, if attached.
    pub group: Option<String>,
    /// Value of the `MinValue` annotation, if attached.
    pub min_value: Option<f32>,
    /// Value of the `MaxValue` annotation, if attached.
    pub max_value: Option<f32>,
    /// Value of the `StepSize` annotation, if attached.
    pub step_size: Option<f32>,
    /// Value of the `UseAsShaderConstant` annotation, if attached.
    pub use_as_shader_constant: Option<bool>,
    /// Value of the `HDR` annotation, if attached.
    pub hdr: Option<bool>,
    /// Value of the `EnumLabel` annotation, if attached.
    pub enum_label: Option<String>,
}

impl AnnotationSet {
    /// Folds a raw annotation list into the single-valued view.
    ///
    /// Returns the set together with the kinds that appeared more than
    /// once (each duplicated kind reported once, in first-duplicate order).
    pub fn from_annotations(annotations: &[Annotation]) -> (Self, Vec<AnnotationKind>) {
        let mut set = AnnotationSet::default();
        let mut duplicates: Vec<AnnotationKind> = Vec::new();

        for annotation in annotations {
            let kind = annotation.kind();
            let occupied = match annotation {
                Annotation::DisplayName(v) => try_assign(&mut set.display_name, v.clone()),
                Annotation::HelpText(v) => try_assign(&mut set.help_text, v.clone()),
                Annotation::Group(v) => try_assign(&mut set.group, v.clone()),
                Annotation::MinValue(v) => try_assign(&mut set.min_value, *v),
                Annotation::MaxValue(v) => try_assign(&mut set.max_value, *v),
                Annotation::StepSize(v) => try_assign(&mut set.step_size, *v),
                Annotation::UseAsShaderConstant(v) => {
                    try_assign(&mut set.use_as_shader_constant, *v)
                }
                Annotation::Hdr(v) => try_assign(&mut set.hdr, *v),
                Annotation::EnumLabel(v) => try_assign(&mut set.enum_label, v.clone()),
            };
            if occupied && !duplicates.contains(&kind) {
                duplicates.push(kind);
            }
        }

        (set, duplicates)
    }
}

/// Stores `value` into `slot` if empty; returns whether the slot was
/// already occupied.
fn try_assign<T>(slot: &mut Option<T>, value: T) -> bool {
    if slot.is_some() {
        true
    } else {
        *slot = Some(value);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_each_kind_once() {
        let (set, duplicates) = AnnotationSet::from_annotations(&[
            Annotation::DisplayName("Filter Size".to_string()),
            Annotation::MinValue(0.0),
            Annotation::MaxValue(100.0),
            Annotation::StepSize(0.1),
        ]);
        assert!(duplicates.is_empty());
        assert_eq!(set.display_name.as_deref(), Some("Filter Size"));
        assert_eq!(set.min_value, Some(0.0));
        assert_eq!(set.max_value, Some(100.0));
        assert_eq!(set.step_size, Some(0.1));
        assert_eq!(set.help_text, None);
        assert_eq!(set.use_as_shader_constant, None);
    }

    #[test]
    fn first_occurrence_wins_and_duplicate_is_reported() {
        let (set, duplicates) = AnnotationSet::from_annotations(&[
            Annotation::DisplayName("First".to_string()),
            Annotation::DisplayName("Second".to_string()),
            Annotation::DisplayName("Third".to_string()),
        ]);
        assert_eq!(set.display_name.as_deref(), Some("First"));
        assert_eq!(duplicates, vec![AnnotationKind::DisplayName]);
    }

    #[test]
    fn empty_list_yields_default_set() {
        let (set, duplicates) = AnnotationSet::from_annotations(&[]);
        assert_eq!(set, AnnotationSet::default());
        assert!(duplicates.is_empty());
    }
}
