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

//! Generates toolkit-independent editor descriptors from resolved field
//! metadata.
//!
//! Descriptors are regenerated on every compile and own all their data;
//! they hold no references back to a live settings instance.

use super::enum_table::EnumLabelTable;
use super::metadata::FieldMetadata;
use crate::schema::SettingType;
use serde::{Deserialize, Serialize};

/// The widget an editor should render for one setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControlKind {
    /// A checkbox for a boolean field.
    Toggle,
    /// A bounded slider for a numeric field. `integral` distinguishes
    /// integer sliders from float sliders.
    Slider {
        /// Lower bound of the slider.
        min: f32,
        /// Upper bound of the slider.
        max: f32,
        /// Slider increment; 0 leaves the increment to the editor.
        step: f32,
        /// Whether the underlying field is integer-valued.
        integral: bool,
    },
    /// A color picker for an HDR color field.
    Color {
        /// Whether components may exceed 1.0.
        hdr: bool,
    },
    /// A unit-direction widget for a non-color 3-component vector.
    Direction,
    /// An orientation (quaternion) widget for a 4-component vector.
    Orientation,
    /// A dropdown over an enum type's resolved labels. The table is a
    /// per-compile copy owned by the descriptor.
    Dropdown {
        /// The (ordinal, label) entries to offer.
        table: EnumLabelTable,
    },
}

/// Everything an editor needs to render one setting without per-field
/// custom code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiDescriptor {
    /// Identifier of the described field.
    pub identifier: String,
    /// Text shown next to the widget.
    pub display_name: String,
    /// Tooltip / help text; may be empty.
    pub help_text: String,
    /// Editor sub-group the widget is sorted under; may be empty.
    pub group: String,
    /// The widget to render.
    pub control: ControlKind,
}

/// Generates one descriptor per field, in declaration order.
///
/// All fields are covered, shader-visible or not. The metadata must have
/// passed validation: an enum-typed field whose type is missing from
/// `tables` is a defect in the caller, not a schema error, and panics.
pub fn generate_ui_descriptors(
    metadata: &[FieldMetadata],
    tables: &[EnumLabelTable],
) -> Vec<UiDescriptor> {
    metadata
        .iter()
        .map(|meta| UiDescriptor {
            identifier: meta.identifier.clone(),
            display_name: meta.display_name.clone(),
            help_text: meta.help_text.clone(),
            group: meta.group.clone(),
            control: control_for(meta, tables),
        })
        .collect()
}

/// The fixed declared-type → widget mapping.
fn control_for(meta: &FieldMetadata, tables: &[EnumLabelTable]) -> ControlKind {
    match &meta.value_type {
        SettingType::Bool => ControlKind::Toggle,
        SettingType::Int | SettingType::Float => ControlKind::Slider {
            min: meta.min_value,
            max: meta.max_value,
            step: meta.step_size,
            integral: meta.value_type == SettingType::Int,
        },
        SettingType::Vector3 => {
            if meta.is_hdr {
                ControlKind::Color { hdr: true }
            } else {
                ControlKind::Direction
            }
        }
        SettingType::Vector4 => ControlKind::Orientation,
        SettingType::Enum { enum_type } => {
            let table = tables
                .iter()
                .find(|t| t.enum_type == *enum_type)
                .unwrap_or_else(|| {
                    panic!("unvalidated metadata: enum type '{enum_type}' has no label table")
                });
            ControlKind::Dropdown {
                table: table.clone(),
            }
        }
    }
}
