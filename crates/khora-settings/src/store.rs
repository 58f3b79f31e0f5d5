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

//! Holds live setting values and serializes the shader-visible ones into
//! a packed constant buffer.
//!
//! The store is the mutable counterpart of the immutable schema: it is
//! initialized from declaration defaults and updated by an editor or by
//! application logic, then drained into upload-ready bytes each time the
//! renderer refreshes a group's constant buffer.

use crate::compiler::CompiledGroup;
use crate::schema::{SettingValue, SettingsSchema};
use std::fmt;

/// A misuse of the store's typed accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The addressed group/field pair does not exist in the schema the
    /// store was built from.
    UnknownField {
        /// The group that was addressed.
        group: String,
        /// The field that was addressed.
        field: String,
    },
    /// The assigned value's type does not match the field's declared type.
    TypeMismatch {
        /// The group that was addressed.
        group: String,
        /// The field that was addressed.
        field: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::UnknownField { group, field } => {
                write!(f, "No setting named '{group}.{field}'")
            }
            StoreError::TypeMismatch { group, field } => {
                write!(
                    f,
                    "Value type does not match the declared type of '{group}.{field}'"
                )
            }
        }
    }
}

impl std::error::Error for StoreError {}

struct GroupValues {
    name: String,
    values: Vec<(String, SettingValue)>,
}

/// Live values for every field of a settings schema.
pub struct SettingsStore {
    groups: Vec<GroupValues>,
}

impl SettingsStore {
    /// Creates a store with every field at its declared default value.
    pub fn from_schema(schema: &SettingsSchema) -> Self {
        let groups = schema
            .groups
            .iter()
            .map(|group| GroupValues {
                name: group.name.clone(),
                values: group
                    .fields
                    .iter()
                    .map(|field| (field.identifier.clone(), field.default))
                    .collect(),
            })
            .collect();
        Self { groups }
    }

    /// Reads the current value of a field.
    pub fn get(&self, group: &str, field: &str) -> Option<&SettingValue> {
        self.groups
            .iter()
            .find(|g| g.name == group)?
            .values
            .iter()
            .find(|(identifier, _)| identifier == field)
            .map(|(_, value)| value)
    }

    /// Replaces the current value of a field.
    ///
    /// The new value must be the same type as the current one; values
    /// never change type after initialization from the schema.
    pub fn set(&mut self, group: &str, field: &str, value: SettingValue) -> Result<(), StoreError> {
        let slot = self
            .groups
            .iter_mut()
            .find(|g| g.name == group)
            .and_then(|g| {
                g.values
                    .iter_mut()
                    .find(|(identifier, _)| identifier == field)
            })
            .ok_or_else(|| StoreError::UnknownField {
                group: group.to_string(),
                field: field.to_string(),
            })?;

        if std::mem::discriminant(&slot.1) != std::mem::discriminant(&value) {
            return Err(StoreError::TypeMismatch {
                group: group.to_string(),
                field: field.to_string(),
            });
        }
        slot.1 = value;
        Ok(())
    }

    /// Serializes the group's shader-visible values into an upload-ready
    /// byte buffer of `layout.total_size` bytes, placing each value at its
    /// packed offset. Pad bytes are zero.
    ///
    /// `group` must have been compiled from the same schema this store was
    /// built from; a layout entry with no backing value is a programming
    /// defect and panics.
    pub fn write_constants(&self, group: &CompiledGroup) -> Vec<u8> {
        let mut buffer = vec![0u8; group.layout.total_size as usize];

        for entry in &group.layout.entries {
            let value = self
                .get(&group.name, &entry.identifier)
                .unwrap_or_else(|| {
                    panic!(
                        "layout for '{}' references '{}' which this store does not hold",
                        group.name, entry.identifier
                    )
                });

            let start = entry.byte_offset as usize;
            let end = start + entry.byte_size as usize;
            let target = &mut buffer[start..end];
            match value {
                // Booleans widen to 32 bits, matching the packed size.
                SettingValue::Bool(b) => {
                    target.copy_from_slice(bytemuck::bytes_of(&(*b as u32)))
                }
                SettingValue::Int(i) => target.copy_from_slice(bytemuck::bytes_of(i)),
                SettingValue::Float(x) => target.copy_from_slice(bytemuck::bytes_of(x)),
                SettingValue::Enum(ordinal) => {
                    target.copy_from_slice(bytemuck::bytes_of(ordinal))
                }
                SettingValue::Vector3(v) => target.copy_from_slice(bytemuck::bytes_of(v)),
                SettingValue::Vector4(v) => target.copy_from_slice(bytemuck::bytes_of(v)),
            }
        }

        buffer
    }
}
