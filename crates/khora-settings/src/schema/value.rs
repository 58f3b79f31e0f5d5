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

//! The closed set of value types a setting can declare, and the tagged
//! value union that carries a setting's data.

use crate::math::{Vec3, Vec4};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The declared type of a settings field.
///
/// Enum-typed fields reference their enum declaration by name; the schema
/// compiler verifies the reference resolves to a declared enum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingType {
    /// A boolean flag.
    Bool,
    /// A 32-bit signed integer.
    Int,
    /// A 32-bit float.
    Float,
    /// A member of the named enum type.
    Enum {
        /// Name of the enum declaration this field draws its values from.
        enum_type: String,
    },
    /// A 3-component float vector (direction or color).
    Vector3,
    /// A 4-component float vector (orientation).
    Vector4,
}

impl SettingType {
    /// The number of bytes this type occupies inside a packed constant
    /// buffer. Booleans and enums widen to 32 bits on the GPU.
    pub fn constant_size(&self) -> u32 {
        match self {
            SettingType::Bool | SettingType::Int | SettingType::Float | SettingType::Enum { .. } => {
                4
            }
            SettingType::Vector3 => 12,
            SettingType::Vector4 => 16,
        }
    }

    /// Whether this type accepts numeric range annotations (min/max/step).
    pub fn is_numeric(&self) -> bool {
        matches!(self, SettingType::Int | SettingType::Float)
    }
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingType::Bool => write!(f, "boolean"),
            SettingType::Int => write!(f, "integer"),
            SettingType::Float => write!(f, "float"),
            SettingType::Enum { enum_type } => write!(f, "enum '{enum_type}'"),
            SettingType::Vector3 => write!(f, "3-component vector"),
            SettingType::Vector4 => write!(f, "4-component vector"),
        }
    }
}

/// A setting's value, tagged to match [`SettingType`].
///
/// Enum values are stored as the member's ordinal within its enum
/// declaration, which is also the integer uploaded to the GPU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SettingValue {
    /// A boolean flag value.
    Bool(bool),
    /// A 32-bit integer value.
    Int(i32),
    /// A 32-bit float value.
    Float(f32),
    /// An enum member ordinal.
    Enum(u32),
    /// A 3-component vector value.
    Vector3(Vec3),
    /// A 4-component vector value.
    Vector4(Vec4),
}

impl SettingValue {
    /// Whether this value is an inhabitant of `ty`.
    ///
    /// Enum values carry only an ordinal, so any enum-typed field accepts
    /// them; the ordinal's range is the enum declaration's concern.
    pub fn matches(&self, ty: &SettingType) -> bool {
        matches!(
            (self, ty),
            (SettingValue::Bool(_), SettingType::Bool)
                | (SettingValue::Int(_), SettingType::Int)
                | (SettingValue::Float(_), SettingType::Float)
                | (SettingValue::Enum(_), SettingType::Enum { .. })
                | (SettingValue::Vector3(_), SettingType::Vector3)
                | (SettingValue::Vector4(_), SettingType::Vector4)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_sizes() {
        assert_eq!(SettingType::Bool.constant_size(), 4);
        assert_eq!(SettingType::Int.constant_size(), 4);
        assert_eq!(SettingType::Float.constant_size(), 4);
        assert_eq!(
            SettingType::Enum {
                enum_type: "ShadowMode".to_string()
            }
            .constant_size(),
            4
        );
        assert_eq!(SettingType::Vector3.constant_size(), 12);
        assert_eq!(SettingType::Vector4.constant_size(), 16);
    }

    #[test]
    fn numeric_types() {
        assert!(SettingType::Int.is_numeric());
        assert!(SettingType::Float.is_numeric());
        assert!(!SettingType::Bool.is_numeric());
        assert!(!SettingType::Vector3.is_numeric());
    }

    #[test]
    fn value_type_agreement() {
        let ty = SettingType::Enum {
            enum_type: "Scene".to_string(),
        };
        assert!(SettingValue::Enum(2).matches(&ty));
        assert!(!SettingValue::Int(2).matches(&ty));
        assert!(SettingValue::Vector3(Vec3::ONE).matches(&SettingType::Vector3));
        assert!(!SettingValue::Vector3(Vec3::ONE).matches(&SettingType::Vector4));
    }
}
