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

//! The declarative input consumed by the settings compiler: ordered field
//! declarations grouped into named settings groups, plus the enum type
//! declarations those fields reference.
//!
//! Declarations are constructed once (statically, or by a schema loader
//! outside this crate) and never mutated. Declaration order inside a group
//! is significant: it drives constant-buffer packing and editor ordering.

use super::annotation::Annotation;
use super::value::{SettingType, SettingValue};
use serde::{Deserialize, Serialize};

/// One settings field: identifier, declared type, default value, and the
/// raw ordered annotation list attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    /// Stable identifier of the field, unique within its group.
    pub identifier: String,
    /// The declared value type.
    pub value_type: SettingType,
    /// Initial value a settings instance starts from.
    pub default: SettingValue,
    /// Annotations as attached, in source order, duplicates included.
    pub annotations: Vec<Annotation>,
}

impl FieldDeclaration {
    /// Creates a declaration with no annotations attached.
    pub fn new(
        identifier: impl Into<String>,
        value_type: SettingType,
        default: SettingValue,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            value_type,
            default,
            annotations: Vec::new(),
        }
    }

    /// Appends one annotation, preserving attachment order.
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A named, ordered collection of field declarations.
///
/// Each group compiles to its own constant buffer; the group name also
/// names the emitted shader structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsGroup {
    /// Name of the group, unique within the schema.
    pub name: String,
    /// The fields, in declaration order.
    pub fields: Vec<FieldDeclaration>,
}

impl SettingsGroup {
    /// Creates an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field declaration, preserving declaration order.
    pub fn field(mut self, field: FieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }
}

/// One member of an enum declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMember {
    /// Bare identifier of the member.
    pub identifier: String,
    /// Optional display label; the bare identifier is used when absent.
    pub label: Option<String>,
}

impl EnumMember {
    /// A member that displays as its bare identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            label: None,
        }
    }

    /// A member with an explicit display label.
    pub fn labeled(identifier: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            label: Some(label.into()),
        }
    }
}

/// An enum type declaration: a name plus its ordered member list.
///
/// Member ordinals are implicit: a member's position in this list is the
/// value stored by enum-typed settings and uploaded to the GPU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDecl {
    /// Name of the enum type, unique within the schema.
    pub name: String,
    /// The members, in declaration order.
    pub members: Vec<EnumMember>,
}

impl EnumDecl {
    /// Creates an enum declaration from its ordered member list.
    pub fn new(name: impl Into<String>, members: Vec<EnumMember>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }
}

/// The full compiler input: ordered settings groups plus the enum types
/// they reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsSchema {
    /// The settings groups, in declaration order.
    pub groups: Vec<SettingsGroup>,
    /// The enum type declarations, in declaration order.
    pub enums: Vec<EnumDecl>,
}

impl SettingsSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a settings group.
    pub fn group(mut self, group: SettingsGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Appends an enum type declaration.
    pub fn enum_type(mut self, decl: EnumDecl) -> Self {
        self.enums.push(decl);
        self
    }

    /// Looks up an enum declaration by name.
    pub fn find_enum(&self, name: &str) -> Option<&EnumDecl> {
        self.enums.iter().find(|e| e.name == name)
    }
}
