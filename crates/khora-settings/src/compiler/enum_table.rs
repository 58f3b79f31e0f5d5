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

//! Resolves per-enum-type display label tables.

use crate::error::SchemaError;
use crate::schema::EnumDecl;
use serde::{Deserialize, Serialize};

/// One resolved table row: the member's ordinal and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumLabelEntry {
    /// The member's position in its enum declaration; also the value an
    /// enum-typed setting stores and uploads.
    pub ordinal: u32,
    /// The resolved display label.
    pub label: String,
}

/// The ordered (ordinal, label) table for one enum type.
///
/// Consumed by dropdown descriptors and by serializers that need stable
/// text labels for enum values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumLabelTable {
    /// Name of the enum type this table describes.
    pub enum_type: String,
    /// One entry per member, in declaration order.
    pub entries: Vec<EnumLabelEntry>,
}

impl EnumLabelTable {
    /// Looks up the label for a member ordinal.
    pub fn label(&self, ordinal: u32) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.ordinal == ordinal)
            .map(|e| e.label.as_str())
    }
}

/// Resolves an enum declaration into its label table.
///
/// Each member's label is its `EnumLabel` value when present, else its bare
/// identifier. The table is always produced in declaration order; any label
/// shared by more than one member after defaulting is reported (once per
/// offending label) in the returned violation list.
pub fn resolve_enum_table(decl: &EnumDecl) -> (EnumLabelTable, Vec<SchemaError>) {
    let mut entries = Vec::with_capacity(decl.members.len());
    let mut errors = Vec::new();

    for (ordinal, member) in decl.members.iter().enumerate() {
        let label = member
            .label
            .clone()
            .unwrap_or_else(|| member.identifier.clone());
        entries.push(EnumLabelEntry {
            ordinal: ordinal as u32,
            label,
        });
    }

    for (i, entry) in entries.iter().enumerate() {
        let seen_before = entries[..i].iter().any(|e| e.label == entry.label);
        let already_reported = errors.iter().any(|e| {
            matches!(e, SchemaError::DuplicateEnumLabel { label, .. } if *label == entry.label)
        });
        if seen_before && !already_reported {
            errors.push(SchemaError::DuplicateEnumLabel {
                enum_type: decl.name.clone(),
                label: entry.label.clone(),
            });
        }
    }

    (
        EnumLabelTable {
            enum_type: decl.name.clone(),
            entries,
        },
        errors,
    )
}
