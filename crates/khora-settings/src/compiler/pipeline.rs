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

//! The single-pass schema compilation pipeline.
//!
//! Enum tables and field metadata are resolved for the whole schema first,
//! collecting every authoring violation; only a violation-free schema goes
//! on to layout packing and descriptor generation. There is no partial
//! output: one error anywhere suppresses every derived artifact.

use super::codegen::emit_hlsl_cbuffer;
use super::enum_table::{resolve_enum_table, EnumLabelTable};
use super::layout::{pack_constant_layout, BufferLayout};
use super::metadata::{extract_metadata, FieldMetadata};
use super::ui::{generate_ui_descriptors, UiDescriptor};
use crate::error::{CompileError, SchemaError};
use crate::schema::{SettingType, SettingsSchema};
use serde::{Deserialize, Serialize};

/// The derived artifacts for one settings group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledGroup {
    /// Name of the source group.
    pub name: String,
    /// Resolved metadata for every field, in declaration order.
    pub metadata: Vec<FieldMetadata>,
    /// Packed constant-buffer layout of the shader-visible fields.
    pub layout: BufferLayout,
    /// Editor descriptors for every field, in declaration order.
    pub ui: Vec<UiDescriptor>,
}

impl CompiledGroup {
    /// Emits this group's HLSL constant-buffer declaration bound to
    /// register `b{register}`.
    pub fn emit_hlsl(&self, register: u32) -> String {
        emit_hlsl_cbuffer(&self.name, &self.metadata, &self.layout, register)
    }
}

/// Every artifact derived from one schema compile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledSchema {
    /// One compiled group per source group, in declaration order.
    pub groups: Vec<CompiledGroup>,
    /// One label table per declared enum type, in declaration order.
    pub enum_tables: Vec<EnumLabelTable>,
}

impl CompiledSchema {
    /// Looks up a compiled group by name.
    pub fn group(&self, name: &str) -> Option<&CompiledGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Looks up an enum label table by enum type name.
    pub fn enum_table(&self, name: &str) -> Option<&EnumLabelTable> {
        self.enum_tables.iter().find(|t| t.enum_type == name)
    }
}

/// Compiles a settings schema into its derived artifacts.
///
/// Pure and deterministic: recompiling an unchanged schema reproduces
/// byte-identical layouts and structurally identical descriptors. All
/// violations across the whole schema are collected into one
/// [`CompileError`]; nothing is produced in that case.
pub fn compile(schema: &SettingsSchema) -> Result<CompiledSchema, CompileError> {
    let mut errors: Vec<SchemaError> = Vec::new();

    let mut enum_tables = Vec::with_capacity(schema.enums.len());
    for decl in &schema.enums {
        let (table, table_errors) = resolve_enum_table(decl);
        errors.extend(table_errors);
        enum_tables.push(table);
    }

    let mut extracted: Vec<(String, Vec<FieldMetadata>)> = Vec::with_capacity(schema.groups.len());
    for group in &schema.groups {
        let mut metadata = Vec::with_capacity(group.fields.len());
        for field in &group.fields {
            let (meta, field_errors) = extract_metadata(&group.name, field);
            errors.extend(field_errors);

            if let SettingType::Enum { enum_type } = &field.value_type {
                if schema.find_enum(enum_type).is_none() {
                    errors.push(SchemaError::UnknownEnumType {
                        group: group.name.clone(),
                        field: field.identifier.clone(),
                        enum_type: enum_type.clone(),
                    });
                }
            }

            metadata.push(meta);
        }
        extracted.push((group.name.clone(), metadata));
    }

    if !errors.is_empty() {
        return Err(CompileError::new(errors));
    }

    let groups: Vec<CompiledGroup> = extracted
        .into_iter()
        .map(|(name, metadata)| {
            let layout = pack_constant_layout(&metadata);
            let ui = generate_ui_descriptors(&metadata, &enum_tables);
            CompiledGroup {
                name,
                metadata,
                layout,
                ui,
            }
        })
        .collect();

    log::debug!(
        "compiled settings schema: {} group(s), {} enum type(s), {} constant byte(s)",
        groups.len(),
        enum_tables.len(),
        groups.iter().map(|g| g.layout.total_size).sum::<u32>()
    );

    Ok(CompiledSchema {
        groups,
        enum_tables,
    })
}
