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

//! Packs the shader-visible fields of a settings group into a constant
//! buffer layout.
//!
//! The rule is D3D11-style 16-byte register packing: a value may share a
//! register with its predecessors but may never straddle a register
//! boundary it did not begin on. The layout is a pure function of field
//! order and types, so reordering declarations changes offsets.

use super::metadata::FieldMetadata;
use serde::{Deserialize, Serialize};

/// Size in bytes of one constant-buffer register.
pub const REGISTER_SIZE: u32 = 16;

/// The placement of one shader-visible field inside its buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEntry {
    /// Identifier of the packed field.
    pub identifier: String,
    /// Byte offset from the start of the buffer.
    pub byte_offset: u32,
    /// Packed size of the field in bytes.
    pub byte_size: u32,
}

/// The packed layout of one settings group's constant buffer.
///
/// Entry order is the original declaration order of the shader-visible
/// fields; excluded fields leave no trace. `total_size` is rounded up to a
/// whole number of registers, as required for buffer allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferLayout {
    /// One entry per shader-visible field, in declaration order.
    pub entries: Vec<LayoutEntry>,
    /// Total buffer size in bytes, a multiple of [`REGISTER_SIZE`].
    pub total_size: u32,
}

impl BufferLayout {
    /// Looks up the placement of a field by identifier.
    pub fn entry(&self, identifier: &str) -> Option<&LayoutEntry> {
        self.entries.iter().find(|e| e.identifier == identifier)
    }
}

/// Packs the shader-visible subset of `fields` in declaration order.
///
/// `fields` must already be validated metadata; packing itself cannot fail.
/// Fields with `is_shader_constant == false` are transparent: they do not
/// occupy space or influence the offsets of later fields.
pub fn pack_constant_layout(fields: &[FieldMetadata]) -> BufferLayout {
    let mut entries = Vec::new();
    let mut cursor = 0u32;

    for meta in fields.iter().filter(|m| m.is_shader_constant) {
        let size = meta.value_type.constant_size();
        let remaining = REGISTER_SIZE - cursor % REGISTER_SIZE;
        if size > remaining && remaining != REGISTER_SIZE {
            // Would straddle the register boundary: skip the pad bytes.
            cursor += remaining;
        }
        entries.push(LayoutEntry {
            identifier: meta.identifier.clone(),
            byte_offset: cursor,
            byte_size: size,
        });
        cursor += size;
    }

    BufferLayout {
        entries,
        total_size: align_to_register(cursor),
    }
}

/// Rounds `size` up to the next multiple of [`REGISTER_SIZE`].
#[inline]
fn align_to_register(size: u32) -> u32 {
    (size + REGISTER_SIZE - 1) & !(REGISTER_SIZE - 1)
}
