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

//! Emits the shader-side declaration mirroring a packed constant buffer.
//!
//! The emitted `cbuffer` block lists members in layout order and relies on
//! HLSL's native register packing, which is the same rule the layout
//! packer applies; the two therefore agree on every offset. A debug
//! assertion re-derives the offsets while emitting to keep them honest.

use super::layout::{BufferLayout, REGISTER_SIZE};
use super::metadata::FieldMetadata;
use crate::schema::SettingType;

/// Emits the HLSL `cbuffer` declaration for one compiled settings group.
///
/// `metadata` and `layout` must come from the same compile. The result is
/// deterministic text ending in a newline; an empty layout produces an
/// empty block.
pub fn emit_hlsl_cbuffer(
    group_name: &str,
    metadata: &[FieldMetadata],
    layout: &BufferLayout,
    register: u32,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "cbuffer {group_name}CBuffer : register(b{register})\n"
    ));
    out.push_str("{\n");

    let mut cursor = 0u32;
    for entry in &layout.entries {
        let meta = metadata
            .iter()
            .find(|m| m.identifier == entry.identifier)
            .unwrap_or_else(|| {
                panic!(
                    "layout entry '{}' has no metadata in group '{group_name}'",
                    entry.identifier
                )
            });

        let remaining = REGISTER_SIZE - cursor % REGISTER_SIZE;
        if entry.byte_size > remaining && remaining != REGISTER_SIZE {
            cursor += remaining;
        }
        debug_assert_eq!(
            cursor, entry.byte_offset,
            "emitted member order disagrees with the packed layout"
        );
        cursor += entry.byte_size;

        out.push_str(&format!(
            "    {} {};\n",
            hlsl_type(&meta.value_type),
            entry.identifier
        ));
    }

    out.push_str("}\n");
    out
}

/// The HLSL spelling of a packed setting type.
fn hlsl_type(value_type: &SettingType) -> &'static str {
    match value_type {
        SettingType::Bool => "bool",
        SettingType::Int | SettingType::Enum { .. } => "int",
        SettingType::Float => "float",
        SettingType::Vector3 => "float3",
        SettingType::Vector4 => "float4",
    }
}
