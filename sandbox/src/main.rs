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

// Settings compiler sandbox
// Declares the shadow-mapping sample's settings schema and dumps every
// derived artifact: constant-buffer layouts, HLSL declarations, packed
// default bytes, and editor descriptors.

use anyhow::Result;
use khora_settings::compiler::compile;
use khora_settings::math::{Vec3, Vec4};
use khora_settings::schema::{
    Annotation, EnumDecl, EnumMember, FieldDeclaration, SettingType, SettingValue, SettingsGroup,
    SettingsSchema,
};
use khora_settings::SettingsStore;

fn enum_of(name: &str) -> SettingType {
    SettingType::Enum {
        enum_type: name.to_string(),
    }
}

fn bool_field(identifier: &str, default: bool) -> FieldDeclaration {
    FieldDeclaration::new(identifier, SettingType::Bool, SettingValue::Bool(default))
}

fn float_field(identifier: &str, default: f32) -> FieldDeclaration {
    FieldDeclaration::new(identifier, SettingType::Float, SettingValue::Float(default))
}

/// A float slider bounded by `min..max` with the given increment.
fn slider(identifier: &str, default: f32, min: f32, max: f32, step: f32) -> FieldDeclaration {
    float_field(identifier, default)
        .annotate(Annotation::MinValue(min))
        .annotate(Annotation::MaxValue(max))
        .annotate(Annotation::StepSize(step))
}

fn enum_types() -> Vec<EnumDecl> {
    vec![
        EnumDecl::new(
            "Scene",
            vec![
                EnumMember::new("PowerPlant"),
                EnumMember::new("Tower"),
                EnumMember::new("Columns"),
            ],
        ),
        EnumDecl::new(
            "ShadowMode",
            vec![
                EnumMember::labeled("FixedSizePCF", "Fixed Size PCF"),
                EnumMember::labeled("GridPCF", "Grid PCF"),
                EnumMember::labeled("RandomDiscPCF", "Random Disc PCF"),
                EnumMember::labeled("OptimizedPCF", "Optimized PCF"),
                EnumMember::labeled("VSM", "VSM"),
                EnumMember::labeled("EVSM2", "EVSM 2 Component"),
                EnumMember::labeled("EVSM4", "EVSM 4 Component"),
                EnumMember::labeled("MSMHamburger", "MSM Hamburger"),
                EnumMember::labeled("MSMHausdorff", "MSM Hausdorff"),
            ],
        ),
        EnumDecl::new(
            "PartitionMode",
            vec![
                EnumMember::new("Manual"),
                EnumMember::new("Logarithmic"),
                EnumMember::new("PSSM"),
            ],
        ),
        EnumDecl::new(
            "FixedFilterSize",
            vec![
                EnumMember::labeled("Filter2x2", "2x2"),
                EnumMember::labeled("Filter3x3", "3x3"),
                EnumMember::labeled("Filter5x5", "5x5"),
                EnumMember::labeled("Filter7x7", "7x7"),
                EnumMember::labeled("Filter9x9", "9x9"),
            ],
        ),
        EnumDecl::new(
            "ShadowMapSize",
            vec![
                EnumMember::labeled("SMSize512", "512x512"),
                EnumMember::labeled("SMSize1024", "1024x1024"),
                EnumMember::labeled("SMSize2048", "2048x2048"),
            ],
        ),
        EnumDecl::new(
            "ShadowMSAA",
            vec![
                EnumMember::labeled("MSAANone", "None"),
                EnumMember::labeled("MSAA2x", "2x"),
                EnumMember::labeled("MSAA4x", "4x"),
                EnumMember::labeled("MSAA8x", "8x"),
            ],
        ),
        EnumDecl::new(
            "SMFormat",
            vec![
                EnumMember::labeled("SM16Bit", "16-bit"),
                EnumMember::labeled("SM32Bit", "32-bit"),
            ],
        ),
        EnumDecl::new(
            "ShadowAnisotropy",
            vec![
                EnumMember::labeled("Anisotropy1x", "1x"),
                EnumMember::labeled("Anisotropy2x", "2x"),
                EnumMember::labeled("Anisotropy4x", "4x"),
                EnumMember::labeled("Anisotropy8x", "8x"),
                EnumMember::labeled("Anisotropy16x", "16x"),
            ],
        ),
    ]
}

fn scene_controls() -> SettingsGroup {
    SettingsGroup::new("SceneControls")
        .field(
            FieldDeclaration::new("CurrentScene", enum_of("Scene"), SettingValue::Enum(0))
                .annotate(Annotation::DisplayName("Current Scene".to_string()))
                .annotate(Annotation::HelpText("The scene to render".to_string()))
                .annotate(Annotation::UseAsShaderConstant(false)),
        )
        .field(
            bool_field("AnimateLight", false)
                .annotate(Annotation::DisplayName("Animate Light".to_string()))
                .annotate(Annotation::HelpText(
                    "Automatically rotates the light about the Y axis".to_string(),
                ))
                .annotate(Annotation::UseAsShaderConstant(false)),
        )
        .field(
            FieldDeclaration::new(
                "LightDirection",
                SettingType::Vector3,
                SettingValue::Vector3(Vec3::ONE),
            )
            .annotate(Annotation::DisplayName("Light Direction".to_string()))
            .annotate(Annotation::HelpText("The direction of the light".to_string())),
        )
        .field(
            FieldDeclaration::new(
                "LightColor",
                SettingType::Vector3,
                SettingValue::Vector3(Vec3::new(10.0, 8.0, 5.0)),
            )
            .annotate(Annotation::DisplayName("Light Color".to_string()))
            .annotate(Annotation::HelpText("The color of the light".to_string()))
            .annotate(Annotation::Hdr(true)),
        )
        .field(
            FieldDeclaration::new(
                "CharacterOrientation",
                SettingType::Vector4,
                SettingValue::Vector4(Vec4::IDENTITY),
            )
            .annotate(Annotation::DisplayName("Character Orientation".to_string()))
            .annotate(Annotation::HelpText(
                "The orientation of the character model".to_string(),
            ))
            .annotate(Annotation::UseAsShaderConstant(false)),
        )
        .field(
            bool_field("EnableAlbedoMap", true)
                .annotate(Annotation::DisplayName("Enable Albedo Map".to_string()))
                .annotate(Annotation::HelpText(
                    "Enables using albedo maps when rendering the scene".to_string(),
                )),
        )
}

fn shadows() -> SettingsGroup {
    SettingsGroup::new("Shadows")
        .field(
            FieldDeclaration::new("ShadowMode", enum_of("ShadowMode"), SettingValue::Enum(0))
                .annotate(Annotation::DisplayName("Shadow Mode".to_string()))
                .annotate(Annotation::HelpText(
                    "The shadow mapping technique to use".to_string(),
                ))
                .annotate(Annotation::UseAsShaderConstant(false)),
        )
        .field(
            FieldDeclaration::new(
                "ShadowMapSize",
                enum_of("ShadowMapSize"),
                SettingValue::Enum(2),
            )
            .annotate(Annotation::DisplayName("Shadow Map Size".to_string()))
            .annotate(Annotation::HelpText("The size of the shadow map".to_string())),
        )
        .field(
            FieldDeclaration::new(
                "FixedFilterSize",
                enum_of("FixedFilterSize"),
                SettingValue::Enum(0),
            )
            .annotate(Annotation::DisplayName("Fixed Filter Size".to_string()))
            .annotate(Annotation::HelpText(
                "Size of the PCF kernel used for Fixed Sized PCF shadow mode".to_string(),
            ))
            .annotate(Annotation::UseAsShaderConstant(false)),
        )
        .field(
            slider("FilterSize", 0.0, 0.0, 100.0, 0.1)
                .annotate(Annotation::DisplayName("Filter Size".to_string()))
                .annotate(Annotation::HelpText(
                    "Width of the filter kernel used for PCF or VSM filtering".to_string(),
                )),
        )
        .field(
            bool_field("VisualizeCascades", false)
                .annotate(Annotation::DisplayName("Visualize Cascades".to_string()))
                .annotate(Annotation::Group("Cascades".to_string()))
                .annotate(Annotation::UseAsShaderConstant(false)),
        )
        .field(
            bool_field("StabilizeCascades", false)
                .annotate(Annotation::DisplayName("Stabilize Cascades".to_string()))
                .annotate(Annotation::Group("Cascades".to_string()))
                .annotate(Annotation::HelpText(
                    "Keeps consistent sizes for each cascade, and snaps each cascade so that \
                     they move in texel-sized increments"
                        .to_string(),
                )),
        )
        .field(
            bool_field("FilterAcrossCascades", false)
                .annotate(Annotation::DisplayName("Filter Across Cascades".to_string()))
                .annotate(Annotation::Group("Cascades".to_string()))
                .annotate(Annotation::UseAsShaderConstant(false)),
        )
        .field(
            bool_field("RandomizeDiscOffsets", false)
                .annotate(Annotation::DisplayName("Randomize Disc Offsets".to_string()))
                .annotate(Annotation::UseAsShaderConstant(false)),
        )
        .field(
            FieldDeclaration::new("NumDiscSamples", SettingType::Int, SettingValue::Int(16))
                .annotate(Annotation::DisplayName("Num Disc Samples".to_string()))
                .annotate(Annotation::HelpText(
                    "Number of samples to take when using randomized disc PCF".to_string(),
                ))
                .annotate(Annotation::MinValue(1.0))
                .annotate(Annotation::MaxValue(64.0)),
        )
        .field(
            bool_field("AutoComputeDepthBounds", false)
                .annotate(Annotation::DisplayName("Auto-Compute Depth Bounds".to_string()))
                .annotate(Annotation::Group("Cascades".to_string())),
        )
        .field(
            FieldDeclaration::new("ReadbackLatency", SettingType::Int, SettingValue::Int(1))
                .annotate(Annotation::DisplayName(
                    "Depth Bounds Readback Latency".to_string(),
                ))
                .annotate(Annotation::MinValue(0.0))
                .annotate(Annotation::MaxValue(3.0))
                .annotate(Annotation::UseAsShaderConstant(false)),
        )
        .field(
            bool_field("GPUSceneSubmission", false)
                .annotate(Annotation::DisplayName("GPU Scene Submission".to_string()))
                .annotate(Annotation::UseAsShaderConstant(false)),
        )
        .field(
            slider("MinCascadeDistance", 0.0, 0.0, 0.1, 0.001)
                .annotate(Annotation::DisplayName("Min Cascade Distance".to_string()))
                .annotate(Annotation::Group("Cascades".to_string())),
        )
        .field(
            slider("MaxCascadeDistance", 1.0, 0.0, 1.0, 0.01)
                .annotate(Annotation::DisplayName("Max Cascade Distance".to_string()))
                .annotate(Annotation::Group("Cascades".to_string())),
        )
        .field(
            FieldDeclaration::new(
                "PartitionMode",
                enum_of("PartitionMode"),
                SettingValue::Enum(0),
            )
            .annotate(Annotation::DisplayName("CSM Partition Model".to_string()))
            .annotate(Annotation::HelpText(
                "Controls how the viewable depth range is partitioned into cascades".to_string(),
            ))
            .annotate(Annotation::Group("Cascades".to_string())),
        )
        .field(
            slider("SplitDistance0", 0.05, 0.0, 1.0, 0.01)
                .annotate(Annotation::DisplayName("Split Distance 0".to_string()))
                .annotate(Annotation::Group("Cascades".to_string())),
        )
        .field(
            slider("SplitDistance1", 0.15, 0.0, 1.0, 0.01)
                .annotate(Annotation::DisplayName("Split Distance 1".to_string()))
                .annotate(Annotation::Group("Cascades".to_string())),
        )
        .field(
            slider("SplitDistance2", 0.5, 0.0, 1.0, 0.01)
                .annotate(Annotation::DisplayName("Split Distance 2".to_string()))
                .annotate(Annotation::Group("Cascades".to_string())),
        )
        .field(
            slider("SplitDistance3", 1.0, 0.0, 1.0, 0.01)
                .annotate(Annotation::DisplayName("Split Distance 3".to_string()))
                .annotate(Annotation::Group("Cascades".to_string())),
        )
        .field(
            slider("PSSMLambda", 1.0, 0.0, 1.0, 0.01)
                .annotate(Annotation::DisplayName("PSSM Lambda".to_string()))
                .annotate(Annotation::Group("Cascades".to_string())),
        )
        .field(
            bool_field("UsePlaneDepthBias", true)
                .annotate(Annotation::DisplayName(
                    "Use Receiver Plane Depth Bias".to_string(),
                ))
                .annotate(Annotation::UseAsShaderConstant(false)),
        )
        .field(
            slider("Bias", 0.005, 0.0, 0.01, 0.0001)
                .annotate(Annotation::DisplayName("Bias".to_string()))
                .annotate(Annotation::HelpText(
                    "Bias used for shadow map depth comparisons".to_string(),
                )),
        )
        .field(
            slider("VSMBias", 0.01, 0.0, 100.0, 0.001)
                .annotate(Annotation::DisplayName("VSM Bias (x100)".to_string())),
        )
        .field(
            slider("OffsetScale", 0.0, 0.0, 100.0, 0.1)
                .annotate(Annotation::DisplayName("Offset Scale".to_string()))
                .annotate(Annotation::HelpText(
                    "Shadow receiver offset along the surface normal direction".to_string(),
                )),
        )
        .field(
            FieldDeclaration::new("ShadowMSAA", enum_of("ShadowMSAA"), SettingValue::Enum(0))
                .annotate(Annotation::DisplayName("Shadow MSAA".to_string()))
                .annotate(Annotation::UseAsShaderConstant(false)),
        )
        .field(
            FieldDeclaration::new("SMFormat", enum_of("SMFormat"), SettingValue::Enum(1))
                .annotate(Annotation::DisplayName("VSM/MSM Format".to_string())),
        )
        .field(
            FieldDeclaration::new(
                "ShadowAnisotropy",
                enum_of("ShadowAnisotropy"),
                SettingValue::Enum(0),
            )
            .annotate(Annotation::DisplayName("Shadow Anisotropy".to_string()))
            .annotate(Annotation::UseAsShaderConstant(false)),
        )
        .field(
            bool_field("EnableShadowMips", false)
                .annotate(Annotation::DisplayName("Enable Shadow Mip Maps".to_string()))
                .annotate(Annotation::UseAsShaderConstant(false)),
        )
        .field(
            slider("PositiveExponent", 40.0, 0.0, 100.0, 0.1)
                .annotate(Annotation::DisplayName("EVSM Positive Exponent".to_string())),
        )
        .field(
            slider("NegativeExponent", 5.0, 0.0, 100.0, 0.1)
                .annotate(Annotation::DisplayName("EVSM Negative Exponent".to_string())),
        )
        .field(
            slider("LightBleedingReduction", 0.0, 0.0, 1.0, 0.01)
                .annotate(Annotation::DisplayName("Light Bleeding Reduction".to_string())),
        )
        .field(
            slider("MSMDepthBias", 0.0, 0.0, 100.0, 0.001)
                .annotate(Annotation::DisplayName("MSM Depth Bias (x1000)".to_string())),
        )
        .field(
            slider("MSMMomentBias", 0.003, 0.0, 100.0, 0.001)
                .annotate(Annotation::DisplayName("MSM Moment Bias (x1000)".to_string())),
        )
}

fn post_processing() -> SettingsGroup {
    SettingsGroup::new("PostProcessing")
        .field(
            slider("BloomThreshold", 3.0, 0.0, 20.0, 0.01)
                .annotate(Annotation::DisplayName("Bloom Exposure Offset".to_string())),
        )
        .field(
            slider("BloomMagnitude", 1.0, 0.0, 2.0, 0.01)
                .annotate(Annotation::DisplayName("Bloom Magnitude".to_string())),
        )
        .field(
            slider("BloomBlurSigma", 0.8, 0.5, 1.5, 0.01)
                .annotate(Annotation::DisplayName("Bloom Blur Sigma".to_string())),
        )
        .field(
            slider("KeyValue", 0.115, 0.0, 0.5, 0.01)
                .annotate(Annotation::DisplayName("Auto-Exposure Key Value".to_string())),
        )
        .field(
            slider("AdaptationRate", 0.5, 0.0, 4.0, 0.01)
                .annotate(Annotation::DisplayName("Adaptation Rate".to_string())),
        )
}

fn shadow_sample_schema() -> SettingsSchema {
    let mut schema = SettingsSchema::new()
        .group(scene_controls())
        .group(shadows())
        .group(post_processing());
    for decl in enum_types() {
        schema = schema.enum_type(decl);
    }
    schema
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let schema = shadow_sample_schema();
    let compiled = compile(&schema)?;
    let store = SettingsStore::from_schema(&schema);

    for (register, group) in compiled.groups.iter().enumerate() {
        log::info!(
            "group '{}': {} field(s), {} shader constant(s), {} byte buffer",
            group.name,
            group.metadata.len(),
            group.layout.entries.len(),
            group.layout.total_size
        );
        for entry in &group.layout.entries {
            log::info!(
                "  {:>3}..{:<3} {}",
                entry.byte_offset,
                entry.byte_offset + entry.byte_size,
                entry.identifier
            );
        }

        println!("{}", group.emit_hlsl(register as u32));

        let bytes = store.write_constants(group);
        log::info!("packed {} default byte(s) for '{}'", bytes.len(), group.name);
    }

    let descriptors: Vec<_> = compiled.groups.iter().map(|g| &g.ui).collect();
    println!("{}", serde_json::to_string_pretty(&descriptors)?);
    Ok(())
}
