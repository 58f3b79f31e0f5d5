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

use anyhow::Result;
use khora_settings::compiler::{compile, ControlKind};
use khora_settings::error::SchemaError;
use khora_settings::math::{Vec3, Vec4};
use khora_settings::schema::{
    Annotation, EnumDecl, EnumMember, FieldDeclaration, SettingType, SettingValue, SettingsGroup,
    SettingsSchema,
};
use khora_settings::store::SettingsStore;

fn enum_of(name: &str) -> SettingType {
    SettingType::Enum {
        enum_type: name.to_string(),
    }
}

/// A cut of a shadow-mapping sample's settings: three groups plus the enum
/// types they reference.
fn shadow_sample_schema() -> SettingsSchema {
    SettingsSchema::new()
        .enum_type(EnumDecl::new(
            "ShadowMode",
            vec![
                EnumMember::labeled("FixedSizePCF", "Fixed Size PCF"),
                EnumMember::labeled("GridPCF", "Grid PCF"),
                EnumMember::labeled("RandomDiscPCF", "Random Disc PCF"),
                EnumMember::labeled("OptimizedPCF", "Optimized PCF"),
                EnumMember::labeled("VSM", "VSM"),
            ],
        ))
        .enum_type(EnumDecl::new(
            "ShadowMapSize",
            vec![
                EnumMember::labeled("SMSize512", "512x512"),
                EnumMember::labeled("SMSize1024", "1024x1024"),
                EnumMember::labeled("SMSize2048", "2048x2048"),
            ],
        ))
        .enum_type(EnumDecl::new(
            "Scene",
            vec![
                EnumMember::new("PowerPlant"),
                EnumMember::new("Tower"),
                EnumMember::new("Columns"),
            ],
        ))
        .group(
            SettingsGroup::new("SceneControls")
                .field(
                    FieldDeclaration::new("CurrentScene", enum_of("Scene"), SettingValue::Enum(0))
                        .annotate(Annotation::DisplayName("Current Scene".to_string()))
                        .annotate(Annotation::HelpText("The scene to render".to_string()))
                        .annotate(Annotation::UseAsShaderConstant(false)),
                )
                .field(
                    FieldDeclaration::new("AnimateLight", SettingType::Bool, SettingValue::Bool(false))
                        .annotate(Annotation::DisplayName("Animate Light".to_string()))
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
                    .annotate(Annotation::Hdr(true)),
                )
                .field(
                    FieldDeclaration::new(
                        "CharacterOrientation",
                        SettingType::Vector4,
                        SettingValue::Vector4(Vec4::IDENTITY),
                    )
                    .annotate(Annotation::UseAsShaderConstant(false)),
                )
                .field(FieldDeclaration::new(
                    "EnableAlbedoMap",
                    SettingType::Bool,
                    SettingValue::Bool(true),
                )),
        )
        .group(
            SettingsGroup::new("Shadows")
                .field(
                    FieldDeclaration::new("ShadowMode", enum_of("ShadowMode"), SettingValue::Enum(0))
                        .annotate(Annotation::DisplayName("Shadow Mode".to_string()))
                        .annotate(Annotation::UseAsShaderConstant(false)),
                )
                .field(FieldDeclaration::new(
                    "ShadowMapSize",
                    enum_of("ShadowMapSize"),
                    SettingValue::Enum(2),
                ))
                .field(
                    FieldDeclaration::new("FilterSize", SettingType::Float, SettingValue::Float(0.0))
                        .annotate(Annotation::MinValue(0.0))
                        .annotate(Annotation::MaxValue(100.0))
                        .annotate(Annotation::StepSize(0.1)),
                )
                .field(
                    FieldDeclaration::new(
                        "VisualizeCascades",
                        SettingType::Bool,
                        SettingValue::Bool(false),
                    )
                    .annotate(Annotation::Group("Cascades".to_string()))
                    .annotate(Annotation::UseAsShaderConstant(false)),
                )
                .field(
                    FieldDeclaration::new(
                        "StabilizeCascades",
                        SettingType::Bool,
                        SettingValue::Bool(false),
                    )
                    .annotate(Annotation::Group("Cascades".to_string())),
                )
                .field(
                    FieldDeclaration::new("NumDiscSamples", SettingType::Int, SettingValue::Int(16))
                        .annotate(Annotation::DisplayName("Num Disc Samples".to_string()))
                        .annotate(Annotation::MinValue(1.0))
                        .annotate(Annotation::MaxValue(64.0)),
                )
                .field(
                    FieldDeclaration::new("Bias", SettingType::Float, SettingValue::Float(0.005))
                        .annotate(Annotation::MinValue(0.0))
                        .annotate(Annotation::MaxValue(0.01))
                        .annotate(Annotation::StepSize(0.0001)),
                ),
        )
        .group(
            SettingsGroup::new("PostProcessing")
                .field(
                    FieldDeclaration::new(
                        "BloomThreshold",
                        SettingType::Float,
                        SettingValue::Float(3.0),
                    )
                    .annotate(Annotation::MinValue(0.0))
                    .annotate(Annotation::MaxValue(20.0))
                    .annotate(Annotation::StepSize(0.01)),
                )
                .field(
                    FieldDeclaration::new(
                        "BloomMagnitude",
                        SettingType::Float,
                        SettingValue::Float(1.0),
                    )
                    .annotate(Annotation::MinValue(0.0))
                    .annotate(Annotation::MaxValue(2.0))
                    .annotate(Annotation::StepSize(0.01)),
                )
                .field(
                    FieldDeclaration::new(
                        "BloomBlurSigma",
                        SettingType::Float,
                        SettingValue::Float(0.8),
                    )
                    .annotate(Annotation::MinValue(0.5))
                    .annotate(Annotation::MaxValue(1.5))
                    .annotate(Annotation::StepSize(0.01)),
                ),
        )
}

#[test]
fn compiles_the_shadow_sample_schema() -> Result<()> {
    let compiled = compile(&shadow_sample_schema())?;

    assert_eq!(compiled.groups.len(), 3);
    assert_eq!(compiled.enum_tables.len(), 3);

    // SceneControls packs LightDirection, LightColor and EnableAlbedoMap;
    // the two vectors cannot share a register.
    let scene = compiled.group("SceneControls").unwrap();
    assert_eq!(scene.layout.entries.len(), 3);
    assert_eq!(scene.layout.entry("LightDirection").unwrap().byte_offset, 0);
    assert_eq!(scene.layout.entry("LightColor").unwrap().byte_offset, 16);
    assert_eq!(scene.layout.entry("EnableAlbedoMap").unwrap().byte_offset, 28);
    assert_eq!(scene.layout.total_size, 32);

    // Shadows packs five scalars back to back.
    let shadows = compiled.group("Shadows").unwrap();
    assert_eq!(shadows.layout.entry("ShadowMapSize").unwrap().byte_offset, 0);
    assert_eq!(shadows.layout.entry("FilterSize").unwrap().byte_offset, 4);
    assert_eq!(
        shadows.layout.entry("StabilizeCascades").unwrap().byte_offset,
        8
    );
    assert_eq!(shadows.layout.entry("NumDiscSamples").unwrap().byte_offset, 12);
    assert_eq!(shadows.layout.entry("Bias").unwrap().byte_offset, 16);
    assert_eq!(shadows.layout.total_size, 32);
    assert!(shadows.layout.entry("ShadowMode").is_none());

    Ok(())
}

#[test]
fn descriptors_cover_every_field_in_order() -> Result<()> {
    let compiled = compile(&shadow_sample_schema())?;
    let shadows = compiled.group("Shadows").unwrap();

    let identifiers: Vec<&str> = shadows.ui.iter().map(|d| d.identifier.as_str()).collect();
    assert_eq!(
        identifiers,
        [
            "ShadowMode",
            "ShadowMapSize",
            "FilterSize",
            "VisualizeCascades",
            "StabilizeCascades",
            "NumDiscSamples",
            "Bias",
        ]
    );

    // The dropdown owns the resolved labels of its enum type.
    match &shadows.ui[0].control {
        ControlKind::Dropdown { table } => {
            assert_eq!(table.enum_type, "ShadowMode");
            assert_eq!(table.label(2), Some("Random Disc PCF"));
        }
        other => panic!("expected a dropdown, got {other:?}"),
    }

    // Cascade toggles carry their editor sub-group.
    assert_eq!(shadows.ui[3].group, "Cascades");
    assert_eq!(shadows.ui[4].group, "Cascades");

    // HDR light color renders as a color picker, plain direction as a
    // direction widget.
    let scene = compiled.group("SceneControls").unwrap();
    assert_eq!(scene.ui[3].control, ControlKind::Color { hdr: true });
    assert_eq!(scene.ui[2].control, ControlKind::Direction);
    assert_eq!(scene.ui[2].display_name, "Light Direction");

    Ok(())
}

#[test]
fn recompiling_reproduces_identical_artifacts() -> Result<()> {
    let schema = shadow_sample_schema();
    let first = compile(&schema)?;
    let second = compile(&schema)?;

    assert_eq!(first, second);
    // Byte-for-byte identical once serialized, too.
    assert_eq!(
        serde_json::to_string(&first)?,
        serde_json::to_string(&second)?
    );
    Ok(())
}

#[test]
fn emitted_hlsl_matches_the_shadows_layout() -> Result<()> {
    let compiled = compile(&shadow_sample_schema())?;
    let shadows = compiled.group("Shadows").unwrap();

    let source = shadows.emit_hlsl(2);
    assert!(source.starts_with("cbuffer ShadowsCBuffer : register(b2)"));
    let members: Vec<&str> = source
        .lines()
        .filter(|l| l.starts_with("    "))
        .map(str::trim)
        .collect();
    assert_eq!(
        members,
        [
            "int ShadowMapSize;",
            "float FilterSize;",
            "bool StabilizeCascades;",
            "int NumDiscSamples;",
            "float Bias;",
        ]
    );
    Ok(())
}

#[test]
fn store_serializes_the_scene_constants() -> Result<()> {
    let schema = shadow_sample_schema();
    let compiled = compile(&schema)?;
    let scene = compiled.group("SceneControls").unwrap();

    let mut store = SettingsStore::from_schema(&schema);
    store.set(
        "SceneControls",
        "LightDirection",
        SettingValue::Vector3(Vec3::new(0.0, 1.0, 0.0)),
    )?;

    let bytes = store.write_constants(scene);
    assert_eq!(bytes.len(), 32);
    assert_eq!(&bytes[0..4], &0.0f32.to_le_bytes());
    assert_eq!(&bytes[4..8], &1.0f32.to_le_bytes());
    assert_eq!(&bytes[16..20], &10.0f32.to_le_bytes());
    assert_eq!(&bytes[28..32], &1u32.to_le_bytes());
    Ok(())
}

#[test]
fn independent_violations_surface_in_one_attempt() {
    // A range annotation on a boolean and a duplicated DisplayName, in
    // different groups: one compile reports both.
    let schema = SettingsSchema::new()
        .group(
            SettingsGroup::new("Shadows").field(
                FieldDeclaration::new(
                    "VisualizeCascades",
                    SettingType::Bool,
                    SettingValue::Bool(false),
                )
                .annotate(Annotation::MinValue(0.0)),
            ),
        )
        .group(
            SettingsGroup::new("PostProcessing").field(
                FieldDeclaration::new(
                    "BloomMagnitude",
                    SettingType::Float,
                    SettingValue::Float(1.0),
                )
                .annotate(Annotation::DisplayName("Bloom Magnitude".to_string()))
                .annotate(Annotation::DisplayName("Bloom Scale".to_string())),
            ),
        );

    let error = compile(&schema).unwrap_err();
    assert_eq!(error.errors.len(), 2);
    assert!(error
        .errors
        .iter()
        .any(|e| matches!(e, SchemaError::InvalidAnnotationTarget { field, .. } if field == "VisualizeCascades")));
    assert!(error
        .errors
        .iter()
        .any(|e| matches!(e, SchemaError::DuplicateAnnotation { field, .. } if field == "BloomMagnitude")));
}
