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

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use khora_settings::compiler::{compile, pack_constant_layout};
use khora_settings::schema::{
    Annotation, FieldDeclaration, SettingType, SettingValue, SettingsGroup, SettingsSchema,
};

/// One group with `fields` annotated float settings.
fn synthetic_schema(fields: usize) -> SettingsSchema {
    let mut group = SettingsGroup::new("Synthetic");
    for i in 0..fields {
        group = group.field(
            FieldDeclaration::new(
                format!("Setting{i}"),
                SettingType::Float,
                SettingValue::Float(0.0),
            )
            .annotate(Annotation::DisplayName(format!("Setting {i}")))
            .annotate(Annotation::MinValue(0.0))
            .annotate(Annotation::MaxValue(100.0))
            .annotate(Annotation::StepSize(0.1)),
        );
    }
    SettingsSchema::new().group(group)
}

fn bench_compile(c: &mut Criterion) {
    let schema = synthetic_schema(256);
    let compiled = compile(&schema).expect("synthetic schema is valid");
    let metadata = compiled.groups[0].metadata.clone();

    let mut group = c.benchmark_group("Settings Compiler");

    group.bench_function("Full compile (256 fields)", |b| {
        b.iter(|| compile(black_box(&schema)));
    });

    group.bench_function("Layout pack only (256 fields)", |b| {
        b.iter(|| pack_constant_layout(black_box(&metadata)));
    });

    group.finish();
}

criterion_group!(benches, bench_compile);
criterion_main!(benches);
