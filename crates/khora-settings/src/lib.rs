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

//! # Khora Settings
//!
//! Schema-driven settings compiler. Declarative, annotated field
//! declarations compile into two derived artifacts: a byte-exact constant
//! buffer layout for the shader-visible fields, and toolkit-independent
//! editor descriptors for all of them.
//!
//! The whole pipeline is a pure, synchronous pass over the schema;
//! recompiling an unchanged schema reproduces identical output.

#![warn(missing_docs)]

pub mod compiler;
pub mod error;
pub mod math;
pub mod schema;
pub mod store;

pub use compiler::{compile, CompiledGroup, CompiledSchema};
pub use error::{CompileError, SchemaError};
pub use schema::SettingsSchema;
pub use store::SettingsStore;
