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

//! The compilation stages: metadata extraction, enum label resolution,
//! constant-buffer packing, editor descriptor generation, and shader
//! declaration emission.

pub mod codegen;
pub mod enum_table;
pub mod layout;
pub mod metadata;
pub mod pipeline;
pub mod ui;

pub use self::codegen::*;
pub use self::enum_table::*;
pub use self::layout::*;
pub use self::metadata::*;
pub use self::pipeline::*;
pub use self::ui::*;
