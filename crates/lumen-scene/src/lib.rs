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

//! # Lumen Scene
//!
//! The objects a renderer draws with the `lumen-core` math: materials, light
//! sources, CPU-side meshes and the [`Scene`] that groups them.
//!
//! Nothing here talks to a GPU. Every draw call goes through a
//! [`UniformSink`], the boundary to whatever graphics context owns the
//! shader program.

#![warn(missing_docs)]

pub mod error;
pub mod light;
pub mod material;
pub mod mesh;
pub mod scene;
pub mod uniforms;

pub use error::{SceneError, SceneResult};
pub use light::{LightKind, LightSource};
pub use material::Material;
pub use mesh::{Mesh, VertexLayout};
pub use scene::Scene;
pub use uniforms::{UniformRecorder, UniformSink, UniformValue};
