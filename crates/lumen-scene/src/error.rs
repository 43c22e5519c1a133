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

//! Error types for the scene crate.

use thiserror::Error;

/// Errors reported by [`Scene`](crate::Scene) and [`Mesh`](crate::Mesh) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// No mesh is registered under this name.
    #[error("Mesh not found: {0}")]
    MeshNotFound(String),

    /// The scene holds no meshes, so there is nothing to activate.
    #[error("Scene has no active mesh")]
    NoActiveMesh,

    /// Vertex data does not split into whole vertices.
    #[error("Geometry of {len} floats is not a multiple of {floats_per_vertex} floats per vertex")]
    InvalidGeometry {
        /// Number of floats supplied.
        len: usize,
        /// Stride of the mesh's vertex layout.
        floats_per_vertex: usize,
    },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
