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

//! CPU-side mesh data and its per-draw uniforms.

use lumen_core::math::{Mat4, Transform, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};
use crate::material::Material;
use crate::uniforms::UniformSink;

/// Ambient light intensity uploaded with every mesh.
pub const AMBIENT_INTENSITY: Vec3 = Vec3::new(0.5, 0.5, 0.5);

/// The attributes interleaved in a mesh's vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VertexLayout {
    /// Position only.
    #[default]
    Positions,
    /// Position followed by an RGB color.
    PositionsColors,
    /// Position followed by a normal.
    PositionsNormals,
}

impl VertexLayout {
    /// Number of floats making up one vertex.
    pub fn floats_per_vertex(&self) -> usize {
        match self {
            VertexLayout::Positions => 3,
            VertexLayout::PositionsColors | VertexLayout::PositionsNormals => 6,
        }
    }
}

/// Geometry placed in the world by a [`Transform`].
///
/// The mesh owns its interleaved vertex floats and triangle indices. Uploading
/// them to a GPU is the graphics context's job; [`Mesh::draw`] only sends the
/// per-draw uniforms.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    world: Transform,
    material: Option<Material>,
    layout: VertexLayout,
    vertices: Vec<f32>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Creates an empty mesh at the origin.
    pub fn new(layout: VertexLayout) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    /// Builder-style helper attaching a material.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Appends interleaved vertex floats.
    ///
    /// Rejects data that is not a whole number of vertices for this layout.
    pub fn add_geometry(&mut self, geometry: &[f32]) -> SceneResult<()> {
        let floats_per_vertex = self.layout.floats_per_vertex();
        if geometry.len() % floats_per_vertex != 0 {
            return Err(SceneError::InvalidGeometry {
                len: geometry.len(),
                floats_per_vertex,
            });
        }
        self.vertices.extend_from_slice(geometry);
        Ok(())
    }

    /// Appends triangle indices.
    pub fn add_indices(&mut self, indices: &[u32]) {
        self.indices.extend_from_slice(indices);
    }

    /// The vertex layout.
    pub fn layout(&self) -> VertexLayout {
        self.layout
    }

    /// Number of floats per vertex for this mesh's layout.
    pub fn floats_per_vertex(&self) -> usize {
        self.layout.floats_per_vertex()
    }

    /// Number of whole vertices stored.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.layout.floats_per_vertex()
    }

    /// Number of indices stored.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// The raw interleaved vertex floats.
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// The triangle indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// The material, if any.
    pub fn material(&self) -> Option<&Material> {
        self.material.as_ref()
    }

    /// Replaces the material.
    pub fn set_material(&mut self, material: Option<Material>) {
        self.material = material;
    }

    /// The mesh's pose in the world.
    pub fn world(&self) -> &Transform {
        &self.world
    }

    /// Mutable access to the pose, for moving, turning and scaling the mesh.
    pub fn world_mut(&mut self) -> &mut Transform {
        &mut self.world
    }

    /// Uploads the uniforms for drawing this mesh from the given view.
    ///
    /// Sends `uProjection`, `uModelView` (view composed with world), `uWorld`,
    /// `uView`, `uAmbientIntensity` and then the material.
    pub fn draw(&self, view: &Transform, projection: &Mat4, sink: &mut dyn UniformSink) {
        let model_view = *view * self.world;
        sink.set_uniform_matrix("uProjection", projection.as_array());
        sink.set_uniform_matrix("uModelView", model_view.to_mat4().as_array());
        sink.set_uniform_matrix("uWorld", self.world.to_mat4().as_array());
        sink.set_uniform_matrix("uView", view.to_mat4().as_array());
        sink.set_uniform_vec3("uAmbientIntensity", AMBIENT_INTENSITY);
        if let Some(material) = &self.material {
            material.upload(sink);
        }
    }
}
