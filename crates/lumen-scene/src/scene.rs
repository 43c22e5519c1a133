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

//! The named mesh container with its lights and active-mesh selection.

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use lumen_core::math::Vec3;
use lumen_core::Camera;

use crate::error::{SceneError, SceneResult};
use crate::light::LightSource;
use crate::mesh::Mesh;
use crate::uniforms::UniformSink;

/// Meshes keyed by name, the lights shining on them, and the mesh currently
/// under user control.
///
/// Meshes are kept in name order, which is both the draw order and the order
/// [`Scene::activate_next_mesh`] walks through. Whenever the scene holds at
/// least one mesh, exactly one of them is active.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    meshes: BTreeMap<String, Mesh>,
    active: Option<String>,
    lights: Vec<LightSource>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Meshes ---

    /// Inserts a mesh under `name`, replacing any mesh already there.
    ///
    /// The first mesh added to an empty scene becomes the active one.
    pub fn add(&mut self, name: impl Into<String>, mesh: Mesh) -> Option<Mesh> {
        let name = name.into();
        log::debug!("Adding mesh '{}' to scene", name);
        if self.active.is_none() {
            self.active = Some(name.clone());
        }
        self.meshes.insert(name, mesh)
    }

    /// Removes and returns the mesh called `name`.
    ///
    /// If it was the active mesh, the next one in name order (wrapping) takes over.
    pub fn remove(&mut self, name: &str) -> SceneResult<Mesh> {
        let Some(mesh) = self.meshes.remove(name) else {
            log::warn!("Cannot remove mesh '{}': not in scene", name);
            return Err(SceneError::MeshNotFound(name.to_owned()));
        };
        log::debug!("Removed mesh '{}' from scene", name);

        if self.active.as_deref() == Some(name) {
            self.active = self.name_after(name);
        }
        Ok(mesh)
    }

    /// Removes every mesh and light.
    pub fn clear(&mut self) {
        self.meshes.clear();
        self.lights.clear();
        self.active = None;
    }

    /// Returns `true` if a mesh is registered under `name`.
    pub fn has_mesh(&self, name: &str) -> bool {
        self.meshes.contains_key(name)
    }

    /// Looks up a mesh by name.
    pub fn mesh(&self, name: &str) -> SceneResult<&Mesh> {
        self.meshes
            .get(name)
            .ok_or_else(|| SceneError::MeshNotFound(name.to_owned()))
    }

    /// Looks up a mesh by name for modification.
    pub fn mesh_mut(&mut self, name: &str) -> SceneResult<&mut Mesh> {
        self.meshes
            .get_mut(name)
            .ok_or_else(|| SceneError::MeshNotFound(name.to_owned()))
    }

    /// Mesh names in draw order.
    pub fn mesh_names(&self) -> impl Iterator<Item = &str> {
        self.meshes.keys().map(String::as_str)
    }

    /// Number of meshes.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Returns `true` if the scene holds no meshes.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    // --- Active mesh ---

    /// Makes `name` the active mesh.
    pub fn set_active_mesh(&mut self, name: &str) -> SceneResult<()> {
        if !self.meshes.contains_key(name) {
            log::warn!("Cannot activate mesh '{}': not in scene", name);
            return Err(SceneError::MeshNotFound(name.to_owned()));
        }
        self.active = Some(name.to_owned());
        Ok(())
    }

    /// Name of the active mesh, if the scene is not empty.
    pub fn active_mesh_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The active mesh.
    pub fn active_mesh(&self) -> SceneResult<&Mesh> {
        let name = self.active.as_deref().ok_or(SceneError::NoActiveMesh)?;
        self.mesh(name)
    }

    /// The active mesh, for modification.
    pub fn active_mesh_mut(&mut self) -> SceneResult<&mut Mesh> {
        let name = self.active.clone().ok_or(SceneError::NoActiveMesh)?;
        self.mesh_mut(&name)
    }

    /// Activates the mesh after the active one in name order, wrapping to the first.
    ///
    /// Returns the newly active name, or `None` for an empty scene.
    pub fn activate_next_mesh(&mut self) -> Option<&str> {
        let next = match self.active.as_deref() {
            Some(current) => self.name_after(current),
            None => self.meshes.keys().next().cloned(),
        };
        self.active = next;
        self.active.as_deref()
    }

    /// Activates the mesh before the active one in name order, wrapping to the last.
    pub fn activate_previous_mesh(&mut self) -> Option<&str> {
        let previous = match self.active.as_deref() {
            Some(current) => self
                .meshes
                .range::<str, _>((Unbounded, Excluded(current)))
                .next_back()
                .or_else(|| self.meshes.iter().next_back())
                .map(|(name, _)| name.clone()),
            None => self.meshes.keys().next_back().cloned(),
        };
        self.active = previous;
        self.active.as_deref()
    }

    fn name_after(&self, current: &str) -> Option<String> {
        self.meshes
            .range::<str, _>((Excluded(current), Unbounded))
            .next()
            .or_else(|| self.meshes.iter().next())
            .map(|(name, _)| name.clone())
    }

    // --- Lights ---

    /// Adds a light.
    pub fn add_light(&mut self, light: LightSource) {
        self.lights.push(light);
    }

    /// Adds a directional light.
    pub fn add_directional_light(
        &mut self,
        diffuse_intensity: Vec3,
        specular_intensity: Vec3,
        direction: Vec3,
    ) {
        self.add_light(LightSource::directional(
            diffuse_intensity,
            specular_intensity,
            direction,
        ));
    }

    /// Adds a point light.
    pub fn add_point_light(
        &mut self,
        diffuse_intensity: Vec3,
        specular_intensity: Vec3,
        position: Vec3,
        attenuation: Vec3,
    ) {
        self.add_light(LightSource::point(
            diffuse_intensity,
            specular_intensity,
            position,
            attenuation,
        ));
    }

    /// Adds a spot light.
    #[allow(clippy::too_many_arguments)]
    pub fn add_spot_light(
        &mut self,
        diffuse_intensity: Vec3,
        specular_intensity: Vec3,
        position: Vec3,
        attenuation: Vec3,
        direction: Vec3,
        cutoff_cos_angle: f32,
        falloff: f32,
    ) {
        self.add_light(LightSource::spot(
            diffuse_intensity,
            specular_intensity,
            position,
            attenuation,
            direction,
            cutoff_cos_angle,
            falloff,
        ));
    }

    /// The lights, in upload order.
    pub fn lights(&self) -> &[LightSource] {
        &self.lights
    }

    // --- Drawing ---

    /// Uploads the frame's uniforms as seen from `camera`.
    ///
    /// Sends `uEyePosition` and `uNumLights`, then each light, then the
    /// uniforms of every mesh in name order.
    pub fn draw(&self, camera: &Camera, sink: &mut dyn UniformSink) {
        sink.set_uniform_vec3("uEyePosition", camera.eye_position());
        sink.set_uniform_i32("uNumLights", self.lights.len() as i32);
        for (index, light) in self.lights.iter().enumerate() {
            light.upload(sink, index);
        }

        let view = camera.view_matrix();
        let projection = camera.projection_matrix();
        for mesh in self.meshes.values() {
            mesh.draw(&view, &projection, sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::VertexLayout;

    fn scene_with(names: &[&str]) -> Scene {
        let mut scene = Scene::new();
        for name in names {
            scene.add(*name, Mesh::new(VertexLayout::Positions));
        }
        scene
    }

    #[test]
    fn test_first_mesh_becomes_active() {
        let mut scene = Scene::new();
        assert_eq!(scene.active_mesh_name(), None);
        assert_eq!(scene.active_mesh().unwrap_err(), SceneError::NoActiveMesh);

        scene.add("sun", Mesh::new(VertexLayout::Positions));
        scene.add("earth", Mesh::new(VertexLayout::Positions));
        assert_eq!(scene.active_mesh_name(), Some("sun"));
        assert_eq!(scene.mesh_names().collect::<Vec<_>>(), vec!["earth", "sun"]);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut scene = scene_with(&["a", "b", "c"]);
        assert_eq!(scene.active_mesh_name(), Some("a"));

        assert_eq!(scene.activate_next_mesh(), Some("b"));
        assert_eq!(scene.activate_next_mesh(), Some("c"));
        assert_eq!(scene.activate_next_mesh(), Some("a"));

        assert_eq!(scene.activate_previous_mesh(), Some("c"));
        assert_eq!(scene.activate_previous_mesh(), Some("b"));
    }

    #[test]
    fn test_cycling_an_empty_scene() {
        let mut scene = Scene::new();
        assert_eq!(scene.activate_next_mesh(), None);
        assert_eq!(scene.activate_previous_mesh(), None);
    }

    #[test]
    fn test_remove_active_mesh_activates_next() {
        let mut scene = scene_with(&["a", "b", "c"]);
        scene.set_active_mesh("c").unwrap();

        scene.remove("c").unwrap();
        assert_eq!(scene.active_mesh_name(), Some("a"));

        scene.remove("b").unwrap();
        assert_eq!(scene.active_mesh_name(), Some("a"));

        scene.remove("a").unwrap();
        assert_eq!(scene.active_mesh_name(), None);
        assert!(scene.is_empty());
    }

    #[test]
    fn test_missing_mesh_errors() {
        let mut scene = scene_with(&["a"]);
        assert_eq!(
            scene.remove("z").unwrap_err(),
            SceneError::MeshNotFound("z".to_owned())
        );
        assert!(scene.set_active_mesh("z").is_err());
        assert!(scene.mesh("z").is_err());
        assert_eq!(scene.active_mesh_name(), Some("a"));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_active_mesh_mut_moves_only_that_mesh() {
        let mut scene = scene_with(&["a", "b"]);
        scene.set_active_mesh("b").unwrap();
        scene.active_mesh_mut().unwrap().world_mut().move_up(1.5);

        assert_eq!(scene.mesh("b").unwrap().world().position(), Vec3::new(0.0, 1.5, 0.0));
        assert_eq!(scene.mesh("a").unwrap().world().position(), Vec3::ZERO);
    }

    #[test]
    fn test_clear() {
        let mut scene = scene_with(&["a", "b"]);
        scene.add_directional_light(Vec3::ONE, Vec3::ONE, -Vec3::Y);
        scene.clear();
        assert!(scene.is_empty());
        assert!(scene.lights().is_empty());
        assert_eq!(scene.active_mesh_name(), None);
        assert!(!scene.has_mesh("a"));
    }
}
