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

//! The demo scene: a sun and an earth lit by two spot lights.

use lumen_core::math::{Vec3, PI};
use lumen_scene::{Material, Mesh, Scene, SceneResult, VertexLayout};

const SPHERE_STACKS: u32 = 12;
const SPHERE_SLICES: u32 = 24;
/// Radius of the generated sphere before any mesh scaling.
const SPHERE_RADIUS: f32 = 25.0;

/// Builds a UV sphere as interleaved positions and normals plus triangle indices.
pub fn uv_sphere(radius: f32, stacks: u32, slices: u32) -> (Vec<f32>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1) * 6) as usize);
    for stack in 0..=stacks {
        let phi = PI * stack as f32 / stacks as f32;
        for slice in 0..=slices {
            let theta = 2.0 * PI * slice as f32 / slices as f32;
            let normal = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
            let position = normal * radius;
            vertices.extend_from_slice(&[
                position.x, position.y, position.z, normal.x, normal.y, normal.z,
            ]);
        }
    }

    let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);
    let row = slices + 1;
    for stack in 0..stacks {
        for slice in 0..slices {
            let top = stack * row + slice;
            let bottom = top + row;
            indices.extend_from_slice(&[top, bottom, top + 1, top + 1, bottom, bottom + 1]);
        }
    }
    (vertices, indices)
}

fn sphere(material: Material) -> SceneResult<Mesh> {
    let (vertices, indices) = uv_sphere(SPHERE_RADIUS, SPHERE_STACKS, SPHERE_SLICES);
    let mut mesh = Mesh::new(VertexLayout::PositionsNormals).with_material(material);
    mesh.add_geometry(&vertices)?;
    mesh.add_indices(&indices);
    Ok(mesh)
}

/// Builds the solar scene. The sun starts as the active mesh.
pub fn build_scene() -> SceneResult<Scene> {
    let mut scene = Scene::new();

    scene.add_spot_light(
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(0.9, 0.9, 0.9),
        Vec3::new(0.4, 0.4, 1.0),
        Vec3::new(0.3, 0.6, 0.235),
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        0.5,
    );
    scene.add_spot_light(
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.4, 0.9, 0.2),
        Vec3::new(6.0, 3.0, -2.0),
        Vec3::new(0.7, 0.8, 0.2),
        Vec3::new(-0.1, -0.7, 0.1),
        0.5,
        0.5,
    );

    let mut sun = sphere(Material::red_rubber())?;
    sun.world_mut().scale_world(0.04);
    sun.world_mut().scale_local(0.6);
    scene.add("sun", sun);

    let mut earth = sphere(Material::cyan_plastic())?;
    earth.world_mut().scale_world(0.04);
    earth.world_mut().move_right(6.0);
    scene.add("earth", earth);

    log::debug!("Solar scene ready with {} meshes", scene.len());
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uv_sphere_counts() {
        let (vertices, indices) = uv_sphere(1.0, 4, 8);
        assert_eq!(vertices.len(), 5 * 9 * 6);
        assert_eq!(indices.len(), 4 * 8 * 6);
        assert!(indices.iter().all(|&i| (i as usize) < 5 * 9));
    }

    #[test]
    fn test_uv_sphere_points_lie_on_radius() {
        let (vertices, _) = uv_sphere(2.0, 3, 5);
        for vertex in vertices.chunks(6) {
            let position = Vec3::new(vertex[0], vertex[1], vertex[2]);
            assert!((position.length() - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_solar_scene_layout() {
        let scene = build_scene().unwrap();
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.lights().len(), 2);
        assert_eq!(scene.active_mesh_name(), Some("sun"));

        let earth = scene.mesh("earth").unwrap();
        assert_eq!(earth.world().position(), Vec3::new(0.24, 0.0, 0.0));
        assert_eq!(earth.material(), Some(&Material::cyan_plastic()));
        assert_eq!(earth.layout(), VertexLayout::PositionsNormals);
        assert_eq!(earth.indices().len(), (SPHERE_STACKS * SPHERE_SLICES * 6) as usize);

        let sun = scene.mesh("sun").unwrap();
        assert!((sun.world().right().length() - 0.024).abs() < 1e-6);
    }
}
