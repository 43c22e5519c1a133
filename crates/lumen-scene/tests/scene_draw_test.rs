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

use approx::assert_abs_diff_eq;
use lumen_core::math::{Transform, Vec3};
use lumen_core::Camera;
use lumen_scene::{
    LightKind, Material, Mesh, Scene, UniformRecorder, UniformValue, VertexLayout,
};

fn solar_scene() -> Scene {
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
    scene.add_point_light(
        Vec3::new(0.8, 0.8, 0.8),
        Vec3::ONE,
        Vec3::new(6.0, 3.0, -2.0),
        Vec3::new(1.0, 0.1, 0.01),
    );

    let mut sun = Mesh::new(VertexLayout::PositionsNormals).with_material(Material::red_rubber());
    sun.world_mut().scale_world(0.04);
    sun.world_mut().scale_local(0.6);

    let mut earth =
        Mesh::new(VertexLayout::PositionsNormals).with_material(Material::cyan_plastic());
    earth.world_mut().scale_world(0.04);
    earth.world_mut().move_right(6.0);

    scene.add("sun", sun);
    scene.add("earth", earth);
    scene
}

fn matrix(recorder: &UniformRecorder, index: usize) -> [f32; 16] {
    match recorder.entries()[index].1 {
        UniformValue::Matrix(m) => m,
        other => panic!("expected a matrix at {}, got {:?}", index, other),
    }
}

#[test]
fn test_frame_upload_order() {
    let scene = solar_scene();
    let camera = Camera::default();
    let mut recorder = UniformRecorder::new();
    scene.draw(&camera, &mut recorder);

    let names: Vec<_> = recorder.names().collect();
    assert_eq!(names[0], "uEyePosition");
    assert_eq!(names[1], "uNumLights");
    assert_eq!(recorder.get("uNumLights"), Some(&UniformValue::Int(2)));

    // spot: 2 intensities + 5 fields + type, point: 2 + 2 + type
    assert_eq!(names[2], "uLights[0].diffuseIntensity");
    assert_eq!(names[9], "uLights[0].type");
    assert_eq!(names[10], "uLights[1].diffuseIntensity");
    assert_eq!(names[14], "uLights[1].type");
    assert_eq!(recorder.get("uLights[0].type"), Some(&UniformValue::Int(2)));
    assert_eq!(recorder.get("uLights[1].type"), Some(&UniformValue::Int(1)));

    // two meshes, ten uploads each
    assert_eq!(names.len(), 15 + 20);
    assert_eq!(names[15], "uProjection");
    assert_eq!(names[25], "uProjection");
    assert_eq!(
        recorder.get("uEyePosition"),
        Some(&UniformValue::Vec3(Vec3::new(0.0, 0.0, 12.0)))
    );
}

#[test]
fn test_meshes_draw_in_name_order() {
    let scene = solar_scene();
    let camera = Camera::default();
    let mut recorder = UniformRecorder::new();
    scene.draw(&camera, &mut recorder);

    // earth sorts before sun
    let earth_world = matrix(&recorder, 17);
    let sun_world = matrix(&recorder, 27);
    assert_eq!(&earth_world, scene.mesh("earth").unwrap().world().to_mat4().as_array());
    assert_eq!(&sun_world, scene.mesh("sun").unwrap().world().to_mat4().as_array());
}

#[test]
fn test_model_view_combines_camera_and_mesh() {
    let scene = solar_scene();
    let mut camera = Camera::default();
    camera.move_right(1.0);
    camera.yaw(15.0);

    let mut recorder = UniformRecorder::new();
    scene.draw(&camera, &mut recorder);

    let earth = scene.mesh("earth").unwrap();
    let expected: Transform = camera.view_matrix() * *earth.world();
    let model_view = matrix(&recorder, 16);
    for (got, want) in model_view.iter().zip(expected.to_array().iter()) {
        assert_abs_diff_eq!(*got, *want, epsilon = 1e-5);
    }
    assert_eq!(
        matrix(&recorder, 15),
        *camera.projection_matrix().as_array()
    );
}

#[test]
fn test_eye_position_follows_camera() {
    let scene = solar_scene();
    let mut camera = Camera::default();
    camera.move_back(-2.0);

    let mut recorder = UniformRecorder::new();
    scene.draw(&camera, &mut recorder);
    let Some(UniformValue::Vec3(eye)) = recorder.get("uEyePosition") else {
        panic!("eye position missing");
    };
    assert_abs_diff_eq!(*eye, Vec3::new(0.0, 0.0, 10.0), epsilon = 1e-5);
}

#[test]
fn test_light_kinds_survive_ron() {
    let scene = solar_scene();
    let text = ron::to_string(scene.lights()).unwrap();
    let lights: Vec<lumen_scene::LightSource> = ron::from_str(&text).unwrap();
    assert_eq!(lights.as_slice(), scene.lights());
    assert!(matches!(lights[1].kind, LightKind::Point { .. }));
}
