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

//! Integration tests for camera poses and the clip-space pipeline.

use approx::assert_abs_diff_eq;
use lumen_core::camera::{Camera, CameraSettings, Projection};
use lumen_core::math::{Mat4, Transform, Vec3, Vec4};

fn demo_camera() -> Camera {
    Camera::new(
        Vec3::new(0.0, 0.0, 12.0),
        Vec3::new(0.0, 0.0, 1.0),
        0.01,
        40.0,
        1200.0 / 900.0,
        50.0,
    )
}

/// Runs a world-space point through view and projection, returning NDC.
fn to_ndc(camera: &Camera, point: Vec3) -> Vec3 {
    let eye = camera.view_matrix().transform_point(point);
    let clip = camera.projection_matrix() * Vec4::from_vec3(eye, 1.0);
    clip.truncate() / clip.w
}

#[test]
fn test_eye_position_and_move_right() {
    let mut camera = demo_camera();
    assert_eq!(camera.eye_position(), Vec3::new(0.0, 0.0, 12.0));

    let right = camera.world().right();
    camera.move_right(1.0);
    assert_eq!(camera.eye_position(), Vec3::new(0.0, 0.0, 12.0) + right);
    assert_eq!(camera.eye_position().x, 1.0);
}

#[test]
fn test_settings_default_matches_demo_camera() {
    let from_settings = Camera::from_settings(&CameraSettings::default());
    let demo = demo_camera();
    assert_eq!(from_settings.world(), demo.world());
    assert_eq!(from_settings.projection_matrix(), demo.projection_matrix());
}

#[test]
fn test_symmetric_projection_values() {
    let camera = demo_camera();
    let m = camera.projection_matrix();
    let tan_half = (50.0f32.to_radians() / 2.0).tan();
    assert_abs_diff_eq!(m.right.x, 1.0 / ((1200.0 / 900.0) * tan_half), epsilon = 1e-5);
    assert_abs_diff_eq!(m.up.y, 1.0 / tan_half, epsilon = 1e-5);
    assert_eq!(m.back.w, -1.0);
    assert_eq!(m, Mat4::perspective(50.0, 1200.0 / 900.0, 0.01, 40.0));
}

#[test]
fn test_origin_projects_to_screen_center() {
    let camera = demo_camera();
    let ndc = to_ndc(&camera, Vec3::ZERO);
    assert_abs_diff_eq!(ndc.x, 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(ndc.y, 0.0, epsilon = 1e-5);
    assert!(ndc.z > -1.0 && ndc.z < 1.0);
}

#[test]
fn test_strafing_shifts_scene_left() {
    let mut camera = demo_camera();
    camera.move_right(1.0);
    let ndc = to_ndc(&camera, Vec3::ZERO);
    assert!(ndc.x < 0.0);
    assert_abs_diff_eq!(ndc.y, 0.0, epsilon = 1e-5);
}

#[test]
fn test_yaw_then_reset() {
    let mut camera = demo_camera();
    let initial_view = camera.view_matrix();

    // Turning 90 degrees left puts the origin on the right edge of the view.
    camera.yaw(90.0);
    let eye_space = camera.view_matrix().transform_point(Vec3::ZERO);
    assert_abs_diff_eq!(eye_space, Vec3::new(12.0, 0.0, 0.0), epsilon = 1e-4);

    camera.reset_pose();
    assert_eq!(camera.view_matrix(), initial_view);
}

#[test]
fn test_orthographic_keeps_size_with_distance() {
    let mut camera = demo_camera();
    camera.set_projection_orthographic(-4.0, 6.0, -6.0, 5.0, 2.0, 30.0);
    let near = to_ndc(&camera, Vec3::new(1.0, 1.0, 0.0));
    let far = to_ndc(&camera, Vec3::new(1.0, 1.0, -10.0));
    assert_abs_diff_eq!(near.x, far.x, epsilon = 1e-5);
    assert_abs_diff_eq!(near.y, far.y, epsilon = 1e-5);
    assert!(matches!(camera.projection(), Projection::Orthographic(_)));
}

#[test]
fn test_model_view_pipeline_materializations_agree() {
    let camera = demo_camera();
    let mut world = Transform::new();
    world.move_right(2.0);
    world.yaw(30.0);
    world.scale_local(1.5);

    let model_view = camera.view_matrix() * world;
    let as_matrix = model_view.to_mat4();
    let as_array = model_view.to_array();
    assert_eq!(as_matrix.as_array(), &as_array);

    let local = Vec3::new(0.5, -1.0, 0.25);
    let via_transform = model_view.transform_point(local);
    let via_matrix = as_matrix * Vec4::from_vec3(local, 1.0);
    assert_abs_diff_eq!(via_matrix.truncate(), via_transform, epsilon = 1e-4);
    assert_eq!(via_matrix.w, 1.0);
}
