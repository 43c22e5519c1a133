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

//! Integration tests for pose hierarchies built from composed transforms.

use approx::assert_abs_diff_eq;
use lumen_core::math::{Mat3, Transform, Vec3};

/// A sun at the origin, a planet orbiting it, and a moon orbiting the planet.
fn solar_system(planet_orbit_degrees: f32) -> (Transform, Transform, Transform) {
    let mut sun = Transform::new();
    sun.scale_local(2.0);

    let mut planet = Transform::from_parts(Mat3::IDENTITY, Vec3::new(5.0, 0.0, 0.0));
    planet.rotate_world(planet_orbit_degrees, Vec3::Y);

    let moon = Transform::from_parts(Mat3::IDENTITY, Vec3::new(1.0, 0.0, 0.0));
    (sun, planet, moon)
}

#[test]
fn test_orbit_positions() {
    let (_, planet, moon) = solar_system(90.0);
    assert_abs_diff_eq!(planet.position(), Vec3::new(0.0, 0.0, -5.0), epsilon = 1e-5);

    // The moon's offset turns with the planet it is attached to.
    let moon_world = planet * moon;
    assert_abs_diff_eq!(moon_world.position(), Vec3::new(0.0, 0.0, -6.0), epsilon = 1e-5);
}

#[test]
fn test_parent_scale_propagates() {
    let (sun, planet, moon) = solar_system(0.0);
    let moon_world = sun * planet * moon;
    assert_abs_diff_eq!(moon_world.position(), Vec3::new(12.0, 0.0, 0.0), epsilon = 1e-5);
    assert_abs_diff_eq!(moon_world.right().length(), 2.0, epsilon = 1e-5);
}

#[test]
fn test_hierarchy_is_associative_not_commutative() {
    let (sun, planet, moon) = solar_system(33.0);
    let left = (sun * planet) * moon;
    let right = sun * (planet * moon);
    assert_abs_diff_eq!(left.orientation(), right.orientation(), epsilon = 1e-5);
    assert_abs_diff_eq!(left.position(), right.position(), epsilon = 1e-4);

    assert_ne!(planet * moon, moon * planet);
}

#[test]
fn test_combine_accumulates_children() {
    let (sun, planet, moon) = solar_system(45.0);
    let mut accumulated = sun;
    accumulated.combine(&planet);
    accumulated.combine(&moon);
    assert_eq!(accumulated, sun * planet * moon);
}

#[test]
fn test_rigid_inverse_undoes_world_placement() {
    let (_, planet, moon) = solar_system(60.0);
    let mut moon_world = planet * moon;
    moon_world.pitch(20.0);

    let mut inverse = moon_world;
    inverse.invert_rt();

    let p = Vec3::new(3.0, -1.0, 2.0);
    let round_trip = inverse.transform_point(moon_world.transform_point(p));
    assert_abs_diff_eq!(round_trip, p, epsilon = 1e-4);
}

#[test]
fn test_array_and_matrix_reconstruct_pose() {
    let (sun, planet, moon) = solar_system(120.0);
    let mut pose = sun * planet * moon;
    pose.shear_local_y_by_xz(0.3, 0.0);

    let m = pose.to_mat4();
    let rebuilt_from_matrix = Transform::from_parts(
        Mat3::from_cols(m.right.truncate(), m.up.truncate(), m.back.truncate()),
        m.translation.truncate(),
    );
    assert_eq!(rebuilt_from_matrix, pose);

    let a = pose.to_array();
    let rebuilt_from_array = Transform::from_parts(
        Mat3::new(a[0], a[1], a[2], a[4], a[5], a[6], a[8], a[9], a[10]),
        Vec3::new(a[12], a[13], a[14]),
    );
    assert_eq!(rebuilt_from_array, pose);
}
