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

//! Defines [`Transform`], a pose made of an orientation/scale matrix and a position.

use super::{Mat3, Mat4, Vec3, Vec4};
use std::fmt;
use std::ops::Mul;

/// The pose of an object in its parent frame.
///
/// A `Transform` pairs a [`Mat3`] holding orientation together with any scale
/// or shear (`rot_scale`) and a position. Applied to a point it computes
/// `rot_scale * p + position`.
///
/// Operations named `*_local` act in the object's own frame and post-multiply
/// onto the orientation. Operations named `*_world` act in the parent frame
/// and also move the position, so the whole pose turns or scales around the
/// parent origin.
///
/// # Examples
///
/// ```
/// use lumen_core::math::{Transform, Vec3};
///
/// let mut t = Transform::new();
/// t.yaw(90.0);
/// t.move_back(2.0);
/// assert_eq!(t.position(), Vec3::new(2.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    rot_scale: Mat3,
    position: Vec3,
}

impl Transform {
    /// Creates the identity pose: identity orientation at the origin.
    #[inline]
    pub fn new() -> Self {
        Self::from_parts(Mat3::IDENTITY, Vec3::ZERO)
    }

    /// Creates a pose from an orientation and a position.
    #[inline]
    pub fn from_parts(orientation: Mat3, position: Vec3) -> Self {
        Self {
            rot_scale: orientation,
            position,
        }
    }

    /// Resets to the identity pose.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Orthonormalizes the orientation, discarding any scale or shear.
    #[inline]
    pub fn orthonormalize(&mut self) {
        self.rot_scale.orthonormalize();
    }

    // --- Accessors ---

    /// Returns the position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Sets the position.
    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Returns the local X-axis.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.rot_scale.right
    }

    /// Returns the local Y-axis.
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.rot_scale.up
    }

    /// Returns the local Z-axis.
    #[inline]
    pub fn back(&self) -> Vec3 {
        self.rot_scale.back
    }

    /// Returns the orientation/scale matrix.
    #[inline]
    pub fn orientation(&self) -> Mat3 {
        self.rot_scale
    }

    /// Replaces the orientation/scale matrix.
    #[inline]
    pub fn set_orientation(&mut self, orientation: Mat3) {
        self.rot_scale = orientation;
    }

    /// Replaces the orientation from three basis columns.
    #[inline]
    pub fn set_orientation_axes(&mut self, right: Vec3, up: Vec3, back: Vec3) {
        self.rot_scale = Mat3::from_cols(right, up, back);
    }

    // --- Materialization ---

    /// Materializes the pose as a 4x4 matrix.
    ///
    /// The orientation columns get `w = 0` and the position becomes the
    /// translation column with `w = 1`.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols(
            Vec4::from_vec3(self.rot_scale.right, 0.0),
            Vec4::from_vec3(self.rot_scale.up, 0.0),
            Vec4::from_vec3(self.rot_scale.back, 0.0),
            Vec4::from_vec3(self.position, 1.0),
        )
    }

    /// Writes the pose into a caller-provided 16-float buffer.
    ///
    /// Element `4 * i + j` receives component `j` of orientation column `i`,
    /// `4 * i + 3` is zero for the three orientation columns, elements 12 to 14
    /// hold the position and element 15 is one. This is filled straight from
    /// the orientation's storage and does not go through [`Transform::to_mat4`].
    pub fn write_to_array(&self, array: &mut [f32; 16]) {
        let data = self.rot_scale.as_array();
        for i in 0..3 {
            array[4 * i..4 * i + 3].copy_from_slice(&data[3 * i..3 * i + 3]);
            array[4 * i + 3] = 0.0;
        }
        array[12] = self.position.x;
        array[13] = self.position.y;
        array[14] = self.position.z;
        array[15] = 1.0;
    }

    /// Returns the array form of the pose. See [`Transform::write_to_array`].
    #[inline]
    pub fn to_array(&self) -> [f32; 16] {
        let mut array = [0.0; 16];
        self.write_to_array(&mut array);
        array
    }

    /// Maps a point from this pose's frame into the parent frame.
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rot_scale * point + self.position
    }

    // --- Movement ---

    /// Moves along the local X-axis.
    #[inline]
    pub fn move_right(&mut self, distance: f32) {
        self.move_local(distance, self.rot_scale.right);
    }

    /// Moves along the local Y-axis.
    #[inline]
    pub fn move_up(&mut self, distance: f32) {
        self.move_local(distance, self.rot_scale.up);
    }

    /// Moves along the local Z-axis.
    #[inline]
    pub fn move_back(&mut self, distance: f32) {
        self.move_local(distance, self.rot_scale.back);
    }

    /// Moves by `distance` along `direction`, which is used as given.
    ///
    /// Callers pass one of the pose's own axes (or a combination) here, so the
    /// direction is already expressed in the parent frame.
    #[inline]
    pub fn move_local(&mut self, distance: f32, direction: Vec3) {
        self.position += distance * direction;
    }

    /// Moves by `distance` along `direction` after mapping it through the orientation.
    #[inline]
    pub fn move_world(&mut self, distance: f32, direction: Vec3) {
        self.position += self.rot_scale * (distance * direction);
    }

    // --- Rotation ---

    /// Rotates around the local X-axis.
    #[inline]
    pub fn pitch(&mut self, angle_degrees: f32) {
        self.rot_scale *= Mat3::from_rotation_x(angle_degrees);
    }

    /// Rotates around the local Y-axis.
    #[inline]
    pub fn yaw(&mut self, angle_degrees: f32) {
        self.rot_scale *= Mat3::from_rotation_y(angle_degrees);
    }

    /// Rotates around the local Z-axis.
    #[inline]
    pub fn roll(&mut self, angle_degrees: f32) {
        self.rot_scale *= Mat3::from_rotation_z(angle_degrees);
    }

    /// Rotates around an arbitrary axis given in the local frame.
    #[inline]
    pub fn rotate_local(&mut self, angle_degrees: f32, axis: Vec3) {
        self.rot_scale *= Mat3::from_angle_axis(angle_degrees, axis);
    }

    /// Rotates the whole pose around an axis through the parent origin.
    ///
    /// Both the orientation and the position are turned.
    pub fn rotate_world(&mut self, angle_degrees: f32, axis: Vec3) {
        let rotation = Mat3::from_angle_axis(angle_degrees, axis);
        self.rot_scale = rotation * self.rot_scale;
        self.position = rotation * self.position;
    }

    /// Rebuilds `back` and `right` so they are perpendicular to the current `up`.
    ///
    /// The reference axis is the orientation's own `up` column, which is left
    /// untouched. With an upright pose this levels the object against world Y.
    pub fn align_with_world_y(&mut self) {
        let up = self.rot_scale.up;
        let mut back = self.rot_scale.right.cross(up);
        back.normalize();
        let mut right = up.cross(back);
        right.normalize();
        self.rot_scale.back = back;
        self.rot_scale.right = right;
    }

    // --- Scale and shear ---

    /// Scales uniformly in the local frame.
    #[inline]
    pub fn scale_local(&mut self, scale: f32) {
        self.rot_scale *= scale;
    }

    /// Scales each local axis independently.
    #[inline]
    pub fn scale_local_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.rot_scale *= Mat3::from_scale(x, y, z);
    }

    /// Scales the whole pose, position included, from the parent origin.
    pub fn scale_world(&mut self, scale: f32) {
        self.rot_scale *= Mat3::from_uniform_scale(scale);
        self.position *= scale;
    }

    /// Scales the whole pose along the parent axes, position included.
    pub fn scale_world_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.rot_scale = Mat3::from_scale(x, y, z) * self.rot_scale;
        self.position = Vec3::new(self.position.x * x, self.position.y * y, self.position.z * z);
    }

    /// Shears local X by local Y and Z.
    #[inline]
    pub fn shear_local_x_by_yz(&mut self, shear_y: f32, shear_z: f32) {
        self.rot_scale *= Mat3::from_shear_x_by_yz(shear_y, shear_z);
    }

    /// Shears local Y by local X and Z.
    #[inline]
    pub fn shear_local_y_by_xz(&mut self, shear_x: f32, shear_z: f32) {
        self.rot_scale *= Mat3::from_shear_y_by_xz(shear_x, shear_z);
    }

    /// Shears local Z by local X and Y.
    #[inline]
    pub fn shear_local_z_by_xy(&mut self, shear_x: f32, shear_y: f32) {
        self.rot_scale *= Mat3::from_shear_z_by_xy(shear_x, shear_y);
    }

    // --- Inversion and composition ---

    /// Inverts a rigid pose in place.
    ///
    /// The orientation must be a pure rotation. With scale or shear present
    /// the result is well defined but not the inverse.
    pub fn invert_rt(&mut self) {
        let negated = -self.position;
        self.position = Vec3::new(
            self.rot_scale.right.dot(negated),
            self.rot_scale.up.dot(negated),
            self.rot_scale.back.dot(negated),
        );
        self.rot_scale.invert_rotation();
    }

    /// Composes in place: `self = self * other`.
    #[inline]
    pub fn combine(&mut self, other: &Transform) {
        *self = *self * *other;
    }
}

impl Mul for Transform {
    type Output = Self;
    /// Expresses `rhs` in the frame of `self`. Not commutative.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_parts(
            self.rot_scale * rhs.rot_scale,
            self.rot_scale * rhs.position + self.position,
        )
    }
}

impl fmt::Display for Transform {
    /// Prints the pose as a row-major 4x4 homogeneous matrix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rot_scale.transposed();
        writeln!(f, "{}{:>10.2}", rows.right, self.position.x)?;
        writeln!(f, "{}{:>10.2}", rows.up, self.position.y)?;
        writeln!(f, "{}{:>10.2}", rows.back, self.position.z)?;
        writeln!(f, "{:>10.2}{:>10.2}{:>10.2}{:>10.2}", 0.0, 0.0, 0.0, 1.0)
    }
}

// --- Tests ---
