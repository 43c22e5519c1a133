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

//! Defines the `Mat3` and `Mat4` types and associated operations.

use approx::{AbsDiffEq, RelativeEq};

use super::{degrees_to_radians, Vec3, Vec4, EPSILON};
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2x2 determinant of `| a b |` over `| c d |`.
#[inline]
fn det2(a: f32, b: f32, c: f32, d: f32) -> f32 {
    a * d - b * c
}

// --- Mat3 ---

/// A 3x3 column-major matrix stored as three named basis columns.
///
/// Used as an orientation the columns form a right-handed orthonormal basis
/// (`right`, `up`, `back`), but any linear map can be stored, including scale
/// and shear. Nothing keeps the basis orthonormal except an explicit call to
/// [`Mat3::orthonormalize`].
///
/// The `from_*` builders return a fresh matrix; each has a `set_to_*` twin that
/// replaces the contents of an existing one.
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Mat3 {
    /// The first column, the local X-axis.
    pub right: Vec3,
    /// The second column, the local Y-axis.
    pub up: Vec3,
    /// The third column, the local Z-axis. The viewing direction is its negation.
    pub back: Vec3,
}

impl Mat3 {
    /// The 3x3 identity matrix.
    pub const IDENTITY: Self = Self {
        right: Vec3::X,
        up: Vec3::Y,
        back: Vec3::Z,
    };

    /// A 3x3 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        right: Vec3::ZERO,
        up: Vec3::ZERO,
        back: Vec3::ZERO,
    };

    /// Creates a matrix from nine floats, given column by column.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumen_core::math::{Mat3, Vec3};
    /// let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    /// assert_eq!(m.up, Vec3::new(4.0, 5.0, 6.0));
    /// ```
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        rx: f32,
        ry: f32,
        rz: f32,
        ux: f32,
        uy: f32,
        uz: f32,
        bx: f32,
        by: f32,
        bz: f32,
    ) -> Self {
        Self {
            right: Vec3::new(rx, ry, rz),
            up: Vec3::new(ux, uy, uz),
            back: Vec3::new(bx, by, bz),
        }
    }

    /// Creates a new matrix from three column vectors.
    #[inline]
    pub const fn from_cols(right: Vec3, up: Vec3, back: Vec3) -> Self {
        Self { right, up, back }
    }

    /// Builds a basis from an up and a back vector, deriving `right = up × back`.
    ///
    /// When `orthonormalize` is set the result is passed through
    /// [`Mat3::orthonormalize`], which keeps the direction of `back` and
    /// re-derives the other two axes.
    pub fn from_up_back(up: Vec3, back: Vec3, orthonormalize: bool) -> Self {
        let mut m = Self::from_cols(up.cross(back), up, back);
        if orthonormalize {
            m.orthonormalize();
        }
        m
    }

    /// Creates a per-axis scaling matrix.
    #[inline]
    pub fn from_scale(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, z)
    }

    /// Creates a uniform scaling matrix.
    #[inline]
    pub fn from_uniform_scale(scale: f32) -> Self {
        Self::from_scale(scale, scale, scale)
    }

    /// Shears X by Y and Z: `x' = x + shear_y * y + shear_z * z`.
    #[inline]
    pub fn from_shear_x_by_yz(shear_y: f32, shear_z: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.up.x = shear_y;
        m.back.x = shear_z;
        m
    }

    /// Shears Y by X and Z: `y' = y + shear_x * x + shear_z * z`.
    #[inline]
    pub fn from_shear_y_by_xz(shear_x: f32, shear_z: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.right.y = shear_x;
        m.back.y = shear_z;
        m
    }

    /// Shears Z by X and Y: `z' = z + shear_x * x + shear_y * y`.
    #[inline]
    pub fn from_shear_z_by_xy(shear_x: f32, shear_y: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.right.z = shear_x;
        m.up.z = shear_y;
        m
    }

    /// Creates a rotation of `angle_degrees` around the X-axis.
    #[inline]
    pub fn from_rotation_x(angle_degrees: f32) -> Self {
        Self::from_angle_axis(angle_degrees, Vec3::X)
    }

    /// Creates a rotation of `angle_degrees` around the Y-axis.
    #[inline]
    pub fn from_rotation_y(angle_degrees: f32) -> Self {
        Self::from_angle_axis(angle_degrees, Vec3::Y)
    }

    /// Creates a rotation of `angle_degrees` around the Z-axis.
    #[inline]
    pub fn from_rotation_z(angle_degrees: f32) -> Self {
        Self::from_angle_axis(angle_degrees, Vec3::Z)
    }

    /// Creates a rotation of `angle_degrees` around an arbitrary axis (Rodrigues' formula).
    ///
    /// The axis is normalized first and does not need to be unit length. The
    /// resulting basis is orthonormalized to remove floating-point drift.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumen_core::math::{Mat3, Vec3};
    /// let m = Mat3::from_angle_axis(90.0, Vec3::Z);
    /// assert_eq!(m.right, Vec3::Y);
    /// assert_eq!(m.up, -Vec3::X);
    /// ```
    pub fn from_angle_axis(angle_degrees: f32, axis: Vec3) -> Self {
        let a = axis.normalized();
        let (s, c) = degrees_to_radians(angle_degrees).sin_cos();
        let t = 1.0 - c;

        let mut m = Self::from_cols(
            Vec3::new(c + t * a.x * a.x, t * a.x * a.y + s * a.z, t * a.x * a.z - s * a.y),
            Vec3::new(t * a.x * a.y - s * a.z, c + t * a.y * a.y, t * a.y * a.z + s * a.x),
            Vec3::new(t * a.x * a.z + s * a.y, t * a.y * a.z - s * a.x, c + t * a.z * a.z),
        );
        m.orthonormalize();
        m
    }

    // --- In-place builders ---

    /// Replaces the matrix with the identity.
    #[inline]
    pub fn set_to_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Replaces the matrix with all zeros.
    #[inline]
    pub fn set_to_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Replaces the matrix with a per-axis scale.
    #[inline]
    pub fn set_to_scale(&mut self, x: f32, y: f32, z: f32) {
        *self = Self::from_scale(x, y, z);
    }

    /// Replaces the matrix with a uniform scale.
    #[inline]
    pub fn set_to_uniform_scale(&mut self, scale: f32) {
        *self = Self::from_uniform_scale(scale);
    }

    /// Replaces the matrix with [`Mat3::from_shear_x_by_yz`].
    #[inline]
    pub fn set_to_shear_x_by_yz(&mut self, shear_y: f32, shear_z: f32) {
        *self = Self::from_shear_x_by_yz(shear_y, shear_z);
    }

    /// Replaces the matrix with [`Mat3::from_shear_y_by_xz`].
    #[inline]
    pub fn set_to_shear_y_by_xz(&mut self, shear_x: f32, shear_z: f32) {
        *self = Self::from_shear_y_by_xz(shear_x, shear_z);
    }

    /// Replaces the matrix with [`Mat3::from_shear_z_by_xy`].
    #[inline]
    pub fn set_to_shear_z_by_xy(&mut self, shear_x: f32, shear_y: f32) {
        *self = Self::from_shear_z_by_xy(shear_x, shear_y);
    }

    /// Replaces the matrix with a rotation around the X-axis.
    #[inline]
    pub fn set_to_rotation_x(&mut self, angle_degrees: f32) {
        *self = Self::from_rotation_x(angle_degrees);
    }

    /// Replaces the matrix with a rotation around the Y-axis.
    #[inline]
    pub fn set_to_rotation_y(&mut self, angle_degrees: f32) {
        *self = Self::from_rotation_y(angle_degrees);
    }

    /// Replaces the matrix with a rotation around the Z-axis.
    #[inline]
    pub fn set_to_rotation_z(&mut self, angle_degrees: f32) {
        *self = Self::from_rotation_z(angle_degrees);
    }

    /// Replaces the matrix with a rotation around an arbitrary axis.
    #[inline]
    pub fn set_from_angle_axis(&mut self, angle_degrees: f32, axis: Vec3) {
        *self = Self::from_angle_axis(angle_degrees, axis);
    }

    // --- Accessors ---

    /// Returns the viewing direction, the negated back column.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        -self.back
    }

    /// Sets the back column to the negation of `forward`.
    #[inline]
    pub fn set_forward(&mut self, forward: Vec3) {
        self.back = -forward;
    }

    /// Returns a row of the matrix as a `Vec3`.
    ///
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    pub fn get_row(&self, index: usize) -> Vec3 {
        Vec3::new(self.right[index], self.up[index], self.back[index])
    }

    /// Views the matrix as nine contiguous floats in column-major order.
    #[inline]
    pub fn as_array(&self) -> &[f32; 9] {
        bytemuck::cast_ref(self)
    }

    // --- Linear algebra ---

    /// Computes the determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let (r, u, b) = (self.right, self.up, self.back);
        r.x * det2(u.y, b.y, u.z, b.z) - u.x * det2(r.y, b.y, r.z, b.z)
            + b.x * det2(r.y, u.y, r.z, u.z)
    }

    /// Transpose of the cofactor matrix.
    fn adjugate(&self) -> Self {
        let (r, u, b) = (self.right, self.up, self.back);
        Self::new(
            det2(u.y, b.y, u.z, b.z),
            -det2(r.y, b.y, r.z, b.z),
            det2(r.y, u.y, r.z, u.z),
            -det2(u.x, b.x, u.z, b.z),
            det2(r.x, b.x, r.z, b.z),
            -det2(r.x, u.x, r.z, u.z),
            det2(u.x, b.x, u.y, b.y),
            -det2(r.x, b.x, r.y, b.y),
            det2(r.x, u.x, r.y, u.y),
        )
    }

    /// Inverts the matrix in place (adjugate divided by determinant).
    ///
    /// Works for any invertible matrix. A singular matrix is not detected:
    /// the division by a zero determinant leaves non-finite components. Use
    /// [`Mat3::try_inverse`] when singularity is possible.
    pub fn invert(&mut self) {
        let det = self.determinant();
        *self = self.adjugate() * (1.0 / det);
    }

    /// Returns the inverse of the matrix. Same edge case as [`Mat3::invert`].
    #[inline]
    pub fn inverse(&self) -> Self {
        let mut m = *self;
        m.invert();
        m
    }

    /// Returns the inverse, or `None` if the matrix is singular.
    ///
    /// The determinant is compared against [`EPSILON`] times the product of the
    /// column lengths, so uniformly small matrices still invert.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        let scale = self.right.length() * self.up.length() * self.back.length();
        if !det.is_finite() || det.abs() <= EPSILON * scale {
            return None;
        }
        Some(self.adjugate() * (1.0 / det))
    }

    /// Inverts a pure rotation by transposing it.
    ///
    /// Only correct when the matrix is orthonormal with determinant +1. A scaled
    /// or sheared matrix yields a well-defined but wrong result.
    #[inline]
    pub fn invert_rotation(&mut self) {
        self.transpose();
    }

    /// Swaps rows and columns in place.
    #[inline]
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    /// Returns the transpose of the matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        Self::from_cols(self.get_row(0), self.get_row(1), self.get_row(2))
    }

    /// Rebuilds a right-handed orthonormal basis while keeping the direction of `back`.
    ///
    /// `back` is normalized, `right` becomes `normalize(up × back)` and `up`
    /// becomes `normalize(back × right)`.
    pub fn orthonormalize(&mut self) {
        self.back.normalize();
        self.right = self.up.cross(self.back);
        self.right.normalize();
        self.up = self.back.cross(self.right);
        self.up.normalize();
    }

    /// Negates every element in place.
    #[inline]
    pub fn negate(&mut self) {
        *self = -*self;
    }

    /// Applies the matrix to a column vector.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        self.right * v.x + self.up * v.y + self.back * v.z
    }
}

// --- Operator Overloads ---

impl Default for Mat3 {
    /// Returns the 3x3 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for Mat3 {
    /// Column-wise comparison within [`EPSILON`].
    fn eq(&self, other: &Self) -> bool {
        self.right == other.right && self.up == other.up && self.back == other.back
    }
}

impl Add for Mat3 {
    type Output = Self;
    /// Adds two matrices element-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_cols(self.right + rhs.right, self.up + rhs.up, self.back + rhs.back)
    }
}

impl AddAssign for Mat3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Mat3 {
    type Output = Self;
    /// Subtracts two matrices element-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_cols(self.right - rhs.right, self.up - rhs.up, self.back - rhs.back)
    }
}

impl SubAssign for Mat3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Mat3 {
    type Output = Self;
    /// Negates every element.
    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_cols(-self.right, -self.up, -self.back)
    }
}

impl Mul<f32> for Mat3 {
    type Output = Self;
    /// Scales every element.
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::from_cols(self.right * rhs, self.up * rhs, self.back * rhs)
    }
}

impl Mul<Mat3> for f32 {
    type Output = Mat3;
    /// Scales every element.
    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        rhs * self
    }
}

impl MulAssign<f32> for Mat3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Self;
    /// Composes two matrices. `rhs` is applied first.
    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        Self::from_cols(self * rhs.right, self * rhs.up, self * rhs.back)
    }
}

impl MulAssign<Mat3> for Mat3 {
    /// Post-multiplies: `self = self * rhs`.
    #[inline]
    fn mul_assign(&mut self, rhs: Mat3) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    /// Transforms a `Vec3` by this matrix.
    #[inline]
    fn mul(self, v: Vec3) -> Self::Output {
        self.transform(v)
    }
}

impl Index<usize> for Mat3 {
    type Output = Vec3;
    /// Allows accessing a matrix column by index.
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.right,
            1 => &self.up,
            2 => &self.back,
            _ => panic!("Index out of bounds for Mat3"),
        }
    }
}

impl IndexMut<usize> for Mat3 {
    /// Allows mutably accessing a matrix column by index.
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.right,
            1 => &mut self.up,
            2 => &mut self.back,
            _ => panic!("Index out of bounds for Mat3"),
        }
    }
}

impl fmt::Display for Mat3 {
    /// One column per line, `right` first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.right)?;
        writeln!(f, "{}", self.up)?;
        writeln!(f, "{}", self.back)
    }
}

impl AbsDiffEq for Mat3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.right.abs_diff_eq(&other.right, epsilon)
            && self.up.abs_diff_eq(&other.up, epsilon)
            && self.back.abs_diff_eq(&other.back, epsilon)
    }
}

impl RelativeEq for Mat3 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.right.relative_eq(&other.right, epsilon, max_relative)
            && self.up.relative_eq(&other.up, epsilon, max_relative)
            && self.back.relative_eq(&other.back, epsilon, max_relative)
    }
}

// --- Mat4 ---

/// A 4x4 column-major matrix, used here for projections and for handing poses
/// to the renderer.
///
/// There is no general product or inverse: callers only ever build the
/// identity, zero, or one of the projections, and poses are composed as
/// [`Transform`](super::Transform)s before being materialized.
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Mat4 {
    /// The first column.
    pub right: Vec4,
    /// The second column.
    pub up: Vec4,
    /// The third column.
    pub back: Vec4,
    /// The fourth column, holding the translation for affine matrices.
    pub translation: Vec4,
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        right: Vec4::X,
        up: Vec4::Y,
        back: Vec4::Z,
        translation: Vec4::W,
    };

    /// A 4x4 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        right: Vec4::ZERO,
        up: Vec4::ZERO,
        back: Vec4::ZERO,
        translation: Vec4::ZERO,
    };

    /// Creates a new matrix from four column vectors.
    #[inline]
    pub const fn from_cols(right: Vec4, up: Vec4, back: Vec4, translation: Vec4) -> Self {
        Self {
            right,
            up,
            back,
            translation,
        }
    }

    /// Creates a symmetric perspective projection.
    ///
    /// # Arguments
    ///
    /// * `fov_y_degrees`: Vertical field of view in degrees.
    /// * `aspect_ratio`: Width divided by height of the viewport.
    /// * `near`, `far`: Distances to the clipping planes. Depth maps to [-1, 1].
    pub fn perspective(fov_y_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let tan_half_fovy = (degrees_to_radians(fov_y_degrees) / 2.0).tan();
        Self::from_cols(
            Vec4::new(1.0 / (aspect_ratio * tan_half_fovy), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0 / tan_half_fovy, 0.0, 0.0),
            Vec4::new(0.0, 0.0, (near + far) / (near - far), -1.0),
            Vec4::new(0.0, 0.0, 2.0 * far * near / (near - far), 0.0),
        )
    }

    /// Creates a perspective projection for an arbitrary (possibly off-center) frustum.
    ///
    /// `left`, `right`, `bottom` and `top` are measured on the near plane.
    pub fn perspective_off_center(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let width = right - left;
        let height = top - bottom;
        Self::from_cols(
            Vec4::new(2.0 * near / width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * near / height, 0.0, 0.0),
            Vec4::new(
                (right + left) / width,
                (top + bottom) / height,
                (near + far) / (near - far),
                -1.0,
            ),
            Vec4::new(0.0, 0.0, 2.0 * far * near / (near - far), 0.0),
        )
    }

    /// Creates an orthographic projection mapping the given box to clip space.
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let width = right - left;
        let height = top - bottom;
        Self::from_cols(
            Vec4::new(2.0 / width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / height, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 2.0 / (near - far), 0.0),
            Vec4::new(
                -(right + left) / width,
                -(top + bottom) / height,
                (near + far) / (near - far),
                1.0,
            ),
        )
    }

    /// Replaces the matrix with the identity.
    #[inline]
    pub fn set_to_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Replaces the matrix with all zeros.
    #[inline]
    pub fn set_to_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Replaces the matrix with [`Mat4::perspective`].
    #[inline]
    pub fn set_to_perspective(
        &mut self,
        fov_y_degrees: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) {
        *self = Self::perspective(fov_y_degrees, aspect_ratio, near, far);
    }

    /// Replaces the matrix with [`Mat4::perspective_off_center`].
    #[inline]
    pub fn set_to_perspective_off_center(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) {
        *self = Self::perspective_off_center(left, right, bottom, top, near, far);
    }

    /// Replaces the matrix with [`Mat4::orthographic`].
    #[inline]
    pub fn set_to_orthographic(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) {
        *self = Self::orthographic(left, right, bottom, top, near, far);
    }

    /// Returns a row of the matrix as a `Vec4`.
    ///
    /// # Panics
    /// Panics if `index` is greater than 3.
    #[inline]
    pub fn get_row(&self, index: usize) -> Vec4 {
        Vec4::new(
            self.right[index],
            self.up[index],
            self.back[index],
            self.translation[index],
        )
    }

    /// Views the matrix as sixteen contiguous floats in column-major order,
    /// the layout expected by shader uniform uploads.
    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }
}

// --- Operators Overloading ---

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for Mat4 {
    /// Column-wise comparison within [`EPSILON`].
    fn eq(&self, other: &Self) -> bool {
        self.right == other.right
            && self.up == other.up
            && self.back == other.back
            && self.translation == other.translation
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    /// Transforms a `Vec4` by this matrix.
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.right * rhs.x + self.up * rhs.y + self.back * rhs.z + self.translation * rhs.w
    }
}

impl fmt::Display for Mat4 {
    /// One conceptual row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            writeln!(f, "{}", self.get_row(row))?;
        }
        Ok(())
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.right.abs_diff_eq(&other.right, epsilon)
            && self.up.abs_diff_eq(&other.up, epsilon)
            && self.back.abs_diff_eq(&other.back, epsilon)
            && self.translation.abs_diff_eq(&other.translation, epsilon)
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.right.relative_eq(&other.right, epsilon, max_relative)
            && self.up.relative_eq(&other.up, epsilon, max_relative)
            && self.back.relative_eq(&other.back, epsilon, max_relative)
            && self
                .translation
                .relative_eq(&other.translation, epsilon, max_relative)
    }
}

// --- Tests ---
