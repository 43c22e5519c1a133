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

//! Provides the linear-algebra primitives the renderer is built on.
//!
//! This module contains the vector and matrix types, plus [`Transform`], the
//! pose type (orientation, scale and position) used for every mesh placement
//! and camera move.
//!
//! Matrices are stored as named basis columns (`right`, `up`, `back`, and for
//! [`Mat4`] a `translation` column). Unlike most of the engine, the rotation
//! builders on [`Mat3`] and [`Transform`] take their angles in **degrees**.
//!
//! Equality on every type in this module is tolerance based: two values compare
//! equal when each component differs by less than [`EPSILON`].

// --- Fundamental Constants ---

/// The absolute per-component tolerance used by `==` on all math types.
pub const EPSILON: f32 = 1e-5;

pub use std::f32::consts::PI;

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;

// --- Declare Sub-Modules ---

pub mod matrix;
pub mod transform;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::matrix::{Mat3, Mat4};
pub use self::transform::Transform;
pub use self::vector::{Vec3, Vec4};

// --- Utility Functions ---

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use lumen_core::math::{degrees_to_radians, PI};
/// assert!((degrees_to_radians(180.0) - PI).abs() < 1e-6);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}
