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

//! The viewing camera: a world pose, its cached inverse, and a projection.

use serde::{Deserialize, Serialize};

use crate::math::{Mat3, Mat4, Transform, Vec3};

/// Smallest vertical field of view reachable through [`Camera::zoom`], in degrees.
pub const MIN_FOV_Y_DEGREES: f32 = 1.0;
/// Largest vertical field of view reachable through [`Camera::zoom`], in degrees.
pub const MAX_FOV_Y_DEGREES: f32 = 120.0;

/// An explicit view volume, measured on the near plane for perspective frusta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frustum {
    /// Left edge.
    pub left: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
    /// Top edge.
    pub top: f32,
    /// Distance to the near clipping plane.
    pub near: f32,
    /// Distance to the far clipping plane.
    pub far: f32,
}

impl Frustum {
    /// Creates a view volume from its six bounds.
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        }
    }
}

/// Defines the active camera projection. The modes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Projection {
    /// Perspective with a frustum centered on the view axis.
    SymmetricPerspective {
        /// The vertical field of view in degrees.
        fov_y_degrees: f32,
        /// Width divided by height of the viewport.
        aspect_ratio: f32,
        /// Distance to the near clipping plane.
        near: f32,
        /// Distance to the far clipping plane.
        far: f32,
    },
    /// Perspective with explicit, possibly off-center, frustum bounds.
    AsymmetricPerspective(Frustum),
    /// Parallel projection of an axis-aligned box.
    Orthographic(Frustum),
}

impl Projection {
    /// Builds the projection matrix for this mode.
    pub fn to_mat4(&self) -> Mat4 {
        match *self {
            Projection::SymmetricPerspective {
                fov_y_degrees,
                aspect_ratio,
                near,
                far,
            } => Mat4::perspective(fov_y_degrees, aspect_ratio, near, far),
            Projection::AsymmetricPerspective(f) => {
                Mat4::perspective_off_center(f.left, f.right, f.bottom, f.top, f.near, f.far)
            }
            Projection::Orthographic(f) => {
                Mat4::orthographic(f.left, f.right, f.bottom, f.top, f.near, f.far)
            }
        }
    }
}

/// Construction parameters for a [`Camera`].
///
/// Missing fields fall back to [`CameraSettings::default`] when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Initial eye position in world coordinates.
    pub eye: Vec3,
    /// Initial back direction; the camera looks along its negation.
    pub local_back: Vec3,
    /// Distance to the near clipping plane.
    pub near: f32,
    /// Distance to the far clipping plane.
    pub far: f32,
    /// Width divided by height of the viewport.
    pub aspect_ratio: f32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
}

impl Default for CameraSettings {
    /// A camera twelve units down +Z looking at the origin through a 50° lens.
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 12.0),
            local_back: Vec3::Z,
            near: 0.01,
            far: 40.0,
            aspect_ratio: 1200.0 / 900.0,
            fov_y_degrees: 50.0,
        }
    }
}

/// A camera holding its world pose, the pose it started from, and a projection.
///
/// The view transform is the inverse of the world pose. It is refreshed by
/// every pose mutator, so [`Camera::view_matrix`] is always current.
///
/// The symmetric-perspective parameters (field of view, aspect ratio, clip
/// distances) are remembered even while another projection is active, so
/// [`Camera::zoom`] and [`Camera::set_aspect_ratio`] can rebuild it.
///
/// # Examples
///
/// ```
/// use lumen_core::camera::Camera;
/// use lumen_core::math::Vec3;
///
/// let mut camera = Camera::new(Vec3::new(0.0, 0.0, 12.0), Vec3::Z, 0.01, 40.0, 4.0 / 3.0, 50.0);
/// camera.move_right(1.0);
/// assert_eq!(camera.eye_position(), Vec3::new(1.0, 0.0, 12.0));
/// ```
#[derive(Debug, Clone)]
pub struct Camera {
    world: Transform,
    init_world: Transform,
    view: Transform,
    projection: Projection,
    projection_matrix: Mat4,
    fov_y_degrees: f32,
    aspect_ratio: f32,
    near: f32,
    far: f32,
}

impl Camera {
    /// Creates a camera at `eye` whose back axis follows `local_back`.
    ///
    /// The orientation is orthonormalized against world up `(0, 1, 0)`, so
    /// `local_back` must not be parallel to it. The projection starts as a
    /// symmetric perspective.
    pub fn new(
        eye: Vec3,
        local_back: Vec3,
        near: f32,
        far: f32,
        aspect_ratio: f32,
        fov_y_degrees: f32,
    ) -> Self {
        let world = Transform::from_parts(Mat3::from_up_back(Vec3::Y, local_back, true), eye);
        let projection = Projection::SymmetricPerspective {
            fov_y_degrees,
            aspect_ratio,
            near,
            far,
        };
        let mut camera = Self {
            world,
            init_world: world,
            view: Transform::new(),
            projection,
            projection_matrix: projection.to_mat4(),
            fov_y_degrees,
            aspect_ratio,
            near,
            far,
        };
        camera.compute_view_matrix();
        camera
    }

    /// Creates a camera from a [`CameraSettings`].
    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self::new(
            settings.eye,
            settings.local_back,
            settings.near,
            settings.far,
            settings.aspect_ratio,
            settings.fov_y_degrees,
        )
    }

    // --- Pose ---

    /// Moves the eye to `position`, keeping the orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.world.set_position(position);
        self.compute_view_matrix();
    }

    /// Moves along the camera's right axis.
    pub fn move_right(&mut self, distance: f32) {
        self.world.move_right(distance);
        self.compute_view_matrix();
    }

    /// Moves along the camera's up axis.
    pub fn move_up(&mut self, distance: f32) {
        self.world.move_up(distance);
        self.compute_view_matrix();
    }

    /// Moves along the camera's back axis. Negative distances move forward.
    pub fn move_back(&mut self, distance: f32) {
        self.world.move_back(distance);
        self.compute_view_matrix();
    }

    /// Turns around the camera's up axis.
    pub fn yaw(&mut self, degrees: f32) {
        self.world.yaw(degrees);
        self.compute_view_matrix();
    }

    /// Turns around the camera's right axis.
    pub fn pitch(&mut self, degrees: f32) {
        self.world.pitch(degrees);
        self.compute_view_matrix();
    }

    /// Turns around the camera's back axis.
    pub fn roll(&mut self, degrees: f32) {
        self.world.roll(degrees);
        self.compute_view_matrix();
    }

    /// Restores the pose the camera was constructed with. The projection is kept.
    pub fn reset_pose(&mut self) {
        log::debug!("Camera pose reset to {:?}", self.init_world.position());
        self.world = self.init_world;
        self.compute_view_matrix();
    }

    /// Returns the eye position in world coordinates.
    #[inline]
    pub fn eye_position(&self) -> Vec3 {
        self.world.position()
    }

    /// Returns the current world pose.
    #[inline]
    pub fn world(&self) -> &Transform {
        &self.world
    }

    /// Returns the cached view transform.
    #[inline]
    pub fn view_matrix(&self) -> Transform {
        self.view
    }

    /// Recomputes the view transform from the world pose, caches it and returns it.
    ///
    /// The view is `rotation_inverse * translation_inverse`: the world
    /// orientation rigidly inverted, composed with a translation by the
    /// negated eye position.
    pub fn compute_view_matrix(&mut self) -> Transform {
        let mut rotation_inverse = Transform::from_parts(self.world.orientation(), Vec3::ZERO);
        rotation_inverse.invert_rt();
        let translation_inverse = Transform::from_parts(Mat3::IDENTITY, -self.world.position());
        self.view = rotation_inverse * translation_inverse;
        self.view
    }

    // --- Projection ---

    fn apply_projection(&mut self, projection: Projection) {
        if std::mem::discriminant(&projection) != std::mem::discriminant(&self.projection) {
            log::debug!("Camera projection switched to {:?}", projection);
        }
        self.projection = projection;
        self.projection_matrix = projection.to_mat4();
    }

    /// Switches to a symmetric perspective and remembers its parameters.
    pub fn set_projection_symmetric_perspective(
        &mut self,
        fov_y_degrees: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) {
        self.fov_y_degrees = fov_y_degrees;
        self.aspect_ratio = aspect_ratio;
        self.near = near;
        self.far = far;
        self.apply_projection(Projection::SymmetricPerspective {
            fov_y_degrees,
            aspect_ratio,
            near,
            far,
        });
    }

    /// Switches to a perspective with explicit frustum bounds.
    pub fn set_projection_asymmetric_perspective(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) {
        self.apply_projection(Projection::AsymmetricPerspective(Frustum::new(
            left, right, bottom, top, near, far,
        )));
    }

    /// Switches to an orthographic projection of the given box.
    pub fn set_projection_orthographic(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) {
        self.apply_projection(Projection::Orthographic(Frustum::new(
            left, right, bottom, top, near, far,
        )));
    }

    /// Returns the current projection matrix.
    #[inline]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    /// Returns the active projection mode and its parameters.
    #[inline]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Returns the remembered vertical field of view in degrees.
    #[inline]
    pub fn fov_y_degrees(&self) -> f32 {
        self.fov_y_degrees
    }

    /// Returns the remembered aspect ratio.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Widens (positive) or narrows (negative) the vertical field of view.
    ///
    /// The result is clamped to [`MIN_FOV_Y_DEGREES`]..=[`MAX_FOV_Y_DEGREES`]
    /// and the camera returns to a symmetric perspective.
    pub fn zoom(&mut self, delta_degrees: f32) {
        let fov =
            (self.fov_y_degrees + delta_degrees).clamp(MIN_FOV_Y_DEGREES, MAX_FOV_Y_DEGREES);
        self.set_projection_symmetric_perspective(fov, self.aspect_ratio, self.near, self.far);
    }

    /// Adapts to a new viewport size, rebuilding the symmetric perspective.
    ///
    /// A zero height is ignored.
    pub fn set_aspect_ratio(&mut self, width: u32, height: u32) {
        if height == 0 {
            log::warn!("Ignoring viewport resize to {}x{}", width, height);
            return;
        }
        let aspect_ratio = width as f32 / height as f32;
        self.set_projection_symmetric_perspective(
            self.fov_y_degrees,
            aspect_ratio,
            self.near,
            self.far,
        );
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_settings(&CameraSettings::default())
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_camera_orientation() {
        let camera = Camera::default();
        assert_eq!(camera.eye_position(), Vec3::new(0.0, 0.0, 12.0));
        assert_eq!(camera.world().orientation(), Mat3::IDENTITY);
        assert!(matches!(
            camera.projection(),
            Projection::SymmetricPerspective { .. }
        ));
    }

    #[test]
    fn test_view_is_inverse_of_world() {
        let mut camera = Camera::default();
        camera.yaw(30.0);
        camera.move_up(2.0);
        camera.pitch(-10.0);

        let eye_in_view = camera.view_matrix().transform_point(camera.eye_position());
        assert_abs_diff_eq!(eye_in_view, Vec3::ZERO, epsilon = 1e-4);

        let combined = *camera.world() * camera.view_matrix();
        assert_abs_diff_eq!(combined.orientation(), Mat3::IDENTITY, epsilon = 1e-5);
        assert_abs_diff_eq!(combined.position(), Vec3::ZERO, epsilon = 1e-4);
    }

    #[test]
    fn test_mutators_refresh_view() {
        let mut camera = Camera::default();
        let before = camera.view_matrix();
        camera.set_position(Vec3::new(1.0, 2.0, 3.0));
        assert_ne!(camera.view_matrix(), before);
        assert_eq!(
            camera.view_matrix().position(),
            Vec3::new(-1.0, -2.0, -3.0)
        );

        let cached = camera.view_matrix();
        assert_eq!(camera.compute_view_matrix(), cached);
    }

    #[test]
    fn test_reset_pose_keeps_projection() {
        let mut camera = Camera::default();
        camera.set_projection_orthographic(-4.0, 6.0, -6.0, 5.0, 2.0, 30.0);
        let initial_view = Camera::default().view_matrix();

        camera.roll(45.0);
        camera.move_back(-3.0);
        camera.reset_pose();

        assert_eq!(camera.eye_position(), Vec3::new(0.0, 0.0, 12.0));
        assert_eq!(camera.view_matrix(), initial_view);
        assert!(matches!(camera.projection(), Projection::Orthographic(_)));
    }

    #[test]
    fn test_projection_modes() {
        let mut camera = Camera::default();
        camera.set_projection_asymmetric_perspective(-4.0, 6.0, -6.0, 5.0, 2.0, 20.0);
        assert_eq!(
            camera.projection_matrix(),
            Mat4::perspective_off_center(-4.0, 6.0, -6.0, 5.0, 2.0, 20.0)
        );

        camera.set_projection_orthographic(-4.0, 6.0, -6.0, 5.0, 2.0, 30.0);
        assert_eq!(
            camera.projection_matrix(),
            Mat4::orthographic(-4.0, 6.0, -6.0, 5.0, 2.0, 30.0)
        );

        camera.set_projection_symmetric_perspective(70.0, 2.0, 0.5, 10.0);
        assert_eq!(
            camera.projection_matrix(),
            Mat4::perspective(70.0, 2.0, 0.5, 10.0)
        );
    }

    #[test]
    fn test_zoom_clamps_and_restores_perspective() {
        let mut camera = Camera::default();
        camera.set_projection_orthographic(-4.0, 6.0, -6.0, 5.0, 2.0, 30.0);

        camera.zoom(-10.0);
        assert_eq!(camera.fov_y_degrees(), 40.0);
        assert_eq!(
            camera.projection(),
            Projection::SymmetricPerspective {
                fov_y_degrees: 40.0,
                aspect_ratio: 1200.0 / 900.0,
                near: 0.01,
                far: 40.0,
            }
        );

        camera.zoom(500.0);
        assert_eq!(camera.fov_y_degrees(), MAX_FOV_Y_DEGREES);
        camera.zoom(-500.0);
        assert_eq!(camera.fov_y_degrees(), MIN_FOV_Y_DEGREES);
    }

    #[test]
    fn test_set_aspect_ratio() {
        let mut camera = Camera::default();
        camera.set_aspect_ratio(800, 400);
        assert_eq!(camera.aspect_ratio(), 2.0);
        assert_eq!(
            camera.projection_matrix(),
            Mat4::perspective(50.0, 2.0, 0.01, 40.0)
        );

        camera.set_aspect_ratio(800, 0);
        assert_eq!(camera.aspect_ratio(), 2.0);
    }

    #[test]
    fn test_settings_partial_deserialization() {
        let settings: CameraSettings = ron::from_str("(fov_y_degrees: 70.0)").unwrap();
        assert_eq!(settings.fov_y_degrees, 70.0);
        assert_eq!(settings.eye, CameraSettings::default().eye);
        assert_eq!(settings.far, 40.0);
    }
}
