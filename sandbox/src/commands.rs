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

//! Scripted input, one command per frame.

use lumen_core::Camera;
use lumen_scene::{Scene, SceneResult};
use serde::{Deserialize, Serialize};

use crate::settings::SandboxSettings;

/// Distance a single key press moves the camera or the active mesh.
pub const MOVEMENT_DELTA: f32 = 0.1;
/// Degrees a single key press turns the active mesh.
pub const TURN_DELTA: f32 = MOVEMENT_DELTA * 5.0;
/// Degrees of camera turn per pixel of mouse drag.
pub const MOUSE_SENSITIVITY: f32 = 0.05;

/// One input event for the camera, its projection, or the active mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    // Camera
    MoveRight(f32),
    MoveUp(f32),
    MoveBack(f32),
    Yaw(f32),
    Pitch(f32),
    Roll(f32),
    ResetPose,
    /// Scroll wheel: widens the field of view by this many degrees.
    Zoom(f32),
    /// Left-button drag by a pixel offset.
    MouseLook { dx: f32, dy: f32 },
    /// Right-button drag by a horizontal pixel offset.
    MouseRoll { dx: f32 },
    /// Framebuffer resize.
    Resize { width: u32, height: u32 },

    // Projection
    SymmetricPerspective,
    AsymmetricPerspective,
    Orthographic,

    // Active mesh
    MeshMoveRight(f32),
    MeshMoveUp(f32),
    MeshMoveBack(f32),
    MeshYaw(f32),
    MeshPitch(f32),
    MeshRoll(f32),
    MeshScale(f32),
    NextMesh,
    PreviousMesh,
}

impl Command {
    /// Maps a keyboard key to the command it triggers in the interactive demo.
    pub fn from_key(key: char) -> Option<Self> {
        let d = MOVEMENT_DELTA;
        let t = TURN_DELTA;
        let command = match key.to_ascii_lowercase() {
            'a' => Command::MoveRight(-d),
            'd' => Command::MoveRight(d),
            'c' => Command::MoveUp(-d),
            'f' => Command::MoveUp(d),
            'w' => Command::MoveBack(-d),
            's' => Command::MoveBack(d),
            'r' => Command::ResetPose,
            'p' => Command::SymmetricPerspective,
            '[' => Command::AsymmetricPerspective,
            'o' => Command::Orthographic,
            'j' => Command::MeshYaw(t),
            'l' => Command::MeshYaw(-t),
            'i' => Command::MeshPitch(t),
            'k' => Command::MeshPitch(-t),
            'm' => Command::MeshRoll(t),
            'n' => Command::MeshRoll(-t),
            '1' => Command::MeshMoveRight(-d),
            '2' => Command::MeshMoveRight(d),
            '3' => Command::MeshMoveUp(-d),
            '4' => Command::MeshMoveUp(d),
            '5' => Command::MeshMoveBack(-d),
            '6' => Command::MeshMoveBack(d),
            '7' => Command::MeshScale(1.01),
            '8' => Command::MeshScale(0.99),
            '-' => Command::PreviousMesh,
            '=' => Command::NextMesh,
            _ => return None,
        };
        Some(command)
    }

    /// Returns `true` for commands that act on the active mesh.
    pub fn targets_mesh(&self) -> bool {
        matches!(
            self,
            Command::MeshMoveRight(_)
                | Command::MeshMoveUp(_)
                | Command::MeshMoveBack(_)
                | Command::MeshYaw(_)
                | Command::MeshPitch(_)
                | Command::MeshRoll(_)
                | Command::MeshScale(_)
        )
    }

    /// Applies the command.
    ///
    /// Fails only when a mesh command finds no active mesh.
    pub fn apply(
        &self,
        camera: &mut Camera,
        scene: &mut Scene,
        settings: &SandboxSettings,
    ) -> SceneResult<()> {
        match *self {
            Command::MoveRight(d) => camera.move_right(d),
            Command::MoveUp(d) => camera.move_up(d),
            Command::MoveBack(d) => camera.move_back(d),
            Command::Yaw(deg) => camera.yaw(deg),
            Command::Pitch(deg) => camera.pitch(deg),
            Command::Roll(deg) => camera.roll(deg),
            Command::ResetPose => camera.reset_pose(),
            Command::Zoom(deg) => camera.zoom(deg),
            Command::MouseLook { dx, dy } => {
                camera.yaw(MOUSE_SENSITIVITY * dx);
                camera.pitch(MOUSE_SENSITIVITY * dy);
            }
            Command::MouseRoll { dx } => camera.roll(MOUSE_SENSITIVITY * dx),
            Command::Resize { width, height } => camera.set_aspect_ratio(width, height),

            // Zooming by nothing rebuilds the remembered symmetric perspective.
            Command::SymmetricPerspective => camera.zoom(0.0),
            Command::AsymmetricPerspective => {
                let f = settings.asymmetric_frustum;
                camera.set_projection_asymmetric_perspective(
                    f.left, f.right, f.bottom, f.top, f.near, f.far,
                );
            }
            Command::Orthographic => {
                let f = settings.orthographic_frustum;
                camera.set_projection_orthographic(f.left, f.right, f.bottom, f.top, f.near, f.far);
            }

            Command::MeshMoveRight(d) => scene.active_mesh_mut()?.world_mut().move_right(d),
            Command::MeshMoveUp(d) => scene.active_mesh_mut()?.world_mut().move_up(d),
            Command::MeshMoveBack(d) => scene.active_mesh_mut()?.world_mut().move_back(d),
            Command::MeshYaw(deg) => scene.active_mesh_mut()?.world_mut().yaw(deg),
            Command::MeshPitch(deg) => scene.active_mesh_mut()?.world_mut().pitch(deg),
            Command::MeshRoll(deg) => scene.active_mesh_mut()?.world_mut().roll(deg),
            Command::MeshScale(s) => scene.active_mesh_mut()?.world_mut().scale_local(s),
            Command::NextMesh => {
                if let Some(name) = scene.activate_next_mesh() {
                    log::info!("Active mesh: {}", name);
                }
            }
            Command::PreviousMesh => {
                if let Some(name) = scene.activate_previous_mesh() {
                    log::info!("Active mesh: {}", name);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::math::Vec3;
    use lumen_core::Projection;
    use lumen_scene::{Mesh, SceneError, VertexLayout};

    fn setup() -> (Camera, Scene, SandboxSettings) {
        let settings = SandboxSettings::default();
        let camera = Camera::from_settings(&settings.camera);
        let mut scene = Scene::new();
        scene.add("a", Mesh::new(VertexLayout::Positions));
        scene.add("b", Mesh::new(VertexLayout::Positions));
        (camera, scene, settings)
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(Command::from_key('A'), Some(Command::MoveRight(-0.1)));
        assert_eq!(Command::from_key('l'), Some(Command::MeshYaw(-0.5)));
        assert_eq!(Command::from_key('7'), Some(Command::MeshScale(1.01)));
        assert_eq!(Command::from_key('['), Some(Command::AsymmetricPerspective));
        assert_eq!(Command::from_key('x'), None);
        assert!(Command::from_key('5').is_some_and(|c| c.targets_mesh()));
        assert!(!Command::NextMesh.targets_mesh());
    }

    #[test]
    fn test_camera_commands() {
        let (mut camera, mut scene, settings) = setup();
        for key in "ddw".chars() {
            let command = Command::from_key(key).unwrap();
            command.apply(&mut camera, &mut scene, &settings).unwrap();
        }
        let eye = camera.eye_position();
        assert!((eye.x - 0.2).abs() < 1e-5);
        assert!((eye.z - 11.9).abs() < 1e-5);

        Command::ResetPose
            .apply(&mut camera, &mut scene, &settings)
            .unwrap();
        assert_eq!(camera.eye_position(), Vec3::new(0.0, 0.0, 12.0));
    }

    #[test]
    fn test_projection_switches() {
        let (mut camera, mut scene, settings) = setup();

        Command::Orthographic
            .apply(&mut camera, &mut scene, &settings)
            .unwrap();
        assert_eq!(
            camera.projection(),
            Projection::Orthographic(settings.orthographic_frustum)
        );

        Command::Zoom(-10.0)
            .apply(&mut camera, &mut scene, &settings)
            .unwrap();
        assert!(matches!(
            camera.projection(),
            Projection::SymmetricPerspective { fov_y_degrees, .. } if fov_y_degrees == 40.0
        ));

        Command::AsymmetricPerspective
            .apply(&mut camera, &mut scene, &settings)
            .unwrap();
        Command::SymmetricPerspective
            .apply(&mut camera, &mut scene, &settings)
            .unwrap();
        assert_eq!(camera.fov_y_degrees(), 40.0);
        assert!(matches!(
            camera.projection(),
            Projection::SymmetricPerspective { .. }
        ));
    }

    #[test]
    fn test_mesh_commands_follow_active_mesh() {
        let (mut camera, mut scene, settings) = setup();
        Command::NextMesh
            .apply(&mut camera, &mut scene, &settings)
            .unwrap();
        Command::MeshMoveUp(0.1)
            .apply(&mut camera, &mut scene, &settings)
            .unwrap();

        assert_eq!(
            scene.mesh("b").unwrap().world().position(),
            Vec3::new(0.0, 0.1, 0.0)
        );
        assert_eq!(scene.mesh("a").unwrap().world().position(), Vec3::ZERO);
    }

    #[test]
    fn test_mesh_command_on_empty_scene() {
        let settings = SandboxSettings::default();
        let mut camera = Camera::from_settings(&settings.camera);
        let mut scene = Scene::new();
        let result = Command::MeshYaw(0.5).apply(&mut camera, &mut scene, &settings);
        assert_eq!(result, Err(SceneError::NoActiveMesh));
    }
}
