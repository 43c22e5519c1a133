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

// Lumen Sandbox
// Headless replay of the solar demo: every frame's uniforms are recorded and logged.

mod commands;
mod settings;
mod solar;

use anyhow::{Context, Result};
use lumen_core::Camera;
use lumen_scene::{Scene, UniformRecorder};

use crate::settings::SandboxSettings;

fn render_frame(frame: usize, camera: &Camera, scene: &Scene, recorder: &mut UniformRecorder) {
    recorder.clear();
    scene.draw(camera, recorder);

    log::info!(
        "Frame {}: eye {:?}, projection {:?}, active mesh {:?}, {} uniforms",
        frame,
        camera.eye_position(),
        camera.projection(),
        scene.active_mesh_name(),
        recorder.len()
    );
    log::debug!("Projection:\n{}", camera.projection_matrix());
    log::debug!("View:\n{}", camera.view_matrix());
    if let Ok(mesh) = scene.active_mesh() {
        log::debug!("Active model-view:\n{}", camera.view_matrix() * *mesh.world());
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => SandboxSettings::load(&path)
            .with_context(|| format!("Failed to load sandbox settings from {}", path))?,
        None => {
            let settings = SandboxSettings::default();
            log::info!("No settings file given, using the built-in demo");
            log::debug!("Built-in settings:\n{}", settings.to_ron()?);
            settings
        }
    };
    let commands = settings
        .commands()
        .context("Failed to build the command replay")?;

    let mut camera = Camera::from_settings(&settings.camera_settings());
    let mut scene = solar::build_scene().context("Failed to build the solar scene")?;
    let mut recorder = UniformRecorder::new();

    render_frame(0, &camera, &scene, &mut recorder);
    for (index, command) in commands.iter().enumerate() {
        if command.targets_mesh() {
            log::debug!("Applying {:?} to {:?}", command, scene.active_mesh_name());
        } else {
            log::debug!("Applying {:?}", command);
        }
        if let Err(e) = command.apply(&mut camera, &mut scene, &settings) {
            log::warn!("Skipping {:?}: {}", command, e);
        }
        render_frame(index + 1, &camera, &scene, &mut recorder);
    }

    log::info!("Replayed {} commands", commands.len());
    Ok(())
}
