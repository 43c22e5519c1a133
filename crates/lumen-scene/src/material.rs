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

//! Surface reflection properties for Phong shading.

use lumen_core::math::Vec3;
use serde::{Deserialize, Serialize};

use crate::uniforms::UniformSink;

/// How a surface reflects each kind of light, plus its own emission.
///
/// Colors are linear RGB in `[0, 1]`. Uploaded as the `uMaterial` struct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    ambient: Vec3,
    diffuse: Vec3,
    specular: Vec3,
    emissive: Vec3,
    shininess: f32,
}

impl Material {
    /// Creates a material from its reflection coefficients.
    pub fn new(
        ambient: Vec3,
        diffuse: Vec3,
        specular: Vec3,
        emissive: Vec3,
        shininess: f32,
    ) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            emissive,
            shininess,
        }
    }

    // --- Presets ---

    /// Emerald.
    pub fn emerald() -> Self {
        Self::new(
            Vec3::new(0.0215, 0.1745, 0.00215),
            Vec3::new(0.07568, 0.61424, 0.07568),
            Vec3::new(0.633, 0.727811, 0.633),
            Vec3::splat(0.5),
            0.6,
        )
    }

    /// Polished gold.
    pub fn gold() -> Self {
        Self::new(
            Vec3::new(0.24725, 0.1995, 0.0745),
            Vec3::new(0.75164, 0.60648, 0.22648),
            Vec3::new(0.628281, 0.555802, 0.366065),
            Vec3::splat(0.5),
            0.4,
        )
    }

    /// Matte red rubber.
    pub fn red_rubber() -> Self {
        Self::new(
            Vec3::new(0.05, 0.05, 0.05),
            Vec3::new(0.5, 0.4, 0.4),
            Vec3::new(0.7, 0.04, 0.04),
            Vec3::splat(0.5),
            0.078125,
        )
    }

    /// Cyan plastic.
    pub fn cyan_plastic() -> Self {
        Self::new(
            Vec3::new(0.0, 0.1, 0.06),
            Vec3::new(0.0, 0.50980392, 0.50980392),
            Vec3::new(0.50196078, 0.50196078, 0.50196078),
            Vec3::splat(0.5),
            0.25,
        )
    }

    /// Looks a preset up by its snake_case name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "emerald" => Some(Self::emerald()),
            "gold" => Some(Self::gold()),
            "red_rubber" => Some(Self::red_rubber()),
            "cyan_plastic" => Some(Self::cyan_plastic()),
            _ => None,
        }
    }

    // --- Accessors ---

    /// Ambient reflection.
    pub fn ambient(&self) -> Vec3 {
        self.ambient
    }

    /// Sets the ambient reflection.
    pub fn set_ambient_reflection(&mut self, ambient: Vec3) {
        self.ambient = ambient;
    }

    /// Diffuse reflection.
    pub fn diffuse(&self) -> Vec3 {
        self.diffuse
    }

    /// Sets the diffuse reflection.
    pub fn set_diffuse_reflection(&mut self, diffuse: Vec3) {
        self.diffuse = diffuse;
    }

    /// Specular reflection.
    pub fn specular(&self) -> Vec3 {
        self.specular
    }

    /// Sets the specular reflection.
    pub fn set_specular_reflection(&mut self, specular: Vec3) {
        self.specular = specular;
    }

    /// Emitted color, independent of lighting.
    pub fn emissive(&self) -> Vec3 {
        self.emissive
    }

    /// Sets the emitted color.
    pub fn set_emissive_reflection(&mut self, emissive: Vec3) {
        self.emissive = emissive;
    }

    /// Specular exponent scale.
    pub fn shininess(&self) -> f32 {
        self.shininess
    }

    /// Sets the specular exponent scale.
    pub fn set_shininess(&mut self, shininess: f32) {
        self.shininess = shininess;
    }

    /// Uploads the material into the `uMaterial` uniform struct.
    pub fn upload(&self, sink: &mut dyn UniformSink) {
        sink.set_uniform_vec3("uMaterial.ambientReflection", self.ambient);
        sink.set_uniform_vec3("uMaterial.diffuseReflection", self.diffuse);
        sink.set_uniform_vec3("uMaterial.specularReflection", self.specular);
        sink.set_uniform_vec3("uMaterial.emissiveReflection", self.emissive);
        sink.set_uniform_f32("uMaterial.shininess", self.shininess);
    }
}
