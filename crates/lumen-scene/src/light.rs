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

//! Light sources and their shader upload.

use lumen_core::math::Vec3;
use serde::{Deserialize, Serialize};

use crate::uniforms::UniformSink;

/// The geometry of a light. The discriminant is uploaded as `uLights[i].type`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LightKind {
    /// Parallel rays from infinitely far away, like the sun.
    Directional {
        /// Direction the light travels.
        direction: Vec3,
    },
    /// Radiates equally in all directions from a point.
    Point {
        /// World position.
        position: Vec3,
        /// Constant, linear and quadratic attenuation coefficients.
        attenuation: Vec3,
    },
    /// A point light restricted to a cone.
    Spot {
        /// World position.
        position: Vec3,
        /// Constant, linear and quadratic attenuation coefficients.
        attenuation: Vec3,
        /// Axis of the cone.
        direction: Vec3,
        /// Cosine of the cone's half angle.
        cutoff_cos_angle: f32,
        /// Exponent shaping the intensity falloff towards the cone edge.
        falloff: f32,
    },
}

impl LightKind {
    /// The shader-side type code: 0 directional, 1 point, 2 spot.
    pub fn type_code(&self) -> i32 {
        match self {
            LightKind::Directional { .. } => 0,
            LightKind::Point { .. } => 1,
            LightKind::Spot { .. } => 2,
        }
    }
}

/// A light with its intensities and geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightSource {
    /// Diffuse intensity per channel.
    pub diffuse_intensity: Vec3,
    /// Specular intensity per channel.
    pub specular_intensity: Vec3,
    /// What kind of light this is.
    pub kind: LightKind,
}

impl LightSource {
    /// Creates a directional light.
    pub fn directional(
        diffuse_intensity: Vec3,
        specular_intensity: Vec3,
        direction: Vec3,
    ) -> Self {
        Self {
            diffuse_intensity,
            specular_intensity,
            kind: LightKind::Directional { direction },
        }
    }

    /// Creates a point light.
    pub fn point(
        diffuse_intensity: Vec3,
        specular_intensity: Vec3,
        position: Vec3,
        attenuation: Vec3,
    ) -> Self {
        Self {
            diffuse_intensity,
            specular_intensity,
            kind: LightKind::Point {
                position,
                attenuation,
            },
        }
    }

    /// Creates a spot light.
    pub fn spot(
        diffuse_intensity: Vec3,
        specular_intensity: Vec3,
        position: Vec3,
        attenuation: Vec3,
        direction: Vec3,
        cutoff_cos_angle: f32,
        falloff: f32,
    ) -> Self {
        Self {
            diffuse_intensity,
            specular_intensity,
            kind: LightKind::Spot {
                position,
                attenuation,
                direction,
                cutoff_cos_angle,
                falloff,
            },
        }
    }

    /// Uploads the light into slot `index` of the `uLights` array.
    pub fn upload(&self, sink: &mut dyn UniformSink, index: usize) {
        let field = |name: &str| format!("uLights[{}].{}", index, name);

        sink.set_uniform_vec3(&field("diffuseIntensity"), self.diffuse_intensity);
        sink.set_uniform_vec3(&field("specularIntensity"), self.specular_intensity);

        match self.kind {
            LightKind::Directional { direction } => {
                sink.set_uniform_vec3(&field("direction"), direction);
            }
            LightKind::Point {
                position,
                attenuation,
            } => {
                sink.set_uniform_vec3(&field("position"), position);
                sink.set_uniform_vec3(&field("attenuationCoefficients"), attenuation);
            }
            LightKind::Spot {
                position,
                attenuation,
                direction,
                cutoff_cos_angle,
                falloff,
            } => {
                sink.set_uniform_vec3(&field("position"), position);
                sink.set_uniform_vec3(&field("attenuationCoefficients"), attenuation);
                sink.set_uniform_vec3(&field("direction"), direction);
                sink.set_uniform_f32(&field("cutoffCosAngle"), cutoff_cos_angle);
                sink.set_uniform_f32(&field("falloff"), falloff);
            }
        }

        sink.set_uniform_i32(&field("type"), self.kind.type_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uniforms::{UniformRecorder, UniformValue};

    #[test]
    fn test_directional_upload() {
        let mut recorder = UniformRecorder::new();
        LightSource::directional(Vec3::ONE, Vec3::splat(0.5), Vec3::new(0.0, -1.0, 0.0))
            .upload(&mut recorder, 0);
        assert_eq!(
            recorder.names().collect::<Vec<_>>(),
            vec![
                "uLights[0].diffuseIntensity",
                "uLights[0].specularIntensity",
                "uLights[0].direction",
                "uLights[0].type",
            ]
        );
        assert_eq!(recorder.get("uLights[0].type"), Some(&UniformValue::Int(0)));
    }

    #[test]
    fn test_point_upload() {
        let mut recorder = UniformRecorder::new();
        let light = LightSource::point(
            Vec3::ONE,
            Vec3::ONE,
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(1.0, 0.1, 0.01),
        );
        light.upload(&mut recorder, 3);
        assert_eq!(
            recorder.get("uLights[3].position"),
            Some(&UniformValue::Vec3(Vec3::new(1.0, 2.0, 3.0)))
        );
        assert_eq!(
            recorder.get("uLights[3].attenuationCoefficients"),
            Some(&UniformValue::Vec3(Vec3::new(1.0, 0.1, 0.01)))
        );
        assert_eq!(recorder.get("uLights[3].direction"), None);
        assert_eq!(recorder.get("uLights[3].type"), Some(&UniformValue::Int(1)));
    }

    #[test]
    fn test_spot_upload() {
        let mut recorder = UniformRecorder::new();
        let light = LightSource::spot(
            Vec3::ONE,
            Vec3::splat(0.9),
            Vec3::new(0.4, 0.4, 1.0),
            Vec3::new(0.3, 0.6, 0.235),
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            0.25,
        );
        light.upload(&mut recorder, 1);
        assert_eq!(recorder.len(), 8);
        assert_eq!(
            recorder.get("uLights[1].cutoffCosAngle"),
            Some(&UniformValue::Float(0.5))
        );
        assert_eq!(recorder.get("uLights[1].falloff"), Some(&UniformValue::Float(0.25)));
        assert_eq!(recorder.get("uLights[1].type"), Some(&UniformValue::Int(2)));
    }
}
