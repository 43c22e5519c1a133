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

//! The boundary to the graphics context's shader-uniform calls.

use lumen_core::math::Vec3;

/// Receives named shader uniforms.
///
/// Implemented by whatever owns the active shader program. Matrices arrive as
/// sixteen floats in column-major order.
pub trait UniformSink {
    /// Sets a 4x4 matrix uniform.
    fn set_uniform_matrix(&mut self, name: &str, value: &[f32; 16]);
    /// Sets a three-component vector uniform.
    fn set_uniform_vec3(&mut self, name: &str, value: Vec3);
    /// Sets a float uniform.
    fn set_uniform_f32(&mut self, name: &str, value: f32);
    /// Sets an integer uniform.
    fn set_uniform_i32(&mut self, name: &str, value: i32);
}

/// A value captured by [`UniformRecorder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// A column-major 4x4 matrix.
    Matrix([f32; 16]),
    /// A three-component vector.
    Vec3(Vec3),
    /// A float.
    Float(f32),
    /// An integer.
    Int(i32),
}

/// A [`UniformSink`] that keeps every upload in order.
///
/// Stands in for a real shader program in headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct UniformRecorder {
    entries: Vec<(String, UniformValue)>,
}

impl UniformRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every upload in the order it was made.
    pub fn entries(&self) -> &[(String, UniformValue)] {
        &self.entries
    }

    /// Returns the most recent value uploaded under `name`.
    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.entries
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns the upload names in order, duplicates included.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of uploads recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn push(&mut self, name: &str, value: UniformValue) {
        log::trace!("uniform {} = {:?}", name, value);
        self.entries.push((name.to_owned(), value));
    }
}

impl UniformSink for UniformRecorder {
    fn set_uniform_matrix(&mut self, name: &str, value: &[f32; 16]) {
        self.push(name, UniformValue::Matrix(*value));
    }

    fn set_uniform_vec3(&mut self, name: &str, value: Vec3) {
        self.push(name, UniformValue::Vec3(value));
    }

    fn set_uniform_f32(&mut self, name: &str, value: f32) {
        self.push(name, UniformValue::Float(value));
    }

    fn set_uniform_i32(&mut self, name: &str, value: i32) {
        self.push(name, UniformValue::Int(value));
    }
}
