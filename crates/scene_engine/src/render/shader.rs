//! Shader program boundary
//!
//! Uniform writes are addressed by name and assumed to succeed whenever the
//! name exists in the active program; the shader layer reports nothing back.

use std::collections::HashMap;

use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};

/// Named-uniform write interface of the active shader program
pub trait ShaderProgram {
    /// Set a boolean uniform
    fn set_bool(&mut self, name: &str, value: bool);

    /// Set an integer uniform
    fn set_int(&mut self, name: &str, value: i32);

    /// Set a float uniform
    fn set_float(&mut self, name: &str, value: f32);

    /// Set a 2-component vector uniform
    fn set_vec2(&mut self, name: &str, value: Vec2);

    /// Set a 3-component vector uniform
    fn set_vec3(&mut self, name: &str, value: Vec3);

    /// Set a 4-component vector uniform
    fn set_vec4(&mut self, name: &str, value: Vec4);

    /// Set a 4x4 matrix uniform
    fn set_mat4(&mut self, name: &str, value: &Mat4);

    /// Set a 2D sampler uniform to a texture unit index
    fn set_sampler(&mut self, name: &str, unit: i32);
}

/// A uniform value recorded by [`RecordingShader`]
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    /// Boolean uniform
    Bool(bool),
    /// Integer uniform
    Int(i32),
    /// Float uniform
    Float(f32),
    /// 2-component vector uniform
    Vec2(Vec2),
    /// 3-component vector uniform
    Vec3(Vec3),
    /// 4-component vector uniform
    Vec4(Vec4),
    /// 4x4 matrix uniform
    Mat4(Mat4),
    /// Sampler unit index
    Sampler(i32),
}

/// Recording shader for headless rendering and tests
///
/// Keeps both the latest value per uniform name and an ordered write log.
#[derive(Debug, Default)]
pub struct RecordingShader {
    current: HashMap<String, UniformValue>,
    writes: Vec<(String, UniformValue)>,
}

impl RecordingShader {
    /// Create an empty recording shader
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest value written to a uniform, if any
    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.current.get(name)
    }

    /// Ordered log of every uniform write so far
    pub fn writes(&self) -> &[(String, UniformValue)] {
        &self.writes
    }

    fn record(&mut self, name: &str, value: UniformValue) {
        self.current.insert(name.to_string(), value.clone());
        self.writes.push((name.to_string(), value));
    }
}

impl ShaderProgram for RecordingShader {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.record(name, UniformValue::Bool(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.record(name, UniformValue::Int(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.record(name, UniformValue::Float(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.record(name, UniformValue::Vec2(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.record(name, UniformValue::Vec3(value));
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.record(name, UniformValue::Vec4(value));
    }

    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        self.record(name, UniformValue::Mat4(*value));
    }

    fn set_sampler(&mut self, name: &str, unit: i32) {
        self.record(name, UniformValue::Sampler(unit));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_value_wins() {
        let mut shader = RecordingShader::new();
        shader.set_float("material.shininess", 0.1);
        shader.set_float("material.shininess", 52.0);

        assert_eq!(
            shader.get("material.shininess"),
            Some(&UniformValue::Float(52.0))
        );
        assert_eq!(shader.writes().len(), 2);
    }
}
