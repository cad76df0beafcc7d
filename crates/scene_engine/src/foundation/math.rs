//! Math utilities and types
//!
//! Provides the fundamental math types for the scene renderer and the
//! model-transform composition every object renderer relies on.

pub use nalgebra::{Matrix3, Matrix4, Unit, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }
}

/// Extension trait for Mat4 with world-axis rotation constructors
pub trait Mat4Ext {
    /// Create a rotation matrix around the X axis
    fn rotation_x(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Z axis
    fn rotation_z(angle: f32) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::x_axis(), angle)
    }

    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn rotation_z(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::z_axis(), angle)
    }
}

/// Compose a model matrix from scale, per-axis rotation, and translation.
///
/// The multiplication order is fixed: `Translation · Rz · Ry · Rx · Scale`,
/// with rotation angles given in degrees about the world axes (X innermost).
/// Every object renderer depends on this order; changing it changes every
/// object's visual orientation. Rotations follow nalgebra's right-handed
/// convention, so rotating `(0, 1, 0)` by 90 degrees about X yields
/// `(0, 0, 1)`.
pub fn compose_model(scale: Vec3, rotation_degrees: Vec3, position: Vec3) -> Mat4 {
    let scaling = Mat4::new_nonuniform_scaling(&scale);
    let rotation_x = Mat4::rotation_x(utils::deg_to_rad(rotation_degrees.x));
    let rotation_y = Mat4::rotation_y(utils::deg_to_rad(rotation_degrees.y));
    let rotation_z = Mat4::rotation_z(utils::deg_to_rad(rotation_degrees.z));
    let translation = Mat4::new_translation(&position);

    translation * rotation_z * rotation_y * rotation_x * scaling
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn compose_of_neutral_parameters_is_identity() {
        let m = compose_model(
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::zeros(),
            Vec3::zeros(),
        );
        assert_relative_eq!(m, Mat4::identity(), epsilon = 1e-6);
    }

    #[test]
    fn x_rotation_maps_y_axis_to_z_axis() {
        let m = compose_model(
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(90.0, 0.0, 0.0),
            Vec3::zeros(),
        );
        let p = m.transform_point(&Point3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(p, Point3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn translation_is_applied_after_rotation() {
        // A point on the Y axis rotated onto Z, then carried by the offset.
        let m = compose_model(
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(90.0, 0.0, 0.0),
            Vec3::new(5.0, -2.0, 3.0),
        );
        let p = m.transform_point(&Point3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(p, Point3::new(5.0, -2.0, 4.0), epsilon = 1e-5);
    }

    #[test]
    fn scale_is_applied_before_rotation() {
        let m = compose_model(
            Vec3::new(1.0, 2.0, 1.0),
            Vec3::new(90.0, 0.0, 0.0),
            Vec3::zeros(),
        );
        // (0, 1, 0) scales to (0, 2, 0) and rotates onto the Z axis.
        let p = m.transform_point(&Point3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(p, Point3::new(0.0, 0.0, 2.0), epsilon = 1e-5);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(utils::clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(utils::clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(utils::clamp(0.25, 0.0, 1.0), 0.25);
    }
}
