//! Math type aliases and the transform snapshot used by undo recording.

pub use nalgebra;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// Quaternion (f32). Use `Quaternion::new(w, x, y, z)` or [`quat_from_rotation_y`].
pub type Quat = nalgebra::Quaternion<f32>;

/// Squared distance below which two vectors compare equal.
pub const VEC3_EPSILON_SQ: f32 = 1e-10;

/// Quaternions compare equal when their dot product exceeds `1 - QUAT_EPSILON`.
pub const QUAT_EPSILON: f32 = 1e-6;

/// Compares two vectors with [`VEC3_EPSILON_SQ`] tolerance.
pub fn vec3_approx_eq(a: &Vec3, b: &Vec3) -> bool {
    (a - b).norm_squared() < VEC3_EPSILON_SQ
}

/// Compares two rotations. `q` and `-q` describe the same rotation and
/// compare equal.
pub fn quat_approx_eq(a: &Quat, b: &Quat) -> bool {
    a.dot(b).abs() > 1.0 - QUAT_EPSILON
}

/// Create a quaternion from rotation around the Y axis.
pub fn quat_from_rotation_y(angle: f32) -> Quat {
    nalgebra::UnitQuaternion::from_axis_angle(&nalgebra::Vector3::y_axis(), angle).into_inner()
}

/// Position, rotation and scale of an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trs {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Trs {
    /// No translation, identity rotation, unit scale.
    pub fn identity() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Component-wise comparison with float tolerance.
    pub fn approx_eq(&self, other: &Self) -> bool {
        vec3_approx_eq(&self.position, &other.position)
            && quat_approx_eq(&self.rotation, &other.rotation)
            && vec3_approx_eq(&self.scale, &other.scale)
    }
}

impl Default for Trs {
    fn default() -> Self {
        Self::identity()
    }
}
