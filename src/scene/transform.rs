use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Translation, rotation, and scale composing an instance's model
/// matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    /// World-space translation.
    pub translation: Vec3,
    /// World-space rotation.
    pub rotation: Quat,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The do-nothing transform.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Placement at `translation` with no rotation and unit scale.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Returns the transform with `rotation` applied.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns the transform with the same scale on every axis.
    #[must_use]
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Model matrix applying scale, then rotation, then translation.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.translation,
        )
    }

    /// World position of the local origin. This is the point the
    /// transparency sort ranks by distance, and it equals the
    /// translation regardless of rotation and scale.
    #[must_use]
    pub fn anchor(&self) -> Vec3 {
        self.translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_matrix_is_identity() {
        assert_eq!(Transform::IDENTITY.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn matrix_places_the_local_origin_at_the_translation() {
        let transform = Transform::from_translation(Vec3::new(2.0, -5.0, 7.0))
            .with_rotation(Quat::from_rotation_y(1.2))
            .with_uniform_scale(3.0);
        let origin = transform.matrix().transform_point3(Vec3::ZERO);
        assert!(origin.distance(Vec3::new(2.0, -5.0, 7.0)) < 1e-6);
        assert_eq!(transform.anchor(), Vec3::new(2.0, -5.0, 7.0));
    }

    #[test]
    fn matrix_applies_scale_before_translation() {
        let transform = Transform::from_translation(Vec3::new(1.0, 0.0, 0.0))
            .with_uniform_scale(2.0);
        let moved = transform.matrix().transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!(moved.distance(Vec3::new(3.0, 0.0, 0.0)) < 1e-6);
    }
}
