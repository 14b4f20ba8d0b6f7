use glam::{Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::Transform;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scratch Transform", inline)]
#[serde(default)]
/// Live-tweakable placement for positioning the next scene object.
///
/// Holds the slider-friendly pieces of a transform: a translation, a
/// uniform scale, and a single rotation about the Y axis in degrees.
/// [`Self::to_transform`] expands it to a full [`Transform`].
pub struct ScratchTransform {
    /// World-space translation.
    #[schemars(title = "Position")]
    pub position: [f32; 3],
    /// Uniform scale applied to all axes.
    #[schemars(title = "Scale", range(min = 0.02, max = 128.0), extend("step" = 0.02))]
    pub scale: f32,
    /// Rotation about the Y axis in degrees.
    #[schemars(title = "Rotation", range(min = 0.0, max = 360.0), extend("step" = 0.5))]
    pub rotation_deg: f32,
}

impl Default for ScratchTransform {
    fn default() -> Self {
        Self {
            position: [0.0, 2.0, 0.0],
            scale: 1.0,
            rotation_deg: 0.0,
        }
    }
}

impl ScratchTransform {
    /// Expands the sliders into a scene transform.
    #[must_use]
    pub fn to_transform(self) -> Transform {
        Transform {
            translation: Vec3::from_array(self.position),
            rotation: Quat::from_rotation_y(self.rotation_deg.to_radians()),
            scale: Vec3::splat(self.scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sits_above_the_origin_at_unit_scale() {
        let scratch = ScratchTransform::default();
        let transform = scratch.to_transform();
        assert_eq!(transform.translation, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(transform.scale, Vec3::ONE);
        assert_eq!(transform.rotation, Quat::IDENTITY);
    }

    #[test]
    fn rotation_slider_spins_about_y() {
        let scratch = ScratchTransform {
            rotation_deg: 90.0,
            ..ScratchTransform::default()
        };
        let spun = scratch
            .to_transform()
            .matrix()
            .transform_vector3(Vec3::X);
        // +X swings to -Z after a quarter turn about Y.
        assert!(spun.distance(Vec3::NEG_Z) < 1e-6);
    }
}
