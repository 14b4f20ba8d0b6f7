//! Light descriptions for a forward-shaded scene.
//!
//! Plain data consumed by the caller's shading pass: one optional
//! directional light, any number of point lights with quadratic
//! distance falloff, and spotlights with a soft cone edge. The rig can
//! mute all spotlights at once without losing their settings, so a
//! toggle key flips one flag instead of rewriting light parameters.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Infinite-distance light shining along a fixed direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionalLight {
    /// Direction the light travels, world space. Need not be
    /// normalized.
    pub direction: Vec3,
    /// Ambient contribution per channel.
    pub ambient: Vec3,
    /// Diffuse contribution per channel.
    pub diffuse: Vec3,
    /// Specular contribution per channel.
    pub specular: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::new(-1.0, -0.2, 0.0),
            ambient: Vec3::splat(0.05),
            diffuse: Vec3::splat(0.4),
            specular: Vec3::splat(0.5),
        }
    }
}

/// Omnidirectional light with quadratic distance attenuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointLight {
    /// Light position in world space.
    pub position: Vec3,
    /// Ambient contribution per channel.
    pub ambient: Vec3,
    /// Diffuse contribution per channel.
    pub diffuse: Vec3,
    /// Specular contribution per channel.
    pub specular: Vec3,
    /// Constant attenuation term.
    pub constant: f32,
    /// Linear attenuation coefficient.
    pub linear: f32,
    /// Quadratic attenuation coefficient.
    pub quadratic: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        // Coefficients cover roughly a 50 unit radius.
        Self {
            position: Vec3::ZERO,
            ambient: Vec3::splat(0.05),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::ONE,
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}

impl PointLight {
    /// Attenuation factor at `distance` world units from the light:
    /// `1 / (constant + linear * d + quadratic * d^2)`.
    #[must_use]
    pub fn attenuation(&self, distance: f32) -> f32 {
        1.0 / (self.constant
            + self.linear * distance
            + self.quadratic * distance * distance)
    }

    /// Distance at which attenuation falls to `threshold`.
    ///
    /// Useful for light culling. Returns `f32::INFINITY` when the
    /// falloff never reaches the threshold (for example zero linear and
    /// quadratic terms), and `0.0` when even the light's own position
    /// is already below it.
    #[must_use]
    pub fn effective_radius(&self, threshold: f32) -> f32 {
        if threshold <= 0.0 {
            return f32::INFINITY;
        }
        // Solve constant + linear*d + quadratic*d^2 = 1/threshold.
        let reach = 1.0 / threshold;
        if self.constant >= reach {
            return 0.0;
        }
        if self.quadratic <= 0.0 {
            if self.linear <= 0.0 {
                return f32::INFINITY;
            }
            return (reach - self.constant) / self.linear;
        }
        let discriminant = self.linear * self.linear
            + 4.0 * self.quadratic * (reach - self.constant);
        (-self.linear + discriminant.sqrt()) / (2.0 * self.quadratic)
    }
}

/// Point light restricted to a cone, with a soft edge between an inner
/// and an outer cutoff angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotLight {
    /// Light position in world space.
    pub position: Vec3,
    /// Direction the cone points, world space.
    pub direction: Vec3,
    /// Ambient contribution per channel.
    pub ambient: Vec3,
    /// Diffuse contribution per channel.
    pub diffuse: Vec3,
    /// Specular contribution per channel.
    pub specular: Vec3,
    /// Constant attenuation term.
    pub constant: f32,
    /// Linear attenuation coefficient.
    pub linear: f32,
    /// Quadratic attenuation coefficient.
    pub quadratic: f32,
    /// Cosine of the inner cone half-angle. Fragments inside receive
    /// full intensity.
    pub cut_off: f32,
    /// Cosine of the outer cone half-angle. Fragments outside receive
    /// none.
    pub outer_cut_off: f32,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::NEG_Z,
            ambient: Vec3::ZERO,
            diffuse: Vec3::ONE,
            specular: Vec3::ONE,
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
            cut_off: 2.5f32.to_radians().cos(),
            outer_cut_off: 5.0f32.to_radians().cos(),
        }
    }
}

impl SpotLight {
    /// Sets the cone from half-angles in degrees. `inner_deg` must not
    /// exceed `outer_deg` for a soft edge; equal angles give a hard
    /// cutoff.
    pub fn set_cone_degrees(&mut self, inner_deg: f32, outer_deg: f32) {
        self.cut_off = inner_deg.to_radians().cos();
        self.outer_cut_off = outer_deg.to_radians().cos();
    }

    /// Cone intensity for a fragment in direction `to_fragment` from
    /// the light, in `[0, 1]`.
    ///
    /// Full intensity inside the inner cone, zero outside the outer
    /// cone, linear in the cosine between them.
    #[must_use]
    pub fn cone_factor(&self, to_fragment: Vec3) -> f32 {
        let cos_theta = to_fragment
            .normalize_or_zero()
            .dot(self.direction.normalize_or_zero());
        let soft_edge = self.cut_off - self.outer_cut_off;
        if soft_edge <= 0.0 {
            // Degenerate cone: hard cutoff at the inner angle.
            return if cos_theta >= self.cut_off { 1.0 } else { 0.0 };
        }
        ((cos_theta - self.outer_cut_off) / soft_edge).clamp(0.0, 1.0)
    }
}

/// All lights feeding one shading pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LightRig {
    /// Optional key light.
    pub directional: Option<DirectionalLight>,
    /// Point lights in the scene.
    pub points: Vec<PointLight>,
    /// Spotlights in the scene, active only while `spots_enabled`.
    pub spots: Vec<SpotLight>,
    /// Whether spotlights currently contribute. Flipping this mutes
    /// them without touching their parameters.
    pub spots_enabled: bool,
}

impl LightRig {
    /// Spotlights to shade with this frame: all of them, or none while
    /// muted.
    #[must_use]
    pub fn active_spots(&self) -> &[SpotLight] {
        if self.spots_enabled {
            &self.spots
        } else {
            &[]
        }
    }
}
