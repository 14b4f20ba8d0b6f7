use super::core::FlyCamera;

/// Direction of a single movement step relative to the camera frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Along the view direction.
    Forward,
    /// Against the view direction.
    Backward,
    /// Along the negative right vector.
    Left,
    /// Along the right vector.
    Right,
}

/// Movement speed tier selected by modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedTier {
    /// Quarter speed, for fine positioning.
    Slow,
    /// Base speed.
    #[default]
    Normal,
    /// Triple speed, for covering distance.
    Fast,
}

impl SpeedTier {
    /// Multiplier applied to the controller's base speed.
    #[must_use]
    pub fn multiplier(self) -> f32 {
        match self {
            Self::Slow => 0.25,
            Self::Normal => 1.0,
            Self::Fast => 3.0,
        }
    }
}

/// Applies movement, mouse-look, and zoom input to a [`FlyCamera`].
///
/// The controller holds tuning values only; the camera owns its pose.
/// Movement steps scale with frame time, so callers feed the delta
/// produced by [`crate::util::FrameClock::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraController {
    /// Base movement speed in world units per second.
    pub speed: f32,
    /// Mouse-look sensitivity in degrees per unit of cursor travel.
    pub sensitivity: f32,
    /// Field-of-view change in degrees per unit of scroll.
    pub zoom_speed: f32,
    tier: SpeedTier,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    /// Controller with conventional fly-camera tuning.
    #[must_use]
    pub fn new() -> Self {
        Self {
            speed: 2.5,
            sensitivity: 0.1,
            zoom_speed: 1.0,
            tier: SpeedTier::default(),
        }
    }

    /// Currently selected speed tier.
    #[must_use]
    pub fn tier(&self) -> SpeedTier {
        self.tier
    }

    /// Selects the speed tier applied to subsequent steps.
    pub fn set_tier(&mut self, tier: SpeedTier) {
        self.tier = tier;
    }

    /// Moves the camera one step in `direction`, scaled by `dt`
    /// seconds.
    ///
    /// Forward motion follows the full view direction including its
    /// vertical component, so pitching up and moving forward gains
    /// altitude.
    pub fn step(
        &self,
        camera: &mut FlyCamera,
        direction: MoveDirection,
        dt: f32,
    ) {
        let velocity = self.speed * self.tier.multiplier() * dt;
        let offset = match direction {
            MoveDirection::Forward => camera.front(),
            MoveDirection::Backward => -camera.front(),
            MoveDirection::Left => -camera.right(),
            MoveDirection::Right => camera.right(),
        };
        camera.position += offset * velocity;
    }

    /// Turns the camera by a cursor delta. Positive `dx` yaws right,
    /// positive `dy` pitches up; pitch clamping happens in the camera.
    pub fn look(&self, camera: &mut FlyCamera, dx: f32, dy: f32) {
        camera.set_yaw(camera.yaw() + dx * self.sensitivity);
        camera.set_pitch(camera.pitch() + dy * self.sensitivity);
    }

    /// Narrows the field of view by `delta * zoom_speed` degrees
    /// (scroll up zooms in). The camera clamps the result to its
    /// field-of-view range.
    pub fn zoom(&self, camera: &mut FlyCamera, delta: f32) {
        camera.set_fov_deg(camera.fov_deg() - delta * self.zoom_speed);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::core::{MAX_FOV_DEG, MIN_FOV_DEG, PITCH_LIMIT_DEG};

    #[test]
    fn forward_step_scales_with_frame_time() {
        let controller = CameraController::new();
        let mut camera = FlyCamera::new(Vec3::ZERO);
        controller.step(&mut camera, MoveDirection::Forward, 0.5);
        // Default camera faces -Z; half a second at 2.5 units/s.
        assert!(camera.position.distance(Vec3::new(0.0, 0.0, -1.25)) < 1e-5);
    }

    #[test]
    fn opposite_steps_cancel() {
        let controller = CameraController::new();
        let mut camera = FlyCamera::new(Vec3::new(4.0, 1.0, -2.0));
        let start = camera.position;
        controller.step(&mut camera, MoveDirection::Left, 0.25);
        controller.step(&mut camera, MoveDirection::Right, 0.25);
        assert!(camera.position.distance(start) < 1e-5);
    }

    #[test]
    fn speed_tier_scales_step_length() {
        let mut controller = CameraController::new();
        let mut normal = FlyCamera::new(Vec3::ZERO);
        controller.step(&mut normal, MoveDirection::Forward, 1.0);

        controller.set_tier(SpeedTier::Fast);
        let mut fast = FlyCamera::new(Vec3::ZERO);
        controller.step(&mut fast, MoveDirection::Forward, 1.0);

        let normal_len = normal.position.length();
        let fast_len = fast.position.length();
        assert!((fast_len - normal_len * 3.0).abs() < 1e-5);
    }

    #[test]
    fn look_applies_sensitivity_to_angles() {
        let controller = CameraController::new();
        let mut camera = FlyCamera::default();
        controller.look(&mut camera, 50.0, -30.0);
        assert!((camera.yaw() - (-90.0 + 5.0)).abs() < 1e-5);
        assert!((camera.pitch() - (-3.0)).abs() < 1e-5);
    }

    #[test]
    fn look_cannot_push_pitch_past_limit() {
        let controller = CameraController::new();
        let mut camera = FlyCamera::default();
        for _ in 0..100 {
            controller.look(&mut camera, 0.0, 50.0);
        }
        assert!((camera.pitch() - PITCH_LIMIT_DEG).abs() < f32::EPSILON);
    }

    #[test]
    fn zoom_stays_within_fov_range() {
        let controller = CameraController::new();
        let mut camera = FlyCamera::default();
        controller.zoom(&mut camera, 100.0);
        assert!((camera.fov_deg() - MIN_FOV_DEG).abs() < f32::EPSILON);
        controller.zoom(&mut camera, -100.0);
        assert!((camera.fov_deg() - MAX_FOV_DEG).abs() < f32::EPSILON);
    }

    #[test]
    fn zoom_speed_scales_the_fov_change() {
        let mut controller = CameraController::new();
        controller.zoom_speed = 2.5;
        let mut camera = FlyCamera::default();
        controller.zoom(&mut camera, 2.0);
        assert!((camera.fov_deg() - 40.0).abs() < 1e-5);
    }
}
