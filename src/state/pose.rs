use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::FlyCamera;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Saved camera placement, restored at startup.
pub struct CameraPose {
    /// Eye position in world space.
    pub position: [f32; 3],
    /// Heading in degrees. `-90.0` faces `-Z`.
    pub yaw: f32,
    /// Elevation in degrees. Clamped on apply.
    pub pitch: f32,
    /// Vertical field of view in degrees. Clamped on apply.
    pub fov_deg: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::from_camera(&FlyCamera::default())
    }
}

impl CameraPose {
    /// Snapshot of a camera's current pose.
    #[must_use]
    pub fn from_camera(camera: &FlyCamera) -> Self {
        Self {
            position: camera.position.to_array(),
            yaw: camera.yaw(),
            pitch: camera.pitch(),
            fov_deg: camera.fov_deg(),
        }
    }

    /// Restores this pose onto a camera. Pitch and field of view pass
    /// through the camera's clamped setters, so a hand-edited state
    /// file cannot put the camera in a degenerate pose.
    pub fn apply_to(&self, camera: &mut FlyCamera) {
        camera.position = Vec3::from_array(self.position);
        camera.set_yaw(self.yaw);
        camera.set_pitch(self.pitch);
        camera.set_fov_deg(self.fov_deg);
    }
}
