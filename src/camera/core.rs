use glam::{Mat4, Vec3};

/// Pitch magnitude limit in degrees. Keeps the view direction off the
/// world up axis so the basis vectors stay well defined.
pub const PITCH_LIMIT_DEG: f32 = 89.0;

/// Narrowest allowed vertical field of view in degrees.
pub const MIN_FOV_DEG: f32 = 1.0;

/// Widest allowed vertical field of view in degrees.
pub const MAX_FOV_DEG: f32 = 45.0;

/// Free-flying perspective camera defined by a position and Euler
/// angles.
///
/// Yaw and pitch are in degrees. A yaw of `-90.0` with zero pitch faces
/// `-Z`, so the default camera looks down the negative Z axis. Pitch
/// and field of view are clamped on write; see [`PITCH_LIMIT_DEG`],
/// [`MIN_FOV_DEG`], and [`MAX_FOV_DEG`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyCamera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    yaw: f32,
    pitch: f32,
    fov_deg: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0))
    }
}

impl FlyCamera {
    /// Camera at `position` facing `-Z` with a 45 degree field of view.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            znear: 0.1,
            zfar: 100.0,
            yaw: -90.0,
            pitch: 0.0,
            fov_deg: MAX_FOV_DEG,
        }
    }

    /// Heading angle in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Sets the heading angle in degrees.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    /// Elevation angle in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Sets the elevation angle, clamped to [`PITCH_LIMIT_DEG`].
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fov_deg(&self) -> f32 {
        self.fov_deg
    }

    /// Sets the vertical field of view, clamped to
    /// [`MIN_FOV_DEG`]..=[`MAX_FOV_DEG`].
    pub fn set_fov_deg(&mut self, fov_deg: f32) {
        self.fov_deg = fov_deg.clamp(MIN_FOV_DEG, MAX_FOV_DEG);
    }

    /// Unit view direction derived from yaw and pitch.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos)
            .normalize()
    }

    /// Unit right vector, perpendicular to the view direction and the
    /// world up axis.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        // Pitch clamping keeps front() off the Y axis, so the cross
        // product never degenerates.
        self.front().cross(Vec3::Y).normalize()
    }

    /// Unit up vector of the camera frame.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.front()).normalize()
    }

    /// Build the world-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front(), self.up())
    }

    /// Build the projection matrix for the given viewport aspect ratio
    /// (width / height).
    #[must_use]
    pub fn projection(&self, aspect: f32) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fov_deg.to_radians(),
            aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view_matrix()
    }
}
