//! Orbit camera for 3D viewport navigation
//!
//! Wraps a [`Tracker`] with the lens parameters needed to build view and
//! projection matrices.

use glam::{Mat4, Vec2, Vec3};

use super::tracker::Tracker;

const ZOOM_STEP: f32 = 0.1;

/// Camera orbiting a pivot point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    tracker: Tracker,
    /// Up vector for the look-at matrix
    up: Vec3,
    /// Vertical field of view in radians
    fov: f32,
    /// Near clipping plane
    near: f32,
    /// Far clipping plane
    far: f32,
}

impl Camera {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker,
            up: Vec3::Y,
            fov: std::f32::consts::FRAC_PI_4, // 45 degrees
            near: 0.01,
            far: 1000.0,
        }
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut Tracker {
        &mut self.tracker
    }

    pub fn eye(&self) -> Vec3 {
        self.tracker.eye()
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.near = near;
        self.far = far;
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.tracker.eye(), self.tracker.center(), self.up)
    }

    /// Get the projection matrix for a viewport aspect ratio (width/height)
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect, self.near, self.far)
    }

    /// Get combined view-projection matrix
    pub fn view_projection_matrix(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Handle mouse drag for orbit, `delta` in pixels and `sensitivity` in degrees per pixel
    pub fn on_mouse_drag(&mut self, delta: Vec2, sensitivity: f32) {
        self.tracker.track(delta.x * sensitivity, delta.y * sensitivity, 0.0);
    }

    /// Handle scroll for zoom, keeping the distance inside the given limits
    pub fn on_scroll(&mut self, delta: f32, min_dist: f32, max_dist: f32) {
        // Multiplicative zoom for smooth feel
        let distance = self.tracker.distance() * (1.0 - delta * ZOOM_STEP);
        self.tracker.set_distance(distance);
        self.tracker.limit_distance(min_dist, max_dist);
    }

    /// Reset tracker to its default position
    pub fn reset(&mut self) {
        self.tracker = Tracker::default();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Tracker::default())
    }
}
