//! Orbit tracker
//!
//! Keeps a pivot point and a polar offset from it. The eye position is always
//! derived as `center + direction`, never stored.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::{Angle, PolarVec};

/// Movable viewpoint expressed as an offset from a pivot
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tracker {
    center: Vec3,
    direction: PolarVec,
}

impl Tracker {
    /// Tracker at `center` looking back from `direction`
    pub fn new(center: Vec3, direction: PolarVec) -> Self {
        Self { center, direction }
    }

    /// Add a polar delta to the direction.
    ///
    /// Angles accumulate without wrapping; use [`PolarVec::wrapped`] if a
    /// canonical range is needed.
    pub fn track(&mut self, longitude: f32, latitude: f32, radius: f32) {
        let step = PolarVec::new(Angle::degrees(longitude), Angle::degrees(latitude), radius);
        self.direction += step;
    }

    /// Eye position, `center + direction`
    pub fn eye(&self) -> Vec3 {
        self.center + self.direction.to_vector()
    }

    /// Re-derive the direction so the eye lands on `pos`, keeping the center
    pub fn set_eye(&mut self, pos: Vec3) {
        self.direction = PolarVec::from_vector(pos - self.center);
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn center_mut(&mut self) -> &mut Vec3 {
        &mut self.center
    }

    /// Move the pivot. The direction is kept, so the eye moves with it.
    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    pub fn direction(&self) -> &PolarVec {
        &self.direction
    }

    pub fn direction_mut(&mut self) -> &mut PolarVec {
        &mut self.direction
    }

    pub fn set_direction(&mut self, direction: PolarVec) {
        self.direction = direction;
    }

    pub fn distance(&self) -> f32 {
        self.direction.radius()
    }

    /// Rescale the direction to radius `t`, keeping its orientation
    pub fn set_distance(&mut self, t: f32) {
        self.direction = t * self.direction.normalized();
    }

    /// Clamp the radius into the range spanned by the two limits, in either order
    pub fn limit_distance(&mut self, min_dist: f32, max_dist: f32) {
        let (lo, hi) = if min_dist > max_dist {
            (max_dist, min_dist)
        } else {
            (min_dist, max_dist)
        };

        let r = self.direction.radius();
        if r < lo {
            self.direction.set_radius(lo);
        }
        if r > hi {
            self.direction.set_radius(hi);
        }
    }
}
