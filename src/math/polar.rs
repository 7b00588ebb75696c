//! Polar vectors
//!
//! A direction expressed as longitude, latitude and radius. The Cartesian
//! mapping is Y-up: longitude turns from +Z towards +X, latitude lifts
//! towards +Y, so `(0°, 0°, 1)` is the +Z unit vector.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul};

use super::angle::Angle;

/// Vector in polar coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarVec {
    longitude: Angle,
    latitude: Angle,
    radius: f32,
}

impl Default for PolarVec {
    /// Unit vector along +Z
    fn default() -> Self {
        Self::new(Angle::ZERO, Angle::ZERO, 1.0)
    }
}

impl PolarVec {
    pub fn new(longitude: Angle, latitude: Angle, radius: f32) -> Self {
        Self {
            longitude,
            latitude,
            radius,
        }
    }

    /// Convert a Cartesian vector. The zero vector maps to `(0°, 0°, 0)`.
    pub fn from_vector(v: Vec3) -> Self {
        let radius = v.length();
        if radius <= f32::EPSILON {
            return Self::new(Angle::ZERO, Angle::ZERO, 0.0);
        }
        let latitude = Angle::radians((v.y / radius).clamp(-1.0, 1.0).asin());
        let longitude = Angle::radians(v.x.atan2(v.z));
        Self::new(longitude, latitude, radius)
    }

    /// Cartesian representation
    pub fn to_vector(&self) -> Vec3 {
        let (lon_sin, lon_cos) = self.longitude.to_radians().sin_cos();
        let (lat_sin, lat_cos) = self.latitude.to_radians().sin_cos();
        Vec3::new(lat_cos * lon_sin, lat_sin, lat_cos * lon_cos) * self.radius
    }

    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_longitude(&mut self, longitude: Angle) {
        self.longitude = longitude;
    }

    pub fn set_latitude(&mut self, latitude: Angle) {
        self.latitude = latitude;
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Same orientation with radius 1.
    ///
    /// A negative radius points opposite to its angles, so the angles are
    /// mirrored to keep the Cartesian direction.
    pub fn normalized(&self) -> Self {
        if self.radius < 0.0 {
            Self::new(self.longitude + Angle::degrees(180.0), -self.latitude, 1.0)
        } else {
            Self::new(self.longitude, self.latitude, 1.0)
        }
    }

    /// Same vector with both angles wrapped into `[0, 360)`
    pub fn wrapped(&self) -> Self {
        Self::new(self.longitude.wrapped(), self.latitude.wrapped(), self.radius)
    }
}

impl From<Vec3> for PolarVec {
    fn from(v: Vec3) -> Self {
        Self::from_vector(v)
    }
}

impl From<PolarVec> for Vec3 {
    fn from(p: PolarVec) -> Self {
        p.to_vector()
    }
}

/// Component-wise addition in polar space
impl Add for PolarVec {
    type Output = PolarVec;

    fn add(self, rhs: PolarVec) -> PolarVec {
        PolarVec::new(
            self.longitude + rhs.longitude,
            self.latitude + rhs.latitude,
            self.radius + rhs.radius,
        )
    }
}

impl AddAssign for PolarVec {
    fn add_assign(&mut self, rhs: PolarVec) {
        *self = *self + rhs;
    }
}

/// Scales the radius only
impl Mul<f32> for PolarVec {
    type Output = PolarVec;

    fn mul(self, rhs: f32) -> PolarVec {
        PolarVec::new(self.longitude, self.latitude, self.radius * rhs)
    }
}

impl Mul<PolarVec> for f32 {
    type Output = PolarVec;

    fn mul(self, rhs: PolarVec) -> PolarVec {
        rhs * self
    }
}
