//! Angle stored in degrees

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A scalar angle, always stored in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f32);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    pub const FULL_TURN: Angle = Angle(360.0);

    /// Create an angle from degrees
    pub const fn degrees(deg: f32) -> Self {
        Self(deg)
    }

    /// Create an angle from radians
    pub fn radians(rad: f32) -> Self {
        Self(rad.to_degrees())
    }

    /// Value in degrees
    pub fn to_degrees(self) -> f32 {
        self.0
    }

    /// Value in radians
    pub fn to_radians(self) -> f32 {
        self.0.to_radians()
    }

    pub fn sin(self) -> f32 {
        self.to_radians().sin()
    }

    pub fn cos(self) -> f32 {
        self.to_radians().cos()
    }

    /// Angle wrapped into `[0, 360)`
    pub fn wrapped(self) -> Self {
        Self(self.0.rem_euclid(360.0))
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        self.0 += rhs.0;
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Angle) {
        self.0 -= rhs.0;
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl Mul<f32> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f32) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.0)
    }
}
