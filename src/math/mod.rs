//! Math primitives shared by the viewport
//!
//! Angles, polar vectors and axis-aligned bounds on top of `glam`.

pub mod angle;
pub mod bounds;
pub mod polar;

pub use angle::Angle;
pub use bounds::Bounds;
pub use polar::PolarVec;
