//! Dome-shaped projection canvas
//!
//! Hemisphere of a given radius resting on the z = 0 plane of its center.

use glam::Vec3;
use std::io::{Read, Write};

use super::stream::{self, StreamError};
use super::{Canvas, CanvasKind};
use crate::math::Bounds;
use crate::visual::{DrawTarget, VisualDome};

pub const DEFAULT_DOME_RADIUS: f32 = 5.0;

/// Hemisphere canvas
#[derive(Debug, Clone)]
pub struct DomeCanvas {
    radius: f32,
    center: Vec3,
    bounds: Bounds,
    visual: VisualDome,
}

impl DomeCanvas {
    pub fn new() -> Self {
        Self::with_radius(DEFAULT_DOME_RADIUS)
    }

    pub fn with_radius(radius: f32) -> Self {
        let mut canvas = Self {
            radius,
            center: Vec3::ZERO,
            bounds: Bounds::default(),
            visual: VisualDome::default(),
        };
        canvas.rebuild();
        canvas
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
        self.rebuild();
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
        self.rebuild();
    }

    pub fn visual(&self) -> &VisualDome {
        &self.visual
    }

    fn rebuild(&mut self) {
        let r = self.radius;
        self.bounds.set_min_max(
            self.center + Vec3::new(-r, -r, 0.0),
            self.center + Vec3::new(r, r, r),
        );
        self.update();
    }
}

impl Default for DomeCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for DomeCanvas {
    fn kind(&self) -> CanvasKind {
        CanvasKind::Dome
    }

    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn update(&mut self) {
        self.visual.update(self.radius, self.center);
    }

    fn draw(&self, target: &mut dyn DrawTarget) {
        self.visual.draw(target);
    }

    fn to_stream(&self, w: &mut dyn Write) -> Result<(), StreamError> {
        stream::write_scalar(w, self.radius)?;
        stream::write_vec3(w, self.center)
    }

    fn from_stream(&mut self, r: &mut dyn Read) -> Result<(), StreamError> {
        let radius = stream::read_scalar(r)?;
        let center = stream::read_vec3(r)?;
        self.radius = radius;
        self.center = center;
        self.rebuild();
        Ok(())
    }
}
