//! Full-sphere projection canvas

use glam::Vec3;
use std::io::{Read, Write};

use super::stream::{self, StreamError};
use super::{Canvas, CanvasKind};
use crate::math::Bounds;
use crate::visual::{DrawTarget, VisualSphere};

pub const DEFAULT_SPHERE_RADIUS: f32 = 5.0;

/// Sphere canvas of a given radius around its center
#[derive(Debug, Clone)]
pub struct SphereCanvas {
    radius: f32,
    center: Vec3,
    bounds: Bounds,
    visual: VisualSphere,
}

impl SphereCanvas {
    pub fn new() -> Self {
        Self::with_radius(DEFAULT_SPHERE_RADIUS)
    }

    pub fn with_radius(radius: f32) -> Self {
        let mut canvas = Self {
            radius,
            center: Vec3::ZERO,
            bounds: Bounds::default(),
            visual: VisualSphere::default(),
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

    pub fn visual(&self) -> &VisualSphere {
        &self.visual
    }

    fn rebuild(&mut self) {
        let r = Vec3::splat(self.radius);
        self.bounds.set_min_max(self.center - r, self.center + r);
        self.update();
    }
}

impl Default for SphereCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for SphereCanvas {
    fn kind(&self) -> CanvasKind {
        CanvasKind::Sphere
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
