//! Box-shaped projection canvas
//!
//! A rectangular prism centered on X and Y whose base sits on the z = 0 plane.
//! The bounds are a pure function of the size, so streaming the size alone
//! reproduces the canvas.

use glam::Vec3;
use std::io::{Read, Write};

use super::stream::{self, StreamError};
use super::{Canvas, CanvasKind};
use crate::math::Bounds;
use crate::visual::{DrawTarget, VisualBox};

/// Size a new box starts with
pub const DEFAULT_BOX_SIZE: Vec3 = Vec3::new(10.0, 10.0, 10.0);

/// Floor-anchored box canvas
#[derive(Debug, Clone)]
pub struct BoxCanvas {
    bounds: Bounds,
    visual: VisualBox,
}

impl BoxCanvas {
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOX_SIZE)
    }

    pub fn with_size(size: Vec3) -> Self {
        let mut canvas = Self {
            bounds: Bounds::default(),
            visual: VisualBox::default(),
        };
        canvas.set_size(size);
        canvas
    }

    /// `bounds.max - bounds.min`
    pub fn size(&self) -> Vec3 {
        self.bounds.size()
    }

    /// Recompute the bounds from `size` and refresh the visual.
    ///
    /// Negative components are kept and yield an inverted box.
    pub fn set_size(&mut self, size: Vec3) {
        self.bounds.set_min_max(
            Vec3::new(-size.x * 0.5, -size.y * 0.5, 0.0),
            Vec3::new(size.x * 0.5, size.y * 0.5, size.z),
        );
        self.update();
    }

    /// Mutable access to the bounds.
    ///
    /// Changes made here are not visible to [`Canvas::draw`] until
    /// [`Canvas::update`] is called.
    pub fn bounds_mut(&mut self) -> &mut Bounds {
        &mut self.bounds
    }

    pub fn visual(&self) -> &VisualBox {
        &self.visual
    }

    /// True if any size component is zero or negative
    pub fn is_degenerate(&self) -> bool {
        self.size().min_element() <= 0.0
    }
}

impl Default for BoxCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for BoxCanvas {
    fn kind(&self) -> CanvasKind {
        CanvasKind::Box
    }

    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn update(&mut self) {
        self.visual.update(&self.bounds);
    }

    fn draw(&self, target: &mut dyn DrawTarget) {
        self.visual.draw(target);
    }

    fn to_stream(&self, w: &mut dyn Write) -> Result<(), StreamError> {
        stream::write_vec3(w, self.size())
    }

    fn from_stream(&mut self, r: &mut dyn Read) -> Result<(), StreamError> {
        let size = stream::read_vec3(r)?;
        self.set_size(size);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual::MeshRecorder;
    use std::io::Cursor;

    #[test]
    fn test_default_box() {
        let canvas = BoxCanvas::new();
        assert_eq!(canvas.size(), Vec3::splat(10.0));
        assert_eq!(canvas.kind(), CanvasKind::Box);
        assert_eq!(canvas.visual().revision(), 1);
        assert!(!canvas.is_degenerate());
    }

    #[test]
    fn test_bounds_are_floor_anchored() {
        let mut canvas = BoxCanvas::new();
        canvas.set_size(Vec3::new(4.0, 6.0, 3.0));
        assert_eq!(canvas.bounds().min(), Vec3::new(-2.0, -3.0, 0.0));
        assert_eq!(canvas.bounds().max(), Vec3::new(2.0, 3.0, 3.0));
    }

    #[test]
    fn test_size_round_trip() {
        let mut canvas = BoxCanvas::new();
        for size in [Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.5, 12.25, 7.0), Vec3::splat(100.0)] {
            canvas.set_size(size);
            assert_eq!(canvas.size(), size);
        }
    }

    #[test]
    fn test_negative_size_passes_through() {
        let canvas = BoxCanvas::with_size(Vec3::new(-2.0, 4.0, -1.0));
        assert_eq!(canvas.size(), Vec3::new(-2.0, 4.0, -1.0));
        assert!(canvas.bounds().is_inverted());
        assert!(canvas.is_degenerate());
    }

    #[test]
    fn test_set_size_refreshes_visual() {
        let mut canvas = BoxCanvas::new();
        canvas.set_size(Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(canvas.visual().revision(), 2);
        for v in &canvas.visual().mesh().vertices {
            assert!(canvas.bounds().contains(Vec3::from_array(v.position)));
        }
    }

    #[test]
    fn test_stream_round_trip() {
        let original = BoxCanvas::with_size(Vec3::new(3.5, 8.0, 2.25));
        let mut buf = Vec::new();
        original.to_stream(&mut buf).unwrap();
        assert_eq!(buf.len(), 24);

        let mut restored = BoxCanvas::new();
        restored.from_stream(&mut Cursor::new(buf)).unwrap();
        assert_eq!(restored.size(), original.size());
        assert_eq!(restored.bounds(), original.bounds());
    }

    #[test]
    fn test_from_stream_propagates_read_failure() {
        let mut canvas = BoxCanvas::with_size(Vec3::ONE);
        let result = canvas.from_stream(&mut Cursor::new(vec![0u8; 10]));
        assert!(matches!(result, Err(StreamError::Io(_))));
        assert_eq!(canvas.size(), Vec3::ONE);
    }

    #[test]
    fn test_bounds_change_without_update_draws_stale_geometry() {
        let mut canvas = BoxCanvas::with_size(Vec3::ONE);
        let mut before = MeshRecorder::new();
        canvas.draw(&mut before);

        canvas
            .bounds_mut()
            .set_min_max(Vec3::splat(-5.0), Vec3::splat(5.0));
        let mut stale = MeshRecorder::new();
        canvas.draw(&mut stale);
        assert_eq!(stale.meshes, before.meshes);

        canvas.update();
        let mut fresh = MeshRecorder::new();
        canvas.draw(&mut fresh);
        assert_ne!(fresh.meshes, before.meshes);
    }
}
