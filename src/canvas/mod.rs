//! Projection canvases
//!
//! A canvas is the physical surface content is projected onto. Each canvas
//! owns its bounds and a visual proxy; the proxy only changes when
//! [`Canvas::update`] runs.

pub mod box_canvas;
pub mod dome;
pub mod sphere;
pub mod stream;

use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use crate::math::Bounds;
use crate::visual::DrawTarget;

pub use box_canvas::BoxCanvas;
pub use dome::DomeCanvas;
pub use sphere::SphereCanvas;
pub use stream::StreamError;

/// Canvas variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CanvasKind {
    #[default]
    Box,
    Dome,
    Sphere,
}

impl CanvasKind {
    /// Stable identifier written in front of a streamed canvas
    pub fn type_id(&self) -> &'static str {
        match self {
            CanvasKind::Box => "Box",
            CanvasKind::Dome => "Dome",
            CanvasKind::Sphere => "Sphere",
        }
    }

    pub fn from_type_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.type_id() == id)
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            CanvasKind::Box => "Box",
            CanvasKind::Dome => "Dome (Half Sphere)",
            CanvasKind::Sphere => "Sphere (Full Sphere)",
        }
    }

    /// Get all canvas kinds for iteration
    pub fn all() -> &'static [CanvasKind] {
        &[CanvasKind::Box, CanvasKind::Dome, CanvasKind::Sphere]
    }
}

/// A projection surface with a renderable proxy
pub trait Canvas {
    fn kind(&self) -> CanvasKind;

    fn bounds(&self) -> &Bounds;

    /// Refresh the visual proxy from the current geometry
    fn update(&mut self);

    /// Draw the visual proxy as of the last [`Canvas::update`]
    fn draw(&self, target: &mut dyn DrawTarget);

    fn to_stream(&self, w: &mut dyn Write) -> Result<(), StreamError>;

    fn from_stream(&mut self, r: &mut dyn Read) -> Result<(), StreamError>;
}

/// Create a default canvas of the given kind
pub fn create(kind: CanvasKind) -> Box<dyn Canvas> {
    match kind {
        CanvasKind::Box => Box::new(BoxCanvas::new()),
        CanvasKind::Dome => Box::new(DomeCanvas::new()),
        CanvasKind::Sphere => Box::new(SphereCanvas::new()),
    }
}

/// Write the canvas type id followed by its payload
pub fn write_canvas(w: &mut dyn Write, canvas: &dyn Canvas) -> Result<(), StreamError> {
    stream::write_string(w, canvas.kind().type_id())?;
    canvas.to_stream(w)
}

/// Read a canvas written by [`write_canvas`]
pub fn read_canvas(r: &mut dyn Read) -> Result<Box<dyn Canvas>, StreamError> {
    let id = stream::read_string(r)?;
    let kind = CanvasKind::from_type_id(&id).ok_or(StreamError::UnknownCanvas(id))?;
    let mut canvas = create(kind);
    canvas.from_stream(r)?;
    log::debug!("Read {} canvas from stream", kind.type_id());
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::io::Cursor;

    #[test]
    fn test_type_ids() {
        for kind in CanvasKind::all() {
            assert_eq!(CanvasKind::from_type_id(kind.type_id()), Some(*kind));
        }
        assert_eq!(CanvasKind::from_type_id("Cube"), None);
    }

    #[test]
    fn test_create() {
        assert_eq!(create(CanvasKind::Box).kind(), CanvasKind::Box);
        assert_eq!(create(CanvasKind::Dome).kind(), CanvasKind::Dome);
        assert_eq!(create(CanvasKind::Sphere).kind(), CanvasKind::Sphere);
    }

    #[test]
    fn test_tagged_stream() {
        let canvas = BoxCanvas::with_size(Vec3::new(2.0, 3.0, 4.0));
        let mut buf = Vec::new();
        write_canvas(&mut buf, &canvas).unwrap();

        let restored = read_canvas(&mut Cursor::new(buf)).unwrap();
        assert_eq!(restored.kind(), CanvasKind::Box);
        assert_eq!(restored.bounds().size(), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_tagged_stream_sphere() {
        let mut sphere = SphereCanvas::with_radius(6.0);
        sphere.set_center(Vec3::new(0.0, 0.0, 1.0));
        let mut buf = Vec::new();
        write_canvas(&mut buf, &sphere).unwrap();

        let restored = read_canvas(&mut Cursor::new(buf)).unwrap();
        assert_eq!(restored.kind(), CanvasKind::Sphere);
        assert_eq!(restored.bounds(), sphere.bounds());
    }

    #[test]
    fn test_unknown_canvas() {
        let mut buf = Vec::new();
        stream::write_string(&mut buf, "Cylinder").unwrap();
        match read_canvas(&mut Cursor::new(buf)) {
            Err(StreamError::UnknownCanvas(id)) => assert_eq!(id, "Cylinder"),
            other => panic!("unexpected result: {:?}", other.map(|c| c.kind())),
        }
    }
}
