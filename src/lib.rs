//! Projection Mapping Viewport
//!
//! The interactive 3D viewport core of a projection mapping tool: an orbit
//! tracker for the camera, projection canvases (box, dome, sphere) with on-demand
//! visual proxies, and the input preview that maps widget clicks to
//! normalized input coordinates.
//!
//! Everything here is single-threaded and meant to be driven from the thread
//! that owns the rendering context.

pub mod canvas;
pub mod input;
pub mod mapping;
pub mod math;
pub mod render;
pub mod settings;
pub mod telemetry;
pub mod ui;
pub mod visual;

pub use canvas::{BoxCanvas, Canvas, CanvasKind, DomeCanvas, SphereCanvas, StreamError};
pub use input::{Input, InputError, InputHandle, StillImage};
pub use mapping::{MappingKind, MappingSettings};
pub use math::{Angle, Bounds, PolarVec};
pub use settings::{SettingsError, ViewportSettings};
pub use ui::{InputPreview, PreviewBackend, PreviewState};
pub use visual::{Camera, DrawTarget, Mesh, MeshKey, Tracker, VisualBox, VisualDome, VisualSphere};
