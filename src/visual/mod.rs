//! Viewport visuals
//!
//! Camera navigation and the render proxies canvases draw through.

pub mod box_visual;
pub mod camera;
pub mod dome_visual;
pub mod mesh;
pub mod sphere_visual;
pub mod tracker;

pub use box_visual::VisualBox;
pub use camera::Camera;
pub use dome_visual::VisualDome;
pub use mesh::{DrawTarget, Mesh, MeshKey, MeshRecorder, Vertex};
pub use sphere_visual::VisualSphere;
pub use tracker::Tracker;
