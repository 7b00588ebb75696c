//! GPU upload of viewport meshes
//!
//! Bridges the [`DrawTarget`](crate::visual::DrawTarget) seam to wgpu.

pub mod gpu_mesh;

pub use gpu_mesh::{needs_upload, GpuMesh, GpuMeshCache, GpuMeshQueue, MeshCache};
