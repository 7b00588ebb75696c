//! CPU-side mesh data and the draw seam
//!
//! Visual proxies keep a [`Mesh`] built on their last refresh and hand it to a
//! [`DrawTarget`] when drawn.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_VISUAL_ID: AtomicU64 = AtomicU64::new(1);

/// Fresh identifier for a visual proxy, unique for the process
pub fn next_visual_id() -> u64 {
    NEXT_VISUAL_ID.fetch_add(1, Ordering::Relaxed)
}

/// Identifies the mesh of one visual as of one refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshKey {
    /// Which visual drew the mesh
    pub visual: u64,
    /// Number of refreshes the visual had when it drew
    pub revision: u64,
}

/// Vertex for viewport meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in world space
    pub position: [f32; 3],
    /// Normal vector (for lighting)
    pub normal: [f32; 3],
    /// Texture coordinates
    pub uv: [f32; 2],
}

impl Vertex {
    /// Size of vertex in bytes
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    pub fn new(position: Vec3, normal: Vec3, uv: [f32; 2]) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv,
        }
    }

    /// Vertex buffer layout for wgpu
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::SIZE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // normal
                wgpu::VertexAttribute {
                    offset: 12,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // uv
                wgpu::VertexAttribute {
                    offset: 24,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Indexed triangle list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get index count
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Append a quad as two triangles, corners in winding order
    pub fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3) {
        let base = self.vertices.len() as u32;
        let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        for (corner, uv) in corners.into_iter().zip(uvs) {
            self.vertices.push(Vertex::new(corner, normal, uv));
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Receives the meshes a visual proxy draws
pub trait DrawTarget {
    /// `key` changes whenever the visual rebuilt `mesh`
    fn draw_mesh(&mut self, key: MeshKey, mesh: &Mesh);
}

/// Draw target that keeps a copy of everything drawn into it
#[derive(Debug, Default)]
pub struct MeshRecorder {
    pub keys: Vec<MeshKey>,
    pub meshes: Vec<Mesh>,
}

impl MeshRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.meshes.clear();
    }
}

impl DrawTarget for MeshRecorder {
    fn draw_mesh(&mut self, key: MeshKey, mesh: &Mesh) {
        self.keys.push(key);
        self.meshes.push(mesh.clone());
    }
}
