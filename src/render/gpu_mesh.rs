//! Vertex/index buffers for meshes drawn by canvas visuals
//!
//! Buffers persist across frames. A visual's mesh is uploaded again only when
//! its [`MeshKey`] revision changes, so steady frames just record the cached
//! buffers.

use std::collections::HashMap;
use wgpu::util::DeviceExt;

use crate::visual::mesh::{DrawTarget, Mesh, MeshKey};

/// A mesh resident in GPU buffers
pub struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    /// Upload `mesh` into fresh buffers
    pub fn upload(device: &wgpu::Device, mesh: &Mesh) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Viewport Vertex Buffer"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Viewport Index Buffer"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Issue the indexed draw. The pipeline and bind groups must already be set.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// Whether a cached upload at `cached` revision is out of date for `key`
pub fn needs_upload(cached: Option<u64>, key: MeshKey) -> bool {
    cached != Some(key.revision)
}

struct CacheEntry<T> {
    revision: u64,
    value: T,
}

/// Per-visual cache of uploaded meshes plus the draw list of the current frame
pub struct MeshCache<T> {
    entries: HashMap<u64, CacheEntry<T>>,
    frame: Vec<u64>,
    uploads: u64,
}

impl<T> MeshCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            frame: Vec::new(),
            uploads: 0,
        }
    }

    /// Start a new frame. Visuals not drawn during the previous frame are evicted.
    pub fn begin_frame(&mut self) {
        let drawn = &self.frame;
        self.entries.retain(|id, _| drawn.contains(id));
        self.frame.clear();
    }

    /// Queue `key` for this frame, calling `upload` only if the cached value is stale.
    /// Returns whether an upload happened.
    pub fn draw(&mut self, key: MeshKey, upload: impl FnOnce() -> T) -> bool {
        let cached = self.entries.get(&key.visual).map(|entry| entry.revision);
        let uploaded = needs_upload(cached, key);
        if uploaded {
            self.entries.insert(
                key.visual,
                CacheEntry {
                    revision: key.revision,
                    value: upload(),
                },
            );
            self.uploads += 1;
        }
        self.frame.push(key.visual);
        uploaded
    }

    /// Values queued this frame, in draw order
    pub fn frame_values(&self) -> impl Iterator<Item = &T> + '_ {
        self.frame
            .iter()
            .filter_map(|id| self.entries.get(id).map(|entry| &entry.value))
    }

    /// Total uploads since creation
    pub fn upload_count(&self) -> u64 {
        self.uploads
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for MeshCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// GPU buffers kept alive across frames
pub type GpuMeshCache = MeshCache<GpuMesh>;

impl GpuMeshCache {
    /// Draw target for one frame. Canvases draw into it, then [`GpuMeshCache::record`]
    /// issues the queued draws.
    pub fn frame<'a>(&'a mut self, device: &'a wgpu::Device) -> GpuMeshQueue<'a> {
        self.begin_frame();
        GpuMeshQueue {
            device,
            cache: self,
        }
    }

    /// Record all draws queued this frame into `render_pass`
    pub fn record(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        for mesh in self.frame_values() {
            mesh.draw(render_pass);
        }
    }
}

/// Draw target of one frame, uploading only meshes whose revision changed
pub struct GpuMeshQueue<'a> {
    device: &'a wgpu::Device,
    cache: &'a mut GpuMeshCache,
}

impl DrawTarget for GpuMeshQueue<'_> {
    fn draw_mesh(&mut self, key: MeshKey, mesh: &Mesh) {
        // Empty buffers are not valid binding targets
        if mesh.is_empty() {
            return;
        }
        let device = self.device;
        if self.cache.draw(key, || GpuMesh::upload(device, mesh)) {
            log::debug!("Uploaded mesh of visual {} (revision {})", key.visual, key.revision);
        }
    }
}
