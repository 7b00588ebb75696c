//! Visual proxy for a box-shaped canvas
//!
//! The proxy caches a mesh of the bounds it was last updated with. Drawing
//! never looks at the bounds again: after changing them, call
//! [`VisualBox::update`] or the old geometry keeps being drawn.

use glam::Vec3;

use super::mesh::{next_visual_id, DrawTarget, Mesh, MeshKey};
use crate::math::Bounds;

/// Cached render representation of a [`Bounds`]
#[derive(Debug)]
pub struct VisualBox {
    id: u64,
    mesh: Mesh,
    revision: u64,
}

impl Default for VisualBox {
    fn default() -> Self {
        Self {
            id: next_visual_id(),
            mesh: Mesh::default(),
            revision: 0,
        }
    }
}

/// A clone is a separate visual and gets its own id
impl Clone for VisualBox {
    fn clone(&self) -> Self {
        Self {
            id: next_visual_id(),
            mesh: self.mesh.clone(),
            revision: self.revision,
        }
    }
}

impl VisualBox {
    pub fn new(bounds: &Bounds) -> Self {
        let mut visual = Self::default();
        visual.update(bounds);
        visual
    }

    /// Rebuild the cached mesh from `bounds`
    pub fn update(&mut self, bounds: &Bounds) {
        self.mesh = Self::build_mesh(bounds);
        self.revision += 1;
        log::debug!(
            "VisualBox updated (revision {}): min={:?} max={:?}",
            self.revision,
            bounds.min(),
            bounds.max()
        );
    }

    /// Draw the cached mesh
    pub fn draw(&self, target: &mut dyn DrawTarget) {
        target.draw_mesh(self.key(), &self.mesh);
    }

    /// Key of the mesh currently cached
    pub fn key(&self) -> MeshKey {
        MeshKey {
            visual: self.id,
            revision: self.revision,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Number of updates since creation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// One quad per face with inward-facing normals
    fn build_mesh(bounds: &Bounds) -> Mesh {
        let c = bounds.corners();
        let faces = [
            ([c[0], c[1], c[2], c[3]], Vec3::Y),
            ([c[7], c[6], c[5], c[4]], Vec3::NEG_Y),
            ([c[0], c[4], c[5], c[1]], Vec3::Z),
            ([c[3], c[2], c[6], c[7]], Vec3::NEG_Z),
            ([c[0], c[3], c[7], c[4]], Vec3::X),
            ([c[1], c[5], c[6], c[2]], Vec3::NEG_X),
        ];

        let mut mesh = Mesh {
            vertices: Vec::with_capacity(24),
            indices: Vec::with_capacity(36),
        };
        for (corners, normal) in faces {
            mesh.push_quad(corners, normal);
        }
        mesh
    }
}
