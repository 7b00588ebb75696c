//! Visual proxy for a dome-shaped canvas
//!
//! Hemisphere resting on the z = 0 plane of its center, seen from inside.

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, TAU};

use super::mesh::{next_visual_id, DrawTarget, Mesh, MeshKey, Vertex};

/// Cached hemisphere mesh
#[derive(Debug)]
pub struct VisualDome {
    id: u64,
    horiz_segments: u32,
    vert_segments: u32,
    mesh: Mesh,
    revision: u64,
}

impl VisualDome {
    pub fn new(horiz_segments: u32, vert_segments: u32) -> Self {
        Self {
            id: next_visual_id(),
            horiz_segments: horiz_segments.clamp(8, 64),
            vert_segments: vert_segments.clamp(4, 32),
            mesh: Mesh::default(),
            revision: 0,
        }
    }

    /// Rebuild the cached mesh for a dome of `radius` around `center`
    pub fn update(&mut self, radius: f32, center: Vec3) {
        self.mesh = spherical_mesh(
            radius,
            center,
            self.horiz_segments,
            self.vert_segments,
            0.0,
        );
        self.revision += 1;
        log::debug!(
            "VisualDome updated (revision {}): radius={} center={:?}",
            self.revision,
            radius,
            center
        );
    }

    /// Draw the cached mesh
    pub fn draw(&self, target: &mut dyn DrawTarget) {
        target.draw_mesh(self.key(), &self.mesh);
    }

    pub fn key(&self) -> MeshKey {
        MeshKey {
            visual: self.id,
            revision: self.revision,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for VisualDome {
    fn default() -> Self {
        Self::new(32, 16)
    }
}

impl Clone for VisualDome {
    fn clone(&self) -> Self {
        Self {
            id: next_visual_id(),
            horiz_segments: self.horiz_segments,
            vert_segments: self.vert_segments,
            mesh: self.mesh.clone(),
            revision: self.revision,
        }
    }
}

/// Inward-facing sphere section from latitude `lowest` (radians) up to the zenith.
///
/// `vert` rings are spread evenly over that range, `horiz` segments go around +Z.
pub(super) fn spherical_mesh(
    radius: f32,
    center: Vec3,
    horiz: u32,
    vert: u32,
    lowest: f32,
) -> Mesh {
    let mut mesh = Mesh {
        vertices: Vec::with_capacity(((horiz + 1) * (vert + 1)) as usize),
        indices: Vec::with_capacity((horiz * vert * 6) as usize),
    };
    let span = FRAC_PI_2 - lowest;

    for v in 0..=vert {
        let phi = lowest + (v as f32 / vert as f32) * span;
        let z = phi.sin();
        let ring = phi.cos();

        for h in 0..=horiz {
            let theta = (h as f32 / horiz as f32) * TAU;
            let dir = Vec3::new(theta.cos() * ring, theta.sin() * ring, z);

            // Equirectangular UV, inward normal
            let uv = [h as f32 / horiz as f32, 1.0 - v as f32 / vert as f32];
            mesh.vertices.push(Vertex::new(center + dir * radius, -dir, uv));
        }
    }

    for v in 0..vert {
        for h in 0..horiz {
            let top_left = v * (horiz + 1) + h;
            let top_right = top_left + 1;
            let bottom_left = top_left + horiz + 1;
            let bottom_right = bottom_left + 1;

            mesh.indices.extend_from_slice(&[top_left, top_right, bottom_left]);
            mesh.indices.extend_from_slice(&[bottom_left, top_right, bottom_right]);
        }
    }

    mesh
}
