//! Visual proxy for a full-sphere canvas

use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use super::dome_visual::spherical_mesh;
use super::mesh::{next_visual_id, DrawTarget, Mesh, MeshKey};

/// Cached sphere mesh, seen from inside
#[derive(Debug)]
pub struct VisualSphere {
    id: u64,
    horiz_segments: u32,
    vert_segments: u32,
    mesh: Mesh,
    revision: u64,
}

impl VisualSphere {
    pub fn new(horiz_segments: u32, vert_segments: u32) -> Self {
        Self {
            id: next_visual_id(),
            horiz_segments: horiz_segments.clamp(8, 64),
            vert_segments: vert_segments.clamp(8, 64),
            mesh: Mesh::default(),
            revision: 0,
        }
    }

    /// Rebuild the cached mesh for a sphere of `radius` around `center`
    pub fn update(&mut self, radius: f32, center: Vec3) {
        self.mesh = spherical_mesh(
            radius,
            center,
            self.horiz_segments,
            self.vert_segments,
            -FRAC_PI_2,
        );
        self.revision += 1;
        log::debug!(
            "VisualSphere updated (revision {}): radius={} center={:?}",
            self.revision,
            radius,
            center
        );
    }

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

impl Default for VisualSphere {
    fn default() -> Self {
        Self::new(32, 32)
    }
}

impl Clone for VisualSphere {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_mesh() {
        let mut sphere = VisualSphere::new(8, 8);
        sphere.update(2.0, Vec3::ZERO);
        assert_eq!(sphere.mesh().vertex_count(), 81);
        assert_eq!(sphere.mesh().index_count(), 384);
    }

    #[test]
    fn test_sphere_covers_both_poles() {
        let center = Vec3::new(0.0, 1.0, 4.0);
        let mut sphere = VisualSphere::default();
        sphere.update(3.0, center);
        let zs: Vec<f32> = sphere.mesh().vertices.iter().map(|v| v.position[2]).collect();
        let lowest = zs.iter().copied().fold(f32::INFINITY, f32::min);
        let highest = zs.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert!((lowest - 1.0).abs() < 1e-4);
        assert!((highest - 7.0).abs() < 1e-4);
        for v in &sphere.mesh().vertices {
            let p = Vec3::from_array(v.position);
            assert!(((p - center).length() - 3.0).abs() < 1e-4);
        }
    }
}
