//! Procedural mesh generation for spheres and cylinders.
//!
//! Both shapes produce a [`MeshData`]: flat position/normal/texcoord arrays,
//! a CCW triangle index buffer, and the interleaved vertex buffer the
//! external renderer uploads directly (position + normal + texcoord,
//! stride 8 floats / 32 bytes).

mod cylinder;
mod sphere;

pub use cylinder::{Cylinder, CylinderParams};
pub use sphere::Sphere;

use glam::Vec3;

/// Minimum longitude subdivision; lower values are silently clamped.
pub const MIN_SECTOR_COUNT: u32 = 3;
/// Minimum latitude subdivision; lower values are silently clamped.
pub const MIN_STACK_COUNT: u32 = 2;
/// Floats per interleaved vertex: 3 position + 3 normal + 2 texcoord.
pub const INTERLEAVED_STRIDE: usize = 8;

/// Components with magnitude below this are snapped to exactly zero.
/// Keeps axis-aligned degeneracies (poles, seams) numerically exact.
const SNAP_EPSILON: f32 = 0.01;

/// Snap a scalar to zero when its magnitude is below [`SNAP_EPSILON`].
fn snap(v: f32) -> f32 {
    if v.abs() < SNAP_EPSILON {
        0.0
    } else {
        v
    }
}

/// Generated mesh arrays for one renderable object.
///
/// Invariants maintained by the builders: `normals` parallels `positions`,
/// `tex_coords` holds one st pair per vertex, every index is below the
/// vertex count, and `interleaved` is rebuilt after the latest geometry
/// pass so it always reflects current positions/normals/texcoords.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    positions: Vec<f32>,
    normals: Vec<f32>,
    tex_coords: Vec<f32>,
    indices: Vec<u32>,
    interleaved: Vec<f32>,
}

impl MeshData {
    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw vertex positions, xyz triples.
    #[must_use]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Raw vertex normals, xyz triples parallel to positions.
    #[must_use]
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Raw texture coordinates, st pairs parallel to positions.
    #[must_use]
    pub fn tex_coords(&self) -> &[f32] {
        &self.tex_coords
    }

    /// CCW triangle indices, grouped in triples.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Interleaved vertex buffer: `[x,y,z, nx,ny,nz, s,t]` per vertex.
    #[must_use]
    pub fn interleaved(&self) -> &[f32] {
        &self.interleaved
    }

    /// Interleaved vertex buffer as bytes, ready for GPU upload.
    #[must_use]
    pub fn interleaved_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.interleaved)
    }

    /// Index buffer as bytes, ready for GPU upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub(crate) fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.tex_coords.clear();
        self.indices.clear();
        self.interleaved.clear();
    }

    pub(crate) fn add_vertex(&mut self, x: f32, y: f32, z: f32) {
        self.positions.push(snap(x));
        self.positions.push(snap(y));
        self.positions.push(snap(z));
    }

    pub(crate) fn add_normal(&mut self, nx: f32, ny: f32, nz: f32) {
        self.normals.push(snap(nx));
        self.normals.push(snap(ny));
        self.normals.push(snap(nz));
    }

    pub(crate) fn add_tex_coord(&mut self, s: f32, t: f32) {
        self.tex_coords.push(snap(s));
        self.tex_coords.push(snap(t));
    }

    pub(crate) fn add_indices(&mut self, i1: u32, i2: u32, i3: u32) {
        self.indices.push(i1);
        self.indices.push(i2);
        self.indices.push(i3);
    }

    /// Translate every vertex position by `offset` and refresh the
    /// interleaved buffer.
    pub(crate) fn translate(&mut self, offset: Vec3) {
        for chunk in self.positions.chunks_exact_mut(3) {
            chunk[0] += offset.x;
            chunk[1] += offset.y;
            chunk[2] += offset.z;
        }
        self.build_interleaved();
    }

    /// Rotate every vertex position and normal by `rotation` and refresh
    /// the interleaved buffer.
    pub(crate) fn rotate(&mut self, rotation: glam::Quat) {
        for chunk in self.positions.chunks_exact_mut(3) {
            let v = rotation * Vec3::new(chunk[0], chunk[1], chunk[2]);
            chunk[0] = v.x;
            chunk[1] = v.y;
            chunk[2] = v.z;
        }
        for chunk in self.normals.chunks_exact_mut(3) {
            let n = rotation * Vec3::new(chunk[0], chunk[1], chunk[2]);
            chunk[0] = n.x;
            chunk[1] = n.y;
            chunk[2] = n.z;
        }
        self.build_interleaved();
    }

    /// Rebuild the interleaved V/N/T buffer from the separate arrays.
    /// Always runs last in every geometry pass.
    pub(crate) fn build_interleaved(&mut self) {
        self.interleaved.clear();
        self.interleaved
            .reserve(self.vertex_count() * INTERLEAVED_STRIDE);
        let mut t = 0;
        for v in (0..self.positions.len()).step_by(3) {
            self.interleaved.extend_from_slice(&self.positions[v..v + 3]);
            self.interleaved.extend_from_slice(&self.normals[v..v + 3]);
            self.interleaved
                .extend_from_slice(&self.tex_coords[t..t + 2]);
            t += 2;
        }
    }
}

/// Face normal of the CCW triangle `v1-v2-v3`.
///
/// Degenerate (zero-area) triangles return the zero vector rather than
/// failing; procedural generation is best-effort on bad faces.
#[must_use]
pub fn compute_face_normal(v1: Vec3, v2: Vec3, v3: Vec3) -> Vec3 {
    const EPSILON: f32 = 1e-6;

    let n = (v2 - v1).cross(v3 - v1);
    let length = n.length();
    if length > EPSILON {
        n / length
    } else {
        Vec3::ZERO
    }
}

/// Clamp tessellation parameters to the supported minimums.
pub(crate) const fn clamp_tessellation(
    sector_count: u32,
    stack_count: u32,
    min_stacks: u32,
) -> (u32, u32) {
    let sectors = if sector_count < MIN_SECTOR_COUNT {
        MIN_SECTOR_COUNT
    } else {
        sector_count
    };
    let stacks = if stack_count < min_stacks {
        min_stacks
    } else {
        stack_count
    };
    (sectors, stacks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_normal_of_right_triangle_points_up_z() {
        let n = compute_face_normal(
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(n, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn face_normal_of_collinear_points_is_zero() {
        let n = compute_face_normal(
            Vec3::ZERO,
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(2.0, 2.0, 2.0),
        );
        assert_eq!(n, Vec3::ZERO);
    }

    #[test]
    fn snap_zeroes_small_components() {
        let mut mesh = MeshData::default();
        mesh.add_vertex(0.005, -0.009, 1.0);
        assert_eq!(mesh.positions(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn interleaved_stride_is_eight_floats() {
        let mut mesh = MeshData::default();
        mesh.add_vertex(1.0, 2.0, 3.0);
        mesh.add_normal(0.0, 0.0, 1.0);
        mesh.add_tex_coord(0.5, 0.25);
        mesh.build_interleaved();
        assert_eq!(
            mesh.interleaved(),
            &[1.0, 2.0, 3.0, 0.0, 0.0, 1.0, 0.5, 0.25]
        );
        assert_eq!(
            mesh.interleaved_bytes().len(),
            mesh.vertex_count() * INTERLEAVED_STRIDE * 4
        );
    }
}
