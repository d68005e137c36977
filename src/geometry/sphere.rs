//! Parametric UV sphere with smooth or flat shading.
//!
//! Parametric form: `x = r·cos(u)·cos(v)`, `y = r·cos(u)·sin(v)`,
//! `z = r·sin(u)` where `u` is the stack (latitude) angle in
//! `[π/2, -π/2]` and `v` the sector (longitude) angle in `[0, 2π)`.

use std::f32::consts::PI;

use glam::Vec3;

use super::{
    clamp_tessellation, compute_face_normal, MeshData, MIN_STACK_COUNT,
};

/// Scratch vertex for flat-mode generation: position + texcoord only,
/// normals come per face.
struct ScratchVertex {
    pos: Vec3,
    s: f32,
    t: f32,
}

/// A renderable atom sphere.
///
/// The mesh is generated origin-centered, then translated by `position`
/// (baked into the vertex data, not a transform). Any parameter change
/// regenerates the full mesh; there is no incremental patching, so
/// `set_position` is idempotent for the same target rather than
/// accumulating into previously translated vertices.
#[derive(Debug, Clone)]
pub struct Sphere {
    id: u32,
    radius: f32,
    sector_count: u32,
    stack_count: u32,
    smooth: bool,
    position: Vec3,
    color: Vec3,
    mesh: MeshData,
}

impl Sphere {
    /// Build a sphere.
    ///
    /// `sector_count` and `stack_count` below the minimums (3 and 2) are
    /// silently clamped. `radius` must be strictly positive; this is a
    /// caller precondition, not a checked error.
    #[must_use]
    pub fn new(
        id: u32,
        radius: f32,
        sector_count: u32,
        stack_count: u32,
        position: Vec3,
        color: Vec3,
        smooth: bool,
    ) -> Self {
        let (sector_count, stack_count) =
            clamp_tessellation(sector_count, stack_count, MIN_STACK_COUNT);
        let mut sphere = Self {
            id,
            radius,
            sector_count,
            stack_count,
            smooth,
            position,
            color,
            mesh: MeshData::default(),
        };
        sphere.rebuild();
        sphere
    }

    /// Stable identifier (atom index in a molecular scene).
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Reassign the identifier. Does not touch geometry.
    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    /// Sphere radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Longitude subdivision count.
    #[must_use]
    pub const fn sector_count(&self) -> u32 {
        self.sector_count
    }

    /// Latitude subdivision count.
    #[must_use]
    pub const fn stack_count(&self) -> u32 {
        self.stack_count
    }

    /// Whether the mesh uses shared-vertex smooth shading.
    #[must_use]
    pub const fn is_smooth(&self) -> bool {
        self.smooth
    }

    /// World-space center baked into the vertex data.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Sphere color.
    #[must_use]
    pub const fn color(&self) -> Vec3 {
        self.color
    }

    /// Recolor the sphere. Color is per-object state, not vertex data,
    /// so no rebuild happens.
    pub fn set_color(&mut self, color: Vec3) {
        self.color = color;
    }

    /// Generated mesh arrays.
    #[must_use]
    pub const fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// Replace all tessellation parameters at once and rebuild.
    pub fn set(
        &mut self,
        radius: f32,
        sector_count: u32,
        stack_count: u32,
        smooth: bool,
    ) {
        let (sector_count, stack_count) =
            clamp_tessellation(sector_count, stack_count, MIN_STACK_COUNT);
        self.radius = radius;
        self.sector_count = sector_count;
        self.stack_count = stack_count;
        self.smooth = smooth;
        self.rebuild();
    }

    /// Change the radius and rebuild if it differs.
    pub fn set_radius(&mut self, radius: f32) {
        if (radius - self.radius).abs() > f32::EPSILON {
            self.set(radius, self.sector_count, self.stack_count, self.smooth);
        }
    }

    /// Change the sector count and rebuild if it differs.
    pub fn set_sector_count(&mut self, sector_count: u32) {
        if sector_count != self.sector_count {
            self.set(self.radius, sector_count, self.stack_count, self.smooth);
        }
    }

    /// Change the stack count and rebuild if it differs.
    pub fn set_stack_count(&mut self, stack_count: u32) {
        if stack_count != self.stack_count {
            self.set(self.radius, self.sector_count, stack_count, self.smooth);
        }
    }

    /// Switch between smooth and flat shading and rebuild if it differs.
    pub fn set_smooth(&mut self, smooth: bool) {
        if smooth != self.smooth {
            self.set(self.radius, self.sector_count, self.stack_count, smooth);
        }
    }

    /// Move the sphere to a new world position.
    ///
    /// Rebuilds from the origin-centered parametric form and translates
    /// once, so repeated calls do not compound into the vertex data.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.rebuild();
    }

    /// Regenerate the full mesh from current parameters.
    fn rebuild(&mut self) {
        if self.smooth {
            self.build_vertices_smooth();
        } else {
            self.build_vertices_flat();
        }
        self.mesh.translate(self.position);
    }

    /// Shared-vertex tessellation: one vertex per (stack, sector) pair,
    /// normals radial, seam handled by index wrap-around instead of
    /// duplicated vertices. Vertex count = `sector_count * (stack_count+1)`.
    fn build_vertices_smooth(&mut self) {
        self.mesh.clear();

        let length_inv = 1.0 / self.radius;
        let sector_step = 2.0 * PI / self.sector_count as f32;
        let stack_step = PI / self.stack_count as f32;

        for i in 0..=self.stack_count {
            let stack_angle = PI / 2.0 - i as f32 * stack_step;
            let xy = self.radius * stack_angle.cos();
            let z = self.radius * stack_angle.sin();

            for j in 0..self.sector_count {
                let sector_angle = j as f32 * sector_step;
                let x = xy * sector_angle.cos();
                let y = xy * sector_angle.sin();

                self.mesh.add_vertex(x, y, z);
                self.mesh
                    .add_normal(x * length_inv, y * length_inv, z * length_inv);
                self.mesh.add_tex_coord(
                    j as f32 / self.sector_count as f32,
                    i as f32 / self.stack_count as f32,
                );
            }
        }

        // Two CCW triangles per quad; the last sector wraps back to the
        // first vertex of the ring. Pole rings collapse to a point, so the
        // degenerate triangle of each pole quad is skipped.
        //   k1--k1n
        //   |  / |
        //   | /  |
        //   k2--k2n
        for i in 0..self.stack_count {
            for j in 0..self.sector_count {
                let jn = (j + 1) % self.sector_count;
                let k1 = i * self.sector_count + j;
                let k1n = i * self.sector_count + jn;
                let k2 = (i + 1) * self.sector_count + j;
                let k2n = (i + 1) * self.sector_count + jn;

                if i != 0 {
                    self.mesh.add_indices(k1, k2, k1n);
                }
                if i != self.stack_count - 1 {
                    self.mesh.add_indices(k1n, k2, k2n);
                }
            }
        }

        self.mesh.build_interleaved();
    }

    /// Per-face tessellation: every quad (or pole triangle) gets its own
    /// vertices carrying one shared face normal.
    fn build_vertices_flat(&mut self) {
        let sector_step = 2.0 * PI / self.sector_count as f32;
        let stack_step = PI / self.stack_count as f32;

        // (sector_count + 1) vertices per stack; the seam pair shares a
        // position but differs in texcoord.
        let mut scratch = Vec::with_capacity(
            ((self.stack_count + 1) * (self.sector_count + 1)) as usize,
        );
        for i in 0..=self.stack_count {
            let stack_angle = PI / 2.0 - i as f32 * stack_step;
            let xy = self.radius * stack_angle.cos();
            let z = self.radius * stack_angle.sin();

            for j in 0..=self.sector_count {
                let sector_angle = j as f32 * sector_step;
                scratch.push(ScratchVertex {
                    pos: Vec3::new(
                        xy * sector_angle.cos(),
                        xy * sector_angle.sin(),
                        z,
                    ),
                    s: j as f32 / self.sector_count as f32,
                    t: i as f32 / self.stack_count as f32,
                });
            }
        }

        self.mesh.clear();

        let mut index: u32 = 0;
        for i in 0..self.stack_count {
            let mut vi1 = (i * (self.sector_count + 1)) as usize;
            let mut vi2 = ((i + 1) * (self.sector_count + 1)) as usize;

            for _ in 0..self.sector_count {
                // v1--v3
                // |    |
                // v2--v4
                let v1 = &scratch[vi1];
                let v2 = &scratch[vi2];
                let v3 = &scratch[vi1 + 1];
                let v4 = &scratch[vi2 + 1];

                if i == 0 {
                    // Top pole stack: single triangle per sector.
                    self.push_face(&[v1, v2, v4]);
                    self.mesh.add_indices(index, index + 1, index + 2);
                    index += 3;
                } else if i == self.stack_count - 1 {
                    // Bottom pole stack: single triangle per sector.
                    self.push_face(&[v1, v2, v3]);
                    self.mesh.add_indices(index, index + 1, index + 2);
                    index += 3;
                } else {
                    // Interior: full quad, two triangles.
                    self.push_face(&[v1, v2, v3, v4]);
                    self.mesh.add_indices(index, index + 1, index + 2);
                    self.mesh.add_indices(index + 2, index + 1, index + 3);
                    index += 4;
                }

                vi1 += 1;
                vi2 += 1;
            }
        }

        self.mesh.build_interleaved();
    }

    /// Emit one flat face: vertices and texcoords as given, one face
    /// normal (from the first three vertices) replicated for all of them.
    fn push_face(&mut self, verts: &[&ScratchVertex]) {
        let n =
            compute_face_normal(verts[0].pos, verts[1].pos, verts[2].pos);
        for v in verts {
            self.mesh.add_vertex(v.pos.x, v.pos.y, v.pos.z);
            self.mesh.add_normal(n.x, n.y, n.z);
            self.mesh.add_tex_coord(v.s, v.t);
        }
    }
}
