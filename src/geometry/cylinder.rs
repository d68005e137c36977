//! Tapered cylinder (cone frustum) used for bond rendering.
//!
//! The mesh is generated along the +Z axis, centered at the origin: side
//! surface first, then the base disk, then the top disk. `base_index` and
//! `top_index` record where each cap's triangles begin in the index
//! buffer so the side and caps can be drawn or queried separately. An
//! orientation and a center translation are applied afterwards, which is
//! how a cylinder gets stretched between two bonded atoms.

use std::f32::consts::PI;

use glam::{Quat, Vec3};

use super::{clamp_tessellation, compute_face_normal, MeshData};

/// Minimum stack count for cylinders; a single band is a valid cylinder.
const MIN_CYLINDER_STACK_COUNT: u32 = 1;

/// Geometry parameters for a [`Cylinder`].
///
/// Bundled so constructors stay readable; bond building creates many of
/// these with only the radii varying.
#[derive(Debug, Clone, Copy)]
pub struct CylinderParams {
    /// Radius at the base (z = -height/2).
    pub base_radius: f32,
    /// Radius at the top (z = +height/2).
    pub top_radius: f32,
    /// Longitude subdivision count (minimum 3).
    pub sector_count: u32,
    /// Number of side bands along the axis (minimum 1).
    pub stack_count: u32,
    /// Shared-vertex smooth shading when true, per-face when false.
    pub smooth: bool,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            base_radius: 1.0,
            top_radius: 1.0,
            sector_count: 36,
            stack_count: 1,
            smooth: true,
        }
    }
}

/// A renderable bond cylinder.
#[derive(Debug, Clone)]
pub struct Cylinder {
    base_radius: f32,
    top_radius: f32,
    height: f32,
    sector_count: u32,
    stack_count: u32,
    smooth: bool,
    color: Vec3,
    center: Vec3,
    orientation: Quat,
    base_index: usize,
    top_index: usize,
    mesh: MeshData,
}

impl Cylinder {
    /// Build an axis-aligned cylinder centered at the origin.
    #[must_use]
    pub fn new(params: &CylinderParams, height: f32, color: Vec3) -> Self {
        let (sector_count, stack_count) = clamp_tessellation(
            params.sector_count,
            params.stack_count,
            MIN_CYLINDER_STACK_COUNT,
        );
        let mut cylinder = Self {
            base_radius: params.base_radius,
            top_radius: params.top_radius,
            height,
            sector_count,
            stack_count,
            smooth: params.smooth,
            color,
            center: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            base_index: 0,
            top_index: 0,
            mesh: MeshData::default(),
        };
        cylinder.rebuild();
        cylinder
    }

    /// Build a cylinder spanning `start` to `end`.
    ///
    /// Height is the distance between the endpoints; the mesh is rotated
    /// from the +Z axis onto the segment direction and translated to the
    /// segment midpoint. Coincident endpoints yield a degenerate
    /// zero-height cylinder along +Z.
    #[must_use]
    pub fn between(
        start: Vec3,
        end: Vec3,
        params: &CylinderParams,
        color: Vec3,
    ) -> Self {
        let axis = end - start;
        let height = axis.length();
        let mut cylinder = Self::new(params, height, color);
        cylinder.orientation = rotation_to(axis);
        cylinder.center = start.midpoint(end);
        cylinder.rebuild();
        cylinder
    }

    /// Radius at the base.
    #[must_use]
    pub const fn base_radius(&self) -> f32 {
        self.base_radius
    }

    /// Radius at the top.
    #[must_use]
    pub const fn top_radius(&self) -> f32 {
        self.top_radius
    }

    /// Distance between base and top disks.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Longitude subdivision count.
    #[must_use]
    pub const fn sector_count(&self) -> u32 {
        self.sector_count
    }

    /// Side band count along the axis.
    #[must_use]
    pub const fn stack_count(&self) -> u32 {
        self.stack_count
    }

    /// Whether the side uses shared-vertex smooth shading.
    #[must_use]
    pub const fn is_smooth(&self) -> bool {
        self.smooth
    }

    /// Cylinder color.
    #[must_use]
    pub const fn color(&self) -> Vec3 {
        self.color
    }

    /// Recolor the cylinder without touching geometry.
    pub fn set_color(&mut self, color: Vec3) {
        self.color = color;
    }

    /// World-space center baked into the vertex data.
    #[must_use]
    pub const fn center(&self) -> Vec3 {
        self.center
    }

    /// Generated mesh arrays.
    #[must_use]
    pub const fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// Replace all geometry parameters at once and rebuild.
    pub fn set(&mut self, params: &CylinderParams, height: f32) {
        let (sector_count, stack_count) = clamp_tessellation(
            params.sector_count,
            params.stack_count,
            MIN_CYLINDER_STACK_COUNT,
        );
        self.base_radius = params.base_radius;
        self.top_radius = params.top_radius;
        self.height = height;
        self.sector_count = sector_count;
        self.stack_count = stack_count;
        self.smooth = params.smooth;
        self.rebuild();
    }

    /// Reorient the cylinder axis to point along `direction` and rebuild.
    /// A zero direction resets to the +Z axis.
    pub fn tweak(&mut self, direction: Vec3) {
        self.orientation = rotation_to(direction);
        self.rebuild();
    }

    /// Translate the cylinder center to `target` and rebuild from the
    /// canonical mesh (repeated calls do not accumulate).
    pub fn move_to(&mut self, target: Vec3) {
        self.center = target;
        self.rebuild();
    }

    /// Index count of the side section (always starts at index 0).
    #[must_use]
    pub const fn side_index_count(&self) -> usize {
        self.base_index
    }

    /// First index of the base cap section.
    #[must_use]
    pub const fn base_start_index(&self) -> usize {
        self.base_index
    }

    /// Index count of the base cap section.
    #[must_use]
    pub const fn base_index_count(&self) -> usize {
        self.top_index - self.base_index
    }

    /// First index of the top cap section.
    #[must_use]
    pub const fn top_start_index(&self) -> usize {
        self.top_index
    }

    /// Index count of the top cap section.
    #[must_use]
    pub fn top_index_count(&self) -> usize {
        self.mesh.indices().len() - self.top_index
    }

    /// Regenerate the full mesh: canonical +Z form, then orientation,
    /// then translation. Interleave reflects the final vertex data.
    fn rebuild(&mut self) {
        if self.smooth {
            self.build_vertices_smooth();
        } else {
            self.build_vertices_flat();
        }
        self.build_caps();
        self.mesh.rotate(self.orientation);
        self.mesh.translate(self.center);
    }

    /// Unit circle sample points, seam vertex duplicated (`sector_count+1`
    /// entries so the texture seam gets distinct texcoords).
    fn unit_circle(&self) -> Vec<(f32, f32)> {
        let sector_step = 2.0 * PI / self.sector_count as f32;
        (0..=self.sector_count)
            .map(|j| {
                let a = j as f32 * sector_step;
                (a.cos(), a.sin())
            })
            .collect()
    }

    /// Side surface with shared vertices per ring; normals tilt with the
    /// base→top taper.
    fn build_vertices_smooth(&mut self) {
        self.mesh.clear();
        self.base_index = 0;
        self.top_index = 0;

        let circle = self.unit_circle();
        // Side normal elevation from the taper slope.
        let z_angle = (self.base_radius - self.top_radius).atan2(self.height);
        let (slope_sin, slope_cos) = z_angle.sin_cos();

        for i in 0..=self.stack_count {
            let t = i as f32 / self.stack_count as f32;
            let z = (t - 0.5) * self.height;
            let radius =
                self.base_radius + t * (self.top_radius - self.base_radius);

            for (j, &(cx, cy)) in circle.iter().enumerate() {
                self.mesh.add_vertex(cx * radius, cy * radius, z);
                self.mesh.add_normal(
                    cx * slope_cos,
                    cy * slope_cos,
                    slope_sin,
                );
                self.mesh
                    .add_tex_coord(j as f32 / self.sector_count as f32, t);
            }
        }

        let ring = self.sector_count + 1;
        for i in 0..self.stack_count {
            for j in 0..self.sector_count {
                let k1 = i * ring + j;
                let k2 = k1 + ring;
                self.mesh.add_indices(k1, k1 + 1, k2);
                self.mesh.add_indices(k2, k1 + 1, k2 + 1);
            }
        }

        self.base_index = self.mesh.indices().len();
        self.top_index = self.base_index;
    }

    /// Side surface with independent quads, one face normal each.
    fn build_vertices_flat(&mut self) {
        self.mesh.clear();
        self.base_index = 0;
        self.top_index = 0;

        let circle = self.unit_circle();
        let mut index: u32 = 0;

        for i in 0..self.stack_count {
            let t1 = i as f32 / self.stack_count as f32;
            let t2 = (i + 1) as f32 / self.stack_count as f32;
            let z1 = (t1 - 0.5) * self.height;
            let z2 = (t2 - 0.5) * self.height;
            let r1 = self.base_radius
                + t1 * (self.top_radius - self.base_radius);
            let r2 = self.base_radius
                + t2 * (self.top_radius - self.base_radius);

            for j in 0..self.sector_count as usize {
                let (ax, ay) = circle[j];
                let (bx, by) = circle[j + 1];
                // v2--v4   v1/v3 on the lower ring, v2/v4 on the upper;
                // |    |   emitted v1,v3,v2,v4 so both triangles stay CCW
                // v1--v3   when viewed from outside.
                let v1 = Vec3::new(ax * r1, ay * r1, z1);
                let v2 = Vec3::new(ax * r2, ay * r2, z2);
                let v3 = Vec3::new(bx * r1, by * r1, z1);
                let v4 = Vec3::new(bx * r2, by * r2, z2);
                let n = compute_face_normal(v1, v3, v2);

                let s1 = j as f32 / self.sector_count as f32;
                let s2 = (j + 1) as f32 / self.sector_count as f32;
                for (v, s, t) in [
                    (v1, s1, t1),
                    (v3, s2, t1),
                    (v2, s1, t2),
                    (v4, s2, t2),
                ] {
                    self.mesh.add_vertex(v.x, v.y, v.z);
                    self.mesh.add_normal(n.x, n.y, n.z);
                    self.mesh.add_tex_coord(s, t);
                }

                self.mesh.add_indices(index, index + 1, index + 2);
                self.mesh.add_indices(index + 2, index + 1, index + 3);
                index += 4;
            }
        }

        self.base_index = self.mesh.indices().len();
        self.top_index = self.base_index;
    }

    /// Base and top disks, appended after the side section. Cap normals
    /// are axial, so smooth and flat modes share this path.
    fn build_caps(&mut self) {
        let circle = self.unit_circle();

        // Base disk at z = -height/2, facing -Z.
        self.base_index = self.mesh.indices().len();
        let base_center = self.mesh.vertex_count() as u32;
        self.add_cap_vertices(&circle, self.base_radius, -1.0);
        for j in 0..self.sector_count {
            let k = base_center + 1 + j;
            let kn = base_center + 1 + (j + 1) % self.sector_count;
            // CCW when viewed from below.
            self.mesh.add_indices(base_center, kn, k);
        }

        // Top disk at z = +height/2, facing +Z.
        self.top_index = self.mesh.indices().len();
        let top_center = self.mesh.vertex_count() as u32;
        self.add_cap_vertices(&circle, self.top_radius, 1.0);
        for j in 0..self.sector_count {
            let k = top_center + 1 + j;
            let kn = top_center + 1 + (j + 1) % self.sector_count;
            self.mesh.add_indices(top_center, k, kn);
        }

        self.mesh.build_interleaved();
    }

    /// One cap: center vertex plus a ring of `sector_count` vertices at
    /// `normal_z * height/2`, all with the axial normal `(0,0,normal_z)`.
    fn add_cap_vertices(
        &mut self,
        circle: &[(f32, f32)],
        radius: f32,
        normal_z: f32,
    ) {
        let z = normal_z * 0.5 * self.height;
        self.mesh.add_vertex(0.0, 0.0, z);
        self.mesh.add_normal(0.0, 0.0, normal_z);
        self.mesh.add_tex_coord(0.5, 0.5);

        for &(cx, cy) in &circle[..self.sector_count as usize] {
            self.mesh.add_vertex(cx * radius, cy * radius, z);
            self.mesh.add_normal(0.0, 0.0, normal_z);
            self.mesh
                .add_tex_coord(cx.mul_add(-0.5, 0.5), cy.mul_add(-0.5, 0.5));
        }
    }
}

/// Rotation carrying the +Z axis onto `direction`. Zero-length directions
/// degrade to the identity.
fn rotation_to(direction: Vec3) -> Quat {
    let dir = direction.normalize_or_zero();
    if dir == Vec3::ZERO {
        Quat::IDENTITY
    } else {
        Quat::from_rotation_arc(Vec3::Z, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(sectors: u32, stacks: u32, smooth: bool) -> CylinderParams {
        CylinderParams {
            base_radius: 0.5,
            top_radius: 0.5,
            sector_count: sectors,
            stack_count: stacks,
            smooth,
        }
    }

    #[test]
    fn section_index_bookkeeping_sums_to_total() {
        for smooth in [true, false] {
            let c =
                Cylinder::new(&params(12, 3, smooth), 2.0, Vec3::ONE);
            let total = c.mesh().indices().len();
            assert_eq!(
                c.side_index_count()
                    + c.base_index_count()
                    + c.top_index_count(),
                total
            );
            assert_eq!(c.base_start_index() + c.base_index_count(), c.top_start_index());
            // One triangle per sector per cap.
            assert_eq!(c.base_index_count(), 12 * 3);
        }
    }

    #[test]
    fn indices_are_in_bounds_and_triples() {
        for smooth in [true, false] {
            let c = Cylinder::new(&params(9, 2, smooth), 1.5, Vec3::ONE);
            let mesh = c.mesh();
            assert_eq!(mesh.indices().len() % 3, 0);
            let vc = mesh.vertex_count() as u32;
            assert!(mesh.indices().iter().all(|&i| i < vc));
            assert_eq!(mesh.interleaved().len(), mesh.vertex_count() * 8);
        }
    }

    #[test]
    fn between_spans_the_endpoints() {
        let start = Vec3::new(1.0, 0.0, 0.0);
        let end = Vec3::new(1.0, 4.0, 0.0);
        let c = Cylinder::between(start, end, &params(8, 1, true), Vec3::ONE);
        assert!((c.height() - 4.0).abs() < 1e-6);
        assert!((c.center() - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-6);

        // Every vertex must lie within base-radius of the segment axis.
        let axis = (end - start).normalize();
        for p in c.mesh().positions().chunks_exact(3) {
            let v = Vec3::new(p[0], p[1], p[2]) - start;
            let radial = v - axis * v.dot(axis);
            assert!(radial.length() < 0.5 + 1e-3);
        }
    }

    #[test]
    fn tweak_reorients_the_axis() {
        let mut c = Cylinder::new(&params(8, 1, true), 2.0, Vec3::ONE);
        c.tweak(Vec3::X);
        // After reorienting to +X the mesh must extend along x, not z.
        let (mut min_x, mut max_x) = (f32::MAX, f32::MIN);
        for p in c.mesh().positions().chunks_exact(3) {
            min_x = min_x.min(p[0]);
            max_x = max_x.max(p[0]);
        }
        assert!((max_x - min_x - 2.0).abs() < 1e-3);
    }

    #[test]
    fn move_to_does_not_accumulate() {
        let target = Vec3::new(3.0, -1.0, 2.0);
        let mut once = Cylinder::new(&params(8, 1, true), 2.0, Vec3::ONE);
        let mut twice = once.clone();
        once.move_to(target);
        twice.move_to(target);
        twice.move_to(target);
        assert_eq!(once.mesh().positions(), twice.mesh().positions());
    }

    #[test]
    fn tapered_side_normals_are_unit_length() {
        let c = Cylinder::new(
            &CylinderParams {
                base_radius: 1.0,
                top_radius: 0.25,
                sector_count: 16,
                stack_count: 2,
                smooth: true,
            },
            3.0,
            Vec3::ONE,
        );
        for n in c.mesh().normals().chunks_exact(3) {
            let len = Vec3::new(n[0], n[1], n[2]).length();
            assert!((len - 1.0).abs() < 1e-4, "normal length {len}");
        }
    }
}
