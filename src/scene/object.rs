//! Renderable scene objects.
//!
//! Only two concrete shapes exist, so the polymorphic surface is a closed
//! variant rather than a trait hierarchy; the renderer-facing accessor set
//! (vertex count, indices, interleaved buffer, stride, color) is uniform
//! across both.

use glam::Vec3;

use crate::geometry::{Cylinder, MeshData, Sphere, INTERLEAVED_STRIDE};

/// A renderable object in the scene: an atom sphere or a bond cylinder.
#[derive(Debug, Clone)]
pub enum SceneObject {
    /// Atom rendered as a sphere.
    Sphere(Sphere),
    /// Bond rendered as a cylinder.
    Cylinder(Cylinder),
}

impl SceneObject {
    /// Generated mesh arrays.
    #[must_use]
    pub const fn mesh(&self) -> &MeshData {
        match self {
            Self::Sphere(s) => s.mesh(),
            Self::Cylinder(c) => c.mesh(),
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.mesh().vertex_count()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.mesh().triangle_count()
    }

    /// CCW triangle indices.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        self.mesh().indices()
    }

    /// Interleaved vertex buffer (position + normal + texcoord).
    #[must_use]
    pub fn interleaved_vertices(&self) -> &[f32] {
        self.mesh().interleaved()
    }

    /// Floats per interleaved vertex (8: 3 position, 3 normal, 2 texcoord).
    #[must_use]
    pub const fn interleaved_stride(&self) -> usize {
        INTERLEAVED_STRIDE
    }

    /// Object color.
    #[must_use]
    pub const fn color(&self) -> Vec3 {
        match self {
            Self::Sphere(s) => s.color(),
            Self::Cylinder(c) => c.color(),
        }
    }

    /// Recolor the object.
    pub fn set_color(&mut self, color: Vec3) {
        match self {
            Self::Sphere(s) => s.set_color(color),
            Self::Cylinder(c) => c.set_color(color),
        }
    }

    /// The sphere inside, if this object is one.
    #[must_use]
    pub const fn as_sphere(&self) -> Option<&Sphere> {
        match self {
            Self::Sphere(s) => Some(s),
            Self::Cylinder(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CylinderParams;

    #[test]
    fn accessors_are_uniform_across_variants() {
        let sphere = SceneObject::Sphere(Sphere::new(
            0,
            1.0,
            8,
            4,
            Vec3::ZERO,
            Vec3::ONE,
            true,
        ));
        let cylinder = SceneObject::Cylinder(Cylinder::new(
            &CylinderParams::default(),
            1.0,
            Vec3::ONE,
        ));
        for obj in [&sphere, &cylinder] {
            assert_eq!(obj.interleaved_stride(), 8);
            assert_eq!(
                obj.interleaved_vertices().len(),
                obj.vertex_count() * 8
            );
            assert_eq!(obj.indices().len(), obj.triangle_count() * 3);
        }
    }
}
