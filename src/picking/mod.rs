//! Screen-ray picking of atom spheres.
//!
//! A 2D screen point becomes a world-space ray through the inverse
//! projection and view transforms; each candidate sphere is tested with a
//! cone half-angle comparison, which approximates ray-sphere intersection
//! by the sphere's angular size as seen from the camera. Among all hits
//! the nearest sphere wins.

use glam::{Mat4, Vec2, Vec3, Vec4, Vec4Swizzles};

use crate::scene::AtomHandle;

/// A world-space ray from the camera through a clicked pixel.
#[derive(Debug, Clone, Copy)]
pub struct PickRay {
    /// Ray origin (the camera position).
    pub origin: Vec3,
    /// Normalized ray direction.
    pub direction: Vec3,
}

impl PickRay {
    /// Unproject a screen point into a world-space ray.
    ///
    /// `screen` is in pixels with the origin at the top-left; `viewport`
    /// is the drawable size in pixels. `projection` and `view` are the
    /// matrices the scene was rendered with; `origin` is the camera
    /// position in world space.
    #[must_use]
    pub fn from_screen(
        screen: Vec2,
        viewport: Vec2,
        projection: &Mat4,
        view: &Mat4,
        origin: Vec3,
    ) -> Self {
        // Screen to normalized device coordinates (y flips).
        let ndc = Vec2::new(
            2.0 * screen.x / viewport.x - 1.0,
            1.0 - 2.0 * screen.y / viewport.y,
        );

        // Clip-space point on the near plane, back to eye space.
        let clip = Vec4::new(ndc.x, ndc.y, -1.0, 1.0);
        let eye = projection.inverse() * clip;
        // Direction, not position: z points into the screen, w = 0.
        let eye_dir = Vec4::new(eye.x, eye.y, -1.0, 0.0);

        let world = (view.inverse() * eye_dir).xyz();
        Self {
            origin,
            direction: world.normalize_or_zero(),
        }
    }
}

/// Resolve which atom (if any) the ray hits.
///
/// Each sphere subtends a cone of half-angle `atan(radius / distance)`
/// from the ray origin; a forward-facing angular comparison declares the
/// hit. Of all hit spheres the one nearest the camera is returned. Zero
/// candidates or no intersection yield `None`, never an error.
#[must_use]
pub fn pick(ray: &PickRay, atoms: &[AtomHandle]) -> Option<u32> {
    let mut nearest: Option<(u32, f32)> = None;

    for atom in atoms {
        let to_center = atom.center - ray.origin;
        let distance = to_center.length();
        if distance <= f32::EPSILON {
            // Camera inside the sphere counts as an immediate hit.
            nearest = Some((atom.id, 0.0));
            continue;
        }

        let cone_half_angle = (atom.radius / distance).atan();
        let angle = ray.direction.angle_between(to_center / distance);
        if angle > cone_half_angle {
            continue;
        }

        let closer = nearest.is_none_or(|(_, best)| distance < best);
        if closer {
            nearest = Some((atom.id, distance));
        }
    }

    if let Some((id, distance)) = nearest {
        log::debug!("picked atom {id} at distance {distance:.3}");
        Some(id)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;

    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn scenario() -> (Mat4, Mat4, Vec3) {
        // Camera at (10, 0, 10) looking toward the origin.
        let eye = Vec3::new(10.0, 0.0, 10.0);
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        let projection = Mat4::perspective_rh(
            45.0f32.to_radians(),
            VIEWPORT.x / VIEWPORT.y,
            0.1,
            100.0,
        );
        (projection, view, eye)
    }

    fn origin_sphere() -> AtomHandle {
        AtomHandle {
            id: 42,
            center: Vec3::ZERO,
            radius: 1.0,
        }
    }

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn clicking_the_projected_center_hits_the_sphere() {
        init_logging();
        let (projection, view, eye) = scenario();
        // The origin projects to the viewport center.
        let ray = PickRay::from_screen(
            VIEWPORT / 2.0,
            VIEWPORT,
            &projection,
            &view,
            eye,
        );
        assert_eq!(pick(&ray, &[origin_sphere()]), Some(42));
    }

    #[test]
    fn clicking_a_far_corner_misses() {
        let (projection, view, eye) = scenario();
        let ray = PickRay::from_screen(
            Vec2::new(1.0, 1.0),
            VIEWPORT,
            &projection,
            &view,
            eye,
        );
        assert_eq!(pick(&ray, &[origin_sphere()]), None);
    }

    #[test]
    fn nearest_of_overlapping_hits_wins() {
        let (projection, view, eye) = scenario();
        let ray = PickRay::from_screen(
            VIEWPORT / 2.0,
            VIEWPORT,
            &projection,
            &view,
            eye,
        );
        let far = AtomHandle {
            id: 1,
            center: Vec3::new(-2.0, 0.0, -2.0),
            radius: 1.0,
        };
        let near = AtomHandle {
            id: 2,
            center: Vec3::new(2.0, 0.0, 2.0),
            radius: 1.0,
        };
        assert_eq!(pick(&ray, &[far, near]), Some(2));
    }

    #[test]
    fn sphere_behind_the_camera_is_not_picked() {
        let (projection, view, eye) = scenario();
        let ray = PickRay::from_screen(
            VIEWPORT / 2.0,
            VIEWPORT,
            &projection,
            &view,
            eye,
        );
        let behind = AtomHandle {
            id: 7,
            center: Vec3::new(20.0, 0.0, 20.0),
            radius: 1.0,
        };
        assert_eq!(pick(&ray, &[behind]), None);
    }

    #[test]
    fn empty_candidate_list_returns_none() {
        let (_, _, eye) = scenario();
        let ray = PickRay {
            origin: eye,
            direction: Vec3::NEG_Z,
        };
        assert_eq!(pick(&ray, &[]), None);
    }

    #[test]
    fn ray_direction_is_normalized() {
        let (projection, view, eye) = scenario();
        let ray = PickRay::from_screen(
            Vec2::new(100.0, 500.0),
            VIEWPORT,
            &projection,
            &view,
            eye,
        );
        assert!((ray.direction.length() - 1.0).abs() < 1e-5);
    }
}
