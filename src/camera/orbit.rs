//! Orbit camera: revolves around a focus point at fixed radius.

use glam::{Mat4, Vec3};

/// Elevation clamp keeping the orbit away from the poles.
const ELEVATION_LIMIT: f32 = 89.0;

/// Camera that orbits a focus point.
///
/// Position is always derived from two accumulated angles (azimuth in the
/// xz plane, elevation toward y) and the orbit radius; it is never set
/// directly. Complements [`super::FlyCamera`] for orbit-around-subject
/// interaction.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    focus: Vec3,
    radius: f32,
    azimuth: f32,
    elevation: f32,
}

impl OrbitCamera {
    /// Create an orbit camera around `focus` at the given radius.
    #[must_use]
    pub const fn new(focus: Vec3, radius: f32) -> Self {
        Self {
            focus,
            radius,
            azimuth: 0.0,
            elevation: 0.0,
        }
    }

    /// Focus point the camera orbits.
    #[must_use]
    pub const fn focus(&self) -> Vec3 {
        self.focus
    }

    /// Orbit radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Azimuth angle in degrees.
    #[must_use]
    pub const fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Elevation angle in degrees.
    #[must_use]
    pub const fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Move the focus point (e.g. to a new scene center).
    pub fn set_focus(&mut self, focus: Vec3) {
        self.focus = focus;
    }

    /// Change the orbit radius; values below a small epsilon are clamped
    /// so the camera never collapses onto the focus point.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(1e-3);
    }

    /// Accumulate orbit angles (degrees). Elevation is clamped to ±89°.
    pub fn orbit(&mut self, d_azimuth: f32, d_elevation: f32) {
        self.azimuth += d_azimuth;
        self.elevation = (self.elevation + d_elevation)
            .clamp(-ELEVATION_LIMIT, ELEVATION_LIMIT);
    }

    /// Derived camera position on the orbit sphere.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        let az = self.azimuth.to_radians();
        let el = self.elevation.to_radians();
        self.focus
            + self.radius
                * Vec3::new(
                    el.cos() * az.sin(),
                    el.sin(),
                    el.cos() * az.cos(),
                )
    }

    /// Look-at view matrix from the derived position toward the focus.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.focus, Vec3::Y)
    }

    /// Center on `positions` and set the radius so the whole bounding
    /// sphere fits a vertical field of view of `fovy` degrees.
    pub fn fit_to_positions(&mut self, positions: &[Vec3], fovy: f32) {
        if positions.is_empty() {
            return;
        }

        let centroid: Vec3 =
            positions.iter().copied().sum::<Vec3>() / positions.len() as f32;
        let radius = positions
            .iter()
            .map(|p| (*p - centroid).length())
            .fold(0.0f32, f32::max);

        self.focus = centroid;
        // 1.5x padding for a comfortable view.
        let fit = radius / (fovy.to_radians() / 2.0).tan();
        self.set_radius(fit * 1.5);
    }
}
