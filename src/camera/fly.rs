//! Free-fly camera with yaw/pitch Euler angles.

use glam::{Mat4, Vec3};

/// Default yaw: looking down -Z.
const YAW: f32 = -90.0;
/// Default pitch: level.
const PITCH: f32 = 0.0;
/// Default translation speed in world units per second.
const SPEED: f32 = 2.5;
/// Default mouse-look sensitivity in degrees per pixel.
const SENSITIVITY: f32 = 0.1;
/// Default zoom (field-of-view surrogate) in degrees.
const ZOOM: f32 = 45.0;
/// Pitch clamp that keeps the view away from gimbal flip.
const PITCH_LIMIT: f32 = 89.0;

/// Translation directions for [`FlyCamera::process_keyboard`].
///
/// Abstracted from window-system key codes; the embedding application maps
/// its own bindings onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    /// Along the front vector.
    Forward,
    /// Against the front vector.
    Backward,
    /// Against the right vector.
    Left,
    /// Along the right vector.
    Right,
    /// Along the world up vector.
    Up,
    /// Against the world up vector.
    Down,
}

/// Free-fly perspective camera.
///
/// `front`, `right`, and `up` are derived, mutually orthogonal unit
/// vectors; they are recomputed whenever yaw, pitch, or the world up
/// change and are never set directly.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    /// Eye position in world space.
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    /// Translation speed in world units per second.
    pub movement_speed: f32,
    /// Mouse-look sensitivity in degrees per pixel.
    pub mouse_sensitivity: f32,
    zoom: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, YAW, PITCH)
    }
}

impl FlyCamera {
    /// Create a camera at `position` with the given world up and Euler
    /// angles (degrees).
    #[must_use]
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
        };
        camera.update_vectors();
        camera
    }

    /// Derived view direction (unit).
    #[must_use]
    pub const fn front(&self) -> Vec3 {
        self.front
    }

    /// Derived up vector (unit).
    #[must_use]
    pub const fn up(&self) -> Vec3 {
        self.up
    }

    /// Derived right vector (unit).
    #[must_use]
    pub const fn right(&self) -> Vec3 {
        self.right
    }

    /// Yaw angle in degrees.
    #[must_use]
    pub const fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch angle in degrees.
    #[must_use]
    pub const fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Field-of-view surrogate in degrees, always within `[1, 45]`.
    #[must_use]
    pub const fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Aim the camera at a target point, recomputing yaw and pitch.
    pub fn look_at(&mut self, target: Vec3) {
        let dir = (target - self.position).normalize_or_zero();
        if dir == Vec3::ZERO {
            return;
        }
        self.yaw = dir.z.atan2(dir.x).to_degrees();
        self.pitch = dir.y.asin().to_degrees();
        self.update_vectors();
    }

    /// Look-at view matrix from the current position along `front`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Translate along the movement axes, scaled by speed and `dt`.
    pub fn process_keyboard(&mut self, direction: CameraMovement, dt: f32) {
        let velocity = self.movement_speed * dt;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.world_up * velocity,
            CameraMovement::Down => self.position -= self.world_up * velocity,
        }
    }

    /// Mouse-look: apply pixel offsets to yaw and pitch.
    ///
    /// With `constrain_pitch` (the normal case) pitch is clamped to
    /// ±89° so the view never flips over the poles.
    pub fn process_mouse_movement(
        &mut self,
        dx: f32,
        dy: f32,
        constrain_pitch: bool,
    ) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch += dy * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Scroll zoom: narrows or widens the field-of-view surrogate,
    /// clamped to `[1, 45]`.
    pub fn process_mouse_scroll(&mut self, dy: f32) {
        self.zoom = (self.zoom - dy).clamp(1.0, 45.0);
    }

    /// Recompute `front`/`right`/`up` from yaw, pitch, and world up.
    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_stays_clamped_under_large_input() {
        let mut camera = FlyCamera::default();
        camera.process_mouse_movement(0.0, 1.0e6, true);
        assert!(camera.pitch() <= 89.0);
        camera.process_mouse_movement(0.0, -1.0e7, true);
        assert!(camera.pitch() >= -89.0);
    }

    #[test]
    fn unconstrained_pitch_is_not_clamped() {
        let mut camera = FlyCamera::default();
        camera.process_mouse_movement(0.0, 2000.0, false);
        assert!(camera.pitch() > 89.0);
    }

    #[test]
    fn zoom_stays_in_range() {
        let mut camera = FlyCamera::default();
        camera.process_mouse_scroll(100.0);
        assert!(camera.zoom() >= 1.0);
        camera.process_mouse_scroll(-1000.0);
        assert!(camera.zoom() <= 45.0);
    }

    #[test]
    fn derived_vectors_stay_orthonormal() {
        let mut camera = FlyCamera::default();
        camera.process_mouse_movement(123.0, -45.0, true);
        assert!((camera.front().length() - 1.0).abs() < 1e-5);
        assert!(camera.front().dot(camera.right()).abs() < 1e-5);
        assert!(camera.front().dot(camera.up()).abs() < 1e-5);
        assert!(camera.right().dot(camera.up()).abs() < 1e-5);
    }

    #[test]
    fn keyboard_moves_along_front() {
        let mut camera = FlyCamera::default();
        camera.process_keyboard(CameraMovement::Forward, 1.0);
        // Default yaw -90 looks down -Z.
        assert!((camera.position - Vec3::new(0.0, 0.0, -2.5)).length() < 1e-5);
    }

    #[test]
    fn look_at_points_front_toward_target() {
        let mut camera =
            FlyCamera::new(Vec3::new(10.0, 0.0, 10.0), Vec3::Y, YAW, PITCH);
        camera.look_at(Vec3::ZERO);
        let expected = (Vec3::ZERO - camera.position).normalize();
        assert!((camera.front() - expected).length() < 1e-5);
    }
}
