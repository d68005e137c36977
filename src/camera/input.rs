//! Held-key tracking for continuous fly-camera movement.

use rustc_hash::FxHashSet;

use super::fly::{CameraMovement, FlyCamera};

/// Tracks which movement directions are currently held.
///
/// The embedding application translates its key-down/key-up events into
/// [`CameraMovement`] values; every frame tick it calls [`Self::apply`]
/// so all held directions move the camera simultaneously.
#[derive(Debug, Default)]
pub struct KeyState {
    held: FxHashSet<CameraMovement>,
}

impl KeyState {
    /// Create an empty key state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down (`pressed = true`) or key-up for a direction.
    pub fn set(&mut self, direction: CameraMovement, pressed: bool) {
        if pressed {
            let _ = self.held.insert(direction);
        } else {
            let _ = self.held.remove(&direction);
        }
    }

    /// Whether a direction is currently held.
    #[must_use]
    pub fn is_held(&self, direction: CameraMovement) -> bool {
        self.held.contains(&direction)
    }

    /// Apply every held direction to the camera for one tick of `dt`
    /// seconds.
    pub fn apply(&self, camera: &mut FlyCamera, dt: f32) {
        for &direction in &self.held {
            camera.process_keyboard(direction, dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn held_directions_move_the_camera_each_tick() {
        let mut keys = KeyState::new();
        let mut camera = FlyCamera::default();
        keys.set(CameraMovement::Up, true);
        keys.apply(&mut camera, 0.5);
        keys.apply(&mut camera, 0.5);
        // Two ticks at speed 2.5 along world up.
        assert!((camera.position - Vec3::new(0.0, 2.5, 0.0)).length() < 1e-5);
    }

    #[test]
    fn released_keys_stop_moving() {
        let mut keys = KeyState::new();
        let mut camera = FlyCamera::default();
        keys.set(CameraMovement::Forward, true);
        keys.set(CameraMovement::Forward, false);
        keys.apply(&mut camera, 1.0);
        assert_eq!(camera.position, Vec3::ZERO);
    }

    #[test]
    fn opposing_directions_cancel() {
        let mut keys = KeyState::new();
        let mut camera = FlyCamera::default();
        keys.set(CameraMovement::Left, true);
        keys.set(CameraMovement::Right, true);
        keys.apply(&mut camera, 1.0);
        assert!(camera.position.length() < 1e-5);
    }
}
