//! Camera navigation strategies.
//!
//! Two selectable strategies, not merged: [`FlyCamera`] free-flies with
//! yaw/pitch Euler angles and keyboard translation, [`OrbitCamera`]
//! revolves around a focus point with two accumulated angles and a fixed
//! radius. Both derive a look-at view matrix; which one drives the view is
//! the embedding application's choice.

mod fly;
mod input;
mod orbit;

pub use fly::{CameraMovement, FlyCamera};
pub use input::KeyState;
pub use orbit::OrbitCamera;
