//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (camera control, bond geometry, colors) live
//! here and serialize to/from TOML. Every sub-struct uses
//! `#[serde(default)]` so partial preset files (e.g. only overriding
//! `[colors]`) work correctly.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::elements;
use crate::error::MolvisError;

/// Camera control parameters shared by both navigation strategies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraControlOptions {
    /// Fly-camera translation speed in world units per second.
    pub movement_speed: f32,
    /// Mouse-look sensitivity in degrees per pixel.
    pub mouse_sensitivity: f32,
    /// Initial orbit-camera radius.
    pub orbit_radius: f32,
}

impl Default for CameraControlOptions {
    fn default() -> Self {
        Self {
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            orbit_radius: 10.0,
        }
    }
}

/// Bond and tessellation geometry options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeometryOptions {
    /// Bond cylinder radius.
    pub bond_radius: f32,
    /// Radial segments around bond cylinders.
    pub bond_sector_count: u32,
    /// Bands along bond cylinders.
    pub bond_stack_count: u32,
    /// Perpendicular offset between the two cylinders of a double bond.
    pub double_bond_offset: f32,
    /// Radius scale applied to each cylinder of a double bond.
    pub double_bond_radius_scale: f32,
    /// Smooth (shared-vertex) shading for generated meshes.
    pub smooth: bool,
    /// Override the per-element sphere sector count for all atoms.
    pub sector_count_override: Option<u32>,
    /// Override the per-element sphere stack count for all atoms.
    pub stack_count_override: Option<u32>,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            bond_radius: 0.05,
            bond_sector_count: 36,
            bond_stack_count: 1,
            double_bond_offset: 0.1,
            double_bond_radius_scale: 0.7,
            smooth: true,
            sector_count_override: None,
            stack_count_override: None,
        }
    }
}

/// Color palette options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Clear color behind the molecule.
    pub background: Vec3,
    /// Bond cylinder color.
    pub bond_color: Vec3,
    /// Selection highlight color for picked atoms.
    pub highlight: Vec3,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: Vec3::new(0.2, 0.3, 0.3),
            bond_color: elements::WHITE,
            highlight: elements::ORANGERED,
        }
    }
}

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ViewerOptions {
    /// Camera control parameters.
    pub camera: CameraControlOptions,
    /// Bond and tessellation geometry.
    pub geometry: GeometryOptions,
    /// Color palette.
    pub colors: ColorOptions,
}

impl ViewerOptions {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MolvisError::Io`] if the file cannot be read, or
    /// [`MolvisError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, MolvisError> {
        let content = std::fs::read_to_string(path).map_err(MolvisError::Io)?;
        toml::from_str(&content)
            .map_err(|e| MolvisError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`MolvisError::Io`] if the file or its parent directory
    /// cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), MolvisError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MolvisError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MolvisError::Io)?;
        }
        std::fs::write(path, content).map_err(MolvisError::Io)
    }
}
