//! Element display styles: per-atomic-number sphere radius, tessellation,
//! and color.
//!
//! The table mirrors the classic small-molecule viewer palette: light
//! elements get small, coarsely tessellated spheres; anything past neon is
//! lumped into one "big atom" style. Radii are display radii, not van der
//! Waals radii.

use glam::Vec3;

/// Pure black.
pub const BLACK: Vec3 = Vec3::new(0.0, 0.0, 0.0);
/// Pure white.
pub const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
/// Pure red.
pub const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
/// Pure green.
pub const GREEN: Vec3 = Vec3::new(0.0, 1.0, 0.0);
/// Pure blue.
pub const BLUE: Vec3 = Vec3::new(0.0, 0.0, 1.0);
/// Cyan.
pub const CYAN: Vec3 = Vec3::new(0.0, 1.0, 1.0);
/// Warm gold, slightly darkened.
pub const GOLD: Vec3 = Vec3::new(238.0 / 255.0, 201.0 / 255.0, 0.0);
/// Dark neutral grey.
pub const GREY: Vec3 = Vec3::new(79.0 / 255.0, 79.0 / 255.0, 79.0 / 255.0);
/// Orange-red, used for selection highlighting.
pub const ORANGERED: Vec3 = Vec3::new(1.0, 69.0 / 255.0, 0.0);

/// Sphere display parameters for one element class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementStyle {
    /// Sphere radius in world units.
    pub radius: f32,
    /// Longitude subdivision count.
    pub sector_count: u32,
    /// Latitude subdivision count.
    pub stack_count: u32,
    /// Sphere color.
    pub color: Vec3,
}

const HYDROGEN: ElementStyle = ElementStyle {
    radius: 0.1,
    sector_count: 4,
    stack_count: 2,
    color: GREEN,
};

const CARBON: ElementStyle = ElementStyle {
    radius: 0.2,
    sector_count: 8,
    stack_count: 4,
    color: RED,
};

const NITROGEN: ElementStyle = ElementStyle {
    radius: 0.24,
    sector_count: 8,
    stack_count: 4,
    color: GOLD,
};

const OXYGEN: ElementStyle = ElementStyle {
    radius: 0.28,
    sector_count: 8,
    stack_count: 4,
    color: BLUE,
};

const FLUORINE: ElementStyle = ElementStyle {
    radius: 0.32,
    sector_count: 8,
    stack_count: 4,
    color: CYAN,
};

const BIG_ATOM: ElementStyle = ElementStyle {
    radius: 0.36,
    sector_count: 16,
    stack_count: 8,
    color: GREY,
};

/// Look up the display style for an atomic number.
///
/// Unlisted light elements (2-5) fall back to the hydrogen style, matching
/// the original table's "everything small and unknown" bucket; atomic
/// numbers above 9 all use the big-atom style.
#[must_use]
pub const fn style_for(atomic_number: u8) -> ElementStyle {
    match atomic_number {
        6 => CARBON,
        7 => NITROGEN,
        8 => OXYGEN,
        9 => FLUORINE,
        n if n > 9 => BIG_ATOM,
        _ => HYDROGEN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_organic_elements_have_distinct_styles() {
        let c = style_for(6);
        let n = style_for(7);
        let o = style_for(8);
        assert_eq!(c.radius, 0.2);
        assert_eq!(n.radius, 0.24);
        assert_eq!(o.radius, 0.28);
        assert_ne!(c.color, n.color);
        assert_ne!(n.color, o.color);
    }

    #[test]
    fn heavy_elements_share_the_big_atom_style() {
        assert_eq!(style_for(15), style_for(53));
        assert_eq!(style_for(15).sector_count, 16);
    }

    #[test]
    fn hydrogen_is_the_fallback() {
        assert_eq!(style_for(1), style_for(2));
        assert_eq!(style_for(1).radius, 0.1);
    }
}
