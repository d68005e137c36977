//! Parsed molecule data consumed by the scene builder.
//!
//! File-format parsing is an external collaborator; whatever produces these
//! types (an SDF/MOL2/PDB parser, a toolkit binding, a test fixture) hands
//! them over fully resolved. The scene builder only ever reads them.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A single atom: world position plus atomic number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Atom center in world coordinates.
    pub position: Vec3,
    /// Atomic number (1 = H, 6 = C, 7 = N, 8 = O, ...).
    pub atomic_number: u8,
}

/// Bond order as reported by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BondOrder {
    /// Single bond: one cylinder.
    Single,
    /// Double bond: two offset parallel cylinders.
    Double,
    /// Triple bond: rendered as a single cylinder (center line only).
    Triple,
    /// Aromatic bond: alternates single/double along the ring during
    /// scene construction.
    Aromatic,
}

/// A bond between two atoms, referencing indices into the atom list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bond {
    /// Index of the first atom.
    pub start: usize,
    /// Index of the second atom.
    pub end: usize,
    /// Bond order.
    pub order: BondOrder,
}

/// A parsed molecule: ordered atoms and the bonds connecting them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    /// Ordered atom list; bond endpoints index into it.
    pub atoms: Vec<Atom>,
    /// Bond list.
    pub bonds: Vec<Bond>,
}

impl Molecule {
    /// Centroid of all atom positions, or the origin for an empty molecule.
    #[must_use]
    pub fn centroid(&self) -> Vec3 {
        if self.atoms.is_empty() {
            return Vec3::ZERO;
        }
        let sum: Vec3 = self.atoms.iter().map(|a| a.position).sum();
        sum / self.atoms.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_of_empty_molecule_is_origin() {
        assert_eq!(Molecule::default().centroid(), Vec3::ZERO);
    }

    #[test]
    fn centroid_averages_atom_positions() {
        let mol = Molecule {
            atoms: vec![
                Atom {
                    position: Vec3::new(1.0, 0.0, 0.0),
                    atomic_number: 6,
                },
                Atom {
                    position: Vec3::new(3.0, 2.0, -4.0),
                    atomic_number: 8,
                },
            ],
            bonds: vec![],
        };
        assert_eq!(mol.centroid(), Vec3::new(2.0, 1.0, -2.0));
    }
}
