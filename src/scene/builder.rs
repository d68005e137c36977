//! Molecule-to-scene construction.
//!
//! One sphere per atom (style from the element table), one or two
//! cylinders per bond. Double bonds become two thinner parallel cylinders
//! offset perpendicular to the bond axis; aromatic bonds alternate
//! single/double along the ring via a transient parity map.

use glam::Vec3;
use rustc_hash::FxHashMap;

use super::object::SceneObject;
use super::AtomHandle;
use crate::elements;
use crate::error::MolvisError;
use crate::geometry::{Cylinder, CylinderParams, Sphere};
use crate::molecule::{Bond, BondOrder, Molecule};
use crate::options::GeometryOptions;

/// Alternation state for one atom during the aromatic-resolution pass.
/// Absence from the map is the third state: unseen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BondParity {
    /// Atom's last aromatic bond was rendered single.
    Single,
    /// Atom participates in a bond rendered double.
    Double,
}

/// Scratch state for one build pass. The parity map lives only as long as
/// the bond traversal; it is never persisted on the scene.
pub(super) struct SceneBuilder<'a> {
    geometry: &'a GeometryOptions,
    bond_color: Vec3,
    objects: Vec<SceneObject>,
    atoms: Vec<AtomHandle>,
    parity: FxHashMap<usize, BondParity>,
}

impl<'a> SceneBuilder<'a> {
    pub(super) fn new(geometry: &'a GeometryOptions, bond_color: Vec3) -> Self {
        Self {
            geometry,
            bond_color,
            objects: Vec::new(),
            atoms: Vec::new(),
            parity: FxHashMap::default(),
        }
    }

    /// Build all scene objects for `molecule`.
    ///
    /// Returns the object list and the atom snapshot consumed by the
    /// picker. Fails only on structurally invalid data (a bond endpoint
    /// outside the atom list).
    pub(super) fn build(
        mut self,
        molecule: &Molecule,
    ) -> Result<(Vec<SceneObject>, Vec<AtomHandle>), MolvisError> {
        self.objects.reserve(molecule.atoms.len() + molecule.bonds.len());

        for (index, atom) in molecule.atoms.iter().enumerate() {
            let style = elements::style_for(atom.atomic_number);
            let id = index as u32;
            let sphere = Sphere::new(
                id,
                style.radius,
                self.geometry
                    .sector_count_override
                    .unwrap_or(style.sector_count),
                self.geometry
                    .stack_count_override
                    .unwrap_or(style.stack_count),
                atom.position,
                style.color,
                self.geometry.smooth,
            );
            self.atoms.push(AtomHandle {
                id,
                center: atom.position,
                radius: style.radius,
            });
            self.objects.push(SceneObject::Sphere(sphere));
        }

        for bond in &molecule.bonds {
            let (start, end) = self.bond_endpoints(molecule, bond)?;
            match bond.order {
                BondOrder::Single | BondOrder::Triple => {
                    self.push_single(start, end);
                }
                BondOrder::Double => self.push_double(start, end),
                BondOrder::Aromatic => {
                    if self.resolve_aromatic(bond) {
                        self.push_double(start, end);
                    } else {
                        self.push_single(start, end);
                    }
                }
            }
        }

        log::debug!(
            "built {} objects from {} atoms / {} bonds",
            self.objects.len(),
            molecule.atoms.len(),
            molecule.bonds.len()
        );
        Ok((self.objects, self.atoms))
    }

    /// Validate a bond's endpoints and return their positions.
    fn bond_endpoints(
        &self,
        molecule: &Molecule,
        bond: &Bond,
    ) -> Result<(Vec3, Vec3), MolvisError> {
        let atom = |i: usize| {
            molecule.atoms.get(i).map(|a| a.position).ok_or_else(|| {
                MolvisError::MoleculeData(format!(
                    "bond references atom {i} but molecule has {} atoms",
                    molecule.atoms.len()
                ))
            })
        };
        Ok((atom(bond.start)?, atom(bond.end)?))
    }

    /// Decide whether this aromatic bond renders as double.
    ///
    /// A bond renders double only when neither endpoint already carries a
    /// double assignment; otherwise it renders single. Walked in input
    /// order this alternates around a ring.
    fn resolve_aromatic(&mut self, bond: &Bond) -> bool {
        let taken = |p: Option<&BondParity>| p == Some(&BondParity::Double);
        let render_double = !taken(self.parity.get(&bond.start))
            && !taken(self.parity.get(&bond.end));

        let mark = if render_double {
            BondParity::Double
        } else {
            BondParity::Single
        };
        for key in [bond.start, bond.end] {
            match self.parity.entry(key) {
                std::collections::hash_map::Entry::Occupied(mut e) => {
                    if mark == BondParity::Double {
                        *e.get_mut() = BondParity::Double;
                    }
                }
                std::collections::hash_map::Entry::Vacant(e) => {
                    let _ = e.insert(mark);
                }
            }
        }
        render_double
    }

    /// One cylinder spanning the bond.
    fn push_single(&mut self, start: Vec3, end: Vec3) {
        let params = CylinderParams {
            base_radius: self.geometry.bond_radius,
            top_radius: self.geometry.bond_radius,
            sector_count: self.geometry.bond_sector_count,
            stack_count: self.geometry.bond_stack_count,
            smooth: self.geometry.smooth,
        };
        self.objects.push(SceneObject::Cylinder(Cylinder::between(
            start,
            end,
            &params,
            self.bond_color,
        )));
    }

    /// Two thinner cylinders offset perpendicular to the bond axis.
    fn push_double(&mut self, start: Vec3, end: Vec3) {
        let radius =
            self.geometry.bond_radius * self.geometry.double_bond_radius_scale;
        let params = CylinderParams {
            base_radius: radius,
            top_radius: radius,
            sector_count: self.geometry.bond_sector_count,
            stack_count: self.geometry.bond_stack_count,
            smooth: self.geometry.smooth,
        };
        let offset = find_perpendicular(end - start)
            * self.geometry.double_bond_offset;
        for sign in [1.0, -1.0] {
            self.objects.push(SceneObject::Cylinder(Cylinder::between(
                start + offset * sign,
                end + offset * sign,
                &params,
                self.bond_color,
            )));
        }
    }
}

/// Find any vector perpendicular to the given vector.
fn find_perpendicular(v: Vec3) -> Vec3 {
    if v.length_squared() < 1e-8 {
        return Vec3::X;
    }
    let candidate = if v.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    v.cross(candidate).normalize()
}
