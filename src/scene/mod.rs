//! Scene graph: owned renderable objects plus picking support state.
//!
//! A scene is rebuilt wholesale from a molecule; there is no incremental
//! editing. Rebuild is all-or-nothing: the previous object list (and with
//! it every buffer the external renderer may still reference) is dropped
//! before new objects are constructed, so a reload never leaks stale
//! geometry.

mod builder;
pub mod object;

pub use object::SceneObject;

use glam::Vec3;

use crate::error::MolvisError;
use crate::molecule::Molecule;
use crate::options::ViewerOptions;

/// Lightweight sphere handle snapshot consumed by the picker.
///
/// Copied from the sphere list at the last rebuild so picking never has to
/// walk full mesh objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomHandle {
    /// Atom identifier (index into the molecule's atom list).
    pub id: u32,
    /// Sphere center in world space.
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
}

/// The renderable scene built from one molecule.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    atoms: Vec<AtomHandle>,
    center: Vec3,
    selected: Option<Selection>,
}

/// Current selection: which atom, and the color to restore on deselect.
#[derive(Debug, Clone, Copy)]
struct Selection {
    atom_id: u32,
    previous_color: Vec3,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from a molecule.
    ///
    /// An empty molecule yields an empty scene; the only failure is
    /// structurally invalid bond data.
    ///
    /// # Errors
    ///
    /// Returns [`MolvisError::MoleculeData`] if a bond references an atom
    /// index outside the molecule's atom list.
    pub fn from_molecule(
        molecule: &Molecule,
        options: &ViewerOptions,
    ) -> Result<Self, MolvisError> {
        let mut scene = Self::new();
        scene.rebuild(molecule, options)?;
        Ok(scene)
    }

    /// Replace the scene contents with geometry for `molecule`.
    ///
    /// The previous objects are released before construction starts. On
    /// error the scene is left empty rather than half-built.
    ///
    /// # Errors
    ///
    /// Returns [`MolvisError::MoleculeData`] if a bond references an atom
    /// index outside the molecule's atom list.
    pub fn rebuild(
        &mut self,
        molecule: &Molecule,
        options: &ViewerOptions,
    ) -> Result<(), MolvisError> {
        self.clear();

        let (objects, atoms) = builder::SceneBuilder::new(
            &options.geometry,
            options.colors.bond_color,
        )
        .build(molecule)?;

        self.objects = objects;
        self.atoms = atoms;
        self.center = molecule.centroid();
        log::info!(
            "scene rebuilt: {} objects, center {:?}",
            self.objects.len(),
            self.center
        );
        Ok(())
    }

    /// Drop all objects, the atom snapshot, and the selection.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.atoms.clear();
        self.center = Vec3::ZERO;
        self.selected = None;
    }

    /// Renderable objects in draw order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Atom snapshot for the picker.
    #[must_use]
    pub fn atoms(&self) -> &[AtomHandle] {
        &self.atoms
    }

    /// Centroid of all atom positions (orbit focus point).
    #[must_use]
    pub const fn center(&self) -> Vec3 {
        self.center
    }

    /// Currently selected atom id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<u32> {
        self.selected.map(|s| s.atom_id)
    }

    /// Select an atom, recoloring its sphere with `highlight` and
    /// restoring the previous selection's color. `None` clears the
    /// selection.
    pub fn set_selection(&mut self, atom_id: Option<u32>, highlight: Vec3) {
        if let Some(prev) = self.selected.take() {
            if let Some(obj) = self.sphere_mut(prev.atom_id) {
                obj.set_color(prev.previous_color);
            }
        }

        let Some(id) = atom_id else {
            return;
        };
        let Some(obj) = self.sphere_mut(id) else {
            log::warn!("selection of unknown atom {id} ignored");
            return;
        };
        let previous_color = obj.color();
        obj.set_color(highlight);
        self.selected = Some(Selection {
            atom_id: id,
            previous_color,
        });
    }

    /// Mutable handle to the sphere object for an atom id.
    fn sphere_mut(&mut self, atom_id: u32) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| {
            o.as_sphere().is_some_and(|s| s.id() == atom_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecule::{Atom, Bond, BondOrder};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn water() -> Molecule {
        Molecule {
            atoms: vec![
                Atom {
                    position: Vec3::new(0.0, 0.0, 0.0),
                    atomic_number: 8,
                },
                Atom {
                    position: Vec3::new(0.96, 0.0, 0.0),
                    atomic_number: 1,
                },
                Atom {
                    position: Vec3::new(-0.24, 0.93, 0.0),
                    atomic_number: 1,
                },
            ],
            bonds: vec![
                Bond {
                    start: 0,
                    end: 1,
                    order: BondOrder::Single,
                },
                Bond {
                    start: 0,
                    end: 2,
                    order: BondOrder::Single,
                },
            ],
        }
    }

    #[test]
    fn empty_molecule_yields_empty_scene() {
        let scene = Scene::from_molecule(
            &Molecule::default(),
            &ViewerOptions::default(),
        )
        .unwrap();
        assert!(scene.objects().is_empty());
        assert!(scene.atoms().is_empty());
    }

    #[test]
    fn rebuild_replaces_previous_contents() {
        init_logging();
        let options = ViewerOptions::default();
        let mut scene = Scene::from_molecule(&water(), &options).unwrap();
        assert_eq!(scene.atoms().len(), 3);

        let single = Molecule {
            atoms: vec![Atom {
                position: Vec3::ZERO,
                atomic_number: 6,
            }],
            bonds: vec![],
        };
        scene.rebuild(&single, &options).unwrap();
        assert_eq!(scene.atoms().len(), 1);
        assert_eq!(scene.objects().len(), 1);
    }

    #[test]
    fn failed_rebuild_leaves_scene_empty() {
        let options = ViewerOptions::default();
        let mut scene = Scene::from_molecule(&water(), &options).unwrap();
        let bad = Molecule {
            atoms: vec![],
            bonds: vec![Bond {
                start: 0,
                end: 1,
                order: BondOrder::Single,
            }],
        };
        assert!(scene.rebuild(&bad, &options).is_err());
        assert!(scene.objects().is_empty());
    }

    #[test]
    fn selection_recolors_and_restores() {
        let options = ViewerOptions::default();
        let mut scene = Scene::from_molecule(&water(), &options).unwrap();
        let oxygen_color = scene.objects()[0].color();
        let highlight = options.colors.highlight;

        scene.set_selection(Some(0), highlight);
        assert_eq!(scene.selected(), Some(0));
        assert_eq!(scene.objects()[0].color(), highlight);

        scene.set_selection(Some(1), highlight);
        assert_eq!(scene.objects()[0].color(), oxygen_color);
        assert_eq!(scene.objects()[1].color(), highlight);

        scene.set_selection(None, highlight);
        assert_eq!(scene.selected(), None);
        assert_ne!(scene.objects()[1].color(), highlight);
    }

    #[test]
    fn scene_center_is_atom_centroid() {
        let scene =
            Scene::from_molecule(&water(), &ViewerOptions::default()).unwrap();
        assert!((scene.center() - water().centroid()).length() < 1e-6);
    }
}
