use std::collections::VecDeque;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::mol::Mol;

/// A maximal connected subgraph of cycle-participating atoms, copied out of
/// its parent molecule and densely re-indexed from zero.
///
/// Ring enumeration is exponential-ish in graph size, so it runs on these
/// small local copies instead of the whole molecule. `atom_map` and
/// `bond_map` translate local indices back: `atom_map[local.index()]` is the
/// parent atom the local atom was copied from, likewise `bond_map` for
/// bonds. The scratch graph carries unit payloads; perception never reads
/// chemistry.
pub struct RingSystem {
    pub mol: Mol<(), ()>,
    pub atom_map: Vec<NodeIndex>,
    pub bond_map: Vec<EdgeIndex>,
}

impl RingSystem {
    /// Target SSSR cardinality of this system. Ring systems are connected
    /// by construction, so the cyclomatic number is `bonds − atoms + 1`.
    pub fn nsssr(&self) -> usize {
        self.mol.bond_count() + 1 - self.mol.atom_count()
    }

    /// Translates a cycle over local indices into parent-molecule indices.
    pub fn to_parent_cycle(&self, cycle: &[NodeIndex]) -> Vec<NodeIndex> {
        cycle
            .iter()
            .map(|&local| self.atom_map[local.index()])
            .collect()
    }
}

/// Partitions the in-cycle atoms of `mol` into disjoint maximal connected
/// ring systems.
///
/// `in_cycle` is the table produced by
/// [`detect_ring_atoms`](crate::ring_atoms::detect_ring_atoms). Atoms are
/// scanned in index order; each unassigned in-cycle atom seeds a
/// breadth-first traversal restricted to in-cycle neighbors. Every
/// discovered atom and traversed bond is copied into the system's scratch
/// graph; a bond whose far atom is already placed becomes a closure bond
/// between the two existing copies.
///
/// The returned systems are pairwise disjoint and their mapped atom sets
/// union to exactly the in-cycle atoms of `mol`.
pub fn create_ring_systems<A, B>(mol: &Mol<A, B>, in_cycle: &[bool]) -> Vec<RingSystem> {
    let n = mol.atom_count();
    let mut assigned = vec![false; n];
    let mut visited_bonds = vec![false; mol.bond_count()];
    // parent atom index -> local copy, valid only for assigned atoms
    let mut local_of: Vec<NodeIndex> = vec![NodeIndex::end(); n];
    let mut systems = Vec::new();
    let mut queue = VecDeque::new();

    for start in mol.atoms() {
        if assigned[start.index()] || !in_cycle[start.index()] {
            continue;
        }

        let mut system = Mol::<(), ()>::new();
        let mut atom_map = Vec::new();
        let mut bond_map = Vec::new();

        assigned[start.index()] = true;
        local_of[start.index()] = system.add_atom(());
        atom_map.push(start);
        queue.push_back(start);

        while let Some(atom) = queue.pop_front() {
            for bond in mol.bonds_of(atom) {
                if visited_bonds[bond.index()] {
                    continue;
                }
                visited_bonds[bond.index()] = true;

                let neighbor = match mol.bond_other(bond, atom) {
                    Some(other) => other,
                    None => continue,
                };
                if !in_cycle[neighbor.index()] {
                    continue;
                }

                if assigned[neighbor.index()] {
                    // ring closure: both copies exist already
                    system.add_bond(local_of[atom.index()], local_of[neighbor.index()], ());
                    bond_map.push(bond);
                } else {
                    assigned[neighbor.index()] = true;
                    let local = system.add_atom(());
                    local_of[neighbor.index()] = local;
                    atom_map.push(neighbor);
                    system.add_bond(local_of[atom.index()], local, ());
                    bond_map.push(bond);
                    queue.push_back(neighbor);
                }
            }
        }

        systems.push(RingSystem {
            mol: system,
            atom_map,
            bond_map,
        });
    }

    systems
}
