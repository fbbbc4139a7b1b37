use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::finder::PerceptionError;
use crate::mol::Mol;

/// A materialized ring: an atom cycle plus the bonds connecting it.
///
/// `bonds()[i]` connects `atoms()[i]` and `atoms()[(i + 1) % len]`, so the
/// closing bond (last atom back to first) is included and
/// `atoms().len() == bonds().len()` always holds. Rings are immutable once
/// constructed and reference atoms/bonds of the molecule they were perceived
/// on; they own no graph state of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    atoms: Vec<NodeIndex>,
    bonds: Vec<EdgeIndex>,
}

impl Ring {
    /// Completes an atom cycle with its bonds by lookup in `mol`.
    ///
    /// `cycle` must list the atoms in traversal order; every consecutive
    /// pair, and the closing last-to-first pair, must be bonded in `mol`.
    /// A missing bond means the cycle did not come from `mol` at all and is
    /// reported as an internal-consistency failure.
    pub fn from_atom_cycle<A, B>(
        mol: &Mol<A, B>,
        cycle: &[NodeIndex],
    ) -> Result<Self, PerceptionError> {
        let len = cycle.len();
        let mut bonds = Vec::with_capacity(len);
        for i in 0..len {
            let a = cycle[i];
            let b = cycle[(i + 1) % len];
            match mol.bond_between(a, b) {
                Some(bond) => bonds.push(bond),
                None => return Err(PerceptionError::MissingRingBond { a, b }),
            }
        }
        Ok(Self {
            atoms: cycle.to_vec(),
            bonds,
        })
    }

    pub fn atoms(&self) -> &[NodeIndex] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[EdgeIndex] {
        &self.bonds
    }

    /// Ring size (atom count, which equals bond count).
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn contains_atom(&self, atom: NodeIndex) -> bool {
        self.atoms.contains(&atom)
    }

    pub fn contains_bond(&self, bond: EdgeIndex) -> bool {
        self.bonds.contains(&bond)
    }
}
