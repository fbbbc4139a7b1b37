use petgraph::graph::NodeIndex;

use crate::exact::exact_sssr;
use crate::mol::Mol;
use crate::ring::Ring;
use crate::ring_atoms::detect_ring_atoms;
use crate::ring_systems::{create_ring_systems, RingSystem};
use crate::small_rings::small_rings;
use crate::sssr::verify_sssr;

/// Largest ring size requested from the bounded enumerator. Rings up to
/// this size cover the overwhelming majority of chemistry; anything larger
/// goes through the exhaustive solver.
const SMALL_RING_LIMIT: usize = 6;

/// Internal-consistency failures of ring perception.
///
/// Neither variant is reachable from a structurally valid molecule: the
/// cyclomatic number of a consistent graph is always achievable, and every
/// perceived cycle's consecutive atoms are bonded by construction. Seeing
/// one means the input graph's bond table or fragment count is corrupt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerceptionError {
    /// Even the exhaustive solver produced fewer independent rings than
    /// the cyclomatic number requires.
    CycleSpaceDeficit { expected: usize, found: usize },
    /// A perceived ring lists two consecutive atoms with no bond between
    /// them in the molecule.
    MissingRingBond { a: NodeIndex, b: NodeIndex },
}

impl std::fmt::Display for PerceptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CycleSpaceDeficit { expected, found } => write!(
                f,
                "cycle space deficit: expected {} independent rings, found {}",
                expected, found
            ),
            Self::MissingRingBond { a, b } => write!(
                f,
                "no bond between consecutive ring atoms {} and {}",
                a.index(),
                b.index()
            ),
        }
    }
}

impl std::error::Error for PerceptionError {}

/// Computes the Smallest Set of Smallest Rings of `mol`.
///
/// Returns one [`Ring`] per dimension of the molecule's cycle space, i.e.
/// exactly `bonds − atoms + fragments` rings. Acyclic molecules take a
/// constant-work fast path straight to `Ok(vec![])`.
///
/// Rings are grouped by ring system in discovery order (ascending lowest
/// atom index) and, within a system, in candidate-acceptance order. The
/// computation is a deterministic pure function of the graph topology;
/// repeated calls on an unmodified molecule return the same rings.
pub fn find_rings<A, B>(mol: &Mol<A, B>) -> Result<Vec<Ring>, PerceptionError> {
    let nsssr = (mol.bond_count() + mol.fragment_count()).saturating_sub(mol.atom_count());
    if nsssr == 0 {
        return Ok(Vec::new());
    }

    let in_cycle = detect_ring_atoms(mol);
    let systems = create_ring_systems(mol, &in_cycle);

    let mut rings = Vec::with_capacity(nsssr);
    for system in &systems {
        for cycle in perceive_system(system)? {
            rings.push(Ring::from_atom_cycle(mol, &cycle)?);
        }
    }
    Ok(rings)
}

/// SSSR of one ring system, translated back to parent-molecule indices.
///
/// Bounded enumeration first; the exhaustive solver takes over when the
/// enumerator returns too few candidates outright or when acceptance
/// stalls short of the target (candidates present but not spanning).
fn perceive_system(system: &RingSystem) -> Result<Vec<Vec<NodeIndex>>, PerceptionError> {
    let target = system.nsssr();
    let candidates = small_rings(&system.mol, SMALL_RING_LIMIT);

    let mut sssr = if candidates.len() >= target {
        verify_sssr(&candidates, target, &system.mol)
    } else {
        Vec::new()
    };
    if sssr.len() < target {
        sssr = exact_sssr(&system.mol);
    }
    if sssr.len() < target {
        return Err(PerceptionError::CycleSpaceDeficit {
            expected: target,
            found: sssr.len(),
        });
    }

    Ok(sssr
        .into_iter()
        .map(|cycle| system.to_parent_cycle(&cycle))
        .collect())
}
