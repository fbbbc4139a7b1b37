//! Candidate acceptance: selecting a linearly-independent SSSR from an
//! ordered superset of candidate rings.
//!
//! The selection rule is the degree bound from cycle-space theory: an atom
//! of degree `d` can belong to at most `d − 1` members of an independent
//! ring set. Greedily accepting candidates smallest-first while each keeps
//! at least one atom with spare capacity yields a valid SSSR whenever the
//! candidate list spans the cycle space. The rule is a heuristic in one
//! direction only: it can stall early (see the K4 tests below), which the
//! caller detects by count and resolves with the exhaustive solver.

use petgraph::graph::NodeIndex;

use crate::mol::Mol;

/// Selects up to `target` independent rings from `candidates`.
///
/// `candidates` are cyclic atom-index sequences over `mol`; their order is
/// the acceptance priority, so callers pass them sorted ascending by size.
/// Returns as soon as `target` rings are accepted. A shorter result means
/// the candidates did not span the cycle space and the caller must fall
/// back to an exhaustive search.
pub fn verify_sssr<A, B>(
    candidates: &[Vec<NodeIndex>],
    target: usize,
    mol: &Mol<A, B>,
) -> Vec<Vec<NodeIndex>> {
    let valences: Vec<usize> = mol.atoms().map(|atom| mol.degree(atom)).collect();
    // Persists across the whole pass, accumulating counts from rejected
    // candidates too.
    let mut ring_count = vec![0usize; mol.atom_count()];
    let mut accepted: Vec<Vec<NodeIndex>> = Vec::with_capacity(target);

    for candidate in candidates {
        if !is_candidate_in_set(candidate, &accepted, &valences, &mut ring_count) {
            accepted.push(candidate.clone());
            if accepted.len() == target {
                break;
            }
        }
    }

    accepted
}

/// Returns `true` if `candidate` is redundant with respect to `accepted`.
///
/// Two checks, in order, per accepted ring: subsumption (an accepted ring
/// no larger than the candidate whose atoms are all contained in it makes
/// the candidate redundant without any counting), then usage counting
/// (every candidate atom shared with an accepted ring bumps that atom's
/// counter). After counting, the candidate is new if at least one of its
/// atoms still has `ring_count < valence − 1`; acceptance then bumps every
/// candidate atom's counter.
///
/// Counters are indexed by atom identity throughout.
fn is_candidate_in_set(
    candidate: &[NodeIndex],
    accepted: &[Vec<NodeIndex>],
    valences: &[usize],
    ring_count: &mut [usize],
) -> bool {
    for ring in accepted {
        if ring.len() <= candidate.len() && ring.iter().all(|atom| candidate.contains(atom)) {
            return true;
        }
        for atom in candidate {
            if ring.contains(atom) {
                ring_count[atom.index()] += 1;
            }
        }
    }

    let is_new = candidate
        .iter()
        .any(|atom| ring_count[atom.index()] < valences[atom.index()].saturating_sub(1));

    if is_new {
        for atom in candidate {
            ring_count[atom.index()] += 1;
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::mol_from_edges;

    fn cycles(raw: &[&[usize]]) -> Vec<Vec<NodeIndex>> {
        raw.iter()
            .map(|c| c.iter().map(|&i| NodeIndex::new(i)).collect())
            .collect()
    }

    #[test]
    fn first_candidate_always_accepted() {
        let mol = mol_from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        let candidates = cycles(&[&[0, 1, 2]]);
        assert_eq!(verify_sssr(&candidates, 1, &mol), candidates);
    }

    #[test]
    fn fused_triangles_accept_both_faces() {
        // triangles 0-1-2 and 1-2-3 sharing the 1-2 bond
        let mol = mol_from_edges(4, &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)]);
        let candidates = cycles(&[&[0, 1, 2], &[1, 2, 3], &[0, 1, 3, 2]]);
        let sssr = verify_sssr(&candidates, 2, &mol);
        assert_eq!(sssr, cycles(&[&[0, 1, 2], &[1, 2, 3]]));
    }

    #[test]
    fn envelope_ring_subsumed_by_accepted_face() {
        let mol = mol_from_edges(4, &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)]);
        // only the 4-ring follows the accepted triangle; it contains all of
        // the triangle's atoms, so it is rejected without counting
        let candidates = cycles(&[&[0, 1, 2], &[0, 1, 3, 2]]);
        let sssr = verify_sssr(&candidates, 2, &mol);
        assert_eq!(sssr, cycles(&[&[0, 1, 2]]));
    }

    #[test]
    fn spiro_triangles_accept_both() {
        // two triangles sharing only atom 2
        let mol = mol_from_edges(
            5,
            &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)],
        );
        let candidates = cycles(&[&[0, 1, 2], &[2, 3, 4]]);
        let sssr = verify_sssr(&candidates, 2, &mol);
        assert_eq!(sssr.len(), 2);
    }

    #[test]
    fn returns_short_when_candidates_do_not_span() {
        let mol = mol_from_edges(4, &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)]);
        let candidates = cycles(&[&[0, 1, 2]]);
        let sssr = verify_sssr(&candidates, 2, &mol);
        assert_eq!(sssr.len(), 1);
    }

    // K4 (complete graph on 4 atoms, nsssr 3) is the discriminator between
    // indexing the usage counters by atom identity and indexing them by the
    // atom's position inside the candidate sequence. Identity counting
    // accepts two triangle faces and then finds every atom of the remaining
    // faces at capacity (degree 3 allows 2 memberships each, and counting
    // passes over rejected candidates keep accumulating), so the pass
    // stalls at 2 and hands the system to the exhaustive solver. Positional
    // counting mis-lands increments on low-numbered atoms and would accept
    // a third face here.
    #[test]
    fn k4_capacity_heuristic_stalls_at_two() {
        let mol = mol_from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        let candidates = cycles(&[&[0, 1, 2], &[0, 1, 3], &[0, 2, 3], &[1, 2, 3]]);
        let sssr = verify_sssr(&candidates, 3, &mol);
        assert_eq!(sssr, cycles(&[&[0, 1, 2], &[0, 1, 3]]));
    }

    #[test]
    fn k4_rotated_candidates_stall_identically() {
        // rotating the candidate sequences changes every atom's position
        // but not its identity; the outcome must not move
        let mol = mol_from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        let candidates = cycles(&[&[2, 0, 1], &[3, 0, 1], &[3, 0, 2], &[3, 1, 2]]);
        let sssr = verify_sssr(&candidates, 3, &mol);
        assert_eq!(sssr.len(), 2);
    }
}
