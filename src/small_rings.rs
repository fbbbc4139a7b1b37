use petgraph::graph::NodeIndex;

use crate::mol::Mol;

/// Enumerates every simple cycle of `mol` with length 3..=`max_size`.
///
/// Each cycle is reported exactly once, anchored at its lowest-indexed atom
/// and oriented so the second atom is the smaller of the anchor's two ring
/// neighbors. The result is sorted ascending by size, then
/// lexicographically, which is the priority order
/// [`verify_sssr`](crate::sssr::verify_sssr) expects.
///
/// The search is a depth-first path extension from each anchor that only
/// visits atoms indexed above the anchor, so cost is bounded by `max_size`
/// and the local branching factor. Callers run it on ring systems, never on
/// whole molecules.
pub fn small_rings<A, B>(mol: &Mol<A, B>, max_size: usize) -> Vec<Vec<NodeIndex>> {
    let mut rings = Vec::new();
    if max_size < 3 {
        return rings;
    }

    let mut on_path = vec![false; mol.atom_count()];
    let mut path = Vec::with_capacity(max_size);

    for anchor in mol.atoms() {
        path.push(anchor);
        on_path[anchor.index()] = true;
        extend_path(mol, anchor, anchor, max_size, &mut path, &mut on_path, &mut rings);
        on_path[anchor.index()] = false;
        path.pop();
    }

    rings.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    rings
}

fn extend_path<A, B>(
    mol: &Mol<A, B>,
    anchor: NodeIndex,
    last: NodeIndex,
    max_size: usize,
    path: &mut Vec<NodeIndex>,
    on_path: &mut [bool],
    rings: &mut Vec<Vec<NodeIndex>>,
) {
    for neighbor in mol.neighbors(last) {
        if neighbor == anchor {
            // closing edge; keep one of the two traversal directions
            if path.len() >= 3 && path[1] < path[path.len() - 1] {
                rings.push(path.clone());
            }
            continue;
        }
        if neighbor.index() < anchor.index() || on_path[neighbor.index()] {
            continue;
        }
        if path.len() == max_size {
            continue;
        }
        path.push(neighbor);
        on_path[neighbor.index()] = true;
        extend_path(mol, anchor, neighbor, max_size, path, on_path, rings);
        on_path[neighbor.index()] = false;
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{cycle_mol, mol_from_edges};

    #[test]
    fn chain_has_no_rings() {
        let mol = mol_from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        assert!(small_rings(&mol, 6).is_empty());
    }

    #[test]
    fn single_hexagon() {
        let mol = cycle_mol(6);
        let rings = small_rings(&mol, 6);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 6);
    }

    #[test]
    fn cycle_above_bound_not_reported() {
        let mol = cycle_mol(7);
        assert!(small_rings(&mol, 6).is_empty());
        assert_eq!(small_rings(&mol, 7).len(), 1);
    }

    #[test]
    fn fused_hexagons_report_only_the_faces() {
        // naphthalene skeleton: the 10-cycle perimeter exceeds the bound
        let mol = mol_from_edges(
            10,
            &[
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 4),
                (4, 9),
                (9, 0),
                (4, 5),
                (5, 6),
                (6, 7),
                (7, 8),
                (8, 9),
            ],
        );
        let rings = small_rings(&mol, 6);
        assert_eq!(rings.len(), 2);
        assert!(rings.iter().all(|r| r.len() == 6));
    }

    #[test]
    fn k4_has_four_triangles_and_three_squares() {
        let mol = mol_from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        let rings = small_rings(&mol, 6);
        assert_eq!(rings.len(), 7);
        assert_eq!(rings.iter().filter(|r| r.len() == 3).count(), 4);
        assert_eq!(rings.iter().filter(|r| r.len() == 4).count(), 3);
    }

    #[test]
    fn output_sorted_by_size_then_lexicographic() {
        // spiro triangle + square sharing atom 0
        let mol = mol_from_edges(
            6,
            &[(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 5), (5, 0)],
        );
        let rings = small_rings(&mol, 6);
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[0].len(), 3);
        assert_eq!(rings[1].len(), 4);
        assert_eq!(rings[0][0], NodeIndex::new(0));
    }

    #[test]
    fn each_cycle_reported_once() {
        let mol = cycle_mol(5);
        let rings = small_rings(&mol, 6);
        assert_eq!(rings.len(), 1);
        assert_eq!(
            rings[0],
            vec![
                NodeIndex::new(0),
                NodeIndex::new(1),
                NodeIndex::new(2),
                NodeIndex::new(3),
                NodeIndex::new(4),
            ]
        );
    }
}
