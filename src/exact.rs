//! Exhaustive SSSR solver, used when the bounded enumerator cannot span a
//! ring system's cycle space (macrocycles, dense cages).
//!
//! Candidate rings are generated Horton-style: for every root atom, build a
//! BFS shortest-path tree; for every bond (u, v), the two tree paths
//! root→u and root→v plus the bond form a candidate whenever the paths
//! share no atom besides the root. The SSSR is then the smallest-first
//! greedy selection of candidates that are linearly independent over GF(2)
//! in bond-incidence space.

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;

use crate::mol::Mol;

/// Computes a valid SSSR of `mol` for arbitrary ring sizes.
///
/// Returns `nsssr = bonds − atoms + fragments` rings for any structurally
/// consistent graph. Quadratic-ish in the size of `mol`, so callers reach
/// for it per ring system and only after the bounded path has failed.
pub fn exact_sssr<A, B>(mol: &Mol<A, B>) -> Vec<Vec<NodeIndex>> {
    let nsssr = (mol.bond_count() + mol.fragment_count()).saturating_sub(mol.atom_count());
    if nsssr == 0 {
        return Vec::new();
    }
    let candidates = cycle_candidates(mol);
    select_independent(mol, &candidates, nsssr)
}

struct BfsTree {
    dist: Vec<u32>,
    pred: Vec<NodeIndex>,
}

fn bfs_tree<A, B>(mol: &Mol<A, B>, root: NodeIndex) -> BfsTree {
    let n = mol.atom_count();
    let mut dist = vec![u32::MAX; n];
    // pred[x] == x marks a walk endpoint, the root in particular
    let mut pred: Vec<NodeIndex> = mol.atoms().collect();
    dist[root.index()] = 0;
    let mut queue = VecDeque::from([root]);
    while let Some(current) = queue.pop_front() {
        for neighbor in mol.neighbors(current) {
            if dist[neighbor.index()] == u32::MAX {
                dist[neighbor.index()] = dist[current.index()] + 1;
                pred[neighbor.index()] = current;
                queue.push_back(neighbor);
            }
        }
    }
    BfsTree { dist, pred }
}

/// Tree path root..=node, root first.
fn path_from_root(tree: &BfsTree, node: NodeIndex) -> Vec<NodeIndex> {
    let mut path = vec![node];
    let mut current = node;
    while tree.pred[current.index()] != current {
        current = tree.pred[current.index()];
        path.push(current);
    }
    path.reverse();
    path
}

fn shares_internal_atom(path_u: &[NodeIndex], path_v: &[NodeIndex]) -> bool {
    path_u[1..].iter().any(|atom| path_v[1..].contains(atom))
}

fn cycle_candidates<A, B>(mol: &Mol<A, B>) -> Vec<Vec<NodeIndex>> {
    let mut candidates = Vec::new();

    for root in mol.atoms() {
        let tree = bfs_tree(mol, root);
        for bond in mol.bonds() {
            let (u, v) = match mol.bond_endpoints(bond) {
                Some(pair) => pair,
                None => continue,
            };
            let (du, dv) = (tree.dist[u.index()], tree.dist[v.index()]);
            if du == u32::MAX || dv == u32::MAX {
                continue;
            }
            if du + dv + 1 < 3 {
                continue;
            }
            let path_u = path_from_root(&tree, u);
            let path_v = path_from_root(&tree, v);
            if shares_internal_atom(&path_u, &path_v) {
                continue;
            }
            let mut ring = path_u;
            ring.extend(path_v[1..].iter().rev().copied());
            candidates.push(normalize_cycle(&ring));
        }
    }

    candidates.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    candidates.dedup();
    candidates
}

/// Rotates the cycle so its lowest atom leads and fixes the traversal
/// direction, so identical cycles from different roots dedup textually.
fn normalize_cycle(ring: &[NodeIndex]) -> Vec<NodeIndex> {
    let len = ring.len();
    let min_pos = ring
        .iter()
        .enumerate()
        .min_by_key(|&(_, atom)| atom)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let mut out: Vec<NodeIndex> = (0..len).map(|i| ring[(min_pos + i) % len]).collect();
    if len > 2 && out[1] > out[len - 1] {
        out[1..].reverse();
    }
    out
}

/// Greedy GF(2) independence selection over bond-incidence bit vectors.
fn select_independent<A, B>(
    mol: &Mol<A, B>,
    candidates: &[Vec<NodeIndex>],
    rank: usize,
) -> Vec<Vec<NodeIndex>> {
    let words = mol.bond_count().div_ceil(64);
    // reduced rows paired with their pivot bit
    let mut basis: Vec<(usize, Vec<u64>)> = Vec::with_capacity(rank);
    let mut chosen = Vec::with_capacity(rank);

    for ring in candidates {
        if chosen.len() == rank {
            break;
        }
        let mut bits = match bond_bits(mol, ring, words) {
            Some(bits) => bits,
            None => continue,
        };
        for (pivot, row) in &basis {
            if bits[pivot / 64] >> (pivot % 64) & 1 == 1 {
                for (word, other) in bits.iter_mut().zip(row) {
                    *word ^= other;
                }
            }
        }
        if let Some(pivot) = first_set_bit(&bits) {
            basis.push((pivot, bits));
            chosen.push(ring.clone());
        }
    }

    chosen
}

fn bond_bits<A, B>(mol: &Mol<A, B>, ring: &[NodeIndex], words: usize) -> Option<Vec<u64>> {
    let mut bits = vec![0u64; words];
    let len = ring.len();
    for i in 0..len {
        let bond = mol.bond_between(ring[i], ring[(i + 1) % len])?;
        bits[bond.index() / 64] |= 1u64 << (bond.index() % 64);
    }
    Some(bits)
}

fn first_set_bit(bits: &[u64]) -> Option<usize> {
    bits.iter()
        .enumerate()
        .find(|(_, &word)| word != 0)
        .map(|(i, &word)| i * 64 + word.trailing_zeros() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{cycle_mol, mol_from_edges};

    #[test]
    fn acyclic_yields_nothing() {
        let mol = mol_from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        assert!(exact_sssr(&mol).is_empty());
    }

    #[test]
    fn macrocycle_found_whole() {
        let mol = cycle_mol(10);
        let sssr = exact_sssr(&mol);
        assert_eq!(sssr.len(), 1);
        assert_eq!(sssr[0].len(), 10);
    }

    #[test]
    fn fused_hexagons_give_both_faces() {
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
        let sssr = exact_sssr(&mol);
        assert_eq!(sssr.len(), 2);
        assert!(sssr.iter().all(|r| r.len() == 6));
    }

    #[test]
    fn k4_gives_three_triangles() {
        let mol = mol_from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        let sssr = exact_sssr(&mol);
        assert_eq!(sssr.len(), 3);
        assert!(sssr.iter().all(|r| r.len() == 3));
    }

    #[test]
    fn cube_skeleton_gives_five_squares() {
        // cubane carbon skeleton: 8 atoms, 12 bonds, nsssr 5
        let mol = mol_from_edges(
            8,
            &[
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 0),
                (4, 5),
                (5, 6),
                (6, 7),
                (7, 4),
                (0, 4),
                (1, 5),
                (2, 6),
                (3, 7),
            ],
        );
        let sssr = exact_sssr(&mol);
        assert_eq!(sssr.len(), 5);
        assert!(sssr.iter().all(|r| r.len() == 4));
    }

    #[test]
    fn theta_graph_takes_the_two_smallest_cycles() {
        // atoms 0 and 1 joined by three paths of interior length 1, 2, 3:
        // cycles of sizes 5, 6 and 7, of which the SSSR is {5, 6}
        let mol = mol_from_edges(
            8,
            &[
                (0, 2),
                (2, 1),
                (0, 3),
                (3, 4),
                (4, 1),
                (0, 5),
                (5, 6),
                (6, 7),
                (7, 1),
            ],
        );
        let mut sizes: Vec<usize> = exact_sssr(&mol).iter().map(|r| r.len()).collect();
        sizes.sort();
        assert_eq!(sizes, vec![5, 6]);
    }

    #[test]
    fn disconnected_fragments_each_contribute() {
        // triangle plus separate square
        let mol = mol_from_edges(
            7,
            &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 6), (6, 3)],
        );
        let mut sizes: Vec<usize> = exact_sssr(&mol).iter().map(|r| r.len()).collect();
        sizes.sort();
        assert_eq!(sizes, vec![3, 4]);
    }
}
