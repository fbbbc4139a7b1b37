use std::collections::VecDeque;

use petgraph::graph::NodeIndex;

use crate::mol::Mol;

/// Marks every atom that lies on some cycle of `mol`.
///
/// Returns a table indexed by `NodeIndex::index()`: `true` for atoms that
/// participate in at least one cycle, `false` for all others. Runs in
/// O(atoms + bonds).
///
/// A breadth-first spanning forest is grown over all connected components,
/// recording each atom's BFS depth and tree parent. Any bond reached whose
/// far atom was already visited is a closure (chord) of the spanning tree
/// and certifies a cycle; its fundamental cycle is marked by walking the
/// `parent` arrays upward from both endpoints until the walks meet. A
/// closure between atoms of equal depth is an odd cycle and both walks start
/// immediately; a closure between depths differing by one is an even cycle
/// and the deeper endpoint steps up first.
pub fn detect_ring_atoms<A, B>(mol: &Mol<A, B>) -> Vec<bool> {
    let n = mol.atom_count();
    let mut in_cycle = vec![false; n];
    if n == 0 {
        return in_cycle;
    }

    let mut visited = vec![false; n];
    let mut visited_bonds = vec![false; mol.bond_count()];
    let mut depth = vec![0u32; n];
    // parent[root] == root, so upward walks terminate without an Option.
    let mut parent: Vec<NodeIndex> = mol.atoms().collect();
    let mut queue = VecDeque::new();

    for root in mol.atoms() {
        if visited[root.index()] {
            continue;
        }
        visited[root.index()] = true;
        depth[root.index()] = 0;
        queue.push_back(root);

        while let Some(atom) = queue.pop_front() {
            for bond in mol.bonds_of(atom) {
                // skip the path we're coming from
                if visited_bonds[bond.index()] {
                    continue;
                }
                visited_bonds[bond.index()] = true;

                let neighbor = match mol.bond_other(bond, atom) {
                    Some(other) => other,
                    None => continue,
                };

                if visited[neighbor.index()] {
                    mark_fundamental_cycle(atom, neighbor, &parent, &depth, &mut in_cycle);
                } else {
                    visited[neighbor.index()] = true;
                    depth[neighbor.index()] = depth[atom.index()] + 1;
                    parent[neighbor.index()] = atom;
                    queue.push_back(neighbor);
                }
            }
        }
    }

    in_cycle
}

/// Marks the fundamental cycle of the closure bond `a`–`b`: both tree paths
/// up to the first common ancestor, the ancestor itself included.
fn mark_fundamental_cycle(
    a: NodeIndex,
    b: NodeIndex,
    parent: &[NodeIndex],
    depth: &[u32],
    in_cycle: &mut [bool],
) {
    let (mut a, mut b) = (a, b);
    while depth[a.index()] > depth[b.index()] {
        in_cycle[a.index()] = true;
        a = parent[a.index()];
    }
    while depth[b.index()] > depth[a.index()] {
        in_cycle[b.index()] = true;
        b = parent[b.index()];
    }
    while a != b {
        in_cycle[a.index()] = true;
        in_cycle[b.index()] = true;
        a = parent[a.index()];
        b = parent[b.index()];
    }
    in_cycle[a.index()] = true;
}
