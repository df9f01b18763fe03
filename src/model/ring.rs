//! Ring perception via smallest set of smallest rings (SSSR).

use std::collections::VecDeque;

use super::molecule::Molecule;

/// Find the smallest set of smallest rings in a molecule.
///
/// Each ring is returned as a vector of atom indices in traversal order.
pub fn find_sssr(mol: &Molecule) -> Vec<Vec<usize>> {
    let n = mol.atom_count();
    if n == 0 || mol.bond_count() == 0 {
        return Vec::new();
    }

    // Cyclomatic number = bonds - atoms + components
    let components = count_components(mol);
    let expected = mol.bond_count() as isize - n as isize + components as isize;
    if expected <= 0 {
        return Vec::new();
    }

    let ring_atoms = find_ring_atoms(mol);
    if ring_atoms.is_empty() {
        return Vec::new();
    }

    // For each ring bond, the shortest cycle through it is found by BFS
    // from one endpoint to the other with the bond itself excluded.
    let mut rings: Vec<Vec<usize>> = Vec::new();
    for (bi, bond) in mol.bonds.iter().enumerate() {
        if !ring_atoms[bond.i] || !ring_atoms[bond.j] {
            continue;
        }
        if let Some(mut ring) = shortest_path(mol, bond.i, bond.j, bi, &ring_atoms) {
            normalize_ring(&mut ring);
            if !rings.iter().any(|r| r == &ring) {
                rings.push(ring);
            }
        }
    }

    rings.sort_by_key(|r| r.len());
    if rings.len() > expected as usize {
        rings.truncate(expected as usize);
    }
    rings
}

/// Mark the bonds that belong to any of the given rings.
pub fn ring_bond_flags(mol: &Molecule, rings: &[Vec<usize>]) -> Vec<bool> {
    let mut flags = vec![false; mol.bond_count()];
    for ring in rings {
        for k in 0..ring.len() {
            let a = ring[k];
            let b = ring[(k + 1) % ring.len()];
            for &(neighbor, bi) in &mol.adjacency[a] {
                if neighbor == b {
                    flags[bi] = true;
                }
            }
        }
    }
    flags
}

/// Mark the atoms that belong to any of the given rings.
pub fn ring_atom_flags(mol: &Molecule, rings: &[Vec<usize>]) -> Vec<bool> {
    let mut flags = vec![false; mol.atom_count()];
    for ring in rings {
        for &idx in ring {
            flags[idx] = true;
        }
    }
    flags
}

fn count_components(mol: &Molecule) -> usize {
    let n = mol.atom_count();
    let mut visited = vec![false; n];
    let mut components = 0;
    for start in 0..n {
        if visited[start] {
            continue;
        }
        components += 1;
        let mut queue = VecDeque::new();
        queue.push_back(start);
        visited[start] = true;
        while let Some(curr) = queue.pop_front() {
            for &(neighbor, _) in &mol.adjacency[curr] {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }
    }
    components
}

/// Identify ring atoms by iteratively pruning terminal atoms.
fn find_ring_atoms(mol: &Molecule) -> Vec<bool> {
    let n = mol.atom_count();
    let mut degree: Vec<usize> = (0..n).map(|i| mol.adjacency[i].len()).collect();

    let mut queue: VecDeque<usize> = (0..n).filter(|&i| degree[i] <= 1).collect();
    let mut removed = vec![false; n];
    while let Some(atom) = queue.pop_front() {
        if removed[atom] {
            continue;
        }
        removed[atom] = true;
        for &(neighbor, _) in &mol.adjacency[atom] {
            if !removed[neighbor] {
                degree[neighbor] -= 1;
                if degree[neighbor] <= 1 {
                    queue.push_back(neighbor);
                }
            }
        }
    }
    removed.iter().map(|&r| !r).collect()
}

/// BFS from `start` to `end` avoiding one bond, restricted to ring atoms.
fn shortest_path(
    mol: &Molecule,
    start: usize,
    end: usize,
    excluded_bond: usize,
    ring_atoms: &[bool],
) -> Option<Vec<usize>> {
    let n = mol.atom_count();
    let mut visited = vec![false; n];
    let mut parent = vec![usize::MAX; n];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(curr) = queue.pop_front() {
        if curr == end {
            let mut path = Vec::new();
            let mut node = end;
            while node != start {
                path.push(node);
                node = parent[node];
            }
            path.push(start);
            path.reverse();
            return Some(path);
        }
        for &(neighbor, bi) in &mol.adjacency[curr] {
            if bi == excluded_bond {
                continue;
            }
            if !visited[neighbor] && ring_atoms[neighbor] {
                visited[neighbor] = true;
                parent[neighbor] = curr;
                queue.push_back(neighbor);
            }
        }
    }
    None
}

/// Rotate a ring so the smallest index leads, then pick the direction that
/// gives the lexicographically smaller sequence, so duplicates compare equal.
fn normalize_ring(ring: &mut Vec<usize>) {
    if ring.is_empty() {
        return;
    }
    let min_pos = ring.iter().enumerate().min_by_key(|&(_, &v)| v).unwrap().0;
    ring.rotate_left(min_pos);
    let n = ring.len();
    if n > 2 && ring[n - 1] < ring[1] {
        ring[1..].reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::parse_smiles;

    #[test]
    fn benzene_one_ring() {
        let mol = parse_smiles("c1ccccc1").unwrap();
        let rings = find_sssr(&mol);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 6);
    }

    #[test]
    fn naphthalene_two_rings() {
        let mol = parse_smiles("c1ccc2ccccc2c1").unwrap();
        let rings = find_sssr(&mol);
        assert_eq!(rings.len(), 2);
        for ring in &rings {
            assert_eq!(ring.len(), 6);
        }
    }

    #[test]
    fn acyclic_has_no_rings() {
        let mol = parse_smiles("CCCC").unwrap();
        assert!(find_sssr(&mol).is_empty());
    }

    #[test]
    fn ring_flags_cover_cycle() {
        let mol = parse_smiles("C1CC1C").unwrap();
        let rings = find_sssr(&mol);
        let atom_flags = ring_atom_flags(&mol, &rings);
        let bond_flags = ring_bond_flags(&mol, &rings);
        assert_eq!(atom_flags.iter().filter(|&&f| f).count(), 3);
        assert_eq!(bond_flags.iter().filter(|&&f| f).count(), 3);
    }
}
