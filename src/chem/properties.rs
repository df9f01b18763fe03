//! Scalar screening descriptors: weight, H-bond counts, rotatable bonds.

use crate::model::element::element_by_number;
use crate::model::molecule::{BondOrder, Molecule};
use crate::model::ring;

/// Molecular weight: sum of atomic weights including implicit hydrogens.
pub fn molecular_weight(mol: &Molecule) -> f64 {
    const H_WEIGHT: f64 = 1.008;
    let mut mw = 0.0;
    for atom in &mol.atoms {
        if let Some(elem) = element_by_number(atom.atomic_number) {
            mw += elem.atomic_weight;
        }
        mw += atom.implicit_h as f64 * H_WEIGHT;
    }
    mw
}

/// Hydrogen-bond donor count: N or O atoms carrying at least one hydrogen.
pub fn hbd_count(mol: &Molecule) -> u32 {
    mol.atoms
        .iter()
        .filter(|a| (a.atomic_number == 7 || a.atomic_number == 8) && a.implicit_h > 0)
        .count() as u32
}

/// Hydrogen-bond acceptor count: N or O atoms.
pub fn hba_count(mol: &Molecule) -> u32 {
    mol.atoms
        .iter()
        .filter(|a| a.atomic_number == 7 || a.atomic_number == 8)
        .count() as u32
}

/// Rotatable bond count: acyclic single bonds between non-terminal atoms,
/// excluding amide C-N bonds.
pub fn rotatable_bond_count(mol: &Molecule, rings: &[Vec<usize>]) -> u32 {
    let in_ring = ring::ring_bond_flags(mol, rings);

    mol.bonds
        .iter()
        .enumerate()
        .filter(|&(bi, bond)| {
            if bond.order != BondOrder::Single {
                return false;
            }
            if in_ring[bi] {
                return false;
            }
            if mol.degree(bond.i) <= 1 || mol.degree(bond.j) <= 1 {
                return false;
            }
            !is_amide_bond(mol, bond.i, bond.j)
        })
        .count() as u32
}

/// True when the bond between `a` and `b` is an amide C-N bond (C(=O)-N).
fn is_amide_bond(mol: &Molecule, a: usize, b: usize) -> bool {
    let (c, n) = if mol.atoms[a].atomic_number == 6 && mol.atoms[b].atomic_number == 7 {
        (a, b)
    } else if mol.atoms[a].atomic_number == 7 && mol.atoms[b].atomic_number == 6 {
        (b, a)
    } else {
        return false;
    };

    mol.adjacency[c].iter().any(|&(neighbor, bi)| {
        neighbor != n
            && mol.atoms[neighbor].atomic_number == 8
            && mol.bonds[bi].order == BondOrder::Double
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::parse_smiles;
    use crate::model::ring::find_sssr;

    #[test]
    fn weight_of_water() {
        let mol = parse_smiles("[OH2]").unwrap();
        let mw = molecular_weight(&mol);
        assert!((mw - 18.015).abs() < 0.01, "got {mw}");
    }

    #[test]
    fn weight_of_aspirin() {
        let mol = parse_smiles("CC(=O)Oc1ccccc1C(=O)O").unwrap();
        let mw = molecular_weight(&mol);
        assert!((mw - 180.16).abs() < 0.1, "got {mw}");
    }

    #[test]
    fn donors_and_acceptors_of_ethanol() {
        let mol = parse_smiles("CCO").unwrap();
        assert_eq!(hbd_count(&mol), 1);
        assert_eq!(hba_count(&mol), 1);
    }

    #[test]
    fn acceptors_count_all_n_and_o() {
        // Caffeine-like fragment: dimethylated urea
        let mol = parse_smiles("CN(C)C(=O)N(C)C").unwrap();
        assert_eq!(hbd_count(&mol), 0);
        assert_eq!(hba_count(&mol), 3);
    }

    #[test]
    fn rotatable_bonds_of_butane() {
        let mol = parse_smiles("CCCC").unwrap();
        let rings = find_sssr(&mol);
        assert_eq!(rotatable_bond_count(&mol, &rings), 1);
    }

    #[test]
    fn ring_bonds_do_not_rotate() {
        let mol = parse_smiles("C1CCCCC1").unwrap();
        let rings = find_sssr(&mol);
        assert_eq!(rotatable_bond_count(&mol, &rings), 0);
    }

    #[test]
    fn amide_bond_excluded() {
        // N-methylacetamide: CC(=O)NC — the C-N amide bond must not count
        let mol = parse_smiles("CC(=O)NC").unwrap();
        let rings = find_sssr(&mol);
        assert_eq!(rotatable_bond_count(&mol, &rings), 0);
    }
}
