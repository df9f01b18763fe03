//! Molecular graph representation.

/// Bond order classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Numeric bond order for valence arithmetic.
    pub fn value(self) -> f64 {
        match self {
            BondOrder::Single => 1.0,
            BondOrder::Double => 2.0,
            BondOrder::Triple => 3.0,
            BondOrder::Aromatic => 1.5,
        }
    }
}

/// An atom in a molecular graph.
///
/// Hydrogens are kept implicit: `implicit_h` carries the count attached to
/// this heavy atom, filled in by the SMILES parser from valence rules or
/// from an explicit bracket-atom hydrogen count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    pub atomic_number: u8,
    pub formal_charge: i8,
    pub isotope: Option<u16>,
    pub aromatic: bool,
    pub implicit_h: u8,
}

/// A bond between two atoms, referenced by index into the atom list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
    pub order: BondOrder,
    pub aromatic: bool,
}

/// A molecular graph with precomputed adjacency.
#[derive(Debug, Clone)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    /// adjacency[atom] = (neighbor atom index, bond index) pairs
    pub adjacency: Vec<Vec<(usize, usize)>>,
}

impl Molecule {
    /// Build a molecule, deriving the adjacency list from atoms and bonds.
    pub fn new(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Self {
        let mut adjacency = vec![Vec::new(); atoms.len()];
        for (bi, bond) in bonds.iter().enumerate() {
            adjacency[bond.i].push((bond.j, bi));
            adjacency[bond.j].push((bond.i, bi));
        }
        Molecule { atoms, bonds, adjacency }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Graph degree of an atom (explicit bonds only).
    #[inline]
    pub fn degree(&self, atom: usize) -> usize {
        self.adjacency[atom].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ethane() -> Molecule {
        let atoms = vec![
            Atom { atomic_number: 6, formal_charge: 0, isotope: None, aromatic: false, implicit_h: 3 },
            Atom { atomic_number: 6, formal_charge: 0, isotope: None, aromatic: false, implicit_h: 3 },
        ];
        let bonds = vec![Bond { i: 0, j: 1, order: BondOrder::Single, aromatic: false }];
        Molecule::new(atoms, bonds)
    }

    #[test]
    fn adjacency_is_symmetric() {
        let mol = ethane();
        assert_eq!(mol.atom_count(), 2);
        assert_eq!(mol.bond_count(), 1);
        assert_eq!(mol.adjacency[0], vec![(1, 0)]);
        assert_eq!(mol.adjacency[1], vec![(0, 0)]);
        assert_eq!(mol.degree(0), 1);
    }

    #[test]
    fn bond_order_values() {
        assert_eq!(BondOrder::Single.value(), 1.0);
        assert_eq!(BondOrder::Triple.value(), 3.0);
        assert_eq!(BondOrder::Aromatic.value(), 1.5);
    }
}
