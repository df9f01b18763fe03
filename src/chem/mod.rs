//! Descriptor provider: structure parsing and derived molecular data.
//!
//! Everything screening needs from a molecule passes through this narrow
//! surface: [`parse_smiles`] to obtain a graph, [`descriptors`] for the five
//! scalar properties, [`fingerprint`] for the structural bit vector, and
//! [`tanimoto_similarity`] to compare two fingerprints. The screening layer
//! never inspects a [`Molecule`](crate::Molecule) directly.

pub mod crippen;
pub mod error;
pub mod fingerprint;
pub mod properties;
pub mod smiles;

pub use error::ParseError;
pub use fingerprint::{morgan_fingerprint, tanimoto_similarity, Fingerprint};
pub use smiles::parse_smiles;

use crate::model::molecule::Molecule;
use crate::model::ring;

/// Morgan radius used for screening fingerprints (ECFP4-equivalent).
pub const FINGERPRINT_RADIUS: usize = 2;
/// Folded fingerprint width in bits.
pub const FINGERPRINT_BITS: usize = 2048;

/// The five scalar descriptors screening compares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Descriptors {
    pub hbd: u32,
    pub hba: u32,
    pub molecular_weight: f64,
    pub rotatable_bonds: u32,
    pub log_p: f64,
}

/// Compute all scalar descriptors in one pass over the molecule.
pub fn descriptors(mol: &Molecule) -> Descriptors {
    let rings = ring::find_sssr(mol);
    Descriptors {
        hbd: properties::hbd_count(mol),
        hba: properties::hba_count(mol),
        molecular_weight: properties::molecular_weight(mol),
        rotatable_bonds: properties::rotatable_bond_count(mol, &rings),
        log_p: crippen::crippen_logp(mol),
    }
}

/// Compute the screening fingerprint at the standard radius and width.
pub fn fingerprint(mol: &Molecule) -> Fingerprint {
    morgan_fingerprint(mol, FINGERPRINT_RADIUS, FINGERPRINT_BITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ethanol_descriptors() {
        let mol = parse_smiles("CCO").unwrap();
        let d = descriptors(&mol);
        assert_eq!(d.hbd, 1);
        assert_eq!(d.hba, 1);
        assert_eq!(d.rotatable_bonds, 0);
        assert!((d.molecular_weight - 46.07).abs() < 0.01, "MW={}", d.molecular_weight);
    }

    #[test]
    fn fingerprint_uses_standard_width() {
        let mol = parse_smiles("c1ccccc1").unwrap();
        assert_eq!(fingerprint(&mol).nbits(), FINGERPRINT_BITS);
    }
}
