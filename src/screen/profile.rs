//! Screening profile of one molecule.

use crate::chem::{self, Fingerprint, ParseError};

/// The screening-relevant view of a molecule: five scalar descriptors plus
/// a structural fingerprint, all computed once at construction.
///
/// A profile is immutable for its lifetime; construction either yields a
/// complete profile or fails, never a partial one.
#[derive(Debug, Clone)]
pub struct MoleculeProfile {
    pub hbd: u32,
    pub molecular_weight: f64,
    pub rotatable_bonds: u32,
    pub hba: u32,
    pub log_p: f64,
    pub fingerprint: Fingerprint,
}

impl MoleculeProfile {
    /// Build a profile from a SMILES string.
    pub fn from_smiles(smiles: &str) -> Result<Self, ParseError> {
        let mol = chem::parse_smiles(smiles)?;
        let d = chem::descriptors(&mol);
        Ok(MoleculeProfile {
            hbd: d.hbd,
            molecular_weight: d.molecular_weight,
            rotatable_bonds: d.rotatable_bonds,
            hba: d.hba,
            log_p: d.log_p,
            fingerprint: chem::fingerprint(&mol),
        })
    }
}
