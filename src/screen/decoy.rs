//! The decoy classification predicate.

use crate::chem::tanimoto_similarity;

use super::profile::MoleculeProfile;
use super::thresholds::Thresholds;

/// Classify `candidate` as a decoy for `reference`.
///
/// True iff the candidate matches the reference on all five bulk properties
/// (each within its tolerance, bounds inclusive) while the fingerprint
/// Tanimoto similarity stays at or below the ceiling. Property match plus
/// structural mismatch is what separates a decoy from a true analog.
pub fn is_decoy(
    reference: &MoleculeProfile,
    candidate: &MoleculeProfile,
    thresholds: &Thresholds,
) -> bool {
    reference.hbd.abs_diff(candidate.hbd) <= thresholds.hbd_tolerance
        && (reference.molecular_weight - candidate.molecular_weight).abs()
            <= thresholds.weight_tolerance
        && reference.rotatable_bonds.abs_diff(candidate.rotatable_bonds)
            <= thresholds.rotatable_tolerance
        && reference.hba.abs_diff(candidate.hba) <= thresholds.hba_tolerance
        && (reference.log_p - candidate.log_p).abs() <= thresholds.logp_tolerance
        && tanimoto_similarity(&reference.fingerprint, &candidate.fingerprint)
            <= thresholds.similarity_ceiling
}
