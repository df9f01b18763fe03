//! Morgan fingerprints and Tanimoto similarity.

use crate::model::molecule::Molecule;
use crate::model::ring;

/// A fixed-size bit-vector fingerprint.
///
/// Opaque to screening logic: the only supported observation is
/// [`tanimoto_similarity`] against another fingerprint of the same width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    bits: Vec<u64>,
    nbits: usize,
}

impl Fingerprint {
    /// Create an all-zero fingerprint of the given width.
    pub fn new(nbits: usize) -> Self {
        let nwords = nbits.div_ceil(64);
        Fingerprint {
            bits: vec![0u64; nwords],
            nbits,
        }
    }

    /// Set the bit at `pos` (wrapped into range).
    pub fn set_bit(&mut self, pos: usize) {
        let pos = pos % self.nbits;
        self.bits[pos / 64] |= 1u64 << (pos % 64);
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> u32 {
        self.bits.iter().map(|w| w.count_ones()).sum()
    }

    /// Width in bits.
    pub fn nbits(&self) -> usize {
        self.nbits
    }
}

/// Compute a Morgan (ECFP-like) fingerprint.
///
/// `radius` controls the neighborhood size (2 corresponds to ECFP4);
/// `nbits` is the folded width, commonly 2048.
pub fn morgan_fingerprint(mol: &Molecule, radius: usize, nbits: usize) -> Fingerprint {
    let n = mol.atom_count();
    let mut fp = Fingerprint::new(nbits);
    if n == 0 {
        return fp;
    }

    let in_ring = {
        let rings = ring::find_sssr(mol);
        ring::ring_atom_flags(mol, &rings)
    };

    // Initial atom invariants
    let mut identifiers: Vec<u64> = Vec::with_capacity(n);
    for (i, atom) in mol.atoms.iter().enumerate() {
        let mut h = fnv1a_init();
        h = fnv1a_update(h, atom.atomic_number as u64);
        h = fnv1a_update(h, mol.degree(i) as u64);
        h = fnv1a_update(h, atom.implicit_h as u64);
        h = fnv1a_update(h, atom.formal_charge as u64);
        h = fnv1a_update(h, in_ring[i] as u64);
        h = fnv1a_update(h, atom.aromatic as u64);
        identifiers.push(h);
    }

    for &id in &identifiers {
        fp.set_bit(fold(id, nbits));
    }

    // Grow neighborhoods one bond at a time
    for _ in 0..radius {
        let mut next = Vec::with_capacity(n);
        for i in 0..n {
            let mut h = fnv1a_init();
            h = fnv1a_update(h, identifiers[i]);

            // Sorted neighbor identifiers keep the hash order-independent
            let mut neighbor_ids: Vec<(u64, u8)> = mol.adjacency[i]
                .iter()
                .map(|&(neighbor, bi)| (identifiers[neighbor], mol.bonds[bi].order as u8))
                .collect();
            neighbor_ids.sort_unstable();

            for (nid, order) in &neighbor_ids {
                h = fnv1a_update(h, *nid);
                h = fnv1a_update(h, *order as u64);
            }

            next.push(h);
            fp.set_bit(fold(h, nbits));
        }
        identifiers = next;
    }

    fp
}

/// Tanimoto similarity coefficient between two fingerprints.
///
/// Ratio of shared to combined set bits, in `[0, 1]`. Two all-zero
/// fingerprints compare as identical.
///
/// # Panics
///
/// Panics if the fingerprints differ in width.
pub fn tanimoto_similarity(a: &Fingerprint, b: &Fingerprint) -> f64 {
    assert_eq!(a.nbits, b.nbits, "fingerprints must have the same width");

    let mut and_count = 0u32;
    let mut or_count = 0u32;
    for (wa, wb) in a.bits.iter().zip(b.bits.iter()) {
        and_count += (wa & wb).count_ones();
        or_count += (wa | wb).count_ones();
    }

    if or_count == 0 {
        return 1.0;
    }
    and_count as f64 / or_count as f64
}

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

fn fnv1a_init() -> u64 {
    FNV_OFFSET
}

fn fnv1a_update(hash: u64, value: u64) -> u64 {
    let mut h = hash;
    for &b in &value.to_le_bytes() {
        h ^= b as u64;
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

fn fold(hash: u64, nbits: usize) -> usize {
    (hash as usize) % nbits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::parse_smiles;

    #[test]
    fn bit_operations() {
        let mut fp = Fingerprint::new(128);
        fp.set_bit(42);
        fp.set_bit(100);
        assert_eq!(fp.count_ones(), 2);
        assert_eq!(fp.nbits(), 128);
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let mol = parse_smiles("CCO").unwrap();
        let fp1 = morgan_fingerprint(&mol, 2, 2048);
        let fp2 = morgan_fingerprint(&mol, 2, 2048);
        assert_eq!(fp1, fp2);
    }

    #[test]
    fn identical_molecules_score_one() {
        let mol = parse_smiles("c1ccccc1").unwrap();
        let fp = morgan_fingerprint(&mol, 2, 2048);
        assert!((tanimoto_similarity(&fp, &fp) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn related_molecules_score_between_zero_and_one() {
        let fp1 = morgan_fingerprint(&parse_smiles("CCO").unwrap(), 2, 2048);
        let fp2 = morgan_fingerprint(&parse_smiles("CCCO").unwrap(), 2, 2048);
        let sim = tanimoto_similarity(&fp1, &fp2);
        assert!(sim > 0.0 && sim < 1.0, "tanimoto = {sim}");
    }

    #[test]
    fn hand_built_overlap() {
        // intersection 3, union 4
        let mut a = Fingerprint::new(64);
        let mut b = Fingerprint::new(64);
        for bit in [0, 1, 2] {
            a.set_bit(bit);
            b.set_bit(bit);
        }
        b.set_bit(3);
        assert!((tanimoto_similarity(&a, &b) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn empty_fingerprints_are_identical() {
        let a = Fingerprint::new(64);
        let b = Fingerprint::new(64);
        assert_eq!(tanimoto_similarity(&a, &b), 1.0);
    }
}
