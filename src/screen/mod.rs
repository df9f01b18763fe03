//! Decoy screening: profile construction, the classification predicate, and
//! the batch loop over candidate sources.
//!
//! The batch loop is deliberately forgiving: a candidate that cannot be
//! profiled (missing SMILES annotation, malformed structure, short line) is
//! skipped and counted, never fatal. Only the underlying reader failing is
//! an error. Accepted candidates keep their original representation and
//! input order.

pub mod decoy;
pub mod error;
pub mod profile;
pub mod thresholds;

pub use decoy::is_decoy;
pub use error::Error;
pub use profile::MoleculeProfile;
pub use thresholds::Thresholds;

use std::io::BufRead;

use crate::io::sdf::{SdfRecord, SdfRecords};

/// Tallies for one screening pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenStats {
    /// Candidates seen in the source.
    pub examined: usize,
    /// Candidates classified as decoys.
    pub accepted: usize,
    /// Candidates without a usable SMILES field.
    pub skipped_missing: usize,
    /// Candidates whose SMILES failed to parse.
    pub skipped_invalid: usize,
}

impl ScreenStats {
    /// Total candidates dropped before evaluation.
    pub fn skipped(&self) -> usize {
        self.skipped_missing + self.skipped_invalid
    }
}

/// Result of one screening pass: accepted items in input order plus tallies.
#[derive(Debug, Clone)]
pub struct Screened<T> {
    pub accepted: Vec<T>,
    pub stats: ScreenStats,
}

/// A reference profile paired with the thresholds to screen against.
#[derive(Debug, Clone)]
pub struct Screener {
    reference: MoleculeProfile,
    thresholds: Thresholds,
}

impl Screener {
    pub fn new(reference: MoleculeProfile, thresholds: Thresholds) -> Self {
        Screener {
            reference,
            thresholds,
        }
    }

    /// Build a screener straight from the reference SMILES.
    pub fn from_smiles(reference: &str, thresholds: Thresholds) -> Result<Self, Error> {
        let profile = MoleculeProfile::from_smiles(reference).map_err(Error::Reference)?;
        Ok(Screener::new(profile, thresholds))
    }

    pub fn reference(&self) -> &MoleculeProfile {
        &self.reference
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classify one candidate profile against the reference.
    pub fn is_decoy(&self, candidate: &MoleculeProfile) -> bool {
        is_decoy(&self.reference, candidate, &self.thresholds)
    }

    /// Screen an SDF source. Each record must carry a `SMILES` data item;
    /// records without one, or with an unparseable value, are skipped.
    /// Accepted records keep their original bytes.
    pub fn screen_sdf<R: BufRead>(&self, reader: R) -> Result<Screened<SdfRecord>, Error> {
        let mut accepted = Vec::new();
        let mut stats = ScreenStats::default();

        for record in SdfRecords::new(reader) {
            let record = record?;
            stats.examined += 1;

            let Some(smiles) = record.property("SMILES") else {
                stats.skipped_missing += 1;
                continue;
            };
            let Ok(candidate) = MoleculeProfile::from_smiles(smiles) else {
                stats.skipped_invalid += 1;
                continue;
            };
            if self.is_decoy(&candidate) {
                accepted.push(record);
            }
        }

        stats.accepted = accepted.len();
        Ok(Screened { accepted, stats })
    }

    /// Screen a comma-delimited text source, SMILES in the second field.
    /// Malformed lines are skipped; accepted lines are kept verbatim.
    pub fn screen_delimited<R: BufRead>(&self, reader: R) -> Result<Screened<String>, Error> {
        let mut accepted = Vec::new();
        let mut stats = ScreenStats::default();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            stats.examined += 1;

            let Some(smiles) = line.split(',').nth(1).map(str::trim) else {
                stats.skipped_missing += 1;
                continue;
            };
            let Ok(candidate) = MoleculeProfile::from_smiles(smiles) else {
                stats.skipped_invalid += 1;
                continue;
            };
            if self.is_decoy(&candidate) {
                accepted.push(line);
            }
        }

        stats.accepted = accepted.len();
        Ok(Screened { accepted, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Thresholds loose enough that any parseable, structurally different
    /// candidate passes; similarity alone does the rejecting.
    fn wide_open() -> Thresholds {
        Thresholds {
            hbd_tolerance: 100,
            weight_tolerance: 1e6,
            rotatable_tolerance: 100,
            hba_tolerance: 100,
            logp_tolerance: 1e6,
            similarity_ceiling: 0.75,
        }
    }

    fn sdf_record(name: &str, smiles: Option<&str>) -> String {
        let mut block = format!("{name}\n     screen\n\n  0  0  0  0  0  0  0  0  0  0999 V2000\nM  END\n");
        if let Some(smi) = smiles {
            block.push_str(&format!(">  <SMILES>\n{smi}\n\n"));
        }
        block.push_str("$$$$\n");
        block
    }

    #[test]
    fn delimited_screen_preserves_input_order() {
        let screener = Screener::from_smiles("c1ccccc1O", wide_open()).unwrap();
        // Aliphatic candidates are structurally far from phenol; a second
        // phenol is similarity-identical and must be rejected.
        let input = "\
a,CCCCO,first
b,c1ccccc1O,self
c,CCNCC,second
d,CC(C)CC,third
";
        let result = screener.screen_delimited(Cursor::new(input)).unwrap();
        assert_eq!(
            result.accepted,
            vec![
                "a,CCCCO,first".to_string(),
                "c,CCNCC,second".to_string(),
                "d,CC(C)CC,third".to_string(),
            ]
        );
        assert_eq!(result.stats.examined, 4);
        assert_eq!(result.stats.accepted, 3);
        assert_eq!(result.stats.skipped(), 0);
    }

    #[test]
    fn delimited_screen_skips_malformed_lines() {
        let screener = Screener::from_smiles("c1ccccc1O", wide_open()).unwrap();
        let with_bad = "a,CCCCO\nno-comma-here\nb,C1CC\nc,CCNCC\n";
        let without_bad = "a,CCCCO\nc,CCNCC\n";

        let got = screener.screen_delimited(Cursor::new(with_bad)).unwrap();
        let clean = screener.screen_delimited(Cursor::new(without_bad)).unwrap();

        assert_eq!(got.accepted, clean.accepted);
        assert_eq!(got.stats.skipped_missing, 1);
        assert_eq!(got.stats.skipped_invalid, 1);
        assert_eq!(got.stats.examined, 4);
    }

    #[test]
    fn sdf_screen_keeps_original_records() {
        let screener = Screener::from_smiles("c1ccccc1O", wide_open()).unwrap();
        let input = format!(
            "{}{}{}",
            sdf_record("keep-me", Some("CCCCO")),
            sdf_record("no-annotation", None),
            sdf_record("twin", Some("c1ccccc1O")),
        );

        let result = screener.screen_sdf(Cursor::new(input)).unwrap();
        assert_eq!(result.accepted.len(), 1);
        assert_eq!(result.accepted[0].lines[0], "keep-me");
        assert_eq!(result.stats.examined, 3);
        assert_eq!(result.stats.skipped_missing, 1);
        assert_eq!(result.stats.skipped_invalid, 0);
    }

    #[test]
    fn sdf_screen_skips_unparseable_smiles() {
        let screener = Screener::from_smiles("c1ccccc1O", wide_open()).unwrap();
        let with_bad = format!(
            "{}{}",
            sdf_record("bad", Some("C1CC")),
            sdf_record("good", Some("CCCCO")),
        );
        let result = screener.screen_sdf(Cursor::new(with_bad)).unwrap();
        assert_eq!(result.accepted.len(), 1);
        assert_eq!(result.accepted[0].lines[0], "good");
        assert_eq!(result.stats.skipped_invalid, 1);
    }

    #[test]
    fn screener_verdict_matches_free_predicate() {
        let thresholds = Thresholds::default();
        let screener = Screener::from_smiles("CCO", thresholds.clone()).unwrap();
        let candidate = MoleculeProfile::from_smiles("CCN").unwrap();

        assert_eq!(
            screener.is_decoy(&candidate),
            is_decoy(screener.reference(), &candidate, &thresholds)
        );
    }

    #[test]
    fn invalid_reference_is_an_error() {
        let err = Screener::from_smiles("C1CC", Thresholds::default()).unwrap_err();
        assert!(matches!(err, Error::Reference(_)));
    }
}
