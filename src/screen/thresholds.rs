//! Screening tolerances.

use serde::Deserialize;

use super::error::Error;

/// Tolerances for the five property criteria plus the similarity ceiling.
///
/// A candidate is a decoy when every scalar descriptor sits within its
/// tolerance of the reference value (closed intervals) and the fingerprint
/// Tanimoto similarity does not exceed `similarity_ceiling`.
///
/// Partial override files only need to name the fields they change:
///
/// ```toml
/// weight_tolerance = 40.0
/// similarity_ceiling = 0.6
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub hbd_tolerance: u32,
    pub weight_tolerance: f64,
    pub rotatable_tolerance: u32,
    pub hba_tolerance: u32,
    pub logp_tolerance: f64,
    pub similarity_ceiling: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            hbd_tolerance: 1,
            weight_tolerance: 25.0,
            rotatable_tolerance: 1,
            hba_tolerance: 2,
            logp_tolerance: 1.0,
            similarity_ceiling: 0.75,
        }
    }
}

impl Thresholds {
    /// Parse a TOML override file; unnamed fields keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, Error> {
        let thresholds: Thresholds = toml::from_str(input)?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Reject tolerances that cannot express a closed interval.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.weight_tolerance.is_finite() || self.weight_tolerance < 0.0 {
            return Err(Error::InvalidThreshold(format!(
                "weight_tolerance must be finite and non-negative, got {}",
                self.weight_tolerance
            )));
        }
        if !self.logp_tolerance.is_finite() || self.logp_tolerance < 0.0 {
            return Err(Error::InvalidThreshold(format!(
                "logp_tolerance must be finite and non-negative, got {}",
                self.logp_tolerance
            )));
        }
        if !(0.0..=1.0).contains(&self.similarity_ceiling) {
            return Err(Error::InvalidThreshold(format!(
                "similarity_ceiling must lie in [0, 1], got {}",
                self.similarity_ceiling
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let t = Thresholds::default();
        assert_eq!(t.hbd_tolerance, 1);
        assert_eq!(t.weight_tolerance, 25.0);
        assert_eq!(t.rotatable_tolerance, 1);
        assert_eq!(t.hba_tolerance, 2);
        assert_eq!(t.logp_tolerance, 1.0);
        assert_eq!(t.similarity_ceiling, 0.75);
    }

    #[test]
    fn partial_toml_override() {
        let t = Thresholds::from_toml_str("weight_tolerance = 40.0\n").unwrap();
        assert_eq!(t.weight_tolerance, 40.0);
        assert_eq!(t.hbd_tolerance, 1);
        assert_eq!(t.similarity_ceiling, 0.75);
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(Thresholds::from_toml_str("weight_tol = 40.0\n").is_err());
    }

    #[test]
    fn out_of_range_ceiling_rejected() {
        let err = Thresholds::from_toml_str("similarity_ceiling = 1.5\n").unwrap_err();
        assert!(matches!(err, Error::InvalidThreshold(_)));
    }

    #[test]
    fn negative_tolerance_rejected() {
        let mut t = Thresholds::default();
        t.logp_tolerance = -0.5;
        assert!(t.validate().is_err());
    }
}
