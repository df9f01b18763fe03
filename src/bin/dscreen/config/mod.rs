use std::fs;

use anyhow::{Context, Result};

use decoy_screen::Thresholds;

use crate::cli::ThresholdOptions;

/// Resolve the effective thresholds: defaults, then the override file,
/// then individual flags.
pub fn build_thresholds(opts: &ThresholdOptions) -> Result<Thresholds> {
    let mut thresholds = match &opts.file {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read threshold file: {}", path.display()))?;
            Thresholds::from_toml_str(&raw)
                .with_context(|| format!("Invalid threshold file: {}", path.display()))?
        }
        None => Thresholds::default(),
    };

    if let Some(v) = opts.hbd_tolerance {
        thresholds.hbd_tolerance = v;
    }
    if let Some(v) = opts.weight_tolerance {
        thresholds.weight_tolerance = v;
    }
    if let Some(v) = opts.rotatable_tolerance {
        thresholds.rotatable_tolerance = v;
    }
    if let Some(v) = opts.hba_tolerance {
        thresholds.hba_tolerance = v;
    }
    if let Some(v) = opts.logp_tolerance {
        thresholds.logp_tolerance = v;
    }
    if let Some(v) = opts.similarity_ceiling {
        thresholds.similarity_ceiling = v;
    }

    thresholds.validate().context("Invalid threshold override")?;
    Ok(thresholds)
}
