use anyhow::{Context, Result};

use decoy_screen::{is_decoy, MoleculeProfile};

use crate::cli::Cli;
use crate::config::build_thresholds;
use crate::display::{print_reference_profile, Context as DisplayContext};

/// `smile` input mode: profile both molecules and print the verdict.
pub fn run_compare(args: &Cli, ctx: DisplayContext) -> Result<()> {
    let thresholds = build_thresholds(&args.thresholds)?;

    let reference =
        MoleculeProfile::from_smiles(&args.smile).context("Invalid reference structure")?;
    let candidate =
        MoleculeProfile::from_smiles(&args.input).context("Invalid candidate structure")?;

    if ctx.interactive {
        print_reference_profile(&args.smile, &reference);
    }

    println!("{}", verdict_label(is_decoy(&reference, &candidate, &thresholds)));
    Ok(())
}

fn verdict_label(decoy: bool) -> &'static str {
    if decoy {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decoy_screen::Thresholds;

    #[test]
    fn verdict_labels() {
        assert_eq!(verdict_label(true), "True");
        assert_eq!(verdict_label(false), "False");
    }

    #[test]
    fn printed_verdict_tracks_the_predicate() {
        // The compare path evaluates exactly is_decoy on the two profiles
        let reference = MoleculeProfile::from_smiles("c1ccccc1O").unwrap();
        let candidate = MoleculeProfile::from_smiles("c1ccccc1O").unwrap();
        let verdict = is_decoy(&reference, &candidate, &Thresholds::default());
        assert_eq!(verdict_label(verdict), "False");
    }
}
