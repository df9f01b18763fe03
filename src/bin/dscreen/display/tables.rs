use std::io::{self, Write};

use decoy_screen::{MoleculeProfile, ScreenStats, Thresholds};

use crate::util::text::truncate;

const INDENT: &str = "      ";
const LABEL_W: usize = 18;
const VALUE_W: usize = 30;

pub fn print_reference_profile(smiles: &str, profile: &MoleculeProfile) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("SMILES", truncate(smiles, VALUE_W)),
        ("HB Donors", profile.hbd.to_string()),
        ("HB Acceptors", profile.hba.to_string()),
        ("Mol. Weight", format!("{:.2} amu", profile.molecular_weight)),
        ("Rotatable Bonds", profile.rotatable_bonds.to_string()),
        ("logP", format!("{:.2}", profile.log_p)),
        (
            "Fingerprint",
            format!(
                "{} bits set / {}",
                profile.fingerprint.count_ones(),
                profile.fingerprint.nbits()
            ),
        ),
    ];
    print_kv_table(&mut out, "Reference Profile", &rows);
}

pub fn print_thresholds(thresholds: &Thresholds) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("HBD", format!("± {}", thresholds.hbd_tolerance)),
        ("Weight", format!("± {} amu", thresholds.weight_tolerance)),
        ("Rot. Bonds", format!("± {}", thresholds.rotatable_tolerance)),
        ("HBA", format!("± {}", thresholds.hba_tolerance)),
        ("logP", format!("± {}", thresholds.logp_tolerance)),
        (
            "Similarity",
            format!("≤ {}", thresholds.similarity_ceiling),
        ),
    ];
    print_kv_table(&mut out, "Screening Thresholds", &rows);
}

pub fn print_screen_summary(stats: &ScreenStats) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("Examined", stats.examined.to_string()),
        ("Accepted", stats.accepted.to_string()),
        ("No SMILES", stats.skipped_missing.to_string()),
        ("Unparseable", stats.skipped_invalid.to_string()),
    ];
    print_kv_table(&mut out, "Screening Summary", &rows);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let inner = LABEL_W + VALUE_W + 3;
    let title = truncate(title, inner.saturating_sub(4));
    let title_pad = inner.saturating_sub(title.chars().count() + 3);

    let _ = writeln!(out, "{INDENT}┌─ {} {}┐", title, "─".repeat(title_pad));
    for (label, value) in rows {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<LABEL_W$} {:<VALUE_W$} │",
            label,
            truncate(value, VALUE_W)
        );
    }
    let _ = writeln!(out, "{INDENT}└{}┘", "─".repeat(inner));
    let _ = writeln!(out);
}
