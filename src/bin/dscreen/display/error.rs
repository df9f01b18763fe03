use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = collect_hints(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Option<Vec<String>> {
    let mut hints = Vec::new();

    if let Some(screen_err) = err.downcast_ref::<decoy_screen::ScreenError>() {
        collect_screen_hints(screen_err, &mut hints);
    } else if let Some(parse_err) = err.downcast_ref::<decoy_screen::ParseError>() {
        collect_smiles_hints(parse_err, &mut hints);
    } else if let Some(io_err) = err.downcast_ref::<std::io::Error>() {
        collect_io_hints(io_err, &mut hints);
    } else {
        collect_fallback_hints(err, &mut hints);
    }

    if hints.is_empty() {
        None
    } else {
        Some(hints)
    }
}

fn collect_screen_hints(err: &decoy_screen::ScreenError, hints: &mut Vec<String>) {
    use decoy_screen::ScreenError;

    match err {
        ScreenError::Reference(parse_err) => {
            hints.push("The -s/--smile reference could not be interpreted".into());
            collect_smiles_hints(parse_err, hints);
        }
        ScreenError::InvalidThreshold(_) => {
            hints.push("Tolerances must be finite and non-negative".into());
            hints.push("The similarity ceiling must lie between 0 and 1".into());
        }
        ScreenError::ThresholdParse(_) => {
            hints.push("The --thresholds file must be valid TOML".into());
            hints.push(
                "Known keys: hbd_tolerance, weight_tolerance, rotatable_tolerance, \
                 hba_tolerance, logp_tolerance, similarity_ceiling"
                    .into(),
            );
        }
        ScreenError::Io { source } => collect_io_hints(source, hints),
    }
}

fn collect_smiles_hints(err: &decoy_screen::ParseError, hints: &mut Vec<String>) {
    use decoy_screen::ParseError;

    match err {
        ParseError::UnexpectedChar { .. } => {
            hints.push("Check the SMILES for typos or unsupported notation".into());
            hints.push("Quote the string so the shell does not expand it".into());
        }
        ParseError::UnknownElement { .. } => {
            hints.push("Element symbols are case-sensitive (Cl, Br, not CL, BR)".into());
        }
        ParseError::UnexpectedEnd(_) => {
            hints.push("A bracket atom is missing its closing ']'".into());
        }
        ParseError::DanglingRingClosure { .. }
        | ParseError::UnmatchedRingClosure { .. } => {
            hints.push("Every ring-closure digit must appear exactly twice".into());
        }
        ParseError::UnmatchedBranch { .. } => {
            hints.push("Every '(' needs a matching ')'".into());
        }
    }
}

fn collect_io_hints(err: &std::io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match err.kind() {
        ErrorKind::NotFound => {
            hints.push("Check the path spelling and ensure the file exists".into());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Check file permissions with `ls -la`".into());
        }
        ErrorKind::WriteZero => {
            hints.push("Failed to write data (disk full?)".into());
        }
        _ => {
            hints.push("Check file path, permissions, and disk space".into());
        }
    }
}

fn collect_fallback_hints(err: &Error, hints: &mut Vec<String>) {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    let text = text.to_lowercase();

    if text.contains("extension") || text.contains("type_input") || text.contains("type_output") {
        hints.push("File names must end in the extension of their declared type".into());
        hints.push("Example: -i sdf -I candidates.sdf -o sdf -O decoys.sdf".into());
    } else if text.contains("no such file") || text.contains("not found") {
        hints.push("Check that the file path is correct".into());
    } else if text.contains("permission denied") {
        hints.push("Ensure you have the required access rights".into());
    }
}
