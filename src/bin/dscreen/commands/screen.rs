use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use decoy_screen::io::sdf::SdfRecord;
use decoy_screen::io::{sdf, text, Format};
use decoy_screen::{Screened, Screener, ScreenStats};

use crate::cli::{Cli, InputKind};
use crate::config::build_thresholds;
use crate::display::{
    print_reference_profile, print_screen_summary, print_thresholds, Context as DisplayContext,
    Progress,
};
use crate::io::{create_output, has_extension, open_input};

const TOTAL_STEPS: u8 = 3;

/// `sdf`/`txt` input modes: screen a candidate file into an output file.
pub fn run_screen(args: &Cli, ctx: DisplayContext) -> Result<()> {
    let spec = resolve_io(args)?;
    let thresholds = build_thresholds(&args.thresholds)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Profiling reference molecule");
    let screener =
        Screener::from_smiles(&args.smile, thresholds).context("Invalid reference structure")?;
    progress.complete_step(
        "Profiling reference molecule",
        &[
            "Parse reference SMILES".to_string(),
            "Compute descriptors".to_string(),
            "Generate Morgan fingerprint".to_string(),
        ],
    );

    if ctx.interactive {
        print_reference_profile(&args.smile, screener.reference());
        print_thresholds(screener.thresholds());
    }

    progress.step("Screening candidates");
    let reader = open_input(&spec.input)?;
    let screened = match args.type_input {
        InputKind::Sdf => Matches::Records(
            screener
                .screen_sdf(reader)
                .context("Screening the SDF input failed")?,
        ),
        InputKind::Txt => Matches::Lines(
            screener
                .screen_delimited(reader)
                .context("Screening the text input failed")?,
        ),
        InputKind::Smile => bail!("smile input does not go through file screening"),
    };

    let stats = screened.stats();
    progress.complete_step(
        "Screening candidates",
        &[
            format!("{} candidates examined", stats.examined),
            format!("{} accepted as decoys", stats.accepted),
            format!("{} skipped", stats.skipped()),
        ],
    );

    progress.step("Writing decoys");
    let mut writer = create_output(&spec.output)?;
    match (&screened, spec.output_format) {
        (Matches::Records(s), Format::Sdf) => {
            sdf::write_records(&mut writer, &s.accepted).context("Failed to write SDF output")?;
        }
        (Matches::Lines(s), Format::Txt | Format::Smile) => {
            text::write_lines(&mut writer, &s.accepted).context("Failed to write text output")?;
        }
        _ => bail!(
            "Output format '{}' cannot represent the screened input",
            spec.output_format
        ),
    }
    writer.flush().context("Failed to flush output file")?;

    let out_name = spec
        .output
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    progress.complete_step(
        "Writing decoys",
        &[format!("Write {} → {}", spec.output_format, out_name)],
    );

    if ctx.interactive {
        print_screen_summary(&stats);
    }
    progress.finish();

    Ok(())
}

/// Accepted candidates, in their source representation.
enum Matches {
    Records(Screened<SdfRecord>),
    Lines(Screened<String>),
}

impl Matches {
    fn stats(&self) -> ScreenStats {
        match self {
            Matches::Records(s) => s.stats,
            Matches::Lines(s) => s.stats,
        }
    }
}

struct IoSpec {
    input: PathBuf,
    output: PathBuf,
    output_format: Format,
}

/// Validate the argument pairing before any molecule work: file input needs
/// an output type and path, and both paths must carry the extension of
/// their declared format.
fn resolve_io(args: &Cli) -> Result<IoSpec> {
    let input_format: Format = args.type_input.into();

    let (Some(output_kind), Some(output)) = (args.type_output, &args.output) else {
        bail!(
            "Input type '{}' requires both -o/--type_output and -O/--_output",
            input_format
        );
    };
    let output_format: Format = output_kind.into();

    let input = PathBuf::from(&args.input);
    if !has_extension(&input, input_format.extension()) {
        bail!(
            "Input file '{}' does not end in '.{}' as declared by --type_input",
            input.display(),
            input_format.extension()
        );
    }
    if !has_extension(output, output_format.extension()) {
        bail!(
            "Output file '{}' does not end in '.{}' as declared by --type_output",
            output.display(),
            output_format.extension()
        );
    }

    // Screening is pass-through: the output container must be able to carry
    // the input's representation unchanged.
    match (input_format, output_format) {
        (Format::Sdf, Format::Sdf) => {}
        (Format::Txt, Format::Txt | Format::Smile) => {}
        _ => bail!(
            "Cannot write {} input as '{}' output; records are passed through, not converted",
            input_format,
            output_format
        ),
    }

    Ok(IoSpec {
        input,
        output: output.clone(),
        output_format,
    })
}
