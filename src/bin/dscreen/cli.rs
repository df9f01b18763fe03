use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use decoy_screen::io::Format;

#[derive(Parser)]
#[command(
    name = "dscreen",
    about = "Physicochemical decoy screening against a reference molecule",
    version,
    author,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    /// Reference molecule SMILES string
    #[arg(short = 's', long = "smile", value_name = "SMILES")]
    pub smile: String,

    /// Input type: a bare SMILES or a candidate file format
    #[arg(short = 'i', long = "type_input", value_name = "TYPE")]
    pub type_input: InputKind,

    /// Candidate input: a SMILES string (type `smile`) or a file path
    #[arg(short = 'I', long = "_input", value_name = "INPUT")]
    pub input: String,

    /// Output type, required for file-based input
    #[arg(short = 'o', long = "type_output", value_name = "TYPE")]
    pub type_output: Option<OutputKind>,

    /// Output path, required for file-based input
    #[arg(short = 'O', long = "_output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub thresholds: ThresholdOptions,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Screening tolerance overrides.
///
/// Precedence: built-in defaults, then the `--thresholds` file, then any
/// individual flag.
#[derive(Args)]
#[command(next_help_heading = "Screening Thresholds")]
pub struct ThresholdOptions {
    /// Threshold overrides (TOML file)
    #[arg(long = "thresholds", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Hydrogen-bond donor count tolerance
    #[arg(long = "hbd-tolerance", value_name = "N")]
    pub hbd_tolerance: Option<u32>,

    /// Molecular weight tolerance (amu)
    #[arg(long = "weight-tolerance", value_name = "AMU")]
    pub weight_tolerance: Option<f64>,

    /// Rotatable bond count tolerance
    #[arg(long = "rotatable-tolerance", value_name = "N")]
    pub rotatable_tolerance: Option<u32>,

    /// Hydrogen-bond acceptor count tolerance
    #[arg(long = "hba-tolerance", value_name = "N")]
    pub hba_tolerance: Option<u32>,

    /// logP tolerance
    #[arg(long = "logp-tolerance", value_name = "LOGP", allow_hyphen_values = true)]
    pub logp_tolerance: Option<f64>,

    /// Maximum Tanimoto similarity a decoy may have to the reference
    #[arg(long = "similarity-ceiling", value_name = "SIM")]
    pub similarity_ceiling: Option<f64>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputKind {
    /// Compare a single candidate SMILES, print the verdict
    Smile,
    /// Screen an SDF file with embedded SMILES data items
    Sdf,
    /// Screen a comma-delimited text file, SMILES in the second column
    Txt,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputKind {
    /// Plain text with `.smile` extension
    Smile,
    /// SDF records, byte-preserving
    Sdf,
    /// Plain text lines, byte-preserving
    Txt,
}

impl From<InputKind> for Format {
    fn from(kind: InputKind) -> Self {
        match kind {
            InputKind::Smile => Format::Smile,
            InputKind::Sdf => Format::Sdf,
            InputKind::Txt => Format::Txt,
        }
    }
}

impl From<OutputKind> for Format {
    fn from(kind: OutputKind) -> Self {
        match kind {
            OutputKind::Smile => Format::Smile,
            OutputKind::Sdf => Format::Sdf,
            OutputKind::Txt => Format::Txt,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
