//! A pure Rust library for screening decoy candidates against a reference
//! molecule. It profiles structures on the five bulk descriptors used as
//! screening filters (hydrogen-bond donors and acceptors, molecular weight,
//! rotatable bonds, logP) and rejects candidates that are structurally too
//! close to the reference, producing property-matched but topologically
//! dissimilar decoy sets for virtual-screening benchmarks.
//!
//! # Features
//!
//! - **Profiling** — SMILES parsing, descriptor calculation, and Morgan
//!   fingerprints, computed once per molecule into an immutable profile
//! - **Decoy classification** — six-criterion predicate: five property
//!   tolerances plus a Tanimoto similarity ceiling, all bounds inclusive
//! - **Batch screening** — one-pass loops over SDF files (embedded SMILES
//!   data items) and comma-delimited text, skipping unusable candidates
//!   while counting what was skipped
//! - **Pass-through I/O** — accepted candidates keep their original bytes;
//!   nothing is re-serialized from descriptors
//!
//! # Quick Start
//!
//! The central operation is [`is_decoy`], which compares two
//! [`MoleculeProfile`]s under a [`Thresholds`] configuration:
//!
//! ```
//! use decoy_screen::{is_decoy, MoleculeProfile, Thresholds};
//!
//! // Phenol as the reference active
//! let reference = MoleculeProfile::from_smiles("c1ccccc1O")?;
//!
//! // A structural twin matches every bulk property but fails the
//! // similarity ceiling: an analog, not a decoy
//! let twin = MoleculeProfile::from_smiles("c1ccccc1O")?;
//! assert!(!is_decoy(&reference, &twin, &Thresholds::default()));
//! # Ok::<(), decoy_screen::ParseError>(())
//! ```
//!
//! Batch screening goes through [`Screener`], which pairs a reference with
//! its thresholds and drives a whole candidate source:
//!
//! ```
//! use std::io::Cursor;
//! use decoy_screen::{Screener, Thresholds};
//!
//! let screener = Screener::from_smiles("c1ccccc1O", Thresholds::default())?;
//! let screened = screener.screen_delimited(Cursor::new("id-1,c1ccccc1O,twin\n"))?;
//! assert!(screened.accepted.is_empty());
//! assert_eq!(screened.stats.examined, 1);
//! # Ok::<(), decoy_screen::ScreenError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`chem`] — Descriptor provider: SMILES parsing, scalar descriptors,
//!   fingerprints, Tanimoto similarity
//! - [`io`] — Candidate containers: record-preserving SDF and plain text
//! - [`Screener`] — Batch screening loop with skip accounting
//! - [`Thresholds`] — Tolerance configuration, TOML-overridable
//!
//! # Data Types
//!
//! - [`MoleculeProfile`] — One molecule's screening profile: five scalar
//!   descriptors plus a fingerprint, immutable after construction
//! - [`Screened`] / [`ScreenStats`] — Accepted items in input order plus
//!   examined/accepted/skipped tallies
//! - [`Molecule`], [`Atom`], [`Bond`], [`BondOrder`] — The underlying
//!   molecular graph produced by [`chem::parse_smiles`]

mod model;
mod screen;

pub mod chem;
pub mod io;

pub use model::molecule::{Atom, Bond, BondOrder, Molecule};

pub use chem::{Descriptors, Fingerprint, ParseError};

pub use screen::{
    is_decoy, MoleculeProfile, Screened, Screener, ScreenStats, Thresholds,
};

pub use screen::Error as ScreenError;
