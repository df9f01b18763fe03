//! Core data structures for molecular graphs.
//!
//! - [`element`] – Periodic table lookup by symbol or atomic number.
//! - [`molecule`] – Atoms, bonds, and the adjacency-backed [`Molecule`] graph.
//! - [`ring`] – SSSR ring perception used by descriptor calculation.
//!
//! The model is purely topological: screening works from connectivity and
//! atom attributes, never from 3D coordinates.
//!
//! [`Molecule`]: molecule::Molecule

pub mod element;
pub mod molecule;
pub mod ring;
