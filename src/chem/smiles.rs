//! SMILES string parser.
//!
//! Covers the organic subset, bracket atoms with charge/isotope/explicit
//! hydrogen counts, branches, ring closures (including `%nn` labels), and
//! disconnected fragments. Stereo markers (`/`, `\`, `@`) are accepted and
//! discarded: screening descriptors are constitution-only.

use std::collections::BTreeMap;

use crate::model::element::element_by_symbol;
use crate::model::molecule::{Atom, Bond, BondOrder, Molecule};

use super::error::ParseError;

/// Parse a SMILES string into a [`Molecule`].
pub fn parse_smiles(smiles: &str) -> Result<Molecule, ParseError> {
    let mut parser = SmilesParser::new(smiles);
    parser.parse()?;
    parser.check_balanced()?;
    parser.assign_implicit_hydrogens();
    Ok(Molecule::new(parser.atoms, parser.bonds))
}

struct SmilesParser<'a> {
    input: &'a [u8],
    pos: usize,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    /// Atoms written in bracket notation carry their hydrogen count
    /// explicitly and are exempt from valence-based H assignment.
    bracket: Vec<bool>,
    /// ring_open[label] = (atom index, bond order written at the opening)
    ring_open: BTreeMap<u16, (usize, Option<BondOrder>)>,
    /// Branch return points
    stack: Vec<usize>,
    prev_atom: Option<usize>,
    pending_bond: Option<BondOrder>,
}

impl<'a> SmilesParser<'a> {
    fn new(input: &'a str) -> Self {
        SmilesParser {
            input: input.as_bytes(),
            pos: 0,
            atoms: Vec::new(),
            bonds: Vec::new(),
            bracket: Vec::new(),
            ring_open: BTreeMap::new(),
            stack: Vec::new(),
            prev_atom: None,
            pending_bond: None,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.input.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn parse(&mut self) -> Result<(), ParseError> {
        while self.pos < self.input.len() {
            match self.peek() {
                Some(b'(') => {
                    self.advance();
                    if let Some(prev) = self.prev_atom {
                        self.stack.push(prev);
                    }
                }
                Some(b')') => {
                    self.advance();
                    self.prev_atom = self.stack.pop();
                    self.pending_bond = None;
                }
                Some(b'-') => {
                    self.advance();
                    self.pending_bond = Some(BondOrder::Single);
                }
                Some(b'=') => {
                    self.advance();
                    self.pending_bond = Some(BondOrder::Double);
                }
                Some(b'#') => {
                    self.advance();
                    self.pending_bond = Some(BondOrder::Triple);
                }
                Some(b':') => {
                    self.advance();
                    self.pending_bond = Some(BondOrder::Aromatic);
                }
                Some(b'/') | Some(b'\\') => {
                    // cis/trans markers carry no constitutional information
                    self.advance();
                }
                Some(b'%') => {
                    self.advance();
                    let label = self.parse_two_digit_label()?;
                    self.close_or_open_ring(label)?;
                }
                Some(b'[') => {
                    self.parse_bracket_atom()?;
                }
                Some(ch) if ch.is_ascii_digit() => {
                    self.advance();
                    self.close_or_open_ring((ch - b'0') as u16)?;
                }
                Some(ch) if is_organic_atom_start(ch) => {
                    self.parse_organic_atom()?;
                }
                Some(b'.') => {
                    self.advance();
                    self.prev_atom = None;
                    self.pending_bond = None;
                }
                Some(ch) => {
                    return Err(ParseError::UnexpectedChar {
                        ch: ch as char,
                        pos: self.pos,
                    });
                }
                None => break,
            }
        }
        Ok(())
    }

    fn parse_organic_atom(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        let ch = self.advance().unwrap();
        let aromatic = ch.is_ascii_lowercase();
        let upper = ch.to_ascii_uppercase();

        let symbol = match upper {
            b'B' => {
                if !aromatic && self.peek() == Some(b'r') {
                    self.advance();
                    "Br"
                } else {
                    "B"
                }
            }
            b'C' => {
                if !aromatic && self.peek() == Some(b'l') {
                    self.advance();
                    "Cl"
                } else {
                    "C"
                }
            }
            b'N' => "N",
            b'O' => "O",
            b'P' => "P",
            b'S' => "S",
            b'F' => "F",
            b'I' => "I",
            _ => {
                return Err(ParseError::UnexpectedChar {
                    ch: ch as char,
                    pos: start,
                });
            }
        };

        let elem = element_by_symbol(symbol).ok_or_else(|| ParseError::UnknownElement {
            symbol: symbol.to_string(),
            pos: start,
        })?;

        self.push_atom(
            Atom {
                atomic_number: elem.atomic_number,
                formal_charge: 0,
                isotope: None,
                aromatic,
                implicit_h: 0, // assigned after parsing
            },
            false,
        );
        Ok(())
    }

    fn parse_bracket_atom(&mut self) -> Result<(), ParseError> {
        self.advance(); // consume '['

        let isotope = self.parse_optional_number();

        let start = self.pos;
        let ch = self
            .advance()
            .ok_or(ParseError::UnexpectedEnd("bracket atom"))?;
        let aromatic = ch.is_ascii_lowercase();
        let upper = ch.to_ascii_uppercase();

        // Prefer a two-letter symbol when it names a real element
        let symbol = if let Some(next) = self.peek() {
            if next.is_ascii_lowercase() && next != b'@' {
                let two = format!("{}{}", upper as char, next as char);
                if element_by_symbol(&two).is_some() {
                    self.advance();
                    two
                } else {
                    String::from(upper as char)
                }
            } else {
                String::from(upper as char)
            }
        } else {
            String::from(upper as char)
        };

        let elem = element_by_symbol(&symbol).ok_or_else(|| ParseError::UnknownElement {
            symbol: symbol.clone(),
            pos: start,
        })?;

        // Chirality markers are constitution-neutral
        while self.peek() == Some(b'@') {
            self.advance();
        }

        let mut explicit_h = 0u8;
        if self.peek() == Some(b'H') {
            self.advance();
            explicit_h = match self.peek() {
                Some(d) if d.is_ascii_digit() => {
                    self.advance();
                    d - b'0'
                }
                _ => 1,
            };
        }

        let charge = self.parse_charge();

        if self.advance() != Some(b']') {
            return Err(ParseError::UnexpectedEnd("expected ']' in bracket atom"));
        }

        self.push_atom(
            Atom {
                atomic_number: elem.atomic_number,
                formal_charge: charge,
                isotope: isotope.map(|n| n as u16),
                aromatic,
                implicit_h: explicit_h,
            },
            true,
        );
        Ok(())
    }

    fn parse_charge(&mut self) -> i8 {
        let sign: i8 = match self.peek() {
            Some(b'+') => 1,
            Some(b'-') => -1,
            _ => return 0,
        };
        self.advance();
        match self.peek() {
            Some(d) if d.is_ascii_digit() => {
                self.advance();
                sign * (d - b'0') as i8
            }
            Some(b'+') if sign == 1 => {
                let mut c = 1i8;
                while self.peek() == Some(b'+') {
                    self.advance();
                    c += 1;
                }
                c
            }
            Some(b'-') if sign == -1 => {
                let mut c = -1i8;
                while self.peek() == Some(b'-') {
                    self.advance();
                    c -= 1;
                }
                c
            }
            _ => sign,
        }
    }

    fn parse_optional_number(&mut self) -> Option<u32> {
        let mut n: u32 = 0;
        let mut found = false;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                self.advance();
                n = n * 10 + (ch - b'0') as u32;
                found = true;
            } else {
                break;
            }
        }
        found.then_some(n)
    }

    fn parse_two_digit_label(&mut self) -> Result<u16, ParseError> {
        let d1 = self
            .advance()
            .ok_or(ParseError::UnexpectedEnd("digit after '%'"))?;
        let d2 = self
            .advance()
            .ok_or(ParseError::UnexpectedEnd("second digit after '%'"))?;
        if !d1.is_ascii_digit() || !d2.is_ascii_digit() {
            return Err(ParseError::UnexpectedChar {
                ch: if d1.is_ascii_digit() { d2 as char } else { d1 as char },
                pos: self.pos - 1,
            });
        }
        Ok((d1 - b'0') as u16 * 10 + (d2 - b'0') as u16)
    }

    fn close_or_open_ring(&mut self, label: u16) -> Result<(), ParseError> {
        let current = self
            .prev_atom
            .ok_or(ParseError::DanglingRingClosure { pos: self.pos - 1 })?;

        if let Some((open_atom, open_order)) = self.ring_open.remove(&label) {
            let order = self.pending_bond.or(open_order).unwrap_or(BondOrder::Single);
            let aromatic = self.atoms[open_atom].aromatic && self.atoms[current].aromatic;
            let order = if aromatic && order == BondOrder::Single {
                BondOrder::Aromatic
            } else {
                order
            };
            self.bonds.push(Bond {
                i: open_atom,
                j: current,
                order,
                aromatic,
            });
            self.pending_bond = None;
        } else {
            self.ring_open.insert(label, (current, self.pending_bond.take()));
        }
        Ok(())
    }

    fn push_atom(&mut self, atom: Atom, from_bracket: bool) {
        let idx = self.atoms.len();
        self.atoms.push(atom);
        self.bracket.push(from_bracket);
        if let Some(prev) = self.prev_atom {
            let both_aromatic = self.atoms[prev].aromatic && self.atoms[idx].aromatic;
            let order = self.pending_bond.take().unwrap_or(if both_aromatic {
                BondOrder::Aromatic
            } else {
                BondOrder::Single
            });
            self.bonds.push(Bond {
                i: prev,
                j: idx,
                order,
                aromatic: both_aromatic && order == BondOrder::Aromatic,
            });
        }
        self.pending_bond = None;
        self.prev_atom = Some(idx);
    }

    fn check_balanced(&self) -> Result<(), ParseError> {
        if !self.ring_open.is_empty() {
            return Err(ParseError::UnmatchedRingClosure {
                labels: self.ring_open.keys().copied().collect(),
            });
        }
        if !self.stack.is_empty() {
            return Err(ParseError::UnmatchedBranch {
                count: self.stack.len(),
            });
        }
        Ok(())
    }

    /// Fill implicit hydrogen counts on organic-subset atoms from standard
    /// valences. Bracket atoms keep the count written in the input.
    fn assign_implicit_hydrogens(&mut self) {
        for i in 0..self.atoms.len() {
            if self.bracket[i] {
                continue;
            }
            let atom = &self.atoms[i];
            let Some(target) = default_valence(atom.atomic_number) else {
                continue;
            };

            // An aromatic atom donates one electron to the pi system; its
            // sigma framework (degree) consumes the rest. Non-aromatic atoms
            // spend the full valence on the bond-order sum.
            let (available, used) = if atom.aromatic {
                (target.saturating_sub(1), self.bond_degree(i))
            } else {
                (target, self.bond_order_sum(i))
            };
            if available > used {
                self.atoms[i].implicit_h = (available - used) as u8;
            }
        }
    }

    fn bond_degree(&self, atom: usize) -> usize {
        self.bonds
            .iter()
            .filter(|b| b.i == atom || b.j == atom)
            .count()
    }

    fn bond_order_sum(&self, atom: usize) -> usize {
        let sum: f64 = self
            .bonds
            .iter()
            .filter(|b| b.i == atom || b.j == atom)
            .map(|b| b.order.value())
            .sum();
        sum.round() as usize
    }
}

fn default_valence(atomic_number: u8) -> Option<usize> {
    match atomic_number {
        5 => Some(3),  // B
        6 => Some(4),  // C
        7 => Some(3),  // N
        8 => Some(2),  // O
        15 => Some(3), // P
        16 => Some(2), // S
        9 | 17 | 35 | 53 => Some(1), // halogens
        _ => None,
    }
}

fn is_organic_atom_start(ch: u8) -> bool {
    matches!(
        ch,
        b'B' | b'C' | b'N' | b'O' | b'P' | b'S' | b'F' | b'I'
            | b'b' | b'c' | b'n' | b'o' | b'p' | b's'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methane() {
        let mol = parse_smiles("C").unwrap();
        assert_eq!(mol.atom_count(), 1);
        assert_eq!(mol.bond_count(), 0);
        assert_eq!(mol.atoms[0].atomic_number, 6);
        assert_eq!(mol.atoms[0].implicit_h, 4);
    }

    #[test]
    fn ethanol() {
        let mol = parse_smiles("CCO").unwrap();
        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.bond_count(), 2);
        assert_eq!(mol.atoms[0].implicit_h, 3);
        assert_eq!(mol.atoms[1].implicit_h, 2);
        assert_eq!(mol.atoms[2].implicit_h, 1);
    }

    #[test]
    fn benzene() {
        let mol = parse_smiles("c1ccccc1").unwrap();
        assert_eq!(mol.atom_count(), 6);
        assert_eq!(mol.bond_count(), 6);
        for atom in &mol.atoms {
            assert!(atom.aromatic);
            assert_eq!(atom.implicit_h, 1);
        }
    }

    #[test]
    fn branching() {
        let mol = parse_smiles("CC(C)C").unwrap();
        assert_eq!(mol.atom_count(), 4);
        assert_eq!(mol.bond_count(), 3);
        assert_eq!(mol.degree(1), 3);
    }

    #[test]
    fn double_bond() {
        let mol = parse_smiles("C=C").unwrap();
        assert_eq!(mol.bonds[0].order, BondOrder::Double);
        assert_eq!(mol.atoms[0].implicit_h, 2);
        assert_eq!(mol.atoms[1].implicit_h, 2);
    }

    #[test]
    fn bracket_atom_keeps_explicit_hydrogens() {
        let mol = parse_smiles("[NH4+]").unwrap();
        assert_eq!(mol.atoms[0].atomic_number, 7);
        assert_eq!(mol.atoms[0].formal_charge, 1);
        assert_eq!(mol.atoms[0].implicit_h, 4);

        // Pyrrole nitrogen: bracket count must survive untouched
        let pyrrole = parse_smiles("c1cc[nH]c1").unwrap();
        let n = pyrrole.atoms.iter().find(|a| a.atomic_number == 7).unwrap();
        assert_eq!(n.implicit_h, 1);
    }

    #[test]
    fn two_digit_ring_label() {
        let mol = parse_smiles("C%10CCCCCCCCC%10").unwrap();
        assert_eq!(mol.atom_count(), 10);
        assert_eq!(mol.bond_count(), 10);
    }

    #[test]
    fn disconnected_fragments() {
        let mol = parse_smiles("CC.O").unwrap();
        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.bond_count(), 1);
    }

    #[test]
    fn invalid_inputs_error() {
        assert!(parse_smiles("C(").is_err());
        assert!(parse_smiles("C1CC").is_err());
        assert!(parse_smiles("[").is_err());
        assert!(parse_smiles("C$").is_err());
        assert!(parse_smiles("1CC").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn simple_smiles() -> impl Strategy<Value = String> {
        let atoms = prop_oneof![
            Just("C"),
            Just("N"),
            Just("O"),
            Just("S"),
            Just("c"),
            Just("n"),
            Just("o"),
        ];
        proptest::collection::vec(atoms, 1..=20).prop_map(|parts| parts.join(""))
    }

    proptest! {
        #[test]
        fn arbitrary_input_does_not_panic(s in "\\PC{0,100}") {
            let _ = parse_smiles(&s);
        }

        #[test]
        fn chains_parse_with_positive_atom_count(smi in simple_smiles()) {
            if let Ok(mol) = parse_smiles(&smi) {
                prop_assert!(mol.atom_count() > 0);
                prop_assert_eq!(mol.bond_count(), mol.atom_count() - 1);
            }
        }
    }
}
