//! Periodic table lookup for the elements a screening library encounters.

/// A chemical element with the data needed for weight and valence work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub atomic_weight: f64,
}

// Elements 1-54 (H through Xe). Drug-like candidate sets do not reach past
// the halogens, but SDF inputs may carry counter-ions like Na or Zn.
static ELEMENTS: [Element; 54] = [
    Element { atomic_number: 1, symbol: "H", atomic_weight: 1.008 },
    Element { atomic_number: 2, symbol: "He", atomic_weight: 4.003 },
    Element { atomic_number: 3, symbol: "Li", atomic_weight: 6.941 },
    Element { atomic_number: 4, symbol: "Be", atomic_weight: 9.012 },
    Element { atomic_number: 5, symbol: "B", atomic_weight: 10.81 },
    Element { atomic_number: 6, symbol: "C", atomic_weight: 12.011 },
    Element { atomic_number: 7, symbol: "N", atomic_weight: 14.007 },
    Element { atomic_number: 8, symbol: "O", atomic_weight: 15.999 },
    Element { atomic_number: 9, symbol: "F", atomic_weight: 18.998 },
    Element { atomic_number: 10, symbol: "Ne", atomic_weight: 20.180 },
    Element { atomic_number: 11, symbol: "Na", atomic_weight: 22.990 },
    Element { atomic_number: 12, symbol: "Mg", atomic_weight: 24.305 },
    Element { atomic_number: 13, symbol: "Al", atomic_weight: 26.982 },
    Element { atomic_number: 14, symbol: "Si", atomic_weight: 28.086 },
    Element { atomic_number: 15, symbol: "P", atomic_weight: 30.974 },
    Element { atomic_number: 16, symbol: "S", atomic_weight: 32.06 },
    Element { atomic_number: 17, symbol: "Cl", atomic_weight: 35.45 },
    Element { atomic_number: 18, symbol: "Ar", atomic_weight: 39.948 },
    Element { atomic_number: 19, symbol: "K", atomic_weight: 39.098 },
    Element { atomic_number: 20, symbol: "Ca", atomic_weight: 40.078 },
    Element { atomic_number: 21, symbol: "Sc", atomic_weight: 44.956 },
    Element { atomic_number: 22, symbol: "Ti", atomic_weight: 47.867 },
    Element { atomic_number: 23, symbol: "V", atomic_weight: 50.942 },
    Element { atomic_number: 24, symbol: "Cr", atomic_weight: 51.996 },
    Element { atomic_number: 25, symbol: "Mn", atomic_weight: 54.938 },
    Element { atomic_number: 26, symbol: "Fe", atomic_weight: 55.845 },
    Element { atomic_number: 27, symbol: "Co", atomic_weight: 58.933 },
    Element { atomic_number: 28, symbol: "Ni", atomic_weight: 58.693 },
    Element { atomic_number: 29, symbol: "Cu", atomic_weight: 63.546 },
    Element { atomic_number: 30, symbol: "Zn", atomic_weight: 65.38 },
    Element { atomic_number: 31, symbol: "Ga", atomic_weight: 69.723 },
    Element { atomic_number: 32, symbol: "Ge", atomic_weight: 72.63 },
    Element { atomic_number: 33, symbol: "As", atomic_weight: 74.922 },
    Element { atomic_number: 34, symbol: "Se", atomic_weight: 78.96 },
    Element { atomic_number: 35, symbol: "Br", atomic_weight: 79.904 },
    Element { atomic_number: 36, symbol: "Kr", atomic_weight: 83.798 },
    Element { atomic_number: 37, symbol: "Rb", atomic_weight: 85.468 },
    Element { atomic_number: 38, symbol: "Sr", atomic_weight: 87.62 },
    Element { atomic_number: 39, symbol: "Y", atomic_weight: 88.906 },
    Element { atomic_number: 40, symbol: "Zr", atomic_weight: 91.224 },
    Element { atomic_number: 41, symbol: "Nb", atomic_weight: 92.906 },
    Element { atomic_number: 42, symbol: "Mo", atomic_weight: 95.95 },
    Element { atomic_number: 43, symbol: "Tc", atomic_weight: 98.0 },
    Element { atomic_number: 44, symbol: "Ru", atomic_weight: 101.07 },
    Element { atomic_number: 45, symbol: "Rh", atomic_weight: 102.906 },
    Element { atomic_number: 46, symbol: "Pd", atomic_weight: 106.42 },
    Element { atomic_number: 47, symbol: "Ag", atomic_weight: 107.868 },
    Element { atomic_number: 48, symbol: "Cd", atomic_weight: 112.414 },
    Element { atomic_number: 49, symbol: "In", atomic_weight: 114.818 },
    Element { atomic_number: 50, symbol: "Sn", atomic_weight: 118.710 },
    Element { atomic_number: 51, symbol: "Sb", atomic_weight: 121.760 },
    Element { atomic_number: 52, symbol: "Te", atomic_weight: 127.60 },
    Element { atomic_number: 53, symbol: "I", atomic_weight: 126.904 },
    Element { atomic_number: 54, symbol: "Xe", atomic_weight: 131.293 },
];

/// Look up an element by its symbol (e.g. "C", "Cl").
pub fn element_by_symbol(symbol: &str) -> Option<&'static Element> {
    ELEMENTS.iter().find(|e| e.symbol == symbol)
}

/// Look up an element by atomic number.
pub fn element_by_number(n: u8) -> Option<&'static Element> {
    if (1..=54).contains(&n) {
        Some(&ELEMENTS[(n - 1) as usize])
    } else {
        None
    }
}
