use thiserror::Error;

/// Errors raised while interpreting a SMILES string.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("unknown element '{symbol}' at position {pos}")]
    UnknownElement { symbol: String, pos: usize },

    #[error("unexpected end of input: {0}")]
    UnexpectedEnd(&'static str),

    #[error("ring closure digit without a preceding atom at position {pos}")]
    DanglingRingClosure { pos: usize },

    #[error("unmatched ring closure label(s): {labels:?}")]
    UnmatchedRingClosure { labels: Vec<u16> },

    #[error("{count} unmatched '(' in SMILES")]
    UnmatchedBranch { count: usize },
}
