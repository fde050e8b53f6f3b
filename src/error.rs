//! Errors reported by grammar operations.

use thiserror::Error;

/// A failure of a grammar operation whose precondition was violated.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum GrammarError<T> {
    /// A slice of a right-hand side was requested outside of its bounds.
    #[error("range {from}..{to} is out of bounds for a right-hand side of length {len}")]
    OutOfRange {
        /// Start of the requested range.
        from: usize,
        /// End of the requested range.
        to: usize,
        /// Length of the right-hand side.
        len: usize,
    },
    /// FIRST set computation re-entered a nonterminal without consuming input.
    ///
    /// Left recursion must be eliminated before computing FIRST sets.
    #[error("nonterminal {symbol:?} is left-recursive, FIRST set is undefined")]
    LeftRecursion {
        /// The nonterminal that was re-entered.
        symbol: T,
    },
}

/// Result of grammar operations.
pub type Result<V, T> = std::result::Result<V, GrammarError<T>>;
