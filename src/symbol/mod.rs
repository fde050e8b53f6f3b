//! A type that can represent symbols in a context-free grammar. Any ordered value can serve as a
//! symbol. The default value of the type is reserved for the empty string.

pub mod source;

use std::fmt;
use std::hash::Hash;

pub use self::source::{Generate, SymbolGenerator, SymbolSource};

/// Marker printed in place of the empty string.
pub const EPSILON_MARKER: &str = "<e>";

/// Trait for grammar symbols.
///
/// `Self::default()` is epsilon, the empty string. It must never be used as the name of a
/// terminal or a nonterminal. For strings, epsilon is `""`. For integers, it is `0`.
pub trait GrammarSymbol: Clone + Ord + Hash + fmt::Debug + Default {
    /// Returns the symbol that stands for the empty string.
    #[inline]
    fn epsilon() -> Self {
        Self::default()
    }

    /// Checks whether this symbol stands for the empty string.
    #[inline]
    fn is_epsilon(&self) -> bool {
        *self == Self::default()
    }
}

impl<T> GrammarSymbol for T where T: Clone + Ord + Hash + fmt::Debug + Default {}

/// Displays a symbol, with epsilon shown as `<e>`.
pub(crate) fn fmt_symbol<T>(sym: &T, f: &mut fmt::Formatter) -> fmt::Result
where
    T: GrammarSymbol + fmt::Display,
{
    if sym.is_epsilon() {
        f.write_str(EPSILON_MARKER)
    } else {
        write!(f, "{}", sym)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_epsilon() {
        assert!("".is_epsilon());
        assert!(!"a".is_epsilon());
        assert_eq!(String::epsilon(), String::new());
        assert!(0u32.is_epsilon());
    }
}
