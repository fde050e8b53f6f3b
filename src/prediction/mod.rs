//! Prediction for predictive parsers: FIRST and FOLLOW sets.
//!
//! Sets are computed on demand and are not cached by the grammar.

mod first;
mod follow;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

pub use self::first::FirstSets;
pub use self::follow::FollowSets;

use crate::symbol::{fmt_symbol, GrammarSymbol};

/// The representation of FIRST and FOLLOW sets. Epsilon is a member of a FIRST set when the
/// symbol derives the empty string.
pub type PerSymbolSets<T> = BTreeMap<T, BTreeSet<T>>;

/// Access to a family of per-symbol sets.
pub trait PredictSets<T> {
    /// Returns a reference to the sets, keyed by symbol.
    fn predict_sets(&self) -> &PerSymbolSets<T>;
}

/// Displays a set of symbols, each followed by a space, with epsilon shown as `<e>`.
#[derive(Clone, Copy, Debug)]
pub struct SetDisplay<'a, T>(pub &'a BTreeSet<T>);

impl<'a, T> fmt::Display for SetDisplay<'a, T>
where
    T: GrammarSymbol + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for sym in self.0 {
            fmt_symbol(sym, f)?;
            f.write_str(" ")?;
        }
        Ok(())
    }
}
