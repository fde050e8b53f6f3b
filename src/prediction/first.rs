//! FIRST sets.

use std::collections::{BTreeMap, BTreeSet};

use log::warn;

use super::{PerSymbolSets, PredictSets};
use crate::local_prelude::*;

/// FIRST sets of every symbol in a grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FirstSets<T> {
    map: PerSymbolSets<T>,
}

impl<T: GrammarSymbol> FirstSets<T> {
    /// Computes FIRST sets of all symbols of the grammar.
    ///
    /// The grammar must be free of left recursion, otherwise `GrammarError::LeftRecursion`
    /// is returned.
    pub fn new(grammar: &Grammar<T>) -> Result<Self, T> {
        let mut collector = FirstSetCollector::new(grammar);
        let mut map = BTreeMap::new();
        for sym in grammar.symbols() {
            map.insert(sym.clone(), collector.first(sym)?);
        }
        Ok(FirstSets { map })
    }

    /// Returns the FIRST set of a symbol.
    pub fn first_set(&self, sym: &T) -> Option<&BTreeSet<T>> {
        self.map.get(sym)
    }

    /// Unwraps the sets.
    pub fn into_sets(self) -> PerSymbolSets<T> {
        self.map
    }
}

impl<T> PredictSets<T> for FirstSets<T> {
    fn predict_sets(&self) -> &PerSymbolSets<T> {
        &self.map
    }
}

/// Computes FIRST sets by recursive descent over the alternatives.
///
/// Nonterminals currently being expanded are tracked, so that left recursion is reported
/// instead of recursing forever.
pub(super) struct FirstSetCollector<'a, T> {
    grammar: &'a Grammar<T>,
    expanding: BTreeSet<T>,
}

impl<'a, T: GrammarSymbol> FirstSetCollector<'a, T> {
    pub(super) fn new(grammar: &'a Grammar<T>) -> Self {
        FirstSetCollector {
            grammar,
            expanding: BTreeSet::new(),
        }
    }

    /// Computes the FIRST set of a single symbol.
    pub(super) fn first(&mut self, sym: &T) -> Result<BTreeSet<T>, T> {
        if sym.is_epsilon() {
            return Ok(BTreeSet::new());
        }
        if self.grammar.is_terminal(sym) {
            return Ok(BTreeSet::from([sym.clone()]));
        }

        let prods = self.grammar.productions(sym);
        if prods.is_empty() {
            warn!("{:?} has no alternatives, its FIRST set is empty", sym);
            return Ok(BTreeSet::new());
        }
        if !self.expanding.insert(sym.clone()) {
            return Err(GrammarError::LeftRecursion {
                symbol: sym.clone(),
            });
        }
        let result = self.first_of_alternatives(prods);
        self.expanding.remove(sym);
        result
    }

    fn first_of_alternatives(&mut self, prods: &[Production<T>]) -> Result<BTreeSet<T>, T> {
        let mut result = BTreeSet::new();
        for prod in prods {
            result.extend(self.first_of_string(prod.rhs())?);
        }
        Ok(result)
    }

    /// Computes the FIRST set of a string of symbols.
    ///
    /// Scanning stops at the first symbol that cannot derive the empty string. The result
    /// contains epsilon only if every symbol of the string can.
    pub(super) fn first_of_string(&mut self, string: &[T]) -> Result<BTreeSet<T>, T> {
        let mut result = BTreeSet::new();
        for sym in string {
            if sym.is_epsilon() {
                continue;
            }
            let first_set = self.first(sym)?;
            let nullable = first_set.contains(&T::epsilon());
            result.extend(first_set.into_iter().filter(|elem| !elem.is_epsilon()));
            if !nullable {
                return Ok(result);
            }
        }
        result.insert(T::epsilon());
        Ok(result)
    }
}

impl<T: GrammarSymbol> Grammar<T> {
    /// Computes the FIRST set of a symbol.
    ///
    /// The FIRST set of a terminal is the terminal itself, and the FIRST set of epsilon is
    /// empty. A nonterminal without alternatives is reported with a warning and has an empty
    /// FIRST set.
    ///
    /// Fails with `GrammarError::LeftRecursion` when the symbol's derivations are
    /// left-recursive.
    pub fn first(&self, sym: &T) -> Result<BTreeSet<T>, T> {
        FirstSetCollector::new(self).first(sym)
    }

    /// Computes the FIRST set of a string of symbols. Epsilon is in the result only if the
    /// whole string can derive the empty string.
    pub fn first_of_string(&self, string: &[T]) -> Result<BTreeSet<T>, T> {
        FirstSetCollector::new(self).first_of_string(string)
    }

    /// Computes the FIRST sets of all symbols.
    pub fn first_sets(&self) -> Result<PerSymbolSets<T>, T> {
        FirstSets::new(self).map(FirstSets::into_sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_of_string_stops_at_first_non_nullable() {
        let grammar = Grammar::new(
            "S",
            [
                ("S", vec![vec!["C", "D", "E"]]),
                ("C", vec![vec!["c"], vec![]]),
                ("D", vec![vec!["d"]]),
                ("E", vec![vec!["e"]]),
            ],
        );
        assert_eq!(
            grammar.first_of_string(&["C", "D", "E"]),
            Ok(BTreeSet::from(["c", "d"]))
        );
        assert_eq!(
            grammar.first_of_string(&["C", "C"]),
            Ok(BTreeSet::from(["", "c"]))
        );
        assert_eq!(grammar.first_of_string(&[]), Ok(BTreeSet::from([""])));
    }

    #[test]
    fn test_repeated_expansion_is_not_recursion() {
        let grammar = Grammar::new(
            "S",
            [
                ("S", vec![vec!["A", "A"], vec!["A", "b"]]),
                ("A", vec![vec!["a", "S"], vec![]]),
            ],
        );
        assert_eq!(grammar.first(&"S"), Ok(BTreeSet::from(["", "a", "b"])));
    }
}
