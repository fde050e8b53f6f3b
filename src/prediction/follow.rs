//! FOLLOW sets.

use std::collections::BTreeSet;

use log::trace;

use super::first::FirstSetCollector;
use super::{PerSymbolSets, PredictSets};
use crate::local_prelude::*;

/// FOLLOW sets of every nonterminal in a grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FollowSets<T> {
    /// Mapping from nonterminals to FOLLOW sets.
    map: PerSymbolSets<T>,
}

impl<T: GrammarSymbol> FollowSets<T> {
    /// Computes FOLLOW sets of all nonterminals of the grammar. The `terminator` marks the end
    /// of input and follows the start symbol.
    ///
    /// For every production `A ::= α B β` with a nonterminal `B`, FOLLOW(B) receives FIRST(β)
    /// without epsilon, as well as FOLLOW(A) if β can derive the empty string. The sets grow
    /// until a fixed point is reached.
    ///
    /// The grammar must be free of left recursion, otherwise `GrammarError::LeftRecursion`
    /// is returned.
    pub fn new(grammar: &Grammar<T>, terminator: T) -> Result<Self, T> {
        let mut map: PerSymbolSets<T> = grammar
            .nonterminals()
            .iter()
            .map(|nt| (nt.clone(), BTreeSet::new()))
            .collect();
        map.entry(grammar.start().clone())
            .or_default()
            .insert(terminator);

        let mut first = FirstSetCollector::new(grammar);
        let mut changed = true;
        let mut passes = 0;
        while changed {
            changed = false;
            passes += 1;
            for prod in grammar.iter_productions() {
                let rhs = prod.rhs();
                for (pos, sym) in rhs.iter().enumerate() {
                    if !grammar.is_nonterminal(sym) {
                        continue;
                    }
                    let trail_first = first.first_of_string(&rhs[pos + 1..])?;
                    let mut follow_set: BTreeSet<T> = trail_first
                        .iter()
                        .filter(|elem| !elem.is_epsilon())
                        .cloned()
                        .collect();
                    if trail_first.contains(&T::epsilon()) {
                        follow_set.extend(map.get(prod.lhs()).into_iter().flatten().cloned());
                    }

                    let followed = map.entry(sym.clone()).or_default();
                    let prev_cardinality = followed.len();
                    followed.extend(follow_set);
                    changed |= prev_cardinality != followed.len();
                }
            }
            trace!("FOLLOW sets after pass {}: {:?}", passes, map);
        }

        Ok(FollowSets { map })
    }

    /// Returns the FOLLOW set of a nonterminal.
    pub fn follow_set(&self, nonterminal: &T) -> Option<&BTreeSet<T>> {
        self.map.get(nonterminal)
    }

    /// Unwraps the sets.
    pub fn into_sets(self) -> PerSymbolSets<T> {
        self.map
    }
}

impl<T> PredictSets<T> for FollowSets<T> {
    fn predict_sets(&self) -> &PerSymbolSets<T> {
        &self.map
    }
}

impl<T: GrammarSymbol> Grammar<T> {
    /// Computes the FOLLOW sets of all nonterminals, with `terminator` marking the end of
    /// input.
    pub fn follow_sets(&self, terminator: T) -> Result<PerSymbolSets<T>, T> {
        FollowSets::new(self, terminator).map(FollowSets::into_sets)
    }

    /// Computes the FOLLOW set of one nonterminal, with `terminator` marking the end of
    /// input. The set is empty for symbols that are not nonterminals.
    pub fn follow(&self, terminator: T, nonterminal: &T) -> Result<BTreeSet<T>, T> {
        let mut sets = self.follow_sets(terminator)?;
        Ok(sets.remove(nonterminal).unwrap_or_default())
    }
}
