//! Left factoring.

use log::debug;

use crate::local_prelude::*;

impl<T: GrammarSymbol> Grammar<T> {
    /// Returns a left-factored copy of the grammar.
    ///
    /// For every nonterminal with more than one alternative, the longest prefix shared by all
    /// of its alternatives is factored out: `A ::= α β₁ | α β₂` becomes `A ::= α N` and
    /// `N ::= β₁ | β₂`, where `N` is a fresh nonterminal. An alternative equal to `α` becomes
    /// an epsilon alternative of `N`.
    ///
    /// This is a single pass. Alternatives of `N` are not factored again, and a prefix shared
    /// by only some of the alternatives is left in place.
    pub fn left_factor<G>(&self, generator: &mut G) -> Grammar<T>
    where
        G: SymbolGenerator<T>,
    {
        let mut result = self.clone();
        let mut rewrite = LeftFactor {
            destination: &mut result,
            generator,
        };
        for lhs in self.rules().keys() {
            rewrite.rewrite(lhs);
        }
        result
    }
}

/// Factors common prefixes of alternatives into new nonterminals.
struct LeftFactor<'a, T, G> {
    destination: &'a mut Grammar<T>,
    generator: &'a mut G,
}

impl<'a, T, G> LeftFactor<'a, T, G>
where
    T: GrammarSymbol,
    G: SymbolGenerator<T>,
{
    fn rewrite(&mut self, lhs: &T) {
        let prods = self.destination.productions(lhs).to_vec();
        if prods.len() < 2 {
            return;
        }
        let prefix = common_prefix(&prods[..]);
        if prefix.is_empty() {
            return;
        }

        let new_nt = self.destination.add_nonterminal(self.generator.next_sym());
        debug!(
            "factoring {:?} out of {} alternatives of {:?} into {:?}",
            prefix,
            prods.len(),
            lhs,
            new_nt
        );
        // The prefix is no longer than any alternative.
        let suffixes = prods
            .iter()
            .map(|prod| Production::new(new_nt.clone(), &prod.rhs()[prefix.len()..]))
            .collect();

        let mut factored = prefix;
        factored.push(new_nt.clone());
        self.destination
            .set_productions(lhs.clone(), vec![Production::new(lhs.clone(), factored)]);
        self.destination.set_productions(new_nt, suffixes);
    }
}

/// Returns the longest prefix shared by all alternatives. Epsilon alternatives have no
/// symbols, so they share no prefix with anything.
fn common_prefix<T: GrammarSymbol>(prods: &[Production<T>]) -> Vec<T> {
    let (first, rest) = match prods.split_first() {
        Some(split) => split,
        None => return vec![],
    };
    let first = first.rhs_symbols();
    let min_len = prods
        .iter()
        .map(|prod| prod.rhs_symbols().len())
        .min()
        .unwrap_or(0);
    let len = (0..min_len)
        .take_while(|&i| rest.iter().all(|prod| prod.rhs_symbols()[i] == first[i]))
        .count();
    first[..len].to_vec()
}
