//! Elimination of immediate left recursion.

use log::debug;

use crate::local_prelude::*;

impl<T: GrammarSymbol> Grammar<T> {
    /// Returns a copy of the grammar without immediate left recursion.
    ///
    /// Every nonterminal with left-recursive alternatives `A ::= A α₁ | A α₂ | β₁ | β₂` is
    /// rewritten into `A ::= β₁ A' | β₂ A'` and `A' ::= α₁ A' | α₂ A' | ε`, where `A'` is a
    /// fresh nonterminal.
    ///
    /// Only immediate left recursion is removed. Left recursion through other nonterminals,
    /// as in `A ::= B x; B ::= A y`, must be removed beforehand.
    pub fn eliminate_imm_left_recursion<G>(&self, generator: &mut G) -> Grammar<T>
    where
        G: SymbolGenerator<T>,
    {
        let mut result = self.clone();
        let mut rewrite = ImmLeftRecursion {
            destination: &mut result,
            generator,
        };
        for lhs in self.rules().keys() {
            if self.is_rule_imm_left_recursive(lhs) {
                rewrite.rewrite(lhs);
            }
        }
        result
    }
}

/// Moves left-recursive alternatives into new right-recursive nonterminals.
struct ImmLeftRecursion<'a, T, G> {
    destination: &'a mut Grammar<T>,
    generator: &'a mut G,
}

impl<'a, T, G> ImmLeftRecursion<'a, T, G>
where
    T: GrammarSymbol,
    G: SymbolGenerator<T>,
{
    fn rewrite(&mut self, lhs: &T) {
        let (recursive, others): (Vec<_>, Vec<_>) = self
            .destination
            .productions(lhs)
            .iter()
            .cloned()
            .partition(|prod| prod.is_imm_left_recursive());

        let tail = self.destination.add_nonterminal(self.generator.next_sym());
        debug!(
            "moving {} left-recursive alternatives of {:?} into {:?}",
            recursive.len(),
            lhs,
            tail
        );

        // `A ::= A` has nothing to repeat.
        let mut tail_prods: Vec<_> = recursive
            .iter()
            .filter(|prod| prod.rhs().len() > 1)
            .map(|prod| {
                let mut rhs = prod.rhs()[1..].to_vec();
                rhs.push(tail.clone());
                Production::new(tail.clone(), rhs)
            })
            .collect();
        tail_prods.push(Production::epsilon(tail.clone()));

        let head_prods = others
            .into_iter()
            .map(|mut prod| {
                prod.append(tail.clone());
                prod
            })
            .collect();

        self.destination.set_productions(lhs.clone(), head_prods);
        self.destination.set_productions(tail, tail_prods);
    }
}
