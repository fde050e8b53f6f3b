//! Grammars can be built with the builder pattern.

use crate::local_prelude::*;

/// The rule builder.
///
/// ```
/// use cfg_ll::Grammar;
///
/// let grammar = Grammar::builder("S")
///     .rule("S")
///     .rhs(["A", ":=", "T"])
///     .rule("A")
///     .rhs(["x"])
///     .rhs(["y"])
///     .build();
/// assert!(grammar.is_terminal(&":="));
/// ```
#[derive(Clone, Debug)]
pub struct RuleBuilder<T> {
    start: T,
    lhs: Option<T>,
    rules: Vec<(T, Vec<Vec<T>>)>,
}

impl<T: GrammarSymbol> RuleBuilder<T> {
    /// Creates a rule builder for a grammar with the given start symbol.
    pub fn new(start: T) -> Self {
        RuleBuilder {
            start,
            lhs: None,
            rules: vec![],
        }
    }

    /// Starts building a new rule with the given LHS. The LHS becomes a nonterminal, even if
    /// no alternative is added for it.
    pub fn rule(mut self, lhs: T) -> Self {
        self.rules.push((lhs.clone(), vec![]));
        self.lhs = Some(lhs);
        self
    }

    /// Adds an alternative to the current rule. An empty `syms` adds the epsilon alternative.
    ///
    /// Alternatives added before the first call to `rule` belong to the start symbol.
    pub fn rhs<S>(mut self, syms: S) -> Self
    where
        S: AsRef<[T]>,
    {
        if self.lhs.is_none() {
            let start = self.start.clone();
            self = self.rule(start);
        }
        if let Some((_, alternatives)) = self.rules.last_mut() {
            alternatives.push(syms.as_ref().to_vec());
        }
        self
    }

    /// Finishes building and constructs the grammar.
    pub fn build(self) -> Grammar<T> {
        Grammar::new(self.start, self.rules)
    }
}
