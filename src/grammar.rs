//! Definitions of the context-free grammar type.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use log::debug;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::local_prelude::*;
use crate::rule::builder::RuleBuilder;
use crate::rule::RhsDisplay;

/// Context-free grammar type.
///
/// A grammar is a value. Transformations leave the receiver untouched and return a new
/// grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serialize",
    serde(bound(
        serialize = "T: Serialize",
        deserialize = "T: Deserialize<'de> + Ord"
    ))
)]
pub struct Grammar<T> {
    /// The start symbol.
    start: T,
    nonterminals: BTreeSet<T>,
    /// Always equal to `symbols - nonterminals`.
    terminals: BTreeSet<T>,
    symbols: BTreeSet<T>,
    /// Alternatives of every nonterminal that has at least one.
    rules: BTreeMap<T, Vec<Production<T>>>,
}

impl<T: GrammarSymbol> Grammar<T> {
    /// Creates a grammar from a list of rules. Each rule is a nonterminal and a list of its
    /// alternatives. An empty alternative stands for the empty string.
    ///
    /// A nonterminal may appear in more than one rule. Its alternatives are concatenated.
    pub fn new<I, A>(start: T, rule_list: I) -> Self
    where
        I: IntoIterator<Item = (T, A)>,
        A: IntoIterator<Item = Vec<T>>,
    {
        let mut grammar = Grammar {
            start: start.clone(),
            nonterminals: BTreeSet::new(),
            terminals: BTreeSet::new(),
            symbols: BTreeSet::new(),
            rules: BTreeMap::new(),
        };
        grammar.add_nonterminal(start);

        for (nonterminal, alternatives) in rule_list {
            grammar.add_nonterminal(nonterminal.clone());
            for rhs in alternatives {
                for sym in &rhs {
                    if !sym.is_epsilon() {
                        grammar.symbols.insert(sym.clone());
                    }
                }
                grammar.add_production(Production::new(nonterminal.clone(), rhs));
            }
        }

        // Terminals are known only once every rule is registered.
        grammar.terminals = grammar
            .symbols
            .difference(&grammar.nonterminals)
            .cloned()
            .collect();

        debug!(
            "grammar with {} terminals, {} nonterminals and {} productions",
            grammar.terminals.len(),
            grammar.nonterminals.len(),
            grammar.rules.values().map(Vec::len).sum::<usize>()
        );
        grammar
    }

    /// Starts building a grammar with the given start symbol.
    pub fn builder(start: T) -> RuleBuilder<T> {
        RuleBuilder::new(start)
    }

    /// Registers a nonterminal, typically one synthesized by a transformation.
    pub fn add_nonterminal(&mut self, sym: T) -> T {
        self.terminals.remove(&sym);
        self.nonterminals.insert(sym.clone());
        self.symbols.insert(sym.clone());
        sym
    }

    pub(crate) fn add_production(&mut self, production: Production<T>) {
        self.rules
            .entry(production.lhs().clone())
            .or_default()
            .push(production);
    }

    /// Replaces the list of alternatives of a nonterminal.
    pub(crate) fn set_productions(&mut self, lhs: T, productions: Vec<Production<T>>) {
        if productions.is_empty() {
            self.rules.remove(&lhs);
        } else {
            self.rules.insert(lhs, productions);
        }
    }

    /// Returns the start symbol.
    pub fn start(&self) -> &T {
        &self.start
    }

    /// Returns the set of nonterminals.
    pub fn nonterminals(&self) -> &BTreeSet<T> {
        &self.nonterminals
    }

    /// Returns the set of terminals.
    pub fn terminals(&self) -> &BTreeSet<T> {
        &self.terminals
    }

    /// Returns the set of all symbols, excluding epsilon.
    pub fn symbols(&self) -> &BTreeSet<T> {
        &self.symbols
    }

    /// Returns the alternatives of every nonterminal that has any.
    pub fn rules(&self) -> &BTreeMap<T, Vec<Production<T>>> {
        &self.rules
    }

    /// Returns the alternatives of a nonterminal. The slice is empty for symbols without
    /// alternatives.
    pub fn productions(&self, nonterminal: &T) -> &[Production<T>] {
        self.rules
            .get(nonterminal)
            .map(|prods| &prods[..])
            .unwrap_or(&[])
    }

    /// Iterates over all productions, grouped by nonterminal.
    pub fn iter_productions(&self) -> impl Iterator<Item = &Production<T>> {
        self.rules.values().flatten()
    }

    /// Checks whether a symbol is a terminal.
    pub fn is_terminal(&self, sym: &T) -> bool {
        self.terminals.contains(sym)
    }

    /// Checks whether a symbol is a nonterminal.
    pub fn is_nonterminal(&self, sym: &T) -> bool {
        self.nonterminals.contains(sym)
    }

    /// Checks whether a nonterminal has an epsilon alternative.
    pub fn has_empty_production(&self, nonterminal: &T) -> bool {
        self.productions(nonterminal)
            .iter()
            .any(Production::is_empty)
    }

    /// Checks whether any alternative of the nonterminal is immediately left-recursive.
    pub fn is_rule_imm_left_recursive(&self, nonterminal: &T) -> bool {
        self.productions(nonterminal)
            .iter()
            .any(Production::is_imm_left_recursive)
    }

    /// Checks whether any alternative in the grammar is immediately left-recursive.
    pub fn is_imm_left_recursive(&self) -> bool {
        self.iter_productions()
            .any(Production::is_imm_left_recursive)
    }
}

impl<T> fmt::Display for Grammar<T>
where
    T: GrammarSymbol + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Terminals:\t")?;
        for terminal in &self.terminals {
            write!(f, "{} ", terminal)?;
        }
        f.write_str("\nNonterminals:\t")?;
        for nonterminal in &self.nonterminals {
            write!(f, "{} ", nonterminal)?;
        }
        f.write_str("\nRules:\n")?;
        for (lhs, prods) in &self.rules {
            write!(f, "{}\t -> \t", lhs)?;
            for (i, prod) in prods.iter().enumerate() {
                if i > 0 {
                    f.write_str("| ")?;
                }
                write!(f, "{}", RhsDisplay(prod.rhs()))?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
