//! Grammar rewrites that prepare a grammar for predictive parsing.
//!
//! Every rewrite works on a copy of the grammar and leaves the input untouched. Fresh
//! nonterminals are requested from a caller-supplied [`SymbolGenerator`], once per synthesized
//! nonterminal.
//!
//! [`SymbolGenerator`]: crate::SymbolGenerator

mod left_factor;
mod left_recursion;
