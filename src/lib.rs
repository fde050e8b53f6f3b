//! Library for preparing context-free grammars for predictive parsing. Grammars can be left
//! factored and cleared of immediate left recursion, and their FIRST and FOLLOW sets can be
//! computed.
//!
//! Grammars are generic over the symbol type. The default value of the symbol type stands for
//! the empty string (epsilon).

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, allow(missing_docs))]

pub mod error;
mod grammar;
pub mod prediction;
pub mod rule;
pub mod symbol;
mod transform;

pub use crate::error::{GrammarError, Result};
pub use crate::grammar::Grammar;
pub use crate::prediction::{FirstSets, FollowSets, PerSymbolSets, PredictSets, SetDisplay};
pub use crate::rule::builder::RuleBuilder;
pub use crate::rule::Production;
pub use crate::symbol::source::{SymbolGenerator, SymbolSource};
pub use crate::symbol::GrammarSymbol;

pub(crate) mod local_prelude {
    pub use crate::error::{GrammarError, Result};
    pub use crate::grammar::Grammar;
    pub use crate::rule::Production;
    pub use crate::symbol::source::SymbolGenerator;
    pub use crate::symbol::GrammarSymbol;
}
