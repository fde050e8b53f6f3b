#![allow(dead_code)]

use std::collections::BTreeSet;

use cfg_ll::Grammar;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A generator that yields the given names in order.
pub fn fresh_names(names: &'static [&'static str]) -> impl FnMut() -> &'static str {
    let mut iter = names.iter().copied();
    move || iter.next().expect("generator ran out of names")
}

pub fn set(elems: &[&'static str]) -> BTreeSet<&'static str> {
    elems.iter().copied().collect()
}

pub fn alternatives<'a>(grammar: &Grammar<&'a str>, nonterminal: &'a str) -> Vec<Vec<&'a str>> {
    grammar
        .productions(&nonterminal)
        .iter()
        .map(|prod| prod.rhs().to_vec())
        .collect()
}

pub fn assert_alternatives(grammar: &Grammar<&str>, nonterminal: &str, expected: &[&[&str]]) {
    let expected: Vec<Vec<&str>> = expected.iter().map(|rhs| rhs.to_vec()).collect();
    assert_eq!(
        alternatives(grammar, nonterminal),
        expected,
        "alternatives of {} differ in\n{}",
        nonterminal,
        grammar
    );
}

/// Checks the invariants every grammar must keep.
pub fn assert_well_formed<T>(grammar: &Grammar<T>)
where
    T: cfg_ll::GrammarSymbol,
{
    let terminals = grammar.terminals();
    let nonterminals = grammar.nonterminals();
    assert!(terminals.is_disjoint(nonterminals));
    let union: BTreeSet<T> = terminals.union(nonterminals).cloned().collect();
    assert_eq!(&union, grammar.symbols());
    assert!(grammar.is_nonterminal(grammar.start()));
    for (lhs, prods) in grammar.rules() {
        assert!(grammar.is_nonterminal(lhs));
        assert!(!prods.is_empty());
        for prod in prods {
            assert_eq!(prod.lhs(), lhs);
            assert!(!prod.rhs().is_empty());
            for sym in prod.rhs() {
                assert!(prod.is_empty() || grammar.symbols().contains(sym));
            }
        }
    }
}
