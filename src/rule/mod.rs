//! This module defines grammar rules. Each production in a context-free grammar consists of a
//! single symbol on its left-hand side and a sequence of symbols on its right-hand side.
//!
//! A production of the empty string has a right-hand side of exactly one symbol, epsilon. A
//! right-hand side is never empty.

pub mod builder;

use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::local_prelude::*;
use crate::symbol::fmt_symbol;

/// One alternative of a nonterminal.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Production<T> {
    lhs: T,
    rhs: Vec<T>,
}

impl<T: GrammarSymbol> Production<T> {
    /// Creates a new production. An empty `rhs` is turned into the epsilon production.
    pub fn new(lhs: T, rhs: impl Into<Vec<T>>) -> Self {
        let mut rhs = rhs.into();
        if rhs.is_empty() {
            rhs.push(T::epsilon());
        }
        Production { lhs, rhs }
    }

    /// Creates the production of the empty string.
    pub fn epsilon(lhs: T) -> Self {
        Production {
            lhs,
            rhs: vec![T::epsilon()],
        }
    }

    /// Returns the production's left-hand side.
    pub fn lhs(&self) -> &T {
        &self.lhs
    }

    /// Returns the production's right-hand side.
    pub fn rhs(&self) -> &[T] {
        &self.rhs[..]
    }

    /// Returns the symbols of the right-hand side, or nothing for the epsilon production.
    pub(crate) fn rhs_symbols(&self) -> &[T] {
        if self.is_empty() {
            &[]
        } else {
            &self.rhs[..]
        }
    }

    /// Checks whether this production derives the empty string directly.
    pub fn is_empty(&self) -> bool {
        self.rhs.len() == 1 && self.rhs[0].is_epsilon()
    }

    /// Checks whether the right-hand side starts with the left-hand side.
    pub fn is_imm_left_recursive(&self) -> bool {
        self.rhs.first() == Some(&self.lhs)
    }

    /// Checks whether `sym` occurs on the right-hand side.
    pub fn has(&self, sym: &T) -> bool {
        self.rhs.contains(sym)
    }

    /// Appends a symbol to the right-hand side. Appending to the epsilon production replaces
    /// epsilon.
    pub fn append(&mut self, sym: T) {
        if self.is_empty() {
            self.rhs.clear();
        }
        self.rhs.push(sym);
    }

    /// Returns `rhs[from..to]`, or the epsilon sequence if that range is empty.
    pub fn substring(&self, from: usize, to: usize) -> Result<Vec<T>, T> {
        if from > to || to > self.rhs.len() {
            return Err(GrammarError::OutOfRange {
                from,
                to,
                len: self.rhs.len(),
            });
        }
        let mut sub = self.rhs[from..to].to_vec();
        if sub.is_empty() {
            sub.push(T::epsilon());
        }
        Ok(sub)
    }

    /// Returns the right-hand side without its first `n` symbols, or the epsilon sequence if
    /// nothing remains.
    pub fn drop(&self, n: usize) -> Result<Vec<T>, T> {
        self.substring(n, self.rhs.len())
    }

    /// Removes the first `n` symbols of the right-hand side.
    pub fn remove_first(&mut self, n: usize) -> Result<(), T> {
        self.rhs = self.drop(n)?;
        Ok(())
    }

    /// Returns the symbols after the first occurrence of `sym`. The result is empty if `sym`
    /// is the last symbol or does not occur at all.
    pub fn trail(&self, sym: &T) -> Vec<T> {
        match self.rhs.iter().position(|elem| elem == sym) {
            Some(pos) => self.rhs[pos + 1..].to_vec(),
            None => vec![],
        }
    }

    /// Replaces the first occurrence of `other`'s left-hand side with `other`'s right-hand
    /// side. Does nothing if there is no such occurrence.
    pub fn substitute(&mut self, other: &Production<T>) {
        if let Some(pos) = self.rhs.iter().position(|elem| *elem == other.lhs) {
            let tail = self.rhs.split_off(pos + 1);
            self.rhs.pop();
            self.rhs.extend(other.rhs_symbols().iter().cloned());
            self.rhs.extend(tail);
            if self.rhs.is_empty() {
                self.rhs.push(T::epsilon());
            }
        }
    }
}

/// Displays a right-hand side. Every symbol is followed by a space.
pub(crate) struct RhsDisplay<'a, T>(pub(crate) &'a [T]);

impl<'a, T> fmt::Display for RhsDisplay<'a, T>
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

impl<T> fmt::Display for Production<T>
where
    T: GrammarSymbol + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.lhs, RhsDisplay(&self.rhs[..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prod(lhs: &'static str, rhs: &[&'static str]) -> Production<&'static str> {
        Production::new(lhs, rhs.to_vec())
    }

    #[test]
    fn test_empty_rhs_is_epsilon() {
        let p = prod("C", &[]);
        assert_eq!(p.rhs(), &[""]);
        assert!(p.is_empty());
        assert_eq!(p, Production::epsilon("C"));
        assert!(!prod("C", &["c"]).is_empty());
    }

    #[test]
    fn test_imm_left_recursive() {
        assert!(prod("D", &["D", "d"]).is_imm_left_recursive());
        assert!(!prod("D", &["d", "D"]).is_imm_left_recursive());
        assert!(!prod("D", &[]).is_imm_left_recursive());
    }

    #[test]
    fn test_drop_and_substring() {
        let p = prod("A", &["g", "C", "D", "E"]);
        assert_eq!(p.drop(1), Ok(vec!["C", "D", "E"]));
        assert_eq!(p.drop(4), Ok(vec![""]));
        assert_eq!(p.substring(1, 3), Ok(vec!["C", "D"]));
        assert_eq!(p.substring(2, 2), Ok(vec![""]));
        assert_eq!(
            p.drop(5),
            Err(GrammarError::OutOfRange {
                from: 5,
                to: 4,
                len: 4
            })
        );
        assert!(p.substring(3, 2).is_err());
        assert!(p.substring(0, 5).is_err());
    }

    #[test]
    fn test_remove_first() {
        let mut p = prod("A", &["g", "B"]);
        p.remove_first(1).unwrap();
        assert_eq!(p.rhs(), &["B"]);
        p.remove_first(1).unwrap();
        assert!(p.is_empty());
        assert!(p.remove_first(2).is_err());
    }

    #[test]
    fn test_trail() {
        let p = prod("S", &["A", ":=", "T", "A"]);
        assert_eq!(p.trail(&"A"), vec![":=", "T", "A"]);
        assert_eq!(p.trail(&"T"), vec!["A"]);
        assert_eq!(p.trail(&"x"), Vec::<&str>::new());
        assert_eq!(prod("B", &["b", "C"]).trail(&"C"), Vec::<&str>::new());
    }

    #[test]
    fn test_append() {
        let mut p = prod("A", &["a"]);
        p.append("N");
        assert_eq!(p.rhs(), &["a", "N"]);
        let mut e = Production::epsilon("A");
        e.append("N");
        assert_eq!(e.rhs(), &["N"]);
        assert!(p.has(&"N"));
        assert!(!p.has(&"b"));
    }

    #[test]
    fn test_substitute() {
        let mut p = prod("S", &["A", ":=", "A"]);
        p.substitute(&prod("A", &["x", "y"]));
        assert_eq!(p.rhs(), &["x", "y", ":=", "A"]);
        p.substitute(&prod("Z", &["z"]));
        assert_eq!(p.rhs(), &["x", "y", ":=", "A"]);
        p.substitute(&prod("A", &[]));
        assert_eq!(p.rhs(), &["x", "y", ":="]);

        let mut q = prod("B", &["C"]);
        q.substitute(&prod("C", &[]));
        assert!(q.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(prod("A", &["g", "N0"]).to_string(), "A -> g N0 ");
        assert_eq!(prod("C", &[]).to_string(), "C -> <e> ");
    }
}
