//! Sources of fresh symbols for nonterminals synthesized by grammar transformations.

/// A generator of fresh symbols.
///
/// Every call must return a symbol that does not occur in the grammar being transformed, and
/// that was not returned before. This is not checked. A generator that breaks this rule
/// silently produces a corrupted grammar.
///
/// Implemented for all closures of the form `FnMut() -> T`.
pub trait SymbolGenerator<T> {
    /// Generates a new unique symbol.
    fn next_sym(&mut self) -> T;
}

impl<T, F> SymbolGenerator<T> for F
where
    F: FnMut() -> T,
{
    fn next_sym(&mut self) -> T {
        self()
    }
}

/// A source of string symbols of the form `{prefix}{id}`, with consecutive ids starting at
/// zero.
#[derive(Clone, Debug)]
pub struct SymbolSource {
    prefix: String,
    next_id: u32,
}

impl Default for SymbolSource {
    fn default() -> Self {
        Self::with_prefix("N")
    }
}

impl SymbolSource {
    /// Creates a source of symbols `N0`, `N1`, `N2`, ...
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source of symbols with the given prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        SymbolSource {
            prefix: prefix.into(),
            next_id: 0,
        }
    }

    /// Generates a new unique symbol.
    pub fn next_sym(&mut self) -> String {
        let ret = format!("{}{}", self.prefix, self.next_id);
        self.next_id += 1;
        ret
    }

    /// Returns the number of symbols generated so far.
    pub fn num_syms(&self) -> usize {
        self.next_id as usize
    }

    /// Returns an iterator that generates symbols.
    pub fn generate(&mut self) -> Generate {
        Generate { source: self }
    }
}

impl SymbolGenerator<String> for SymbolSource {
    fn next_sym(&mut self) -> String {
        SymbolSource::next_sym(self)
    }
}

/// Iterator for generating symbols.
pub struct Generate<'a> {
    source: &'a mut SymbolSource,
}

impl<'a> Iterator for Generate<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.source.next_sym())
    }
}
