use std::collections::HashSet;

use log::{debug, trace};

use super::{grammar::Symbol, Grammar};

/// Names of the non-terminals that derive ε.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NullableSet {
    names: HashSet<String>,
}

impl NullableSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Only non-terminals can be nullable.
    pub fn contains_symbol(&self, symbol: &Symbol) -> bool {
        match symbol {
            Symbol::NonTerminal(name) => self.contains(name),
            _ => false,
        }
    }

    pub fn insert(&mut self, name: String) -> bool {
        self.names.insert(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }
}

impl<S: Into<String>> FromIterator<S> for NullableSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A production witnesses nullability of its head when it is ε or made only
/// of non-terminals already known to be nullable.
fn is_nullable_witness(production: &[Symbol], nullable: &NullableSet) -> bool {
    production.iter().all(|symbol| match symbol {
        Symbol::NonTerminal(name) => nullable.contains(name),
        Symbol::Terminal(_) => false,
        Symbol::Epsilon => true,
    })
}

impl Grammar {
    /// Least fixed point of the nullable relation.
    pub fn nullable_set(&self) -> NullableSet {
        let mut nullable = NullableSet::new();
        let mut pass = 0;
        let mut changed = true;
        while changed {
            changed = false;
            pass += 1;
            for nt in self.non_terminal_iter() {
                if nullable.contains(&nt.name) {
                    continue;
                }
                if nt
                    .productions
                    .iter()
                    .any(|production| is_nullable_witness(production, &nullable))
                {
                    trace!("pass {}: {} is nullable", pass, nt.name);
                    nullable.insert(nt.name.clone());
                    changed = true;
                }
            }
        }
        debug!(
            "nullable set settled after {} passes with {} of {} non-terminals",
            pass,
            nullable.len(),
            self.non_terminals.len()
        );
        nullable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nullable_names(grammar: &str) -> Vec<String> {
        let mut names: Vec<String> = Grammar::parse(grammar)
            .unwrap()
            .nullable_set()
            .iter()
            .map(String::from)
            .collect();
        names.sort();
        names
    }

    #[test]
    fn direct_epsilon_productions() {
        assert_eq!(nullable_names("S → aB\nA → a|ε\nB → b|ε"), vec!["A", "B"]);
        // S only has nullable symbols on its right-hand side
        assert_eq!(
            nullable_names("S → AB\nA → a|ε\nB → b|ε"),
            vec!["A", "B", "S"]
        );
    }

    #[test]
    fn chains_need_several_passes() {
        // each head only becomes nullable after the one it refers to
        assert_eq!(
            nullable_names("A → B\nB → C\nC → D\nD → ε"),
            vec!["A", "B", "C", "D"]
        );
        assert_eq!(
            nullable_names("S → AB\nA → BB\nB → ε|b"),
            vec!["A", "B", "S"]
        );
    }

    #[test]
    fn terminals_block_nullability() {
        assert_eq!(nullable_names("S → aA\nA → ε"), vec!["A"]);
        assert_eq!(nullable_names("S → Aa|A0\nA → ε"), vec!["A"]);
    }

    #[test]
    fn no_epsilon_means_empty_set() {
        assert!(Grammar::parse("S → aSb|ab").unwrap().nullable_set().is_empty());
        assert!(Grammar::new().nullable_set().is_empty());
    }

    #[test]
    fn self_reference_and_undefined_heads() {
        assert_eq!(nullable_names("S → SS|ε"), vec!["S"]);
        assert!(nullable_names("S → S").is_empty());
        // X is never defined as a head, so it cannot be nullable
        assert!(nullable_names("S → X").is_empty());
    }

    #[test]
    fn from_iter_and_symbol_lookup() {
        let set: NullableSet = ["A", "B"].into_iter().collect();
        assert!(set.contains_symbol(&Symbol::NonTerminal("A".to_string())));
        assert!(!set.contains_symbol(&Symbol::Terminal("A".to_string())));
        assert!(!set.contains_symbol(&Symbol::Epsilon));
        assert_eq!(set.len(), 2);
    }
}
