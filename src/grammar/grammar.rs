use std::collections::HashMap;

use super::EPSILON;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    NonTerminal(String),
    Terminal(String),
    Epsilon,
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::NonTerminal(name) | Symbol::Terminal(name) => name.as_str(),
            Symbol::Epsilon => EPSILON,
        }
    }
}

/// Right-hand side of a rule. `[Symbol::Epsilon]` denotes the empty string.
pub type Production = Vec<Symbol>;

pub fn is_epsilon(production: &[Symbol]) -> bool {
    matches!(production, [Symbol::Epsilon])
}

#[derive(Debug, Clone)]
pub struct NonTerminal {
    pub name: String,
    pub productions: Vec<Production>,
}

impl NonTerminal {
    pub fn new(name: String) -> Self {
        Self {
            name,
            productions: Vec::new(),
        }
    }

    /// Adds `production` unless an identical one is already present.
    pub fn add_production(&mut self, production: Production) -> bool {
        if self.productions.contains(&production) {
            return false;
        }
        self.productions.push(production);
        true
    }
}

/// Heads keep their insertion order; productions of a head form a set.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    pub non_terminals: Vec<NonTerminal>,
    pub symbol_table: HashMap<String, usize>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn non_terminal_iter(&self) -> impl Iterator<Item = &NonTerminal> {
        self.non_terminals.iter()
    }

    pub fn get_symbol_index(&self, name: &str) -> Option<usize> {
        self.symbol_table.get(name).cloned()
    }

    pub fn add_non_terminal(&mut self, name: &str) -> usize {
        if let Some(idx) = self.get_symbol_index(name) {
            return idx;
        }
        let idx = self.non_terminals.len();
        self.non_terminals.push(NonTerminal::new(name.to_string()));
        self.symbol_table.insert(name.to_string(), idx);
        idx
    }

    pub fn add_production(&mut self, left: usize, right: Production) -> bool {
        self.non_terminals[left].add_production(right)
    }

    pub fn productions(&self, name: &str) -> Option<&[Production]> {
        self.get_symbol_index(name)
            .map(|idx| self.non_terminals[idx].productions.as_slice())
    }

    pub fn num_productions(&self) -> usize {
        self.non_terminals.iter().map(|nt| nt.productions.len()).sum()
    }
}

pub fn production_to_string(production: &[Symbol]) -> String {
    production.iter().map(|s| s.name()).collect()
}
