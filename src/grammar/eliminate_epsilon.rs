use std::collections::HashSet;

use log::{debug, trace};

use super::{
    grammar::{is_epsilon, production_to_string, Production, Symbol},
    nullable::NullableSet,
    Grammar,
};

/// Every variant of `production` obtained by dropping any subset of its
/// nullable occurrences, the unchanged production first.
///
/// Partial candidates sharing a prefix expand identically, so they are
/// deduplicated as they are built.
fn expand_nullable(production: &[Symbol], nullable: &NullableSet) -> Vec<Production> {
    production
        .iter()
        .fold(vec![Vec::new()], |candidates, symbol| {
            let droppable = nullable.contains_symbol(symbol);
            let mut seen: HashSet<Production> = HashSet::new();
            let mut next: Vec<Production> = Vec::with_capacity(candidates.len() * 2);
            for candidate in candidates {
                let mut kept = candidate.clone();
                kept.push(symbol.clone());
                if seen.insert(kept.clone()) {
                    next.push(kept);
                }
                if droppable && seen.insert(candidate.clone()) {
                    next.push(candidate);
                }
            }
            next
        })
}

impl Grammar {
    /// Rewrites every head so that no production derives ε directly.
    ///
    /// `nullable` must have been computed for this grammar. Heads are kept
    /// even when nothing is left for them.
    pub fn eliminate_epsilon(&self, nullable: &NullableSet) -> Grammar {
        let mut g = Grammar::new();
        for nt in self.non_terminal_iter() {
            let left = g.add_non_terminal(&nt.name);
            for production in nt.productions.iter().filter(|p| !is_epsilon(p)) {
                for candidate in expand_nullable(production, nullable) {
                    if candidate.is_empty() {
                        trace!(
                            "{}: dropping empty variant of {}",
                            nt.name,
                            production_to_string(production)
                        );
                        continue;
                    }
                    g.add_production(left, candidate);
                }
            }
            debug!(
                "{}: {} productions before, {} after",
                nt.name,
                nt.productions.len(),
                g.non_terminals[left].productions.len()
            );
        }
        g
    }

    pub fn without_epsilon_productions(&self) -> Grammar {
        self.eliminate_epsilon(&self.nullable_set())
    }
}
