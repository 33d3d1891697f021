use log::debug;

use super::{
    grammar::{Production, Symbol},
    Grammar, EPSILON, EPSILON_ALIASES,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Line {0}: too many \"→\"")]
    TooManyArrows(usize),
    #[error("Line {0}: empty left side")]
    EmptyLeft(usize),
    #[error("Line {line}: left side \"{left}\" is not a single non-terminal")]
    InvalidLeft { line: usize, left: String },
    #[error("Line {0}: cannot find left side")]
    MissingLeft(usize),
    #[error("Line {0}: empty alternative")]
    EmptyAlternative(usize),
    #[error("Line {0}: ε may not be combined with other symbols")]
    EpsilonNotAlone(usize),
    #[error("Line {line}: invalid symbol '{symbol}'")]
    InvalidSymbol { line: usize, symbol: char },
}

fn is_epsilon_str(s: &str) -> bool {
    s == EPSILON || EPSILON_ALIASES.contains(&s)
}

fn parse_left(line: usize, left: &str) -> Result<&str, ParseError> {
    if left.is_empty() {
        return Err(ParseError::EmptyLeft(line));
    }
    let mut chars = left.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_uppercase() => Ok(left),
        _ => Err(ParseError::InvalidLeft {
            line,
            left: left.to_string(),
        }),
    }
}

fn parse_symbol(line: usize, c: char) -> Result<Symbol, ParseError> {
    let mut buf = [0; 4];
    // ε is itself a lowercase letter, so it has to be ruled out first
    if is_epsilon_str(c.encode_utf8(&mut buf)) {
        Err(ParseError::EpsilonNotAlone(line))
    } else if c.is_uppercase() {
        Ok(Symbol::NonTerminal(c.to_string()))
    } else if c.is_lowercase() || c.is_ascii_digit() {
        Ok(Symbol::Terminal(c.to_string()))
    } else {
        Err(ParseError::InvalidSymbol { line, symbol: c })
    }
}

fn parse_alternative(line: usize, right: &str) -> Result<Production, ParseError> {
    let right = right.trim();
    if right.is_empty() {
        return Err(ParseError::EmptyAlternative(line));
    }
    if is_epsilon_str(right) {
        return Ok(vec![Symbol::Epsilon]);
    }
    right.chars().map(|c| parse_symbol(line, c)).collect()
}

impl Grammar {
    /// Reads one rule per line, `S → AB|a|ε`. `->` is accepted for the arrow
    /// and a line starting with `|` continues the previous rule.
    pub fn parse(grammar: &str) -> Result<Self, ParseError> {
        let mut g = Self::new();

        let mut previous_left: Option<usize> = None;
        for (i, line) in grammar.lines().enumerate() {
            let line_no = i + 1;
            if line.chars().all(|c| c.is_whitespace()) {
                continue;
            }
            let line = line.replace("->", "→");
            let parts: Vec<&str> = line.split('→').collect();
            if parts.len() > 2 {
                return Err(ParseError::TooManyArrows(line_no));
            }
            let (left, rights): (usize, &str) = if parts.len() == 2 {
                let left_str = parse_left(line_no, parts[0].trim())?;
                (g.add_non_terminal(left_str), parts[1])
            } else {
                match (previous_left, parts[0].trim().strip_prefix('|')) {
                    (Some(idx), Some(rest)) => (idx, rest),
                    _ => return Err(ParseError::MissingLeft(line_no)),
                }
            };

            previous_left = Some(left);

            for right in rights.split('|') {
                let production = parse_alternative(line_no, right)?;
                g.add_production(left, production);
            }
        }

        debug!(
            "parsed {} non-terminals with {} productions",
            g.non_terminals.len(),
            g.num_productions()
        );
        Ok(g)
    }
}
