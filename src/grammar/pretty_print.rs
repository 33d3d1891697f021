use crowbook_text_processing::escape;
use serde::Serialize;

use super::{grammar::production_to_string, Grammar, NullableSet, EPSILON};

#[derive(Debug, Clone, Serialize)]
pub struct ProductionOutput<'a> {
    pub left: &'a str,
    pub rights: Vec<String>,
}

impl ProductionOutput<'_> {
    pub fn to_plaintext(&self, left_width: usize) -> String {
        if self.rights.is_empty() {
            return format!("{:>width$} →", self.left, width = left_width);
        }
        format!(
            "{:>width$} → {}",
            self.left,
            self.rights.join(" | "),
            width = left_width
        )
    }

    pub fn to_latex(&self) -> String {
        let right = if self.rights.is_empty() {
            r"\emptyset".to_string()
        } else {
            self.rights
                .iter()
                .map(|right| escape::tex(right.as_str()).to_string())
                .collect::<Vec<_>>()
                .join(r" \mid ")
        };

        format!(r"{} & \rightarrow & {}", escape::tex(self.left), right)
            .replace(EPSILON, r"\epsilon")
    }
}

#[derive(Debug, Serialize)]
pub struct ProductionOutputVec<'a> {
    productions: Vec<ProductionOutput<'a>>,
}

impl ProductionOutputVec<'_> {
    pub fn to_plaintext(&self) -> String {
        let left_max_len = self
            .productions
            .iter()
            .map(|p| p.left.chars().count())
            .max()
            .unwrap_or(0);
        self.productions
            .iter()
            .map(|s| s.to_plaintext(left_max_len))
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        let rows = self
            .productions
            .iter()
            .map(|s| s.to_latex())
            .collect::<Vec<String>>()
            .join("\\\\\n");
        format!("\\[\\begin{{array}}{{cll}}\n{}\n\\end{{array}}\\]", rows)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

impl Grammar {
    pub fn to_production_output_vec(&self) -> ProductionOutputVec {
        let productions = self
            .non_terminal_iter()
            .map(|nt| ProductionOutput {
                left: nt.name.as_str(),
                rights: nt
                    .productions
                    .iter()
                    .map(|p| production_to_string(p))
                    .collect(),
            })
            .collect();
        ProductionOutputVec { productions }
    }
}

#[derive(Debug, Serialize)]
pub struct NullableOutput<'a> {
    nullable: Vec<&'a str>,
}

impl NullableOutput<'_> {
    pub fn to_plaintext(&self) -> String {
        format!("nullable: {{{}}}", self.nullable.join(", "))
    }

    pub fn to_latex(&self) -> String {
        let names = self
            .nullable
            .iter()
            .map(|s| escape::tex(*s))
            .collect::<Vec<_>>()
            .join(", ");
        format!(r"\[\mathit{{Nullable}} = \{{{}\}}\]", names)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

impl Grammar {
    /// Lists the members of `nullable` in head order.
    pub fn to_nullable_output<'a>(&'a self, nullable: &NullableSet) -> NullableOutput<'a> {
        NullableOutput {
            nullable: self
                .non_terminal_iter()
                .filter(|nt| nullable.contains(&nt.name))
                .map(|nt| nt.name.as_str())
                .collect(),
        }
    }
}
