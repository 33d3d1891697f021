extern crate wasm_bindgen;

use wasm_bindgen::prelude::*;

pub mod grammar;
pub use grammar::{Grammar, NullableSet, ParseError};

fn error_to_json(e: ParseError) -> String {
    serde_json::json!({ "error": e.to_string() }).to_string()
}

#[wasm_bindgen]
pub fn nullable_to_json(grammar: &str) -> String {
    match crate::Grammar::parse(grammar) {
        Ok(g) => g.to_nullable_output(&g.nullable_set()).to_json(),
        Err(e) => error_to_json(e),
    }
}

#[wasm_bindgen]
pub fn eliminate_epsilon_to_json(grammar: &str) -> String {
    match crate::Grammar::parse(grammar) {
        Ok(g) => g
            .without_epsilon_productions()
            .to_production_output_vec()
            .to_json(),
        Err(e) => error_to_json(e),
    }
}
