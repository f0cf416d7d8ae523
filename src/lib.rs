pub mod ast;
pub mod config;
pub mod error;
pub mod lexer;
pub mod value;

pub use config::Config;
pub use error::{Error, LexError, SyntaxError};
pub use value::Number;

use ast::{Evaluator, Parser};
use log::debug;
use rayon::prelude::*;

/// Lexes, parses and evaluates `text`, stopping at the first error.
pub fn run(text: &str, source_name: &str) -> Result<Number, Error> {
    run_with(text, &Config::new(source_name))
}

pub fn run_with(text: &str, config: &Config) -> Result<Number, Error> {
    let tokens = lexer::lex(text, &config.source_name)?;
    let ast = Parser::new(&tokens, &config.source_name)
        .with_max_depth(config.max_depth)
        .parse()?;
    let result = Evaluator::new().evaluate(&ast);
    debug!("{} => {}", preview(text), result);
    Ok(result)
}

const PREVIEW_CHARS: usize = 64;

/// First `PREVIEW_CHARS` characters of `text` for log lines.
fn preview(text: &str) -> String {
    let text = text.trim_end();
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}... ({} chars)", &text[..cut], text.chars().count()),
        None => text.to_string(),
    }
}

/// Evaluates independent inputs in parallel. Results keep the input order.
pub fn run_batch(inputs: &[&str], config: &Config) -> Vec<Result<Number, Error>> {
    inputs
        .par_iter()
        .map(|text| run_with(text, config))
        .collect()
}
