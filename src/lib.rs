//! Infix to postfix (Reverse Polish) conversion.
//!
//! Operands are single letters or decimal digits, operators are `+ - * / ^`
//! and `(`/`)` group. `^` is right-associative, everything else is
//! left-associative.
//!
//! ```
//! assert_eq!(postfix::convert("a+b*(c^d-e)^(f+g*h)-i"), "abcd^e-fgh*+^*+i-");
//! ```

mod error;
pub mod syntax;

pub use error::{ErrorKind, PResult};
pub use syntax::Strictness;

use syntax::Converter;

/// Converts `expression` leniently: unknown characters are dropped and
/// unbalanced parentheses are unwound without complaint.
pub fn convert(expression: &str) -> String {
    match Converter::new(expression).convert() {
        Ok(postfix) => postfix,
        Err(why) => unreachable!("lenient conversion failed: {why}"),
    }
}

pub fn convert_with(expression: &str, strictness: Strictness) -> PResult<String> {
    Converter::with_strictness(expression, strictness).convert()
}
