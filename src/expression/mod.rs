//! The zone equation language: a closed boolean/arithmetic grammar over the
//! two free variables `x` and `y` (field inches).
//!
//! Equations are tokenized against a strict allow-list, parsed into a
//! two-sorted AST (arithmetic vs boolean, enforced at parse time), and
//! interpreted by a dedicated evaluator. No host-language facility is ever
//! exposed to user input.

pub mod ast;
pub mod error;

pub(crate) mod eval;
pub(crate) mod lexer;
pub(crate) mod parser;

use crate::expression::ast::BoolExpr;
use crate::expression::error::{EvalError, ParseError};

/// A successfully parsed zone equation, ready for repeated evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpr {
    root: BoolExpr,
}

impl CompiledExpr {
    /// Membership test at `(x, y)` in field inches.
    pub fn evaluate(&self, x: f64, y: f64) -> Result<bool, EvalError> {
        eval::eval_bool(&self.root, x, y)
    }

    /// The AST root, for callers that want to walk or pretty-print it.
    pub fn root(&self) -> &BoolExpr {
        &self.root
    }
}

/// Parse an equation string into a [`CompiledExpr`].
///
/// Parsing the same string always yields an AST that evaluates identically;
/// malformed input surfaces as a [`ParseError`] value, never a panic.
pub fn parse(equation: &str) -> Result<CompiledExpr, ParseError> {
    let root = parser::parse_bool_expr(equation)?;
    Ok(CompiledExpr { root })
}
