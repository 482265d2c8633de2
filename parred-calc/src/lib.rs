//! # parred-calc
//!
//! A small demonstration crate built on **parred**, providing a complete,
//! minimal example of a tokenizer–reduction pipeline for integer
//! arithmetic.
//!
//! Expressions are lexed into terminal symbols, then folded in place by the
//! engine: every reduction rewrites an operator window into its numeric
//! result, so `1 + 2 * 3` collapses to a single `Num(7)` over successive
//! rounds. Precedence comes entirely from the rule set's levels;
//! associativity comes from the engine's left-most sweep.
//!
//! ## Overview
//!
//! - [`token`] — the symbol model ([`CalcSym`], [`CalcTag`]).
//! - [`lexer`] — a `logos`-based tokenizer ([`tokenize`]).
//! - [`rules`] — the grammar productions and the precedence grouping
//!   ([`calc_rules`]).
//! - [`error`] — the unified [`CalcError`] enum.
//!
//! The grammar is deliberately tiny: binary `+ - * /` and parentheses over
//! integer literals. There is no unary minus; `-3` on its own does not
//! reduce and surfaces as [`CalcError::Incomplete`].
//!
//! ## Example
//!
//! ```rust
//! use parred_calc::CalcParser;
//!
//! let calc = CalcParser::new();
//! assert_eq!(calc.eval("1 + 2 * 3").unwrap(), 7);
//! assert_eq!(calc.eval("(1 + 2) * 3").unwrap(), 9);
//! assert_eq!(calc.eval("10 / 2 - 3").unwrap(), 2);
//! ```

pub mod error;
pub mod lexer;
pub mod rules;
pub mod token;

pub use error::CalcError;
pub use lexer::tokenize;
pub use rules::calc_rules;
pub use token::{CalcSym, CalcTag};

use anyhow::Result;
use parred::Parser;

/// The calculator facade: a tokenizer plus a configured reduction engine.
///
/// The underlying [`Parser`] is immutable after construction and may be
/// reused for any number of evaluations.
pub struct CalcParser {
    parser: Parser<CalcSym>,
}

impl CalcParser {
    /// Creates a calculator with the standard rule set from
    /// [`calc_rules`].
    pub fn new() -> Self {
        Self {
            parser: Parser::new(calc_rules()),
        }
    }

    /// Tokenizes and reduces `input`, returning whatever symbol sequence
    /// the engine settles on. A partially reduced sequence is a successful
    /// result here; use [`eval`](CalcParser::eval) to insist on a single
    /// number.
    pub fn parse(&self, input: &str) -> Result<Vec<CalcSym>> {
        let tokens = tokenize(input)?;
        log::debug!("parse {:?}: {} tokens", input, tokens.len());
        self.parser.parse(tokens)
    }

    /// Evaluates `input` down to a single integer.
    ///
    /// Fails with [`CalcError::Incomplete`] when the expression does not
    /// fold to exactly one number.
    pub fn eval(&self, input: &str) -> Result<i64> {
        let out = self.parse(input)?;
        match out.as_slice() {
            [CalcSym::Num(value)] => Ok(*value),
            rest => Err(CalcError::Incomplete {
                leftover: rest.len(),
            }
            .into()),
        }
    }
}

impl Default for CalcParser {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot convenience wrapper around [`CalcParser::eval`].
pub fn eval(input: &str) -> Result<i64> {
    CalcParser::new().eval(input)
}
