//! # Calculator Error Type
//!
//! [`CalcError`] is the unified error enum for the calculator pipeline,
//! covering tokenization, numeric conversion, and evaluation failures.
//! Conversions from underlying error types are derived with `#[from]` so
//! call sites can propagate with `?`.

use smartstring::alias::String;
use thiserror::Error;

/// All errors the calculator frontend can produce.
///
/// Engine-level failures (an unimplemented rule, the reduction loop guard)
/// are not wrapped here; they propagate through `anyhow` from the `parred`
/// engine unchanged.
#[derive(Debug, Error)]
pub enum CalcError {
    /// An integer literal could not be parsed from its text.
    #[error("unable to parse number: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    /// The tokenizer hit input it does not recognize.
    #[error("unexpected input {fragment:?} at byte {offset}")]
    Lex {
        /// The offending slice of the input.
        fragment: String,
        /// Byte offset of the fragment within the input.
        offset: usize,
    },

    /// Division by zero during reduction.
    #[error("division by zero")]
    DivideByZero,

    /// The input did not fold down to a single number.
    ///
    /// The engine reports no "parse failed" signal of its own; an
    /// unreducible leftover is detected here by checking the result shape.
    #[error("input did not reduce to a single value ({leftover} symbols remain)")]
    Incomplete {
        /// Number of symbols left in the buffer.
        leftover: usize,
    },
}
