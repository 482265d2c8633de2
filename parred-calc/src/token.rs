//! # Calculator Symbols
//!
//! The symbol model for the arithmetic grammar: [`CalcSym`] is the value
//! stored in the engine buffer, [`CalcTag`] its runtime kind.
//!
//! A folded expression is a `Num` again — the same tag as a numeric literal
//! from the tokenizer — so reduction results re-match operand slots and
//! chains like `1 + 2 + 3` collapse over successive rounds.

use parred::{Symbol, SymbolTag};

/// Runtime kind of a calculator symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcTag {
    /// A number: either a literal or a reduced sub-expression.
    Num,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl SymbolTag for CalcTag {}

/// A symbol in the calculator's working buffer.
///
/// Every variant except the payload of `Num` is a terminal produced by the
/// tokenizer; `Num` doubles as the non-terminal carrying a folded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcSym {
    /// Integer literal or reduced expression value.
    Num(i64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl Symbol for CalcSym {
    type Tag = CalcTag;

    fn tag(&self) -> CalcTag {
        match self {
            CalcSym::Num(_) => CalcTag::Num,
            CalcSym::Plus => CalcTag::Plus,
            CalcSym::Minus => CalcTag::Minus,
            CalcSym::Star => CalcTag::Star,
            CalcSym::Slash => CalcTag::Slash,
            CalcSym::LParen => CalcTag::LParen,
            CalcSym::RParen => CalcTag::RParen,
        }
    }
}
