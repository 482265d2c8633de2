//! # Calculator Grammar Rules
//!
//! The five productions of the arithmetic grammar, plus [`calc_rules`],
//! which groups them into precedence levels: parentheses and the
//! multiplicative operators reduce before the additive ones, and within a
//! level the engine's left-most sweep gives left associativity.

use crate::error::CalcError;
use crate::token::{CalcSym, CalcTag};
use anyhow::Result;
use parred::{Rule, RuleSet};

/// `Num '+' Num -> Num`
#[derive(Debug)]
pub struct Add;

impl Rule<CalcSym> for Add {
    fn label(&self) -> &'static str {
        "add"
    }

    fn pattern(&self) -> &[CalcTag] {
        &[CalcTag::Num, CalcTag::Plus, CalcTag::Num]
    }

    fn reduce(&self, window: Vec<CalcSym>) -> Result<CalcSym> {
        let (CalcSym::Num(lhs), CalcSym::Num(rhs)) = (&window[0], &window[2]) else {
            unreachable!("pattern guarantees numeric operands");
        };
        Ok(CalcSym::Num(lhs + rhs))
    }
}

/// `Num '-' Num -> Num`
#[derive(Debug)]
pub struct Sub;

impl Rule<CalcSym> for Sub {
    fn label(&self) -> &'static str {
        "sub"
    }

    fn pattern(&self) -> &[CalcTag] {
        &[CalcTag::Num, CalcTag::Minus, CalcTag::Num]
    }

    fn reduce(&self, window: Vec<CalcSym>) -> Result<CalcSym> {
        let (CalcSym::Num(lhs), CalcSym::Num(rhs)) = (&window[0], &window[2]) else {
            unreachable!("pattern guarantees numeric operands");
        };
        Ok(CalcSym::Num(lhs - rhs))
    }
}

/// `Num '*' Num -> Num`
#[derive(Debug)]
pub struct Mul;

impl Rule<CalcSym> for Mul {
    fn label(&self) -> &'static str {
        "mul"
    }

    fn pattern(&self) -> &[CalcTag] {
        &[CalcTag::Num, CalcTag::Star, CalcTag::Num]
    }

    fn reduce(&self, window: Vec<CalcSym>) -> Result<CalcSym> {
        let (CalcSym::Num(lhs), CalcSym::Num(rhs)) = (&window[0], &window[2]) else {
            unreachable!("pattern guarantees numeric operands");
        };
        Ok(CalcSym::Num(lhs * rhs))
    }
}

/// `Num '/' Num -> Num`, failing on a zero divisor.
#[derive(Debug)]
pub struct Div;

impl Rule<CalcSym> for Div {
    fn label(&self) -> &'static str {
        "div"
    }

    fn pattern(&self) -> &[CalcTag] {
        &[CalcTag::Num, CalcTag::Slash, CalcTag::Num]
    }

    fn reduce(&self, window: Vec<CalcSym>) -> Result<CalcSym> {
        let (CalcSym::Num(lhs), CalcSym::Num(rhs)) = (&window[0], &window[2]) else {
            unreachable!("pattern guarantees numeric operands");
        };
        if *rhs == 0 {
            return Err(CalcError::DivideByZero.into());
        }
        Ok(CalcSym::Num(lhs / rhs))
    }
}

/// `'(' Num ')' -> Num`
#[derive(Debug)]
pub struct Parens;

impl Rule<CalcSym> for Parens {
    fn label(&self) -> &'static str {
        "parens"
    }

    fn pattern(&self) -> &[CalcTag] {
        &[CalcTag::LParen, CalcTag::Num, CalcTag::RParen]
    }

    fn reduce(&self, mut window: Vec<CalcSym>) -> Result<CalcSym> {
        Ok(window.swap_remove(1))
    }
}

/// Builds the calculator rule set: parentheses and multiplicative operators
/// in the top priority level, additive operators below them.
pub fn calc_rules() -> RuleSet<CalcSym> {
    RuleSet::with_precedence(
        vec![
            Box::new(Parens) as Box<dyn Rule<CalcSym>>,
            Box::new(Mul),
            Box::new(Div),
            Box::new(Add),
            Box::new(Sub),
        ],
        &[&["parens", "mul", "div"], &["add", "sub"]],
    )
}
