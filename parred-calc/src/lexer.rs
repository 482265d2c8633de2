//! # Calculator Tokenizer
//!
//! A [`logos`]-derived lexer turning source text into the terminal
//! [`CalcSym`]s the engine consumes. From the engine's point of view this
//! module is the external tokenizer collaborator; the engine itself never
//! sees source text.

use crate::error::CalcError;
use crate::token::CalcSym;
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[regex(r"[0-9]+")]
    Number,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Tokenizes `input` into a terminal symbol sequence.
///
/// Whitespace is skipped; anything else that is not a number, operator, or
/// parenthesis fails with [`CalcError::Lex`] carrying the offending
/// fragment and its byte offset.
pub fn tokenize(input: &str) -> Result<Vec<CalcSym>, CalcError> {
    let mut lexer = RawToken::lexer(input);
    let mut symbols = Vec::new();
    while let Some(raw) = lexer.next() {
        let sym = match raw {
            Ok(RawToken::Number) => CalcSym::Num(lexer.slice().parse()?),
            Ok(RawToken::Plus) => CalcSym::Plus,
            Ok(RawToken::Minus) => CalcSym::Minus,
            Ok(RawToken::Star) => CalcSym::Star,
            Ok(RawToken::Slash) => CalcSym::Slash,
            Ok(RawToken::LParen) => CalcSym::LParen,
            Ok(RawToken::RParen) => CalcSym::RParen,
            Err(()) => {
                return Err(CalcError::Lex {
                    fragment: lexer.slice().into(),
                    offset: lexer.span().start,
                });
            }
        };
        symbols.push(sym);
    }
    log::trace!("tokenize: {} symbols from {:?}", symbols.len(), input);
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_numbers_and_operators() {
        let syms = tokenize("1 + 23*4").unwrap();
        assert_eq!(
            syms,
            vec![
                CalcSym::Num(1),
                CalcSym::Plus,
                CalcSym::Num(23),
                CalcSym::Star,
                CalcSym::Num(4),
            ]
        );
    }

    #[test]
    fn tokenizes_parens() {
        let syms = tokenize("(7)").unwrap();
        assert_eq!(
            syms,
            vec![CalcSym::LParen, CalcSym::Num(7), CalcSym::RParen]
        );
    }

    #[test]
    fn empty_input_yields_no_symbols() {
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn unknown_input_reports_fragment_and_offset() {
        let err = tokenize("1 + %2").unwrap_err();
        let CalcError::Lex { fragment, offset } = err else {
            panic!("expected a lex error");
        };
        assert_eq!(&*fragment, "%");
        assert_eq!(offset, 4);
    }

    #[test]
    fn oversized_literal_fails_numeric_conversion() {
        let err = tokenize("99999999999999999999").unwrap_err();
        assert!(matches!(err, CalcError::ParseInt(_)));
    }
}
