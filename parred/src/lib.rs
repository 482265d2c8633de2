//! # parred
//!
//! A small, declarative shift-reduce reduction engine.
//!
//! Grammar productions are ordinary values implementing [`Rule`]: each one
//! declares its right-hand side as a sequence of expected [`SymbolTag`]s and
//! supplies the semantic action that folds a matched window into a single
//! new [`Symbol`]. A [`Parser`] repeatedly sweeps the working buffer and
//! applies the smallest-window, highest-precedence, left-most matching rule
//! until nothing matches anymore; the final buffer contents are the result.
//!
//! Tokenization is an external collaborator: the engine consumes an already
//! lexed sequence of terminal symbols and never looks at source text.
//!
//! ## Example
//!
//! ```rust
//! use anyhow::Result;
//! use parred::{Parser, Rule, RuleSet, Symbol, SymbolTag};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Tag {
//!     Num,
//!     Plus,
//! }
//!
//! impl SymbolTag for Tag {}
//!
//! #[derive(Debug, PartialEq)]
//! enum Sym {
//!     Num(i64),
//!     Plus,
//! }
//!
//! impl Symbol for Sym {
//!     type Tag = Tag;
//!
//!     fn tag(&self) -> Tag {
//!         match self {
//!             Sym::Num(_) => Tag::Num,
//!             Sym::Plus => Tag::Plus,
//!         }
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct Add;
//!
//! impl Rule<Sym> for Add {
//!     fn label(&self) -> &'static str {
//!         "add"
//!     }
//!
//!     fn pattern(&self) -> &[Tag] {
//!         &[Tag::Num, Tag::Plus, Tag::Num]
//!     }
//!
//!     fn reduce(&self, window: Vec<Sym>) -> Result<Sym> {
//!         let (Sym::Num(lhs), Sym::Num(rhs)) = (&window[0], &window[2]) else {
//!             unreachable!("pattern guarantees numeric operands");
//!         };
//!         Ok(Sym::Num(lhs + rhs))
//!     }
//! }
//!
//! let rules: Vec<Box<dyn Rule<Sym>>> = vec![Box::new(Add)];
//! let parser = Parser::new(RuleSet::new(rules));
//! let out = parser
//!     .parse(vec![Sym::Num(1), Sym::Plus, Sym::Num(2), Sym::Plus, Sym::Num(3)])
//!     .unwrap();
//! assert_eq!(out, vec![Sym::Num(6)]);
//! ```
//!
//! An input that no rule matches comes back unchanged — that is a normal
//! result, not an error. The only fatal conditions are a rule without a
//! semantic action and the runaway-grammar loop guard; see
//! [`ParredError`].

mod buffer;
mod cursor;
mod error;
mod parser;
mod rule;
mod symbol;

pub use crate::buffer::Buffer;
pub use crate::cursor::ScanCursor;
pub use crate::error::ParredError;
pub use crate::parser::{DEFAULT_REDUCTION_LIMIT, Parser, ParserStats};
pub use crate::rule::{Rule, RuleSet};
pub use crate::symbol::{Symbol, SymbolTag};
