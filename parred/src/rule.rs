//! Grammar rules and precedence-grouped rule sets.

use crate::{ParredError, Symbol, SymbolTag};
use anyhow::Result;
use std::fmt::Debug;

/// A production: a grammar right-hand side plus the semantic action that
/// builds the resulting non-terminal.
///
/// The right-hand side is declared as static metadata via
/// [`pattern`](Rule::pattern), one expected tag per slot. A rule value is
/// configured once in a [`RuleSet`] and then consulted read-only by every
/// parse, so rules are usually unit structs.
pub trait Rule<S: Symbol>: Debug {
    /// Stable rule name, used for precedence grouping, trace logging, and
    /// error reporting.
    fn label(&self) -> &'static str;

    /// The ordered sequence of tags this rule's right-hand side expects.
    fn pattern(&self) -> &[S::Tag];

    /// Length of the right-hand side.
    fn size(&self) -> usize {
        self.pattern().len()
    }

    /// Returns `true` if `window` has exactly the pattern's length and every
    /// slot tag [`admits`](crate::SymbolTag::admits) the corresponding
    /// symbol's tag.
    fn matches(&self, window: &[S]) -> bool {
        let pattern = self.pattern();
        pattern.len() == window.len()
            && pattern
                .iter()
                .zip(window)
                .all(|(tag, sym)| tag.admits(&sym.tag()))
    }

    /// Builds the non-terminal from a matched window.
    ///
    /// `window` holds exactly [`size`](Rule::size) symbols in buffer order.
    /// The default body fails with [`ParredError::UnimplementedReduce`], so
    /// a rule that never overrides it fails loudly on first use instead of
    /// silently producing a default value.
    fn reduce(&self, window: Vec<S>) -> Result<S> {
        let _ = window;
        Err(ParredError::UnimplementedReduce { rule: self.label() }.into())
    }
}

/// An ordered list of precedence levels, each an ordered list of rules.
///
/// Levels are scanned highest-priority first; within a level, rules share
/// equal priority relative to window position and are tried in declared
/// order. The set is immutable after construction and may be reused across
/// any number of sequential `parse` calls.
pub struct RuleSet<S: Symbol> {
    levels: Vec<Vec<Box<dyn Rule<S>>>>,
    max_size: usize,
}

impl<S: Symbol> RuleSet<S> {
    /// Builds a set with a single precedence level holding all rules in the
    /// given order.
    pub fn new(rules: Vec<Box<dyn Rule<S>>>) -> Self {
        Self::build(vec![rules])
    }

    /// Builds a set from `rules` plus an explicit precedence grouping,
    /// highest priority first, where each level names rules by
    /// [`label`](Rule::label).
    ///
    /// Supplied levels are used as given (in the given order, with the given
    /// internal order). Every rule not named in any level is collected into
    /// one synthetic trailing level, preserving the rules' original relative
    /// order. A name that matches no configured rule is skipped.
    pub fn with_precedence(rules: Vec<Box<dyn Rule<S>>>, levels: &[&[&str]]) -> Self {
        let mut pool: Vec<Option<Box<dyn Rule<S>>>> = rules.into_iter().map(Some).collect();
        let mut grouped: Vec<Vec<Box<dyn Rule<S>>>> = Vec::with_capacity(levels.len() + 1);

        for level in levels {
            let mut group = Vec::with_capacity(level.len());
            for name in *level {
                let found = pool
                    .iter_mut()
                    .find(|slot| slot.as_ref().map_or(false, |r| r.label() == *name));
                if let Some(slot) = found {
                    if let Some(rule) = slot.take() {
                        group.push(rule);
                    }
                }
            }
            grouped.push(group);
        }

        let rest: Vec<Box<dyn Rule<S>>> = pool.into_iter().flatten().collect();
        if !rest.is_empty() {
            grouped.push(rest);
        }

        Self::build(grouped)
    }

    fn build(levels: Vec<Vec<Box<dyn Rule<S>>>>) -> Self {
        let max_size = levels
            .iter()
            .flatten()
            .map(|rule| rule.size())
            .max()
            .unwrap_or(0);
        Self { levels, max_size }
    }

    /// The normalized precedence levels, highest priority first.
    pub fn levels(&self) -> &[Vec<Box<dyn Rule<S>>>] {
        &self.levels
    }

    /// The largest right-hand-side length across all rules; 0 when the set
    /// is empty.
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SymbolTag;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum XTag {
        A,
        B,
        Any,
    }

    impl SymbolTag for XTag {
        fn admits(&self, actual: &Self) -> bool {
            *self == XTag::Any || self == actual
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum XSym {
        A,
        B,
    }

    impl Symbol for XSym {
        type Tag = XTag;

        fn tag(&self) -> XTag {
            match self {
                XSym::A => XTag::A,
                XSym::B => XTag::B,
            }
        }
    }

    #[derive(Debug)]
    struct XPair;

    impl Rule<XSym> for XPair {
        fn label(&self) -> &'static str {
            "pair"
        }

        fn pattern(&self) -> &[XTag] {
            &[XTag::A, XTag::B]
        }

        fn reduce(&self, _window: Vec<XSym>) -> Result<XSym> {
            Ok(XSym::A)
        }
    }

    #[derive(Debug)]
    struct XAnyPair;

    impl Rule<XSym> for XAnyPair {
        fn label(&self) -> &'static str {
            "any_pair"
        }

        fn pattern(&self) -> &[XTag] {
            &[XTag::Any, XTag::Any]
        }

        fn reduce(&self, _window: Vec<XSym>) -> Result<XSym> {
            Ok(XSym::B)
        }
    }

    #[derive(Debug)]
    struct XBroken;

    impl Rule<XSym> for XBroken {
        fn label(&self) -> &'static str {
            "broken"
        }

        fn pattern(&self) -> &[XTag] {
            &[XTag::A]
        }
    }

    #[test]
    fn matches_requires_exact_length() {
        let rule = XPair;
        assert_eq!(rule.size(), 2);
        assert!(rule.matches(&[XSym::A, XSym::B]));
        assert!(!rule.matches(&[XSym::A]));
        assert!(!rule.matches(&[XSym::A, XSym::B, XSym::A]));
    }

    #[test]
    fn matches_checks_every_slot() {
        let rule = XPair;
        assert!(!rule.matches(&[XSym::B, XSym::B]));
        assert!(!rule.matches(&[XSym::A, XSym::A]));
    }

    #[test]
    fn matches_honors_tag_subsumption() {
        let rule = XAnyPair;
        assert!(rule.matches(&[XSym::A, XSym::B]));
        assert!(rule.matches(&[XSym::B, XSym::B]));
    }

    #[test]
    fn default_reduce_fails_with_unimplemented() {
        let err = XBroken.reduce(vec![XSym::A]).unwrap_err();
        let parred = err
            .downcast_ref::<ParredError>()
            .expect("expected a ParredError");
        assert_eq!(
            *parred,
            ParredError::UnimplementedReduce { rule: "broken" }
        );
    }

    #[test]
    fn new_builds_a_single_level() {
        let set = RuleSet::new(vec![
            Box::new(XPair) as Box<dyn Rule<XSym>>,
            Box::new(XAnyPair),
            Box::new(XBroken),
        ]);
        assert_eq!(set.levels().len(), 1);
        let labels: Vec<_> = set.levels()[0].iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["pair", "any_pair", "broken"]);
        assert_eq!(set.max_size(), 2);
    }

    #[test]
    fn with_precedence_collects_leftovers_into_trailing_level() {
        let set = RuleSet::with_precedence(
            vec![
                Box::new(XPair) as Box<dyn Rule<XSym>>,
                Box::new(XAnyPair),
                Box::new(XBroken),
            ],
            &[&["any_pair"]],
        );
        assert_eq!(set.levels().len(), 2);
        assert_eq!(set.levels()[0][0].label(), "any_pair");
        let trailing: Vec<_> = set.levels()[1].iter().map(|r| r.label()).collect();
        assert_eq!(trailing, vec!["pair", "broken"]);
    }

    #[test]
    fn with_precedence_keeps_supplied_levels_as_given() {
        let set = RuleSet::with_precedence(
            vec![
                Box::new(XPair) as Box<dyn Rule<XSym>>,
                Box::new(XAnyPair),
                Box::new(XBroken),
            ],
            &[&["broken", "pair"], &["any_pair"]],
        );
        assert_eq!(set.levels().len(), 2);
        let first: Vec<_> = set.levels()[0].iter().map(|r| r.label()).collect();
        assert_eq!(first, vec!["broken", "pair"]);
        assert_eq!(set.levels()[1][0].label(), "any_pair");
    }

    #[test]
    fn with_precedence_skips_unknown_names() {
        let set = RuleSet::with_precedence(
            vec![Box::new(XPair) as Box<dyn Rule<XSym>>],
            &[&["no_such_rule"], &["pair"]],
        );
        assert_eq!(set.levels().len(), 2);
        assert!(set.levels()[0].is_empty());
        assert_eq!(set.levels()[1][0].label(), "pair");
    }

    #[test]
    fn max_size_is_zero_for_an_empty_set() {
        let set: RuleSet<XSym> = RuleSet::new(Vec::new());
        assert_eq!(set.max_size(), 0);
        assert_eq!(set.levels().len(), 1);
    }
}
