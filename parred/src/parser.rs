//! The reduction engine: repeated smallest-window-first scans over a buffer.

use crate::{Buffer, ParredError, RuleSet, ScanCursor, Symbol};
use anyhow::{Result, bail};

/// Default ceiling on successful reduction rounds per parse.
pub const DEFAULT_REDUCTION_LIMIT: usize = 10_000;

/// Counters describing one `parse` invocation.
#[derive(Debug, Clone, Default)]
pub struct ParserStats {
    /// Rounds that performed a reduction (one reduction per round).
    pub rounds: usize,
    /// Cursor positions examined across all scans.
    pub scans: usize,
    /// Reductions performed.
    pub reductions: usize,
}

/// A shift-reduce parser driving a [`RuleSet`] over a symbol buffer.
///
/// The parser holds only immutable configuration; every
/// [`parse`](Parser::parse) call owns its own buffer and cursors, so one
/// parser may be reused across any number of sequential calls.
///
/// For any given buffer state the net priority ordering is: smallest
/// matching window size, then higher precedence level, then left-most
/// position, then earlier declaration order within the level. A larger
/// window is only attempted after no smaller window matches anywhere in the
/// buffer.
pub struct Parser<S: Symbol> {
    rules: RuleSet<S>,
    reduction_limit: usize,
}

impl<S: Symbol> Parser<S> {
    /// Creates a parser over `rules` with [`DEFAULT_REDUCTION_LIMIT`].
    pub fn new(rules: RuleSet<S>) -> Self {
        Self {
            rules,
            reduction_limit: DEFAULT_REDUCTION_LIMIT,
        }
    }

    /// Overrides the ceiling on successful reduction rounds.
    ///
    /// The guard bounds the *total* number of reductions performed in one
    /// `parse` call (each successful round performs exactly one), not the
    /// number of no-progress rounds: an empty round always ends the parse.
    /// Inputs that legitimately need more reductions than the default
    /// ceiling should raise it here.
    pub fn with_reduction_limit(mut self, limit: usize) -> Self {
        self.reduction_limit = limit;
        self
    }

    /// Reduces `tokens` until no rule matches any window of any size and
    /// returns the final symbol sequence.
    ///
    /// An input that never matches is returned unchanged; a partially
    /// reduced sequence is a normal, successful outcome. Callers that
    /// require a fully reduced single root must check the returned
    /// sequence's shape themselves.
    ///
    /// Fails with [`ParredError::UnimplementedReduce`] when a matched rule
    /// has no semantic action, and with [`ParredError::ReductionLimit`]
    /// when the loop guard trips.
    pub fn parse(&self, tokens: Vec<S>) -> Result<Vec<S>> {
        let (symbols, _) = self.parse_with_stats(tokens)?;
        Ok(symbols)
    }

    /// Like [`parse`](Parser::parse), also returning the run's counters.
    pub fn parse_with_stats(&self, tokens: Vec<S>) -> Result<(Vec<S>, ParserStats)> {
        let mut buffer = Buffer::from(tokens);
        let mut stats = ParserStats::default();

        log::trace!(
            "parse: {} symbols, {} levels, max window {}",
            buffer.len(),
            self.rules.levels().len(),
            self.rules.max_size()
        );

        'round: loop {
            for size in 1..=self.rules.max_size() {
                if self.reduce_once(&mut buffer, size, &mut stats)? {
                    stats.rounds += 1;
                    if stats.rounds > self.reduction_limit {
                        bail!(ParredError::ReductionLimit {
                            limit: self.reduction_limit
                        });
                    }
                    continue 'round;
                }
            }
            // A full round over every window size found nothing: done.
            break;
        }

        log::trace!("parse done: {} symbols, {} reductions", buffer.len(), stats.reductions);
        Ok((buffer.into_symbols(), stats))
    }

    /// Performs at most one reduction at window width `size`.
    ///
    /// Levels are tried in priority order; within a level the buffer is
    /// swept left to right with a fresh cursor, and at each position every
    /// rule of the level is tried in declared order. The first match
    /// reduces immediately.
    fn reduce_once(
        &self,
        buffer: &mut Buffer<S>,
        size: usize,
        stats: &mut ParserStats,
    ) -> Result<bool> {
        for (depth, level) in self.rules.levels().iter().enumerate() {
            let mut cursor = ScanCursor::new();
            while !buffer.exhausted(&cursor) {
                stats.scans += 1;
                for rule in level {
                    if rule.matches(buffer.look_ahead(&cursor, size)) {
                        if log::log_enabled!(log::Level::Trace) {
                            log::trace!(
                                "reduce {} (level {}, size {}) at {}: [{}]",
                                rule.label(),
                                depth,
                                size,
                                cursor.pos(),
                                buffer.dump()
                            );
                        }
                        let window = buffer.consume(&cursor, rule.size());
                        let symbol = rule.reduce(window)?;
                        buffer.push(&cursor, symbol);
                        stats.reductions += 1;
                        return Ok(true);
                    }
                }
                cursor.step();
            }
        }
        Ok(false)
    }
}
