//! Fatal engine error types.
//!
//! "Nothing left to reduce" is deliberately *not* represented here: when no
//! rule matches any window of any size, [`Parser::parse`](crate::Parser::parse)
//! returns the buffer contents as a successful result, and callers that need
//! a fully reduced root must inspect the returned sequence themselves.

use thiserror::Error;

/// Errors raised by the reduction engine.
///
/// Both variants are fatal and propagate unwrapped to the caller of
/// [`parse`](crate::Parser::parse); there is no recovery or partial-result
/// salvage inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParredError {
    /// A rule matched and was asked to reduce, but never overrode
    /// [`Rule::reduce`](crate::Rule::reduce). Such a rule cannot be used.
    #[error("rule {rule:?} does not override reduce")]
    UnimplementedReduce {
        /// Label of the offending rule.
        rule: &'static str,
    },

    /// The loop guard tripped: the number of successful reduction rounds
    /// exceeded the configured ceiling. Treated as a defense against
    /// runaway grammars, not as normal control flow.
    #[error("reduction limit exceeded ({limit} reductions)")]
    ReductionLimit {
        /// The ceiling that was exceeded.
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}

    #[test]
    fn parred_error_is_send_sync_static() {
        _assert_send_sync_static::<ParredError>();
    }

    #[test]
    fn display_contains_rule_label() {
        let err = ParredError::UnimplementedReduce { rule: "add" };
        assert!(err.to_string().contains("\"add\""));
    }

    #[test]
    fn display_contains_limit() {
        let err = ParredError::ReductionLimit { limit: 10_000 };
        assert!(err.to_string().contains("10000"));
    }
}
