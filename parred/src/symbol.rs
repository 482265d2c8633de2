//! The symbol model: runtime tags and the values carried through the buffer.

use std::fmt::Debug;

/// The runtime kind of a [`Symbol`].
///
/// A grammar is described as a closed set of tags: one per terminal kind
/// (supplied by an external tokenizer) and one per non-terminal kind (built
/// by rule reductions). Rule right-hand sides are sequences of expected tags.
pub trait SymbolTag: Copy + Debug + Eq {
    /// Returns `true` if a symbol tagged `actual` satisfies a pattern slot
    /// expecting `self`.
    ///
    /// The default is exact tag equality. Override it to let a slot subsume
    /// a family of tags, e.g. a slot that accepts any operand-like symbol
    /// whether it arrived from the tokenizer or from an earlier reduction.
    fn admits(&self, actual: &Self) -> bool {
        self == actual
    }
}

/// A value stored in the working buffer: either a terminal (token) or a
/// non-terminal produced by a reduction.
///
/// The engine never inspects a symbol beyond its [`tag`](Symbol::tag); it
/// only moves symbols between the buffer and rule reductions.
pub trait Symbol: Debug {
    /// The tag type classifying this symbol.
    type Tag: SymbolTag;

    /// Returns the runtime kind of this symbol.
    fn tag(&self) -> Self::Tag;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum XTag {
        Word,
        Punct,
        Any,
    }

    impl SymbolTag for XTag {
        fn admits(&self, actual: &Self) -> bool {
            *self == XTag::Any || self == actual
        }
    }

    #[test]
    fn admits_defaults_to_equality() {
        assert!(XTag::Word.admits(&XTag::Word));
        assert!(!XTag::Word.admits(&XTag::Punct));
    }

    #[test]
    fn admits_override_subsumes() {
        assert!(XTag::Any.admits(&XTag::Word));
        assert!(XTag::Any.admits(&XTag::Punct));
        assert!(!XTag::Word.admits(&XTag::Any));
    }
}
