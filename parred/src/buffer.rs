//! The mutable working sequence of symbols.

use crate::{ScanCursor, Symbol};
use smartstring::alias::String;

/// An ordered, mutable sequence of symbols with windowed read/replace
/// operations driven by a caller-held [`ScanCursor`].
///
/// The buffer is exclusively owned by one in-flight parse; its final
/// contents are the parse result.
pub struct Buffer<S> {
    symbols: Vec<S>,
}

impl<S> From<Vec<S>> for Buffer<S> {
    fn from(symbols: Vec<S>) -> Self {
        Self { symbols }
    }
}

impl<S: Symbol> Buffer<S> {
    /// Number of symbols currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the buffer holds no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns `true` if the cursor sits at or past the end of the buffer.
    #[inline]
    pub fn exhausted(&self, cursor: &ScanCursor) -> bool {
        cursor.pos() >= self.symbols.len()
    }

    /// Returns (without removing) up to `size` symbols starting at the
    /// cursor. Fewer are returned when the buffer runs out; callers must
    /// length-check before matching, which
    /// [`Rule::matches`](crate::Rule::matches) does.
    pub fn look_ahead(&self, cursor: &ScanCursor, size: usize) -> &[S] {
        let start = cursor.pos().min(self.symbols.len());
        let end = (start + size).min(self.symbols.len());
        &self.symbols[start..end]
    }

    /// Removes and returns exactly `size` symbols starting at the cursor.
    /// The cursor itself is unchanged, so a following [`push`](Buffer::push)
    /// lands where the removed span began.
    ///
    /// The span must be available; the engine only consumes a window it has
    /// already verified via a matched look-ahead.
    pub fn consume(&mut self, cursor: &ScanCursor, size: usize) -> Vec<S> {
        let start = cursor.pos();
        self.symbols.drain(start..start + size).collect()
    }

    /// Inserts one symbol at the cursor without advancing it.
    pub fn push(&mut self, cursor: &ScanCursor, symbol: S) {
        self.symbols.insert(cursor.pos(), symbol);
    }

    /// Unwraps the buffer into its remaining symbols.
    pub fn into_symbols(self) -> Vec<S> {
        self.symbols
    }

    /// Renders the tag sequence for trace logging.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (i, sym) in self.symbols.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{:?}", sym.tag()));
        }
        out
    }
}
