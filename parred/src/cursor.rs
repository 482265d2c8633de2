//! Scan-local cursor over a [`Buffer`](crate::Buffer).

/// A position within a buffer scan.
///
/// Every level sweep owns a fresh cursor; the cursor is passed explicitly to
/// the [`Buffer`](crate::Buffer) operations instead of living inside the
/// buffer, so several sweeps can run over one buffer without hidden state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCursor {
    pos: usize,
}

impl ScanCursor {
    /// Creates a cursor at position 0.
    #[inline]
    pub const fn new() -> Self {
        Self { pos: 0 }
    }

    /// Returns the current position.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Advances the cursor by one symbol.
    #[inline]
    pub fn step(&mut self) {
        self.pos += 1;
    }

    /// Rewinds the cursor to position 0.
    #[inline]
    pub fn reset(&mut self) {
        self.pos = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_and_reset() {
        let mut cursor = ScanCursor::new();
        assert_eq!(cursor.pos(), 0);
        cursor.step();
        cursor.step();
        assert_eq!(cursor.pos(), 2);
        cursor.reset();
        assert_eq!(cursor.pos(), 0);
    }
}
