//! Forward-only byte cursor with a NUL sentinel.

/// Value returned when reading at or past the end of input.
pub const SENTINEL: u8 = 0;

/// Read position over a byte slice.
///
/// Reading past the end yields [`SENTINEL`] instead of failing, so the parser
/// can look ahead one byte (as it does for a `0x` prefix) without bounds
/// checks. An embedded NUL reads the same as the end of input.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Byte at the current position.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    /// Byte `ahead` positions after the current one.
    #[inline]
    pub fn peek_at(&self, ahead: usize) -> u8 {
        self.pos
            .checked_add(ahead)
            .and_then(|i| self.bytes.get(i))
            .copied()
            .unwrap_or(SENTINEL)
    }

    /// Move forward by `n` bytes.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n);
    }

    #[inline]
    pub fn bump(&mut self) {
        self.advance(1);
    }

    /// Number of bytes stepped over so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }
}
