//! Circular index over an image list.

/// Position within a list of `len` slides; wraps in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CarouselCursor {
    index: usize,
    len: usize,
}

impl CarouselCursor {
    /// Cursor at the first slide.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Cursor at `index` (wrapped into range).
    #[must_use]
    pub const fn at(len: usize, index: usize) -> Self {
        Self::new(len).go_to(index)
    }

    /// Current slide.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Number of slides.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Whether there are no slides.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Arrows and dots only make sense with more than one slide.
    #[must_use]
    pub const fn shows_controls(self) -> bool {
        self.len > 1
    }

    /// Advance one slide, wrapping after the last.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            len: self.len,
        }
    }

    /// Step back one slide, wrapping before the first.
    #[must_use]
    pub const fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            len: self.len,
        }
    }

    /// Jump to `index`.
    #[must_use]
    pub const fn go_to(self, index: usize) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: index % self.len,
            len: self.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_n_times_returns_to_start() {
        for len in 1..6 {
            let start = CarouselCursor::at(len, len / 2);
            let mut cursor = start;
            for _ in 0..len {
                cursor = cursor.next();
            }
            assert_eq!(cursor, start);
        }
    }

    #[test]
    fn prev_from_zero_wraps_to_last() {
        assert_eq!(CarouselCursor::new(4).prev().index(), 3);
        assert_eq!(CarouselCursor::new(1).prev().index(), 0);
    }

    #[test]
    fn empty_cursor_is_inert() {
        let cursor = CarouselCursor::new(0);
        assert_eq!(cursor.next(), cursor);
        assert_eq!(cursor.prev(), cursor);
        assert_eq!(cursor.go_to(5).index(), 0);
        assert!(!cursor.shows_controls());
    }

    #[test]
    fn controls_need_two_slides() {
        assert!(!CarouselCursor::new(1).shows_controls());
        assert!(CarouselCursor::new(2).shows_controls());
        assert_eq!(CarouselCursor::new(3).go_to(7).index(), 1);
    }
}
