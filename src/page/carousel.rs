//! Index state for one slide carousel.

use anyhow::Result;

/// Current position within a fixed-length, non-empty slide sequence.
///
/// Invariant: `current < len` and `len >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    /// Creates a carousel over `len` slides, starting at the first one.
    ///
    /// # Errors
    ///
    /// Returns an error if `len` is zero.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            anyhow::bail!("A carousel needs at least one slide");
        }
        Ok(Self { current: 0, len })
    }

    /// Index of the slide currently shown.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Number of slides cycled through.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; a carousel cannot be empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Advances one slide, wrapping from the last to the first.
    pub const fn next(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    /// Goes back one slide, wrapping from the first to the last.
    pub const fn previous(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Jumps directly to `index`.
    ///
    /// # Errors
    ///
    /// Returns an error and leaves the position untouched if `index` is out of range.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            anyhow::bail!(
                "Slide index {} out of range (carousel has {} slides)",
                index,
                self.len
            );
        }
        self.current = index;
        Ok(())
    }

    /// Whether `index` is the slide currently shown (used by dot indicators).
    #[must_use]
    pub const fn is_current(&self, index: usize) -> bool {
        self.current == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_zero() {
        let carousel = Carousel::new(3).unwrap();
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.len(), 3);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(Carousel::new(0).is_err());
    }

    #[test]
    fn test_next_sequence_wraps() {
        let mut carousel = Carousel::new(3).unwrap();
        let mut seen = Vec::new();
        for _ in 0..3 {
            carousel.next();
            seen.push(carousel.current());
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn test_previous_from_first_wraps_to_last() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.previous();
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for len in 1..=6 {
            for start in 0..len {
                let mut carousel = Carousel::new(len).unwrap();
                carousel.go_to(start).unwrap();
                for _ in 0..len {
                    carousel.next();
                }
                assert_eq!(carousel.current(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_previous_inverts_next() {
        for len in 1..=5 {
            for start in 0..len {
                let mut carousel = Carousel::new(len).unwrap();
                carousel.go_to(start).unwrap();
                carousel.next();
                carousel.previous();
                assert_eq!(carousel.current(), start);
            }
        }
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut carousel = Carousel::new(1).unwrap();
        carousel.next();
        assert_eq!(carousel.current(), 0);
        carousel.previous();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_go_to_is_idempotent() {
        let mut once = Carousel::new(4).unwrap();
        once.go_to(2).unwrap();
        let mut twice = Carousel::new(4).unwrap();
        twice.go_to(2).unwrap();
        twice.go_to(2).unwrap();
        assert_eq!(once, twice);
        assert!(twice.is_current(2));
    }

    #[test]
    fn test_go_to_out_of_range_rejected() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.go_to(1).unwrap();
        let err = carousel.go_to(3).unwrap_err();
        assert!(err.to_string().contains("out of range"));
        // Position unchanged after rejection
        assert_eq!(carousel.current(), 1);
    }
}
