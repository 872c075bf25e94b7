use crate::cursor::Cursor;
use crate::error::{Result, SequenceError};

/// Cursor combinator that yields at most `count` elements
///
/// Once the bound is reached the inner cursor is never advanced again, even
/// if it has more elements, and `current()` reports an invalid state.
#[derive(Debug, Clone)]
pub struct Take<C> {
    cursor: C,
    count: usize,
    taken: usize,
    exceeded: bool,
}

impl<C> Take<C> {
    pub fn new(cursor: C, count: usize) -> Self {
        Take {
            cursor,
            count,
            taken: 0,
            exceeded: false,
        }
    }
}

impl<C: Cursor> Cursor for Take<C> {
    type Element = C::Element;

    fn advance(&mut self) -> Result<bool> {
        if self.exceeded {
            return Ok(false);
        }
        if self.taken == self.count {
            self.exceeded = true;
            return Ok(false);
        }
        self.taken += 1;
        self.cursor.advance()
    }

    fn current(&self) -> Result<Self::Element> {
        if self.exceeded {
            return Err(SequenceError::invalid_state("take"));
        }
        self.cursor.current()
    }

    fn reset(&mut self) {
        self.cursor.reset();
        self.taken = 0;
        self.exceeded = false;
    }
}

/// Convenience function to create a Take cursor
pub fn take<C: Cursor>(cursor: C, count: usize) -> Take<C> {
    Take::new(cursor, count)
}

/// Extension trait to add .take() to all cursors
pub trait TakeExt: Cursor + Sized {
    fn take(self, count: usize) -> Take<Self> {
        Take::new(self, count)
    }
}

impl<C: Cursor> TakeExt for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::SourceCursor;
    use crate::filter::FilterExt;
    use std::cell::Cell;

    #[test]
    fn test_take_fewer_than_available() {
        let mut cursor = SourceCursor::new(vec![1, 2, 3, 4]).take(2);

        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.current().unwrap(), 1);
        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.current().unwrap(), 2);
        assert!(!cursor.advance().unwrap());
        assert!(matches!(
            cursor.current(),
            Err(SequenceError::InvalidState { cursor: "take" })
        ));
    }

    #[test]
    fn test_take_more_than_available() {
        let mut cursor = SourceCursor::new(vec![1, 2]).take(5);

        assert!(cursor.advance().unwrap());
        assert!(cursor.advance().unwrap());
        assert!(!cursor.advance().unwrap());

        // The inner source is exhausted, so its own error surfaces
        assert!(matches!(
            cursor.current(),
            Err(SequenceError::InvalidState { cursor: "source" })
        ));
    }

    #[test]
    fn test_take_zero() {
        let mut cursor = SourceCursor::new(vec![1, 2]).take(0);
        assert!(!cursor.advance().unwrap());
        assert!(cursor.current().is_err());
    }

    #[test]
    fn test_take_current_before_advance() {
        let cursor = SourceCursor::new(vec![1]).take(1);
        assert!(cursor.current().unwrap_err().is_invalid_state());
    }

    #[test]
    fn test_take_stops_pulling_inner() {
        let inspected = Cell::new(0);
        let mut cursor = SourceCursor::snapshot(0..100)
            .filter(|_| {
                inspected.set(inspected.get() + 1);
                true
            })
            .take(3);

        while cursor.advance().unwrap() {}
        assert!(!cursor.advance().unwrap());
        assert_eq!(inspected.get(), 3);
    }

    #[test]
    fn test_take_unbounded_count() {
        let mut cursor = SourceCursor::new(vec!['a']).take(usize::MAX);
        assert!(cursor.advance().unwrap());
        assert!(!cursor.advance().unwrap());
    }

    #[test]
    fn test_reset_restores_bound() {
        let mut cursor = take(SourceCursor::new(vec![7, 8, 9]), 1);
        assert!(cursor.advance().unwrap());
        assert!(!cursor.advance().unwrap());

        cursor.reset();
        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.current().unwrap(), 7);
    }
}
