use crate::cursor::Cursor;
use crate::error::{Result, SequenceError};

/// Cursor combinator that drops the first `count` elements
///
/// Nothing is skipped until the first `advance()`, which silently drains up
/// to `count` elements before reporting on the next one. Later calls are
/// plain delegation.
#[derive(Debug, Clone)]
pub struct Skip<C> {
    cursor: C,
    count: usize,
    started: bool,
}

impl<C> Skip<C> {
    pub fn new(cursor: C, count: usize) -> Self {
        Skip {
            cursor,
            count,
            started: false,
        }
    }
}

impl<C: Cursor> Cursor for Skip<C> {
    type Element = C::Element;

    fn advance(&mut self) -> Result<bool> {
        if self.started {
            return self.cursor.advance();
        }
        self.started = true;
        for _ in 0..self.count {
            if !self.cursor.advance()? {
                return Ok(false);
            }
        }
        self.cursor.advance()
    }

    fn current(&self) -> Result<Self::Element> {
        if !self.started {
            return Err(SequenceError::invalid_state("skip"));
        }
        self.cursor.current()
    }

    fn reset(&mut self) {
        self.cursor.reset();
        self.started = false;
    }
}

/// Convenience function to create a Skip cursor
pub fn skip<C: Cursor>(cursor: C, count: usize) -> Skip<C> {
    Skip::new(cursor, count)
}

/// Extension trait to add .skip() to all cursors
pub trait SkipExt: Cursor + Sized {
    fn skip(self, count: usize) -> Skip<Self> {
        Skip::new(self, count)
    }
}

impl<C: Cursor> SkipExt for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::SourceCursor;
    use crate::take::TakeExt;

    #[test]
    fn test_skip_some() {
        let mut cursor = SourceCursor::new(vec![1, 2, 3, 4]).skip(2);

        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.current().unwrap(), 3);
        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.current().unwrap(), 4);
        assert!(!cursor.advance().unwrap());
    }

    #[test]
    fn test_skip_zero() {
        let mut cursor = SourceCursor::new(vec!['a', 'b']).skip(0);
        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.current().unwrap(), 'a');
    }

    #[test]
    fn test_skip_everything() {
        let mut cursor = SourceCursor::new(vec![1, 2]).skip(2);
        assert!(!cursor.advance().unwrap());
        assert!(cursor.current().is_err());

        let mut cursor = SourceCursor::new(vec![1, 2]).skip(10);
        assert!(!cursor.advance().unwrap());
        assert!(!cursor.advance().unwrap());
    }

    #[test]
    fn test_skip_current_before_advance() {
        let cursor = SourceCursor::new(vec![1, 2, 3]).skip(1);
        assert!(matches!(
            cursor.current(),
            Err(SequenceError::InvalidState { cursor: "skip" })
        ));
    }

    #[test]
    fn test_skip_then_take_window() {
        let mut cursor = SourceCursor::snapshot(0..10).skip(3).take(2);
        let mut window = Vec::new();
        while cursor.advance().unwrap() {
            window.push(cursor.current().unwrap());
        }
        assert_eq!(window, vec![3, 4]);
    }

    #[test]
    fn test_reset_skips_again() {
        let mut cursor = skip(SourceCursor::new(vec![5, 6, 7]), 1);
        while cursor.advance().unwrap() {}

        cursor.reset();
        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.current().unwrap(), 6);
    }
}
