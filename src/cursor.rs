use crate::error::Result;

/// Generic cursor trait for sequence combinators
///
/// A cursor walks a sequence one element at a time and only does the work
/// needed to produce the next element. Every adapter wraps one or more inner
/// cursors and layers its own state on top, so chains are written generically
/// over "any cursor of element type T".
///
/// Each cursor moves through three states: not started, active on an element,
/// and exhausted. `advance()` moves forward (initializing on the first call),
/// `current()` is only valid while active, and `reset()` returns to the not
/// started state.
pub trait Cursor {
    /// The type of elements this cursor yields
    type Element;

    /// Move to the next element, or to the first one on the initial call
    ///
    /// Returns `Ok(true)` if an element is now available. Errors raised by
    /// user callbacks while producing the element are returned from here.
    fn advance(&mut self) -> Result<bool>;

    /// Get the element at the current cursor position
    ///
    /// Returns an invalid-state error before the first successful `advance()`
    /// and after `advance()` has returned `false`.
    fn current(&self) -> Result<Self::Element>;

    /// Return to the not started state
    fn reset(&mut self);
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Element = C::Element;

    fn advance(&mut self) -> Result<bool> {
        (**self).advance()
    }

    fn current(&self) -> Result<Self::Element> {
        (**self).current()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::SourceCursor;
    use crate::filter::FilterExt;
    use crate::map::MapExt;
    use crate::sequence::Sequence;

    #[test]
    fn test_boxed_cursor_dispatch() {
        let chains: Vec<Box<dyn Cursor<Element = i32>>> = vec![
            Box::new(SourceCursor::new(vec![1, 2])),
            Box::new(SourceCursor::new(vec![1, 2, 3, 4]).filter(|value| value % 2 == 0)),
            Box::new(SourceCursor::new(vec![5]).map(|value| value * 2)),
        ];

        let mut firsts = Vec::new();
        for mut chain in chains {
            assert!(chain.advance().unwrap());
            firsts.push(chain.current().unwrap());
        }
        assert_eq!(firsts, vec![1, 2, 10]);
    }

    #[test]
    fn test_sequence_from_cursor() {
        let cursor = SourceCursor::new(vec!['a', 'b']).map(|c| c.to_ascii_uppercase());
        let mut sequence = Sequence::from(cursor);
        assert_eq!(sequence.materialize().unwrap(), vec!['A', 'B']);

        let mut cursor = sequence.into_cursor();
        cursor.reset();
        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.current().unwrap(), 'A');
    }
}
