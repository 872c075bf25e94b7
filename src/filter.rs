use crate::callback::{Fallible, Infallible, Predicate};
use crate::cursor::Cursor;
use crate::error::{CallbackError, Result};

/// Cursor combinator that skips elements rejected by a predicate
///
/// `current()` is delegated straight to the inner cursor, so once the inner
/// cursor is exhausted it fails exactly the way the inner cursor does.
#[derive(Debug, Clone)]
pub struct Filter<C, P> {
    cursor: C,
    predicate: P,
}

impl<C, P> Filter<C, P> {
    pub fn new(cursor: C, predicate: P) -> Self {
        Filter { cursor, predicate }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: Predicate<C::Element>,
{
    type Element = C::Element;

    fn advance(&mut self) -> Result<bool> {
        while self.cursor.advance()? {
            if self.predicate.test(&self.cursor.current()?)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn current(&self) -> Result<Self::Element> {
        self.cursor.current()
    }

    fn reset(&mut self) {
        self.cursor.reset();
    }
}

/// Convenience function to create a filtered cursor
pub fn filter<C, F>(cursor: C, predicate: F) -> Filter<C, Infallible<F>>
where
    C: Cursor,
    F: Fn(&C::Element) -> bool,
{
    Filter::new(cursor, Infallible(predicate))
}

/// Extension trait to add .filter() and .try_filter() to all cursors
pub trait FilterExt: Cursor + Sized {
    fn filter<F>(self, predicate: F) -> Filter<Self, Infallible<F>>
    where
        F: Fn(&Self::Element) -> bool,
    {
        Filter::new(self, Infallible(predicate))
    }

    fn try_filter<F, E>(self, predicate: F) -> Filter<Self, Fallible<F>>
    where
        F: Fn(&Self::Element) -> std::result::Result<bool, E>,
        E: Into<CallbackError>,
    {
        Filter::new(self, Fallible(predicate))
    }
}

impl<C: Cursor> FilterExt for C {}
