use crate::callback::{Fallible, Infallible, Selector};
use crate::cursor::Cursor;
use crate::cursors::SourceCursor;
use crate::error::{CallbackError, Result, SequenceError};
use tracing::trace;

/// Cursor combinator that expands every element into a sub-sequence
///
/// At most one sub-cursor is alive at a time. When it runs dry the outer
/// cursor is advanced and the selector builds a fresh snapshot cursor over the
/// next sub-sequence; empty sub-sequences are passed over. Cloning deep-copies
/// the active sub-cursor along with its position.
#[derive(Debug, Clone)]
pub struct Flatten<C, S, U> {
    cursor: C,
    selector: S,
    active: Option<SourceCursor<U>>,
}

impl<C, S, U> Flatten<C, S, U> {
    pub fn new(cursor: C, selector: S) -> Self {
        Flatten {
            cursor,
            selector,
            active: None,
        }
    }
}

impl<C, S, U> Cursor for Flatten<C, S, U>
where
    C: Cursor,
    S: Selector<C::Element>,
    S::Output: IntoIterator<Item = U>,
    U: Clone,
{
    type Element = U;

    fn advance(&mut self) -> Result<bool> {
        if let Some(active) = self.active.as_mut() {
            if active.advance()? {
                return Ok(true);
            }
            self.active = None;
        }

        while self.cursor.advance()? {
            let items = self.selector.select(self.cursor.current()?)?;
            let mut sub = SourceCursor::snapshot(items);
            trace!(len = sub.len(), "flatten: opened sub-cursor");
            if sub.advance()? {
                self.active = Some(sub);
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn current(&self) -> Result<Self::Element> {
        match &self.active {
            Some(active) => active.current(),
            None => Err(SequenceError::invalid_state("flatten")),
        }
    }

    fn reset(&mut self) {
        self.cursor.reset();
        self.active = None;
    }
}

/// Convenience function to create a Flatten cursor
pub fn flat_map<C, F, I>(cursor: C, selector: F) -> Flatten<C, Infallible<F>, I::Item>
where
    C: Cursor,
    F: Fn(C::Element) -> I,
    I: IntoIterator,
{
    Flatten::new(cursor, Infallible(selector))
}

/// Extension trait to add .flat_map(), .try_flat_map() and .flatten() to all cursors
pub trait FlattenExt: Cursor + Sized {
    fn flat_map<F, I>(self, selector: F) -> Flatten<Self, Infallible<F>, I::Item>
    where
        F: Fn(Self::Element) -> I,
        I: IntoIterator,
    {
        Flatten::new(self, Infallible(selector))
    }

    fn try_flat_map<F, I, E>(self, selector: F) -> Flatten<Self, Fallible<F>, I::Item>
    where
        F: Fn(Self::Element) -> std::result::Result<I, E>,
        I: IntoIterator,
        E: Into<CallbackError>,
    {
        Flatten::new(self, Fallible(selector))
    }

    /// Flatten a cursor whose elements are already collections
    #[allow(clippy::type_complexity)]
    fn flatten(
        self,
    ) -> Flatten<
        Self,
        Infallible<fn(Self::Element) -> Self::Element>,
        <Self::Element as IntoIterator>::Item,
    >
    where
        Self::Element: IntoIterator,
    {
        let selector: fn(Self::Element) -> Self::Element = identity;
        Flatten::new(self, Infallible(selector))
    }
}

fn identity<T>(value: T) -> T {
    value
}

impl<C: Cursor> FlattenExt for C {}
