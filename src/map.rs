use crate::callback::{Fallible, Infallible, Selector};
use crate::cursor::Cursor;
use crate::error::{CallbackError, Result, SequenceError};

#[derive(Debug, Clone)]
enum MapState<U> {
    NotStarted,
    Active(U),
    Exhausted,
}

/// Cursor combinator that transforms every element using a selector
///
/// The selector runs eagerly inside `advance()` and its result is cached, so
/// a failing selector is reported by `advance()`, never by `current()`.
///
/// Unlike every other adapter, `current()` after exhaustion returns
/// `U::default()` instead of an invalid-state error. Before the first
/// `advance()` it still fails.
#[derive(Debug, Clone)]
pub struct Map<C, S, U> {
    cursor: C,
    selector: S,
    state: MapState<U>,
}

impl<C, S, U> Map<C, S, U> {
    pub fn new(cursor: C, selector: S) -> Self {
        Map {
            cursor,
            selector,
            state: MapState::NotStarted,
        }
    }
}

impl<C, S, U> Cursor for Map<C, S, U>
where
    C: Cursor,
    S: Selector<C::Element, Output = U>,
    U: Clone + Default,
{
    type Element = U;

    fn advance(&mut self) -> Result<bool> {
        if !self.cursor.advance()? {
            self.state = MapState::Exhausted;
            return Ok(false);
        }
        let mapped = self.selector.select(self.cursor.current()?)?;
        self.state = MapState::Active(mapped);
        Ok(true)
    }

    fn current(&self) -> Result<Self::Element> {
        match &self.state {
            MapState::Active(value) => Ok(value.clone()),
            MapState::Exhausted => Ok(U::default()),
            MapState::NotStarted => Err(SequenceError::invalid_state("map")),
        }
    }

    fn reset(&mut self) {
        self.cursor.reset();
        self.state = MapState::NotStarted;
    }
}

/// Convenience function to create a Map cursor
pub fn map<C, F, U>(cursor: C, mapper: F) -> Map<C, Infallible<F>, U>
where
    C: Cursor,
    F: Fn(C::Element) -> U,
{
    Map::new(cursor, Infallible(mapper))
}

/// Extension trait to add .map() and .try_map() to all cursors
pub trait MapExt: Cursor + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, Infallible<F>, U>
    where
        F: Fn(Self::Element) -> U,
    {
        Map::new(self, Infallible(mapper))
    }

    fn try_map<F, U, E>(self, mapper: F) -> Map<Self, Fallible<F>, U>
    where
        F: Fn(Self::Element) -> std::result::Result<U, E>,
        E: Into<CallbackError>,
    {
        Map::new(self, Fallible(mapper))
    }
}

impl<C> MapExt for C where C: Cursor {}
