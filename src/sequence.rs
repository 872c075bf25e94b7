use crate::callback::{Fallible, Infallible};
use crate::concat::Concat;
use crate::cursor::Cursor;
use crate::cursors::SourceCursor;
use crate::error::{CallbackError, Result};
use crate::filter::Filter;
use crate::flatten::{Flatten, FlattenExt};
use crate::map::Map;
use crate::skip::Skip;
use crate::sort_by::{KeyOrder, SortBy, SortByExt};
use crate::take::Take;
use num_traits::One;
use std::cmp::Ordering;
use std::ops::Add;
use tracing::trace;

/// User-facing handle over a chain of cursors
///
/// Every chaining method consumes the sequence, wraps its cursor in a new
/// adapter and returns immediately; nothing is evaluated until the chain is
/// advanced. Cloning a sequence deep-copies the whole chain, including any
/// buffered state, and the two copies evolve independently.
///
/// The exceptions to deferred execution are [`range`], which materializes its
/// values up front, and the sort adapters, which buffer their whole input on
/// the first advance.
///
/// ```
/// use seqcomb::range;
///
/// let mut evens = range(0, 10).filter(|value| value % 2 == 0);
/// assert_eq!(evens.materialize().unwrap(), vec![0, 2, 4, 6, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct Sequence<C> {
    cursor: C,
}

impl<C> Sequence<C> {
    pub fn new(cursor: C) -> Self {
        Sequence { cursor }
    }

    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C> From<C> for Sequence<C> {
    fn from(cursor: C) -> Self {
        Sequence::new(cursor)
    }
}

impl<T: Clone> Sequence<SourceCursor<T>> {
    /// Snapshot a collection by consuming it
    pub fn wrap<I>(collection: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Sequence::new(SourceCursor::snapshot(collection))
    }

    /// Snapshot borrowed data by cloning every element
    pub fn from_slice(data: &[T]) -> Self {
        Sequence::new(SourceCursor::from_slice(data))
    }
}

/// Snapshot a collection into a new sequence
pub fn wrap<I>(collection: I) -> Sequence<SourceCursor<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Sequence::wrap(collection)
}

/// Eagerly build the half-open range `[start, end)`
///
/// Unlike every other constructor, all values are computed and stored before
/// this returns. An empty or inverted range yields an empty sequence.
pub fn range<T>(start: T, end: T) -> Sequence<SourceCursor<T>>
where
    T: Copy + PartialOrd + One + Add<Output = T>,
{
    let mut values = Vec::new();
    let mut next = start;
    while next < end {
        values.push(next);
        // Floats stop incrementing once they exceed their integer precision
        let following = next + T::one();
        match following.partial_cmp(&next) {
            Some(Ordering::Greater) => next = following,
            _ => break,
        }
    }
    trace!(len = values.len(), "range: materialized eagerly");
    Sequence::new(SourceCursor::new(values))
}

impl<C: Cursor> Cursor for Sequence<C> {
    type Element = C::Element;

    fn advance(&mut self) -> Result<bool> {
        self.cursor.advance()
    }

    fn current(&self) -> Result<Self::Element> {
        self.cursor.current()
    }

    fn reset(&mut self) {
        self.cursor.reset()
    }
}

impl<C: Cursor> Sequence<C> {
    /// Reset, then drain the chain into a vector
    ///
    /// The first error anywhere in the chain aborts the drain and is returned.
    /// On success the cursor is left exhausted.
    pub fn materialize(&mut self) -> Result<Vec<C::Element>> {
        self.cursor.reset();
        let mut result = Vec::new();
        while self.cursor.advance()? {
            result.push(self.cursor.current()?);
        }
        trace!(len = result.len(), "materialize: drained sequence");
        Ok(result)
    }

    /// Iterate from the current position onward
    pub fn iter(&mut self) -> Iter<'_, C> {
        Iter {
            cursor: &mut self.cursor,
            done: false,
        }
    }

    pub fn map<F, U>(self, mapper: F) -> Sequence<Map<C, Infallible<F>, U>>
    where
        F: Fn(C::Element) -> U,
    {
        Sequence::new(Map::new(self.cursor, Infallible(mapper)))
    }

    pub fn try_map<F, U, E>(self, mapper: F) -> Sequence<Map<C, Fallible<F>, U>>
    where
        F: Fn(C::Element) -> std::result::Result<U, E>,
        E: Into<CallbackError>,
    {
        Sequence::new(Map::new(self.cursor, Fallible(mapper)))
    }

    pub fn filter<F>(self, predicate: F) -> Sequence<Filter<C, Infallible<F>>>
    where
        F: Fn(&C::Element) -> bool,
    {
        Sequence::new(Filter::new(self.cursor, Infallible(predicate)))
    }

    pub fn try_filter<F, E>(self, predicate: F) -> Sequence<Filter<C, Fallible<F>>>
    where
        F: Fn(&C::Element) -> std::result::Result<bool, E>,
        E: Into<CallbackError>,
    {
        Sequence::new(Filter::new(self.cursor, Fallible(predicate)))
    }

    pub fn take(self, count: usize) -> Sequence<Take<C>> {
        Sequence::new(Take::new(self.cursor, count))
    }

    pub fn skip(self, count: usize) -> Sequence<Skip<C>> {
        Sequence::new(Skip::new(self.cursor, count))
    }

    pub fn flat_map<F, I>(self, selector: F) -> Sequence<Flatten<C, Infallible<F>, I::Item>>
    where
        F: Fn(C::Element) -> I,
        I: IntoIterator,
    {
        Sequence::new(Flatten::new(self.cursor, Infallible(selector)))
    }

    pub fn try_flat_map<F, I, E>(self, selector: F) -> Sequence<Flatten<C, Fallible<F>, I::Item>>
    where
        F: Fn(C::Element) -> std::result::Result<I, E>,
        I: IntoIterator,
        E: Into<CallbackError>,
    {
        Sequence::new(Flatten::new(self.cursor, Fallible(selector)))
    }

    #[allow(clippy::type_complexity)]
    pub fn flatten(
        self,
    ) -> Sequence<
        Flatten<
            C,
            Infallible<fn(C::Element) -> C::Element>,
            <C::Element as IntoIterator>::Item,
        >,
    >
    where
        C::Element: IntoIterator,
    {
        Sequence::new(FlattenExt::flatten(self.cursor))
    }

    /// Append another sequence with the same element type
    pub fn concat<C2>(self, other: Sequence<C2>) -> Sequence<Concat<C, C2>>
    where
        C2: Cursor<Element = C::Element>,
    {
        Sequence::new(Concat::new(self.cursor, other.cursor))
    }

    /// Sort by key and ordering relation; equal keys collapse onto the last element seen
    pub fn sort_by<F, K, O>(
        self,
        key: F,
        compare: O,
    ) -> Sequence<SortBy<C, Infallible<F>, O, C::Element>>
    where
        F: Fn(&C::Element) -> K,
        O: Fn(&K, &K) -> Ordering,
    {
        Sequence::new(SortByExt::sort_by(self.cursor, key, compare))
    }

    /// Sort by an `Ord` key; equal keys collapse onto the last element seen
    pub fn sort_by_key<F, K>(
        self,
        key: F,
    ) -> Sequence<SortBy<C, Infallible<F>, KeyOrder<K>, C::Element>>
    where
        F: Fn(&C::Element) -> K,
        K: Ord,
    {
        Sequence::new(SortByExt::sort_by_key(self.cursor, key))
    }

    pub fn try_sort_by_key<F, K, E>(
        self,
        key: F,
    ) -> Sequence<SortBy<C, Fallible<F>, KeyOrder<K>, C::Element>>
    where
        F: Fn(&C::Element) -> std::result::Result<K, E>,
        K: Ord,
        E: Into<CallbackError>,
    {
        Sequence::new(SortByExt::try_sort_by_key(self.cursor, key))
    }

    /// Stable sort that keeps every element, equal keys in input order
    pub fn stable_sort_by<F, K, O>(
        self,
        key: F,
        compare: O,
    ) -> Sequence<SortBy<C, Infallible<F>, O, C::Element>>
    where
        F: Fn(&C::Element) -> K,
        O: Fn(&K, &K) -> Ordering,
    {
        Sequence::new(SortByExt::stable_sort_by(self.cursor, key, compare))
    }

    pub fn stable_sort_by_key<F, K>(
        self,
        key: F,
    ) -> Sequence<SortBy<C, Infallible<F>, KeyOrder<K>, C::Element>>
    where
        F: Fn(&C::Element) -> K,
        K: Ord,
    {
        Sequence::new(SortByExt::stable_sort_by_key(self.cursor, key))
    }
}

/// Iterator over the remaining elements of a sequence
///
/// Yields `Err` at most once; iteration stops after the first error.
pub struct Iter<'a, C> {
    cursor: &'a mut C,
    done: bool,
}

impl<C: Cursor> Iterator for Iter<'_, C> {
    type Item = Result<C::Element>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = match self.cursor.advance() {
            Ok(true) => self.cursor.current(),
            Ok(false) => {
                self.done = true;
                return None;
            }
            Err(error) => Err(error),
        };
        if item.is_err() {
            self.done = true;
        }
        Some(item)
    }
}
