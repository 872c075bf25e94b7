use crate::callback::{Fallible, Infallible, KeySelector};
use crate::cursor::Cursor;
use crate::error::{CallbackError, Result, SequenceError};
use std::cmp::Ordering;
use tracing::debug;

/// What happens to elements whose keys compare equal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// Only the element observed last for a key survives
    #[default]
    LastWins,
    /// Every element survives, equal keys keep their input order
    Retain,
}

/// Cursor combinator that drains its input, orders it by key and replays it
///
/// This is the one lazy adapter that buffers eagerly: the first `advance()`
/// after construction or `reset()` pulls the inner cursor to exhaustion,
/// extracts a key per element and sorts. Under [`DuplicateKeys::LastWins`]
/// equal keys collapse onto the last element seen, the same as inserting into
/// an ordered map.
#[derive(Debug, Clone)]
pub struct SortBy<C, S, O, T> {
    cursor: C,
    selector: S,
    compare: O,
    duplicates: DuplicateKeys,
    buffer: Option<Vec<T>>,
    index: usize,
}

impl<C, S, O, T> SortBy<C, S, O, T> {
    pub fn new(cursor: C, selector: S, compare: O, duplicates: DuplicateKeys) -> Self {
        SortBy {
            cursor,
            selector,
            compare,
            duplicates,
            buffer: None,
            index: 0,
        }
    }
}

impl<C, S, O, T> SortBy<C, S, O, T>
where
    C: Cursor<Element = T>,
    S: KeySelector<T>,
    O: Fn(&S::Key, &S::Key) -> Ordering,
{
    fn drain_sorted(&mut self) -> Result<Vec<T>> {
        let mut entries = Vec::new();
        while self.cursor.advance()? {
            let item = self.cursor.current()?;
            let key = self.selector.key(&item)?;
            entries.push((key, item));
        }
        let drained = entries.len();

        // Stable, so later elements stay behind earlier ones with the same key
        entries.sort_by(|a, b| (self.compare)(&a.0, &b.0));

        let sorted: Vec<T> = match self.duplicates {
            DuplicateKeys::Retain => entries.into_iter().map(|(_, item)| item).collect(),
            DuplicateKeys::LastWins => {
                let mut survivors: Vec<(S::Key, T)> = Vec::with_capacity(drained);
                for (key, item) in entries {
                    match survivors.last_mut() {
                        Some(last) if (self.compare)(&last.0, &key) == Ordering::Equal => {
                            last.1 = item;
                        }
                        _ => survivors.push((key, item)),
                    }
                }
                survivors.into_iter().map(|(_, item)| item).collect()
            }
        };

        debug!(
            drained,
            kept = sorted.len(),
            collapsed = drained - sorted.len(),
            "sort_by: buffered input"
        );
        Ok(sorted)
    }
}

impl<C, S, O, T> Cursor for SortBy<C, S, O, T>
where
    C: Cursor<Element = T>,
    S: KeySelector<T>,
    O: Fn(&S::Key, &S::Key) -> Ordering,
    T: Clone,
{
    type Element = T;

    fn advance(&mut self) -> Result<bool> {
        let len = match &self.buffer {
            Some(buffer) => buffer.len(),
            None => {
                let sorted = self.drain_sorted()?;
                let len = sorted.len();
                self.buffer = Some(sorted);
                self.index = 0;
                return Ok(len != 0);
            }
        };
        if self.index < len {
            self.index += 1;
        }
        Ok(self.index < len)
    }

    fn current(&self) -> Result<Self::Element> {
        self.buffer
            .as_ref()
            .and_then(|buffer| buffer.get(self.index))
            .cloned()
            .ok_or_else(|| SequenceError::invalid_state("sort_by"))
    }

    fn reset(&mut self) {
        self.cursor.reset();
        self.buffer = None;
        self.index = 0;
    }
}

/// Ordering relation used by the `Ord`-based sorts
pub type KeyOrder<K> = fn(&K, &K) -> Ordering;

fn key_order<K: Ord>() -> KeyOrder<K> {
    K::cmp
}

/// Convenience function to sort a cursor by a key using `Ord`
pub fn sort_by_key<C, F, K>(cursor: C, key: F) -> SortBy<C, Infallible<F>, KeyOrder<K>, C::Element>
where
    C: Cursor,
    F: Fn(&C::Element) -> K,
    K: Ord,
{
    SortBy::new(cursor, Infallible(key), key_order(), DuplicateKeys::LastWins)
}

/// Extension trait to add the sorting adapters to all cursors
pub trait SortByExt: Cursor + Sized {
    /// Sort by key and ordering relation, collapsing equal keys onto the last element
    fn sort_by<F, K, O>(self, key: F, compare: O) -> SortBy<Self, Infallible<F>, O, Self::Element>
    where
        F: Fn(&Self::Element) -> K,
        O: Fn(&K, &K) -> Ordering,
    {
        SortBy::new(self, Infallible(key), compare, DuplicateKeys::LastWins)
    }

    /// Sort by an `Ord` key, collapsing equal keys onto the last element
    fn sort_by_key<F, K>(self, key: F) -> SortBy<Self, Infallible<F>, KeyOrder<K>, Self::Element>
    where
        F: Fn(&Self::Element) -> K,
        K: Ord,
    {
        SortBy::new(self, Infallible(key), key_order(), DuplicateKeys::LastWins)
    }

    fn try_sort_by_key<F, K, E>(
        self,
        key: F,
    ) -> SortBy<Self, Fallible<F>, KeyOrder<K>, Self::Element>
    where
        F: Fn(&Self::Element) -> std::result::Result<K, E>,
        K: Ord,
        E: Into<CallbackError>,
    {
        SortBy::new(self, Fallible(key), key_order(), DuplicateKeys::LastWins)
    }

    /// Stable sort by key and ordering relation that keeps every element
    fn stable_sort_by<F, K, O>(
        self,
        key: F,
        compare: O,
    ) -> SortBy<Self, Infallible<F>, O, Self::Element>
    where
        F: Fn(&Self::Element) -> K,
        O: Fn(&K, &K) -> Ordering,
    {
        SortBy::new(self, Infallible(key), compare, DuplicateKeys::Retain)
    }

    fn stable_sort_by_key<F, K>(
        self,
        key: F,
    ) -> SortBy<Self, Infallible<F>, KeyOrder<K>, Self::Element>
    where
        F: Fn(&Self::Element) -> K,
        K: Ord,
    {
        SortBy::new(self, Infallible(key), key_order(), DuplicateKeys::Retain)
    }
}

impl<C: Cursor> SortByExt for C {}
