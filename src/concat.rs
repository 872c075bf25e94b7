use crate::cursor::Cursor;
use crate::error::{Result, SequenceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Holder {
    Neither,
    First,
    Second,
}

/// Cursor combinator that yields every element of `first`, then of `second`
///
/// Both cursors must share an element type; that is enforced by the type
/// system when the combinator is built.
///
/// ```compile_fail
/// use seqcomb::{ConcatExt, SourceCursor};
///
/// let numbers = SourceCursor::new(vec![1, 2]);
/// let words = SourceCursor::new(vec!["three"]);
/// let _ = numbers.concat(words);
/// ```
#[derive(Debug, Clone)]
pub struct Concat<C1, C2> {
    first: C1,
    second: C2,
    holder: Holder,
}

impl<C1, C2> Concat<C1, C2> {
    pub fn new(first: C1, second: C2) -> Self {
        Concat {
            first,
            second,
            holder: Holder::Neither,
        }
    }
}

impl<C1, C2> Cursor for Concat<C1, C2>
where
    C1: Cursor,
    C2: Cursor<Element = C1::Element>,
{
    type Element = C1::Element;

    fn advance(&mut self) -> Result<bool> {
        if self.first.advance()? {
            self.holder = Holder::First;
            return Ok(true);
        }
        if self.second.advance()? {
            self.holder = Holder::Second;
            return Ok(true);
        }
        self.holder = Holder::Neither;
        Ok(false)
    }

    fn current(&self) -> Result<Self::Element> {
        match self.holder {
            Holder::First => self.first.current(),
            Holder::Second => self.second.current(),
            Holder::Neither => Err(SequenceError::invalid_state("concat")),
        }
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
        self.holder = Holder::Neither;
    }
}

/// Convenience function to create a Concat cursor
pub fn concat<C1, C2>(first: C1, second: C2) -> Concat<C1, C2>
where
    C1: Cursor,
    C2: Cursor<Element = C1::Element>,
{
    Concat::new(first, second)
}

/// Extension trait to add .concat() to all cursors
pub trait ConcatExt: Cursor + Sized {
    fn concat<C>(self, other: C) -> Concat<Self, C>
    where
        C: Cursor<Element = Self::Element>,
    {
        Concat::new(self, other)
    }
}

impl<C: Cursor> ConcatExt for C {}
