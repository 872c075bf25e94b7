use crate::cursor::Cursor;
use crate::error::{Result, SequenceError};

/// Cursor over an owned snapshot of a collection
///
/// The elements are copied in when the cursor is built, so later changes to
/// the original collection are never observed.
#[derive(Debug, Clone)]
pub struct SourceCursor<T> {
    data: Vec<T>,
    /// `None` until the first `advance()`
    position: Option<usize>,
}

impl<T> SourceCursor<T> {
    pub fn new(data: Vec<T>) -> Self {
        SourceCursor {
            data,
            position: None,
        }
    }

    /// Snapshot any collection by consuming it
    pub fn snapshot<I>(collection: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(collection.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the snapshot without consuming the cursor
    pub fn source(&self) -> &[T] {
        &self.data
    }
}

impl<T: Clone> SourceCursor<T> {
    /// Snapshot borrowed data by cloning every element
    pub fn from_slice(data: &[T]) -> Self {
        Self::new(data.to_vec())
    }
}

impl<T: Clone> Cursor for SourceCursor<T> {
    type Element = T;

    fn advance(&mut self) -> Result<bool> {
        let end = self.data.len();
        let position = match self.position {
            None => 0,
            Some(position) if position >= end => return Ok(false),
            Some(position) => position + 1,
        };
        self.position = Some(position);
        Ok(position < end)
    }

    fn current(&self) -> Result<Self::Element> {
        match self.position {
            Some(position) if position < self.data.len() => Ok(self.data[position].clone()),
            _ => Err(SequenceError::invalid_state("source")),
        }
    }

    fn reset(&mut self) {
        self.position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut cursor = SourceCursor::new(vec![1u32, 2, 3]);

        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.current().unwrap(), 1);

        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.current().unwrap(), 2);

        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.current().unwrap(), 3);

        assert!(!cursor.advance().unwrap());
    }

    #[test]
    fn test_current_before_advance() {
        let cursor = SourceCursor::new(vec![b'a', b'b']);
        let result = cursor.current();
        assert!(matches!(
            result,
            Err(SequenceError::InvalidState { cursor: "source" })
        ));
    }

    #[test]
    fn test_current_after_exhaustion() {
        let mut cursor = SourceCursor::new(vec![b'x']);
        assert!(cursor.advance().unwrap());
        assert!(!cursor.advance().unwrap());
        assert!(cursor.current().unwrap_err().is_invalid_state());
    }

    #[test]
    fn test_consecutive_advance_at_end() {
        let mut cursor = SourceCursor::new(vec![b'x']);
        assert!(cursor.advance().unwrap());

        // Stays at the end no matter how often it is advanced
        assert!(!cursor.advance().unwrap());
        assert!(!cursor.advance().unwrap());
        assert!(!cursor.advance().unwrap());
        assert!(cursor.current().is_err());
    }

    #[test]
    fn test_empty_data() {
        let mut cursor: SourceCursor<u8> = SourceCursor::new(Vec::new());
        assert!(cursor.is_empty());
        assert!(!cursor.advance().unwrap());
        assert!(cursor.current().is_err());
    }

    #[test]
    fn test_reset_restarts() {
        let mut cursor = SourceCursor::new(vec!["a", "b"]);
        while cursor.advance().unwrap() {}

        cursor.reset();
        assert!(cursor.current().is_err());
        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.current().unwrap(), "a");
    }

    #[test]
    fn test_snapshot_ignores_later_mutation() {
        let mut original = vec![10, 20, 30];
        let mut cursor = SourceCursor::from_slice(&original);
        original[0] = 99;
        original.push(40);

        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.current().unwrap(), 10);
        assert_eq!(cursor.len(), 3);
        assert_eq!(cursor.source(), &[10, 20, 30]);
    }

    #[test]
    fn test_copy_independence() {
        let mut cursor = SourceCursor::snapshot("abcd".chars());
        assert!(cursor.advance().unwrap());

        let mut saved_at_a = cursor.clone();

        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.current().unwrap(), 'b');

        // The copy is unaffected and evolves on its own
        assert_eq!(saved_at_a.current().unwrap(), 'a');
        assert!(saved_at_a.advance().unwrap());
        assert!(saved_at_a.advance().unwrap());
        assert_eq!(saved_at_a.current().unwrap(), 'c');
        assert_eq!(cursor.current().unwrap(), 'b');
    }
}
