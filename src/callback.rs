//! Wrappers that give user callbacks a uniform, fallible calling convention.
//!
//! Adapters never call closures directly. A plain closure is wrapped in
//! [`Infallible`] and a closure returning `Result` is wrapped in [`Fallible`];
//! both expose the same traits, so each adapter has a single implementation
//! and a failing callback surfaces as [`SequenceError::Callback`] from the
//! `advance()` call that invoked it.

use crate::error::{CallbackError, Result, SequenceError};

/// Wraps a closure that cannot fail
#[derive(Debug, Clone, Copy)]
pub struct Infallible<F>(pub F);

/// Wraps a closure returning `Result<_, E>`
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

/// Transforms an element by value
pub trait Selector<T> {
    type Output;

    fn select(&self, value: T) -> Result<Self::Output>;
}

/// Tests an element by reference
pub trait Predicate<T> {
    fn test(&self, value: &T) -> Result<bool>;
}

/// Extracts a sort key from an element
pub trait KeySelector<T> {
    type Key;

    fn key(&self, value: &T) -> Result<Self::Key>;
}

impl<T, U, F> Selector<T> for Infallible<F>
where
    F: Fn(T) -> U,
{
    type Output = U;

    fn select(&self, value: T) -> Result<U> {
        Ok((self.0)(value))
    }
}

impl<T, U, E, F> Selector<T> for Fallible<F>
where
    F: Fn(T) -> Result<U, E>,
    E: Into<CallbackError>,
{
    type Output = U;

    fn select(&self, value: T) -> Result<U> {
        (self.0)(value).map_err(SequenceError::callback)
    }
}

impl<T, F> Predicate<T> for Infallible<F>
where
    F: Fn(&T) -> bool,
{
    fn test(&self, value: &T) -> Result<bool> {
        Ok((self.0)(value))
    }
}

impl<T, E, F> Predicate<T> for Fallible<F>
where
    F: Fn(&T) -> Result<bool, E>,
    E: Into<CallbackError>,
{
    fn test(&self, value: &T) -> Result<bool> {
        (self.0)(value).map_err(SequenceError::callback)
    }
}

impl<T, K, F> KeySelector<T> for Infallible<F>
where
    F: Fn(&T) -> K,
{
    type Key = K;

    fn key(&self, value: &T) -> Result<K> {
        Ok((self.0)(value))
    }
}

impl<T, K, E, F> KeySelector<T> for Fallible<F>
where
    F: Fn(&T) -> Result<K, E>,
    E: Into<CallbackError>,
{
    type Key = K;

    fn key(&self, value: &T) -> Result<K> {
        (self.0)(value).map_err(SequenceError::callback)
    }
}
