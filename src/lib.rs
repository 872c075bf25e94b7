//! # SeqComb - Lazy Sequence Combinator Library
//!
//! SeqComb provides cursor-style adapters (map, filter, take, skip, flatten,
//! concat, sort) that chain over any enumerable source and evaluate only as far
//! as the consumer pulls.
//!
//! - **Deferred execution**: building a chain never touches the source; work
//!   happens inside `advance()`
//! - **Explicit cursor protocol**: `advance`, `current` and `reset` with a
//!   typed invalid-state error instead of panics
//! - **Static composition**: every adapter is generic over its inner cursor, so
//!   chaining allocates nothing beyond what an adapter buffers
//! - **Value semantics**: sources are snapshots, and cloning a chain copies all
//!   of its state
//!
//! Two pieces buffer eagerly on purpose: [`range`] materializes its values
//! when called, and the sort adapters drain their input on the first advance.

pub mod callback;
pub mod concat;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod filter;
pub mod flatten;
pub mod map;
pub mod sequence;
pub mod skip;
pub mod sort_by;
pub mod take;

pub use callback::{Fallible, Infallible, KeySelector, Predicate, Selector};
pub use concat::{Concat, ConcatExt};
pub use cursor::Cursor;
pub use cursors::SourceCursor;
pub use error::{CallbackError, Result, SequenceError};
pub use filter::{Filter, FilterExt};
pub use flatten::{Flatten, FlattenExt};
pub use map::{Map, MapExt};
pub use sequence::{Iter, Sequence, range, wrap};
pub use skip::{Skip, SkipExt};
pub use sort_by::{DuplicateKeys, KeyOrder, SortBy, SortByExt};
pub use take::{Take, TakeExt};
