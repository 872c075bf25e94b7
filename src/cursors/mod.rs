pub mod source;

pub use source::SourceCursor;
