mod error;
pub use error::Error;

pub mod schema;
pub use schema::Catalog;

pub mod stmt;
pub use stmt::Predicate;

/// A Result type alias that uses Clause's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
