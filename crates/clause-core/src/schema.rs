mod catalog;
pub use catalog::Catalog;

mod column;
pub use column::ColumnMapping;

mod map;
pub use map::{ObjectMap, ObjectMapBuilder};
