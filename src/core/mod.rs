pub mod category;
pub mod columns;
pub mod row;

pub use category::{CategoryMap, CategorySet};
pub use row::{FieldValue, Row, coerce_number};
