//! Form fields and edit-value extraction

mod extract;
mod field;

pub use extract::*;
pub use field::*;
