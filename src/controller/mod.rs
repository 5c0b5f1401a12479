//! Table and modal controllers

mod modal;
mod session;
mod table;

pub use modal::*;
pub use session::*;
pub use table::*;
