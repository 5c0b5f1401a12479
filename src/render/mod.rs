//! Markup rendering

pub mod html;

mod cell;
mod table;

pub use cell::*;
pub use table::*;
