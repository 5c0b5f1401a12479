//! Configuration and record models

mod cell;
mod config;
mod record;
mod value;

pub use cell::*;
pub use config::*;
pub use record::*;
pub use value::*;
