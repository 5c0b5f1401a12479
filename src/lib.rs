//! Declaratively-configured CRUD data table widget core
//!
//! Given a column schema and a REST endpoint, a [`TableWidget`] renders an
//! HTML table, an add-item modal form, and inline row editing, wired to
//! GET/POST/PUT/DELETE calls against that endpoint. The embedder injects
//! the produced markup into its page and feeds user actions back as
//! [`Command`]s; the network sits behind the [`transport::Transport`] trait
//! so the whole controller runs deterministically in tests.

pub mod age;
pub mod controller;
pub mod error;
pub mod form;
pub mod model;
pub mod render;
pub mod transport;

pub use controller::Command;
pub use controller::TableWidget;
pub use error::Error;
pub use model::Column;
pub use model::InputSpec;
pub use model::Record;
pub use model::RenderedCell;
pub use model::TableConfig;
pub use transport::HttpTransport;
pub use transport::Transport;
