//! Terminal front-end for the cocktail search widget.
//!
//! Reads commands from stdin, performs searches with a blocking ureq
//! transport and prints the widget's `View` as plain text after every change.

pub mod command;
pub mod config;
pub mod render;
pub mod session;
pub mod transport;

pub use config::Config;
pub use session::Session;
pub use transport::UreqTransport;
