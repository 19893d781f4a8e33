//! I/O-free core of the cocktail search widget.
//!
//! # Overview
//! Builds the `search.php` request as plain data, classifies the response a
//! host hands back, and keeps the widget state (search text, results,
//! per-card expansion) that a front-end renders through `View`.
//!
//! # Design
//! - `CocktailClient` is stateless: `build_search` / `parse_search`.
//! - `CocktailSearch` owns the widget state as one `SearchState` enum and
//!   tags every request with a sequence number so stale responses are
//!   dropped.
//! - `view::render` is a pure function of the widget state.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod expansion;
pub mod http;
pub mod types;
pub mod view;
pub mod widget;

pub use client::{CocktailClient, DEFAULT_BASE_URL};
pub use error::{ApiError, ErrorKind, SearchFailure};
pub use expansion::ExpansionMap;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use types::{Drink, SearchResponse};
pub use view::{Card, SearchBar, View};
pub use widget::{CocktailSearch, Completion, PendingSearch, SearchState};
