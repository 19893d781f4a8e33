//! The search widget: input capture, fetch orchestration and toggling.
//!
//! # Design
//! The widget never performs I/O. `begin_search` hands the host a
//! `PendingSearch` tagged with a sequence number; the host executes the
//! request and reports back through `complete_search`. Only the most
//! recently issued sequence number is accepted, so a slow response to an
//! older search cannot overwrite fresher state.

use tracing::{debug, info, warn};

use crate::client::CocktailClient;
use crate::error::{ApiError, ErrorKind, SearchFailure};
use crate::expansion::ExpansionMap;
use crate::http::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::types::Drink;
use crate::view::{self, View};

/// Where the widget is in its search cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    /// Nothing searched yet.
    #[default]
    Idle,
    /// A request is in flight. `shown` is what was on screen when it started.
    Loading { shown: Vec<Drink> },
    Loaded(Vec<Drink>),
    /// The API reported no matches; results were cleared.
    EmptyResult(SearchFailure),
    /// The request failed; `stale` is what was on screen before it.
    Failed {
        failure: SearchFailure,
        stale: Vec<Drink>,
    },
}

impl SearchState {
    /// The drinks currently on screen.
    pub fn drinks(&self) -> &[Drink] {
        match self {
            SearchState::Loading { shown } => shown,
            SearchState::Loaded(drinks) => drinks,
            SearchState::Failed { stale, .. } => stale,
            SearchState::Idle | SearchState::EmptyResult(_) => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading { .. })
    }

    pub fn failure(&self) -> Option<&SearchFailure> {
        match self {
            SearchState::EmptyResult(failure) | SearchState::Failed { failure, .. } => {
                Some(failure)
            }
            _ => None,
        }
    }

    fn into_drinks(self) -> Vec<Drink> {
        match self {
            SearchState::Loading { shown } => shown,
            SearchState::Loaded(drinks) => drinks,
            SearchState::Failed { stale, .. } => stale,
            SearchState::Idle | SearchState::EmptyResult(_) => Vec::new(),
        }
    }
}

/// A request the host must execute, tagged with the sequence number to
/// report back with.
#[derive(Debug, Clone)]
pub struct PendingSearch {
    pub seq: u64,
    pub request: HttpRequest,
}

/// What `complete_search` did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Loaded { count: usize },
    NoResults,
    Failed,
    /// A newer search was started, or this one was already completed.
    Stale,
}

/// One search widget instance.
#[derive(Debug, Clone)]
pub struct CocktailSearch {
    client: CocktailClient,
    term: String,
    state: SearchState,
    expansion: ExpansionMap,
    latest_seq: u64,
}

impl CocktailSearch {
    pub fn new(client: CocktailClient) -> Self {
        Self {
            client,
            term: String::new(),
            state: SearchState::Idle,
            expansion: ExpansionMap::default(),
            latest_seq: 0,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Replace the search text. Never triggers a request.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn expansion(&self) -> &ExpansionMap {
        &self.expansion
    }

    /// Start a search for the current term.
    ///
    /// Returns `None` and leaves every piece of state untouched when the term
    /// is empty. Otherwise enters `Loading`, clearing any error.
    pub fn begin_search(&mut self) -> Option<PendingSearch> {
        if self.term.is_empty() {
            return None;
        }
        self.latest_seq += 1;
        let shown = std::mem::take(&mut self.state).into_drinks();
        self.state = SearchState::Loading { shown };
        let request = self.client.build_search(&self.term);
        info!(seq = self.latest_seq, term = %self.term, "search started");
        Some(PendingSearch {
            seq: self.latest_seq,
            request,
        })
    }

    /// Apply the outcome of the request tagged `seq`.
    pub fn complete_search(
        &mut self,
        seq: u64,
        result: Result<HttpResponse, TransportError>,
    ) -> Completion {
        if seq != self.latest_seq || !self.state.is_loading() {
            debug!(seq, latest = self.latest_seq, "discarding stale search response");
            return Completion::Stale;
        }

        let parsed = result
            .map_err(ApiError::from)
            .and_then(|response| self.client.parse_search(response));
        let shown = std::mem::take(&mut self.state).into_drinks();

        match parsed {
            Ok(drinks) => {
                let count = drinks.len();
                self.expansion = ExpansionMap::for_drinks(&drinks);
                self.state = SearchState::Loaded(drinks);
                info!(seq, count, "search loaded");
                Completion::Loaded { count }
            }
            Err(err) => match err.kind() {
                ErrorKind::NoResults => {
                    self.expansion = ExpansionMap::default();
                    self.state = SearchState::EmptyResult(SearchFailure::from(&err));
                    info!(seq, "search matched nothing");
                    Completion::NoResults
                }
                ErrorKind::RequestFailed => {
                    warn!(seq, error = %err, "error fetching data");
                    self.state = SearchState::Failed {
                        failure: SearchFailure::from(&err),
                        stale: shown,
                    };
                    Completion::Failed
                }
            },
        }
    }

    /// Run one full search through `transport`. `None` when the term is empty
    /// and nothing was sent.
    pub fn search(&mut self, transport: &impl Transport) -> Option<Completion> {
        let pending = self.begin_search()?;
        let result = transport.execute(&pending.request);
        Some(self.complete_search(pending.seq, result))
    }

    /// Flip one card between preview and full text. Returns the new value.
    pub fn toggle(&mut self, id: &str) -> bool {
        self.expansion.toggle(id)
    }

    pub fn view(&self) -> View {
        view::render(&self.term, &self.state, &self.expansion)
    }
}
