//! Render layer: a pure function from widget state to a `View`.
//!
//! # Design
//! `View` describes what the host should draw, not how. Hosts (the terminal
//! front-end, a native shell behind the FFI) walk it and pick their own
//! widgets. Every `SearchState` variant maps to exactly one shape of `View`.

use std::borrow::Cow;

use crate::error::SearchFailure;
use crate::expansion::ExpansionMap;
use crate::types::Drink;
use crate::widget::SearchState;

pub const HEADING: &str = "Welcome to TheCocktailDB";
pub const PLACEHOLDER: &str = "Enter cocktail name";
pub const SEARCH_LABEL: &str = "Search";
pub const LOADING_LABEL: &str = "Loading...";
pub const SEE_MORE: &str = "See More";
pub const SEE_LESS: &str = "See Less";

/// Collapsed cards show this many characters of the instructions.
pub const PREVIEW_CHARS: usize = 100;
pub const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub heading: &'static str,
    pub search_bar: SearchBar,
    pub loading: bool,
    pub error: Option<SearchFailure>,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBar {
    pub value: String,
    pub placeholder: &'static str,
    pub button_label: &'static str,
}

/// One result card, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub image_alt: String,
    /// Full instructions when expanded, the preview otherwise.
    pub text: String,
    pub expanded: bool,
    pub toggle_label: &'static str,
    /// Styling hint: `see-more` or `see-less`.
    pub toggle_class: &'static str,
}

impl Card {
    fn new(drink: &Drink, expanded: bool) -> Self {
        let text = if expanded {
            drink.instructions.clone()
        } else {
            preview(&drink.instructions).into_owned()
        };
        let (toggle_label, toggle_class) = if expanded {
            (SEE_LESS, "see-less")
        } else {
            (SEE_MORE, "see-more")
        };
        Self {
            id: drink.id.clone(),
            name: drink.name.clone(),
            thumbnail: drink.thumbnail.clone(),
            image_alt: drink.name.clone(),
            text,
            expanded,
            toggle_label,
            toggle_class,
        }
    }
}

/// First `PREVIEW_CHARS` characters plus `ELLIPSIS`, or the text unchanged
/// when it is not longer than that. Counts chars, not bytes or words.
pub fn preview(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

pub fn render(term: &str, state: &SearchState, expansion: &ExpansionMap) -> View {
    let cards = state
        .drinks()
        .iter()
        .map(|drink| Card::new(drink, expansion.is_expanded(&drink.id)))
        .collect();
    View {
        heading: HEADING,
        search_bar: SearchBar {
            value: term.to_string(),
            placeholder: PLACEHOLDER,
            button_label: SEARCH_LABEL,
        },
        loading: state.is_loading(),
        error: state.failure().cloned(),
        cards,
    }
}
