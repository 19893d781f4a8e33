//! Plain-text drawing of a `View`.

use std::fmt;

use cocktail_core::view::LOADING_LABEL;
use cocktail_core::View;

/// A `View` laid out for the terminal.
pub struct Screen<'a>(pub &'a View);

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "{}", view.heading)?;
        let value = if view.search_bar.value.is_empty() {
            view.search_bar.placeholder
        } else {
            view.search_bar.value.as_str()
        };
        writeln!(f, "[ {value} ] ({})", view.search_bar.button_label)?;
        if view.loading {
            writeln!(f, "{LOADING_LABEL}")?;
        }
        if let Some(error) = &view.error {
            writeln!(f, "! {}", error.message)?;
        }
        for (n, card) in view.cards.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{}. {} ({})", n + 1, card.name, card.id)?;
            writeln!(f, "   {}", card.thumbnail)?;
            writeln!(f, "   {}", card.text)?;
            writeln!(f, "   [{}]", card.toggle_label)?;
        }
        Ok(())
    }
}

pub fn render(view: &View) -> String {
    Screen(view).to_string()
}
