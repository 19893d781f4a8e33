//! The prompt loop: read a command, update the widget, redraw.

use std::io::{self, BufRead, Write};

use cocktail_core::{CocktailSearch, Transport};
use tracing::debug;

use crate::command::{Command, HELP};
use crate::render::render;

pub struct Session<T> {
    widget: CocktailSearch,
    transport: T,
}

impl<T: Transport> Session<T> {
    pub fn new(widget: CocktailSearch, transport: T) -> Self {
        Self { widget, transport }
    }

    pub fn widget(&self) -> &CocktailSearch {
        &self.widget
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", render(&self.widget.view()))?;
        write!(out, "> ")?;
        out.flush()?;
        for line in input.lines() {
            let line = line?;
            match line.parse::<Command>() {
                Ok(cmd) => {
                    if !self.apply(cmd, out)? {
                        return Ok(());
                    }
                }
                Err(err) => writeln!(out, "{err}")?,
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    }

    /// Apply one command. Returns `false` when the session should end.
    pub fn apply(&mut self, cmd: Command, out: &mut impl Write) -> io::Result<bool> {
        match cmd {
            Command::Type(text) => {
                self.widget.set_term(text);
                write!(out, "{}", render(&self.widget.view()))?;
            }
            Command::Search => self.search(out)?,
            Command::Toggle(target) => {
                let id = self.resolve_card(&target);
                self.widget.toggle(&id);
                write!(out, "{}", render(&self.widget.view()))?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn search(&mut self, out: &mut impl Write) -> io::Result<()> {
        let Some(pending) = self.widget.begin_search() else {
            write!(out, "{}", render(&self.widget.view()))?;
            return Ok(());
        };
        write!(out, "{}", render(&self.widget.view()))?;
        out.flush()?;
        let result = self.transport.execute(&pending.request);
        let completion = self.widget.complete_search(pending.seq, result);
        debug!(?completion, "search finished");
        writeln!(out)?;
        write!(out, "{}", render(&self.widget.view()))
    }

    /// A 1-based card number as printed, otherwise the text is taken as an id.
    fn resolve_card(&self, target: &str) -> String {
        let view = self.widget.view();
        target
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| view.cards.get(i))
            .map(|card| card.id.clone())
            .unwrap_or_else(|| target.to_string())
    }
}
