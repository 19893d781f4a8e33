use std::io;

use anyhow::Context;
use clap::Parser;
use cocktail_core::{CocktailClient, CocktailSearch};
use cocktail_term::command::Command;
use cocktail_term::{Config, Session, UreqTransport};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they never interleave with the drawn view.
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_writer(io::stderr)
        .init();

    info!(base_url = %config.base_url, "starting");
    let widget = CocktailSearch::new(CocktailClient::new(&config.base_url));
    let mut session = Session::new(widget, UreqTransport::default());
    let mut stdout = io::stdout().lock();

    if let Some(term) = config.term {
        session
            .apply(Command::Type(term), &mut io::sink())
            .context("setting initial term")?;
        session
            .apply(Command::Search, &mut stdout)
            .context("initial search")?;
    }

    session
        .run(io::stdin().lock(), &mut stdout)
        .context("reading commands")
}
