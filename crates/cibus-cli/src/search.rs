//! The `search` command: one query through a headless session.

use std::collections::BTreeMap;

use anyhow::Context;
use cibus_app::{Notification, Notifier, QueryController, ResultList, SearchPhase, Session, UiEvent};
use cibus_core::AppConfig;
use cibus_map::InMemoryMap;
use cibus_search::SearchClient;

#[derive(Debug, Default)]
pub(crate) struct SearchOptions {
    pub highlight: Option<String>,
    pub expand: bool,
    pub geojson: bool,
}

/// Prints failure notices on stderr.
#[derive(Debug, Default)]
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, notification: Notification) {
        eprintln!("error: {notification}");
    }
}

/// Runs `query` against the configured search service, prints the result list
/// and, if asked, the map sources as GeoJSON.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the search fails. The
/// failure itself has already been printed by the notifier by then.
pub(crate) async fn run_search(
    config: &AppConfig,
    query: &str,
    options: &SearchOptions,
) -> anyhow::Result<()> {
    let client = SearchClient::from_config(config).context("failed to build search client")?;
    let controller = QueryController::new(InMemoryMap::new(), StderrNotifier);
    let mut session = Session::new(controller, client);
    let tx = session.sender();

    tx.send(UiEvent::QueryChanged(query.to_owned()))?;
    tx.send(UiEvent::Submit)?;
    session.run_until_idle().await;

    if session.controller().phase() == SearchPhase::Error {
        anyhow::bail!("search for '{query}' failed");
    }

    if let Some(name) = &options.highlight {
        tx.send(UiEvent::Hover(name.clone()))?;
    }
    if options.expand {
        let rows = session
            .controller()
            .listing()
            .map_or(0, |listing| listing.items().len());
        for index in 0..rows {
            tx.send(UiEvent::ToggleExpand(index))?;
        }
    }
    session.run_until_idle().await;

    let controller = session.into_controller();
    match controller.listing() {
        Some(listing) => {
            for line in format_listing(listing, query) {
                println!("{line}");
            }
        }
        None => println!("no results for '{query}'"),
    }

    if options.geojson {
        let sources: BTreeMap<&str, _> = controller.map().sources().collect();
        println!("{}", serde_json::to_string_pretty(&sources)?);
    }

    Ok(())
}

fn format_listing(listing: &ResultList, query: &str) -> Vec<String> {
    let Some(summary) = listing.summary() else {
        return vec![format!("no vendors found for '{query}'")];
    };

    let mut lines = vec![summary];
    for item in listing.items() {
        let drinks = if item.drinks { "  [cold drinks]" } else { "" };
        let plural = if item.branches == 1 { "" } else { "s" };
        lines.push(format!(
            "{} ({} location{plural}){drinks}",
            item.name, item.branches
        ));
        let food = item.food_items_text();
        if !food.is_empty() {
            lines.push(format!("    {food}"));
        }
    }
    lines
}
