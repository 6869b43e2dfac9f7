use anyhow::Result;
use serde_json::json;

use sitesearch::remote::{Banner, SubscribeOutcome};
use sitesearch::search::PaperResult;
use sitesearch::ui::{SearchOutcome, SearchSelection};

use super::OutputFormat;

/// Print the interactive session's outcome in the chosen format.
pub(crate) fn print_outcome(format: OutputFormat, outcome: &SearchOutcome) -> Result<()> {
    match format {
        OutputFormat::Plain => print_outcome_plain(outcome),
        OutputFormat::Json => println!("{}", format_outcome_json(outcome)?),
    }
    Ok(())
}

fn print_outcome_plain(outcome: &SearchOutcome) {
    if !outcome.accepted {
        println!("Search cancelled (query: '{}')", outcome.query);
        return;
    }

    match &outcome.selection {
        Some(selection) => println!("{}", selection.url()),
        None => println!("No selection"),
    }
}

/// Format the session outcome as a JSON string.
fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
    let selection = match &outcome.selection {
        Some(SearchSelection::Hit(hit)) => json!({
            "type": "hit",
            "label": hit.label,
            "category": hit.category,
            "url": hit.url,
        }),
        Some(SearchSelection::SearchPage { url }) => json!({
            "type": "search_page",
            "url": url,
        }),
        None => serde_json::Value::Null,
    };

    let payload = json!({
        "accepted": outcome.accepted,
        "query": outcome.query,
        "selection": selection,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the results of a one-shot papers search.
pub(crate) fn print_papers(
    format: OutputFormat,
    query: &str,
    papers: &[PaperResult],
) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            if papers.is_empty() {
                println!("No results found for \"{query}\".");
                return Ok(());
            }
            println!("Search results for \"{query}\":");
            for paper in papers {
                println!("[{}] {}", paper.category, paper.title);
                match &paper.pdf_url {
                    Some(url) => println!("    {} · {} · {url}", paper.author, paper.date),
                    None => println!("    {} · {}", paper.author, paper.date),
                }
            }
        }
        OutputFormat::Json => {
            let payload = json!({ "query": query, "results": papers });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }
    Ok(())
}

/// Print the active banner, or nothing when no banner is enabled.
pub(crate) fn print_banner(format: OutputFormat, banner: Option<&Banner>) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            let Some(banner) = banner else {
                return Ok(());
            };
            if let Some(title) = &banner.title {
                println!("{title}");
            }
            if let Some(description) = &banner.description {
                println!("{description}");
            }
            if let Some(url) = &banner.button_url {
                println!("{}: {url}", banner.button_label());
            }
        }
        OutputFormat::Json => {
            let payload = match banner {
                Some(banner) => json!({ "active": true, "banner": banner }),
                None => json!({ "active": false, "banner": null }),
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }
    Ok(())
}

/// Print the result of a newsletter subscription attempt.
pub(crate) fn print_subscribe_outcome(format: OutputFormat, outcome: SubscribeOutcome) -> Result<()> {
    match format {
        OutputFormat::Plain => match outcome {
            SubscribeOutcome::Subscribed => println!("Successfully subscribed to the newsletter!"),
            SubscribeOutcome::AlreadySubscribed => println!("You are already subscribed."),
        },
        OutputFormat::Json => {
            let payload = json!({
                "subscribed": true,
                "already_subscribed": outcome == SubscribeOutcome::AlreadySubscribed,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }
    Ok(())
}
