//! Lookup command: resolve breed names to their sub-breeds.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use serde::Serialize;
use tracing::{debug, info};

use crate::adapters::cache::CachingBreedFetcher;
use crate::adapters::dog_api::DogApiFetcher;
use crate::domain::models::Config;
use crate::domain::ports::BreedFetcher;

/// One resolved (or failed) breed lookup, as rendered to the user.
#[derive(Debug, Serialize)]
struct LookupOutcome {
    breed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_breeds: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Execute the lookup command.
///
/// Resolves each requested breed in order through a caching fetcher stacked
/// on the dog.ceo adapter, so repeated (or differently-cased) names in one
/// invocation hit the directory only once. Fails with a non-zero exit if any
/// lookup failed, after reporting every outcome.
pub async fn execute(config: &Config, breeds: Vec<String>, stats: bool, json: bool) -> Result<()> {
    let directory =
        DogApiFetcher::with_config(&config.api).context("Failed to build breed directory client")?;
    let fetcher = CachingBreedFetcher::new(Arc::new(directory));

    debug!(requested = breeds.len(), "resolving breeds");

    let mut outcomes = Vec::with_capacity(breeds.len());
    for breed in breeds {
        let outcome = match fetcher.get_sub_breeds(&breed).await {
            Ok(sub_breeds) => LookupOutcome {
                breed,
                sub_breeds: Some(sub_breeds),
                error: None,
            },
            Err(err) => LookupOutcome {
                breed,
                sub_breeds: None,
                error: Some(err.to_string()),
            },
        };
        outcomes.push(outcome);
    }

    info!(
        resolved = outcomes.iter().filter(|o| o.error.is_none()).count(),
        calls_made = fetcher.calls_made(),
        "lookup finished"
    );

    if json {
        print_json(&outcomes, stats.then(|| fetcher.calls_made()))?;
    } else {
        print_table(&outcomes);
        if stats {
            println!("\nDirectory calls made: {}", fetcher.calls_made());
        }
    }

    let failures = outcomes.iter().filter(|o| o.error.is_some()).count();
    if failures > 0 {
        bail!("{failures} breed lookup(s) failed");
    }
    Ok(())
}

fn print_json(outcomes: &[LookupOutcome], calls_made: Option<u64>) -> Result<()> {
    let mut payload: Vec<serde_json::Value> = outcomes
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<_, _>>()
        .context("Failed to serialize lookup results")?;

    if let Some(calls) = calls_made {
        payload.push(serde_json::json!({ "stats": { "calls_made": calls } }));
    }

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn print_table(outcomes: &[LookupOutcome]) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Breed").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
        Cell::new("Sub-breeds").add_attribute(Attribute::Bold),
    ]);

    for outcome in outcomes {
        match (&outcome.sub_breeds, &outcome.error) {
            (Some(sub_breeds), _) => {
                let listing = if sub_breeds.is_empty() {
                    "(none)".to_string()
                } else {
                    sub_breeds.join(", ")
                };
                table.add_row(vec![
                    Cell::new(&outcome.breed),
                    Cell::new(sub_breeds.len()),
                    Cell::new(listing),
                ]);
            }
            (None, Some(error)) => {
                table.add_row(vec![
                    Cell::new(&outcome.breed),
                    Cell::new("-"),
                    Cell::new(error),
                ]);
            }
            (None, None) => {}
        }
    }

    println!("{table}");
}
