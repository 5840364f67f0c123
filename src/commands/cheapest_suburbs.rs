//! Cheapest-suburb report.

use std::io::Write;

use futures::TryStreamExt;
use tracing::info;

use super::OutputFormat;
use crate::database::{ListingStore, SuburbQuery};
use crate::error::Result;

/// Print the cheapest suburbs of a market, one per line.
///
/// Rows are written as they arrive from the store. Returns how many were
/// printed.
pub async fn print_cheapest_suburbs<S, W>(
    store: &S,
    query: &SuburbQuery,
    format: OutputFormat,
    out: &mut W,
) -> Result<usize>
where
    S: ListingStore,
    W: Write,
{
    info!(
        "Finding the {} cheapest suburbs in {}, {}",
        query.limit, query.market, query.country
    );

    let mut rows = store.cheapest_suburbs(query).await?;
    let mut printed = 0;

    while let Some(summary) = rows.try_next().await? {
        match format {
            OutputFormat::Text => writeln!(out, "{}", summary)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &summary).map_err(std::io::Error::from)?;
                writeln!(out)?;
            }
        }
        printed += 1;
    }

    Ok(printed)
}
