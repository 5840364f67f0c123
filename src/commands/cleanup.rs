//! Listing lifecycle: existence checks and deletes.

use std::io::Write;

use mongodb::bson::DateTime;
use tracing::info;

use crate::database::{ListingPresence, ListingStore};
use crate::error::Result;
use crate::utils::format_scraped_date;

/// Names and cutoff driving one cleanup run.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanupPlan {
    /// Listing deleted by name
    pub name: String,
    /// Listing expected to survive the date cutoff
    pub keep: String,
    /// Listing expected to be removed by the date cutoff
    pub stale: String,
    pub cutoff: DateTime,
}

/// Look up a listing by name and classify the result.
pub async fn check_listing<S: ListingStore>(store: &S, name: &str) -> Result<ListingPresence> {
    let listing = store.find_by_name(name).await?;
    Ok(ListingPresence::from_lookup(name, listing.as_ref()))
}

/// Print whether a listing with this name exists.
pub async fn print_if_listing_exists<S, W>(store: &S, name: &str, out: &mut W) -> Result<ListingPresence>
where
    S: ListingStore,
    W: Write,
{
    let presence = check_listing(store, name).await?;
    writeln!(out, "{}", presence)?;
    Ok(presence)
}

/// Delete the first listing with this name and print the count.
pub async fn delete_listing_by_name<S, W>(store: &S, name: &str, out: &mut W) -> Result<u64>
where
    S: ListingStore,
    W: Write,
{
    let deleted = store.delete_by_name(name).await?;
    print_deleted(out, deleted)?;
    Ok(deleted)
}

/// Delete every listing scraped before `cutoff` and print the count.
pub async fn delete_listings_scraped_before<S, W>(store: &S, cutoff: DateTime, out: &mut W) -> Result<u64>
where
    S: ListingStore,
    W: Write,
{
    let deleted = store.delete_scraped_before(cutoff).await?;
    print_deleted(out, deleted)?;
    Ok(deleted)
}

fn print_deleted<W: Write>(out: &mut W, deleted: u64) -> Result<()> {
    writeln!(out, "{} document(s) was/were deleted.", deleted)?;
    Ok(())
}

/// Run the full cleanup sequence.
pub async fn run_cleanup<S, W>(store: &S, plan: &CleanupPlan, out: &mut W) -> Result<()>
where
    S: ListingStore,
    W: Write,
{
    info!("Deleting listing '{}'", plan.name);
    print_if_listing_exists(store, &plan.name, out).await?;
    delete_listing_by_name(store, &plan.name, out).await?;
    print_if_listing_exists(store, &plan.name, out).await?;

    info!(
        "Deleting listings scraped before {}",
        format_scraped_date(plan.cutoff)
    );
    print_if_listing_exists(store, &plan.keep, out).await?;
    print_if_listing_exists(store, &plan.stale, out).await?;
    delete_listings_scraped_before(store, plan.cutoff, out).await?;
    print_if_listing_exists(store, &plan.keep, out).await?;
    print_if_listing_exists(store, &plan.stale, out).await?;

    Ok(())
}
