//! Commands - one module per flow.
//!
//! Each flow is written against `ListingStore` and a `Write` sink so the
//! same code prints to stdout in production and to a buffer in tests.

mod cheapest_suburbs;
mod cleanup;

use std::io::Write;

use crate::cli::Command;
use crate::database::{ListingStore, SuburbQuery};
use crate::error::Result;
use crate::utils::cutoff_from_date;

pub use cheapest_suburbs::print_cheapest_suburbs;
pub use cleanup::{run_cleanup, CleanupPlan};

/// How report rows are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// A validated flow, ready to run once connected.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    CheapestSuburbs {
        query: SuburbQuery,
        format: OutputFormat,
    },
    Cleanup(CleanupPlan),
}

impl Task {
    /// Validate CLI input before any connection is made.
    pub fn from_command(command: Command, format: OutputFormat) -> Result<Self> {
        match command {
            Command::CheapestSuburbs {
                country,
                market,
                limit,
            } => Ok(Self::CheapestSuburbs {
                query: SuburbQuery::new(country, market, limit)?,
                format,
            }),
            Command::Cleanup {
                name,
                keep,
                stale,
                before,
            } => Ok(Self::Cleanup(CleanupPlan {
                name,
                keep,
                stale,
                cutoff: cutoff_from_date(before),
            })),
        }
    }

    pub async fn run<S, W>(&self, store: &S, out: &mut W) -> Result<()>
    where
        S: ListingStore,
        W: Write,
    {
        match self {
            Self::CheapestSuburbs { query, format } => {
                print_cheapest_suburbs(store, query, *format, out).await?;
            }
            Self::Cleanup(plan) => run_cleanup(store, plan, out).await?,
        }
        out.flush()?;
        Ok(())
    }
}
