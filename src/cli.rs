//! Command-line interface.
//!
//! Defaults reproduce the sample runs against `sample_airbnb`.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::commands::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "airbnb-listings")]
#[command(about = "Reports and cleanup for the sample_airbnb listings collection")]
#[command(version)]
pub struct Cli {
    /// Print report rows as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Print the suburbs with the lowest average price for one-bedroom homes
    CheapestSuburbs {
        #[arg(long, default_value = "Australia")]
        country: String,

        #[arg(long, default_value = "Sydney")]
        market: String,

        /// Maximum number of suburbs to print
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },

    /// Delete a listing by name, then listings scraped before a date
    Cleanup {
        /// Listing to delete by name
        #[arg(long, default_value = "Cozy Cottage")]
        name: String,

        /// Listing expected to survive the date cutoff
        #[arg(long, default_value = "Ribeira Charming Duplex")]
        keep: String,

        /// Listing expected to be removed by the date cutoff
        #[arg(long, default_value = "Horto flat with small garden")]
        stale: String,

        /// Delete listings last scraped before this date (YYYY-MM-DD, UTC)
        #[arg(long, default_value = "2019-02-15")]
        before: NaiveDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["airbnb-listings", "cheapest-suburbs"]).unwrap();
        assert_eq!(
            cli.command,
            Command::CheapestSuburbs {
                country: "Australia".into(),
                market: "Sydney".into(),
                limit: 10,
            }
        );
        assert_eq!(cli.output_format(), OutputFormat::Text);

        let cli = Cli::try_parse_from(["airbnb-listings", "cleanup"]).unwrap();
        match cli.command {
            Command::Cleanup { name, before, .. } => {
                assert_eq!(name, "Cozy Cottage");
                assert_eq!(before, NaiveDate::from_ymd_opt(2019, 2, 15).unwrap());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "airbnb-listings",
            "cheapest-suburbs",
            "--json",
            "--country",
            "Portugal",
            "--market",
            "Porto",
            "-l",
            "3",
        ])
        .unwrap();

        assert_eq!(cli.output_format(), OutputFormat::Json);
        assert!(matches!(cli.command, Command::CheapestSuburbs { limit: 3, .. }));
    }

    #[test]
    fn test_invalid_date() {
        assert!(Cli::try_parse_from(["airbnb-listings", "cleanup", "--before", "15/02/2019"]).is_err());
    }
}
