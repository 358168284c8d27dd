//! CLI flag definitions
//!
//! Defines the clap argument surface for the probe binary.

use clap::{Parser, ValueEnum};

/// Default API base URL when `--url` is not given.
pub const DEFAULT_URL: &str = "http://localhost:8000/api";

#[derive(Parser, Debug)]
#[command(name = "ai-probe", about = "Test the SM4RT W4TCH AI service endpoints")]
#[command(version, long_about = None)]
pub struct Args {
    /// Base URL for the API
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// User email for authentication
    #[arg(long)]
    pub email: String,

    /// User password for authentication
    #[arg(long)]
    pub password: String,

    /// Use sample data instead of database data
    #[arg(long)]
    pub sample_data: bool,

    /// Specify which test to run
    #[arg(long, value_enum, default_value_t = TestSelection::All)]
    pub test: TestSelection,
}

/// Which probe(s) to run
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[value(rename_all = "lowercase")]
pub enum TestSelection {
    All,
    Connection,
    Insights,
    Predictions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from([
            "ai-probe",
            "--email",
            "user@example.com",
            "--password",
            "secret",
        ])
        .unwrap();

        assert_eq!(args.url, DEFAULT_URL);
        assert_eq!(args.test, TestSelection::All);
        assert!(!args.sample_data);
    }

    #[test]
    fn test_requires_credentials() {
        assert!(Args::try_parse_from(["ai-probe"]).is_err());
        assert!(Args::try_parse_from(["ai-probe", "--email", "user@example.com"]).is_err());
    }

    #[test]
    fn test_selection_values() {
        for (flag, expected) in [
            ("all", TestSelection::All),
            ("connection", TestSelection::Connection),
            ("insights", TestSelection::Insights),
            ("predictions", TestSelection::Predictions),
        ] {
            let args = Args::try_parse_from([
                "ai-probe",
                "--email",
                "u@e.com",
                "--password",
                "p",
                "--test",
                flag,
            ])
            .unwrap();
            assert_eq!(args.test, expected);
        }
    }
}
