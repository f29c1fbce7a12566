//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use clap::builder::PossibleValuesParser;

use tabula_lib::sample::User;

/// Sort and page through the sample user table.
#[derive(Debug, Parser)]
#[command(name = "tabula", version, about)]
pub struct Args {
    /// Number of sample users to generate.
    #[arg(short = 'n', long, default_value_t = 25)]
    pub records: usize,

    /// Records per page (must be one of the configured options).
    #[arg(short = 's', long, allow_negative_numbers = true)]
    pub page_size: Option<f64>,

    /// Page to show; out-of-range pages are clamped.
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub page: f64,

    /// Toggle sort on a column. Repeat to flip the direction.
    #[arg(long = "sort", value_name = "FIELD", value_parser = PossibleValuesParser::new(User::FIELDS))]
    pub sort: Vec<String>,

    /// Table config file (JSON). Defaults to `<config dir>/table.json` if present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the view as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Log file. Defaults to `<cache dir>/latest.log`.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["tabula"]).unwrap();
        assert_eq!(args.records, 25);
        assert_eq!(args.page, 1.0);
        assert!(args.page_size.is_none());
        assert!(args.sort.is_empty());
    }

    #[test]
    fn test_repeated_sort_and_negative_page() {
        let args =
            Args::try_parse_from(["tabula", "--sort", "name", "--sort", "name", "--page", "-5"])
                .unwrap();
        assert_eq!(args.sort, vec!["name", "name"]);
        assert_eq!(args.page, -5.0);
    }

    #[test]
    fn test_unknown_sort_field_rejected() {
        assert!(Args::try_parse_from(["tabula", "--sort", "age"]).is_err());
    }
}
