use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spikewatch")]
#[command(version)]
#[command(about = "Detect trending keywords in news headline snapshots")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory and a starter watchlist
    Init,

    /// Run spike detection over a headline snapshot
    Detect(DetectArgs),

    /// Validate and print a watchlist
    Watchlist {
        /// Watchlist JSON (defaults to the data directory, then the built-in list)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// View previously recorded signals
    History {
        /// Show statistics summary
        #[arg(long)]
        stats: bool,

        /// Only show signals for this term
        #[arg(long)]
        term: Option<String>,
    },

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Headline snapshot JSON: an array of headlines or {"articles": [...]}
    #[arg(long)]
    pub headlines: PathBuf,

    /// Watchlist JSON (defaults to the data directory, then the built-in list)
    #[arg(short, long)]
    pub watchlist: Option<PathBuf>,

    /// Print signals as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress terms already reported in the current window
    #[arg(long)]
    pub only_new: bool,

    /// Don't append signals to the signal log
    #[arg(long)]
    pub no_record: bool,

    /// Look-back window length, used to key the seen-set and the log
    #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u32).range(1..))]
    pub window_hours: u32,

    /// Ignore headlines past this many
    #[arg(long, default_value_t = 250)]
    pub max_headlines: usize,

    /// Print per-term counts and why each term was kept or dropped
    #[arg(long)]
    pub explain: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["spikewatch", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_detect_defaults() {
        let cli =
            Cli::try_parse_from(["spikewatch", "detect", "--headlines", "snap.json"]).unwrap();
        if let Commands::Detect(args) = cli.command {
            assert_eq!(args.headlines, PathBuf::from("snap.json"));
            assert_eq!(args.window_hours, 24);
            assert_eq!(args.max_headlines, 250);
            assert!(args.watchlist.is_none());
            assert!(!args.json && !args.only_new && !args.no_record && !args.explain);
        } else {
            panic!("Expected Detect command");
        }
    }

    #[test]
    fn test_cli_parse_detect_flags() {
        let cli = Cli::try_parse_from([
            "spikewatch",
            "detect",
            "--headlines",
            "snap.json",
            "-w",
            "terms.json",
            "--json",
            "--only-new",
            "--window-hours",
            "6",
        ])
        .unwrap();
        if let Commands::Detect(args) = cli.command {
            assert_eq!(args.watchlist, Some(PathBuf::from("terms.json")));
            assert!(args.json);
            assert!(args.only_new);
            assert_eq!(args.window_hours, 6);
        } else {
            panic!("Expected Detect command");
        }
    }

    #[test]
    fn test_cli_rejects_zero_window() {
        let cli = Cli::try_parse_from([
            "spikewatch",
            "detect",
            "--headlines",
            "snap.json",
            "--window-hours",
            "0",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_detect_requires_headlines() {
        assert!(Cli::try_parse_from(["spikewatch", "detect"]).is_err());
    }

    #[test]
    fn test_cli_parse_history() {
        let cli =
            Cli::try_parse_from(["spikewatch", "history", "--stats", "--term", "iran"]).unwrap();
        if let Commands::History { stats, term } = cli.command {
            assert!(stats);
            assert_eq!(term, Some("iran".to_string()));
        } else {
            panic!("Expected History command");
        }
    }
}
