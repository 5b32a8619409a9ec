// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::options::{OutputFormat, WatchOutput};
use crate::parsers::{ColorArg, PaintArg, parse_interval_secs};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "wersy",
    version = crate::VERSION,
    about = "Syllable counts and rhyme highlighting for Polish verse"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Text files to analyze (standard input when omitted)
    #[arg(value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Print the text with its line and word counts instead of a report
    #[arg(long, help_heading = "Output")]
    pub export: bool,

    /// Match vowels only from the stressed syllable on (assonance)
    #[arg(long, help_heading = "Rhymes")]
    pub imperfect: bool,

    /// Skip rhyme detection
    #[arg(long, help_heading = "Rhymes")]
    pub no_rhymes: bool,

    /// Highlight colors, cycled in order (comma separated, e.g. #ffadad,#a0c4ff)
    #[arg(long, value_delimiter = ',', help_heading = "Rhymes")]
    pub palette: Vec<ColorArg>,

    /// Toggle a manual highlight on a word, LINE-TOKEN[=COLOR] (0-based, repeatable)
    #[arg(long, help_heading = "Rhymes")]
    pub paint: Vec<PaintArg>,

    /// Abort on the first unreadable input or unknown paint position
    #[arg(long, help_heading = "Behavior")]
    pub strict: bool,

    /// Re-run whenever an input file changes
    #[arg(long, help_heading = "Behavior")]
    pub watch: bool,

    /// Debounce interval for --watch, in seconds
    #[arg(long, value_parser = parse_interval_secs, requires = "watch", help_heading = "Behavior")]
    pub watch_interval: Option<u64>,

    /// Output style for --watch
    #[arg(long, value_enum, default_value = "full", help_heading = "Behavior")]
    pub watch_output: WatchOutput,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Behavior")]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["wersy"]).unwrap();
        assert!(args.paths.is_empty());
        assert_eq!(args.format, OutputFormat::Table);
        assert!(!args.imperfect);
        assert!(args.palette.is_empty());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_full_invocation() {
        let args = Args::try_parse_from([
            "wersy",
            "a.txt",
            "--imperfect",
            "--format",
            "json",
            "--palette",
            "#fff,#000000",
            "--paint",
            "0-2",
            "--paint",
            "1-0=#ffadad",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.paths, [PathBuf::from("a.txt")]);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.palette.len(), 2);
        assert_eq!(args.paint.len(), 2);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_watch_interval_requires_watch() {
        assert!(Args::try_parse_from(["wersy", "a.txt", "--watch-interval", "2"]).is_err());
        assert!(Args::try_parse_from(["wersy", "a.txt", "--watch", "--watch-interval", "2"]).is_ok());
    }
}
