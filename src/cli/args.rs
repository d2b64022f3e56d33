use clap::Parser;
use std::path::PathBuf;

/// Settle a batch of bets against a catalogue of match results
#[derive(Parser, Debug)]
#[command(name = "betting-engine")]
#[command(about = "Replay player operations and settle bets against match results", long_about = None)]
pub struct CliArgs {
    /// Match data file: match_id,rate_a,rate_b,result
    #[arg(value_name = "MATCHES", help = "Path to the match data file")]
    pub match_file: PathBuf,

    /// Operation log file: player_id,kind,match_id,amount,side
    #[arg(value_name = "OPERATIONS", help = "Path to the operation log file")]
    pub operation_file: PathBuf,

    /// Where to write the report (stdout when omitted)
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Write the report to FILE instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parses_two_positional_files() {
        let parsed =
            CliArgs::try_parse_from(["program", "matches.txt", "operations.txt"]).unwrap();

        assert_eq!(parsed.match_file, PathBuf::from("matches.txt"));
        assert_eq!(parsed.operation_file, PathBuf::from("operations.txt"));
        assert_eq!(parsed.output, None);
    }

    #[rstest]
    #[case::short(&["program", "matches.txt", "operations.txt", "-o", "report.txt"])]
    #[case::long(&["program", "matches.txt", "operations.txt", "--output", "report.txt"])]
    fn test_output_option(#[case] args: &[&str]) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.output, Some(PathBuf::from("report.txt")));
    }

    #[rstest]
    #[case::no_args(&["program"])]
    #[case::one_file(&["program", "matches.txt"])]
    #[case::unknown_flag(&["program", "--fast", "matches.txt", "operations.txt"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
