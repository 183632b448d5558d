//! Command-line surface of the `ftee` binary.

use clap::{Parser, ValueEnum};
use contracts::Delimiter;
use std::path::PathBuf;

const AFTER_LONG_HELP: &str = "\
Each input file is read line by line, in the order given. A line containing
the delimiter as a whitespace-separated word, followed by one or more paths,
is a directive: every following line is written to each of those paths until
the next directive. Text before the delimiter is ignored, so directives can
live inside comments:

    FTEE somefile
    // FTEE somefile
    # FTEE somefile

The delimiter must have whitespace on both sides (`//FTEE somefile` and
`FTEEsomefile` are errors), may appear only once per line, and must be
followed by at least one path. Paths cannot contain whitespace.

EXAMPLE
    Given an input file containing:

        This is ignored
        FTEE /tmp/out1
        This goes into out1 only.
        FTEE /tmp/out2
        This goes into out2 only.
        FTEE /tmp/out1 /tmp/out3
        This goes into out1 and out3.

    ftee writes /tmp/out1 with the lines 'This goes into out1 only.' and
    'This goes into out1 and out3.', /tmp/out2 with 'This goes into out2
    only.', and /tmp/out3 with 'This goes into out1 and out3.'.

ERRORS
    On any error ftee deletes every output file it created, prints which
    input file and line caused the failure, and exits with a non-zero status.";

/// ftee - many-to-many file splitter
#[derive(Parser, Debug)]
#[command(
    name = "ftee",
    author,
    version,
    about = "Split text files into many outputs using inline directives",
    long_about = "Reads every input file sequentially. When a line ends with \
                  \"DELIMITER outfile1 [outfile2 ...]\", the outfiles are opened and \
                  all following lines are written to each of them until the next \
                  delimiter line.",
    after_long_help = AFTER_LONG_HELP
)]
pub struct Cli {
    /// Input files, processed in order
    #[arg(required = true, value_name = "INFILE")]
    pub inputs: Vec<PathBuf>,

    /// The delimiter tag [default: FTEE]
    #[arg(short, long, env = "FTEE_DELIMITER")]
    pub delimiter: Option<Delimiter>,

    /// Configuration file (TOML or JSON)
    #[arg(short, long, env = "FTEE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print a run summary to stdout when done
    #[arg(long)]
    pub summary: bool,

    /// Print the summary as JSON
    #[arg(long, requires = "summary")]
    pub json: bool,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, env = "FTEE_VERBOSE")]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Shape of log lines on stderr
    #[arg(long, value_enum, default_value = "compact", env = "FTEE_LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl Cli {
    /// Log level used when `RUST_LOG` is unset
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "off";
        }
        match self.verbose {
            0 => "error",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Shape of the log lines written to stderr
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-line, for reading by eye
    Pretty,
    /// One short line per event
    #[default]
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_inputs_and_delimiter() {
        let cli = Cli::try_parse_from(["ftee", "-d", "@@", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.delimiter.unwrap().as_str(), "@@");
        assert_eq!(cli.inputs, [PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }

    #[test]
    fn test_inputs_required() {
        assert!(Cli::try_parse_from(["ftee"]).is_err());
    }

    #[test]
    fn test_invalid_delimiter_rejected() {
        assert!(Cli::try_parse_from(["ftee", "-d", "", "a.txt"]).is_err());
        assert!(Cli::try_parse_from(["ftee", "-d", "a b", "a.txt"]).is_err());
    }

    #[test]
    fn test_log_level() {
        let cli = Cli::try_parse_from(["ftee", "-vv", "a.txt"]).unwrap();
        assert_eq!(cli.log_level(), "debug");

        let cli = Cli::try_parse_from(["ftee", "-q", "a.txt"]).unwrap();
        assert_eq!(cli.log_level(), "off");
    }

    #[test]
    fn test_json_requires_summary() {
        assert!(Cli::try_parse_from(["ftee", "--json", "a.txt"]).is_err());
        assert!(Cli::try_parse_from(["ftee", "--summary", "--json", "a.txt"]).is_ok());
    }
}
