use lexopt::{Arg, Parser};
use std::path::PathBuf;

pub(crate) static USAGE: &str = "\
Usage: wrapsnake [-c|--config <PATH>] [-l|--log-file <PATH>]

Play snake on a board whose edges wrap around.

Keys:
  ← ↓ ↑ → / h j k l / a s w d    Turn the snake
  r                              Start a new game after dying
  q / Esc / Ctrl-C               Quit

Options:
  -c, --config <PATH>      Read configuration from the given file
  -l, --log-file <PATH>    Write log messages to the given file
  -h, --help               Show this message and exit
  -V, --version            Show the program version and exit
";

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Cli {
    Run(RunOptions),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct RunOptions {
    /// Configuration file to use instead of the default one
    pub(crate) config: Option<PathBuf>,

    /// Log file to use instead of the one in the configuration
    pub(crate) log_file: Option<PathBuf>,
}

impl Cli {
    pub(crate) fn from_env() -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut opts = RunOptions::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    opts.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('l') | Arg::Long("log-file") => {
                    opts.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(opts))
    }
}
