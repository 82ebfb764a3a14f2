use argh::FromArgs;
use std::env as stdenv;
use std::path::PathBuf;

pub const ALIAS_FILE: &str = "aliases.txt";
pub const LOG_FILE: &str = "termbot_log.txt";

const DATA_DIR_VAR: &str = "TERMBOT_DATA_DIR";
const LOG_DIR_VAR: &str = "TERMBOT_LOG_DIR";

#[derive(FromArgs, Debug, Default)]
/// terminal assistant that maps plain requests to shell commands.
pub struct Args {
    #[argh(option)]
    /// directory holding aliases.txt; defaults to $TERMBOT_DATA_DIR or ./data
    pub data_dir: Option<PathBuf>,

    #[argh(option)]
    /// directory for termbot_log.txt; defaults to $TERMBOT_LOG_DIR or ./logs
    pub log_dir: Option<PathBuf>,

    #[argh(switch)]
    /// disable colors, animations and the typing effect
    pub no_effects: bool,

    #[argh(switch, short = 'v')]
    /// print debug diagnostics to stderr
    pub verbose: bool,
}

/// Resolved runtime settings.
///
/// Precedence for each directory: command-line flag, then environment
/// variable, then the default relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub effects: bool,
    pub verbose: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Self::resolve(args, |key| stdenv::var(key).ok())
    }

    fn resolve(args: Args, var: impl Fn(&str) -> Option<String>) -> Self {
        let dir = |flag: Option<PathBuf>, key: &str, default: &str| {
            flag.or_else(|| var(key).filter(|v| !v.is_empty()).map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(default))
        };
        Self {
            data_dir: dir(args.data_dir, DATA_DIR_VAR, "data"),
            log_dir: dir(args.log_dir, LOG_DIR_VAR, "logs"),
            effects: !args.no_effects,
            verbose: args.verbose,
        }
    }

    pub fn alias_file(&self) -> PathBuf {
        self.data_dir.join(ALIAS_FILE)
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE)
    }
}
