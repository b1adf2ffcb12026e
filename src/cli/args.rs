//! CLI argument definitions for `AI Caddie`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use caddie::config::ConfigOverrides;
use caddie::core::recommend::EmptyBagPolicy;
use caddie::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// What to recommend when the bag is empty
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum PolicyArg {
    /// Report that the bag is empty
    Error,
    /// Use the fixed distance bands
    DefaultBands,
}

impl From<PolicyArg> for EmptyBagPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Error => Self::Error,
            PolicyArg::DefaultBands => Self::DefaultBands,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `bag_file`, `image_span`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum BagSubcommand {
    /// List clubs in display order.
    List,
    /// Add a club at the end of the bag.
    Add {
        /// Club name (e.g., "4-Hybrid")
        #[arg(value_name = "NAME")]
        name: String,
        /// Distance in metres
        #[arg(value_name = "METERS")]
        distance: String,
    },
    /// Change the distance of a club.
    Set {
        /// Club name
        #[arg(value_name = "NAME")]
        name: String,
        /// Distance in metres
        #[arg(value_name = "METERS")]
        distance: String,
    },
    /// Move a club to another position (1 is the top of the list).
    Move {
        /// Club name
        #[arg(value_name = "NAME")]
        name: String,
        /// New position, starting at 1
        #[arg(value_name = "POSITION")]
        position: usize,
    },
    /// Remove a club.
    Remove {
        /// Club name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Restore the standard bag (requires confirmation).
    Reset,
    /// Import a bag saved in the legacy two-file layout.
    Import {
        /// JSON file mapping club names to distances (`{"Driver":"250"}`)
        #[arg(long, value_name = "FILE")]
        distances: PathBuf,
        /// JSON file listing club names in display order
        #[arg(long, value_name = "FILE")]
        order: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum DistanceSubcommand {
    /// Distance between two positions on a hole diagram (fractions 0..1).
    Image {
        /// Start x
        x1: f64,
        /// Start y
        y1: f64,
        /// End x
        x2: f64,
        /// End y
        y2: f64,
        /// Metres covered by the diagram width (defaults to config `image_span`)
        #[arg(long, value_name = "METERS")]
        span: Option<f64>,
        /// Metres covered by the diagram height (defaults to config `image_height_span`)
        #[arg(long, value_name = "METERS")]
        height_span: Option<f64>,
    },
    /// Great-circle distance between two GPS positions.
    #[command(allow_negative_numbers = true)]
    Geo {
        /// Start latitude
        lat1: f64,
        /// Start longitude
        lon1: f64,
        /// End latitude
        lat2: f64,
        /// End longitude
        lon2: f64,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage the club bag.
    ///
    /// If no subcommand is provided, lists the clubs.
    Bag {
        #[command(subcommand)]
        subcommand: Option<BagSubcommand>,
    },
    /// Recommend a club for a remaining distance.
    Recommend {
        /// Remaining distance in metres
        #[arg(value_name = "METERS")]
        distance: f64,
    },
    /// Compute the distance between two points.
    Distance {
        #[command(subcommand)]
        subcommand: DistanceSubcommand,
    },
    /// List courses, nearest first when a position is given.
    #[command(allow_negative_numbers = true)]
    Courses {
        /// Your latitude
        #[arg(long, requires = "lon")]
        lat: Option<f64>,
        /// Your longitude
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
    },
    /// Play a course on its hole diagrams, reading commands from stdin.
    ///
    /// Commands: `tap X Y`, `next`, `prev`, `status`, `quit`.
    Play {
        /// Course name (e.g., "Pebble Beach")
        #[arg(value_name = "COURSE")]
        course: String,
    },
    /// Track shots from GPS fixes read on stdin.
    ///
    /// Lines: `LAT LON` updates the position, `shot` registers a shot,
    /// `where` prints the position, `clear` forgets all shots, `quit` stops.
    Track,
}

#[derive(Parser, Debug)]
#[command(
    name = "caddie",
    about = "AI Caddie: shot distances and club recommendations",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Use a different bag file for this run
    #[arg(long = "bag-file", value_name = "PATH")]
    pub bag_file: Option<PathBuf>,

    /// What to recommend when the bag is empty, for this run
    #[arg(long = "empty-bag-policy", value_enum)]
    pub empty_bag_policy: Option<PolicyArg>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means the config value is kept.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            bag_file: self
                .bag_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            empty_bag_policy: self.empty_bag_policy.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            bag_file: None,
            empty_bag_policy: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare(Command::Config { subcommand: None }).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.bag_file.is_none());
        assert!(overrides.empty_bag_policy.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare(Command::Track);
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_verbose = Some(true);
        cli.bag_file = Some(PathBuf::from("/tmp/bag.json"));
        cli.empty_bag_policy = Some(PolicyArg::DefaultBands);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.bag_file, Some("/tmp/bag.json".to_string()));
        assert_eq!(overrides.empty_bag_policy, Some(EmptyBagPolicy::DefaultBands));
    }

    #[test]
    fn test_parse_geo_with_negative_longitudes() {
        let cli = Cli::try_parse_from([
            "caddie", "distance", "geo", "36.5678", "-121.95", "33.502", "-82.022",
        ])
        .unwrap();
        match cli.command {
            Command::Distance {
                subcommand: DistanceSubcommand::Geo { lon1, lon2, .. },
            } => {
                assert!((lon1 + 121.95).abs() < f64::EPSILON);
                assert!((lon2 + 82.022).abs() < f64::EPSILON);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_courses_needs_both_coordinates() {
        assert!(Cli::try_parse_from(["caddie", "courses", "--lat", "33.7"]).is_err());
        assert!(Cli::try_parse_from(["caddie", "courses", "--lat", "33.7", "--lon", "-84.4"]).is_ok());
    }

    #[test]
    fn test_bag_add_parses() {
        let cli = Cli::try_parse_from(["caddie", "bag", "add", "4-Hybrid", "170"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Bag {
                subcommand: Some(BagSubcommand::Add { ref name, ref distance })
            } if name == "4-Hybrid" && distance == "170"
        ));
    }
}
