use crate::consts;
use crate::game::Axis;
use log::LevelFilter;
use serde::Deserialize;
use std::num::NonZeroU64;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// How fast the snake moves
    #[serde(default)]
    pub(crate) speed: SpeedConfig,

    /// Where and how much to log
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("wrapsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawSpeedConfig")]
pub(crate) struct SpeedConfig {
    /// Time between movements of the snake while it's moving horizontally
    horizontal: Duration,

    /// Time between movements of the snake while it's moving vertically
    vertical: Duration,
}

impl SpeedConfig {
    /// Return the time between movements of the snake while it's moving
    /// along `axis`
    pub(crate) fn period(&self, axis: Axis) -> Duration {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

impl Default for SpeedConfig {
    fn default() -> SpeedConfig {
        let horizontal = Duration::from_millis(consts::DEFAULT_TICK_MILLIS.get());
        SpeedConfig {
            horizontal,
            vertical: horizontal.mul_f64(consts::DEFAULT_VERTICAL_RATIO),
        }
    }
}

#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawSpeedConfig {
    tick_ms: NonZeroU64,
    vertical_ratio: f64,
}

impl Default for RawSpeedConfig {
    fn default() -> RawSpeedConfig {
        RawSpeedConfig {
            tick_ms: consts::DEFAULT_TICK_MILLIS,
            vertical_ratio: consts::DEFAULT_VERTICAL_RATIO,
        }
    }
}

impl TryFrom<RawSpeedConfig> for SpeedConfig {
    type Error = SpeedError;

    fn try_from(value: RawSpeedConfig) -> Result<SpeedConfig, SpeedError> {
        let horizontal = Duration::from_millis(value.tick_ms.get());
        if horizontal > consts::MAX_TICK {
            return Err(SpeedError::TickTooLong(value.tick_ms));
        }
        let ratio = value.vertical_ratio;
        if ratio.is_nan() || ratio < 1.0 {
            return Err(SpeedError::VerticalRatio(ratio));
        }
        match Duration::try_from_secs_f64(horizontal.as_secs_f64() * ratio) {
            Ok(vertical) if vertical <= consts::MAX_TICK => Ok(SpeedConfig {
                horizontal,
                vertical,
            }),
            _ => Err(SpeedError::VerticalTooLong(ratio)),
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct LogConfig {
    /// File to write log messages to.  If not set, nothing is logged.
    pub(crate) file: Option<PathBuf>,

    /// Most verbose level of message to log
    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub(crate) enum SpeedError {
    #[error("tick-ms must be at most {max} ms, got {0}", max = consts::MAX_TICK.as_millis())]
    TickTooLong(NonZeroU64),
    #[error("vertical-ratio must be a number no less than 1.0, got {0}")]
    VerticalRatio(f64),
    #[error(
        "vertical-ratio {0} makes vertical ticks longer than {max} ms",
        max = consts::MAX_TICK.as_millis()
    )]
    VerticalTooLong(f64),
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn load_str(src: &str) -> Result<Config, ConfigError> {
        let mut tmpfile = NamedTempFile::new().expect("failed to create tempfile");
        tmpfile
            .write_all(src.as_bytes())
            .expect("failed to write tempfile");
        Config::load(tmpfile.path(), false)
    }

    #[test]
    fn empty_file() {
        let cfg = load_str("").expect("empty config should load");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.speed.period(Axis::Horizontal), Duration::from_millis(100));
        assert!(cfg.speed.period(Axis::Vertical) > cfg.speed.period(Axis::Horizontal));
        assert_eq!(cfg.log.file, None);
        assert_eq!(cfg.log.level, LevelFilter::Info);
    }

    #[test]
    fn full_file() {
        let cfg = load_str(concat!(
            "[speed]\n",
            "tick-ms = 80\n",
            "vertical-ratio = 2.0\n",
            "\n",
            "[log]\n",
            "file = \"/tmp/wrapsnake.log\"\n",
            "level = \"debug\"\n",
        ))
        .expect("config should load");
        assert_eq!(cfg.speed.period(Axis::Horizontal), Duration::from_millis(80));
        assert_eq!(cfg.speed.period(Axis::Vertical), Duration::from_millis(160));
        assert_eq!(cfg.log.file, Some(PathBuf::from("/tmp/wrapsnake.log")));
        assert_eq!(cfg.log.level, LevelFilter::Debug);
    }

    #[test]
    fn partial_speed() {
        let cfg = load_str("[speed]\ntick-ms = 250\n").expect("config should load");
        assert_eq!(cfg.speed.period(Axis::Horizontal), Duration::from_millis(250));
        assert_eq!(
            cfg.speed.period(Axis::Vertical),
            Duration::from_millis(250).mul_f64(consts::DEFAULT_VERTICAL_RATIO)
        );
    }

    #[test]
    fn zero_tick() {
        let r = load_str("[speed]\ntick-ms = 0\n");
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn small_vertical_ratio() {
        let r = load_str("[speed]\nvertical-ratio = 0.5\n");
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn nan_vertical_ratio() {
        let r = load_str("[speed]\nvertical-ratio = nan\n");
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }

    #[rstest]
    #[case("[speed]\nvertical-ratio = 1e30\n")]
    #[case("[speed]\nvertical-ratio = inf\n")]
    #[case("[speed]\nvertical-ratio = 601.0\n")]
    #[case("[speed]\ntick-ms = 60001\n")]
    #[case("[speed]\ntick-ms = 18446744073709551615\n")]
    #[case("[speed]\ntick-ms = 40000\nvertical-ratio = 2.0\n")]
    fn overlong_period(#[case] src: &str) {
        let r = load_str(src);
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn longest_period() {
        let cfg = load_str("[speed]\ntick-ms = 30000\nvertical-ratio = 2.0\n")
            .expect("config should load");
        assert_eq!(cfg.speed.period(Axis::Horizontal), Duration::from_secs(30));
        assert_eq!(cfg.speed.period(Axis::Vertical), consts::MAX_TICK);
    }

    #[test]
    fn missing_allowed() {
        let tmpdir = tempfile::tempdir().expect("failed to create tempdir");
        let path = tmpdir.path().join("config.toml");
        let cfg = Config::load(&path, true).expect("missing config should be allowed");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn missing_not_allowed() {
        let tmpdir = tempfile::tempdir().expect("failed to create tempdir");
        let path = tmpdir.path().join("config.toml");
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Read(_))));
    }
}
