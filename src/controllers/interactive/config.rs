use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::num::{NonZeroU32, NonZeroUsize};
use std::path::Path;

pub const DEFAULT_TILE_SIZE: u32 = 64;
pub const DEFAULT_CACHE_CAPACITY: usize = 8;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    ZeroTileSize,
    ZeroWorkerThreads,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read scheduler config: {}", err),
            Self::Parse(err) => write!(f, "invalid scheduler config: {}", err),
            Self::ZeroTileSize => write!(f, "tile_size must be greater than zero"),
            Self::ZeroWorkerThreads => write!(f, "worker_threads must be greater than zero"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::ZeroTileSize | Self::ZeroWorkerThreads => None,
        }
    }
}

/// Tuning for `RenderScheduler`. Every field is optional in TOML.
///
/// ```toml
/// worker_threads = 4
/// tile_size = 32
/// cache_capacity = 0
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Pool size; `None` uses the available hardware parallelism.
    pub worker_threads: Option<usize>,
    /// Edge length of the square tiles, in pixels.
    pub tile_size: u32,
    /// Completed renders kept for reuse; 0 disables the cache.
    pub cache_capacity: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            worker_threads: None,
            tile_size: DEFAULT_TILE_SIZE,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl SchedulerConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(ConfigError::Parse)?;
        config.validate()?;

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }

        if self.worker_threads == Some(0) {
            return Err(ConfigError::ZeroWorkerThreads);
        }

        Ok(())
    }

    pub fn tile_size(&self) -> Result<NonZeroU32, ConfigError> {
        NonZeroU32::new(self.tile_size).ok_or(ConfigError::ZeroTileSize)
    }

    pub fn worker_threads(&self) -> Result<Option<NonZeroUsize>, ConfigError> {
        match self.worker_threads {
            None => Ok(None),
            Some(count) => NonZeroUsize::new(count)
                .map(Some)
                .ok_or(ConfigError::ZeroWorkerThreads),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = SchedulerConfig::default();

        assert_eq!(config.worker_threads, None);
        assert_eq!(config.tile_size, DEFAULT_TILE_SIZE);
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = SchedulerConfig::from_toml_str("").unwrap();

        assert_eq!(config, SchedulerConfig::default());
    }

    #[test]
    fn test_toml_overrides_fields() {
        let config = SchedulerConfig::from_toml_str(
            "worker_threads = 3\ntile_size = 16\ncache_capacity = 0\n",
        )
        .unwrap();

        assert_eq!(config.worker_threads, Some(3));
        assert_eq!(config.tile_size, 16);
        assert_eq!(config.cache_capacity, 0);
        assert_eq!(config.worker_threads().unwrap().map(NonZeroUsize::get), Some(3));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = SchedulerConfig::from_toml_str("tile_sise = 16\n");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_tile_size_is_rejected() {
        let result = SchedulerConfig::from_toml_str("tile_size = 0\n");

        assert!(matches!(result, Err(ConfigError::ZeroTileSize)));
    }

    #[test]
    fn test_zero_worker_threads_is_rejected() {
        let result = SchedulerConfig::from_toml_str("worker_threads = 0\n");

        assert!(matches!(result, Err(ConfigError::ZeroWorkerThreads)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = SchedulerConfig::load("does/not/exist/scheduler.toml");

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.source().is_some());
    }
}
