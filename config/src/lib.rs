use once_cell::sync::Lazy;

pub static CONFIG: Lazy<Config> = Lazy::new(Config::parse);

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use x86::{Bitness, DecoderOptions};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "defaults::decoder")]
    pub decoder: DecoderConfig,
    #[serde(default = "defaults::log")]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecoderConfig {
    #[serde(default = "defaults::bitness", deserialize_with = "bitness")]
    pub bitness: Bitness,
    #[serde(default = "defaults::ip")]
    pub ip: u64,
    #[serde(default = "defaults::no")]
    pub amd: bool,
    #[serde(default = "defaults::no")]
    pub no_invalid_check: bool,
    /// Width of the hex byte column in the listing.
    #[serde(default = "defaults::bytes_width")]
    pub bytes_width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    #[serde(default = "defaults::level", deserialize_with = "level")]
    pub level: log::Level,
}

impl DecoderConfig {
    pub fn options(&self) -> DecoderOptions {
        let mut options = DecoderOptions::empty();
        if self.amd {
            options |= DecoderOptions::AMD;
        }
        if self.no_invalid_check {
            options |= DecoderOptions::NO_INVALID_CHECK;
        }
        options
    }
}

/// Values used when a field is missing from config.yaml.
mod defaults {
    use x86::Bitness;

    pub fn config() -> super::Config {
        super::Config {
            decoder: decoder(),
            log: log(),
        }
    }

    pub fn decoder() -> super::DecoderConfig {
        super::DecoderConfig {
            bitness: bitness(),
            ip: ip(),
            amd: no(),
            no_invalid_check: no(),
            bytes_width: bytes_width(),
        }
    }

    pub fn log() -> super::LogConfig {
        super::LogConfig { level: level() }
    }

    pub fn bitness() -> Bitness {
        Bitness::Bit64
    }

    pub fn ip() -> u64 {
        0
    }

    pub fn no() -> bool {
        false
    }

    pub fn bytes_width() -> usize {
        30
    }

    pub fn level() -> log::Level {
        log::Level::Info
    }
}

impl Default for Config {
    fn default() -> Self {
        defaults::config()
    }
}

impl Config {
    /// Where the config is looked up when no explicit path is given.
    pub fn default_path() -> Option<PathBuf> {
        let mut dir = dirs::config_dir()?;
        dir.push("x86dasm");
        dir.push("config.yaml");
        Some(dir)
    }

    pub fn parse() -> Self {
        match Self::default_path() {
            Some(path) => Self::from_path(&path),
            None => {
                log::warning!("No config directory found, using the default config.");
                defaults::config()
            }
        }
    }

    pub fn from_path(path: &Path) -> Self {
        // a missing file isn't an error, it just means nothing was configured
        let raw = std::fs::read_to_string(path).unwrap_or_default();
        match Self::from_yaml(&raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::warning!("Failed to parse config at {path:?}.\nError: {err}.");

                // parse everything as default
                defaults::config()
            }
        }
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(defaults::config());
        }

        serde_yaml::from_str(raw)
    }
}

fn bitness<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Bitness, D::Error> {
    struct BitnessParsing;
    impl<'de> Visitor<'de> for BitnessParsing {
        type Value = Bitness;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("one of 16, 32 or 64")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            u32::try_from(v)
                .ok()
                .and_then(|v| Bitness::try_from(v).ok())
                .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            match u64::try_from(v) {
                Ok(v) => self.visit_u64(v),
                Err(_) => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
            }
        }
    }

    deserializer.deserialize_u64(BitnessParsing)
}

fn level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<log::Level, D::Error> {
    struct LevelParsing;
    impl<'de> Visitor<'de> for LevelParsing {
        type Value = log::Level;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("one of error, warn, info or trace")
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
            s.parse().map_err(E::custom)
        }
    }

    deserializer.deserialize_str(LevelParsing)
}
