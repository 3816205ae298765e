//! Runtime configuration.
//!
//! The page may embed an optional JSON block:
//!
//! ```html
//! <script type="application/json" id="snow-config">{ "log_level": "debug" }</script>
//! ```
//!
//! Every field is optional; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// DOM id of the inline config block.
pub const CONFIG_ELEMENT_ID: &str = "snow-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// localStorage key holding the save record.
    pub storage_key: String,
    /// Discrete game ticks per real-time second.
    pub ticks_per_sec: u32,
    /// Passive income interval in milliseconds.
    pub income_interval_ms: u32,
    /// Delay between the snowflakes of one passive burst.
    pub stagger_ms: u32,
    /// How long a notice stays on screen.
    pub notice_secs: u32,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            storage_key: "snow_clicker".to_string(),
            ticks_per_sec: 10,
            income_interval_ms: 1000,
            stagger_ms: 100,
            notice_secs: 3,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config block.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::Invalid {
                field: "storage_key",
                message: "must not be empty".to_string(),
            });
        }
        if self.ticks_per_sec == 0 || self.ticks_per_sec > 1000 {
            return Err(ConfigError::Invalid {
                field: "ticks_per_sec",
                message: format!("{} is outside 1..=1000", self.ticks_per_sec),
            });
        }
        if self.income_interval_ms < self.tick_ms() {
            return Err(ConfigError::Invalid {
                field: "income_interval_ms",
                message: format!(
                    "{}ms is shorter than one tick ({}ms)",
                    self.income_interval_ms,
                    self.tick_ms()
                ),
            });
        }
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Invalid {
                field: "log_level",
                message: format!("unknown level {:?}", self.log_level),
            });
        }
        Ok(())
    }

    /// Milliseconds per tick.
    pub fn tick_ms(&self) -> u32 {
        1000 / self.ticks_per_sec.max(1)
    }

    /// Passive income interval expressed in ticks (at least 1).
    pub fn income_interval_ticks(&self) -> u32 {
        (self.income_interval_ms / self.tick_ms().max(1)).max(1)
    }

    /// Burst stagger expressed in ticks.
    pub fn stagger_ticks(&self) -> u32 {
        self.stagger_ms / self.tick_ms().max(1)
    }

    pub fn notice_ticks(&self) -> u32 {
        self.notice_secs.saturating_mul(self.ticks_per_sec)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Read the inline config block from the page. Falls back to defaults
    /// when the block is absent or invalid.
    #[cfg(target_arch = "wasm32")]
    pub fn from_document() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => match Self::from_json(&json) {
                Ok(config) => config,
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("snow-clicker: ignoring #{CONFIG_ELEMENT_ID}: {e}").into(),
                    );
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage_key, "snow_clicker");
        assert_eq!(config.tick_ms(), 100);
        assert_eq!(config.income_interval_ticks(), 10);
        assert_eq!(config.stagger_ticks(), 1);
        assert_eq!(config.notice_ticks(), 30);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.income_interval_ms, 1000);
        assert_eq!(config.storage_key, "snow_clicker");
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(GameConfig::from_json("{}").unwrap(), GameConfig::default());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_zero_tick_rate() {
        let err = GameConfig::from_json(r#"{ "ticks_per_sec": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ticks_per_sec", .. }));
    }

    #[test]
    fn rejects_interval_shorter_than_tick() {
        let err = GameConfig::from_json(r#"{ "income_interval_ms": 50 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "income_interval_ms", .. }));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = GameConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "log_level", .. }));
    }

    #[test]
    fn custom_rates_convert_to_ticks() {
        let config = GameConfig {
            ticks_per_sec: 20,
            income_interval_ms: 2000,
            stagger_ms: 200,
            ..GameConfig::default()
        };
        assert_eq!(config.tick_ms(), 50);
        assert_eq!(config.income_interval_ticks(), 40);
        assert_eq!(config.stagger_ticks(), 4);
    }
}
