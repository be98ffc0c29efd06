//! Process configuration loaded from environment variables

use crate::types::DEFAULT_ROUND_SECONDS;
use crate::words::DEFAULT_WORDS;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Word list is empty, at least one word is required")]
    EmptyVocabulary,

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Rules for the game itself
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub round_seconds: u32,
    pub words: Vec<String>,
    /// Deviation from the classic rules: only the drawer's strokes are relayed
    pub strict_drawing: bool,
    /// Deviation from the classic rules: the previous drawer is skipped when others are present
    pub no_repeat_drawer: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_seconds: DEFAULT_ROUND_SECONDS,
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            strict_drawing: false,
            no_repeat_drawer: false,
        }
    }
}

impl GameConfig {
    /// Load config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let round_seconds = match std::env::var("ROUND_SECONDS") {
            Ok(v) => match v.trim().parse::<u32>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "ROUND_SECONDS",
                        value: v,
                    })
                }
            },
            Err(_) => DEFAULT_ROUND_SECONDS,
        };

        let words = match std::env::var("WORD_LIST") {
            Ok(v) => parse_word_list(&v),
            Err(_) => DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        };
        if words.is_empty() {
            return Err(ConfigError::EmptyVocabulary);
        }

        Ok(Self {
            round_seconds,
            words,
            strict_drawing: env_flag("STRICT_DRAWING"),
            no_repeat_drawer: env_flag("NO_REPEAT_DRAWER"),
        })
    }
}

/// Where the HTTP server listens and what it serves
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: v.clone(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self { port, static_dir })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Anything other than "0" or "false" turns a flag on; unset means off
fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|v| v != "0" && v.to_lowercase() != "false")
        .unwrap_or(false)
}

fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: &[&str] = &[
        "ROUND_SECONDS",
        "WORD_LIST",
        "STRICT_DRAWING",
        "NO_REPEAT_DRAWER",
        "PORT",
        "STATIC_DIR",
    ];

    fn clear_env() {
        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    fn set_env(key: &str, value: &str) {
        std::env::set_var(key, value);
    }

    #[test]
    fn test_parse_word_list() {
        assert_eq!(
            parse_word_list(" Katze, Hund ,,Baum "),
            vec!["Katze", "Hund", "Baum"]
        );
        assert!(parse_word_list(" , ,").is_empty());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let game = GameConfig::from_env().unwrap();
        assert_eq!(game.round_seconds, 100);
        assert_eq!(game.words.len(), DEFAULT_WORDS.len());
        assert!(!game.strict_drawing);
        assert!(!game.no_repeat_drawer);

        let server = ServerConfig::from_env().unwrap();
        assert_eq!(server.port, 3000);
        assert_eq!(server.static_dir, PathBuf::from("public"));
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        set_env("ROUND_SECONDS", "30");
        set_env("WORD_LIST", "Tisch,Stuhl");
        set_env("STRICT_DRAWING", "1");
        set_env("NO_REPEAT_DRAWER", "false");
        set_env("PORT", "8080");

        let game = GameConfig::from_env().unwrap();
        assert_eq!(game.round_seconds, 30);
        assert_eq!(game.words, vec!["Tisch", "Stuhl"]);
        assert!(game.strict_drawing);
        assert!(!game.no_repeat_drawer);

        let server = ServerConfig::from_env().unwrap();
        assert_eq!(server.addr().port(), 8080);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_word_list_is_fatal() {
        clear_env();
        set_env("WORD_LIST", " , ");

        let result = GameConfig::from_env();
        assert!(matches!(result, Err(ConfigError::EmptyVocabulary)));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_numbers() {
        clear_env();
        set_env("ROUND_SECONDS", "0");
        assert!(matches!(
            GameConfig::from_env(),
            Err(ConfigError::InvalidValue {
                key: "ROUND_SECONDS",
                ..
            })
        ));

        clear_env();
        set_env("PORT", "not-a-port");
        assert!(ServerConfig::from_env().is_err());

        clear_env();
    }
}
