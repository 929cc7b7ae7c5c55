// region:    --- Imports
use std::collections::HashMap;
use std::env::VarError;
use thiserror::Error;

// endregion: --- Imports

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const KEYS: [&str; 5] = [
    "DATABASE_URL",
    "DATABASE_MAX_CONNECTIONS",
    "BIND_ADDR",
    "RESET_DATABASE",
    "SEED_DATABASE",
];

// region:    --- Config
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// 환경 변수 기반 서비스 설정
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// 없으면 메모리 저장소 사용
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub bind_addr: String,
    pub reset_database: bool,
    pub seed_database: bool,
}

impl Config {
    /// 프로세스 환경 변수로부터 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut vars = HashMap::new();
        for key in KEYS {
            if let Some(value) = env_value(key, std::env::var(key))? {
                vars.insert(key.to_string(), value);
            }
        }
        Self::from_vars(vars)
    }

    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    key: "DATABASE_MAX_CONNECTIONS",
                    expected: "a positive integer",
                    value: raw.to_string(),
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url: get("DATABASE_URL").map(str::to_string),
            max_connections,
            bind_addr: get("BIND_ADDR").unwrap_or(DEFAULT_BIND_ADDR).to_string(),
            reset_database: parse_flag("RESET_DATABASE", get("RESET_DATABASE"))?,
            seed_database: parse_flag("SEED_DATABASE", get("SEED_DATABASE"))?,
        })
    }
}

/// 설정 키 하나의 값 (UTF-8 이 아니면 설정 오류)
fn env_value(
    key: &'static str,
    value: Result<String, VarError>,
) -> Result<Option<String>, ConfigError> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::Invalid {
            key,
            expected: "valid UTF-8",
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

fn parse_flag(key: &'static str, raw: Option<&str>) -> Result<bool, ConfigError> {
    match raw.map(str::to_ascii_lowercase).as_deref() {
        None => Ok(false),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => Err(ConfigError::Invalid {
            key,
            expected: "a boolean",
            value: other.to_string(),
        }),
    }
}
// endregion: --- Config

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_without_any_variables() {
        let config = Config::from_vars(HashMap::new()).unwrap();
        assert_eq!(config.database_url, None);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(!config.reset_database);
        assert!(!config.seed_database);
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_vars(vars(&[
            ("DATABASE_URL", "postgres://localhost/auctions"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("RESET_DATABASE", "true"),
            ("SEED_DATABASE", "1"),
        ]))
        .unwrap();

        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/auctions")
        );
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert!(config.reset_database);
        assert!(config.seed_database);
    }

    #[test]
    fn blank_database_url_means_in_memory() {
        let config = Config::from_vars(vars(&[("DATABASE_URL", "  ")])).unwrap();
        assert_eq!(config.database_url, None);
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_value_is_a_config_error() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![0x66, 0xff]);
        let err = env_value("BIND_ADDR", Err(VarError::NotUnicode(raw))).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "BIND_ADDR",
                expected: "valid UTF-8",
                ..
            }
        ));
        assert_eq!(env_value("BIND_ADDR", Err(VarError::NotPresent)), Ok(None));
    }

    #[cfg(unix)]
    #[test]
    fn unrelated_non_unicode_variable_does_not_break_loading() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        std::env::set_var("AUCTION_TEST_NOT_UTF8", OsStr::from_bytes(&[0x66, 0xff]));
        let result = Config::from_env();
        std::env::remove_var("AUCTION_TEST_NOT_UTF8");

        assert!(result.is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_vars(vars(&[("DATABASE_MAX_CONNECTIONS", "0")])).is_err());
        assert!(Config::from_vars(vars(&[("DATABASE_MAX_CONNECTIONS", "many")])).is_err());
        assert_eq!(
            Config::from_vars(vars(&[("SEED_DATABASE", "maybe")])),
            Err(ConfigError::Invalid {
                key: "SEED_DATABASE",
                expected: "a boolean",
                value: "maybe".to_string(),
            })
        );
    }
}
// endregion: --- Tests
