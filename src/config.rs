//! 실행 설정. 기동 시 환경 변수에서 한 번 읽어 들이고, 없거나 잘못된 값은 기본값을 씁니다.
//!
//! - `APP_HOST`       바인딩할 IP (기본 127.0.0.1)
//! - `APP_PORT`       포트 (기본 3000)
//! - `APP_BODY_LIMIT` 요청 바디 최대 바이트 수 (기본 2MB)

use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub body_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: parse_or("APP_HOST", lookup("APP_HOST"), defaults.host),
            port: parse_or("APP_PORT", lookup("APP_PORT"), defaults.port),
            body_limit: parse_or("APP_BODY_LIMIT", lookup("APP_BODY_LIMIT"), defaults.body_limit),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, value = %raw, %err, "invalid configuration value, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]);

        assert_eq!(config, Config::default());
        assert_eq!(config.addr(), SocketAddr::from(([127, 0, 0, 1], 3000)));
    }

    #[test]
    fn reads_values_from_environment() {
        let config = config_from(&[
            ("APP_HOST", "0.0.0.0"),
            ("APP_PORT", " 8080 "),
            ("APP_BODY_LIMIT", "1024"),
        ]);

        assert_eq!(config.addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.body_limit, 1024);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = config_from(&[("APP_PORT", "not-a-port"), ("APP_HOST", "localhost:80")]);

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
}
