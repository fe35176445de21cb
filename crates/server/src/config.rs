use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
    time::Duration,
};
use thiserror::Error;

pub const PORT_VAR: &str = "SARTHI_PORT";
pub const HOST_VAR: &str = "SARTHI_HOST";
pub const LATENCY_VAR: &str = "SARTHI_SIMULATED_LATENCY_MS";
pub const TICK_VAR: &str = "SARTHI_TICK_SECS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Delay added before answering search style requests, to mimic a slow backend.
    pub simulated_latency: Duration,
    /// How often the live bus feed moves.
    pub tick_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // 0.0.0.0 so the service is reachable from within a container
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            simulated_latency: Duration::ZERO,
            tick_interval: Duration::from_secs(5),
        }
    }
}

fn parse_var<T, F>(name: &'static str, lookup: &F) -> Result<Option<T>, self::Error>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidValue { name, value }),
        _ => Ok(None),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, self::Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source, unset variables keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, self::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = parse_var(HOST_VAR, &lookup)? {
            config.host = host;
        }
        if let Some(port) = parse_var::<u16, _>(PORT_VAR, &lookup)? {
            if port == 0 {
                return Err(Error::Zero(PORT_VAR));
            }
            config.port = port;
        }
        if let Some(latency) = parse_var(LATENCY_VAR, &lookup)? {
            config.simulated_latency = Duration::from_millis(latency);
        }
        if let Some(secs) = parse_var::<u64, _>(TICK_VAR, &lookup)? {
            if secs == 0 {
                return Err(Error::Zero(TICK_VAR));
            }
            config.tick_interval = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.address().port(), 3000);
    }

    #[test]
    fn overrides_from_vars() {
        let config = Config::from_lookup(lookup(&[
            (PORT_VAR, "8080"),
            (HOST_VAR, "127.0.0.1"),
            (LATENCY_VAR, "1500"),
            (TICK_VAR, "2"),
        ]))
        .unwrap();
        assert_eq!(config.address(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.simulated_latency, Duration::from_millis(1500));
        assert_eq!(config.tick_interval, Duration::from_secs(2));
    }

    #[test]
    fn rejects_garbage() {
        let err = Config::from_lookup(lookup(&[(PORT_VAR, "http")])).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidValue {
                name: PORT_VAR,
                value: "http".into()
            }
        );
        let err = Config::from_lookup(lookup(&[(TICK_VAR, "0")])).unwrap_err();
        assert_eq!(err, Error::Zero(TICK_VAR));
    }
}
