use std::{fs, io, net::SocketAddr};

use anyhow::Context;
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    port: Option<u16>,
}

impl Settings {
    /// Defaults, then the optional settings file, then the environment.
    pub fn from_sources(
        file_contents: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let mut settings = Settings::default();

        if let Some(raw) = file_contents {
            let file_cfg: FileSettings =
                toml::from_str(raw).with_context(|| format!("invalid {SETTINGS_FILE}"))?;
            if let Some(v) = file_cfg.bind_addr {
                settings.bind_addr = v;
            }
            if let Some(v) = file_cfg.port {
                settings.port = v;
            }
        }

        // Blank variables count as unset.
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = env("APP__BIND_ADDR") {
            settings.bind_addr = v.trim().to_string();
        }

        for key in ["PORT", "APP__PORT"] {
            if let Some(v) = env(key) {
                settings.port = v
                    .trim()
                    .parse()
                    .with_context(|| format!("{key}={v:?} is not a valid port"))?;
            }
        }

        Ok(settings)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let host = self.bind_addr.trim();
        let raw = if host.contains(':') && !host.starts_with('[') {
            format!("[{host}]:{}", self.port)
        } else {
            format!("{host}:{}", self.port)
        };
        raw.parse()
            .with_context(|| format!("invalid listen address '{raw}'"))
    }
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let file_contents = match fs::read_to_string(SETTINGS_FILE) {
        Ok(raw) => Some(raw),
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => return Err(err).with_context(|| format!("failed to read {SETTINGS_FILE}")),
    };
    Settings::from_sources(file_contents.as_deref(), |key| std::env::var(key).ok())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_port_3000_on_all_interfaces() {
        let settings = Settings::from_sources(None, env_from(&[])).expect("settings");
        assert_eq!(settings, Settings::default());
        assert_eq!(
            settings.socket_addr().expect("addr"),
            "0.0.0.0:3000".parse::<SocketAddr>().expect("addr")
        );
    }

    #[test]
    fn port_env_overrides_file() {
        let file = "bind_addr = \"127.0.0.1\"\nport = 4000\n";
        let settings =
            Settings::from_sources(Some(file), env_from(&[("PORT", "5000")])).expect("settings");
        assert_eq!(settings.bind_addr, "127.0.0.1");
        assert_eq!(settings.port, 5000);
    }

    #[test]
    fn bind_addr_env_overrides_file() {
        let file = "bind_addr = \"127.0.0.1\"\n";
        let settings = Settings::from_sources(
            Some(file),
            env_from(&[("APP__BIND_ADDR", "::1"), ("PORT", "8080")]),
        )
        .expect("settings");
        assert_eq!(settings.bind_addr, "::1");
        assert_eq!(
            settings.socket_addr().expect("addr"),
            "[::1]:8080".parse::<SocketAddr>().expect("addr")
        );
    }

    #[test]
    fn app_prefixed_port_wins_over_plain_port() {
        let settings = Settings::from_sources(
            None,
            env_from(&[("PORT", "5000"), ("APP__PORT", "6000")]),
        )
        .expect("settings");
        assert_eq!(settings.port, 6000);
    }

    #[test]
    fn rejects_unparsable_port() {
        let err = Settings::from_sources(None, env_from(&[("PORT", "http")]))
            .expect_err("bad port");
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn blank_port_env_falls_back_to_default() {
        let settings = Settings::from_sources(None, env_from(&[("PORT", ""), ("APP__PORT", "  ")]))
            .expect("settings");
        assert_eq!(settings.port, 3000);

        let file = "port = 4000\n";
        let settings =
            Settings::from_sources(Some(file), env_from(&[("PORT", "")])).expect("settings");
        assert_eq!(settings.port, 4000);
    }

    #[test]
    fn blank_bind_addr_env_is_ignored() {
        let settings =
            Settings::from_sources(None, env_from(&[("APP__BIND_ADDR", " ")])).expect("settings");
        assert_eq!(settings.bind_addr, "0.0.0.0");
    }

    #[test]
    fn rejects_malformed_settings_file() {
        assert!(Settings::from_sources(Some("port = \"nope\""), env_from(&[])).is_err());
    }

    #[test]
    fn brackets_ipv6_bind_addresses() {
        let settings = Settings {
            bind_addr: "::1".into(),
            port: 3000,
        };
        assert_eq!(
            settings.socket_addr().expect("addr"),
            "[::1]:3000".parse::<SocketAddr>().expect("addr")
        );
    }
}
