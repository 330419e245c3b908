use crate::error::AppError;

use std::net::SocketAddr;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_WEBHOOK_PATH: &str = "/twilio/voice";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub webhook_path: String,
    /// Spoken back in the acknowledgement TwiML when set.
    pub greeting: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let listen_addr = lookup("VOICE_WEBHOOK_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("VOICE_WEBHOOK_ADDR: {e}")))?;

        let webhook_path =
            lookup("VOICE_WEBHOOK_PATH").unwrap_or_else(|| DEFAULT_WEBHOOK_PATH.to_string());
        if !webhook_path.starts_with('/') {
            return Err(AppError::Config(format!(
                "VOICE_WEBHOOK_PATH must start with '/', got {webhook_path:?}"
            )));
        }

        let greeting = lookup("VOICE_GREETING").filter(|g| !g.trim().is_empty());

        Ok(Config {
            listen_addr,
            webhook_path,
            greeting,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.webhook_path, "/twilio/voice");
        assert_eq!(config.greeting, None);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("VOICE_WEBHOOK_ADDR", "127.0.0.1:8080"),
            ("VOICE_WEBHOOK_PATH", "/hooks/voice"),
            ("VOICE_GREETING", "Thanks for calling."),
        ])
        .unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.webhook_path, "/hooks/voice");
        assert_eq!(config.greeting.as_deref(), Some("Thanks for calling."));
    }

    #[test]
    fn blank_greeting_is_none() {
        assert_eq!(config(&[("VOICE_GREETING", "  ")]).unwrap().greeting, None);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config(&[("VOICE_WEBHOOK_ADDR", "localhost")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            config(&[("VOICE_WEBHOOK_PATH", "twilio/voice")]),
            Err(AppError::Config(_))
        ));
    }
}
