//! Server runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! server; request handlers never read process-wide environment variables.
//! The binary reads the raw values (after loading `.env`) and hands them to
//! [`ServerConfig::new`] for validation.

use crate::{AnalysisError, CoreResult};

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default bind port.
pub const DEFAULT_PORT: u16 = 5000;

/// Server configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    host: String,
    port: u16,
    debug: bool,
    api_key: String,
}

impl ServerConfig {
    /// Validate raw environment values into a configuration.
    ///
    /// `host`, `port`, and `debug` fall back to defaults when absent. The API
    /// credential is required: without it the process must refuse to start.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::MissingApiKey` when the credential is absent or
    /// blank, and `AnalysisError::InvalidConfig` when the port or debug flag
    /// cannot be parsed.
    pub fn new(
        host: Option<String>,
        port: Option<String>,
        debug: Option<String>,
        api_key: Option<String>,
    ) -> CoreResult<Self> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(AnalysisError::MissingApiKey)?;

        let host = host
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match port.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AnalysisError::InvalidConfig(format!("invalid port value '{raw}'"))
            })?,
            None => DEFAULT_PORT,
        };

        let debug = match debug.map(|d| d.trim().to_lowercase()).filter(|d| !d.is_empty()) {
            Some(raw) => match raw.as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                other => {
                    return Err(AnalysisError::InvalidConfig(format!(
                        "invalid debug flag '{other}' (expected true/false)"
                    )))
                }
            },
            None => false,
        };

        Ok(Self {
            host,
            port,
            debug,
            api_key,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// The startup credential. Nothing in the analysis path consumes it; it
    /// exists so the process fails fast when the deployment is misconfigured.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// `host:port` string for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_fatal() {
        let err = ServerConfig::new(None, None, None, None).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingApiKey));

        let err = ServerConfig::new(None, None, None, Some("   ".into())).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingApiKey));
    }

    #[test]
    fn defaults_apply_when_values_absent() {
        let config = ServerConfig::new(None, None, None, Some("key".into())).unwrap();
        assert_eq!(config.host(), DEFAULT_HOST);
        assert_eq!(config.port(), DEFAULT_PORT);
        assert!(!config.debug());
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn explicit_values_are_parsed() {
        let config = ServerConfig::new(
            Some("0.0.0.0".into()),
            Some("8080".into()),
            Some("True".into()),
            Some("key".into()),
        )
        .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert!(config.debug());
    }

    #[test]
    fn bad_port_and_debug_values_are_rejected() {
        assert!(matches!(
            ServerConfig::new(None, Some("not-a-port".into()), None, Some("key".into())),
            Err(AnalysisError::InvalidConfig(_))
        ));
        assert!(matches!(
            ServerConfig::new(None, None, Some("maybe".into()), Some("key".into())),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }
}
