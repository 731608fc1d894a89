use crate::errors::Error;

const SANDBOX_URL: &str = "https://sandbox.root.co.za/v1/insurance";
const PRODUCTION_URL: &str = "https://api.root.co.za/v1/insurance";

/// API credentials, sent as HTTP basic auth on every request.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Current scheme: the API key is the username, the password is empty.
    ApiKey(String),
    /// Legacy scheme: app id as username, app secret as password.
    AppPair {
        app_id: String,
        app_secret: String,
    },
}

impl Credentials {
    /// Resolve credentials from explicit values, preferring the API key.
    ///
    /// Empty or whitespace-only values count as absent.
    pub fn resolve(
        api_key: Option<String>,
        app_id: Option<String>,
        app_secret: Option<String>,
    ) -> Result<Self, Error> {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        if let Some(key) = present(api_key) {
            return Ok(Credentials::ApiKey(key));
        }
        match (present(app_id), present(app_secret)) {
            (Some(id), Some(secret)) => Ok(Credentials::AppPair {
                app_id: id,
                app_secret: secret,
            }),
            _ => Err(Error::Credentials(
                "no ROOT_API_KEY or ROOT_APP_ID/ROOT_APP_SECRET resolvable".to_string(),
            )),
        }
    }

    /// Resolve credentials from the environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::resolve(
            std::env::var("ROOT_API_KEY").ok(),
            std::env::var("ROOT_APP_ID").ok(),
            std::env::var("ROOT_APP_SECRET").ok(),
        )
    }

    /// Basic-auth username/password pair for this credential.
    pub(crate) fn basic_auth(&self) -> (&str, &str) {
        match self {
            Credentials::ApiKey(key) => (key.as_str(), ""),
            Credentials::AppPair { app_id, app_secret } => {
                (app_id.as_str(), app_secret.as_str())
            }
        }
    }
}

/// Client configuration: credentials plus the environment to talk to.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    /// Sandbox mode targets the sandbox host and is the default.
    pub sandbox: bool,
    pub base_url: String,
}

impl Config {
    /// Build a config for the given credentials, picking the host from the
    /// sandbox flag.
    pub fn new(credentials: Credentials, sandbox: bool) -> Self {
        let base_url = if sandbox { SANDBOX_URL } else { PRODUCTION_URL };
        Self {
            credentials,
            sandbox,
            base_url: base_url.to_string(),
        }
    }

    /// Override the base URL (points the client at a mock or staging host).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load configuration from the environment.
    ///
    /// `ROOT_API_KEY` (or the legacy `ROOT_APP_ID`/`ROOT_APP_SECRET` pair) must
    /// be set; fails fast with `Error::Credentials` otherwise. `ROOT_SANDBOX`
    /// selects the host (sandbox unless set to `false`/`0`/`no`), and
    /// `ROOT_BASE_URL` overrides it entirely.
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok();

        let credentials = Credentials::from_env()?;
        let sandbox = match std::env::var("ROOT_SANDBOX") {
            Ok(v) => !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"),
            Err(_) => true,
        };

        let mut config = Config::new(credentials, sandbox);
        if let Ok(url) = std::env::var("ROOT_BASE_URL") {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }

        tracing::info!(
            "Configuration loaded, running against {} environment",
            if config.sandbox { "sandbox" } else { "PRODUCTION" }
        );
        tracing::debug!("Base URL: {}", config.base_url);
        tracing::debug!("API credentials: [REDACTED]");

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_takes_precedence_over_app_pair() {
        let creds = Credentials::resolve(
            Some("key_123".to_string()),
            Some("app".to_string()),
            Some("secret".to_string()),
        )
        .unwrap();
        assert_eq!(creds.basic_auth(), ("key_123", ""));
    }

    #[test]
    fn app_pair_used_when_no_api_key() {
        let creds =
            Credentials::resolve(None, Some("app".to_string()), Some("secret".to_string()))
                .unwrap();
        assert_eq!(creds.basic_auth(), ("app", "secret"));
    }

    #[test]
    fn missing_credentials_fail() {
        let err = Credentials::resolve(None, None, None).unwrap_err();
        assert!(matches!(err, Error::Credentials(_)));
    }

    #[test]
    fn empty_values_count_as_absent() {
        let err = Credentials::resolve(
            Some("   ".to_string()),
            Some("".to_string()),
            Some("secret".to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Credentials(_)));
    }

    #[test]
    fn sandbox_flag_picks_host() {
        let creds = Credentials::ApiKey("k".to_string());
        assert_eq!(Config::new(creds.clone(), true).base_url, SANDBOX_URL);
        assert_eq!(Config::new(creds, false).base_url, PRODUCTION_URL);
    }
}
