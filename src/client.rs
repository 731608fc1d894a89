use crate::applications::Applications;
use crate::claims::Claims;
use crate::config::{Config, Credentials};
use crate::errors::Error;
use crate::policies::Policies;
use crate::policyholders::Policyholders;
use crate::quotes::Quotes;
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Root Insurance API.
///
/// Owns the HTTP transport; base URL and credentials are fixed for its
/// lifetime. The resource accessors (`quotes()`, `policyholders()`, ...) hand
/// out thin wrappers that all delegate to [`InsuranceClient::send`].
///
/// # Example
///
/// ```no_run
/// # async fn run() -> Result<(), root_insurance::Error> {
/// use root_insurance::InsuranceClient;
///
/// let client = InsuranceClient::from_env()?;
/// let models = client.quotes().list_models().await?;
/// println!("{} insurable models", models.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct InsuranceClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl InsuranceClient {
    /// Creates a new `InsuranceClient` from an explicit configuration.
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url,
            credentials: config.credentials,
        })
    }

    /// Creates a client configured from the environment.
    ///
    /// Fails with `Error::Credentials` when neither `ROOT_API_KEY` nor the
    /// legacy `ROOT_APP_ID`/`ROOT_APP_SECRET` pair is set.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(Config::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Quote generation and the gadget catalog.
    pub fn quotes(&self) -> Quotes<'_> {
        Quotes::new(self)
    }

    /// Policyholder registration and lookup.
    pub fn policyholders(&self) -> Policyholders<'_> {
        Policyholders::new(self)
    }

    /// Applications against generated quote packages.
    pub fn applications(&self) -> Applications<'_> {
        Applications::new(self)
    }

    /// Policy issuance and lifecycle operations.
    pub fn policies(&self) -> Policies<'_> {
        Policies::new(self)
    }

    /// Claim management.
    pub fn claims(&self) -> Claims<'_> {
        Claims::new(self)
    }

    /// Send one request to the API.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP verb for the endpoint.
    /// * `path` - Path below the versioned insurance base URL.
    /// * `query` - Query parameters; empty slice for none.
    /// * `body` - Optional JSON payload.
    ///
    /// # Returns
    ///
    /// The decoded JSON response body, unchanged. Any non-2xx status fails
    /// with `Error::Api` carrying the status code and the raw body; nothing
    /// is retried.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Value, Error> {
        let url = self.endpoint(path, query)?;
        tracing::info!("{} {}", method, url.path());

        let (username, password) = self.credentials.basic_auth();
        let mut request = self
            .client
            .request(method, url)
            .basic_auth(username, Some(password))
            .header("Content-Type", "application/json");
        if let Some(payload) = body {
            request = request.json(payload);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("API returned {}: {}", status, error_text);
            return Err(Error::Api {
                status,
                body: error_text,
            });
        }

        let data = response
            .json()
            .await
            .map_err(|e| Error::Transport(format!("Failed to parse API response: {}", e)))?;

        Ok(data)
    }

    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url, Error> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| Error::Transport(format!("Failed to build URL for '{}': {}", path, e)))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> InsuranceClient {
        let config = Config::new(Credentials::ApiKey("sandbox_key".to_string()), true);
        InsuranceClient::new(config).unwrap()
    }

    #[test]
    fn client_creation_with_key() {
        let client = test_client();
        assert_eq!(client.base_url(), "https://sandbox.root.co.za/v1/insurance");
    }

    #[test]
    fn endpoint_appends_path_and_query() {
        let client = test_client();
        let url = client
            .endpoint("claims", &[("claim_status", "open".to_string())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://sandbox.root.co.za/v1/insurance/claims?claim_status=open"
        );
    }
}
