//! HTTP client for the controller's configuration endpoint.

use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, StatusCode};
use url::Url;

use crate::config::schema::ControllerConfig;
use crate::controller::{ApiError, ConfigService};

const CONFIGURATION_PATH: &str = "onos/v1/configuration/";

/// Error building a [`ControllerClient`] from configuration.
#[derive(Debug, thiserror::Error)]
#[error("invalid controller address {address:?}: {source}")]
pub struct ClientError {
    pub address: String,
    #[source]
    pub source: url::ParseError,
}

/// Communication point to the controller API.
#[derive(Debug)]
pub struct ControllerClient {
    http: reqwest::Client,
    configuration_url: Url,
    login: String,
    password: String,
}

impl ControllerClient {
    /// Build a client for the controller at `config.address`.
    pub fn new(config: &ControllerConfig) -> Result<Self, ClientError> {
        let invalid = |source| ClientError {
            address: config.address.clone(),
            source,
        };
        // The trailing slash matters: Url::join replaces the last segment
        // of a slash-less base.
        let base = Url::parse(&format!("{}/", config.address.trim_end_matches('/')))
            .map_err(invalid)?;
        let configuration_url = base.join(CONFIGURATION_PATH).map_err(invalid)?;

        Ok(Self {
            http: reqwest::Client::new(),
            configuration_url,
            login: config.login.clone(),
            password: config.password.clone(),
        })
    }

    fn item_url(&self, name: &str) -> Result<Url, ApiError> {
        self.configuration_url
            .join(name)
            .map_err(|e| ApiError::new(format!("cannot build URL for configuration {name}: {e}")))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        if self.login.is_empty() {
            request
        } else {
            request.basic_auth(&self.login, Some(&self.password))
        }
    }
}

impl ConfigService for ControllerClient {
    async fn read(&self, name: &str) -> Result<(Vec<u8>, bool), ApiError> {
        let url = self.item_url(name)?;
        tracing::debug!(name, %url, "reading configuration from the controller");

        let response = self
            .authorized(self.http.get(url))
            .send()
            .await
            .map_err(|e| ApiError::new(format!("GET configuration {name}: {e}")))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok((Vec::new(), false));
        }
        if !response.status().is_success() {
            return Err(ApiError::new(format!(
                "controller returned {} reading configuration {name}",
                response.status()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::new(format!("reading configuration {name} body: {e}")))?;
        Ok((body.to_vec(), true))
    }

    async fn write(&self, name: &str, payload: &[u8]) -> Result<(), ApiError> {
        let mut url = self.item_url(name)?;
        url.set_query(Some("preset=true"));
        tracing::info!(name, "posting configuration to the controller");
        tracing::debug!(
            name,
            payload = %String::from_utf8_lossy(payload),
            "configuration payload"
        );

        let response = self
            .authorized(self.http.post(url))
            .header(CONTENT_TYPE, "application/json")
            .body(payload.to_vec())
            .send()
            .await
            .map_err(|e| ApiError::new(format!("POST configuration {name}: {e}")))?;

        if !response.status().is_success() {
            return Err(ApiError::new(format!(
                "controller returned {} writing configuration {name}",
                response.status()
            )));
        }

        tracing::info!(name, "configuration successfully posted");
        Ok(())
    }
}
