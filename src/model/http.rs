/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::{ERRORS_FIELD, USER_AGENT};
use crate::error::{AppError, BuiltWithResult};
use crate::model::format::ApiResponse;
use crate::model::requests::QueryParams;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// Shared GET executor for the BuiltWith endpoints
///
/// Holds one `reqwest::Client`, so connections are pooled across calls. Every
/// request uses the configured timeout; there is no retry.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates the executor from a configuration
    pub fn new(config: Config) -> BuiltWithResult<Self> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.rest_api.timeout())
            .build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
        })
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// API key sent as `KEY`
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.config.credentials.api_key
    }

    /// Sends a GET to `<base_url>/<path>.<extension>`
    ///
    /// With `structured` set the body is parsed as JSON and an `Errors` field
    /// becomes [`AppError::RemoteApi`]. Otherwise the body is returned as is.
    pub async fn get(
        &self,
        path: &str,
        extension: &str,
        params: &QueryParams,
        structured: bool,
    ) -> BuiltWithResult<ApiResponse> {
        let url = self.config.endpoint_url(path, extension);
        debug!("GET {} ({} params)", url, params.len());

        let response = self.http_client.get(&url).query(params).send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::RemoteApi(format!(
                "request failed with status {status}: {body}"
            )));
        }

        let body = response.text().await?;
        if !structured {
            return Ok(ApiResponse::Raw(body));
        }

        let value: Value = serde_json::from_str(&body)?;
        check_api_errors(value).map(ApiResponse::Structured)
    }
}

/// Fails if a JSON body carries the API's `Errors` field
pub fn check_api_errors(value: Value) -> BuiltWithResult<Value> {
    if let Some(errors) = value.as_object().and_then(|o| o.get(ERRORS_FIELD)) {
        let message = match errors {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        error!("API returned errors: {}", message);
        return Err(AppError::RemoteApi(format!("API error: {message}")));
    }
    Ok(value)
}
