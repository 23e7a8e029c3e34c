//! HTTP transport for the ShotGrid JSON-RPC endpoint.

use crate::config::ClientConfig;
use crate::error::{FaultResponse, KonbiniError, KonbiniResult};
use reqwest::{header, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Path of the RPC endpoint relative to the site root.
const RPC_PATH: &str = "/api3/json";

/// HTTP transport for making RPC calls.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

/// `Retry-After` in whole seconds, as sent with a throttled response.
fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> KonbiniResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("konbini/", env!("CARGO_PKG_VERSION"))),
        );

        let builder = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers);
        // Certificate checks only exist when a TLS backend is compiled in.
        #[cfg(any(feature = "rustls-tls", feature = "native-tls"))]
        let builder = builder.danger_accept_invalid_certs(config.no_ssl_validation);
        #[cfg(not(any(feature = "rustls-tls", feature = "native-tls")))]
        if config.no_ssl_validation {
            warn!("no_ssl_validation has no effect without a TLS feature");
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the RPC endpoint URL.
    fn build_url(&self) -> KonbiniResult<url::Url> {
        self.config
            .base_url
            .join(RPC_PATH)
            .map_err(KonbiniError::InvalidUrl)
    }

    /// Execute a request with retries.
    async fn execute_with_retry(&self, request_builder: RequestBuilder) -> KonbiniResult<Response> {
        let retry_config = &self.config.retry_config;
        let mut attempts = 0;

        loop {
            let request = request_builder
                .try_clone()
                .ok_or_else(|| KonbiniError::Config("Request cannot be cloned".to_string()))?;

            match request.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();

                    if response.status().is_success() {
                        return Ok(response);
                    }

                    if attempts < retry_config.max_retries
                        && retry_config.should_retry_status(status)
                    {
                        let backoff =
                            retry_config.delay_for_attempt(attempts, retry_after(&response));
                        warn!(
                            status = status,
                            attempt = attempts + 1,
                            backoff_ms = backoff.as_millis(),
                            "Request failed, retrying"
                        );
                        tokio::time::sleep(backoff).await;
                        attempts += 1;
                        continue;
                    }

                    let body = response.text().await.unwrap_or_default();
                    return Err(KonbiniError::from_response(status, &body));
                }
                Err(e) => {
                    if attempts < retry_config.max_retries && (e.is_timeout() || e.is_connect()) {
                        let backoff = retry_config.backoff_for_attempt(attempts);
                        warn!(
                            attempt = attempts + 1,
                            backoff_ms = backoff.as_millis(),
                            error = %e,
                            "Request did not complete, retrying"
                        );
                        tokio::time::sleep(backoff).await;
                        attempts += 1;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }

    /// Script credentials sent as the first RPC parameter.
    fn auth_params(&self) -> Value {
        json!({
            "script_name": self.config.script_name,
            "script_key": self.config.api_key,
        })
    }

    /// Call an RPC method and return its `results`.
    pub async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> KonbiniResult<T> {
        let url = self.build_url()?;
        debug!(method = method, url = %url, "RPC call");

        let body = json!({
            "method_name": method,
            "params": [self.auth_params(), params],
        });
        let response = self
            .execute_with_retry(self.client.post(url).json(&body))
            .await?;
        let envelope: Value = response.json().await?;
        Self::unwrap_results(envelope)
    }

    fn unwrap_results<T: DeserializeOwned>(mut envelope: Value) -> KonbiniResult<T> {
        if envelope.get("exception").and_then(Value::as_bool) == Some(true) {
            let fault: FaultResponse = serde_json::from_value(envelope)?;
            return Err(KonbiniError::Fault {
                error_code: fault.error_code,
                message: fault.message,
            });
        }

        let results = envelope
            .get_mut("results")
            .map(Value::take)
            .ok_or_else(|| KonbiniError::UnexpectedResponse("missing results".to_string()))?;
        Ok(serde_json::from_value(results)?)
    }
}
