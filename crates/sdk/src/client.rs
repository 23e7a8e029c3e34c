//! Main client for the Konbini SDK.

use crate::api::*;
use crate::config::{
    resolve_value, ClientConfig, RetryConfig, DEFAULT_ENTITIES_PER_PAGE, ENV_API_KEY,
    ENV_BASE_URL, ENV_SCRIPT_NAME,
};
use crate::error::{KonbiniError, KonbiniResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for interacting with a ShotGrid site.
#[derive(Debug, Clone)]
pub struct KonbiniClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl KonbiniClient {
    /// Create a new client builder.
    pub fn builder() -> KonbiniClientBuilder {
        KonbiniClientBuilder::new()
    }

    /// Create a client from the `KONBINI_*` environment variables alone.
    pub fn from_env() -> KonbiniResult<Self> {
        KonbiniClientBuilder::new().build()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> KonbiniResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the raw RPC API.
    pub fn sg(&self) -> ShotgunApi<'_> {
        ShotgunApi::new(self)
    }

    /// Get the schema API.
    pub fn schema(&self) -> SchemaApi<'_> {
        SchemaApi::new(self)
    }

    /// Get the human users API.
    pub fn humanusers(&self) -> HumanUsersApi<'_> {
        HumanUsersApi::new(self)
    }

    /// Get the projects API.
    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi::new(self)
    }

    /// Get the bookings API.
    pub fn bookings(&self) -> BookingsApi<'_> {
        BookingsApi::new(self)
    }

    /// Get the notes API.
    pub fn notes(&self) -> NotesApi<'_> {
        NotesApi::new(self)
    }

    /// Get the shots API.
    pub fn shots(&self) -> ShotsApi<'_> {
        ShotsApi::new(self)
    }

    /// Get the assets API.
    pub fn assets(&self) -> AssetsApi<'_> {
        AssetsApi::new(self)
    }

    /// Get the versions API.
    pub fn versions(&self) -> VersionsApi<'_> {
        VersionsApi::new(self)
    }

    /// Get the playlists API.
    pub fn playlists(&self) -> PlaylistsApi<'_> {
        PlaylistsApi::new(self)
    }

    /// Get the tasks API.
    pub fn tasks(&self) -> TasksApi<'_> {
        TasksApi::new(self)
    }

    /// Get the time logs API.
    pub fn timelogs(&self) -> TimeLogsApi<'_> {
        TimeLogsApi::new(self)
    }

    /// Get the attachments API.
    pub fn attachments(&self) -> AttachmentsApi<'_> {
        AttachmentsApi::new(self)
    }
}

/// Builder for creating a KonbiniClient.
///
/// Site URL and script credentials not set on the builder are read from
/// `KONBINI_BASE_URL`, `KONBINI_SCRIPT_NAME` and `KONBINI_API_KEY`.
pub struct KonbiniClientBuilder {
    base_url: Option<String>,
    script_name: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
    retry_config: RetryConfig,
    no_ssl_validation: bool,
    entities_per_page: usize,
}

impl KonbiniClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            script_name: None,
            api_key: None,
            timeout: Duration::from_secs(30),
            retry_config: RetryConfig::default(),
            no_ssl_validation: false,
            entities_per_page: DEFAULT_ENTITIES_PER_PAGE,
        }
    }

    /// Set the ShotGrid site URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API script name.
    pub fn script_name(mut self, name: impl Into<String>) -> Self {
        self.script_name = Some(name.into());
        self
    }

    /// Set the API script key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry configuration.
    pub fn retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Skip TLS certificate validation.
    pub fn no_ssl_validation(mut self, skip: bool) -> Self {
        self.no_ssl_validation = skip;
        self
    }

    /// Set the page size used by `read`.
    pub fn entities_per_page(mut self, count: usize) -> Self {
        self.entities_per_page = count;
        self
    }

    /// Build the client.
    pub fn build(self) -> KonbiniResult<KonbiniClient> {
        self.build_with_env(|var| std::env::var(var).ok())
    }

    fn build_with_env(self, lookup: impl Fn(&str) -> Option<String>) -> KonbiniResult<KonbiniClient> {
        let base_url_str = resolve_value(self.base_url, "base_url", ENV_BASE_URL, &lookup)?;
        let script_name = resolve_value(self.script_name, "script_name", ENV_SCRIPT_NAME, &lookup)?;
        let api_key = resolve_value(self.api_key, "api_key", ENV_API_KEY, &lookup)?;

        let base_url = Url::parse(&base_url_str)?;
        if self.entities_per_page == 0 {
            return Err(KonbiniError::Config(
                "entities_per_page must be greater than zero".to_string(),
            ));
        }

        let config = ClientConfig {
            base_url,
            script_name,
            api_key,
            timeout: self.timeout,
            retry_config: self.retry_config,
            no_ssl_validation: self.no_ssl_validation,
            entities_per_page: self.entities_per_page,
        };

        KonbiniClient::from_config(config)
    }
}

impl Default for KonbiniClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
