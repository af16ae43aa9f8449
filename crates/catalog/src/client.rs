//! HTTP client for the ornaments API.
//!
//! Wraps `reqwest` with typed response envelopes and `moka` caching for
//! product-detail responses (5-minute TTL, keyed by id and currency).
//! Listing responses are never cached: they are filter-driven and must
//! stay fresh for the pipeline's stale-suppression contract.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use auric_core::{CurrencyCode, ProductId};

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::types::{OrnamentEnvelope, OrnamentPage, Product, ProductQuery};

const DETAIL_CACHE_CAPACITY: u64 = 1000;
const DETAIL_CACHE_TTL: Duration = Duration::from_secs(300); // 5 minutes

/// Client for the ornaments catalog API.
///
/// Cheaply cloneable; use [`OrnamentsClient::with_base_url`] to point at a
/// mock server in tests.
#[derive(Clone)]
pub struct OrnamentsClient {
    inner: Arc<OrnamentsClientInner>,
}

struct OrnamentsClientInner {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<SecretString>,
    detail_cache: Cache<String, Product>,
}

impl OrnamentsClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidUrl`] if the configured base URL does
    /// not parse, or [`CatalogError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Self::build(&config.api_url, config.timeout_secs, config.api_key.clone())
    }

    /// Create a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`OrnamentsClient::new`].
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, CatalogError> {
        Self::build(base_url, timeout_secs, None)
    }

    fn build(
        base_url: &str,
        timeout_secs: u64,
        api_key: Option<SecretString>,
    ) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("auric-catalog/0.1")
            .build()?;

        // Ensure the base URL ends with exactly one slash so join() appends
        // to the path instead of replacing the last segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)?;

        let detail_cache = Cache::builder()
            .max_capacity(DETAIL_CACHE_CAPACITY)
            .time_to_live(DETAIL_CACHE_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(OrnamentsClientInner {
                client,
                base_url,
                api_key,
                detail_cache,
            }),
        })
    }

    /// Fetch one listing page for the given query.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on network failure, a non-success status,
    /// or a malformed response body.
    #[instrument(skip(self, query), fields(page = query.page, search = %query.search))]
    pub async fn list_ornaments(&self, query: &ProductQuery) -> Result<OrnamentPage, CatalogError> {
        let url = self.inner.base_url.join("ornaments")?;
        let response = self
            .request(url)
            .query(&query.to_params())
            .send()
            .await?;

        let page: OrnamentPage = Self::read_json(response).await?;
        debug!(count = page.ornaments.len(), "fetched listing page");
        Ok(page)
    }

    /// Fetch a product by id, priced in the given currency.
    ///
    /// Served from the detail cache when a fresh entry exists.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for unknown ids, or any of the
    /// transport/parse failures of [`OrnamentsClient::list_ornaments`].
    #[instrument(skip(self), fields(id = %id, currency = %currency))]
    pub async fn get_ornament(
        &self,
        id: &ProductId,
        currency: CurrencyCode,
    ) -> Result<Product, CatalogError> {
        let cache_key = format!("{id}:{currency}");
        if let Some(product) = self.inner.detail_cache.get(&cache_key).await {
            debug!("detail cache hit");
            return Ok(product);
        }

        let url = self.inner.base_url.join(&format!("ornaments/{id}"))?;
        let response = self
            .request(url)
            .query(&[("currency", currency.code())])
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(format!("ornament {id}")));
        }

        let envelope: OrnamentEnvelope = Self::read_json(response).await?;
        self.inner
            .detail_cache
            .insert(cache_key, envelope.ornament.clone())
            .await;
        Ok(envelope.ornament)
    }

    fn request(&self, url: Url) -> reqwest::RequestBuilder {
        let mut builder = self.inner.client.get(url);
        if let Some(key) = &self.inner.api_key {
            builder = builder.header("X-Api-Key", key.expose_secret());
        }
        builder
    }

    /// Read the body as text first so a failed parse can be diagnosed.
    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CatalogError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "failed to parse ornaments API response"
            );
            CatalogError::Parse(e)
        })
    }
}
