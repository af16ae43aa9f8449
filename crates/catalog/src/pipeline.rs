//! The retrieval pipeline: keeps the store's product list synchronized
//! with its filter/search/pagination state.
//!
//! Every [`RetrievalPipeline::refresh`] takes a monotonically increasing
//! token before issuing its fetch; the response is applied only if the
//! token is still the latest issued. Rapid filter changes can therefore
//! never let an earlier-issued, later-resolved response clobber newer
//! data - the superseded response is dropped.
//!
//! Transient failures (network errors, 5xx) are retried with a doubling
//! delay; terminal failures leave the existing product list untouched and
//! surface a typed [`CatalogError`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::client::OrnamentsClient;
use crate::error::CatalogError;
use crate::store::{Action, SharedStore};
use crate::types::{OrnamentPage, ProductQuery};

const MAX_RETRIES: u32 = 2;
const INITIAL_BACKOFF: Duration = Duration::from_millis(200);

/// What a completed refresh did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The response was current and replaced the product list; carries the
    /// number of products applied.
    Applied(usize),
    /// A newer refresh was issued while this one was in flight; the
    /// response was discarded.
    Superseded,
}

/// Filter-driven remote fetch bound to a [`SharedStore`].
pub struct RetrievalPipeline {
    client: OrnamentsClient,
    store: SharedStore,
    latest: AtomicU64,
}

impl RetrievalPipeline {
    /// Bind a client to a store.
    #[must_use]
    pub const fn new(client: OrnamentsClient, store: SharedStore) -> Self {
        Self {
            client,
            store,
            latest: AtomicU64::new(0),
        }
    }

    /// The store this pipeline writes into.
    #[must_use]
    pub const fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Fetch one listing page for the store's current query and apply it.
    ///
    /// Call after any dispatch that changes filters, search text,
    /// pagination, or currency.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] after retries are exhausted; the product
    /// list is left unchanged in that case.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<RefreshOutcome, CatalogError> {
        // Snapshot and token are taken under the same store lock, so a
        // later token always carries a later-or-equal query snapshot even
        // when refreshes race from multiple threads.
        let (query, token) = self.store.read(|s| {
            let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            (s.query(), token)
        });

        let page = match self.fetch_with_retry(&query).await {
            Ok(page) => page,
            Err(e) => {
                warn!(error = %e, "listing fetch failed; keeping current product list");
                return Err(e);
            }
        };

        if self.latest.load(Ordering::SeqCst) == token {
            let count = page.ornaments.len();
            self.store.dispatch(Action::SetProducts(page.ornaments));
            Ok(RefreshOutcome::Applied(count))
        } else {
            debug!(token, "discarding superseded listing response");
            Ok(RefreshOutcome::Superseded)
        }
    }

    async fn fetch_with_retry(&self, query: &ProductQuery) -> Result<OrnamentPage, CatalogError> {
        let mut backoff = INITIAL_BACKOFF;
        let mut attempt = 0;

        loop {
            match self.client.list_ornaments(query).await {
                Ok(page) => return Ok(page),
                Err(e) if e.is_transient() && attempt < MAX_RETRIES => {
                    attempt += 1;
                    debug!(
                        error = %e,
                        attempt,
                        backoff_ms = backoff.as_millis() as u64,
                        "transient listing failure; retrying"
                    );
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
