//! REST collections client.
//!
//! Each backend collection ("table") is a plain REST resource under the
//! configured base URL: read = `GET /{table}`, bulk create =
//! `POST /{table}` with a JSON array, update = `PUT /{table}/{id}`,
//! delete = `DELETE /{table}/{id}`.
//!
//! Reads and single-record writes are single-shot. Bulk saves retry with
//! linear backoff because they carry seeding and migration batches.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, HttpError};
use crate::retry::RetryPolicy;

/// Named collections exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    MenuItems,
    Orders,
    Transactions,
    Waiters,
    CashClosures,
    Config,
}

impl Table {
    /// Path segment for this collection.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MenuItems => "menu_items",
            Self::Orders => "orders",
            Self::Transactions => "transactions",
            Self::Waiters => "waiters",
            Self::CashClosures => "cash_closures",
            Self::Config => "config",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// REST client for the backend collections.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the configured backend.
    ///
    /// The configured request timeout is enforced on every request.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created. This should never
    /// happen under normal circumstances as we use standard TLS
    /// configuration.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.base_url.clone(),
            }),
        }
    }

    /// Fetch every record in `table`.
    ///
    /// Single attempt: a non-success status or transport failure is
    /// reported as [`ApiError::Fetch`] without retrying. On success the
    /// parsed JSON body is returned unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Fetch`] naming the collection.
    #[instrument(skip(self))]
    pub async fn get_all<T: DeserializeOwned>(&self, table: Table) -> Result<Vec<T>, ApiError> {
        self.request_all(table).await.map_err(|source| {
            error!(%table, error = %source, "fetch failed");
            ApiError::Fetch { table, source }
        })
    }

    /// Bulk-create `items` in `table` with the default retry budget
    /// (2 extra attempts, 500ms linear backoff).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Save`] once every attempt has failed.
    pub async fn save<T: Serialize>(
        &self,
        table: Table,
        items: &[T],
    ) -> Result<serde_json::Value, ApiError> {
        self.save_with_policy(table, items, RetryPolicy::default()).await
    }

    /// Bulk-create `items` in `table`, retrying per `policy`.
    ///
    /// The whole batch either lands or the final failure is reported;
    /// there is no partial-success accounting. Success returns the
    /// backend's response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Save`] carrying the last failure once the
    /// retry budget is spent.
    #[instrument(skip(self, items, policy), fields(count = items.len()))]
    pub async fn save_with_policy<T: Serialize>(
        &self,
        table: Table,
        items: &[T],
        policy: RetryPolicy,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.collection_url(table);
        let client = &self.inner.client;

        policy
            .run(move || {
                let url = url.clone();
                async move {
                    let response = client.post(url).json(items).send().await?;
                    let response = check_status(response).await?;
                    let body: serde_json::Value = response.json().await?;
                    Ok::<_, HttpError>(body)
                }
            })
            .await
            .map_err(|source: HttpError| {
                error!(
                    %table,
                    attempts = policy.max_attempts(),
                    error = %source,
                    "save failed, batch not persisted"
                );
                ApiError::Save {
                    table,
                    attempts: policy.max_attempts(),
                    source,
                }
            })
    }

    /// Replace the record `id` in `table` with `item`. No retry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Update`] naming the collection and record.
    #[instrument(skip(self, item))]
    pub async fn update<T: Serialize>(
        &self,
        table: Table,
        id: &str,
        item: &T,
    ) -> Result<serde_json::Value, ApiError> {
        self.request_update(table, id, item).await.map_err(|source| {
            error!(%table, id, error = %source, "update failed");
            ApiError::Update {
                table,
                id: id.to_string(),
                source,
            }
        })
    }

    /// Delete the record `id` from `table`. No retry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Delete`] naming the collection and record.
    #[instrument(skip(self))]
    pub async fn delete(&self, table: Table, id: &str) -> Result<(), ApiError> {
        self.request_delete(table, id).await.map_err(|source| {
            error!(%table, id, error = %source, "delete failed");
            ApiError::Delete {
                table,
                id: id.to_string(),
                source,
            }
        })
    }

    async fn request_all<T: DeserializeOwned>(&self, table: Table) -> Result<Vec<T>, HttpError> {
        let response = self.inner.client.get(self.collection_url(table)).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn request_update<T: Serialize>(
        &self,
        table: Table,
        id: &str,
        item: &T,
    ) -> Result<serde_json::Value, HttpError> {
        let response = self
            .inner
            .client
            .put(self.record_url(table, id))
            .json(item)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn request_delete(&self, table: Table, id: &str) -> Result<(), HttpError> {
        let response = self
            .inner
            .client
            .delete(self.record_url(table, id))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    fn collection_url(&self, table: Table) -> Url {
        let mut url = self.inner.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(table.as_str());
        }
        url
    }

    fn record_url(&self, table: Table, id: &str) -> Url {
        let mut url = self.collection_url(table);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id);
        }
        url
    }
}

/// Map a non-success response into [`HttpError::Status`], keeping the
/// body for diagnostics.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, HttpError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(HttpError::Status { status, body })
}
