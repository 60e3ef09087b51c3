//! Typed HTTP client for one resource collection.

use std::future::Future;
use std::marker::PhantomData;
use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tokio::time::timeout;

use crate::api::error::{error_message, ApiError};
use crate::config::ApiConfig;
use crate::model::Entity;
use crate::store::Sort;

/// Client for `<base_url>/api/<E::RESOURCE>`.
///
/// Cloning is cheap; clones share the connection pool.
pub struct ResourceClient<E> {
    client: Client,
    url: String,
    request_timeout: Duration,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for ResourceClient<E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            url: self.url.clone(),
            request_timeout: self.request_timeout,
            _entity: PhantomData,
        }
    }
}

/// Builds the shared HTTP client from configuration.
pub fn build_http_client(config: &ApiConfig) -> Result<Client, ApiError> {
    Client::builder()
        .connect_timeout(config.connect_timeout())
        .build()
        .map_err(ApiError::Build)
}

impl<E: Entity> ResourceClient<E> {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::with_client(build_http_client(config)?, config))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        Self {
            client,
            url: config.resource_url(E::RESOURCE),
            request_timeout: config.request_timeout(),
            _entity: PhantomData,
        }
    }

    /// Collection URL this client talks to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// `GET <url>?sort=<field>,<dir>&cacheBuster=<epoch-ms>`
    pub async fn list(&self, sort: Option<&Sort>) -> Result<Vec<E>, ApiError> {
        let mut query = Vec::with_capacity(2);
        if let Some(sort) = sort {
            query.push(("sort", sort.to_string()));
        }
        query.push(("cacheBuster", Utc::now().timestamp_millis().to_string()));
        let request = self.client.get(&self.url).query(&query);
        self.send_json(&self.url, request).await
    }

    /// `GET <url>/<id>`
    pub async fn get(&self, id: i32) -> Result<E, ApiError> {
        let url = self.item_url(id);
        let request = self.client.get(&url);
        self.send_json(&url, request).await
    }

    /// `POST <url>` with the cleaned record.
    pub async fn create(&self, entity: &E) -> Result<E, ApiError> {
        let request = self.client.post(&self.url).json(&entity.clean().into_json());
        self.send_json(&self.url, request).await
    }

    /// `PUT <url>/<id>` with the cleaned record.
    pub async fn update(&self, entity: &E) -> Result<E, ApiError> {
        self.write(Method::PUT, "update", entity).await
    }

    /// `PATCH <url>/<id>` with the cleaned record.
    pub async fn partial_update(&self, entity: &E) -> Result<E, ApiError> {
        self.write(Method::PATCH, "partially update", entity).await
    }

    /// `DELETE <url>/<id>`. Any response body is ignored.
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let url = self.item_url(id);
        let request = self.client.delete(&url);
        self.bounded(self.send(&url, request)).await??;
        Ok(())
    }

    // ---- private helpers ----

    fn item_url(&self, id: i32) -> String {
        format!("{}/{}", self.url, id)
    }

    async fn write(&self, method: Method, action: &'static str, entity: &E) -> Result<E, ApiError> {
        let id = entity.id().ok_or(ApiError::MissingId {
            resource: E::RESOURCE,
            action,
        })?;
        let url = self.item_url(id);
        let request = self
            .client
            .request(method, &url)
            .json(&entity.clean().into_json());
        self.send_json(&url, request).await
    }

    /// Sends, checks and decodes under one timeout.
    async fn send_json<T: DeserializeOwned>(
        &self,
        url: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        self.bounded(async {
            let response = self.send(url, request).await?;
            response
                .json::<T>()
                .await
                .map_err(|source| ApiError::Decode {
                    url: url.to_string(),
                    source,
                })
        })
        .await?
    }

    /// Sends the request and fails on non-2xx statuses. Unbounded; callers
    /// wrap the whole exchange in [`Self::bounded`].
    async fn send(&self, url: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        tracing::debug!(url = %url, resource = E::RESOURCE, "Sending request");

        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Connection {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = match error_message(&body) {
                message if message.is_empty() => status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
                message => message,
            };
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Runs `future` under the configured request timeout. The deadline
    /// covers everything the future awaits, headers and body alike.
    async fn bounded<T>(&self, future: impl Future<Output = T>) -> Result<T, ApiError> {
        timeout(self.request_timeout, future)
            .await
            .map_err(|_| ApiError::Timeout {
                duration: self.request_timeout.as_secs(),
            })
    }
}
