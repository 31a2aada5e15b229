//! # HTTP client
//!
//! [`ApiClient`] owns a `reqwest::Client` and the backend base URL. Service
//! handles ([`crate::services`]) borrow it and issue exactly one request per
//! call through [`ApiClient::send`], which:
//!
//! 1. appends percent-encoded path segments to the base URL (keeping any
//!    path prefix of the base),
//! 2. sends the request with an optional JSON body,
//! 3. classifies a missing response as [`ApiError::Unreachable`] and a non-2xx
//!    status as [`ApiError::Server`] carrying the body's `message`,
//! 4. returns the parsed JSON body (or the raw text as a JSON string).
//!
//! There are no timeouts or retries; a hung request waits as long as the
//! underlying connection does.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::envelope::message_of;
use crate::error::ApiError;
use crate::services::{Drivers, Orders, Products, Restaurants, Users};

/// Client for the food-delivery REST backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::with_http(&config.base_url, reqwest::Client::new())
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_http(base_url: &str, http: reqwest::Client) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| ApiError::InvalidRequest(format!("invalid base URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidRequest(format!(
                "base URL {base_url} cannot carry paths"
            )));
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn restaurants(&self) -> Restaurants<'_> {
        Restaurants::new(self)
    }

    pub fn drivers(&self) -> Drivers<'_> {
        Drivers::new(self)
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders::new(self)
    }

    pub fn products(&self) -> Products<'_> {
        Products::new(self)
    }

    /// Append `segments` to the base URL. Each segment is percent-encoded, so
    /// an id can never spill into the query string or add path levels.
    pub(crate) fn url(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| {
                ApiError::InvalidRequest(format!("base URL {} cannot carry paths", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments.iter().copied());
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Issue one request and return the decoded JSON body.
    pub(crate) async fn send(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = self.url(segments, query)?;
        debug!("{} {}", method, url);
        let path = url.path().to_string();

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(ApiError::from_transport)?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::Unreachable)?;

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        if !status.is_success() {
            debug!("{} from {}", status, path);
            return Err(ApiError::Server {
                status,
                message: message_of(&body),
            });
        }

        Ok(body)
    }

    pub(crate) async fn get(
        &self,
        segments: &[&str],
        query: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.send(Method::GET, segments, query, None).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<Value, ApiError> {
        self.send(Method::POST, segments, &[], Some(to_json(body)?))
            .await
    }

    pub(crate) async fn patch<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<Value, ApiError> {
        self.send(Method::PATCH, segments, &[], Some(to_json(body)?))
            .await
    }

    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<Value, ApiError> {
        self.send(Method::DELETE, segments, &[], None).await
    }
}

fn to_json<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))
}
