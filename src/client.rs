use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::error::{Result, UserdeskError};
use crate::types::RecordId;

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// A single outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub content_type: Option<&'static str>,
    pub body: Option<serde_json::Value>,
}

/// Response as it came off the wire, before any JSON parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse>;
}

#[derive(Default)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse> {
        let mut builder = self.http.request(request.method, request.url);

        if let Some(content_type) = request.content_type {
            builder = builder.header("Content-Type", content_type);
        }
        if let Some(body) = request.body {
            builder = builder.body(serde_json::to_vec(&body)?);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

/// Thin facade over the users collection: one attempt per call, no retries.
pub struct UsersClient<T> {
    transport: T,
    collection: Url,
}

impl<T: Transport> UsersClient<T> {
    pub fn new(transport: T, collection: Url) -> Self {
        Self {
            transport,
            collection,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn collection(&self) -> Url {
        self.collection.clone()
    }

    /// `{collection}{id}`, with the id encoded as a single path segment.
    pub fn member(&self, id: &RecordId) -> Result<Url> {
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|_| UserdeskError::InvalidUrl(self.collection.to_string()))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    pub async fn get<R: DeserializeOwned>(&self, url: Url) -> Result<R> {
        self.send_json(Method::GET, url, None).await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(&self, url: Url, body: &B) -> Result<R> {
        let body = serde_json::to_value(body)?;
        self.send_json(Method::POST, url, Some(body)).await
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(&self, url: Url, body: &B) -> Result<R> {
        let body = serde_json::to_value(body)?;
        self.send_json(Method::PUT, url, Some(body)).await
    }

    /// Returns the raw response so the caller decides what counts as success.
    pub async fn delete(&self, url: Url) -> Result<RawResponse> {
        self.transport
            .send(HttpRequest {
                method: Method::DELETE,
                url,
                content_type: None,
                body: None,
            })
            .await
    }

    // Status is not inspected here; a non-record body fails to decode instead.
    async fn send_json<R: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<R> {
        let content_type = body.as_ref().map(|_| JSON_CONTENT_TYPE);
        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                content_type,
                body,
            })
            .await?;
        Ok(serde_json::from_str(&response.body)?)
    }
}
