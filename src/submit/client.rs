//! HTTP client for the submission endpoint.

use super::error::SubmitError;
use log::*;
use reqwest::{StatusCode, Url};
use serde::Serialize;

/// Posts JSON documents to a single fixed endpoint.
///
pub struct Client {
    endpoint: Url,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given endpoint, or an error if the
    /// endpoint is not an absolute http(s) URL.
    ///
    pub fn new(endpoint: &str) -> Result<Self, SubmitError> {
        let invalid = |message: String| SubmitError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            message,
        };
        let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        Ok(Client {
            endpoint: url,
            http_client: reqwest::Client::builder().build()?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send the body as JSON and return the response status. The response
    /// body is read and discarded.
    ///
    pub async fn post_json<T: Serialize + ?Sized>(&self, body: &T) -> Result<StatusCode, SubmitError> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(body)
            .send()
            .await?;
        let status = response.status();
        match response.bytes().await {
            Ok(bytes) => trace!("Endpoint answered {} with {} bytes", status, bytes.len()),
            Err(e) => debug!("Could not read response body: {}", e),
        }
        Ok(status)
    }
}
