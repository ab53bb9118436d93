//! `reqwest` implementation of the [`Transport`] seam.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, Url};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    ClientError, Result,
    transport::Transport,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: Url,
    http: reqwest::Client,
    username: String,
    password: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, username: &str, password: &str) -> Result<Self> {
        Self::with_timeout(base_url, username, password, DEFAULT_TIMEOUT)
    }

    /// The transport owns the only timeout in the stack; callers above it
    /// see an expired request as an aborted one.
    pub fn with_timeout(
        base_url: &str,
        username: &str,
        password: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| ClientError::Other(format!("invalid base_url: {err}")))?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ClientError::Other(err.to_string()))?;
        Ok(Self {
            base_url,
            http,
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let endpoint = self
            .base_url
            .join(path)
            .map_err(|err| ClientError::Other(format!("invalid path {path}: {err}")))?;

        let mut req = self
            .http
            .request(method, endpoint)
            .basic_auth(&self.username, Some(&self.password));
        if let Some(body) = body {
            req = req.json(&body);
        }

        let res = req.send().await.map_err(from_reqwest)?;

        if res.status().is_success() {
            // 204-style empty bodies normalize to null.
            let bytes = res.bytes().await.map_err(from_reqwest)?;
            if bytes.is_empty() {
                return Ok(Value::Null);
            }
            return serde_json::from_slice(&bytes)
                .map_err(|err| ClientError::Payload(err.to_string()));
        }

        let code = res.status().as_u16();
        let message = res
            .json::<ErrorResponse>()
            .await
            .map(|err| err.error)
            .unwrap_or_else(|_| format!("Request failed: {code}"));
        Err(ClientError::Status { code, message })
    }
}

fn from_reqwest(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Aborted
    } else {
        ClientError::Transport(err.to_string())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Value> {
        self.request(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn patch(&self, path: &str, body: Value) -> Result<Value> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        self.request(Method::DELETE, path, None).await
    }
}
