//! Transport seam between the core and whatever moves bytes.
//!
//! The core never owns a wire protocol; it consumes parsed JSON values and
//! failures shaped like [`ClientError`]. Production code uses
//! [`crate::http::HttpTransport`]; tests substitute scripted fakes.

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value>;
    async fn post(&self, path: &str, body: Value) -> Result<Value>;
    async fn patch(&self, path: &str, body: Value) -> Result<Value>;
    async fn delete(&self, path: &str) -> Result<Value>;
}
