//! # Transport Seam
//!
//! Requests do not send themselves. A [`Transport`] takes the owned
//! [`RpcCall`] snapshot of a request and returns an [`RpcResponse`].
//! Signing, HTTP, and retries live in the transport implementation; this
//! crate only ships [`MockTransport`].
//!
//! ```rust,ignore
//! let client = Client::new(ClientConfig::new("cn-hangzhou"), transport)?;
//!
//! let mut request = DescribeTaskRequest::new();
//! request.set_page_size("10");
//! let response = client.call(&request).await?;
//! ```

mod mock;

pub use mock::{MockTransport, RecordedCall};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::catalogue::DynamicRequest;
use crate::config::{ClientConfig, ResponseFormat};
use crate::error::{AxtError, Result};
use crate::request::{ActionSpec, QueryParams, Request};

// ============================================================================
// CALL / RESPONSE
// ============================================================================

/// Owned snapshot of a request, as handed to a transport
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcCall {
    pub service: &'static str,
    pub version: &'static str,
    pub action: &'static str,
    pub params: QueryParams,
    /// Response format requested on the wire; unset leaves it to the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ResponseFormat>,
}

impl RpcCall {
    pub fn new(
        service: &'static str,
        version: &'static str,
        action: &'static str,
        params: QueryParams,
    ) -> Self {
        Self {
            service,
            version,
            action,
            params,
            format: None,
        }
    }

    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// `Action`, `Version` and `Format` (if set) first, then parameters in
    /// insertion order
    pub fn wire_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::with_capacity(self.params.len() + 3);
        pairs.push(("Action", self.action));
        pairs.push(("Version", self.version));
        if let Some(format) = self.format {
            pairs.push(("Format", format.as_str()));
        }
        pairs.extend(self.params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        pairs
    }

    /// Form-urlencoded [`wire_pairs`](Self::wire_pairs)
    pub fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.wire_pairs())
            .finish()
    }
}

/// Raw response returned by a transport
#[derive(Debug, Clone, PartialEq)]
pub struct RpcResponse {
    /// HTTP-style status code
    pub status: u16,
    pub request_id: Option<String>,
    pub body: Value,
}

impl RpcResponse {
    pub fn from_body(status: u16, body: Value) -> Self {
        let request_id = body
            .get("RequestId")
            .and_then(Value::as_str)
            .map(str::to_string);
        Self {
            status,
            request_id,
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body into a caller-defined model
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.body.clone())?)
    }
}

// ============================================================================
// TRANSPORT TRAIT
// ============================================================================

/// Sends calls to the remote service
#[async_trait]
pub trait Transport: Send + Sync {
    /// Returns the transport name (e.g., "mock")
    fn name(&self) -> &str;

    /// Send one call to `endpoint`.
    ///
    /// A non-2xx response is returned as `Ok`; [`Client`] turns it into
    /// [`AxtError::Remote`]. `Err` is reserved for failures to reach the
    /// service at all.
    async fn send(&self, endpoint: &str, call: RpcCall) -> Result<RpcResponse>;
}

// ============================================================================
// CLIENT
// ============================================================================

/// Pairs a configuration with a transport
pub struct Client<T: Transport> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn call<S: ActionSpec>(&self, request: &Request<S>) -> Result<RpcResponse> {
        self.send(request.to_call()).await
    }

    pub async fn call_dynamic(&self, request: &DynamicRequest) -> Result<RpcResponse> {
        self.send(request.to_call()).await
    }

    async fn send(&self, call: RpcCall) -> Result<RpcResponse> {
        let call = call.with_format(self.config.format);
        let endpoint = self.config.endpoint();
        let action = call.action;

        tracing::debug!(
            transport = self.transport.name(),
            endpoint = %endpoint,
            action = action,
            version = call.version,
            params = call.params.len(),
            "Sending AXT call"
        );

        let response = self.transport.send(&endpoint, call).await?;

        if !response.is_success() {
            let field = |name: &str| {
                response
                    .body
                    .get(name)
                    .and_then(Value::as_str)
                    .map(str::to_string)
            };
            let code = field("Code").unwrap_or_else(|| response.status.to_string());
            let message = field("Message").unwrap_or_default();

            tracing::error!(
                action = action,
                status = response.status,
                code = %code,
                request_id = response.request_id.as_deref().unwrap_or(""),
                "AXT call failed"
            );

            return Err(AxtError::Remote {
                action: action.to_string(),
                code,
                message,
                request_id: response.request_id,
            });
        }

        tracing::debug!(
            action = action,
            request_id = response.request_id.as_deref().unwrap_or(""),
            "AXT call succeeded"
        );

        Ok(response)
    }
}
