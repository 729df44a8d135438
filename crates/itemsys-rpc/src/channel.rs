//! RPC channel: one pooled HTTP connection set per backend service.
//!
//! Calls are POSTed as JSON to `rpc/{Service}/{Method}` on the backend
//! endpoint. The channel itself never dials at construction time; the
//! underlying pool connects on first use and reuses sockets across calls,
//! so a backend that is down at startup only fails the calls made against
//! it.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use itemsys_core::{CallContext, ServiceError, ServiceResult};

/// Malformed endpoint configuration. Network reachability is deliberately
/// not checked here; it surfaces per call instead.
#[derive(Debug, thiserror::Error)]
#[error("invalid backend endpoint '{endpoint}': {reason}")]
pub struct InvalidEndpoint {
    endpoint: String,
    reason: String,
}

/// Error envelope returned by the backend services on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct RpcErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    message: String,
}

impl RpcErrorBody {
    fn text(self, fallback: String) -> String {
        if !self.message.is_empty() {
            self.message
        } else if !self.error.is_empty() {
            self.error
        } else {
            fallback
        }
    }
}

/// Reusable, concurrency-safe handle to one backend service.
#[derive(Debug, Clone)]
pub struct RpcChannel {
    http: reqwest::Client,
    base: Url,
    service: &'static str,
}

impl RpcChannel {
    /// Open a channel to `endpoint` for the named service.
    pub fn connect(service: &'static str, endpoint: &str) -> Result<Self, InvalidEndpoint> {
        let mut base = Url::parse(endpoint).map_err(|err| InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: err.to_string(),
        })?;
        // Keep joins relative to the configured path.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: err.to_string(),
            })?;

        tracing::info!(service, endpoint = %base, "backend channel ready");

        Ok(Self {
            http,
            base,
            service,
        })
    }

    /// Invoke one backend operation. The per-call timeout is whatever is
    /// left of the request deadline when the call starts.
    pub async fn call<Req, Resp>(
        &self,
        ctx: &CallContext,
        method: &str,
        request: &Req,
    ) -> ServiceResult<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = self
            .base
            .join(&format!("rpc/{}/{}", self.service, method))
            .map_err(|err| {
                ServiceError::Internal(format!("{}.{}: bad call url: {}", self.service, method, err))
            })?;

        tracing::debug!(service = self.service, method, "backend call");

        let response = self
            .http
            .post(url)
            .timeout(ctx.remaining())
            .json(request)
            .send()
            .await
            .map_err(|err| self.transport_error(method, err))?;

        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(|err| {
                ServiceError::Internal(format!(
                    "{}.{}: undecodable response: {}",
                    self.service, method, err
                ))
            });
        }

        let body = response.json::<RpcErrorBody>().await.unwrap_or_default();
        Err(self.status_error(method, status, body))
    }

    fn transport_error(&self, method: &str, err: reqwest::Error) -> ServiceError {
        if err.is_timeout() {
            ServiceError::DeadlineExceeded
        } else if err.is_connect() {
            ServiceError::Unavailable(format!("{}.{}: {}", self.service, method, err))
        } else {
            ServiceError::Internal(format!("{}.{}: {}", self.service, method, err))
        }
    }

    fn status_error(&self, method: &str, status: StatusCode, body: RpcErrorBody) -> ServiceError {
        let fallback = format!("{}.{} returned HTTP {}", self.service, method, status);
        match status {
            StatusCode::NOT_FOUND => ServiceError::NotFound(body.text(fallback)),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ServiceError::InvalidArgument(body.text(fallback))
            }
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                ServiceError::DeadlineExceeded
            }
            _ => ServiceError::Internal(body.text(fallback)),
        }
    }
}
