//! Route descriptors and the generic dispatch routine.
//!
//! Every endpoint runs the same pipeline: bind the raw input into the
//! route's typed request, derive a call context, invoke the backend
//! operation under that context, and encode the outcome. A route supplies
//! only its decode/invoke/encode specialization; the sequencing lives here
//! and nowhere else.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use axum::http::Method;
use axum::response::{IntoResponse, Response};
use axum::routing::MethodFilter;
use axum::Json;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use itemsys_core::{CallContext, ServiceResult};

use crate::bind::{self, BodyRule, RawRequest};
use crate::error::ApiError;
use crate::state::AppState;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

type Invoker =
    Box<dyn Fn(AppState, CallContext, RawRequest) -> BoxFuture<Result<Response, ApiError>> + Send + Sync>;

/// Static binding of one (method, path) pair to its decode/invoke/encode
/// triple. Descriptors are built once at startup and never mutated.
pub struct RouteDescriptor {
    method: Method,
    path: &'static str,
    body: BodyRule,
    invoke: Invoker,
}

impl RouteDescriptor {
    /// Route with a required JSON body.
    pub fn json<Req, Resp, F, Fut>(method: Method, path: &'static str, call: F) -> Self
    where
        Req: DeserializeOwned + Send + 'static,
        Resp: Serialize + Send + 'static,
        F: Fn(AppState, CallContext, Req) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ServiceResult<Resp>> + Send + 'static,
    {
        Self::build(method, path, BodyRule::Required, call)
    }

    /// Route bound purely from path parameters; any body is ignored.
    pub fn path_only<Req, Resp, F, Fut>(method: Method, path: &'static str, call: F) -> Self
    where
        Req: DeserializeOwned + Send + 'static,
        Resp: Serialize + Send + 'static,
        F: Fn(AppState, CallContext, Req) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ServiceResult<Resp>> + Send + 'static,
    {
        Self::build(method, path, BodyRule::None, call)
    }

    /// Route bound from the query string, with an optional JSON body as the
    /// lowest-precedence field source.
    pub fn query<Req, Resp, F, Fut>(method: Method, path: &'static str, call: F) -> Self
    where
        Req: DeserializeOwned + Send + 'static,
        Resp: Serialize + Send + 'static,
        F: Fn(AppState, CallContext, Req) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ServiceResult<Resp>> + Send + 'static,
    {
        Self::build(method, path, BodyRule::Optional, call)
    }

    fn build<Req, Resp, F, Fut>(
        method: Method,
        path: &'static str,
        body: BodyRule,
        call: F,
    ) -> Self
    where
        Req: DeserializeOwned + Send + 'static,
        Resp: Serialize + Send + 'static,
        F: Fn(AppState, CallContext, Req) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ServiceResult<Resp>> + Send + 'static,
    {
        let invoke: Invoker = Box::new(move |state, ctx, raw| {
            // Bind before building the call future: a decode failure must
            // never reach the backend.
            let bound = bind::bind::<Req>(body, &raw).map(|req| call(state, ctx.clone(), req));
            Box::pin(async move {
                let outcome = ctx.run(bound.map_err(ApiError::from)?).await?;
                Ok(Json(outcome).into_response())
            })
        });

        Self {
            method,
            path,
            body,
            invoke,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn body_rule(&self) -> BodyRule {
        self.body
    }

    pub(crate) fn method_filter(&self) -> MethodFilter {
        MethodFilter::try_from(self.method.clone())
            .expect("route table uses an unsupported HTTP method")
    }
}

/// Run one request through the pipeline.
///
/// The call context is derived here, at the moment the request has been
/// accepted, so the deadline covers binding as well as the backend call.
pub(crate) async fn dispatch(
    desc: &RouteDescriptor,
    state: AppState,
    path: HashMap<String, String>,
    query: HashMap<String, String>,
    body: Bytes,
) -> Response {
    tracing::debug!(method = %desc.method, path = desc.path, "dispatching request");

    let ctx = CallContext::with_cancel(state.call_timeout(), state.shutdown_token());
    let raw = RawRequest { path, query, body };

    match (desc.invoke)(state, ctx, raw).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
