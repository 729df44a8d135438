//! Statistics routes

use axum::http::Method;

use itemsys_core::models::GetStatisticsRequest;

use crate::dispatch::RouteDescriptor;

pub(crate) fn routes() -> Vec<RouteDescriptor> {
    vec![RouteDescriptor::json(
        Method::POST,
        "/item-system/statistics",
        |state, ctx, req: GetStatisticsRequest| async move {
            state.items().get_statistics(&ctx, req).await
        },
    )]
}
