//! Swap negotiation routes

use axum::http::Method;

use itemsys_core::models::{
    AcceptSwapRequest, ListSwapsRequest, RejectSwapRequest, SendSwapRequest,
};

use crate::dispatch::RouteDescriptor;

pub(crate) fn routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::json(
            Method::POST,
            "/item-system/swaps",
            |state, ctx, req: SendSwapRequest| async move {
                state.items().send_swap_request(&ctx, req).await
            },
        ),
        RouteDescriptor::json(
            Method::PUT,
            "/item-system/swaps/accept",
            |state, ctx, req: AcceptSwapRequest| async move {
                state.items().accept_swap_request(&ctx, req).await
            },
        ),
        RouteDescriptor::json(
            Method::PUT,
            "/item-system/swaps/reject",
            |state, ctx, req: RejectSwapRequest| async move {
                state.items().reject_swap_request(&ctx, req).await
            },
        ),
        RouteDescriptor::json(
            Method::PUT,
            "/item-system/swaps/{swap_id}",
            |state, ctx, req: ListSwapsRequest| async move {
                state.items().list_swap_requests(&ctx, req).await
            },
        ),
    ]
}
