//! Recycling center routes
//!
//! The two GET routes bind from the query string. The submission route
//! additionally accepts an optional JSON body so the item list can be
//! posted as an array; query fields override body fields as usual.

use axum::http::Method;

use itemsys_core::models::{
    AddRecyclingCenterRequest, SearchRecyclingCentersRequest, SubmitRecyclingRequest,
};

use crate::dispatch::RouteDescriptor;

pub(crate) fn routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::json(
            Method::POST,
            "/item-system/recyclings",
            |state, ctx, req: AddRecyclingCenterRequest| async move {
                state.items().add_recycling_center(&ctx, req).await
            },
        ),
        RouteDescriptor::query(
            Method::GET,
            "/item-system/recyclings/search",
            |state, ctx, req: SearchRecyclingCentersRequest| async move {
                state.items().search_recycling_centers(&ctx, req).await
            },
        ),
        RouteDescriptor::query(
            Method::GET,
            "/item-system/recyclings",
            |state, ctx, req: SubmitRecyclingRequest| async move {
                state.items().submit_items_for_recycling(&ctx, req).await
            },
        ),
    ]
}
