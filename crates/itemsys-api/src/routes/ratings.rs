//! Rating routes

use axum::http::Method;

use itemsys_core::models::{AddRatingRequest, GetRatingsRequest};

use crate::dispatch::RouteDescriptor;

pub(crate) fn routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::json(
            Method::POST,
            "/item-system/ratings/add",
            |state, ctx, req: AddRatingRequest| async move {
                state.items().add_rating(&ctx, req).await
            },
        ),
        RouteDescriptor::json(
            Method::POST,
            "/item-system/ratings/GetAll",
            |state, ctx, req: GetRatingsRequest| async move {
                state.items().get_ratings(&ctx, req).await
            },
        ),
    ]
}
