//! User routes

use axum::http::Method;

use itemsys_core::models::{
    AddEcoPointsRequest, EcoPointsHistoryRequest, GetUsersRequest, UpdateUserProfileRequest,
    UserRef,
};

use crate::dispatch::RouteDescriptor;

pub(crate) fn routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::path_only(
            Method::GET,
            "/item-system/users/{user_id}",
            |state, ctx, req: UserRef| async move {
                state.users().get_user_profile(&ctx, req).await
            },
        ),
        RouteDescriptor::json(
            Method::PUT,
            "/item-system/users/{user_id}",
            |state, ctx, req: UpdateUserProfileRequest| async move {
                state.users().update_user_profile(&ctx, req).await
            },
        ),
        RouteDescriptor::path_only(
            Method::DELETE,
            "/item-system/users/{user_id}",
            |state, ctx, req: UserRef| async move { state.users().delete_user(&ctx, req).await },
        ),
        // Filtered listing; the filter rides in the body.
        RouteDescriptor::json(
            Method::POST,
            "/item-system/users",
            |state, ctx, req: GetUsersRequest| async move {
                state.users().get_users(&ctx, req).await
            },
        ),
        RouteDescriptor::path_only(
            Method::GET,
            "/item-system/users/{user_id}/eco-points",
            |state, ctx, req: UserRef| async move {
                state.users().get_eco_points(&ctx, req).await
            },
        ),
        RouteDescriptor::json(
            Method::PUT,
            "/item-system/users/{user_id}/eco-points",
            |state, ctx, req: AddEcoPointsRequest| async move {
                state.users().add_eco_points(&ctx, req).await
            },
        ),
        RouteDescriptor::json(
            Method::POST,
            "/item-system/users/{user_id}/eco-points/history",
            |state, ctx, req: EcoPointsHistoryRequest| async move {
                state.users().get_eco_points_history(&ctx, req).await
            },
        ),
    ]
}
