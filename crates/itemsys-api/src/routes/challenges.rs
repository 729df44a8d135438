//! Eco-challenge and eco-tip routes

use axum::http::Method;

use itemsys_core::models::{
    CreateEcoChallengeRequest, CreateEcoTipRequest, GetEcoTipsRequest,
    ParticipateEcoChallengeRequest, UpdateChallengeProgressRequest,
};

use crate::dispatch::RouteDescriptor;

pub(crate) fn routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::json(
            Method::POST,
            "/item-system/ecosystem/eco-challenge",
            |state, ctx, req: CreateEcoChallengeRequest| async move {
                state.items().create_eco_challenge(&ctx, req).await
            },
        ),
        RouteDescriptor::json(
            Method::POST,
            "/item-system/ecosystem/participate",
            |state, ctx, req: ParticipateEcoChallengeRequest| async move {
                state.items().participate_eco_challenge(&ctx, req).await
            },
        ),
        RouteDescriptor::json(
            Method::PUT,
            "/item-system/ecosystem/update",
            |state, ctx, req: UpdateChallengeProgressRequest| async move {
                state.items().update_eco_challenge_progress(&ctx, req).await
            },
        ),
        RouteDescriptor::json(
            Method::POST,
            "/item-system/ecosystem/eco-tips",
            |state, ctx, req: CreateEcoTipRequest| async move {
                state.items().create_eco_tip(&ctx, req).await
            },
        ),
        RouteDescriptor::json(
            Method::POST,
            "/item-system/ecosystem/eco-tips/all",
            |state, ctx, req: GetEcoTipsRequest| async move {
                state.items().get_eco_tips(&ctx, req).await
            },
        ),
    ]
}
