//! Item routes

use axum::http::Method;

use itemsys_core::models::{
    AddItemRequest, ItemRef, ListItemsRequest, SearchItemsRequest, UpdateItemRequest,
};

use crate::dispatch::RouteDescriptor;

pub(crate) fn routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::json(
            Method::POST,
            "/item-system/items/addItem",
            |state, ctx, req: AddItemRequest| async move { state.items().add_item(&ctx, req).await },
        ),
        RouteDescriptor::json(
            Method::PUT,
            "/item-system/items/{item_id}",
            |state, ctx, req: UpdateItemRequest| async move {
                state.items().update_item(&ctx, req).await
            },
        ),
        RouteDescriptor::path_only(
            Method::DELETE,
            "/item-system/items/{item_id}",
            |state, ctx, req: ItemRef| async move { state.items().delete_item(&ctx, req).await },
        ),
        RouteDescriptor::path_only(
            Method::GET,
            "/item-system/items/{item_id}",
            |state, ctx, req: ItemRef| async move { state.items().get_item(&ctx, req).await },
        ),
        RouteDescriptor::json(
            Method::POST,
            "/item-system/items",
            |state, ctx, req: ListItemsRequest| async move {
                state.items().list_items(&ctx, req).await
            },
        ),
        RouteDescriptor::json(
            Method::POST,
            "/item-system/items/search",
            |state, ctx, req: SearchItemsRequest| async move {
                state.items().search_items(&ctx, req).await
            },
        ),
    ]
}
