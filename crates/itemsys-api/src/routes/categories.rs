//! Item category routes

use axum::http::Method;

use itemsys_core::models::AddItemCategoryRequest;

use crate::dispatch::RouteDescriptor;

pub(crate) fn routes() -> Vec<RouteDescriptor> {
    vec![
        // Path spelling is load-bearing: deployed clients use it as-is.
        RouteDescriptor::json(
            Method::POST,
            "/item-system/category/catogories",
            |state, ctx, req: AddItemCategoryRequest| async move {
                state.items().add_item_category(&ctx, req).await
            },
        ),
    ]
}
