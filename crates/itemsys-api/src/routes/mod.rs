//! The static route table.
//!
//! Enumerated once at startup; every supported (method, path) pair appears
//! here and nowhere else. There is no runtime registration.

mod categories;
mod challenges;
mod items;
mod ratings;
mod recycling;
mod statistics;
mod swaps;
mod users;

use crate::dispatch::RouteDescriptor;

/// The full route table, grouped by API resource.
pub fn table() -> Vec<RouteDescriptor> {
    let mut table = Vec::new();
    table.extend(users::routes());
    table.extend(items::routes());
    table.extend(categories::routes());
    table.extend(challenges::routes());
    table.extend(ratings::routes());
    table.extend(recycling::routes());
    table.extend(statistics::routes());
    table.extend(swaps::routes());
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::BodyRule;
    use axum::http::Method;
    use std::collections::HashSet;

    #[test]
    fn every_method_path_pair_is_unique() {
        let mut seen = HashSet::new();
        for route in table() {
            let key = (route.method().clone(), route.path());
            assert!(seen.insert(key.clone()), "duplicate route: {:?}", key);
        }
    }

    #[test]
    fn all_routes_live_under_the_api_prefix() {
        for route in table() {
            assert!(
                route.path().starts_with("/item-system/"),
                "route outside prefix: {}",
                route.path()
            );
        }
    }

    #[test]
    fn read_and_delete_routes_never_require_a_body() {
        for route in table() {
            if route.method() == Method::GET || route.method() == Method::DELETE {
                assert_ne!(
                    route.body_rule(),
                    BodyRule::Required,
                    "{} {} must not require a body",
                    route.method(),
                    route.path()
                );
            }
        }
    }

    #[test]
    fn the_table_covers_every_backend_operation() {
        // 7 user operations + 22 item operations.
        assert_eq!(table().len(), 29);
    }
}
