use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::handlers::{self, AppState};
use crate::store::{CatalogStore, OverrideStore};

pub fn create_router<C, O>() -> Router<AppState<C, O>>
where
    C: CatalogStore + 'static,
    O: OverrideStore + 'static,
{
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Storefront catalog
        .route("/api/products", get(handlers::list_products::<C, O>))
        .route("/api/products/:product_id", get(handlers::get_product::<C, O>))
        .route(
            "/api/products/:product_id/options",
            get(handlers::get_product_options::<C, O>),
        )
        // Pricing
        .route(
            "/api/products/:product_id/price",
            post(handlers::price_product::<C, O>),
        )
        .route("/api/price", post(handlers::legacy_price::<C, O>))
        .route("/api/quote", post(handlers::create_quote::<C, O>))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::logic::StorefrontService;
    use crate::model::OverrideEntry;
    use crate::store::MemoryOverrideStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(overrides: MemoryOverrideStore) -> Router {
        let service = StorefrontService::new(Arc::new(Catalog::builtin()), Arc::new(overrides));
        create_router().with_state(service)
    }

    async fn status_of(app: Router, request: Request<Body>) -> StatusCode {
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        assert_eq!(status_of(app(MemoryOverrideStore::new()), request).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_not_found_and_inactive_statuses() {
        let overrides = MemoryOverrideStore::new();
        overrides.put(
            "frame-3d",
            OverrideEntry {
                active: Some(false),
                ..Default::default()
            },
        );
        let app = app(overrides);

        let request = Request::get("/api/products/ghost/options")
            .body(Body::empty())
            .unwrap();
        assert_eq!(status_of(app.clone(), request).await, StatusCode::NOT_FOUND);

        let request = Request::post("/api/products/frame-3d/price")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"options": {}}"#))
            .unwrap();
        assert_eq!(status_of(app.clone(), request).await, StatusCode::FORBIDDEN);

        let request = Request::post("/api/price")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"productId": "ghost", "options": {}}"#))
            .unwrap();
        assert_eq!(status_of(app, request).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_empty_quote_is_bad_request() {
        let request = Request::post("/api/quote")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"items": []}"#))
            .unwrap();
        assert_eq!(
            status_of(app(MemoryOverrideStore::new()), request).await,
            StatusCode::BAD_REQUEST
        );
    }
}
