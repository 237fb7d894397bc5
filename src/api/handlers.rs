use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::logic::{PricingError, ProductView, QuoteError, StorefrontService};
use crate::model::{CartLine, Id, Quote, ResolvedOptions, Selection};
use crate::store::{CatalogStore, OverrideStore};

pub type AppState<C, O> = StorefrontService<C, O>;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    /// Only products flagged for the gallery
    pub gallery: Option<bool>,
    /// Also return products switched off by the admin
    pub include_inactive: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct PriceRequest {
    #[serde(default)]
    pub options: Selection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPriceRequest {
    pub product_id: Id,
    #[serde(default)]
    pub options: Selection,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    pub product_id: Id,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub items: Vec<CartLine>,
}

fn store_error(e: StoreError) -> ApiError {
    log::error!("store failure: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(&e.to_string())),
    )
}

fn pricing_error(e: PricingError) -> ApiError {
    match e {
        PricingError::ProductNotFound(_) => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::new(&e.to_string())))
        }
        PricingError::ProductInactive(_) => {
            (StatusCode::FORBIDDEN, Json(ErrorResponse::new(&e.to_string())))
        }
        PricingError::Store(e) => store_error(e),
    }
}

fn quote_error(e: QuoteError) -> ApiError {
    match e {
        QuoteError::Pricing(e) => pricing_error(e),
        QuoteError::EmptyCart | QuoteError::ZeroQuantity { .. } => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(&e.to_string())))
        }
    }
}

pub async fn list_products<C: CatalogStore, O: OverrideStore>(
    State(service): State<AppState<C, O>>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<ListResponse<ProductView>>, ApiError> {
    let items = service
        .list_products(
            query.gallery.unwrap_or(false),
            query.include_inactive.unwrap_or(false),
        )
        .await
        .map_err(store_error)?;
    Ok(Json(ListResponse {
        total: items.len(),
        items,
    }))
}

pub async fn get_product<C: CatalogStore, O: OverrideStore>(
    State(service): State<AppState<C, O>>,
    Path(product_id): Path<Id>,
) -> Result<Json<ProductView>, ApiError> {
    service
        .product(&product_id)
        .await
        .map(Json)
        .map_err(pricing_error)
}

pub async fn get_product_options<C: CatalogStore, O: OverrideStore>(
    State(service): State<AppState<C, O>>,
    Path(product_id): Path<Id>,
) -> Result<Json<ResolvedOptions>, ApiError> {
    service
        .product_options(&product_id)
        .await
        .map(Json)
        .map_err(pricing_error)
}

pub async fn price_product<C: CatalogStore, O: OverrideStore>(
    State(service): State<AppState<C, O>>,
    Path(product_id): Path<Id>,
    RequestJson(request): RequestJson<PriceRequest>,
) -> Result<Json<PriceResponse>, ApiError> {
    let price = service
        .price_product(&product_id, &request.options)
        .await
        .map_err(pricing_error)?;
    Ok(Json(PriceResponse { product_id, price }))
}

/// Older storefront clients: unknown products answer with a price of `0`.
pub async fn legacy_price<C: CatalogStore, O: OverrideStore>(
    State(service): State<AppState<C, O>>,
    RequestJson(request): RequestJson<LegacyPriceRequest>,
) -> Result<Json<PriceResponse>, ApiError> {
    let price = service
        .calculate_price(&request.product_id, &request.options)
        .await
        .map_err(store_error)?;
    Ok(Json(PriceResponse {
        product_id: request.product_id,
        price,
    }))
}

pub async fn create_quote<C: CatalogStore, O: OverrideStore>(
    State(service): State<AppState<C, O>>,
    RequestJson(request): RequestJson<QuoteRequest>,
) -> Result<(StatusCode, Json<Quote>), ApiError> {
    let quote = service.quote(&request.items).await.map_err(quote_error)?;
    Ok((StatusCode::CREATED, Json(quote)))
}
