use crate::domain::entities::Product;
use crate::domain::errors::CatalogError;
use crate::interface_adapters::handlers::{ApiError, error_response};
use crate::interface_adapters::state::AppState;
use crate::use_cases::ListProductsUseCase;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

#[tracing::instrument(name = "list_products", skip_all)]
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let use_case = ListProductsUseCase {
        catalog: state.catalog.as_ref(),
    };

    let products = use_case.execute().await.map_err(|err| {
        match err {
            CatalogError::Unavailable(_) => {
                tracing::error!(error = %err, "product catalog unavailable.")
            }
            CatalogError::QueryFailed(_) | CatalogError::MalformedRow(_) => {
                tracing::error!(error = %err, "failed to list products.")
            }
        }
        error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    })?;

    tracing::debug!(count = products.len(), "products listed.");
    Ok(Json(products))
}
