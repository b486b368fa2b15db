use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::CategoryResponseData;
use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::CategoryId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<ApiSuccess<CategoryResponseData>, ApiError> {
    let category_id = CategoryId::from_string(&category_id).map_err(CategoryError::from)?;

    state
        .category_service
        .get_category(category_id)
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::OK, category.into()))
}
