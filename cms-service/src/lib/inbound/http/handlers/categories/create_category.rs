use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::CategoryResponseData;
use crate::domain::category::errors::CategoryNameError;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::CreateCategoryCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<ApiSuccess<CategoryResponseData>, ApiError> {
    let Json(body) = payload?;

    state
        .category_service
        .create_category(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::CREATED, category.into()))
}

/// HTTP request body for creating a category (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCategoryRequest {
    name: String,
}

impl CreateCategoryRequest {
    fn try_into_command(self) -> Result<CreateCategoryCommand, CategoryNameError> {
        Ok(CreateCategoryCommand {
            name: CategoryName::new(self.name)?,
        })
    }
}

impl From<CategoryNameError> for ApiError {
    fn from(err: CategoryNameError) -> Self {
        ApiError::UnprocessableEntity(format!("Invalid category name: {err}"))
    }
}
