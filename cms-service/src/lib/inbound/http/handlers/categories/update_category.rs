use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::CategoryResponseData;
use crate::domain::category::errors::CategoryError;
use crate::domain::category::errors::CategoryNameError;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    payload: Result<Json<UpdateCategoryRequest>, JsonRejection>,
) -> Result<ApiSuccess<CategoryResponseData>, ApiError> {
    let category_id = CategoryId::from_string(&category_id).map_err(CategoryError::from)?;
    let Json(body) = payload?;

    state
        .category_service
        .update_category(category_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::OK, category.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCategoryRequest {
    name: String,
}

impl UpdateCategoryRequest {
    fn try_into_command(self) -> Result<UpdateCategoryCommand, CategoryNameError> {
        Ok(UpdateCategoryCommand {
            name: CategoryName::new(self.name)?,
        })
    }
}
