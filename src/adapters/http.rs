use crate::core::Catalog;
use crate::domain::{DataLoader, Recipe};
use crate::utils::error::LunchError;
use crate::utils::validation::validate_date;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

/// Where each request loads its catalog from.
#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<dyn DataLoader>,
    pub ingredients_source: String,
    pub recipes_source: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/lunch", get(list_recipes))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct LunchQuery {
    date: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    status: u16,
    message: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: self.status.as_u16(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<LunchError> for ApiError {
    fn from(err: LunchError) -> Self {
        if err.is_client_error() {
            return Self::new(StatusCode::BAD_REQUEST, err.to_string());
        }

        tracing::error!("Lunch query failed: {} (category: {:?})", err, err.category());
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// Keeps the characters an integer filter would: digits, `+` and `-`.
fn sanitize_date(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+' || *c == '-')
        .collect()
}

#[instrument(name = "list_recipes", skip(state))]
async fn list_recipes(
    State(state): State<AppState>,
    Query(query): Query<LunchQuery>,
) -> Result<Json<Vec<Arc<Recipe>>>, ApiError> {
    let raw_date = match query.date {
        Some(raw) => sanitize_date(&raw),
        None => chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
    };
    let date = validate_date(&raw_date, "date")?;

    let mut catalog = Catalog::default();
    catalog
        .load_ingredients(state.loader.as_ref(), &state.ingredients_source)
        .await?
        .load_recipes(state.loader.as_ref(), &state.recipes_source)
        .await?;
    catalog.assemble_lunches()?;

    let recipes = catalog.recipes_eligible_on(date)?;
    tracing::info!("{} recipes eligible on {}", recipes.len(), date);

    Ok(Json(recipes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_date() {
        assert_eq!(sanitize_date("2019-03-07"), "2019-03-07");
        assert_eq!(sanitize_date("abcd"), "");
        assert_eq!(sanitize_date("2019/03/07"), "20190307");
    }

    #[test]
    fn test_client_errors_keep_message() {
        let err = ApiError::from(LunchError::validation("title missing"));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "title missing");
    }

    #[test]
    fn test_other_errors_are_generic() {
        let err = ApiError::from(LunchError::not_found("/srv/data/ingredients.json"));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Internal server error");
    }
}
