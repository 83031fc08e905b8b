//! HTTP handlers for the REST API.
//!
//! Each handler parses and validates its input, delegates to the engine and
//! wraps the outcome in the success envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::Json;

use super::dto::{
    ApiSuccess, CategoryUnitsDto, ConversionDto, ConvertRequest, HealthResponse, UnitDto,
    UnitsResponse,
};
use super::error::AppError;
use crate::engine;
use crate::units::Category;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Liveness check. The engine has no external dependencies, so a running
/// process is a healthy process.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

/// GET /api/units
///
/// List all categories and their units, in catalog order.
pub async fn list_units() -> HandlerResult<UnitsResponse> {
    let categories = Category::ALL
        .into_iter()
        .map(|category| CategoryUnitsDto {
            category,
            units: category
                .units()
                .iter()
                .map(|u| UnitDto {
                    key: u.key.to_string(),
                    label: u.label.to_string(),
                })
                .collect(),
        })
        .collect();

    Ok(Json(UnitsResponse { categories }))
}

/// POST /api/convert/{category}
///
/// Convert a value between two units of the category named in the path.
pub async fn convert(
    Path(category): Path<String>,
    body: Result<Json<ConvertRequest>, JsonRejection>,
) -> HandlerResult<ApiSuccess<ConversionDto>> {
    let category: Category = category.parse()?;
    let Json(request) = body
        .map_err(|e| AppError::BadRequest(format!("invalid request body: {}", e.body_text())))?;

    tracing::debug!(
        %category,
        from = %request.from,
        to = %request.to,
        value = request.value,
        "conversion requested"
    );
    if category == Category::Currency {
        tracing::debug!("currency rates are simulated constants, not live market data");
    }

    let outcome = engine::convert(category, request.value, &request.from, &request.to)?;

    Ok(Json(ApiSuccess::new(ConversionDto {
        result: outcome.result,
        conversion: outcome.conversion,
    })))
}
