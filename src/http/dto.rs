//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::units::Category;

/// Request body for a conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRequest {
    /// Quantity to convert.
    pub value: f64,
    /// Source unit key.
    pub from: String,
    /// Target unit key.
    pub to: String,
}

/// Success envelope wrapping every 2xx payload:
/// `{"success": true, "data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Conversion payload returned to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionDto {
    /// Converted value.
    pub result: f64,
    /// Human-readable description of the conversion.
    pub conversion: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}

/// One unit entry in the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitDto {
    pub key: String,
    pub label: String,
}

/// Units of one category, in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUnitsDto {
    pub category: Category,
    pub units: Vec<UnitDto>,
}

/// Full catalog listing for `GET /api/units`. Order is preserved so clients
/// can build selectors without duplicating the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitsResponse {
    pub categories: Vec<CategoryUnitsDto>,
}
