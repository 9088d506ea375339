use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::catalog::{CLUSTERS, PROMOTION_MAX, STORES};
use super::display::PredictionDisplay;
use crate::enums::{DayOfWeek, ProductCategory};

/// Current state of the input form, as posted by the frontend on "Predict"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInputs {
    /// Date chosen in the date picker. Shown and logged, not a model feature.
    pub date: NaiveDate,
    pub promotion_count: u32,
    #[serde(default)]
    pub days_of_week: Vec<DayOfWeek>,
    #[serde(default)]
    pub cluster_ids: Vec<u32>,
    #[serde(default)]
    pub store_ids: Vec<u32>,
    pub product_category: ProductCategory,
}

/// Values outside the closed choice lists of the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("promotion count {0} is outside 0..=726")]
    PromotionOutOfRange(u32),

    #[error("cluster {0} is outside 1..=17")]
    ClusterOutOfRange(u32),

    #[error("store {0} is outside 1..=54")]
    StoreOutOfRange(u32),
}

impl PredictionInputs {
    /// Check the inputs against the catalog. Widgets never produce invalid
    /// values, the HTTP API can.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.promotion_count > PROMOTION_MAX {
            return Err(InputError::PromotionOutOfRange(self.promotion_count));
        }
        if let Some(cluster) = self.cluster_ids.iter().find(|c| !CLUSTERS.contains(c)) {
            return Err(InputError::ClusterOutOfRange(*cluster));
        }
        if let Some(store) = self.store_ids.iter().find(|s| !STORES.contains(s)) {
            return Err(InputError::StoreOutOfRange(*store));
        }
        Ok(())
    }
}

/// Four random lag/rolling features, drawn once per session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionRandoms {
    pub sales_lag_1: f64,
    pub sales_lag_2: f64,
    pub rolling_mean: f64,
    pub rolling_std: f64,
}

/// The record handed to the model.
///
/// Multi-valued columns keep the selection order without duplicates:
/// the first selected store, cluster and day land in row 0 of the frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub store_ids: Vec<u32>,
    pub product_category: ProductCategory,
    pub promotion_count: u32,
    pub cluster_ids: Vec<u32>,
    /// 1 = Monday … 7 = Sunday
    pub days_of_week: Vec<u8>,
    pub sales_lag_1: f64,
    pub sales_lag_2: f64,
    pub rolling_mean: f64,
    pub rolling_std: f64,
}

/// Option of the weekday multi-select
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOption {
    pub name: String,
    pub number: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub version: String,
}

/// Response for GET /api/d400/catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub days_of_week: Vec<DayOption>,
    pub cluster_ids: Vec<u32>,
    pub store_ids: Vec<u32>,
    /// Category codes in dropdown order
    pub categories: Vec<String>,
    pub promotion_min: u32,
    pub promotion_max: u32,
    pub good_threshold: f64,
    pub model: ModelInfo,
}

/// Session state as seen by the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub randoms: SessionRandoms,
    /// `0` until the first prediction
    pub last_prediction: f64,
    pub display: PredictionDisplay,
    pub predictions_made: u32,
    pub created_at: DateTime<Utc>,
}

/// Response for POST /api/d400/sessions/:id/predict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub session_id: String,
    pub request: PredictionRequest,
    pub value: f64,
    pub display: PredictionDisplay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
