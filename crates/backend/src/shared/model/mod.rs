pub mod error;
pub mod forest;
pub mod frame;

pub use error::{ModelError, ModelLoadError};
pub use forest::{load_model, ForestModel};

use contracts::dashboards::d400_sales_prediction::PredictionRequest;

/// Обученная модель прогноза продаж.
///
/// Загружается один раз при старте и дальше только читается, поэтому
/// разделяется между всеми сессиями без блокировок.
pub trait SalesPredictor: Send + Sync {
    /// Прогноз продаж для одной записи
    fn predict(&self, request: &PredictionRequest) -> Result<f64, ModelError>;

    /// Название модели
    fn name(&self) -> &str;

    /// Версия артефакта
    fn version(&self) -> &str;
}
