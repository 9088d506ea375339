use contracts::dashboards::d400_sales_prediction::catalog::{
    cluster_ids, store_ids, PROMOTION_MAX, PROMOTION_MIN,
};
use contracts::dashboards::d400_sales_prediction::{
    assemble, format_prediction, CatalogResponse, DayOption, InputError, ModelInfo,
    PredictResponse, PredictionInputs, SessionResponse,
};
use contracts::enums::{DayOfWeek, ProductCategory};
use rand::Rng;
use std::sync::Arc;
use thiserror::Error;

use super::session::{SessionContext, SessionStore};
use crate::shared::model::{ModelError, SalesPredictor};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("session '{0}' not found")]
    SessionNotFound(String),

    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Сервис дашборда прогноза: сессии + модель + форматирование
#[derive(Clone)]
pub struct PredictionService {
    sessions: SessionStore,
    predictor: Arc<dyn SalesPredictor>,
    good_threshold: f64,
}

impl PredictionService {
    pub fn new(
        sessions: SessionStore,
        predictor: Arc<dyn SalesPredictor>,
        good_threshold: f64,
    ) -> Self {
        Self {
            sessions,
            predictor,
            good_threshold,
        }
    }

    /// Closed choice lists of the form
    pub fn catalog(&self) -> CatalogResponse {
        CatalogResponse {
            days_of_week: DayOfWeek::all()
                .into_iter()
                .map(|d| DayOption {
                    name: d.display_name().to_string(),
                    number: d.number(),
                })
                .collect(),
            cluster_ids: cluster_ids(),
            store_ids: store_ids(),
            categories: ProductCategory::all()
                .iter()
                .map(|c| c.code().to_string())
                .collect(),
            promotion_min: PROMOTION_MIN,
            promotion_max: PROMOTION_MAX,
            good_threshold: self.good_threshold,
            model: ModelInfo {
                name: self.predictor.name().to_string(),
                version: self.predictor.version().to_string(),
            },
        }
    }

    pub fn open_session(&self) -> SessionResponse {
        self.open_session_with(&mut rand::thread_rng())
    }

    pub fn open_session_with<R: Rng + ?Sized>(&self, rng: &mut R) -> SessionResponse {
        let context = self.sessions.create_session(rng);
        tracing::info!(
            "D400: opened session {} with randoms {:?}",
            context.session_id,
            context.randoms()
        );
        self.session_response(&context)
    }

    pub fn session(&self, session_id: &str) -> Result<SessionResponse, ServiceError> {
        self.sessions
            .get(session_id)
            .map(|context| self.session_response(&context))
            .ok_or_else(|| ServiceError::SessionNotFound(session_id.to_string()))
    }

    pub fn close_session(&self, session_id: &str) -> Result<(), ServiceError> {
        if self.sessions.remove(session_id) {
            tracing::info!("D400: closed session {}", session_id);
            Ok(())
        } else {
            Err(ServiceError::SessionNotFound(session_id.to_string()))
        }
    }

    /// Assemble the record from the inputs and the session randoms, run the
    /// model and remember the result in the session.
    pub fn predict(
        &self,
        session_id: &str,
        inputs: &PredictionInputs,
    ) -> Result<PredictResponse, ServiceError> {
        inputs.validate()?;

        let randoms = self
            .sessions
            .randoms(session_id)
            .ok_or_else(|| ServiceError::SessionNotFound(session_id.to_string()))?;

        let request = assemble(inputs, &randoms);
        let value = self.predictor.predict(&request)?;

        self.sessions
            .record_prediction(session_id, value)
            .ok_or_else(|| ServiceError::SessionNotFound(session_id.to_string()))?;

        tracing::info!(
            "D400: session {} predicted {:.2} for {} on {} (stores {:?}, promo {})",
            session_id,
            value,
            request.product_category,
            inputs.date,
            request.store_ids,
            request.promotion_count
        );

        Ok(PredictResponse {
            session_id: session_id.to_string(),
            request,
            value,
            display: format_prediction(value, self.good_threshold),
        })
    }

    fn session_response(&self, context: &SessionContext) -> SessionResponse {
        SessionResponse {
            session_id: context.session_id.clone(),
            randoms: context.randoms(),
            last_prediction: context.last_prediction,
            display: format_prediction(context.last_prediction, self.good_threshold),
            predictions_made: context.predictions_made,
            created_at: context.created_at,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use contracts::dashboards::d400_sales_prediction::{
        DisplayColor, PredictionRequest, SessionRandoms,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Mutex;

    /// Returns a fixed value and remembers the records it was given
    pub(crate) struct StubPredictor {
        pub value: f64,
        pub seen: Mutex<Vec<PredictionRequest>>,
    }

    impl StubPredictor {
        pub(crate) fn new(value: f64) -> Self {
            Self {
                value,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl SalesPredictor for StubPredictor {
        fn predict(&self, request: &PredictionRequest) -> Result<f64, ModelError> {
            if request.store_ids.is_empty() {
                return Err(ModelError::EmptyFrame { column: "store_nbr" });
            }
            self.seen.lock().unwrap().push(request.clone());
            Ok(self.value)
        }

        fn name(&self) -> &str {
            "stub"
        }

        fn version(&self) -> &str {
            "0"
        }
    }

    fn service(value: f64) -> (PredictionService, Arc<StubPredictor>) {
        let stub = Arc::new(StubPredictor::new(value));
        let service = PredictionService::new(
            SessionStore::new(Duration::hours(1)),
            stub.clone(),
            10.0,
        );
        (service, stub)
    }

    fn dairy_inputs() -> PredictionInputs {
        PredictionInputs {
            date: NaiveDate::from_ymd_opt(2017, 8, 16).unwrap(),
            promotion_count: 50,
            days_of_week: vec![DayOfWeek::Monday, DayOfWeek::Tuesday],
            cluster_ids: vec![2],
            store_ids: vec![1, 3],
            product_category: ProductCategory::Dairy,
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let (service, _) = service(12.0);
        let session = service.open_session_with(&mut StdRng::seed_from_u64(1));
        assert_eq!(session.last_prediction, 0.0);
        assert_eq!(session.display.text, "$0.00");
        assert_eq!(session.display.color, DisplayColor::Red);
    }

    #[test]
    fn test_predict_uses_session_randoms() {
        let (service, stub) = service(12.0);
        let session = service.open_session_with(&mut StdRng::seed_from_u64(2));

        let response = service.predict(&session.session_id, &dairy_inputs()).unwrap();
        let SessionRandoms {
            sales_lag_1,
            sales_lag_2,
            rolling_mean,
            rolling_std,
        } = session.randoms;

        assert_eq!(
            response.request,
            PredictionRequest {
                store_ids: vec![1, 3],
                product_category: ProductCategory::Dairy,
                promotion_count: 50,
                cluster_ids: vec![2],
                days_of_week: vec![1, 2],
                sales_lag_1,
                sales_lag_2,
                rolling_mean,
                rolling_std,
            }
        );
        assert_eq!(response.display.text, "$12.00");
        assert_eq!(response.display.color, DisplayColor::Green);
        assert_eq!(stub.seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_repeated_predictions_are_identical() {
        let (service, stub) = service(7.25);
        let session = service.open_session_with(&mut StdRng::seed_from_u64(3));

        let first = service.predict(&session.session_id, &dairy_inputs()).unwrap();
        let second = service.predict(&session.session_id, &dairy_inputs()).unwrap();

        assert_eq!(first, second);
        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen[0], seen[1]);

        let state = service.session(&session.session_id).unwrap();
        assert_eq!(state.predictions_made, 2);
        assert_eq!(state.display.text, "$7.25");
        assert_eq!(state.display.color, DisplayColor::Red);
    }

    #[test]
    fn test_unknown_session() {
        let (service, _) = service(1.0);
        assert!(matches!(
            service.predict("nope", &dairy_inputs()),
            Err(ServiceError::SessionNotFound(_))
        ));
        assert!(matches!(
            service.close_session("nope"),
            Err(ServiceError::SessionNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_inputs_rejected_before_model() {
        let (service, stub) = service(1.0);
        let session = service.open_session_with(&mut StdRng::seed_from_u64(4));
        let mut inputs = dairy_inputs();
        inputs.promotion_count = 1000;

        assert!(matches!(
            service.predict(&session.session_id, &inputs),
            Err(ServiceError::InvalidInput(InputError::PromotionOutOfRange(1000)))
        ));
        assert!(stub.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_model_error_keeps_previous_prediction() {
        let (service, _) = service(20.0);
        let session = service.open_session_with(&mut StdRng::seed_from_u64(5));
        service.predict(&session.session_id, &dairy_inputs()).unwrap();

        let mut inputs = dairy_inputs();
        inputs.store_ids.clear();
        assert!(matches!(
            service.predict(&session.session_id, &inputs),
            Err(ServiceError::Model(ModelError::EmptyFrame { .. }))
        ));
        assert_eq!(service.session(&session.session_id).unwrap().last_prediction, 20.0);
    }

    #[test]
    fn test_catalog() {
        let (service, _) = service(1.0);
        let catalog = service.catalog();
        assert_eq!(catalog.days_of_week.len(), 7);
        assert_eq!(catalog.days_of_week[6].name, "Sunday");
        assert_eq!(catalog.cluster_ids.len(), 17);
        assert_eq!(catalog.store_ids.len(), 54);
        assert_eq!(catalog.categories.len(), 33);
        assert_eq!(catalog.promotion_max, 726);
        assert_eq!(catalog.model.name, "stub");
    }
}
