use chrono::{DateTime, Duration, Utc};
use contracts::dashboards::d400_sales_prediction::catalog::{
    ROLLING_MEAN_RANGE, ROLLING_STD_RANGE, SALES_LAG_RANGE,
};
use contracts::dashboards::d400_sales_prediction::SessionRandoms;
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Состояние одной пользовательской сессии.
///
/// `randoms` задаются при создании и больше не меняются: все прогнозы
/// внутри сессии считаются на одних и тех же значениях.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    pub session_id: String,
    randoms: SessionRandoms,
    pub last_prediction: f64,
    pub predictions_made: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionContext {
    fn new(session_id: String, randoms: SessionRandoms) -> Self {
        let now = Utc::now();
        Self {
            session_id,
            randoms,
            last_prediction: 0.0,
            predictions_made: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn randoms(&self) -> SessionRandoms {
        self.randoms
    }
}

/// Хранилище сессий (in-memory, одна запись на сессию)
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionContext>>>,
    max_idle: Duration,
}

impl SessionStore {
    pub fn new(max_idle: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_idle,
        }
    }

    /// Создать сессию со своими случайными признаками
    pub fn create_session<R: Rng + ?Sized>(&self, rng: &mut R) -> SessionContext {
        let removed = self.cleanup_idle_sessions();
        if removed > 0 {
            tracing::info!("Dropped {} idle prediction sessions", removed);
        }

        let context = SessionContext::new(uuid::Uuid::new_v4().to_string(), draw_randoms(rng));

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        sessions.insert(context.session_id.clone(), context.clone());
        context
    }

    /// Текущее состояние сессии
    pub fn get(&self, session_id: &str) -> Option<SessionContext> {
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        sessions.get(session_id).cloned()
    }

    /// Сохранённые случайные признаки сессии (всегда одни и те же)
    pub fn randoms(&self, session_id: &str) -> Option<SessionRandoms> {
        self.get(session_id).map(|s| s.randoms())
    }

    /// Запомнить последний прогноз
    pub fn record_prediction(&self, session_id: &str, value: f64) -> Option<SessionContext> {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let context = sessions.get_mut(session_id)?;
        context.last_prediction = value;
        context.predictions_made += 1;
        context.updated_at = Utc::now();
        Some(context.clone())
    }

    /// Закрыть сессию
    pub fn remove(&self, session_id: &str) -> bool {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        sessions.remove(session_id).is_some()
    }

    /// Удалить сессии без активности дольше `max_idle`
    pub fn cleanup_idle_sessions(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|_, s| now - s.updated_at < self.max_idle);
        before - sessions.len()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Draw the four session features, each rounded to two decimals
pub fn draw_randoms<R: Rng + ?Sized>(rng: &mut R) -> SessionRandoms {
    let mut uniform = |(low, high): (f64, f64)| round2(rng.gen_range(low..=high));
    SessionRandoms {
        sales_lag_1: uniform(SALES_LAG_RANGE),
        sales_lag_2: uniform(SALES_LAG_RANGE),
        rolling_mean: uniform(ROLLING_MEAN_RANGE),
        rolling_std: uniform(ROLLING_STD_RANGE),
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
