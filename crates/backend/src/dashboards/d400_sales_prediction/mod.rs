pub mod service;
pub mod session;

pub use service::{PredictionService, ServiceError};
pub use session::{SessionContext, SessionStore};
