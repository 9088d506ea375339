pub mod assembler;
pub mod catalog;
pub mod display;
pub mod dto;

pub use assembler::assemble;
pub use display::{format_prediction, DisplayColor, PredictionDisplay, DEFAULT_GOOD_THRESHOLD};
pub use dto::{
    CatalogResponse, DayOption, ErrorResponse, InputError, ModelInfo, PredictResponse,
    PredictionInputs, PredictionRequest, SessionRandoms, SessionResponse,
};
