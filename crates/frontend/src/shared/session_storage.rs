//! Хранение состояния формы в `sessionStorage` вкладки.
//!
//! Id серверной сессии живёт здесь, чтобы перезагрузка страницы не меняла
//! случайные признаки. Последние введённые значения формы тоже сохраняются.

use contracts::dashboards::d400_sales_prediction::PredictionInputs;

const SESSION_KEY: &str = "d400_session_id";
const INPUTS_KEY: &str = "d400_inputs";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

pub fn save_session_id(id: &str) {
    if let Some(s) = storage() {
        let _ = s.set_item(SESSION_KEY, id);
    }
}

pub fn load_session_id() -> Option<String> {
    storage().and_then(|s| s.get_item(SESSION_KEY).ok().flatten())
}

pub fn clear_session_id() {
    if let Some(s) = storage() {
        let _ = s.remove_item(SESSION_KEY);
    }
}

pub fn save_inputs(inputs: &PredictionInputs) {
    if let Some(json) = encode_inputs(inputs) {
        if let Some(s) = storage() {
            let _ = s.set_item(INPUTS_KEY, &json);
        }
    }
}

pub fn load_inputs() -> Option<PredictionInputs> {
    storage()
        .and_then(|s| s.get_item(INPUTS_KEY).ok().flatten())
        .and_then(|json| decode_inputs(&json))
}

fn encode_inputs(inputs: &PredictionInputs) -> Option<String> {
    serde_json::to_string(inputs).ok()
}

/// Битый или устаревший снапшот просто игнорируется
fn decode_inputs(json: &str) -> Option<PredictionInputs> {
    serde_json::from_str(json).ok()
}
