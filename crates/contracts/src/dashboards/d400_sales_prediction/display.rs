use serde::{Deserialize, Serialize};

/// Predictions above this value are shown in green
pub const DEFAULT_GOOD_THRESHOLD: f64 = 10.0;

pub const CURRENCY_SYMBOL: &str = "$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Green,
    Red,
}

impl DisplayColor {
    /// CSS color value
    pub fn css(&self) -> &'static str {
        match self {
            DisplayColor::Green => "green",
            DisplayColor::Red => "red",
        }
    }
}

/// Formatted prediction for the output panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionDisplay {
    pub text: String,
    pub color: DisplayColor,
}

/// Форматирует прогноз как денежную сумму и выбирает цвет.
///
/// Зелёный только при строгом превышении порога: ровно `threshold` — красный.
///
/// # Примеры
///
/// ```
/// use contracts::dashboards::d400_sales_prediction::{format_prediction, DisplayColor};
///
/// let display = format_prediction(-5.5, 10.0);
/// assert_eq!(display.text, "$-5.50");
/// assert_eq!(display.color, DisplayColor::Red);
/// ```
pub fn format_prediction(value: f64, threshold: f64) -> PredictionDisplay {
    let color = if value > threshold {
        DisplayColor::Green
    } else {
        DisplayColor::Red
    };

    PredictionDisplay {
        text: format!("{}{:.2}", CURRENCY_SYMBOL, value),
        color,
    }
}
