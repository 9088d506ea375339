use leptos::prelude::*;

const TITLE: &str = "WELCOME TO FAVORITA RETAIL STORES";
const SUBTITLE: &str = "SALES PREDICTION APP";
const BLURB: &str = "This is a simple app for sales prediction to optimize business strategies \
    using accurate sales forecasts. Predict trends, plan inventory, and elevate decision-making.";

/// Шапка страницы: заголовки, описание и картинка
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="d400-header">
            <h1>{TITLE}</h1>
            <h2>{SUBTITLE}</h2>
            <p>{BLURB}</p>
            <figure style="margin: 0; max-width: 800px; width: 100%;">
                <img src="/assets/sales.svg" alt="Sales Image" style="width: 100%;" />
                <figcaption style="font-size: 13px; color: #707070;">"Sales Image"</figcaption>
            </figure>
        </header>
    }
}
