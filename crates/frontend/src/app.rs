use crate::dashboards::d400_sales_prediction::ui::SalesPredictionDashboard;
use crate::layout::{Footer, Header};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <Header />
            <SalesPredictionDashboard />
            <Footer />
        </ConfigProvider>
    }
}
