use crate::dashboards::d400_sales_prediction::api;
use crate::dashboards::d400_sales_prediction::ui::MultiSelect;
use crate::shared::session_storage;
use chrono::{NaiveDate, Utc};
use contracts::dashboards::d400_sales_prediction::catalog::{PROMOTION_MAX, PROMOTION_MIN};
use contracts::dashboards::d400_sales_prediction::{
    format_prediction, CatalogResponse, PredictionInputs, SessionResponse,
    DEFAULT_GOOD_THRESHOLD,
};
use contracts::enums::{DayOfWeek, ProductCategory};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Собирает входные данные формы в запрос к серверу
pub fn build_inputs(
    date: &str,
    promotion_count: u32,
    days: &[u32],
    cluster_ids: &[u32],
    store_ids: &[u32],
    category: &str,
) -> Result<PredictionInputs, String> {
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| format!("Invalid date: {}", date))?;
    let days_of_week = days
        .iter()
        .map(|n| {
            u8::try_from(*n)
                .ok()
                .and_then(DayOfWeek::from_number)
                .ok_or_else(|| format!("Unknown day of week: {}", n))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let product_category = ProductCategory::from_code(category)
        .ok_or_else(|| format!("Unknown category: {}", category))?;

    Ok(PredictionInputs {
        date,
        promotion_count,
        days_of_week,
        cluster_ids: cluster_ids.to_vec(),
        store_ids: store_ids.to_vec(),
        product_category,
    })
}

/// Восстанавливает сессию из sessionStorage или открывает новую
async fn restore_or_create_session() -> Result<SessionResponse, String> {
    if let Some(id) = session_storage::load_session_id() {
        match api::get_session(&id).await {
            Ok(session) => return Ok(session),
            // Сервер перезапускался или сессия истекла
            Err(e) if api::is_not_found(&e) => session_storage::clear_session_id(),
            Err(e) => return Err(e),
        }
    }

    let session = api::create_session().await?;
    session_storage::save_session_id(&session.session_id);
    log::info!("D400: opened session {}", session.session_id);
    Ok(session)
}

#[component]
pub fn SalesPredictionDashboard() -> impl IntoView {
    let saved = session_storage::load_inputs();

    let (catalog, set_catalog) = signal(None::<CatalogResponse>);
    let (session_id, set_session_id) = signal(None::<String>);
    let (is_loading, set_is_loading) = signal(false);
    let (error_msg, set_error_msg) = signal(String::new());
    let (display, set_display) = signal(format_prediction(0.0, DEFAULT_GOOD_THRESHOLD));

    // Значения формы сохраняются между перерисовками и перезагрузками вкладки
    let default_date = saved
        .as_ref()
        .map(|s| s.date)
        .unwrap_or_else(|| Utc::now().date_naive());
    let (date, set_date) = signal(default_date.format(DATE_FORMAT).to_string());
    let promotion = RwSignal::new(saved.as_ref().map_or(PROMOTION_MIN, |s| s.promotion_count));
    let days = RwSignal::new(
        saved
            .as_ref()
            .map(|s| s.days_of_week.iter().map(|d| d.number() as u32).collect::<Vec<u32>>())
            .unwrap_or_default(),
    );
    let clusters = RwSignal::new(
        saved
            .as_ref()
            .map(|s| s.cluster_ids.clone())
            .unwrap_or_default(),
    );
    let stores = RwSignal::new(
        saved
            .as_ref()
            .map(|s| s.store_ids.clone())
            .unwrap_or_default(),
    );
    let (category, set_category) = signal(
        saved
            .as_ref()
            .map(|s| s.product_category)
            .unwrap_or_default()
            .code()
            .to_string(),
    );

    // Загрузить каталог и сессию при монтировании
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_catalog().await {
                Ok(c) => set_catalog.set(Some(c)),
                Err(e) => {
                    log::error!("Failed to load D400 catalog: {}", e);
                    set_error_msg.set(format!("Failed to load the form: {}", e));
                    return;
                }
            }

            match restore_or_create_session().await {
                Ok(session) => {
                    set_session_id.set(Some(session.session_id));
                    set_display.set(session.display);
                }
                Err(e) => {
                    log::error!("Failed to open D400 session: {}", e);
                    set_error_msg.set(format!("Failed to open a session: {}", e));
                }
            }
        });
    });

    let day_options = Signal::derive(move || {
        catalog.with(|c| {
            c.as_ref()
                .map(|c| {
                    c.days_of_week
                        .iter()
                        .map(|d| (d.number as u32, d.name.clone()))
                        .collect()
                })
                .unwrap_or_default()
        })
    });
    let cluster_options = Signal::derive(move || {
        catalog.with(|c| {
            c.as_ref()
                .map(|c| c.cluster_ids.iter().map(|id| (*id, id.to_string())).collect())
                .unwrap_or_default()
        })
    });
    let store_options = Signal::derive(move || {
        catalog.with(|c| {
            c.as_ref()
                .map(|c| c.store_ids.iter().map(|id| (*id, id.to_string())).collect())
                .unwrap_or_default()
        })
    });
    let promotion_max = move || catalog.with(|c| c.as_ref().map_or(PROMOTION_MAX, |c| c.promotion_max));

    let on_predict = move |_| {
        let inputs = match build_inputs(
            &date.get_untracked(),
            promotion.get_untracked(),
            &days.get_untracked(),
            &clusters.get_untracked(),
            &stores.get_untracked(),
            &category.get_untracked(),
        ) {
            Ok(inputs) => inputs,
            Err(e) => {
                set_error_msg.set(e);
                return;
            }
        };
        let Some(id) = session_id.get_untracked() else {
            set_error_msg.set("The session is not open yet, please wait".to_string());
            return;
        };

        set_is_loading.set(true);
        set_error_msg.set(String::new());
        session_storage::save_inputs(&inputs);

        spawn_local(async move {
            let mut result = api::predict(&id, &inputs).await;

            // Сессия потеряна на сервере: открываем новую и повторяем один раз
            if matches!(&result, Err(e) if api::is_not_found(e)) {
                session_storage::clear_session_id();
                result = match restore_or_create_session().await {
                    Ok(session) => {
                        set_session_id.set(Some(session.session_id.clone()));
                        api::predict(&session.session_id, &inputs).await
                    }
                    Err(e) => Err(e),
                };
            }

            match result {
                Ok(response) => {
                    log::info!("D400: predicted {}", response.display.text);
                    set_display.set(response.display);
                }
                Err(e) => {
                    set_error_msg.set(format!("Prediction failed: {}", e));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="d400-columns">
            // Колонка ввода
            <div>
                <h2>"User Inputs"</h2>
                <Space vertical=true>
                    <div>
                        <label for="d400_date" style="display: block; margin-bottom: 6px; font-weight: 600; font-size: 14px;">
                            "Enter the date for your prediction"
                        </label>
                        <input
                            type="date"
                            id="d400_date"
                            prop:value=move || date.get()
                            on:change=move |ev| {
                                set_date.set(event_target_value(&ev));
                            }
                            style="padding: 8px; border: 1px solid #d1d1d1; border-radius: 6px; font-size: 14px;"
                        />
                    </div>

                    <div>
                        <label for="d400_promo" style="display: block; margin-bottom: 6px; font-weight: 600; font-size: 14px;">
                            {move || format!("Select Promo number: {}", promotion.get())}
                        </label>
                        <input
                            type="range"
                            id="d400_promo"
                            min=PROMOTION_MIN.to_string()
                            max=move || promotion_max().to_string()
                            prop:value=move || promotion.get().to_string()
                            on:input=move |ev| {
                                if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                                    promotion.set(v);
                                }
                            }
                            style="width: 100%;"
                        />
                    </div>

                    <MultiSelect label="Select specific days" options=day_options selected=days />
                    <MultiSelect label="Selected Cluster" options=cluster_options selected=clusters />
                    <MultiSelect label="Selected Stores" options=store_options selected=stores />

                    <div>
                        <label for="d400_category" style="display: block; margin-bottom: 6px; font-weight: 600; font-size: 14px;">
                            "Select Category"
                        </label>
                        <select
                            id="d400_category"
                            style="width: 100%; padding: 10px; border: 1px solid #d1d1d1; border-radius: 6px; font-size: 14px;"
                            on:change=move |ev| {
                                set_category.set(event_target_value(&ev));
                            }
                        >
                            <For
                                each=move || catalog.with(|c| c.as_ref().map(|c| c.categories.clone()).unwrap_or_default())
                                key=|code| code.clone()
                                children=move |code| {
                                    let selected = {
                                        let code = code.clone();
                                        move || category.get() == code
                                    };
                                    let value = code.clone();
                                    view! {
                                        <option value=value selected=selected>{code}</option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_predict
                        disabled=Signal::derive(move || is_loading.get() || session_id.get().is_none())
                    >
                        {move || if is_loading.get() { "Predicting..." } else { "Predict" }}
                    </Button>

                    {move || {
                        let msg = error_msg.get();
                        (!msg.is_empty()).then(|| view! { <div class="d400-error">{msg}</div> })
                    }}
                </Space>
            </div>

            // Колонка результата
            <div>
                <div class="d400-output">
                    <h2>"Predictions"</h2>
                    <div style=move || format!("color: {}; font-size: 24px;", display.get().color.css())>
                        {move || display.get().text}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_inputs_maps_widgets() {
        let inputs = build_inputs("2017-08-16", 50, &[1, 2], &[2], &[1, 3], "DAIRY").unwrap();
        assert_eq!(inputs.date, NaiveDate::from_ymd_opt(2017, 8, 16).unwrap());
        assert_eq!(inputs.days_of_week, vec![DayOfWeek::Monday, DayOfWeek::Tuesday]);
        assert_eq!(inputs.store_ids, vec![1, 3]);
        assert_eq!(inputs.product_category, ProductCategory::Dairy);
    }

    #[test]
    fn test_build_inputs_rejects_garbage() {
        assert_eq!(
            build_inputs("16.08.2017", 0, &[], &[], &[], "DAIRY").unwrap_err(),
            "Invalid date: 16.08.2017"
        );
        assert_eq!(
            build_inputs("2017-08-16", 0, &[8], &[], &[], "DAIRY").unwrap_err(),
            "Unknown day of week: 8"
        );
        assert_eq!(
            build_inputs("2017-08-16", 0, &[], &[], &[], "TOYS").unwrap_err(),
            "Unknown category: TOYS"
        );
    }
}
