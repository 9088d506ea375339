use leptos::prelude::*;

/// Добавляет значение в выбор или убирает его, если оно уже выбрано.
/// Порядок выбора сохраняется.
pub fn toggle(selected: &mut Vec<u32>, value: u32) {
    if let Some(pos) = selected.iter().position(|v| *v == value) {
        selected.remove(pos);
    } else {
        selected.push(value);
    }
}

/// Множественный выбор из закрытого списка: значение + подпись
#[component]
pub fn MultiSelect(
    label: &'static str,
    #[prop(into)] options: Signal<Vec<(u32, String)>>,
    selected: RwSignal<Vec<u32>>,
) -> impl IntoView {
    view! {
        <div style="margin-bottom: 12px;">
            <label style="display: block; margin-bottom: 6px; font-weight: 600; font-size: 14px;">
                {label}
            </label>
            <div class="d400-chips">
                <For
                    each=move || options.get()
                    key=|(value, _)| *value
                    children=move |(value, name)| {
                        let is_selected = move || selected.with(|s| s.contains(&value));
                        view! {
                            <label class=move || {
                                if is_selected() { "d400-chip d400-chip--selected" } else { "d400-chip" }
                            }>
                                <input
                                    type="checkbox"
                                    prop:checked=is_selected
                                    on:change=move |_| selected.update(|s| toggle(s, value))
                                />
                                {name}
                            </label>
                        }
                    }
                />
            </div>
        </div>
    }
}
