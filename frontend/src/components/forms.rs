use chrono::{Datelike, NaiveDate};
use leptos::*;
use wasm_bindgen::JsCast;

const INPUT_CLASS: &str = "w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus disabled:opacity-50";

/// Empty input is "not provided"; anything else must be `YYYY-MM-DD`.
pub fn parse_date_input(value: &str, field: &str) -> Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("{} must be a date in YYYY-MM-DD format.", field))
}

/// Empty input is "not provided"; anything else must be a non-negative
/// number.
pub fn parse_amount_input(value: &str, field: &str) -> Result<Option<f64>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.replace(',', "").parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(Some(amount)),
        _ => Err(format!("{} must be a non-negative number.", field)),
    }
}

pub fn format_date_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="flex flex-col gap-1 text-sm text-fg-muted">
            <span class="font-medium">
                {label}
                {required.then(|| view! { <span class="text-status-error-text">" *"</span> })}
            </span>
            <input
                type=input_type
                class=INPUT_CLASS
                placeholder=placeholder
                required=required
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = 3)] rows: u32,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="flex flex-col gap-1 text-sm text-fg-muted">
            <span class="font-medium">
                {label}
                {required.then(|| view! { <span class="text-status-error-text">" *"</span> })}
            </span>
            <textarea
                class=INPUT_CLASS
                rows=rows
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <label class="flex flex-col gap-1 text-sm text-fg-muted">
            <span class="font-medium">{label}</span>
            <select
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option, text)| view! { <option value=option>{text}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Native date input behind a readable label; clicking opens the browser
/// picker where `showPicker` exists.
#[component]
pub fn DatePicker(
    #[prop(into)] value: RwSignal<String>,
    label: Option<&'static str>,
    #[prop(optional)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();

    let display_value = move || {
        let val = value.get();
        if val.is_empty() {
            return "Select a date".to_string();
        }
        match NaiveDate::parse_from_str(&val, "%Y-%m-%d") {
            Ok(date) => format!("{} ({})", date.format("%d %b %Y"), date.weekday()),
            Err(_) => val,
        }
    };

    let on_click = move |_| {
        if disabled.get() {
            return;
        }
        if let Some(input) = input_ref.get() {
            let _ = js_sys::Reflect::get(&input, &"showPicker".into()).map(|f| {
                if f.is_function() {
                    let _ = js_sys::Reflect::apply(
                        &f.unchecked_into::<js_sys::Function>(),
                        &input,
                        &js_sys::Array::new(),
                    );
                }
            });
            let _ = input.focus();
        }
    };

    view! {
        <div class="flex flex-col gap-1 w-full">
            {label.map(|l| view! { <label class="text-sm font-medium text-fg-muted">{l}</label> })}
            <div
                class=move || format!(
                    "relative cursor-pointer rounded-md border bg-form-control-bg py-2 px-3 flex items-center justify-between border-form-control-border {}",
                    if disabled.get() { "opacity-50 cursor-not-allowed" } else { "hover:border-action-primary-border-hover" }
                )
                on:click=on_click
            >
                <span class=move || format!(
                    "text-sm {}",
                    if value.get().is_empty() { "text-fg-muted" } else { "text-fg" }
                )>
                    {display_value}
                </span>
                <input
                    type="date"
                    node_ref=input_ref
                    class="absolute inset-0 w-full h-full opacity-0 pointer-events-none"
                    disabled=disabled
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        </div>
    }
}
