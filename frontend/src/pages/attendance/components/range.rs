use crate::components::{common::{Button, ButtonVariant}, forms::DatePicker};
use leptos::*;

#[component]
pub fn RangeFormSection(
    from_input: RwSignal<String>,
    to_input: RwSignal<String>,
    loading: Signal<bool>,
    range_error: Signal<Option<String>>,
    on_select_current_month: Callback<()>,
    on_load_range: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 flex flex-col gap-3 lg:flex-row lg:items-end">
            <div class="w-full lg:w-48">
                <DatePicker label=Some("From") value=from_input />
            </div>
            <div class="w-full lg:w-48">
                <DatePicker label=Some("To") value=to_input />
            </div>
            <Button variant=ButtonVariant::Secondary on:click=move |_| on_select_current_month.call(())>
                "This month"
            </Button>
            <Button loading=loading on:click=move |_| on_load_range.call(())>
                "Load"
            </Button>
        </div>
        <Show when=move || range_error.get().is_some()>
            <div role="alert" class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2">
                {move || range_error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
