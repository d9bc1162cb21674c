use crate::api::ApiError;
use crate::components::{
    common::Button,
    error::InlineErrorMessage,
    forms::{SelectField, TextField},
};
use crate::pages::documents::utils::UploadFormState;
use leptos::*;

#[cfg(target_arch = "wasm32")]
fn on_file_change(state: UploadFormState, ev: leptos::ev::Event) {
    use wasm_bindgen::JsCast;
    let file = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0));
    let Some(file) = file else {
        state.file_signal().set(None);
        return;
    };
    spawn_local(async move {
        match crate::pages::documents::utils::read_file(file).await {
            Ok(selected) => state.file_signal().set(Some(selected)),
            Err(err) => {
                log::error!("{}", err.error);
                state.file_signal().set(None);
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn on_file_change(_state: UploadFormState, _ev: leptos::ev::Event) {}

#[component]
pub fn UploadForm(
    state: UploadFormState,
    error: Signal<Option<ApiError>>,
    uploading: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let file_name = move || {
        state
            .file_signal()
            .with(|file| file.as_ref().map(|f| f.name.clone()))
            .unwrap_or_else(|| "No file chosen".to_string())
    };
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-4 space-y-3 mb-4">
            <h3 class="text-lg font-medium text-fg">"Upload document"</h3>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-3">
                <TextField label="Document name" value=state.name_signal() required=true />
                <SelectField
                    label="Visibility"
                    value=state.doc_type_signal()
                    options=vec![("Private", "Private"), ("Public", "Public")]
                />
                <TextField label="Employee ID" value=state.employee_signal() />
            </div>
            <label class="flex flex-col gap-1 text-sm text-fg-muted">
                <span class="font-medium">"File"<span class="text-status-error-text">" *"</span></span>
                <input type="file" class="text-sm" on:change=move |ev| on_file_change(state, ev) />
                <span class="text-xs">{file_name}</span>
            </label>
            <InlineErrorMessage error=error />
            <Button loading=uploading on:click=move |_| on_submit.call(())>"Upload"</Button>
        </section>
    }
}
