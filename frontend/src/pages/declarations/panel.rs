use crate::components::{
    common::{Button, ButtonVariant},
    error::InlineErrorMessage,
    forms::TextField,
    layout::{Layout, LoadingSpinner, PageTitle},
};
use crate::pages::declarations::{
    components::sections::{AddressSection, DeductionsSection, HousingLoanSection, PersonalSection},
    view_model::{use_declaration_view_model, DeclarationStatus},
};
use leptos::*;

#[component]
pub fn DeclarationsPage() -> impl IntoView {
    let vm = use_declaration_view_model();
    let loading: Signal<bool> = vm.loading.into();
    let submitting: Signal<bool> = vm.submitting.into();
    let status_note = move || match vm.status.get() {
        DeclarationStatus::NotLoaded => "Load an employee to view or edit their declaration.",
        DeclarationStatus::Existing => "Editing the declaration on file.",
        DeclarationStatus::New => "No declaration on file. Fill in the form to create one.",
    };

    view! {
        <Layout>
            <PageTitle title="Tax declaration" />
            <div class="flex flex-col gap-2 md:flex-row md:items-end mb-4">
                <TextField label="Employee ID" value=vm.lookup />
                <Button
                    variant=ButtonVariant::Secondary
                    loading=loading
                    on:click=move |_| vm.load()
                >
                    "Load"
                </Button>
            </div>
            <p class="text-sm text-fg-muted mb-2">{status_note}</p>
            <InlineErrorMessage error=vm.error.into() />
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                <div class="space-y-4">
                    <PersonalSection state=vm.form.personal />
                    <AddressSection state=vm.form.address />
                    <DeductionsSection form=vm.form />
                    <HousingLoanSection state=vm.form.housing_loan />
                    <Button loading=submitting on:click=move |_| vm.submit()>
                        "Submit declaration"
                    </Button>
                </div>
            </Show>
        </Layout>
    }
}
