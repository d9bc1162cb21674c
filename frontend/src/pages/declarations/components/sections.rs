use crate::components::{
    common::{Button, ButtonVariant},
    forms::{DatePicker, SelectField, TextField},
};
use crate::pages::declarations::utils::{
    AddressFormState, DeclarationFormState, HousingLoanFormState, PersonalFormState,
    DEDUCTION_SECTIONS,
};
use leptos::*;

#[component]
fn Section(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <fieldset class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
            <legend class="text-lg font-medium text-fg px-1">{title}</legend>
            {children()}
        </fieldset>
    }
}

#[component]
pub fn PersonalSection(state: PersonalFormState) -> impl IntoView {
    view! {
        <Section title="Personal details">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                <TextField label="Employee ID" value=state.employee_id required=true />
                <TextField label="Employee name" value=state.employee_name />
                <TextField label="PAN" value=state.pan placeholder="ABCDE1234F" />
                <TextField label="Financial year" value=state.financial_year placeholder="2024-25" />
                <DatePicker value=state.date_of_birth label=Some("Date of birth") />
            </div>
        </Section>
    }
}

#[component]
pub fn AddressSection(state: AddressFormState) -> impl IntoView {
    view! {
        <Section title="Address">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                <TextField label="Line 1" value=state.line1 />
                <TextField label="Line 2" value=state.line2 />
                <TextField label="City" value=state.city />
                <TextField label="State" value=state.state />
                <TextField label="Postal code" value=state.postal_code />
            </div>
        </Section>
    }
}

#[component]
pub fn DeductionsSection(form: DeclarationFormState) -> impl IntoView {
    let sections: Vec<(&'static str, &'static str)> =
        DEDUCTION_SECTIONS.iter().map(|s| (*s, *s)).collect();
    view! {
        <Section title="Deductions">
            <For
                each=move || form.deductions().get()
                key=|row| row.id
                children=move |row| {
                    let mut options = vec![("", "Select section")];
                    options.extend(sections.iter().copied());
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-4 gap-3 items-end" data-deduction-row="true">
                            <SelectField label="Section" value=row.section options=options />
                            <TextField label="Description" value=row.description />
                            <TextField label="Amount" value=row.amount input_type="text" />
                            <Button
                                variant=ButtonVariant::Secondary
                                on:click=move |_| form.remove_deduction(row.id)
                            >
                                "Remove"
                            </Button>
                        </div>
                    }
                }
            />
            <Button variant=ButtonVariant::Secondary on:click=move |_| form.add_deduction()>
                "Add deduction"
            </Button>
        </Section>
    }
}

#[component]
pub fn HousingLoanSection(state: HousingLoanFormState) -> impl IntoView {
    view! {
        <Section title="Housing loan">
            <p class="text-sm text-fg-muted">"Leave blank if there is no housing loan."</p>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                <TextField label="Lender name" value=state.lender_name />
                <TextField label="Principal" value=state.principal />
                <TextField label="Interest" value=state.interest />
                <DatePicker value=state.possession_date label=Some("Possession date") />
            </div>
        </Section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn deduction_rows_follow_form_state() {
        let html = render_to_string(move || {
            let form = DeclarationFormState::default();
            form.add_deduction();
            form.add_deduction();
            view! { <DeductionsSection form=form /> }
        });
        assert_eq!(html.matches("data-deduction-row").count(), 2);
        assert!(html.contains("80TTA"));
    }
}
