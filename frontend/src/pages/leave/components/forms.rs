use crate::api::{ApiError, ApprovalRequest};
use crate::components::{
    common::Button,
    error::InlineErrorMessage,
    forms::{DatePicker, SelectField, TextArea, TextField},
};
use crate::pages::leave::utils::{CompOffFormState, LeaveFormState, RevertFormState, LEAVE_TYPES};
use crate::utils::display::{display_date, display_days, display_or_placeholder};
use leptos::*;

#[component]
fn FormCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
            <h3 class="text-lg font-medium text-fg">{title}</h3>
            {children()}
        </section>
    }
}

#[component]
pub fn LeaveApplyForm(
    state: LeaveFormState,
    error: Signal<Option<ApiError>>,
    submitting: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <FormCard title="Apply for leave">
            <SelectField label="Leave type" value=state.leave_type_signal() options=LEAVE_TYPES.to_vec() />
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                <DatePicker label=Some("From") value=state.start_signal() />
                <DatePicker label=Some("To") value=state.end_signal() />
            </div>
            <TextField label="Number of days" value=state.days_signal() input_type="number" required=true />
            <TextArea label="Reason" value=state.reason_signal() />
            <InlineErrorMessage error=error />
            <Button loading=submitting on:click=move |_| on_submit.call(())>"Submit leave"</Button>
        </FormCard>
    }
}

#[component]
pub fn CompOffForm(
    state: CompOffFormState,
    error: Signal<Option<ApiError>>,
    submitting: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <FormCard title="Apply for comp-off">
            <DatePicker label=Some("Worked on") value=state.worked_signal() />
            <TextField label="Days (0.5 or 1)" value=state.days_signal() input_type="number" required=true />
            <TextArea label="Reason" value=state.reason_signal() />
            <InlineErrorMessage error=error />
            <Button loading=submitting on:click=move |_| on_submit.call(())>"Submit comp-off"</Button>
        </FormCard>
    }
}

fn leave_option_label(leave: &ApprovalRequest) -> String {
    format!(
        "{} · {} to {} ({} days)",
        display_or_placeholder(leave.leave_type.as_deref()),
        display_date(leave.leave_start_date),
        display_date(leave.leave_end_date),
        display_days(leave.total_days),
    )
}

#[component]
pub fn RevertForm(
    state: RevertFormState,
    leaves: Signal<Vec<ApprovalRequest>>,
    error: Signal<Option<ApiError>>,
    submitting: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let selected = state.leave_signal();
    view! {
        <FormCard title="Revert approved leave">
            <label class="flex flex-col gap-1 text-sm text-fg-muted">
                <span class="font-medium">"Leave"</span>
                <select
                    class="w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                    prop:value=move || selected.get()
                    on:change=move |ev| selected.set(event_target_value(&ev))
                >
                    <option value="">"Select approved leave"</option>
                    {move || {
                        leaves
                            .get()
                            .into_iter()
                            .map(|leave| {
                                let label = leave_option_label(&leave);
                                view! { <option value=leave.id>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </label>
            <TextField label="Days to revert" value=state.days_signal() input_type="number" required=true />
            <TextArea label="Reason" value=state.reason_signal() />
            <InlineErrorMessage error=error />
            <Button loading=submitting on:click=move |_| on_submit.call(())>"Request revert"</Button>
        </FormCard>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    #[test]
    fn revert_form_lists_given_leaves() {
        let html = render_to_string(move || {
            let leaves = create_rw_signal(vec![ApprovalRequest {
                id: "l1".into(),
                leave_type: Some("Casual".into()),
                leave_start_date: NaiveDate::from_ymd_opt(2025, 3, 3),
                leave_end_date: NaiveDate::from_ymd_opt(2025, 3, 4),
                total_days: Some(2.0),
                ..ApprovalRequest::default()
            }]);
            let error = create_rw_signal(None::<ApiError>);
            view! {
                <RevertForm
                    state=RevertFormState::default()
                    leaves=leaves.into()
                    error=error.into()
                    submitting=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("value=\"l1\""));
        assert!(html.contains("03 Mar 2025"));
        assert!(html.contains("(2 days)"));
    }

    #[test]
    fn leave_form_offers_every_type() {
        let html = render_to_string(move || {
            let error = create_rw_signal(None::<ApiError>);
            view! {
                <LeaveApplyForm
                    state=LeaveFormState::default()
                    error=error.into()
                    submitting=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        for (_, label) in LEAVE_TYPES {
            assert!(html.contains(label));
        }
    }
}
