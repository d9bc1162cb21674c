use crate::components::layout::{Layout, PageTitle, NAV_LINKS};
use leptos::*;

fn blurb(href: &str) -> &'static str {
    match href {
        "/approvals" => "Review leave, comp-off, vendor meeting and revert requests.",
        "/attendance" => "Punch in or out and look back over your attendance.",
        "/leave" => "Apply for leave or comp-off and request reverts.",
        "/documents" => "Browse shared documents and upload new ones.",
        "/declarations" => "Keep your tax declaration up to date.",
        "/directory" => "Find colleagues by name, role or department.",
        "/holidays" => "This year's holiday calendar.",
        "/payroll" => "Monthly payroll and payslips.",
        "/announcements" => "Company news and notices.",
        _ => "",
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <PageTitle title="Welcome" />
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                {NAV_LINKS
                    .iter()
                    .filter(|(href, _)| *href != "/")
                    .map(|(href, label)| view! {
                        <a
                            href=*href
                            class="block bg-surface-elevated shadow rounded-lg p-4 hover:bg-action-ghost-bg-hover"
                        >
                            <h3 class="text-lg font-semibold text-fg">{*label}</h3>
                            <p class="mt-1 text-sm text-fg-muted">{blurb(href)}</p>
                        </a>
                    })
                    .collect_view()}
            </div>
        </Layout>
    }
}
