use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::toast::ToastHost,
    pages::{
        announcements::AnnouncementsPage, approvals::ApprovalsPage, attendance::AttendancePage,
        declarations::DeclarationsPage, directory::DirectoryPage, documents::DocumentsPage,
        holidays::HolidaysPage, home::HomePage, leave::LeavePage, payroll::PayrollPage,
    },
    state::toast::provide_toasts,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/approvals",
    "/attendance",
    "/leave",
    "/documents",
    "/declarations",
    "/directory",
    "/holidays",
    "/payroll",
    "/announcements",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_toasts();
    view! {
        <Title text="HRMS" />
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/approvals" view=ApprovalsPage/>
                <Route path="/attendance" view=AttendancePage/>
                <Route path="/leave" view=LeavePage/>
                <Route path="/documents" view=DocumentsPage/>
                <Route path="/declarations" view=DeclarationsPage/>
                <Route path="/directory" view=DirectoryPage/>
                <Route path="/holidays" view=HolidaysPage/>
                <Route path="/payroll" view=PayrollPage/>
                <Route path="/announcements" view=AnnouncementsPage/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </Router>
        <ToastHost />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <crate::components::layout::Layout>
            <crate::components::empty_state::EmptyState
                title="Page not found"
                description="Use the navigation above to find what you need."
            />
        </crate::components::layout::Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::NAV_LINKS;
    use std::collections::HashSet;

    #[test]
    fn every_nav_link_has_a_route() {
        let routes: HashSet<_> = ROUTE_PATHS.iter().copied().collect();
        for (href, _) in NAV_LINKS {
            assert!(routes.contains(href), "no route for {}", href);
        }
        assert_eq!(routes.len(), ROUTE_PATHS.len());
    }
}
