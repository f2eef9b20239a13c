use leptos::prelude::*;
use leptos_router::components::Router;

use crate::layout::notifications::{NotificationHost, NotificationService};
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    // Notifications are raised from every screen, the sign-in form included.
    provide_context(NotificationService::new());

    view! {
        <SessionProvider>
            <Router>
                <AppRoutes />
            </Router>
            <NotificationHost />
        </SessionProvider>
    }
}
