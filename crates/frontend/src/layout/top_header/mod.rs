//! Top bar: sidebar toggle, brand, signed-in user and sign-out.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::layout::notifications::use_notifications;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn TopHeader(sidebar_open: RwSignal<bool>) -> impl IntoView {
    let session = use_session();
    let notify = use_notifications();
    let navigate = use_navigate();

    let sign_out = move |_| {
        session.sign_out();
        notify.success("Signed out");
        navigate("/login", Default::default());
    };

    let user_name = move || session.user().map(|u| u.name).unwrap_or_default();
    let role_label = move || session.role().map(|r| r.as_str()).unwrap_or_default();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| sidebar_open.update(|open| *open = !*open)
                    title=move || if sidebar_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Blog CMS"</span>
            </div>
            <div class="top-header__actions">
                <span class="top-header__user">{user_name}</span>
                <span class="top-header__role">{role_label}</span>
                <button class="top-header__icon-btn" on:click=sign_out title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
