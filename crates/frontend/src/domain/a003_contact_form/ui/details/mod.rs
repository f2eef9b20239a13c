use contracts::domain::a003_contact_form::ContactForm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::domain::a003_contact_form::api;
use crate::layout::notifications::use_notifications;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::system::auth::context::use_session;

#[component]
pub fn ContactFormDetails() -> impl IntoView {
    let params = use_params_map();
    let session = use_session();
    let notify = use_notifications();

    let contact: RwSignal<Option<ContactForm>> = RwSignal::new(None);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let Some(id) = params.with(|p| p.get("id")) else {
            set_loading.set(false);
            return;
        };
        let token = session.token();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_contact(&id, token.as_deref()).await {
                Ok(c) => contact.set(Some(c)),
                Err(e) => {
                    contact.set(None);
                    notify.error(format!("Failed to load contact: {}", e));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <PageFrame page_id="a003_contact_form--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <A href="/contacts">{icon("chevron-left")}" Contacts"</A>
                    <h1 class="page__title">"Contact"</h1>
                </div>
            </div>
            <div class="page__content">
                {move || match contact.get() {
                    Some(c) => view! {
                        <dl class="detail-list">
                            <dt>"Name"</dt>
                            <dd>{c.name_user}</dd>
                            <dt>"Email"</dt>
                            <dd><a href=format!("mailto:{}", c.email_user)>{c.email_user.clone()}</a></dd>
                            <dt>"Subject"</dt>
                            <dd>{c.subject.unwrap_or_default()}</dd>
                            <dt>"Received at"</dt>
                            <dd>{format_datetime(&c.created_at)}</dd>
                        </dl>
                        <div class="detail-message">{c.message.unwrap_or_default()}</div>
                    }
                    .into_any(),
                    None if loading.get() => view! { <p class="table__empty">"Loading..."</p> }.into_any(),
                    None => view! { <p class="table__empty">"Contact not found"</p> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
