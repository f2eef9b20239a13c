use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a001_category::ui::tree::CategoryTree;
use crate::domain::a002_comment::ui::list::CommentList;
use crate::domain::a003_contact_form::ui::details::ContactFormDetails;
use crate::domain::a003_contact_form::ui::list::ContactFormList;
use crate::domain::a004_marketing_publication::ui::details::MarketingPublicationDetails;
use crate::domain::a004_marketing_publication::ui::list::MarketingPublicationList;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;
use crate::system::users::ui::create::UserCreate;
use crate::system::users::ui::list::UsersList;

#[component]
fn NotFound() -> impl IntoView {
    view! { <div class="page page--empty">"Page not found"</div> }
}

/// Signed-out visitors see the sign-in form whatever the URL.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=CategoryList />
                    <Route path=path!("/categories") view=CategoryList />
                    <Route path=path!("/categories/tree") view=CategoryTree />
                    <Route path=path!("/comments") view=CommentList />
                    <Route path=path!("/contacts") view=ContactFormList />
                    <Route path=path!("/contacts/:id") view=ContactFormDetails />
                    <Route path=path!("/marketing") view=MarketingPublicationList />
                    <Route path=path!("/marketing/:id") view=MarketingPublicationDetails />
                    <Route path=path!("/users") view=UsersList />
                    <Route path=path!("/users/new") view=UserCreate />
                    <Route path=path!("/login") view=|| view! { <Redirect path="/" /> } />
                </Routes>
            </Shell>
        </Show>
    }
}
