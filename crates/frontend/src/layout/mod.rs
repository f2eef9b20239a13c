pub mod left;
pub mod notifications;
pub mod top_header;

use leptos::prelude::*;

use left::sidebar::Sidebar;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |      Content     |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let sidebar_open = RwSignal::new(true);

    view! {
        <div class="app-layout">
            <TopHeader sidebar_open=sidebar_open />
            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !sidebar_open.get()>
                    <Sidebar />
                </div>
                <div class="app-main">
                    {children()}
                </div>
            </div>
        </div>
    }
}
