//! Navigation menu. Entries the signed-in role may not open are hidden.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::can_access;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU: &[MenuItem] = &[
    MenuItem { path: "/categories", label: "Categories", icon: "categories" },
    MenuItem { path: "/categories/tree", label: "Category tree", icon: "tree" },
    MenuItem { path: "/comments", label: "Comments", icon: "comments" },
    MenuItem { path: "/contacts", label: "Contacts", icon: "contacts" },
    MenuItem { path: "/marketing", label: "Marketing", icon: "marketing" },
    MenuItem { path: "/users", label: "Users", icon: "users" },
    MenuItem { path: "/users/new", label: "Add user", icon: "users" },
];

/// Longest menu path that prefixes the current location.
fn active_item(pathname: &str) -> Option<&'static str> {
    MENU.iter()
        .map(|item| item.path)
        .filter(|path| pathname == *path || pathname.starts_with(&format!("{}/", path)))
        .max_by_key(|path| path.len())
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let active = Memo::new(move |_| active_item(&location.pathname.get()));

    view! {
        <nav class="app-sidebar__content">
            {move || {
                let role = session.role();
                MENU.iter()
                    .filter(|item| can_access(role, item.path))
                    .map(|item| {
                        let path = item.path;
                        view! {
                            <A href=path attr:class="app-sidebar__link">
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || active.get() == Some(path)
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(item.icon)}
                                        <span>{item.label}</span>
                                    </div>
                                </div>
                            </A>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deepest_matching_entry_is_active() {
        assert_eq!(active_item("/categories"), Some("/categories"));
        assert_eq!(active_item("/categories/tree"), Some("/categories/tree"));
        assert_eq!(active_item("/contacts/42"), Some("/contacts"));
        assert_eq!(active_item("/categorieslist"), None);
        assert_eq!(active_item("/"), None);
    }

    #[test]
    fn user_form_has_its_own_entry() {
        assert_eq!(active_item("/users/new"), Some("/users/new"));
        assert_eq!(active_item("/users"), Some("/users"));
        assert_eq!(active_item("/marketing/m1"), Some("/marketing"));
    }
}
