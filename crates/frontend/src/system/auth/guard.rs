use contracts::system::users::UserRole;
use leptos::prelude::*;

use super::context::use_session;

/// Screens limited to specific roles. Every other screen is open to any
/// signed-in user.
const RESTRICTED_ROUTES: &[(&str, &[UserRole])] = &[
    ("/users", &[UserRole::SuperAdmin]),
    ("/users/new", &[UserRole::SuperAdmin]),
];

pub fn can_access(role: Option<UserRole>, path: &str) -> bool {
    match RESTRICTED_ROUTES.iter().find(|(route, _)| *route == path) {
        Some((_, roles)) => role.is_some_and(|r| roles.contains(&r)),
        None => true,
    }
}

/// Renders `children` only when the current role may open `path`.
#[component]
pub fn RequireAccess(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    move || {
        if session.is_loading() {
            view! { <div class="loading">"Loading..."</div> }.into_any()
        } else if can_access(session.role(), path) {
            children().into_any()
        } else {
            view! {
                <div class="access-denied">
                    "Access denied. You do not have permission to open this page."
                </div>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_screen_is_super_admin_only() {
        assert!(can_access(Some(UserRole::SuperAdmin), "/users"));
        assert!(!can_access(Some(UserRole::Admin), "/users"));
        assert!(!can_access(Some(UserRole::Employee), "/users"));
        assert!(!can_access(None, "/users"));
    }

    #[test]
    fn creating_users_is_super_admin_only() {
        assert!(can_access(Some(UserRole::SuperAdmin), "/users/new"));
        assert!(!can_access(Some(UserRole::Admin), "/users/new"));
        assert!(!can_access(None, "/users/new"));
    }

    #[test]
    fn content_screens_are_open_to_every_role() {
        for role in UserRole::ALL {
            assert!(can_access(Some(role), "/categories"));
            assert!(can_access(Some(role), "/comments"));
        }
        assert!(can_access(None, "/categories"));
    }
}
