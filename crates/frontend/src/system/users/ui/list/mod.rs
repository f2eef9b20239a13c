use contracts::system::users::{User, UserRole, ROLE_OPTIONS, USER_STATUSES};
use leptos::prelude::*;

use crate::shared::components::cell_renderers::{status_badge, thumbnail};
use crate::shared::data_table::{ColumnDescriptor, DataTable, EditKind, TableFeatures, TableResource};
use crate::system::auth::guard::RequireAccess;

pub const RESOURCE: TableResource = TableResource {
    list_path: "/user/all_users",
    items_key: "users",
    update_path: Some("/user/update"),
    id_field: "user_id",
    delete_path: Some("/user/delete_users"),
    delete_ids_field: "user_ids",
    export_table: "user",
    export_title: "Users",
    detail_route: None,
};

fn columns() -> Vec<ColumnDescriptor<User>> {
    vec![
        ColumnDescriptor::new("image_user", "Photo")
            .skip_export()
            .render(|u: User| thumbnail(u.image_user, u.name)),
        ColumnDescriptor::new("name", "Name")
            .sortable()
            .editable(EditKind::Text),
        ColumnDescriptor::new("email", "Email").sortable(),
        ColumnDescriptor::new("role", "Role").editable(EditKind::Select(&ROLE_OPTIONS)),
        ColumnDescriptor::new("status", "Status")
            .editable(EditKind::Select(&USER_STATUSES))
            .render(|u: User| status_badge(u.status)),
        ColumnDescriptor::new("created_at", "Created at").sortable(),
    ]
}

/// Super admin accounts are kept out of the list so they can not be demoted
/// or disabled inline.
fn is_protected(user: &User) -> bool {
    user.role == UserRole::SuperAdmin
}

const HIDDEN_ROWS: fn(&User) -> bool = is_protected;

#[component]
pub fn UsersList() -> impl IntoView {
    view! {
        <RequireAccess path="/users">
            <DataTable
                title="Users"
                page_id="sys_users--list"
                resource=RESOURCE
                columns=columns()
                features=TableFeatures::default()
                search_placeholder="Search users..."
                hide_row=HIDDEN_ROWS
            />
        </RequireAccess>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> User {
        User {
            id: "u1".to_string(),
            name: "Ana".to_string(),
            email: "ana@blog.com".to_string(),
            role,
            status: "Disponivel".to_string(),
            image_user: None,
            created_at: String::new(),
        }
    }

    #[test]
    fn super_admins_are_hidden_from_the_list() {
        assert!(is_protected(&user(UserRole::SuperAdmin)));
        assert!(!is_protected(&user(UserRole::Admin)));
        assert!(!is_protected(&user(UserRole::Employee)));
    }
}
