use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    Employee,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::SuperAdmin, UserRole::Admin, UserRole::Employee];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "SUPER_ADMIN",
            UserRole::Admin => "ADMIN",
            UserRole::Employee => "EMPLOYEE",
        }
    }
}

pub const USER_STATUSES: [&str; 2] = ["Disponivel", "Indisponivel"];
pub const ROLE_OPTIONS: [&str; 3] = ["SUPER_ADMIN", "ADMIN", "EMPLOYEE"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub image_user: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Shortest password `POST /user/create` accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Body of `POST /user/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_names() {
        for role in UserRole::ALL {
            let json = serde_json::to_value(role).unwrap();
            assert_eq!(json, serde_json::Value::String(role.as_str().to_string()));
        }
        for name in ROLE_OPTIONS {
            assert!(serde_json::from_value::<UserRole>(serde_json::json!(name)).is_ok());
        }
    }
}
