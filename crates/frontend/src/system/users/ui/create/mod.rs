use contracts::system::users::{CreateUserRequest, MIN_PASSWORD_LEN};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};
use thaw::{Button, ButtonAppearance, Input, InputType, Space};

use crate::layout::notifications::use_notifications;
use crate::shared::form_validation::{is_valid_email, required, FieldError, FormErrors};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAccess;
use crate::system::users::api;

const GENERATED_PASSWORD_LEN: usize = 22;

const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewUserForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUserForm {
    /// Name and email are trimmed; the password is sent as typed.
    pub fn validate(&self) -> Result<CreateUserRequest, FormErrors> {
        let mut errors = FormErrors::default();

        let name = required(&self.name).unwrap_or_else(|e| {
            errors.add("name", e);
            String::new()
        });

        let email = self.email.trim().to_string();
        if email.is_empty() {
            errors.add("email", FieldError::Required);
        } else if !is_valid_email(&email) {
            errors.add("email", FieldError::InvalidEmail);
        }

        if self.password.is_empty() {
            errors.add("password", FieldError::Required);
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add("password", FieldError::TooShort(MIN_PASSWORD_LEN));
        }

        errors.into_result(CreateUserRequest {
            name,
            email,
            password: self.password.clone(),
        })
    }
}

/// Random password with at least one upper, lower, digit and special
/// character. `pick(n)` must return an index below `n`.
pub fn generate_password(length: usize, mut pick: impl FnMut(usize) -> usize) -> String {
    let all: Vec<u8> = [UPPER, LOWER, DIGITS, SPECIAL].concat();
    let mut chars: Vec<u8> = [UPPER, LOWER, DIGITS, SPECIAL]
        .iter()
        .map(|set| set[pick(set.len()) % set.len()])
        .collect();
    while chars.len() < length {
        chars.push(all[pick(all.len()) % all.len()]);
    }
    for i in (1..chars.len()).rev() {
        let j = pick(i + 1) % (i + 1);
        chars.swap(i, j);
    }
    chars.into_iter().map(char::from).collect()
}

fn random_index(n: usize) -> usize {
    (js_sys::Math::random() * n as f64) as usize
}

#[component]
pub fn UserCreate() -> impl IntoView {
    let session = use_session();
    let notify = use_notifications();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let saving = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let created = RwSignal::new(false);

    let field_error = move |field: &'static str| {
        move || {
            errors
                .with(|e| e.message(field))
                .map(|m| view! { <div class="form-group__error">{m}</div> })
        }
    };

    let generate = move |_| {
        password.set(generate_password(GENERATED_PASSWORD_LEN, random_index));
        show_password.set(true);
    };

    let save = move |_| {
        let form = NewUserForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                notify.warning("Check the highlighted fields");
                return;
            }
        };
        errors.set(FormErrors::default());
        saving.set(true);

        let token = session.token();
        spawn_local(async move {
            match api::create_user(&request, token.as_deref()).await {
                Ok(()) => {
                    log::info!("user {} created", request.email);
                    notify.success("User created");
                    created.set(true);
                }
                Err(e) => notify.error(format!("Failed to create user: {}", e)),
            }
            saving.set(false);
        });
    };

    let password_type = Signal::derive(move || {
        if show_password.get() {
            InputType::Text
        } else {
            InputType::Password
        }
    });

    view! {
        <Show when=move || created.get()>
            <Redirect path="/users" />
        </Show>
        <RequireAccess path="/users/new">
            <PageFrame page_id="sys_users--create" category=PAGE_CAT_DETAIL>
                <div class="page__header">
                    <div class="page__header-left">
                        <A href="/users">{icon("chevron-left")}" Users"</A>
                        <h1 class="page__title">"Add user"</h1>
                    </div>
                    <div class="page__header-right">
                        <Button appearance=ButtonAppearance::Primary disabled=saving on_click=save>
                            {move || if saving.get() { "Saving..." } else { "Create user" }}
                        </Button>
                    </div>
                </div>
                <div class="page__content">
                    <div class="form-group">
                        <label>"Name"</label>
                        <Input value=name placeholder="Full name" />
                        {field_error("name")}
                    </div>
                    <div class="form-group">
                        <label>"Email"</label>
                        <Input value=email placeholder="user@example.com" />
                        {field_error("email")}
                    </div>
                    <div class="form-group">
                        <label>"Password"</label>
                        <Space>
                            <Input value=password input_type=password_type />
                            <Button appearance=ButtonAppearance::Secondary on_click=generate>
                                "Generate"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </Button>
                        </Space>
                        {field_error("password")}
                    </div>
                </div>
            </PageFrame>
        </RequireAccess>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, password: &str) -> NewUserForm {
        NewUserForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn valid_form_is_trimmed_into_a_request() {
        let request = form("  Ana Silva ", " ana@blog.com ", "secret").validate().unwrap();
        assert_eq!(request.name, "Ana Silva");
        assert_eq!(request.email, "ana@blog.com");
        assert_eq!(request.password, "secret");
    }

    #[test]
    fn every_failing_field_is_reported() {
        let errors = form("  ", "ana@", "12345").validate().unwrap_err();
        assert_eq!(errors.get("name"), Some(&FieldError::Required));
        assert_eq!(errors.get("email"), Some(&FieldError::InvalidEmail));
        assert_eq!(errors.get("password"), Some(&FieldError::TooShort(MIN_PASSWORD_LEN)));

        let errors = form("Ana", "", "").validate().unwrap_err();
        assert_eq!(errors.get("email"), Some(&FieldError::Required));
        assert_eq!(errors.get("password"), Some(&FieldError::Required));
        assert!(errors.get("name").is_none());
    }

    #[test]
    fn six_characters_is_enough() {
        assert!(form("Ana", "ana@blog.com", "abcdef").validate().is_ok());
    }

    #[test]
    fn generated_password_covers_every_class() {
        let mut seed = 7usize;
        let password = generate_password(GENERATED_PASSWORD_LEN, |n| {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (seed >> 8) % n
        });
        assert_eq!(password.len(), GENERATED_PASSWORD_LEN);
        assert!(password.bytes().any(|c| UPPER.contains(&c)));
        assert!(password.bytes().any(|c| LOWER.contains(&c)));
        assert!(password.bytes().any(|c| DIGITS.contains(&c)));
        assert!(password.bytes().any(|c| SPECIAL.contains(&c)));
        assert!(form("Ana", "ana@blog.com", &password).validate().is_ok());
    }

    #[test]
    fn short_length_still_gets_one_of_each() {
        let password = generate_password(2, |_| 0);
        assert_eq!(password.len(), 4);
    }
}
