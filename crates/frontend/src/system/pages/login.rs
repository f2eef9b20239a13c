use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::layout::notifications::use_notifications;
use crate::shared::form_validation::is_valid_email;
use crate::system::auth::context::use_session;

/// Both fields are required; the email is trimmed before it is sent.
fn validate_credentials(email: &str, password: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Fill in email and password");
    }
    if !is_valid_email(email) {
        return Err("Enter a valid email address");
    }
    Ok(email.to_string())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();
    let notify = use_notifications();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let password_val = password.get();
        let email_val = match validate_credentials(&email.get(), &password_val) {
            Ok(email) => email,
            Err(message) => {
                set_error_message.set(Some(message.to_string()));
                notify.warning(message);
                return;
            }
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match session.sign_in(email_val, password_val).await {
                Ok(()) => {
                    notify.success("Signed in successfully");
                    navigate("/", Default::default());
                }
                Err(e) => {
                    set_error_message.set(Some(e.to_string()));
                    notify.error(format!("Sign-in failed: {}", e));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Blog CMS"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_rejected_before_sending() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("admin@blog.com", "").is_err());
        assert!(validate_credentials("admin", "secret").is_err());
        assert_eq!(validate_credentials("  admin@blog.com ", "secret").as_deref(), Ok("admin@blog.com"));
    }
}
