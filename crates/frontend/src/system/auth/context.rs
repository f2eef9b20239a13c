use contracts::system::auth::UserInfo;
use contracts::system::users::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_utils::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub user: Option<UserInfo>,
    pub loading: bool,
}

/// Signed-in user and bearer token, provided through context.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Restores a session from the cookies and reloads the profile.
    pub fn init(&self) {
        let Some((token, user_id)) = storage::load_session() else {
            log::debug!("no stored session");
            return;
        };
        self.state.set(SessionState {
            token: Some(token.clone()),
            user_id: user_id.clone(),
            user: None,
            loading: user_id.is_some(),
        });
        if let Some(user_id) = user_id {
            self.load_profile(user_id, token);
        }
    }

    fn load_profile(&self, user_id: String, token: String) {
        let state = self.state;
        let session = *self;
        spawn_local(async move {
            match api::fetch_me(&user_id, &token).await {
                Ok(user) => state.update(|s| {
                    s.user = Some(user);
                    s.loading = false;
                }),
                Err(ApiError::Rejected { status: 401 | 403, .. }) => {
                    log::warn!("stored session was rejected, signing out");
                    session.sign_out();
                }
                Err(e) => {
                    log::error!("failed to load user profile: {}", e);
                    state.update(|s| s.loading = false);
                }
            }
        });
    }

    pub async fn sign_in(&self, email: String, password: String) -> Result<(), ApiError> {
        self.state.update(|s| s.loading = true);
        let response = match api::sign_in(email.clone(), password).await {
            Ok(response) => response,
            Err(e) => {
                self.state.update(|s| s.loading = false);
                return Err(e);
            }
        };
        storage::save_session(&response.token, &response.id);
        log::info!("signed in as {}", response.id);
        self.state.set(SessionState {
            token: Some(response.token.clone()),
            user_id: Some(response.id.clone()),
            user: Some(UserInfo {
                id: response.id.clone(),
                name: response.name,
                email,
                image_user: None,
                role: None,
            }),
            loading: true,
        });
        self.load_profile(response.id, response.token);
        Ok(())
    }

    pub fn sign_out(&self) {
        storage::clear_session();
        self.state.set(SessionState::default());
    }

    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }

    pub fn user_id(&self) -> Option<String> {
        self.state.with_untracked(|s| s.user_id.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.token.is_some())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.with(|s| s.user.clone())
    }

    pub fn role(&self) -> Option<UserRole> {
        self.state.with(|s| s.user.as_ref().and_then(|u| u.role))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = Session::new();
    session.init();
    provide_context(session);

    children()
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("SessionProvider not found in component tree")
}
