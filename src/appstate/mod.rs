use std::{env, sync::Arc};

use crate::{
    authclient::{AuthClient, AuthReqwestClient, BrowserNavigator, Navigator},
    config::{ClientConfig, SESSION_TOKEN_VAR},
    session::SessionStore,
};

#[cfg(test)]
use crate::authclient::{MockAuthClient, MockNavigator};

pub struct AppState<A: AuthClient + Send + Sync, N: Navigator> {
    pub store: SessionStore,
    pub(super) authclient: Arc<A>,
    pub(super) navigator: Arc<N>,
}

impl<A: AuthClient + Send + Sync, N: Navigator> Clone for AppState<A, N> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            authclient: self.authclient.clone(),
            navigator: self.navigator.clone(),
        }
    }
}

impl<A: AuthClient + Send + Sync, N: Navigator> AppState<A, N> {
    pub fn new(store: SessionStore, authclient: A, navigator: N) -> Self {
        Self {
            store,
            authclient: Arc::new(authclient),
            navigator: Arc::new(navigator),
        }
    }

    /// Refreshes the real user from the backend. The outcome is only visible
    /// through the store: no session and failed requests both leave it
    /// without a user. Concurrent calls are not coalesced, whichever response
    /// arrives last wins.
    pub async fn fetch_user(&self) {
        self.store.set_loading(true);

        match self.authclient.get_current_user().await {
            Ok(Some(user)) => {
                log::info!("Current user: {}", user.discord_id);
                self.store.set_user(Some(user));
            }
            Ok(None) => {
                log::info!("Current user: none");
                self.store.set_user(None);
            }
            Err(e) => {
                log::error!("Failed to fetch user: {e:#}");
                self.store.set_user(None);
            }
        }

        self.store.set_loading(false);
    }

    /// Sends the user to the backend's OAuth login.
    pub fn login(&self) {
        let url = self.authclient.login_url();
        log::info!("Opening login page");
        if let Err(e) = self.navigator.navigate(&url) {
            log::error!("Failed to open login page: {e}. Please visit: {url}");
        }
    }

    /// Ends the session. If the request never reaches the backend the user is
    /// kept, the session may well still be alive.
    pub async fn logout(&self) {
        match self.authclient.logout().await {
            Ok(()) => {
                log::info!("Logged out");
                self.store.set_user(None);
            }
            Err(e) => log::error!("Logout failed: {e:#}"),
        }
    }
}

pub fn new_real_appstate() -> Result<AppState<AuthReqwestClient, BrowserNavigator>, anyhow::Error>
{
    let session_token = env::var(SESSION_TOKEN_VAR)
        .ok()
        .filter(|token| !token.trim().is_empty());
    if session_token.is_none() {
        log::info!("{SESSION_TOKEN_VAR} not set, relying on cookies set by the backend");
    }

    new_appstate_with_config(&ClientConfig::from_env()?, session_token.as_deref())
}

pub fn new_appstate_with_config(
    config: &ClientConfig,
    session_token: Option<&str>,
) -> Result<AppState<AuthReqwestClient, BrowserNavigator>, anyhow::Error> {
    let authclient = match session_token {
        Some(token) => AuthReqwestClient::new_with_token(config, token.trim())?,
        None => AuthReqwestClient::new(config)?,
    };

    Ok(AppState::new(
        SessionStore::new(),
        authclient,
        BrowserNavigator::default(),
    ))
}

#[cfg(test)]
pub fn new_testing_appstate(authclient: MockAuthClient) -> AppState<MockAuthClient, MockNavigator> {
    AppState::new(SessionStore::new(), authclient, MockNavigator::default())
}
